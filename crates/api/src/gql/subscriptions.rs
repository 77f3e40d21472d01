use std::sync::{Arc, Mutex};

use async_graphql::{Result, Subscription};
use futures_util::Stream;
use once_cell::sync::Lazy;
use tokio::sync::broadcast;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};

use crate::gql::types::FollowEvent;

static FOLLOW_BROADCASTER: Lazy<Arc<Mutex<broadcast::Sender<FollowEvent>>>> = Lazy::new(|| {
    let (tx, _) = broadcast::channel(1000);
    Arc::new(Mutex::new(tx))
});

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Live follow/unfollow activity across all profiles.
    async fn profile_follows(
        &self,
    ) -> impl Stream<Item = Result<FollowEvent, BroadcastStreamRecvError>> {
        let receiver = FOLLOW_BROADCASTER.lock().unwrap().subscribe();
        BroadcastStream::new(receiver)
    }
}

pub fn publish_follow_event(event: FollowEvent) {
    if let Ok(sender) = FOLLOW_BROADCASTER.lock() {
        let _ = sender.send(event);
    }
}
