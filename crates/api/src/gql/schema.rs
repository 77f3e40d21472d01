use async_graphql::dataloader::DataLoader;
use async_graphql::Schema;

use super::loaders::OrganizerLoader;
use super::{MutationRoot, QueryRoot, SubscriptionRoot};
use crate::state::AppState;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> Schema<QueryRoot, MutationRoot, SubscriptionRoot> {
    let organizer_loader = DataLoader::new(OrganizerLoader::new(state.db.clone()), tokio::spawn);

    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(state)
        .data(organizer_loader)
        .finish()
}
