use async_graphql::{Context, Error, Object, Result};
use uuid::Uuid;

use infra::repos::{FollowRepo, ProfileRepo};
use infra::username::validate_username;

use crate::gql::subscriptions::publish_follow_event;
use crate::gql::types::{FollowEvent, FollowPayload, Profile, SetUsernameInput, ToggleFollowInput};
use crate::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Follow or unfollow a profile; the edge flips on each call.
    async fn toggle_follow(
        &self,
        ctx: &Context<'_>,
        input: ToggleFollowInput,
    ) -> Result<FollowPayload> {
        let follower = parse_uuid(&input.user_id, "user_id")?;
        let followee = parse_uuid(&input.profile_id, "profile_id")?;
        if follower == followee {
            return Err(Error::new("Cannot follow yourself"));
        }

        let state = ctx.data::<AppState>()?;
        let profiles = ProfileRepo::new(state.db.clone());
        if profiles.get(followee).await?.is_none() {
            return Err(Error::new("Profile not found"));
        }

        let follows = FollowRepo::new(state.db.clone());
        let following = follows.toggle(follower, followee).await?;
        let follower_count = follows.count_followers(followee).await?;

        publish_follow_event(FollowEvent {
            follower_id: follower.into(),
            followee_id: followee.into(),
            following,
        });

        Ok(FollowPayload {
            profile_id: followee.into(),
            following,
            follower_count,
        })
    }

    /// Claim a username for a profile. Input is sanitized and validated;
    /// validation errors carry the product-facing message.
    async fn set_username(&self, ctx: &Context<'_>, input: SetUsernameInput) -> Result<Profile> {
        let user_id = parse_uuid(&input.user_id, "user_id")?;
        let normalized = validate_username(&input.username).map_err(|e| Error::new(e.to_string()))?;

        let state = ctx.data::<AppState>()?;
        let profiles = ProfileRepo::new(state.db.clone());
        if profiles.username_taken(&normalized, user_id).await? {
            return Err(Error::new(format!(
                "Username {normalized} já está a ser usado"
            )));
        }

        let Some(row) = profiles.set_username(user_id, &normalized).await? else {
            return Err(Error::new("Profile not found"));
        };

        let follows = FollowRepo::new(state.db.clone());
        let followers = follows.count_followers(row.id).await?;
        let following = follows.count_following(row.id).await?;
        Ok(Profile::from_row(row, followers, following))
    }
}

fn parse_uuid(id: &async_graphql::ID, field: &str) -> Result<Uuid> {
    Uuid::parse_str(id.as_str()).map_err(|e| Error::new(format!("Invalid {field}: {e}")))
}
