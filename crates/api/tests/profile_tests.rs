mod common;

use api::gql::build_schema;
use async_graphql::Variables;
use common::*;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn toggle_follow_flips_and_counts() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let target = create_test_profile(&app_state, None).await;
    let follower = create_test_profile(&app_state, None).await;

    let mutation = r#"
        mutation Follow($input: ToggleFollowInput!) {
            toggleFollow(input: $input) {
                following
                followerCount
            }
        }
    "#;

    let variables = Variables::from_json(json!({
        "input": { "profileId": target.to_string(), "userId": follower.to_string() }
    }));

    let response = execute_graphql(&schema, mutation, Some(variables.clone())).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["toggleFollow"]["following"], true);
    assert_eq!(data["toggleFollow"]["followerCount"], 1);

    // Toggling again removes the follow.
    let response = execute_graphql(&schema, mutation, Some(variables)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["toggleFollow"]["following"], false);
    assert_eq!(data["toggleFollow"]["followerCount"], 0);
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn self_follow_is_rejected() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let profile = create_test_profile(&app_state, None).await;

    let mutation = r#"
        mutation Follow($input: ToggleFollowInput!) {
            toggleFollow(input: $input) { following }
        }
    "#;

    let variables = Variables::from_json(json!({
        "input": { "profileId": profile.to_string(), "userId": profile.to_string() }
    }));

    let response = execute_graphql(&schema, mutation, Some(variables)).await;
    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("Cannot follow yourself"));
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn set_username_normalizes_and_persists() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let profile = create_test_profile(&app_state, None).await;

    let mutation = r#"
        mutation SetUsername($input: SetUsernameInput!) {
            setUsername(input: $input) { username }
        }
    "#;

    let variables = Variables::from_json(json!({
        "input": { "userId": profile.to_string(), "username": "João.Silva" }
    }));

    let response = execute_graphql(&schema, mutation, Some(variables)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["setUsername"]["username"], "joao.silva");
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn set_username_rejects_invalid_input() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let profile = create_test_profile(&app_state, None).await;

    let mutation = r#"
        mutation SetUsername($input: SetUsernameInput!) {
            setUsername(input: $input) { username }
        }
    "#;

    let variables = Variables::from_json(json!({
        "input": { "userId": profile.to_string(), "username": "ab" }
    }));

    let response = execute_graphql(&schema, mutation, Some(variables)).await;
    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("username entre 3 e 30"));
}

#[tokio::test]
#[ignore = "requires a running Postgres (TEST_DATABASE_URL)"]
async fn profile_query_returns_follow_counts() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state.clone());

    let username = format!("perfil{}", uuid::Uuid::new_v4().simple());
    let username = &username[..16];
    let target = create_test_profile(&app_state, Some(username)).await;
    let follower = create_test_profile(&app_state, None).await;

    let mutation = r#"
        mutation Follow($input: ToggleFollowInput!) {
            toggleFollow(input: $input) { following }
        }
    "#;
    let variables = Variables::from_json(json!({
        "input": { "profileId": target.to_string(), "userId": follower.to_string() }
    }));
    let response = execute_graphql(&schema, mutation, Some(variables)).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let query = r#"
        query Profile($username: String!) {
            profile(username: $username) {
                username
                followers
                following
            }
        }
    "#;
    let variables = Variables::from_json(json!({ "username": username }));
    let response = execute_graphql(&schema, query, Some(variables)).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["profile"]["username"], *username);
    assert_eq!(data["profile"]["followers"], 1);
    assert_eq!(data["profile"]["following"], 0);
}
