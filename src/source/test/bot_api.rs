use std::collections::HashMap;

use super::*;

/// Builds a guild list page with sequential ids starting at `start`.
fn guild_page(start: u64, len: u64) -> serde_json::Value {
    let guilds: Vec<serde_json::Value> = (start..start + len)
        .map(|id| json!({ "id": id.to_string(), "name": format!("Guild {}", id) }))
        .collect();
    json!(guilds)
}

fn source_for(server: &MockServer, bot_id: &str, token: &str) -> BotApiSource {
    let tokens = HashMap::from([(bot_id.to_string(), token.to_string())]);
    BotApiSource::new(http_client(), server.base_url(), tokens)
}

/// Tests pagination across three pages of sizes [100, 100, 37].
///
/// Expected: Ok(237), terminating on the short page
#[tokio::test]
async fn sums_pages_until_short_page() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/@me/guilds")
                .header("Authorization", "Bot tok")
                .query_param("limit", "100")
                .query_param("after", "0");
            then.status(200).json_body(guild_page(1, 100));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/@me/guilds")
                .query_param("after", "100");
            then.status(200).json_body(guild_page(101, 100));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/@me/guilds")
                .query_param("after", "200");
            then.status(200).json_body(guild_page(201, 37));
        })
        .await;

    let source = source_for(&server, "123", "tok");
    let count = source.resolve("123").await.unwrap();

    assert_eq!(count, 237);
}

/// Tests pagination terminating on an empty page after full pages.
///
/// Expected: Ok(300) for page sizes [100, 100, 100, 0]
#[tokio::test]
async fn terminates_on_empty_page() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/@me/guilds")
                .query_param("after", "0");
            then.status(200).json_body(guild_page(1, 100));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/@me/guilds")
                .query_param("after", "100");
            then.status(200).json_body(guild_page(101, 100));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/@me/guilds")
                .query_param("after", "200");
            then.status(200).json_body(guild_page(201, 100));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/@me/guilds")
                .query_param("after", "300");
            then.status(200).json_body(json!([]));
        })
        .await;

    let source = source_for(&server, "123", "tok");
    let count = source.resolve("123").await.unwrap();

    assert_eq!(count, 300);
}

/// Tests a single page shorter than the page size.
///
/// Expected: Ok(3) with no follow-up request for the next cursor
#[tokio::test]
async fn single_short_page_needs_no_cursor() {
    let server = MockServer::start_async().await;
    let follow_up = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/@me/guilds")
                .query_param("after", "3");
            then.status(200).json_body(json!([]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/@me/guilds")
                .query_param("after", "0");
            then.status(200).json_body(guild_page(1, 3));
        })
        .await;

    let source = source_for(&server, "123", "tok");
    let count = source.resolve("123").await.unwrap();

    assert_eq!(count, 3);
    assert_eq!(follow_up.hits_async().await, 0);
}

/// Tests a mid-pagination page error.
///
/// Expected: Err(Status) with no partial total reported
#[tokio::test]
async fn page_error_fails_whole_attempt() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/@me/guilds")
                .query_param("after", "0");
            then.status(200).json_body(guild_page(1, 100));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/users/@me/guilds")
                .query_param("after", "100");
            then.status(500);
        })
        .await;

    let source = source_for(&server, "123", "tok");
    let result = source.resolve("123").await;

    assert!(matches!(result, Err(SourceError::Status(status)) if status.as_u16() == 500));
}

/// Tests a first-page authentication failure.
///
/// Expected: Err(Status) carrying the 401
#[tokio::test]
async fn fails_on_rejected_token() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/@me/guilds");
            then.status(401)
                .json_body(json!({ "message": "401: Unauthorized" }));
        })
        .await;

    let source = source_for(&server, "123", "bad-tok");
    let result = source.resolve("123").await;

    assert!(matches!(result, Err(SourceError::Status(status)) if status.as_u16() == 401));
}

/// Tests availability gating on the per-bot token map.
///
/// Expected: available only for bots with a configured token
#[test]
fn available_only_with_token() {
    let tokens = HashMap::from([("123".to_string(), "tok".to_string())]);
    let source = BotApiSource::new(http_client(), "http://localhost".to_string(), tokens);

    assert!(source.available("123"));
    assert!(!source.available("456"));
}
