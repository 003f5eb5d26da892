use super::*;
use crate::model::report::NotificationPayload;

fn report_service(server: &MockServer, config: Config) -> ReportService {
    let resolver = CountResolver::new(&config, http_client(), Arc::new(GuildRoster::new()));
    ReportService::new(
        resolver,
        http_client(),
        server.base_url(),
        config.discord_token.clone(),
        config.target_bot_ids.clone(),
    )
}

/// Tests the single-bot scenario end to end against a registry mock: no
/// optional credentials, count resolved through the unauthenticated registry.
///
/// Expected: one report with count 1000, no failure flag, total suppressed
#[tokio::test]
async fn single_bot_resolves_through_registry() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/123");
            then.status(200)
                .json_body(json!({ "id": "123", "username": "TickBot" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/bots/123/stats");
            then.status(200).json_body(json!({ "guilds": 1000.0 }));
        })
        .await;

    let config = config_against(&server);
    let service = report_service(&server, config);
    let reports = service.collect().await;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].bot_id, "123");
    assert_eq!(reports[0].display_name, "TickBot");
    assert_eq!(*reports[0].count.as_ref().unwrap(), 1000);

    let payload = NotificationPayload::from_reports(&reports);
    assert!(!payload.has_failures);
    assert!(!payload.include_total);
    assert_eq!(payload.total_servers, 1000);
}

/// Tests that reports come back in configuration order, not resolution order.
///
/// Expected: report order matches the configured id order
#[tokio::test]
async fn reports_preserve_configuration_order() {
    let server = MockServer::start_async().await;
    for (id, count) in [("222", 20), ("111", 10)] {
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/users/{}", id));
                then.status(200)
                    .json_body(json!({ "id": id, "username": format!("Bot{}", id) }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/bots/{}/stats", id));
                then.status(200).json_body(json!({ "guilds": count }));
            })
            .await;
    }

    let mut config = config_against(&server);
    config.target_bot_ids = vec!["222".to_string(), "111".to_string()];
    let service = report_service(&server, config);
    let reports = service.collect().await;

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].bot_id, "222");
    assert_eq!(*reports[0].count.as_ref().unwrap(), 20);
    assert_eq!(reports[1].bot_id, "111");
    assert_eq!(*reports[1].count.as_ref().unwrap(), 10);
}

/// Tests the display name falling back to the raw id when the lookup fails.
///
/// Expected: report still produced, name equals the bot id
#[tokio::test]
async fn name_lookup_failure_falls_back_to_id() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/123");
            then.status(404);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/bots/123/stats");
            then.status(200).json_body(json!({ "guilds": 7 }));
        })
        .await;

    let config = config_against(&server);
    let service = report_service(&server, config);
    let reports = service.collect().await;

    assert_eq!(reports[0].display_name, "123");
    assert_eq!(*reports[0].count.as_ref().unwrap(), 7);
}

/// Tests that a second collection pass over identical sources yields the
/// same outcomes, since nothing is cached between cycles.
///
/// Expected: both passes produce identical counts
#[tokio::test]
async fn repeated_collection_is_idempotent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users/123");
            then.status(200)
                .json_body(json!({ "id": "123", "username": "TickBot" }));
        })
        .await;
    let registry = server
        .mock_async(|when, then| {
            when.method(GET).path("/bots/123/stats");
            then.status(200).json_body(json!({ "guilds": 7 }));
        })
        .await;

    let config = config_against(&server);
    let service = report_service(&server, config);

    let first = service.collect().await;
    let second = service.collect().await;

    assert_eq!(*first[0].count.as_ref().unwrap(), 7);
    assert_eq!(*second[0].count.as_ref().unwrap(), 7);
    assert_eq!(registry.hits_async().await, 2);
}

/// Tests that a fully failed bot still yields a report and does not abort
/// the rest of the batch.
///
/// Expected: two reports, first failed, second resolved
#[tokio::test]
async fn failed_bot_does_not_abort_batch() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_contains("/users/");
            then.status(404);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/bots/111/stats");
            then.status(500);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/bots/222/stats");
            then.status(200).json_body(json!({ "guilds": 5 }));
        })
        .await;

    let mut config = config_against(&server);
    config.target_bot_ids = vec!["111".to_string(), "222".to_string()];
    let service = report_service(&server, config);
    let reports = service.collect().await;

    assert_eq!(reports.len(), 2);
    assert!(matches!(
        reports[0].count,
        Err(SourceError::Exhausted)
    ));
    assert_eq!(*reports[1].count.as_ref().unwrap(), 5);
}
