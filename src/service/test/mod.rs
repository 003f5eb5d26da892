use std::collections::HashMap;
use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use crate::config::Config;
use crate::data::roster::GuildRoster;
use crate::error::source::SourceError;
use crate::service::count::CountResolver;
use crate::service::report::ReportService;
use crate::source::{CountSource, MutualGuildSource, PushEndpointSource};

mod report;

fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Config pointing every API base at the given mock server, with no optional
/// credentials configured.
fn config_against(server: &MockServer) -> Config {
    Config {
        discord_token: "monitor-tok".to_string(),
        channel_id: 42,
        target_bot_ids: vec!["123".to_string()],
        topgg_token: None,
        notification_time: "09:00".to_string(),
        push_endpoints: HashMap::new(),
        bot_tokens: HashMap::new(),
        discord_api_url: server.base_url(),
        topgg_api_url: server.base_url(),
        botlist_api_url: server.base_url(),
    }
}
