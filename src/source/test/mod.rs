use httpmock::prelude::*;
use serde_json::json;

use crate::error::source::SourceError;
use crate::source::{
    BotApiSource, BotListSource, CountSource, MutualGuildSource, PushEndpointSource, TopGgSource,
};

mod bot_api;

fn http_client() -> reqwest::Client {
    reqwest::Client::new()
}
