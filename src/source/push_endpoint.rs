use std::collections::HashMap;

use serenity::async_trait;

use crate::error::source::SourceError;
use crate::source::{count_from_value, CountSource};

/// Count field names accepted from a push endpoint, in priority order.
///
/// The first name of this list present in the response document wins,
/// regardless of the order fields appear in the document itself.
const COUNT_FIELDS: [&str; 6] = [
    "server_count",
    "serverCount",
    "guilds",
    "guild_count",
    "guildCount",
    "servers",
];

/// Operator-controlled stats endpoints, one URL per bot.
///
/// A push endpoint is whatever the bot's operator stood up to report its own
/// count: response shapes vary by naming convention, so the body is probed
/// against [`COUNT_FIELDS`] rather than decoded into a fixed struct.
pub struct PushEndpointSource {
    client: reqwest::Client,
    endpoints: HashMap<String, String>,
}

impl PushEndpointSource {
    pub fn new(client: reqwest::Client, endpoints: HashMap<String, String>) -> Self {
        Self { client, endpoints }
    }
}

#[async_trait]
impl CountSource for PushEndpointSource {
    fn name(&self) -> &'static str {
        "push endpoint"
    }

    fn available(&self, bot_id: &str) -> bool {
        self.endpoints.contains_key(bot_id)
    }

    /// Fetches the configured endpoint and scans the JSON object for the
    /// first recognized count field.
    ///
    /// # Returns
    /// - `Ok(u64)` - A recognized field held a usable count
    /// - `Err(SourceError::Status)` - Endpoint answered with a non-2xx status
    /// - `Err(SourceError::MissingCountField)` - Valid JSON, no usable field
    async fn resolve(&self, bot_id: &str) -> Result<u64, SourceError> {
        let url = self
            .endpoints
            .get(bot_id)
            .ok_or(SourceError::NotConfigured)?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let body: serde_json::Value = serde_json::from_str(&response.text().await?)?;
        let fields = body.as_object().ok_or(SourceError::MissingCountField)?;

        COUNT_FIELDS
            .iter()
            .find_map(|field| fields.get(*field).and_then(count_from_value))
            .ok_or(SourceError::MissingCountField)
    }
}
