use serenity::async_trait;

use crate::error::source::SourceError;
use crate::source::{count_from_value, CountSource};

/// The discordbotlist.com registry. Needs no authentication, so it is
/// attempted for every bot, listed or not.
pub struct BotListSource {
    client: reqwest::Client,
    api_base: String,
}

impl BotListSource {
    pub fn new(client: reqwest::Client, api_base: String) -> Self {
        Self { client, api_base }
    }
}

#[async_trait]
impl CountSource for BotListSource {
    fn name(&self) -> &'static str {
        "discordbotlist"
    }

    /// Fetches the bot's public stats and extracts the `guilds` field.
    ///
    /// The registry's response shape is loosely typed, so only that one field
    /// is probed; anything else in the body is ignored.
    async fn resolve(&self, bot_id: &str) -> Result<u64, SourceError> {
        let response = self
            .client
            .get(format!("{}/bots/{}/stats", self.api_base, bot_id))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let body: serde_json::Value = serde_json::from_str(&response.text().await?)?;
        body.get("guilds")
            .and_then(count_from_value)
            .ok_or(SourceError::MissingCountField)
    }
}
