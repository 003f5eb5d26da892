use serde::Deserialize;
use serenity::async_trait;

use crate::error::source::SourceError;
use crate::source::CountSource;

/// Bot statistics returned by the top.gg API.
#[derive(Debug, Deserialize)]
struct TopGgStats {
    server_count: u64,
}

/// The top.gg bot registry, authenticated with a shared operator token.
pub struct TopGgSource {
    client: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl TopGgSource {
    pub fn new(client: reqwest::Client, api_base: String, token: Option<String>) -> Self {
        Self {
            client,
            api_base,
            token,
        }
    }
}

#[async_trait]
impl CountSource for TopGgSource {
    fn name(&self) -> &'static str {
        "top.gg"
    }

    fn available(&self, _bot_id: &str) -> bool {
        self.token.is_some()
    }

    async fn resolve(&self, bot_id: &str) -> Result<u64, SourceError> {
        let token = self.token.as_ref().ok_or(SourceError::NotConfigured)?;

        let response = self
            .client
            .get(format!("{}/bots/{}/stats", self.api_base, bot_id))
            .header("Authorization", token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let stats: TopGgStats = serde_json::from_str(&response.text().await?)?;
        Ok(stats.server_count)
    }
}
