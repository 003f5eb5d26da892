use serde::Deserialize;

use crate::error::source::SourceError;
use crate::model::report::BotReport;
use crate::service::count::CountResolver;

/// User shape from `GET /users/{id}` - only the name is of interest.
#[derive(Debug, Deserialize)]
struct BotUser {
    username: String,
}

/// Collects one report per configured bot, in configuration order.
///
/// For each bot this looks up a display name (best-effort; a failed lookup
/// falls back to the raw id and never blocks the batch) and then runs the
/// count resolution chain. Bots are independent: a bot whose every source
/// fails still yields a report, and never aborts the rest of the batch.
pub struct ReportService {
    resolver: CountResolver,
    client: reqwest::Client,
    api_base: String,
    monitor_token: String,
    bot_ids: Vec<String>,
}

impl ReportService {
    /// # Arguments
    /// - `resolver` - The count resolution chain
    /// - `client` - Shared HTTP client for name lookups
    /// - `api_base` - Discord API base URL
    /// - `monitor_token` - The monitoring bot's own token, used for name lookups
    /// - `bot_ids` - Bots to report on, in report order
    pub fn new(
        resolver: CountResolver,
        client: reqwest::Client,
        api_base: String,
        monitor_token: String,
        bot_ids: Vec<String>,
    ) -> Self {
        Self {
            resolver,
            client,
            api_base,
            monitor_token,
            bot_ids,
        }
    }

    /// Runs one full collection pass over the configured bots.
    ///
    /// Always returns one report per configured id, in configuration order,
    /// even when every bot failed to resolve.
    pub async fn collect(&self) -> Vec<BotReport> {
        let mut reports = Vec::with_capacity(self.bot_ids.len());

        for bot_id in &self.bot_ids {
            let display_name = match self.lookup_display_name(bot_id).await {
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!("Failed to look up name for bot {}: {}", bot_id, e);
                    bot_id.clone()
                }
            };

            let count = self.resolver.resolve(bot_id).await;
            if let Err(e) = &count {
                tracing::warn!("Error fetching server count for bot {}: {}", bot_id, e);
            }

            reports.push(BotReport {
                bot_id: bot_id.clone(),
                display_name,
                count,
            });
        }

        reports
    }

    /// Fetches the bot's username through the Discord API with the monitor's
    /// own token.
    async fn lookup_display_name(&self, bot_id: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(format!("{}/users/{}", self.api_base, bot_id))
            .header("Authorization", format!("Bot {}", self.monitor_token))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let user: BotUser = serde_json::from_str(&response.text().await?)?;
        Ok(user.username)
    }
}
