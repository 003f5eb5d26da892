use std::sync::Arc;

use crate::config::Config;
use crate::data::roster::GuildRoster;
use crate::error::source::SourceError;
use crate::source::{
    BotApiSource, BotListSource, CountSource, MutualGuildSource, PushEndpointSource, TopGgSource,
};

/// Walks the ordered source chain for a single bot and returns the first
/// successful count.
///
/// The chain order is fixed: push endpoint, then the bot's own API token,
/// then top.gg, then discordbotlist, then the mutual-guild roster as a last
/// resort. Unconfigured sources are skipped; failed attempts are logged and
/// the chain moves on. There are no retries within a cycle and no caching
/// across cycles - every resolution is a fresh walk of the full chain.
pub struct CountResolver {
    sources: Vec<Box<dyn CountSource>>,
}

impl CountResolver {
    /// Builds the standard source chain from the application configuration.
    ///
    /// # Arguments
    /// - `config` - Source credentials, endpoint maps, and API base URLs
    /// - `client` - Shared HTTP client with the 10 second request timeout
    /// - `roster` - Gateway roster backing the mutual-guild source
    pub fn new(config: &Config, client: reqwest::Client, roster: Arc<GuildRoster>) -> Self {
        Self::with_sources(vec![
            Box::new(PushEndpointSource::new(
                client.clone(),
                config.push_endpoints.clone(),
            )),
            Box::new(BotApiSource::new(
                client.clone(),
                config.discord_api_url.clone(),
                config.bot_tokens.clone(),
            )),
            Box::new(TopGgSource::new(
                client.clone(),
                config.topgg_api_url.clone(),
                config.topgg_token.clone(),
            )),
            Box::new(BotListSource::new(client, config.botlist_api_url.clone())),
            Box::new(MutualGuildSource::new(roster)),
        ])
    }

    /// Builds a resolver over an explicit source list, in attempt order.
    pub fn with_sources(sources: Vec<Box<dyn CountSource>>) -> Self {
        Self { sources }
    }

    /// Resolves the guild count for one bot.
    ///
    /// # Returns
    /// - `Ok(u64)` - The first source that produced a count
    /// - `Err(SourceError::Exhausted)` - Every source was skipped or failed
    pub async fn resolve(&self, bot_id: &str) -> Result<u64, SourceError> {
        for source in &self.sources {
            if !source.available(bot_id) {
                tracing::debug!(
                    "Skipping {} for bot {}: not configured",
                    source.name(),
                    bot_id
                );
                continue;
            }

            match source.resolve(bot_id).await {
                Ok(count) => {
                    tracing::debug!(
                        "Resolved bot {} to {} guilds via {}",
                        bot_id,
                        count,
                        source.name()
                    );
                    return Ok(count);
                }
                // Partial mutual counts are diagnostics, never results.
                Err(SourceError::MutualOnly { count }) => {
                    tracing::warn!(
                        "{} found bot {} in {} shared guilds, which is not a total",
                        source.name(),
                        bot_id,
                        count
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to get count from {} for bot {}: {}",
                        source.name(),
                        bot_id,
                        e
                    );
                }
            }
        }

        Err(SourceError::Exhausted)
    }
}
