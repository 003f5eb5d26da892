use std::collections::HashMap;

use serde::Deserialize;
use serenity::async_trait;

use crate::error::source::SourceError;
use crate::source::CountSource;

/// Discord caps guild list pages at 100 entries.
const PAGE_SIZE: usize = 100;

/// Minimal guild shape from `GET /users/@me/guilds`.
///
/// Only the id is needed: it doubles as the pagination cursor.
#[derive(Debug, Deserialize)]
struct PartialGuild {
    id: String,
}

/// Authenticated guild listing through the Discord API, using the monitored
/// bot's own token.
///
/// This is the only source that can produce an exact total, but it requires
/// the operator to own the monitored bot. Pagination is followed to
/// exhaustion; a failure on any page fails the whole attempt rather than
/// silently under-reporting with a partial sum.
pub struct BotApiSource {
    client: reqwest::Client,
    api_base: String,
    tokens: HashMap<String, String>,
}

impl BotApiSource {
    pub fn new(client: reqwest::Client, api_base: String, tokens: HashMap<String, String>) -> Self {
        Self {
            client,
            api_base,
            tokens,
        }
    }
}

#[async_trait]
impl CountSource for BotApiSource {
    fn name(&self) -> &'static str {
        "bot API"
    }

    fn available(&self, bot_id: &str) -> bool {
        self.tokens.contains_key(bot_id)
    }

    /// Sums page sizes of the bot's guild list to exhaustion.
    ///
    /// Each page asks for [`PAGE_SIZE`] guilds after a cursor, starting at
    /// the zero snowflake and continuing from the last id of the previous
    /// page. A page shorter than the page size (or empty) terminates the walk.
    ///
    /// # Returns
    /// - `Ok(u64)` - Total number of guilds across all pages
    /// - `Err(SourceError)` - Any page failed; no partial total is reported
    async fn resolve(&self, bot_id: &str) -> Result<u64, SourceError> {
        let token = self.tokens.get(bot_id).ok_or(SourceError::NotConfigured)?;
        let limit = PAGE_SIZE.to_string();

        let mut total: u64 = 0;
        let mut after = String::from("0");

        loop {
            let response = self
                .client
                .get(format!("{}/users/@me/guilds", self.api_base))
                .header("Authorization", format!("Bot {}", token))
                .query(&[("limit", limit.as_str()), ("after", after.as_str())])
                .send()
                .await?;
            if !response.status().is_success() {
                return Err(SourceError::Status(response.status()));
            }

            let page: Vec<PartialGuild> = serde_json::from_str(&response.text().await?)?;
            total += page.len() as u64;

            match page.last() {
                Some(last) if page.len() == PAGE_SIZE => after = last.id.clone(),
                _ => break,
            }
        }

        Ok(total)
    }
}
