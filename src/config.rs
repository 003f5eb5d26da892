use std::collections::HashMap;

use crate::error::{config::ConfigError, AppError};

const DISCORD_API_URL: &str = "https://discord.com/api/v10";
const TOPGG_API_URL: &str = "https://top.gg/api";
const BOTLIST_API_URL: &str = "https://discordbotlist.com/api/v1";

const DEFAULT_NOTIFICATION_TIME: &str = "09:00";

/// Application configuration, loaded once at startup and passed by reference
/// into every component that needs it.
pub struct Config {
    /// Token of the monitoring bot itself.
    pub discord_token: String,
    /// Channel the daily report embed is posted to.
    pub channel_id: u64,
    /// Bots to monitor, in the order they appear in the report.
    pub target_bot_ids: Vec<String>,
    /// Shared top.gg API token, if the operator has one.
    pub topgg_token: Option<String>,
    /// Daily notification time as `HH:MM`, or a cron expression.
    pub notification_time: String,
    /// Bot id -> operator-controlled stats endpoint URL.
    pub push_endpoints: HashMap<String, String>,
    /// Bot id -> that bot's own API token, for authenticated guild listing.
    pub bot_tokens: HashMap<String, String>,

    pub discord_api_url: String,
    pub topgg_api_url: String,
    pub botlist_api_url: String,
}

impl Config {
    /// Loads the configuration from environment variables.
    ///
    /// `TARGET_BOT_IDS` is a comma-separated id list; the singular
    /// `TARGET_BOT_ID` is accepted as a fallback. `CUSTOM_ENDPOINTS` and
    /// `BOT_TOKENS` are comma-separated `BOT_ID:VALUE` maps.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and well-formed
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or invalid
    pub fn from_env() -> Result<Self, AppError> {
        let discord_token = require_env("DISCORD_TOKEN")?;

        let channel_id = require_env("CHANNEL_ID")?
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "CHANNEL_ID".to_string(),
                reason: "expected a non-zero channel id".to_string(),
            })?;

        let raw_ids = std::env::var("TARGET_BOT_IDS")
            .or_else(|_| std::env::var("TARGET_BOT_ID"))
            .map_err(|_| ConfigError::MissingEnvVar("TARGET_BOT_IDS".to_string()))?;
        let target_bot_ids = parse_id_list(&raw_ids);
        if target_bot_ids.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "TARGET_BOT_IDS".to_string(),
                reason: "expected at least one bot id".to_string(),
            }
            .into());
        }

        Ok(Self {
            discord_token,
            channel_id,
            target_bot_ids,
            topgg_token: std::env::var("TOPGG_TOKEN").ok().filter(|t| !t.is_empty()),
            notification_time: std::env::var("NOTIFICATION_TIME")
                .ok()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_TIME.to_string()),
            push_endpoints: parse_keyed_map(
                &std::env::var("CUSTOM_ENDPOINTS").unwrap_or_default(),
            ),
            bot_tokens: parse_keyed_map(&std::env::var("BOT_TOKENS").unwrap_or_default()),
            discord_api_url: DISCORD_API_URL.to_string(),
            topgg_api_url: TOPGG_API_URL.to_string(),
            botlist_api_url: BOTLIST_API_URL.to_string(),
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses a comma-separated id list, trimming entries and dropping empty ones.
fn parse_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a comma-separated `BOT_ID:VALUE` map.
///
/// Entries split on the first `:` only, so values containing further colons
/// (such as `https://` endpoint URLs) survive intact. Malformed entries are
/// dropped.
fn parse_keyed_map(raw: &str) -> HashMap<String, String> {
    raw.split(',')
        .filter_map(|entry| {
            let (key, value) = entry.trim().split_once(':')?;
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn id_list_trims_and_drops_empty_entries() {
        let ids = parse_id_list(" 123, 456 ,,789,");
        assert_eq!(ids, vec!["123", "456", "789"]);
    }

    #[test]
    fn keyed_map_splits_on_first_colon_only() {
        let map = parse_keyed_map("123:https://stats.example.com/count,456:abc");
        assert_eq!(
            map.get("123").map(String::as_str),
            Some("https://stats.example.com/count")
        );
        assert_eq!(map.get("456").map(String::as_str), Some("abc"));
    }

    #[test]
    fn keyed_map_drops_malformed_entries() {
        let map = parse_keyed_map("novalue,:123,456:,789:tok");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("789").map(String::as_str), Some("tok"));
    }

    #[test]
    fn keyed_map_of_empty_string_is_empty() {
        assert!(parse_keyed_map("").is_empty());
    }
}
