//! Count sources - one adapter per way of learning a bot's guild count.
//!
//! Every source implements the same capability: given a bot id, produce a
//! guild count or a [`SourceError`]. Sources hold no shared mutable state and
//! know nothing about each other; the resolution chain in
//! `service::count` decides ordering and fallthrough. Adding, removing, or
//! reordering a source is a change to that chain's source list, not to any
//! adapter.

pub mod bot_api;
pub mod bot_list;
pub mod mutual;
pub mod push_endpoint;
pub mod top_gg;

#[cfg(test)]
mod test;

pub use bot_api::BotApiSource;
pub use bot_list::BotListSource;
pub use mutual::MutualGuildSource;
pub use push_endpoint::PushEndpointSource;
pub use top_gg::TopGgSource;

use serenity::async_trait;

use crate::error::source::SourceError;

/// A single strategy for obtaining the guild count of a monitored bot.
#[async_trait]
pub trait CountSource: Send + Sync {
    /// Human-readable source name, used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this source has what it needs to attempt the given bot.
    ///
    /// A missing credential or endpoint means "unavailable", never an error;
    /// the resolution chain skips unavailable sources silently.
    fn available(&self, _bot_id: &str) -> bool {
        true
    }

    /// Attempts to resolve the bot's guild count.
    async fn resolve(&self, bot_id: &str) -> Result<u64, SourceError>;
}

/// Extracts a guild count from a loosely-typed JSON value.
///
/// External endpoints disagree on whether a count is a JSON integer, a float,
/// or a numeric string, so every adapter that probes untyped bodies shares
/// this routine. Negative and fractional numbers are rejected.
pub(crate) fn count_from_value(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}
