use chrono::{DateTime, Utc};

use crate::error::source::SourceError;

/// Outcome of one resolution cycle for one monitored bot.
///
/// Reports are produced fresh every cycle and never persisted. The list a
/// cycle produces preserves configuration order, since that order is what the
/// operator sees in the report embed.
#[derive(Debug)]
pub struct BotReport {
    /// The monitored bot's Discord id.
    pub bot_id: String,
    /// Best-effort display name; falls back to the raw id when the name
    /// lookup fails.
    pub display_name: String,
    /// The resolved guild count, or the reason the chain came up empty.
    pub count: Result<u64, SourceError>,
}

/// Read-only aggregate view over one cycle's reports.
///
/// Exists only transiently to build the outbound notification embed.
#[derive(Debug)]
pub struct NotificationPayload {
    /// Sum of all successfully resolved counts. Failed bots contribute nothing.
    pub total_servers: u64,
    /// True if any bot in the batch failed to resolve.
    pub has_failures: bool,
    /// True when more than one bot is configured; the single-bot report
    /// suppresses the aggregate total field.
    pub include_total: bool,
    /// When this payload was generated.
    pub generated_at: DateTime<Utc>,
}

impl NotificationPayload {
    pub fn from_reports(reports: &[BotReport]) -> Self {
        Self {
            total_servers: reports
                .iter()
                .filter_map(|report| report.count.as_ref().ok().copied())
                .sum(),
            has_failures: reports.iter().any(|report| report.count.is_err()),
            include_total: reports.len() > 1,
            generated_at: Utc::now(),
        }
    }
}
