use guildboard::error::source::SourceError;
use guildboard::model::report::BotReport;

/// Test factory for creating BotReport objects.
///
/// Defaults to a successfully resolved count of 0 with the display name
/// falling back to the bot id, matching the report service's own fallback.
pub struct ReportFactory {
    bot_id: String,
    display_name: Option<String>,
    count: Result<u64, SourceError>,
}

impl ReportFactory {
    pub fn new(bot_id: &str) -> Self {
        Self {
            bot_id: bot_id.to_string(),
            display_name: None,
            count: Ok(0),
        }
    }

    pub fn display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }

    pub fn count(mut self, count: u64) -> Self {
        self.count = Ok(count);
        self
    }

    /// Marks the report as failed with the chain's aggregate failure.
    pub fn failed(mut self) -> Self {
        self.count = Err(SourceError::Exhausted);
        self
    }

    pub fn build(self) -> BotReport {
        BotReport {
            display_name: self
                .display_name
                .unwrap_or_else(|| self.bot_id.clone()),
            bot_id: self.bot_id,
            count: self.count,
        }
    }
}
