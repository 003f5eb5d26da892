use std::sync::Arc;

use serenity::async_trait;

use crate::data::roster::GuildRoster;
use crate::error::source::SourceError;
use crate::source::CountSource;

/// Last-resort source: count the guilds the monitor itself shares with the
/// target bot, using only the in-process gateway roster.
///
/// Structurally this can never yield a true total - the monitor only sees its
/// own guilds. A non-zero match is therefore still reported as a failure
/// carrying the partial count, so the chain records it for diagnostics but
/// never presents it to users as a real number.
pub struct MutualGuildSource {
    roster: Arc<GuildRoster>,
}

impl MutualGuildSource {
    pub fn new(roster: Arc<GuildRoster>) -> Self {
        Self { roster }
    }
}

#[async_trait]
impl CountSource for MutualGuildSource {
    fn name(&self) -> &'static str {
        "mutual guilds"
    }

    async fn resolve(&self, bot_id: &str) -> Result<u64, SourceError> {
        let Ok(user_id) = bot_id.parse::<u64>() else {
            return Err(SourceError::NotInMutualGuilds);
        };

        match self.roster.count_guilds_with(user_id) {
            0 => Err(SourceError::NotInMutualGuilds),
            count => Err(SourceError::MutualOnly { count }),
        }
    }
}
