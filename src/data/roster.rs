use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

/// In-memory view of the guilds the monitoring bot can see and who is in them.
///
/// The gateway handlers keep this current: `guild_create` replaces a guild's
/// member set wholesale, member add/remove events patch it, `guild_delete`
/// drops it. The mutual-guild count source reads from it without any network
/// traffic. The roster is rebuilt from gateway events on every reconnect, so
/// nothing here survives a restart - and nothing needs to.
#[derive(Default)]
pub struct GuildRoster {
    guilds: RwLock<HashMap<u64, HashSet<u64>>>,
}

impl GuildRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the full member set of a guild.
    pub fn replace_guild(&self, guild_id: u64, member_ids: impl IntoIterator<Item = u64>) {
        let members = member_ids.into_iter().collect();
        self.guilds
            .write()
            .expect("guild roster lock poisoned")
            .insert(guild_id, members);
    }

    /// Forgets a guild entirely, e.g. when the monitor is removed from it.
    pub fn remove_guild(&self, guild_id: u64) {
        self.guilds
            .write()
            .expect("guild roster lock poisoned")
            .remove(&guild_id);
    }

    /// Records a member joining a guild. Unknown guilds are created on the
    /// fly, since member events can race ahead of `guild_create` on reconnect.
    pub fn add_member(&self, guild_id: u64, user_id: u64) {
        self.guilds
            .write()
            .expect("guild roster lock poisoned")
            .entry(guild_id)
            .or_default()
            .insert(user_id);
    }

    /// Records a member leaving a guild.
    pub fn remove_member(&self, guild_id: u64, user_id: u64) {
        if let Some(members) = self
            .guilds
            .write()
            .expect("guild roster lock poisoned")
            .get_mut(&guild_id)
        {
            members.remove(&user_id);
        }
    }

    /// Counts the visible guilds whose member set contains the given user.
    ///
    /// This is only ever the number of *mutual* guilds, never the target's
    /// true total.
    pub fn count_guilds_with(&self, user_id: u64) -> u64 {
        self.guilds
            .read()
            .expect("guild roster lock poisoned")
            .values()
            .filter(|members| members.contains(&user_id))
            .count() as u64
    }
}
