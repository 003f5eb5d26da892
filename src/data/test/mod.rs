use crate::data::roster::GuildRoster;
