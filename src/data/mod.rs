//! In-process state maintained from Discord gateway events.

pub mod roster;

#[cfg(test)]
mod test;

pub use roster::GuildRoster;
