use std::sync::Arc;

use serenity::all::{
    ActivityData, Client, Context, EventHandler, GatewayIntents, Guild, GuildId, Member, Ready,
    UnavailableGuild, User,
};
use serenity::async_trait;
use serenity::http::Http;

use crate::config::Config;
use crate::data::roster::GuildRoster;
use crate::error::AppError;
use crate::scheduler::count_report;
use crate::service::{notification::CountNotificationService, report::ReportService};

/// Discord bot event handler
struct Handler {
    roster: Arc<GuildRoster>,
    reporter: Arc<ReportService>,
    channel_id: u64,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord.
    ///
    /// Fires the immediate startup report cycle: the daily schedule only
    /// covers subsequent days, the operator gets a first report as soon as
    /// the gateway connection is confirmed.
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord", ready.user.name);

        ctx.set_activity(Some(ActivityData::custom("Counting servers")));

        let reporter = self.reporter.clone();
        let notifier = CountNotificationService::new(ctx.http.clone(), self.channel_id);
        tokio::spawn(async move {
            count_report::run_report_cycle(&reporter, &notifier).await;
        });
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        let guild_id = guild.id.get();

        // Fetch members from the API since guild.members may not be populated.
        // This requires the GUILD_MEMBERS privileged intent.
        let member_ids: Vec<u64> = match ctx.http.get_guild_members(guild.id, Some(1000), None).await
        {
            Ok(members) => members.iter().map(|m| m.user.id.get()).collect(),
            Err(e) => {
                tracing::warn!("Failed to fetch members for guild {}: {}", guild_id, e);
                // Fallback to cached members if the API call fails
                guild.members.keys().map(|id| id.get()).collect()
            }
        };

        tracing::debug!(
            "Tracking {} members in guild {} ({})",
            member_ids.len(),
            guild.name,
            guild_id
        );
        self.roster.replace_guild(guild_id, member_ids);
    }

    /// Called when the bot leaves a guild or a guild becomes unavailable
    async fn guild_delete(&self, _ctx: Context, incomplete: UnavailableGuild, _full: Option<Guild>) {
        self.roster.remove_guild(incomplete.id.get());
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, _ctx: Context, new_member: Member) {
        self.roster
            .add_member(new_member.guild_id.get(), new_member.user.id.get());
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        _ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        self.roster.remove_member(guild_id.get(), user.id.get());
    }
}

/// Initializes the Discord client and extracts its HTTP handle.
///
/// The HTTP handle is shared with the scheduler so notifications can be sent
/// outside of gateway event context.
///
/// # Arguments
/// - `config` - Application configuration
/// - `roster` - Gateway roster the event handlers keep current
/// - `reporter` - Batch collector for the startup report cycle
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Initialized client and its HTTP handle
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    roster: Arc<GuildRoster>,
    reporter: Arc<ReportService>,
) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in the Discord
    // Developer Portal for the roster to be populated.
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler {
        roster,
        reporter,
        channel_id: config.channel_id,
    };

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner.
///
/// Should be called from within a tokio::spawn task since it will block until
/// the bot shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
