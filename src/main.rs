use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use guildboard::{
    bot,
    config::Config,
    data::roster::GuildRoster,
    error::AppError,
    scheduler::count_report,
    service::{count::CountResolver, report::ReportService},
    startup,
};

fn init_tracing() {
    let filter = EnvFilter::from_default_env()
        .add_directive("guildboard=info".parse().unwrap_or_default());
    let sub = fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(sub).expect("Failed to set global subscriber");
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let http_client = startup::setup_http_client()?;

    let roster = Arc::new(GuildRoster::new());
    let resolver = CountResolver::new(&config, http_client.clone(), roster.clone());
    let reporter = Arc::new(ReportService::new(
        resolver,
        http_client,
        config.discord_api_url.clone(),
        config.discord_token.clone(),
        config.target_bot_ids.clone(),
    ));

    info!("Monitoring {} bot(s)", config.target_bot_ids.len());

    // Initialize the Discord client and extract its HTTP handle
    let (bot_client, discord_http) = bot::start::init_bot(&config, roster, reporter.clone()).await?;
    let shard_manager = bot_client.shard_manager.clone();

    // Start the Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            error!("Discord bot error: {}", e);
        }
    });

    // Register the daily report job; registration failures are fatal
    count_report::start_scheduler(
        reporter,
        discord_http,
        config.channel_id,
        &config.notification_time,
    )
    .await?;

    info!("Bot is running. Press CTRL+C to exit.");

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }

    info!("Shutting down");
    shard_manager.shutdown_all().await;

    Ok(())
}
