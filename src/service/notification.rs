use std::sync::Arc;

use serenity::all::{ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, Timestamp};
use serenity::http::Http;

use crate::error::{internal::InternalError, AppError};
use crate::model::report::{BotReport, NotificationPayload};

/// Embed colour when every bot resolved.
const COLOR_ALL_RESOLVED: u32 = 0x00ff00;
/// Embed colour when at least one bot failed.
const COLOR_PARTIAL_FAILURE: u32 = 0xffa500;

/// Builds a Discord embed for a server count report.
///
/// One inline field per bot carries either the resolved count or a visibly
/// marked error, followed by a timestamp field and - only when more than one
/// bot is configured - an aggregate total. The embed colour distinguishes a
/// clean cycle from a partial failure.
///
/// # Arguments
/// - `reports` - Per-bot outcomes, in configuration order
/// - `payload` - Aggregate view over the same reports
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed ready for posting
/// - `Err(AppError::InternalErr)` - Generation timestamp out of Discord's range
pub fn build_report_embed(
    reports: &[BotReport],
    payload: &NotificationPayload,
) -> Result<CreateEmbed, AppError> {
    let color = if payload.has_failures {
        COLOR_PARTIAL_FAILURE
    } else {
        COLOR_ALL_RESOLVED
    };

    let mut embed = CreateEmbed::new()
        .title("📊 Daily Server Count Report")
        .description(format!("Monitoring {} bot(s)", reports.len()))
        .color(color);

    for report in reports {
        let value = match &report.count {
            Ok(count) => format!("**{}** servers", count),
            Err(reason) => format!("❌ Error: {}", reason),
        };
        embed = embed.field(format!("🤖 {}", report.display_name), value, true);
    }

    embed = embed.field(
        "⏰ Timestamp",
        payload
            .generated_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        false,
    );

    if payload.include_total {
        embed = embed.field(
            "📊 Total Servers",
            format!("**{}** servers across all bots", payload.total_servers),
            false,
        );
    }

    let timestamp =
        Timestamp::from_unix_timestamp(payload.generated_at.timestamp()).map_err(|e| {
            InternalError::InvalidDiscordTimestamp {
                timestamp: payload.generated_at.timestamp(),
                reason: e.to_string(),
            }
        })?;

    Ok(embed
        .footer(CreateEmbedFooter::new("Daily Server Statistics"))
        .timestamp(timestamp))
}

/// Delivers one report embed per cycle to the configured channel.
pub struct CountNotificationService {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl CountNotificationService {
    pub fn new(http: Arc<Http>, channel_id: u64) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
        }
    }

    /// Renders the batch into a single embed and sends it.
    ///
    /// Called once per cycle. Delivery failure is returned to the caller,
    /// which logs it; a missed notification never crashes the process.
    pub async fn notify(&self, reports: &[BotReport]) -> Result<(), AppError> {
        let payload = NotificationPayload::from_reports(reports);
        let embed = build_report_embed(reports, &payload)?;

        let message = CreateMessage::new().embed(embed);
        self.channel_id.send_message(&self.http, message).await?;

        tracing::info!(
            "Sent server count notification for {} bot(s)",
            reports.len()
        );
        Ok(())
    }
}
