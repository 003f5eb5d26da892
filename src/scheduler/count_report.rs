use std::sync::Arc;

use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;
use crate::service::{notification::CountNotificationService, report::ReportService};

/// Starts the daily report scheduler.
///
/// Registers one job at the configured notification time. Each firing runs a
/// full report cycle; errors inside a cycle are logged and the scheduler keeps
/// running. Only job registration itself can fail, which is fatal at startup.
///
/// # Arguments
/// - `reporter` - Batch report collector
/// - `discord_http` - Discord HTTP client for sending the notification
/// - `channel_id` - Destination channel for the report embed
/// - `notification_time` - `HH:MM` time of day, or a cron expression
pub async fn start_scheduler(
    reporter: Arc<ReportService>,
    discord_http: Arc<Http>,
    channel_id: u64,
    notification_time: &str,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let cron_expr = to_cron_expression(notification_time);

    // Clone resources for the job
    let job_reporter = reporter.clone();
    let job_http = discord_http.clone();

    let job = Job::new_async(cron_expr.as_str(), move |_uuid, _lock| {
        let reporter = job_reporter.clone();
        let notifier = CountNotificationService::new(job_http.clone(), channel_id);

        Box::pin(async move {
            run_report_cycle(&reporter, &notifier).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Daily notification scheduled at {} ({})",
        notification_time,
        cron_expr
    );

    Ok(())
}

/// Runs one full report cycle: collect every bot, send one embed.
///
/// Delivery failure is logged here and never propagated - a missed
/// notification must not take the process down.
pub async fn run_report_cycle(reporter: &ReportService, notifier: &CountNotificationService) {
    let reports = reporter.collect().await;

    if let Err(e) = notifier.notify(&reports).await {
        tracing::error!("Failed to deliver server count notification: {}", e);
    }
}

/// Converts the configured notification time into a six-field cron expression.
///
/// `HH:MM` becomes a daily trigger at that time. A five-field cron expression
/// gains a leading seconds field; anything else is passed through verbatim and
/// validated by the scheduler at registration.
fn to_cron_expression(time: &str) -> String {
    let bytes = time.as_bytes();
    if time.len() == 5 && bytes[2] == b':' {
        let (hour, minute) = (&time[..2], &time[3..]);
        return format!("0 {} {} * * *", minute, hour);
    }

    if time.split_whitespace().count() == 5 {
        return format!("0 {}", time);
    }

    time.to_string()
}
