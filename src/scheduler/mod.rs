//! Cron jobs for automated tasks.

pub mod count_report;
