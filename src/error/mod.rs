//! Error types for the application.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type for startup and delivery failures, while
//! `SourceError` carries the per-source failure taxonomy used by the count
//! resolution chain.

pub mod config;
pub mod internal;
pub mod source;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates the error types that can occur during startup, scheduling, and
/// notification delivery. Most variants use `#[from]` for automatic error
/// conversion. Per-source failures during count resolution are not represented
/// here - they are recovered locally and carried in each bot's report as a
/// [`source::SourceError`].
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal issue indicating unexpected behavior and possible bugs.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
