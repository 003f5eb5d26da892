//! Guildboard - daily server count reporting for Discord bots.
//!
//! Guildboard watches a configured set of Discord bots and posts a daily
//! summary embed with the number of guilds each bot belongs to. Because no
//! single data source can answer that question reliably, every bot is
//! resolved through an ordered chain of independent sources, falling through
//! on failure and reporting either a count or an error per bot without ever
//! aborting the batch.
//!
//! # Architecture
//!
//! The crate follows a layered structure with clear separation of concerns:
//!
//! - **Source Layer** (`source/`) - One adapter per external count source
//!   behind the `CountSource` trait (push endpoints, the Discord API,
//!   third-party bot registries, the gateway roster)
//! - **Service Layer** (`service/`) - Resolution chain orchestration, batch
//!   report collection, and notification embed building/delivery
//! - **Data Layer** (`data/`) - In-memory guild membership roster maintained
//!   from gateway events
//! - **Model Layer** (`model/`) - Domain models shared across the services
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Initialization of shared HTTP resources
//! - **Scheduler** (`scheduler/`) - Cron job for the daily report cycle
//! - **Bot** (`bot/`) - Discord gateway client and event handlers
//!
//! # Report Cycle
//!
//! A cycle runs once at startup (when the gateway connection is ready) and
//! once per day at the configured time:
//!
//! 1. **Scheduler** fires and asks the report service for a fresh batch
//! 2. **Report service** resolves a display name and a count for every
//!    configured bot, in configuration order
//! 3. **Resolver** walks the source chain for each bot and returns the first
//!    successful count, or an aggregate failure
//! 4. **Notification service** renders the batch into a single embed and
//!    sends it to the configured channel

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod source;
pub mod startup;
