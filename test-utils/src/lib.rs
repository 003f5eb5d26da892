//! Guildboard Test Utils
//!
//! Provides shared testing utilities for building unit tests for the
//! guildboard application. This crate offers factories for constructing
//! domain models with sensible defaults so individual tests only spell out
//! the fields they care about.
//!
//! # Usage
//!
//! Use `ReportFactory` to build bot reports for aggregation and embed tests:
//!
//! ```rust,ignore
//! use test_utils::factory::report::ReportFactory;
//!
//! let report = ReportFactory::new("123")
//!     .display_name("TickBot")
//!     .count(42)
//!     .build();
//! ```

pub mod factory;
