//! Langstats - GitHub language statistics for a single account

pub mod aggregate;
pub mod commands;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod dashboard;
pub mod github;
pub mod logger;
pub mod ranking;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use aggregate::{Aggregate, LanguageAggregator};
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use dashboard::{Dashboard, DashboardPipeline};
pub use github::Repository;
pub use logger::Logger;
pub use ranking::{BucketOptions, RankedSeries, SeriesEntry};
