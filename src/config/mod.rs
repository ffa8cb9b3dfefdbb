//! Configuration management module

pub mod builder;
pub mod loader;

pub use builder::ConfigBuilder;
pub use loader::{Config, Views};
