//! Command implementations for the CLI

pub mod base;
pub mod report;
pub mod token;

pub use base::{Command, CommandContext};
pub use report::{ReportCommand, failure_message};
pub use token::{TokenAction, TokenCommand};
