//! Utility modules for common functionality

pub mod filesystem;
pub mod filters;
pub mod format;
pub mod validators;

// Re-export commonly used functions
pub use filesystem::ensure_parent_exists;
pub use filters::ExclusionFilter;
pub use format::{format_bytes, format_share, mask_token};
pub use validators::{ValidationError, validate_account_name, validation_errors_to_anyhow};
