//! Configuration validation utilities
//!
//! Validation collects every problem instead of stopping at the first one,
//! so a broken config file can be fixed in one pass.

use crate::config::Config;
use crate::ranking::BucketOptions;
use anyhow::anyhow;
use regex::Regex;
use std::sync::LazyLock;

/// GitHub logins: alphanumerics and single hyphens, at most 39 characters,
/// no leading or trailing hyphen
static ACCOUNT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,37}[A-Za-z0-9])?$").expect("valid account regex")
});

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Account name is empty or not a valid GitHub login
    InvalidAccountName(String),
    /// Denylist contains an empty name
    EmptyExcludedName,
    /// API base is not an http(s) URL
    InvalidApiBase(String),
    /// Listing would fetch no pages at all
    ZeroMaxPages,
    /// A view's share threshold is outside `0.0..=1.0`
    InvalidMinShare(&'static str, f64),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidAccountName(name) => {
                write!(f, "Invalid GitHub account name: '{}'", name)
            }
            ValidationError::EmptyExcludedName => {
                write!(f, "Excluded repository names cannot be empty")
            }
            ValidationError::InvalidApiBase(url) => {
                write!(f, "API base must be an http or https URL: '{}'", url)
            }
            ValidationError::ZeroMaxPages => {
                write!(f, "max_pages must be at least 1")
            }
            ValidationError::InvalidMinShare(view, share) => {
                write!(
                    f,
                    "View '{}' min_share must be between 0 and 1, got {}",
                    view, share
                )
            }
        }
    }
}

/// Validates a complete configuration object
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(error) = validate_account_name(&config.account) {
        errors.push(error);
    }

    if config.exclude.iter().any(|name| name.trim().is_empty()) {
        errors.push(ValidationError::EmptyExcludedName);
    }

    if !(config.api_base.starts_with("https://") || config.api_base.starts_with("http://")) {
        errors.push(ValidationError::InvalidApiBase(config.api_base.clone()));
    }

    if config.max_pages == 0 {
        errors.push(ValidationError::ZeroMaxPages);
    }

    for (view, options) in [
        ("compact", &config.views.compact),
        ("detailed", &config.views.detailed),
    ] {
        if let Err(error) = validate_bucket_options(view, options) {
            errors.push(error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a GitHub account name
pub fn validate_account_name(name: &str) -> Result<(), ValidationError> {
    if ACCOUNT_NAME.is_match(name) && !name.contains("--") {
        Ok(())
    } else {
        Err(ValidationError::InvalidAccountName(name.to_string()))
    }
}

/// Validates one view's bucketing thresholds
pub fn validate_bucket_options(
    view: &'static str,
    options: &BucketOptions,
) -> Result<(), ValidationError> {
    if options.min_share.is_finite() && (0.0..=1.0).contains(&options.min_share) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMinShare(view, options.min_share))
    }
}

/// Converts a list of validation errors into a single anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Configuration validation failed:\n  {}", messages.join("\n  "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;

    #[test]
    fn test_validate_account_name() {
        assert!(validate_account_name("octocat").is_ok());
        assert!(validate_account_name("KhaineVulpana").is_ok());
        assert!(validate_account_name("a-b-c").is_ok());
        assert!(validate_account_name("x").is_ok());

        assert!(validate_account_name("").is_err());
        assert!(validate_account_name("-leading").is_err());
        assert!(validate_account_name("trailing-").is_err());
        assert!(validate_account_name("double--hyphen").is_err());
        assert!(validate_account_name("has space").is_err());
        assert!(validate_account_name("owner/repo").is_err());
        assert!(validate_account_name(&"a".repeat(40)).is_err());
        assert!(validate_account_name(&"a".repeat(39)).is_ok());
    }

    #[test]
    fn test_validate_config_collects_all_errors() {
        let config = ConfigBuilder::new("bad name")
            .with_excluded([" "])
            .with_api_base("ftp://example.com")
            .with_max_pages(0)
            .with_views(BucketOptions::new(8, 1.5), BucketOptions::new(12, f64::NAN))
            .build();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors.contains(&ValidationError::ZeroMaxPages));
        assert!(errors.contains(&ValidationError::EmptyExcludedName));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validation_errors_to_anyhow() {
        let err = validation_errors_to_anyhow(vec![
            ValidationError::ZeroMaxPages,
            ValidationError::InvalidAccountName("-x".to_string()),
        ]);
        let message = err.to_string();
        assert!(message.contains("max_pages must be at least 1"));
        assert!(message.contains("Invalid GitHub account name: '-x'"));
    }
}
