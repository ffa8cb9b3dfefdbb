//! Report command implementation

use super::{Command, CommandContext};
use crate::constants::report::GALLERY_TOPICS;
use crate::credentials::{CredentialResolver, EmbeddedCredential};
use crate::dashboard::{Dashboard, DashboardPipeline};
use crate::ranking::RankedSeries;
use crate::utils::{format_bytes, format_share};
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use langstats_github::{GitHubClient, GitHubError};
use serde::Serialize;
use std::sync::Arc;

/// Shown when no repository produced any language data
pub const NO_LANGUAGE_DATA: &str =
    "No language data found. Add a token or check if repos are public.";

/// Output format for JSON mode
#[derive(Serialize)]
struct ReportOutput<'a> {
    #[serde(flatten)]
    dashboard: &'a Dashboard,
    compact: RankedSeries,
    detailed: RankedSeries,
}

/// Report command fetching and printing the language statistics
pub struct ReportCommand {
    /// Output in JSON format
    pub json: bool,
}

#[async_trait]
impl Command for ReportCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let config = &context.config;
        let logger = context.logger;

        let resolver = CredentialResolver::new(
            Some(config.token_store()),
            EmbeddedCredential::capture(config.token.clone()),
        )
        .with_logger(logger);
        let client =
            Arc::new(GitHubClient::new(Arc::new(resolver)).with_api_base(&config.api_base));

        if !client.is_authenticated() {
            logger.info(
                &config.account,
                "No token configured, using unauthenticated requests",
            );
        }

        let pipeline = DashboardPipeline::from_config(config, logger);
        let dashboard = pipeline
            .run(client)
            .await
            .with_context(|| format!("Failed to load repositories for '{}'", config.account))?;

        if self.json {
            let output = ReportOutput {
                dashboard: &dashboard,
                compact: dashboard.series(config.views.compact),
                detailed: dashboard.series(config.views.detailed),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        if !dashboard.has_language_data() {
            println!("{}", NO_LANGUAGE_DATA.yellow());
            return Ok(());
        }

        print_summary(&dashboard);
        print_series(
            "Languages",
            &dashboard.series(config.views.compact),
            dashboard.global.total(),
        );
        print_kib_series(
            "Languages by size (KiB)",
            &dashboard.series(config.views.detailed).in_kib(),
        );
        print_gallery(&dashboard);

        if !dashboard.failed.is_empty() {
            println!(
                "{}",
                format!(
                    "Language data missing for {} repositories: {}",
                    dashboard.failed.len(),
                    dashboard.failed.join(", ")
                )
                .yellow()
            );
        }

        Ok(())
    }
}

/// User-facing message for a failed report
///
/// A rate limit gets its own remedy, since supplying a token fixes it.
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<GitHubError>() {
        Some(rate_limit @ GitHubError::RateLimit { .. }) => format!(
            "{rate_limit}. Add a token with `langstats token set <TOKEN>` (or set GITHUB_TOKEN) and try again."
        ),
        _ => format!("GitHub fetch failed. Re-run with --verbose for details. {err:#}"),
    }
}

fn print_summary(dashboard: &Dashboard) {
    println!(
        "{}",
        format!("Language statistics for {}", dashboard.account).green()
    );
    println!();
    println!("  Repositories: {}", dashboard.repositories.len());
    println!(
        "  Top language: {}",
        dashboard.top_language().unwrap_or_else(|| "—".to_string())
    );
    println!("  Total stars:  {}", dashboard.total_stars);
    println!();
}

fn print_series(title: &str, series: &RankedSeries, total: u64) {
    println!("{}", title.bold());
    let width = label_width(series);
    for entry in series {
        println!(
            "  {} {:<width$} {:>10} {:>6}",
            "•".blue(),
            entry.label,
            format_bytes(entry.value),
            format_share(entry.value, total),
        );
    }
    println!();
}

fn print_kib_series(title: &str, series: &RankedSeries) {
    println!("{}", title.bold());
    let width = label_width(series);
    for entry in series {
        println!("  {} {:<width$} {:>8}", "•".blue(), entry.label, entry.value);
    }
    println!();
}

fn print_gallery(dashboard: &Dashboard) {
    println!("{}", "Projects".bold());
    println!();

    for repo in &dashboard.top_starred {
        let updated = repo
            .updated_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown".to_string());

        println!(
            "{} {}  {}",
            "•".blue(),
            repo.name.bold(),
            format!("★ {} · Updated {}", repo.stars, updated).dimmed()
        );
        println!("  {}", repo.display_description());

        if !repo.topics.is_empty() {
            let topics: Vec<&str> = repo
                .topics
                .iter()
                .take(GALLERY_TOPICS)
                .map(String::as_str)
                .collect();
            println!("  Topics: {}", topics.join(", ").cyan());
        }

        if !repo.html_url.is_empty() {
            println!("  {}", repo.html_url);
        }
        println!();
    }
}

fn label_width(series: &RankedSeries) -> usize {
    series
        .iter()
        .map(|entry| entry.label.chars().count())
        .max()
        .unwrap_or(0)
}
