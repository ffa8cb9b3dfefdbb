use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use langstats::commands::{
    Command, CommandContext, ReportCommand, TokenAction, TokenCommand, failure_message,
};
use langstats::utils::{validate_account_name, validation_errors_to_anyhow};
use langstats::{Logger, config::Config, constants};

#[derive(Parser)]
#[command(name = "langstats")]
#[command(about = "Language statistics for a GitHub account's repositories")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print progress for every request
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch repositories and print the language breakdown
    Report {
        /// GitHub account to report on (overrides the config file)
        #[arg(short, long)]
        account: Option<String>,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Manage the persisted GitHub token
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },
}

#[derive(Subcommand)]
enum TokenCommands {
    /// Persist a token for later runs (an empty value clears it)
    Set {
        /// Personal access token
        value: String,
    },
    /// Remove the persisted token
    Clear,
    /// Show which token would be used
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = Logger::new(cli.verbose);

    let (path, explicit) = match cli.config {
        Some(path) => (path, true),
        None => (constants::config::DEFAULT_CONFIG_FILE.to_string(), false),
    };
    let mut config = Config::load_or_default(&path, explicit)?;

    match cli.command {
        Commands::Report { account, json } => {
            if let Some(account) = account {
                validate_account_name(&account)
                    .map_err(|e| validation_errors_to_anyhow(vec![e]))?;
                config.account = account;
            }

            let context = CommandContext { config, logger };
            if let Err(err) = (ReportCommand { json }).execute(&context).await {
                eprintln!("{}", failure_message(&err).red());
                std::process::exit(1);
            }
        }
        Commands::Token { action } => {
            let action = match action {
                TokenCommands::Set { value } => TokenAction::Set(value),
                TokenCommands::Clear => TokenAction::Clear,
                TokenCommands::Show => TokenAction::Show,
            };

            let context = CommandContext { config, logger };
            TokenCommand { action }.execute(&context).await?;
        }
    }

    Ok(())
}
