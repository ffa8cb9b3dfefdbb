//! Token command implementation

use super::{Command, CommandContext};
use crate::credentials::{CredentialResolver, EmbeddedCredential};
use crate::utils::mask_token;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// What to do with the persisted token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenAction {
    /// Persist a token; an empty value clears it
    Set(String),
    Clear,
    /// Report which token would be used and where it came from
    Show,
}

/// Token command managing the persisted credential
pub struct TokenCommand {
    pub action: TokenAction,
}

#[async_trait]
impl Command for TokenCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let store = context.config.token_store();

        match &self.action {
            TokenAction::Set(value) if !value.trim().is_empty() => {
                store.save(value)?;
                println!(
                    "{}",
                    format!(
                        "Token saved to {}. It will be used by the next report.",
                        store.path().display()
                    )
                    .green()
                );
            }
            TokenAction::Set(_) | TokenAction::Clear => {
                store.clear()?;
                println!("{}", "Stored token cleared".green());
            }
            TokenAction::Show => {
                let resolver = CredentialResolver::new(
                    Some(store.clone()),
                    EmbeddedCredential::capture(context.config.token.clone()),
                )
                .with_logger(context.logger);

                match resolver.resolve_with_source() {
                    Some(resolved) => println!(
                        "Using token {} from {}",
                        mask_token(&resolved.token).cyan(),
                        resolved.source
                    ),
                    None => println!(
                        "{}",
                        "No token configured, requests are unauthenticated".yellow()
                    ),
                }
                println!("Token store: {}", store.path().display());
            }
        }

        Ok(())
    }
}
