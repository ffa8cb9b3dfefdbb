//! Credential resolution and persistence

pub mod resolver;
pub mod store;

pub use resolver::{
    CONFIG_SOURCE, CredentialResolver, EmbeddedCredential, ProviderValue, ResolvedCredential,
    STORED_SOURCE, first_present,
};
pub use store::TokenStore;
