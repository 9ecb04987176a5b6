//! Error types for the host binary.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ServerError {
    /// Environment configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `[package.metadata.leptos]` or the `LEPTOS_*` overrides could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// Binding the listener or serving connections failed.
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
