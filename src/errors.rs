//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`]. The three
//! derived read surfaces (`user_stats`, `generate_insights`,
//! `habit_recommendation`) absorb their failures internally and never return
//! an error to the caller; only write paths and transport code surface these
//! variants.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration loading or validation failure
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Record store transport failure (spreadsheet service unreachable,
    /// rejected request, unexpected payload shape)
    #[error("Record store error: {message}")]
    Store {
        /// Description of what went wrong
        message: String,
    },

    /// Generative-text backend failure (network, auth, quota)
    #[error("AI backend error: {message}")]
    Ai {
        /// Description of what went wrong
        message: String,
    },

    /// Input validation failure on a write path
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the rejected input
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Error::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
