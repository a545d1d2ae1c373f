//! Errors raised while persisting or checking a [`Config`](crate::Config).

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadError(#[source] io::Error),

    #[error("failed to write config: {0}")]
    WriteError(#[source] io::Error),

    /// `config.ron` is not valid RON for [`Config`](crate::Config).
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// The configuration parsed but describes an impossible map.
    #[error("invalid config: {0}")]
    Invalid(String),
}
