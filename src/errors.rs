// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchrunError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Command line error: {0}")]
    CommandLineError(#[from] shell_words::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WatchrunError>;
