//! Error type for the CLI application.
//!
//! Library errors convert into [`CliError`] so handlers can use `?`
//! throughout; [`run`](crate::run) prints the message and maps every
//! variant to exit code 2.

use std::fmt;

use pokerview_bot::BotError;
use pokerview_engine::{AssetError, CardParseError, LayoutError, RenderError};

use crate::config::ConfigError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input: bad table description, unknown card, unreadable avatar
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Composition or encoding failed
    Render(RenderError),

    /// Rendering or delivery through the messenger failed
    Delivery(BotError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Render(e) => write!(f, "Render error: {}", e),
            CliError::Delivery(e) => write!(f, "Delivery error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Render(e) => Some(e),
            CliError::Delivery(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<RenderError> for CliError {
    fn from(error: RenderError) -> Self {
        CliError::Render(error)
    }
}

impl From<AssetError> for CliError {
    fn from(error: AssetError) -> Self {
        CliError::Render(RenderError::from(error))
    }
}

impl From<LayoutError> for CliError {
    fn from(error: LayoutError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<CardParseError> for CliError {
    fn from(error: CardParseError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<BotError> for CliError {
    fn from(error: BotError) -> Self {
        match error {
            BotError::Render(e) => CliError::Render(e),
            other => CliError::Delivery(other),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}
