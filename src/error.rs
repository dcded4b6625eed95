//! Error taxonomy of the bot
//!
//! Every error is fatal: nothing is retried, the binary reports the diagnostic and exits.
//!
//! - configuration errors ([`BotError::MissingConfig`], [`BotError::InvalidConfig`]) are raised
//!   before any network call
//! - upstream errors ([`BotError::Upstream`], [`BotError::InvalidStatus`],
//!   [`BotError::Transport`]) come from the game server or the network
//! - strategy errors ([`BotError::Strategy`]) are whatever the decision function returned

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while configuring or running the bot.
#[derive(Debug, Error)]
pub enum BotError {
    /// A required environment value is missing (or empty).
    #[error("{0} env var required")]
    MissingConfig(&'static str),

    /// An environment value could not be parsed.
    #[error("invalid value for {var}: '{value}'")]
    InvalidConfig {
        /// Name of the offending variable.
        var: &'static str,
        /// Raw value found in the environment.
        value: String,
    },

    /// The server answered with a non-success status code.
    #[error("{endpoint} request failed: {} {detail}", .status.as_u16())]
    Upstream {
        /// Which endpoint failed (`status` or `action`).
        endpoint: &'static str,
        /// HTTP status returned by the server.
        status: StatusCode,
        /// Response body, or the reason phrase when the body is empty.
        detail: String,
    },

    /// The status payload is not a JSON object.
    #[error("malformed game status: {0}")]
    InvalidStatus(#[source] serde_json::Error),

    /// Connection failure, timeout, or unreadable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The strategy failed. Displayed as-is.
    #[error(transparent)]
    Strategy(anyhow::Error),
}

impl BotError {
    /// True for errors that happen before any network call.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::MissingConfig(_) | Self::InvalidConfig { .. })
    }
}
