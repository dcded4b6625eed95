//! Config for the submission client
//!
//! Configuration can be created programmatically using [`Configuration::new()`] or by reading
//! environment variables using [`Configuration::from_env()`]. Either way, it is validated once,
//! before any request is sent.
//!
//! # Environment Variables
//!
//! - `SERVER_URL` — Base address of the game server (required)
//! - `GITHUB_TOKEN` — Bearer token sent in the `Authorization` header (optional)
//! - `PLAYER_NAME` — Player identity attached to both requests (optional)
//! - `BOT_TIMEOUT_SECS` — Timeout of each request, in seconds (default: `10`)
//! - `BOT_REQUIRE_CREDENTIALS` — Make `GITHUB_TOKEN` and `PLAYER_NAME` mandatory (default: `false`)
//! - `BOT_VERBOSE` — Log at debug level (default: `false`)
//! - `BOT_LOG` — Write logs to a timestamped file instead of stderr (default: `false`)
//!
//! Flags are case-insensitive, set the value to `"true"` to enable them. Empty values are
//! treated as unset.

use std::time::Duration;

use crate::error::BotError;

/// Configuration of the submission client.
#[derive(Clone, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) server_url: String,
    pub(crate) token: Option<String>,
    pub(crate) player_name: Option<String>,
    pub(crate) timeout: Duration,
    pub(crate) require_credentials: bool,
    pub(crate) verbose: bool,
    pub(crate) log: bool,
}

impl Configuration {
    /// Default timeout of each request.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a new configuration targeting `server_url`.
    ///
    /// By default:
    /// - No token and no player name are sent, and none is required.
    /// - Each request times out after 10 seconds.
    /// - Logs go to stderr at info level.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: normalize_url(server_url.into()),
            token: None,
            player_name: None,
            timeout: Self::DEFAULT_TIMEOUT,
            require_credentials: false,
            verbose: false,
            log: false,
        }
    }

    /// Create configuration from the process environment.
    ///
    /// See the [module documentation](self) for the recognized variables.
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create configuration from an arbitrary variable lookup, then validate it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.is_empty());
        let get_flag = |var: &str| {
            get(var)
                .map(|value| value.eq_ignore_ascii_case("true"))
                .unwrap_or(false)
        };

        let server_url = get("SERVER_URL").ok_or(BotError::MissingConfig("SERVER_URL"))?;

        let timeout = match get("BOT_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(BotError::InvalidConfig {
                    var: "BOT_TIMEOUT_SECS",
                    value,
                })?,
            None => Self::DEFAULT_TIMEOUT,
        };

        let config = Self {
            server_url: normalize_url(server_url),
            token: get("GITHUB_TOKEN"),
            player_name: get("PLAYER_NAME"),
            timeout,
            require_credentials: get_flag("BOT_REQUIRE_CREDENTIALS"),
            verbose: get_flag("BOT_VERBOSE"),
            log: get_flag("BOT_LOG"),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every required value is present.
    pub fn validate(&self) -> Result<(), BotError> {
        if self.server_url.is_empty() {
            return Err(BotError::MissingConfig("SERVER_URL"));
        }
        if self.require_credentials {
            if self.token.is_none() {
                return Err(BotError::MissingConfig("GITHUB_TOKEN"));
            }
            if self.player_name.is_none() {
                return Err(BotError::MissingConfig("PLAYER_NAME"));
            }
        }
        Ok(())
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the player name.
    pub fn with_player_name(mut self, player_name: impl Into<String>) -> Self {
        self.player_name = Some(player_name.into());
        self
    }

    /// Set the timeout applied to each request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Make the token and the player name mandatory.
    pub fn with_require_credentials(mut self, value: bool) -> Self {
        self.require_credentials = value;
        self
    }

    /// Enable or disable debug-level logs.
    pub fn with_verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    /// Server base address, without trailing slash.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Configured player name, if any.
    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    /// Timeout applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// hand-written so the token never ends up in logs
impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("server_url", &self.server_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("player_name", &self.player_name)
            .field("timeout", &self.timeout)
            .field("require_credentials", &self.require_credentials)
            .field("verbose", &self.verbose)
            .field("log", &self.log)
            .finish()
    }
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_owned()
}
