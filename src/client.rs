//! The submission client.
//!
//! A run is strictly linear and stops at the first error:
//!
//! 1. `GET {server}/status[?player_name=...]` ([`SubmissionClient::fetch_status`])
//! 2. call the strategy on the status ([`SubmissionClient::decide`])
//! 3. `POST {server}/action` with `{"action": ..., "player_name": ...}`
//!    ([`SubmissionClient::submit_action`])
//!
//! Both requests carry `Authorization: Bearer <token>` when a token is configured. Nothing is
//! retried.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::configuration::Configuration;
use crate::error::BotError;
use crate::game_interface::{Action, GameStatus, Strategy};

/// Body of the action request.
#[derive(Debug, Serialize)]
struct Submission<'a> {
    action: &'a Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    player_name: Option<&'a str>,
}

/// Talks to the game server on behalf of one player.
#[derive(Debug)]
pub struct SubmissionClient {
    config: Configuration,
    http: Client,
}

impl SubmissionClient {
    const STATUS_ENDPOINT: &'static str = "status";
    const ACTION_ENDPOINT: &'static str = "action";

    /// Validate `config` and build an HTTP client using its timeout.
    pub fn new(config: Configuration) -> Result<Self, BotError> {
        config.validate()?;
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(SubmissionClient { config, http })
    }

    /// Same as [`SubmissionClient::new`], with a caller-provided HTTP client.
    ///
    /// The configured timeout is not applied to `http`.
    pub fn with_http_client(config: Configuration, http: Client) -> Result<Self, BotError> {
        config.validate()?;
        Ok(SubmissionClient { config, http })
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Fetch the current game status.
    ///
    /// # Errors
    /// [`BotError::Upstream`] on a non-success response, [`BotError::InvalidStatus`] when the body
    /// is not a JSON object, [`BotError::Transport`] on network failure.
    #[instrument(skip(self), fields(server = %self.config.server_url))]
    pub fn fetch_status(&self) -> Result<GameStatus, BotError> {
        let mut request = self.http.get(self.url(Self::STATUS_ENDPOINT));
        if let Some(player_name) = &self.config.player_name {
            request = request.query(&[("player_name", player_name)]);
        }

        let response = self.authorize(request).send()?;
        let response = check_response(Self::STATUS_ENDPOINT, response)?;
        let body = response.bytes()?;
        let status: GameStatus = serde_json::from_slice(&body).map_err(BotError::InvalidStatus)?;

        debug!(opponents = ?status.opponent_ids(), "game status received");
        Ok(status)
    }

    /// Run `strategy` on `status`. Its output is returned untouched.
    #[instrument(skip_all)]
    pub fn decide<S>(&self, strategy: &mut S, status: &GameStatus) -> Result<Action, BotError>
    where
        S: Strategy + ?Sized,
    {
        let action = strategy.decide(status).map_err(BotError::Strategy)?;
        for (opponent, direction) in &action.shoot {
            debug!(%opponent, %direction, "shoot");
        }
        for (opponent, direction) in &action.keep {
            debug!(%opponent, %direction, "keep");
        }
        Ok(action)
    }

    /// Submit `action`, with the player name when configured.
    ///
    /// # Errors
    /// [`BotError::Upstream`] on a non-success response, [`BotError::Transport`] on network
    /// failure.
    #[instrument(skip_all, fields(server = %self.config.server_url))]
    pub fn submit_action(&self, action: &Action) -> Result<(), BotError> {
        let body = Submission {
            action,
            player_name: self.config.player_name.as_deref(),
        };
        let request = self.http.post(self.url(Self::ACTION_ENDPOINT)).json(&body);

        let response = self.authorize(request).send()?;
        let response = check_response(Self::ACTION_ENDPOINT, response)?;
        info!(status = response.status().as_u16(), "action submitted");
        Ok(())
    }

    /// Fetch the status, decide, submit. Returns the submitted action.
    #[instrument(skip_all, fields(player = self.config.player_name.as_deref().unwrap_or("")))]
    pub fn run_once<S>(&self, strategy: &mut S) -> Result<Action, BotError>
    where
        S: Strategy + ?Sized,
    {
        let status = self.fetch_status()?;
        let action = self.decide(strategy, &status)?;
        self.submit_action(&action)?;
        Ok(action)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.server_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Turn a non-success response into [`BotError::Upstream`].
fn check_response(endpoint: &'static str, response: Response) -> Result<Response, BotError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_else(|e| {
        debug!(endpoint, error = %e, "could not read error body");
        String::new()
    });
    let detail = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or_default().to_owned()
    } else {
        body
    };
    warn!(endpoint, status = status.as_u16(), %detail, "server refused request");

    Err(BotError::Upstream {
        endpoint,
        status,
        detail,
    })
}
