//! # Penalty Bot
//!
//! A one-shot client for turn-based penalty shoot-out game servers.
//!
//! Each run:
//! - reads its [`Configuration`](crate::configuration::Configuration) from the environment
//! - fetches the game status from `{server}/status`
//! - hands it to a [`Strategy`](crate::game_interface::Strategy) to get an action
//! - submits the action to `{server}/action`
//!
//! and stops there. Any failure (missing configuration, server error, failing strategy) aborts
//! the run, nothing is retried.
//!
//! # Documentation Overview
//!
//! - The request/response cycle is described in the [`client`] module.
//! - Environment variables are listed in the [`configuration`] module.
//! - To write your own decision logic, implement [`Strategy`](crate::game_interface::Strategy)
//!   (or pass a closure).
//!
//! # Usage Example
//!
//! ```no_run
//! use penalty_bot::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Configuration::from_env()?;
//!     let client = SubmissionClient::new(config)?;
//!
//!     // always shoot left, always dive right
//!     let mut strategy = |status: &GameStatus| -> anyhow::Result<Action> {
//!         Ok(status.opponent_ids().into_iter().fold(Action::new(), |action, id| {
//!             action.with_moves(id, Direction::Left, Direction::Right)
//!         }))
//!     };
//!
//!     let action = client.run_once(&mut strategy)?;
//!     println!("submitted {action:?}");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs)]

pub use anyhow;
pub mod client;
pub mod configuration;
pub mod error;
pub mod game_interface;
pub mod logger;
pub mod strategy;

/// Commonly used types and traits for quick access.
///
/// ```rust
/// use penalty_bot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::SubmissionClient;
    pub use crate::configuration::Configuration;
    pub use crate::error::BotError;
    pub use crate::game_interface::{Action, Direction, GameStatus, Strategy};
    pub use crate::strategy::{ConstantStrategy, RandomStrategy};
}
