//! Types exchanged with the game server, and the trait a strategy has to implement

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Game status as returned by the server.
///
/// The payload is kept as an open JSON object: the bot does not know (nor check) the exact shape
/// of the game state, it only hands it over to the strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameStatus(Map<String, Value>);

impl GameStatus {
    /// Key under which the server lists the opponents of the requesting player.
    pub const OPPONENTS_KEY: &'static str = "opponentsIds";

    /// Wrap an already parsed JSON object.
    pub fn new(payload: Map<String, Value>) -> Self {
        GameStatus(payload)
    }

    /// Identifiers of the opponents of this turn.
    ///
    /// Scalar ids are kept as their JSON text (`"a"` gives `a`, `7` gives `7`), `null`, arrays
    /// and objects are skipped. Empty if the server did not send any.
    pub fn opponent_ids(&self) -> Vec<String> {
        self.0
            .get(Self::OPPONENTS_KEY)
            .and_then(Value::as_array)
            .map(|ids| ids.iter().filter_map(id_to_key).collect())
            .unwrap_or_default()
    }

    /// Raw access to any field of the status.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The whole payload.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the status and return the raw payload.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

fn id_to_key(id: &Value) -> Option<String> {
    match id {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl From<Map<String, Value>> for GameStatus {
    fn from(payload: Map<String, Value>) -> Self {
        GameStatus(payload)
    }
}

/// Where to shoot, or where to dive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Direction {
    /// `0`
    Left,
    /// `1`
    Center,
    /// `2`
    Right,
}

impl Direction {
    /// Every direction, in wire order.
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Center, Direction::Right];
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        match direction {
            Direction::Left => 0,
            Direction::Center => 1,
            Direction::Right => 2,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Center),
            2 => Ok(Direction::Right),
            _ => Err(format!("invalid direction {value}, expected 0, 1 or 2")),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Center => "center",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// What the player does this turn, per opponent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Where to shoot against each opponent.
    pub shoot: BTreeMap<String, Direction>,
    /// Where to dive when each opponent shoots.
    pub keep: BTreeMap<String, Direction>,
}

impl Action {
    /// An action without any move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the moves against `opponent`.
    pub fn with_moves(mut self, opponent: impl Into<String>, shoot: Direction, keep: Direction) -> Self {
        let opponent = opponent.into();
        self.shoot.insert(opponent.clone(), shoot);
        self.keep.insert(opponent, keep);
        self
    }
}

/// What a strategy should implement.
///
/// A strategy is called once per run with the status fetched from the server. Any error it
/// returns aborts the run and is reported unchanged.
///
/// Closures `FnMut(&GameStatus) -> anyhow::Result<Action>` are strategies too.
pub trait Strategy {
    /// Compute the action to submit for `status`.
    fn decide(&mut self, status: &GameStatus) -> anyhow::Result<Action>;
}

impl<F> Strategy for F
where
    F: FnMut(&GameStatus) -> anyhow::Result<Action>,
{
    fn decide(&mut self, status: &GameStatus) -> anyhow::Result<Action> {
        self(status)
    }
}
