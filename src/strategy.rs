//! Built-in strategies.
//!
//! - [`RandomStrategy`]: uniformly random directions against every opponent
//! - [`ConstantStrategy`]: always the same direction, handy for testing a server
//!
//! Real bots are expected to bring their own [`Strategy`].

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::game_interface::{Action, Direction, GameStatus, Strategy};

/// Shoots and keeps in a random direction against each opponent.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Seeded from the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic version, same seed gives the same moves.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self) -> Direction {
        // ALL is never empty
        *Direction::ALL
            .choose(&mut self.rng)
            .unwrap_or(&Direction::Center)
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn decide(&mut self, status: &GameStatus) -> anyhow::Result<Action> {
        let mut action = Action::new();
        for id in status.opponent_ids() {
            let shoot = self.pick();
            let keep = self.pick();
            action = action.with_moves(id, shoot, keep);
        }
        Ok(action)
    }
}

/// Always plays `self.0`, both shooting and keeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantStrategy(pub Direction);

impl Strategy for ConstantStrategy {
    fn decide(&mut self, status: &GameStatus) -> anyhow::Result<Action> {
        Ok(status
            .opponent_ids()
            .into_iter()
            .fold(Action::new(), |action, id| action.with_moves(id, self.0, self.0)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn status(value: serde_json::Value) -> GameStatus {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn random_without_opponents() {
        let action = RandomStrategy::new().decide(&status(json!({}))).unwrap();
        assert_eq!(action, Action::new());
        assert_eq!(
            serde_json::to_value(action).unwrap(),
            json!({"shoot": {}, "keep": {}})
        );
    }

    #[test]
    fn random_covers_every_opponent() {
        let status = status(json!({"opponentsIds": ["a", "b", "c"]}));
        let action = RandomStrategy::new().decide(&status).unwrap();
        let expected = vec!["a", "b", "c"];
        assert_eq!(action.shoot.keys().map(String::as_str).collect::<Vec<_>>(), expected);
        assert_eq!(action.keep.keys().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn random_with_numeric_ids() {
        let status = status(json!({"opponentsIds": [1, 2]}));
        let action = RandomStrategy::with_seed(1).decide(&status).unwrap();
        assert_eq!(action.shoot.len(), 2);
        assert_eq!(action.keep.len(), 2);
        assert!(action.shoot.contains_key("1") && action.shoot.contains_key("2"));
    }

    #[test]
    fn random_is_reproducible() {
        let status = status(json!({"opponentsIds": ["a", "b", "c", "d"]}));
        let first = RandomStrategy::with_seed(42).decide(&status).unwrap();
        let second = RandomStrategy::with_seed(42).decide(&status).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn random_uses_every_direction() {
        let ids = (0..64).map(|i| format!("p{i}")).collect::<Vec<_>>();
        let status = status(json!({ "opponentsIds": ids }));
        let action = RandomStrategy::with_seed(7).decide(&status).unwrap();
        for direction in Direction::ALL {
            assert!(action.shoot.values().any(|d| *d == direction), "{direction} never shot");
        }
    }

    #[test]
    fn constant() {
        let status = status(json!({"opponentsIds": ["a", "b"]}));
        let action = ConstantStrategy(Direction::Right).decide(&status).unwrap();
        assert_eq!(
            action,
            Action::new()
                .with_moves("a", Direction::Right, Direction::Right)
                .with_moves("b", Direction::Right, Direction::Right)
        );
    }
}
