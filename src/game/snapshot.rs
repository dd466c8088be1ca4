//! Save and restore a game in progress.
//!
//! A snapshot is the full `GameState` plus the deck RNG position, so a
//! restored game keeps producing the shuffles the original would have.
//! Two encodings: JSON for anything a human might read, bincode for
//! compact storage.

use serde::{Deserialize, Serialize};

use super::engine::Game;
use crate::core::{CodecError, DeckRng, DeckRngState, GameConfig, GameState};

/// Captured game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: GameState,
    pub rng: DeckRngState,
}

impl GameSnapshot {
    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Game {
    /// Capture the current game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state().clone(),
            rng: self.rng_state(),
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// `config` only matters for later full resets; the seed inside it is
    /// ignored in favour of the captured RNG position.
    #[must_use]
    pub fn restore(config: GameConfig, snapshot: GameSnapshot) -> Self {
        tracing::info!(
            deck_size = snapshot.state.words().len(),
            history = snapshot.state.history().len(),
            "game restored"
        );
        Game::from_parts(config, snapshot.state, DeckRng::from_state(&snapshot.rng))
    }
}
