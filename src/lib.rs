//! # alias-engine
//!
//! Turn, round and score state machine for Alias-style party word games:
//! teams take turns describing words from a shuffled deck, a point goes to
//! a team at the end of each round.
//!
//! ## Design Principles
//!
//! 1. **One owner**: a `Game` value holds all state. Screens read it through
//!    selectors on `GameState` and change it through named transitions.
//!
//! 2. **Refusals are values**: an out-of-range index, an empty history or a
//!    missing award returns a `GameError` and leaves the state untouched.
//!    Nothing panics.
//!
//! 3. **Reproducible decks**: shuffles go through a seedable ChaCha8 RNG
//!    whose position travels with snapshots.
//!
//! ## Modules
//!
//! - `core`: teams, turns, actions, state, deck RNG, configuration, errors
//! - `game`: the `Game` state machine and snapshots

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CodecError, DeckRng, DeckRngState, GameAction, GameConfig, GameError, GameState, Roster, Team,
    Turn,
};

pub use crate::game::{Game, GameSnapshot};
