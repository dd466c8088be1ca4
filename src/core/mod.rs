//! Core types: teams, turns, actions, state, deck RNG, configuration, errors.
//!
//! These are the building blocks `Game` is assembled from. Nothing here
//! mutates a game on its own; `game::Game` owns every transition.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod team;

pub use action::{GameAction, Turn};
pub use config::{GameConfig, MIN_TEAMS};
pub use error::{CodecError, GameError};
pub use rng::{DeckRng, DeckRngState};
pub use state::GameState;
pub use team::{Roster, Team};
