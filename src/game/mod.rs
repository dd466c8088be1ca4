//! The game: one owned state machine per play session.
//!
//! - `Game` holds the state, the deck RNG and the config, and is the only
//!   place a transition happens
//! - `GameSnapshot` captures a game for storage and brings it back

mod engine;
mod snapshot;

pub use engine::Game;
pub use snapshot::GameSnapshot;
