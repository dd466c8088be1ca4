//! Game configuration.
//!
//! `GameConfig` holds what a game restores on a full reset (the default
//! roster) and how its deck RNG is seeded. Build it in code with the
//! `with_*` methods or load it from JSON.

use serde::{Deserialize, Serialize};

use super::error::CodecError;

/// Minimum number of teams a roster is configured with.
pub const MIN_TEAMS: usize = 2;

fn default_team_names() -> Vec<String> {
    vec!["Team 1".to_string(), "Team 2".to_string()]
}

/// Complete game configuration.
///
/// `from_json` and the `with_*` builders enforce at least two default teams.
/// A struct literal or a raw serde deserialize skips that check; `Game::new`
/// accepts such a config and logs a warning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Roster installed at creation and on every full reset.
    #[serde(default = "default_team_names")]
    pub default_teams: Vec<String>,

    /// Deck RNG seed. `None` draws one from system entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_teams: default_team_names(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with two default teams and no fixed seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default roster.
    #[must_use]
    pub fn with_teams<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        assert!(names.len() >= MIN_TEAMS, "At least 2 teams required");
        self.default_teams = names;
        self
    }

    /// Fix the deck RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the roster size.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.default_teams.len() < MIN_TEAMS {
            return Err(CodecError::InvalidConfig(format!(
                "expected at least {} default teams, got {}",
                MIN_TEAMS,
                self.default_teams.len()
            )));
        }
        Ok(())
    }
}
