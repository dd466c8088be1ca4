//! Game state and read-only selectors.
//!
//! ## GameState
//!
//! Everything a screen needs to render:
//! - Roster (team names and scores, in turn order)
//! - Shuffled word deck and the position in it
//! - Active team, turns completed this round, round number
//! - Undo history of turn positions
//! - Most recent point award (single-step undo)
//! - Resume breadcrumb for the menu
//!
//! Only `Game` mutates a `GameState`; everything here reads.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Turn;
use super::team::{Roster, Team};

/// Complete state of one game.
///
/// Uses an `im` persistent vector for the history so snapshots of a long
/// game clone in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) roster: Roster,
    pub(crate) words: Vec<String>,
    pub(crate) current_team_index: usize,
    /// Unbounded: keeps counting past the end of the deck.
    pub(crate) current_word_index: usize,
    pub(crate) round_turns: u32,
    /// Starts at 1.
    pub(crate) round_number: u32,
    pub(crate) last_route: Option<String>,
    pub(crate) history: Vector<Turn>,
    pub(crate) last_award_team_index: Option<usize>,
}

impl GameState {
    /// Create a fresh state around an already-shuffled deck.
    ///
    /// ## Defaults
    ///
    /// - team 0 is active, word 0 is up
    /// - round 1, no turns completed, empty history
    /// - no breadcrumb, no award to undo
    #[must_use]
    pub fn new(roster: Roster, words: Vec<String>) -> Self {
        Self {
            roster,
            words,
            current_team_index: 0,
            current_word_index: 0,
            round_turns: 0,
            round_number: 1,
            last_route: None,
            history: Vector::new(),
            last_award_team_index: None,
        }
    }

    /// Put turn position, round counters and history back to a game start.
    pub(crate) fn restart_turns(&mut self) {
        self.current_team_index = 0;
        self.current_word_index = 0;
        self.round_turns = 0;
        self.round_number = 1;
        self.history.clear();
    }

    // === Raw fields ===

    /// The roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Team names in turn order.
    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.roster.names()
    }

    /// Scores in turn order, index-aligned with `team_names`.
    pub fn scores(&self) -> impl Iterator<Item = u32> + '_ {
        self.roster.scores()
    }

    /// Score of one team.
    #[must_use]
    pub fn score(&self, team_index: usize) -> Option<u32> {
        self.roster.get(team_index).map(|t| t.score)
    }

    /// Number of teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.roster.len()
    }

    /// The shuffled deck.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn current_team_index(&self) -> usize {
        self.current_team_index
    }

    #[must_use]
    pub fn current_word_index(&self) -> usize {
        self.current_word_index
    }

    /// Turns completed in the current round.
    #[must_use]
    pub fn round_turns(&self) -> u32 {
        self.round_turns
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Opaque resume breadcrumb.
    #[must_use]
    pub fn last_route(&self) -> Option<&str> {
        self.last_route.as_deref()
    }

    /// Undo log, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Turn> {
        &self.history
    }

    /// Team that received the most recent undoable award.
    #[must_use]
    pub fn last_award_team_index(&self) -> Option<usize> {
        self.last_award_team_index
    }

    // === Derived ===

    /// Current position as a `Turn`.
    #[must_use]
    pub fn current_turn(&self) -> Turn {
        Turn::new(self.current_team_index, self.current_word_index)
    }

    /// The active team.
    ///
    /// `None` when the roster is empty or a removal left the index past the end.
    #[must_use]
    pub fn current_team(&self) -> Option<&Team> {
        self.roster.get(self.current_team_index)
    }

    /// The word up for the active team, `None` once the deck runs out.
    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.current_word_index).map(String::as_str)
    }

    /// Words not yet reached, counting the current one.
    #[must_use]
    pub fn words_remaining(&self) -> usize {
        self.words.len().saturating_sub(self.current_word_index)
    }

    /// True until the first `end_turn` of a round sequence; nothing to go back to.
    #[must_use]
    pub fn is_first_turn(&self) -> bool {
        self.history.is_empty()
    }

    /// Every team has had its turn this round.
    #[must_use]
    pub fn round_complete(&self) -> bool {
        self.round_turns as usize >= self.roster.len()
    }

    /// A breadcrumb is stored, so the menu can offer "Continue".
    #[must_use]
    pub fn has_active_game(&self) -> bool {
        self.last_route.is_some()
    }

    /// Indices of all teams sharing the top score. Empty if there are no teams.
    #[must_use]
    pub fn leaders(&self) -> Vec<usize> {
        let Some(top) = self.roster.top_score() else {
            return Vec::new();
        };
        self.roster
            .iter()
            .enumerate()
            .filter(|(_, team)| team.score == top)
            .map(|(i, _)| i)
            .collect()
    }
}
