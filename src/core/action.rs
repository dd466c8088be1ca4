//! Turn positions and the named set of game actions.
//!
//! `Turn` is the unit stored in the undo history. `GameAction` is the closed
//! set of transitions a caller can request, as a value: screens can queue,
//! log, or persist actions and feed them to `Game::dispatch` later.

use serde::{Deserialize, Serialize};

/// A snapshot of turn position, pushed before advancing and popped to restore.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// Team whose turn it was.
    pub team_index: usize,

    /// Position in the word deck.
    pub word_index: usize,
}

impl Turn {
    /// Create a turn position.
    #[must_use]
    pub const fn new(team_index: usize, word_index: usize) -> Self {
        Self {
            team_index,
            word_index,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Turn(team {}, word {})", self.team_index, self.word_index)
    }
}

/// Every transition the game accepts.
///
/// ## Example
///
/// ```
/// use alias_engine::core::GameAction;
///
/// let action: GameAction = serde_json::from_str(r#"{"type":"award_point","team_index":1}"#).unwrap();
/// assert_eq!(action, GameAction::AwardPoint { team_index: 1 });
/// assert_eq!(action.kind(), "award_point");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameAction {
    /// Shuffle a new word list into the deck and restart turn progress.
    LoadWords { words: Vec<String> },
    /// Append a named team.
    AddTeam { name: String },
    /// Append a team named after its position ("Team 3").
    AddDefaultTeam,
    /// Rename the team at `index`.
    UpdateTeam { index: usize, new_name: String },
    /// Remove the team at `index`.
    RemoveTeam { index: usize },
    /// Replace the whole roster.
    SetTeams { names: Vec<String> },
    /// Advance to the next team and word.
    EndTurn,
    /// Undo the most recent `EndTurn`.
    GoBackTurn,
    /// Overwrite the turn position.
    SetTurn { turn: Turn },
    /// Overwrite the undo history.
    SetHistory { turns: Vec<Turn> },
    /// Give one point to a team.
    AwardPoint { team_index: usize },
    /// Take back the most recent award.
    UndoLastAward,
    /// Award a point, then move to a fresh round.
    FinishRound { team_index: usize },
    /// Zero the turns-completed counter.
    ResetRound,
    /// Increment the round number.
    NextRound,
    /// Restore defaults, reshuffling the current deck.
    ResetGame,
    /// Store or clear the resume breadcrumb.
    SetLastRoute { route: Option<String> },
}

impl GameAction {
    /// Stable snake_case name, matching the serialized `type` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameAction::LoadWords { .. } => "load_words",
            GameAction::AddTeam { .. } => "add_team",
            GameAction::AddDefaultTeam => "add_default_team",
            GameAction::UpdateTeam { .. } => "update_team",
            GameAction::RemoveTeam { .. } => "remove_team",
            GameAction::SetTeams { .. } => "set_teams",
            GameAction::EndTurn => "end_turn",
            GameAction::GoBackTurn => "go_back_turn",
            GameAction::SetTurn { .. } => "set_turn",
            GameAction::SetHistory { .. } => "set_history",
            GameAction::AwardPoint { .. } => "award_point",
            GameAction::UndoLastAward => "undo_last_award",
            GameAction::FinishRound { .. } => "finish_round",
            GameAction::ResetRound => "reset_round",
            GameAction::NextRound => "next_round",
            GameAction::ResetGame => "reset_game",
            GameAction::SetLastRoute { .. } => "set_last_route",
        }
    }
}
