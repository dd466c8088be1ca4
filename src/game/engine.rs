//! The turn/round/score state machine.

use crate::core::{
    DeckRng, DeckRngState, GameAction, GameConfig, GameError, GameState, Roster, Team, Turn,
};

/// Log a refused transition and hand the error back.
fn rejected(op: &'static str, err: GameError) -> GameError {
    tracing::debug!(op, error = %err, "transition rejected");
    err
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// A single game: the only owner of its `GameState`.
///
/// Every transition runs to completion synchronously. A refused transition
/// returns a `GameError` and leaves the state exactly as it was.
///
/// ## Example
///
/// ```
/// use alias_engine::{Game, GameConfig};
///
/// let mut game = Game::new(GameConfig::new().with_seed(1), ["cat", "dog", "owl"]);
///
/// game.end_turn().unwrap();
/// assert_eq!(game.state().current_team_index(), 1);
/// assert_eq!(game.state().current_word_index(), 1);
///
/// game.go_back_turn().unwrap();
/// assert!(game.state().is_first_turn());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    rng: DeckRng,
}

impl Game {
    /// Create a game with the configured default roster and `words` shuffled
    /// into the deck.
    pub fn new<I, S>(config: GameConfig, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rng = match config.seed {
            Some(seed) => DeckRng::new(seed),
            None => DeckRng::from_entropy(),
        };
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let deck = rng.shuffled(&words);
        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "config bypassed validation");
        }
        let state = GameState::new(default_roster(&config), deck);

        tracing::info!(
            deck_size = state.words().len(),
            teams = state.team_count(),
            seed = rng.seed(),
            "game created"
        );

        Self { config, state, rng }
    }

    pub(crate) fn from_parts(config: GameConfig, state: GameState, rng: DeckRng) -> Self {
        Self { config, state, rng }
    }

    /// Current state, for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub(crate) fn rng_state(&self) -> DeckRngState {
        self.rng.state()
    }

    // === Teams ===

    /// Append a team with zero points. Returns its index.
    pub fn add_team(&mut self, name: impl Into<String>) -> usize {
        self.state.roster.push(name);
        let index = self.state.roster.len() - 1;
        tracing::debug!(team_index = index, "team added");
        index
    }

    /// Append a team named after its position, e.g. "Team 3" on a two-team roster.
    pub fn add_default_team(&mut self) -> usize {
        let name = format!("Team {}", self.state.roster.len() + 1);
        self.add_team(name)
    }

    /// Rename a team.
    pub fn update_team(&mut self, index: usize, new_name: impl Into<String>) -> Result<(), GameError> {
        let team_count = self.state.roster.len();
        let Some(team) = self.state.roster.get_mut(index) else {
            return Err(rejected(
                "update_team",
                GameError::TeamIndexOutOfRange { index, team_count },
            ));
        };
        team.name = new_name.into();
        tracing::debug!(team_index = index, "team renamed");
        Ok(())
    }

    /// Remove a team and its score; later teams shift down by one.
    ///
    /// `current_team_index` is left alone, so after removing a team at or
    /// below it the index can name a different team or run past the end.
    pub fn remove_team(&mut self, index: usize) -> Result<Team, GameError> {
        let team_count = self.state.roster.len();
        let team = self.state.roster.remove(index).ok_or_else(|| {
            rejected(
                "remove_team",
                GameError::TeamIndexOutOfRange { index, team_count },
            )
        })?;
        tracing::debug!(team_index = index, remaining = team_count - 1, "team removed");
        Ok(team)
    }

    /// Replace the roster wholesale. Every team starts at zero points.
    pub fn set_teams<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.roster = Roster::from_names(names);
        tracing::debug!(teams = self.state.roster.len(), "roster replaced");
    }

    // === Deck ===

    /// Shuffle a new word list into the deck and restart turn progress.
    ///
    /// Team index, word index, round counters and history return to their
    /// start values. Roster, scores and breadcrumb are kept.
    pub fn load_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        self.state.words = self.rng.shuffled(&words);
        self.state.restart_turns();
        tracing::info!(deck_size = self.state.words.len(), "words loaded");
    }

    // === Turns ===

    /// Record the current position, then pass play to the next team and word.
    ///
    /// Returns the recorded position. The word index keeps counting past the
    /// end of the deck. Counters saturate, so positions installed through
    /// `set_turn` or a restored snapshot never overflow.
    pub fn end_turn(&mut self) -> Result<Turn, GameError> {
        let team_count = self.state.roster.len();
        if team_count == 0 {
            return Err(rejected("end_turn", GameError::NoTeams));
        }

        let turn = self.state.current_turn();
        self.state.history.push_back(turn);
        self.state.round_turns = self.state.round_turns.saturating_add(1);
        self.state.current_team_index =
            (self.state.current_team_index % team_count + 1) % team_count;
        self.state.current_word_index = self.state.current_word_index.saturating_add(1);

        tracing::debug!(
            team_index = self.state.current_team_index,
            word_index = self.state.current_word_index,
            round_turns = self.state.round_turns,
            "turn ended"
        );
        Ok(turn)
    }

    /// Undo the most recent `end_turn`, returning the restored position.
    ///
    /// `round_turns` becomes the remaining history length.
    pub fn go_back_turn(&mut self) -> Result<Turn, GameError> {
        let Some(turn) = self.state.history.pop_back() else {
            return Err(rejected("go_back_turn", GameError::HistoryEmpty));
        };

        self.state.current_team_index = turn.team_index;
        self.state.current_word_index = turn.word_index;
        self.state.round_turns = count(self.state.history.len());

        tracing::debug!(
            team_index = turn.team_index,
            word_index = turn.word_index,
            round_turns = self.state.round_turns,
            "turn restored"
        );
        Ok(turn)
    }

    /// Overwrite the turn position. No range checks, no history entry.
    pub fn set_turn(&mut self, turn: Turn) {
        self.state.current_team_index = turn.team_index;
        self.state.current_word_index = turn.word_index;
        tracing::debug!(team_index = turn.team_index, word_index = turn.word_index, "turn set");
    }

    /// Overwrite the history. `round_turns` is not touched; callers that
    /// restore a history are responsible for keeping the two in step.
    pub fn set_history<I>(&mut self, turns: I)
    where
        I: IntoIterator<Item = Turn>,
    {
        self.state.history = turns.into_iter().collect();
        tracing::debug!(entries = self.state.history.len(), "history set");
    }

    // === Scoring and rounds ===

    /// Give one point to a team and remember it for `undo_last_award`.
    pub fn award_point(&mut self, team_index: usize) -> Result<(), GameError> {
        let team_count = self.state.roster.len();
        let Some(team) = self.state.roster.get_mut(team_index) else {
            return Err(rejected(
                "award_point",
                GameError::TeamIndexOutOfRange {
                    index: team_index,
                    team_count,
                },
            ));
        };
        team.score = team.score.saturating_add(1);
        let score = team.score;
        self.state.last_award_team_index = Some(team_index);

        tracing::debug!(team_index, score, "point awarded");
        Ok(())
    }

    /// Take back the most recent award and step the round number back
    /// (never below 1). Returns the team the point was taken from.
    ///
    /// Only one level deep: a second call in a row is refused.
    pub fn undo_last_award(&mut self) -> Result<usize, GameError> {
        let Some(team_index) = self.state.last_award_team_index else {
            return Err(rejected("undo_last_award", GameError::NoAwardToUndo));
        };
        let Some(team) = self
            .state
            .roster
            .get_mut(team_index)
            .filter(|team| team.score > 0)
        else {
            return Err(rejected("undo_last_award", GameError::NoAwardToUndo));
        };

        team.score -= 1;
        self.state.last_award_team_index = None;
        if self.state.round_number > 1 {
            self.state.round_number -= 1;
        }

        tracing::debug!(team_index, round_number = self.state.round_number, "award undone");
        Ok(team_index)
    }

    /// Zero the turns-completed counter. History and position are kept.
    pub fn reset_round(&mut self) {
        self.state.round_turns = 0;
        tracing::debug!(round_turns = 0, "round reset");
    }

    /// Increment the round number. `round_turns` is not reset here.
    pub fn next_round(&mut self) {
        self.state.round_number = self.state.round_number.saturating_add(1);
        tracing::debug!(round_number = self.state.round_number, "next round");
    }

    /// Close out a round on the score screen: award the point, advance the
    /// round number and zero the round's turn count.
    ///
    /// If the award is refused, nothing else happens.
    pub fn finish_round(&mut self, team_index: usize) -> Result<(), GameError> {
        self.award_point(team_index)?;
        self.next_round();
        self.reset_round();
        Ok(())
    }

    // === Reset and breadcrumb ===

    /// Start over with the same words in a new order.
    ///
    /// Roster, scores, positions, counters, history, breadcrumb and the
    /// pending award all return to their defaults.
    pub fn reset_game(&mut self) {
        let deck = self.rng.shuffled(&self.state.words);
        self.state = GameState::new(default_roster(&self.config), deck);
        tracing::info!(deck_size = self.state.words.len(), "game reset");
    }

    /// Store or clear the resume breadcrumb. The value is opaque here.
    pub fn set_last_route(&mut self, route: Option<String>) {
        tracing::debug!(route = ?route, "last route set");
        self.state.last_route = route;
    }

    // === Dispatch ===

    /// Apply a transition given as a value.
    pub fn dispatch(&mut self, action: GameAction) -> Result<(), GameError> {
        tracing::trace!(action = action.kind(), "dispatch");

        match action {
            GameAction::LoadWords { words } => self.load_words(words),
            GameAction::AddTeam { name } => {
                self.add_team(name);
            }
            GameAction::AddDefaultTeam => {
                self.add_default_team();
            }
            GameAction::UpdateTeam { index, new_name } => self.update_team(index, new_name)?,
            GameAction::RemoveTeam { index } => {
                self.remove_team(index)?;
            }
            GameAction::SetTeams { names } => self.set_teams(names),
            GameAction::EndTurn => {
                self.end_turn()?;
            }
            GameAction::GoBackTurn => {
                self.go_back_turn()?;
            }
            GameAction::SetTurn { turn } => self.set_turn(turn),
            GameAction::SetHistory { turns } => self.set_history(turns),
            GameAction::AwardPoint { team_index } => self.award_point(team_index)?,
            GameAction::UndoLastAward => {
                self.undo_last_award()?;
            }
            GameAction::FinishRound { team_index } => self.finish_round(team_index)?,
            GameAction::ResetRound => self.reset_round(),
            GameAction::NextRound => self.next_round(),
            GameAction::ResetGame => self.reset_game(),
            GameAction::SetLastRoute { route } => self.set_last_route(route),
        }

        Ok(())
    }
}

fn default_roster(config: &GameConfig) -> Roster {
    Roster::from_names(config.default_teams.iter().cloned())
}
