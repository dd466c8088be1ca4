//! Property tests over arbitrary operation sequences.

use alias_engine::{DeckRng, Game, GameAction, GameConfig, GameError, Turn};
use proptest::prelude::*;

fn arb_roster_op() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(|name| GameAction::AddTeam { name }),
        Just(GameAction::AddDefaultTeam),
        (0usize..10).prop_map(|index| GameAction::RemoveTeam { index }),
        (0usize..10, "[a-z]{1,8}").prop_map(|(index, new_name)| GameAction::UpdateTeam {
            index,
            new_name
        }),
        (0usize..10).prop_map(|team_index| GameAction::AwardPoint { team_index }),
    ]
}

fn arb_turn_op() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        3 => Just(GameAction::EndTurn),
        2 => Just(GameAction::GoBackTurn),
        1 => Just(GameAction::ResetRound),
        1 => Just(GameAction::NextRound),
        1 => (0usize..4).prop_map(|team_index| GameAction::AwardPoint { team_index }),
        1 => Just(GameAction::UndoLastAward),
    ]
}

fn game(seed: u64) -> Game {
    Game::new(
        GameConfig::new().with_seed(seed),
        ["apple", "river", "violin", "castle", "cloud"],
    )
}

proptest! {
    /// Names and scores stay the same length through any roster edits.
    #[test]
    fn prop_scores_track_teams(ops in prop::collection::vec(arb_roster_op(), 0..40)) {
        let mut game = game(1);
        for op in ops {
            let _ = game.dispatch(op);
            let state = game.state();
            prop_assert_eq!(state.team_names().count(), state.scores().count());
            prop_assert_eq!(state.team_names().count(), state.team_count());
        }
    }

    /// `end_turn` then `go_back_turn` is the identity on position and history length.
    #[test]
    fn prop_end_turn_then_back_restores(
        prefix in prop::collection::vec(arb_turn_op(), 0..30),
        seed in any::<u64>(),
    ) {
        let mut game = game(seed);
        for op in prefix {
            let _ = game.dispatch(op);
        }
        let turn = game.state().current_turn();
        let history_len = game.state().history().len();

        game.end_turn().unwrap();
        game.go_back_turn().unwrap();

        prop_assert_eq!(game.state().current_turn(), turn);
        prop_assert_eq!(game.state().history().len(), history_len);
    }

    /// From a clean start, turn steps alone keep `round_turns` equal to the history length.
    #[test]
    fn prop_round_turns_match_history(steps in prop::collection::vec(any::<bool>(), 0..60)) {
        let mut game = game(2);
        for forward in steps {
            if forward {
                game.end_turn().unwrap();
            } else {
                let _ = game.go_back_turn();
            }
            prop_assert_eq!(game.state().round_turns() as usize, game.state().history().len());
        }
    }

    /// The active team index stays in range while only turns move.
    #[test]
    fn prop_team_index_in_range(
        extra_teams in 0usize..6,
        ops in prop::collection::vec(arb_turn_op(), 0..60),
    ) {
        let mut game = game(3);
        for _ in 0..extra_teams {
            game.add_default_team();
        }
        for op in ops {
            let _ = game.dispatch(op);
            prop_assert!(game.state().current_team_index() < game.state().team_count());
            prop_assert!(game.state().round_number() >= 1);
        }
    }

    /// A refused transition changes nothing.
    #[test]
    fn prop_refusal_is_noop(ops in prop::collection::vec(arb_turn_op(), 0..30)) {
        let mut game = game(4);
        for op in ops {
            let before = game.state().clone();
            if game.dispatch(op).is_err() {
                prop_assert_eq!(game.state(), &before);
            }
        }
    }

    /// Award then undo leaves the score as it was; a second undo is refused.
    #[test]
    fn prop_award_undo_roundtrip(team in 0usize..2, rounds in 0u32..5) {
        let mut game = game(5);
        for _ in 0..rounds {
            game.next_round();
        }
        let before = game.state().score(team);

        game.award_point(team).unwrap();
        game.undo_last_award().unwrap();

        prop_assert_eq!(game.state().score(team), before);
        prop_assert_eq!(game.state().last_award_team_index(), None);
        prop_assert_eq!(game.undo_last_award(), Err(GameError::NoAwardToUndo));
    }

    /// `load_words` installs a permutation of its input and restarts the turn sequence.
    #[test]
    fn prop_load_words_is_permutation(
        words in prop::collection::vec("[a-z]{1,6}", 0..50),
        ops in prop::collection::vec(arb_turn_op(), 0..10),
    ) {
        let mut game = game(6);
        for op in ops {
            let _ = game.dispatch(op);
        }

        game.load_words(words.clone());

        let state = game.state();
        let mut deck = state.words().to_vec();
        let mut expected = words;
        deck.sort();
        expected.sort();
        prop_assert_eq!(deck, expected);
        prop_assert_eq!(state.current_turn(), Turn::new(0, 0));
        prop_assert_eq!(state.round_turns(), 0);
        prop_assert_eq!(state.round_number(), 1);
        prop_assert!(state.history().is_empty());
    }

    /// Fisher–Yates never adds, drops or duplicates an element.
    #[test]
    fn prop_shuffled_is_permutation(items in prop::collection::vec(any::<u16>(), 0..200), seed in any::<u64>()) {
        let mut rng = DeckRng::new(seed);
        let mut shuffled = rng.shuffled(&items);
        let mut original = items.clone();

        shuffled.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(shuffled, original);
    }
}
