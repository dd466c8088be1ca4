//! Error types.
//!
//! A rejected transition never modifies state. Callers that only care
//! about the happy path can drop the error; the game is unchanged either way.

/// A transition that was refused and left the game untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("team index {index} is out of range for {team_count} teams")]
    TeamIndexOutOfRange { index: usize, team_count: usize },

    #[error("no teams on the roster")]
    NoTeams,

    #[error("turn history is empty")]
    HistoryEmpty,

    #[error("no point award to undo")]
    NoAwardToUndo,
}

/// Failures while encoding or decoding configs and snapshots.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("json codec failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary codec failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_messages() {
        let err = GameError::TeamIndexOutOfRange {
            index: 5,
            team_count: 2,
        };
        assert_eq!(err.to_string(), "team index 5 is out of range for 2 teams");
        assert_eq!(GameError::HistoryEmpty.to_string(), "turn history is empty");
    }

    #[test]
    fn test_codec_error_from_json() {
        let err: CodecError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CodecError::Json(_)));
        assert!(err.to_string().starts_with("json codec failed"));
    }
}
