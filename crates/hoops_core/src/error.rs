use thiserror::Error;

/// Errors surfaced by the engine and its roster/JSON boundary.
///
/// Only construction-time problems are errors. Anything that goes wrong
/// mid-game (an empty lineup, a stuck overtime) is repaired in place.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Team {team} has no usable players")]
    EmptyRoster { team: String },

    #[error("Team {team} has {found} players, at least 5 are required")]
    InsufficientRoster { team: String, found: usize },

    #[error("Team {team} lists player {player_id} more than once")]
    DuplicatePlayer { team: String, player_id: u32 },

    #[error("Team {id} cannot play itself")]
    SameTeam { id: u32 },

    #[error("Player {player}: {attribute} = {value} is outside 0..=99")]
    InvalidAttribute { player: String, attribute: &'static str, value: u8 },

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u32, expected: u32 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Invalid engine configuration: {0}")]
    Config(String),
}

impl SimError {
    /// Whether retrying the same game could succeed.
    ///
    /// Roster and schema problems are properties of the input, so a batch
    /// orchestrator should skip rather than retry those.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimError::EmptyRoster { .. }
            | SimError::InsufficientRoster { .. }
            | SimError::DuplicatePlayer { .. }
            | SimError::SameTeam { .. }
            | SimError::InvalidAttribute { .. }
            | SimError::UnsupportedSchema { .. }
            | SimError::Config(_) => false,
            SimError::Serialization(_) | SimError::Deserialization(_) => true,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            SimError::Deserialization(err.to_string())
        } else {
            SimError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_errors_are_not_recoverable() {
        let err = SimError::EmptyRoster { team: "LAL".into() };
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Team LAL has no usable players");
    }

    #[test]
    fn json_syntax_errors_map_to_deserialization() {
        let err: SimError = serde_json::from_str::<u32>("{not json").unwrap_err().into();
        assert!(matches!(err, SimError::Deserialization(_)));
    }
}
