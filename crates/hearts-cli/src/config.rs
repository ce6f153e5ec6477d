use hearts_core::game::match_state::DEFAULT_SCORE_LIMIT;
use thiserror::Error;
use tracing::Level;

/// Interactive tables accept between one and six names, four of which sit.
pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 6;
const MAX_NAME_LEN: usize = 24;
const MAX_SCORE_LIMIT: u32 = 10_000;

/// Settings for one match, assembled from command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub names: Vec<String>,
    pub seed: u64,
    pub score_limit: u32,
    pub human: bool,
}

impl MatchConfig {
    pub fn new(names: Vec<String>, seed: Option<u64>, score_limit: u32, human: bool) -> Self {
        Self {
            names,
            seed: seed.unwrap_or_else(rand::random),
            score_limit,
            human,
        }
    }

    /// Validate the configuration without performing I/O. Names are trimmed.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if self.score_limit == 0 || self.score_limit > MAX_SCORE_LIMIT {
            return Err(ValidationError::InvalidField {
                field: "score_limit".to_string(),
                message: format!("must be between 1 and {MAX_SCORE_LIMIT}"),
            });
        }

        if self.names.len() > MAX_PLAYERS {
            return Err(ValidationError::InvalidField {
                field: "names".to_string(),
                message: format!("at most {MAX_PLAYERS} names may be given"),
            });
        }

        for name in &mut self.names {
            *name = validate_name(name)?;
        }
        Ok(())
    }
}

pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::InvalidField {
            field: "names".to_string(),
            message: "player names must not be empty".to_string(),
        });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::InvalidField {
            field: "names".to_string(),
            message: format!("'{name}' is longer than {MAX_NAME_LEN} characters"),
        });
    }
    Ok(name.to_string())
}

pub fn validate_player_count(count: usize) -> Result<usize, ValidationError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(count)
    } else {
        Err(ValidationError::InvalidField {
            field: "players".to_string(),
            message: format!("choose between {MIN_PLAYERS} and {MAX_PLAYERS} players"),
        })
    }
}

pub fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

pub fn default_score_limit() -> u32 {
    DEFAULT_SCORE_LIMIT
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_on_validation() {
        let mut config = MatchConfig::new(vec!["  Ola ".into()], Some(1), 100, true);
        config.validate().unwrap();
        assert_eq!(config.names, vec!["Ola".to_string()]);
        assert_eq!(config.seed, 1);
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut config = MatchConfig::new(vec!["   ".into()], Some(1), 100, true);
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "names: player names must not be empty");
    }

    #[test]
    fn score_limit_must_be_positive() {
        let mut config = MatchConfig::new(Vec::new(), Some(1), 0, false);
        assert!(config.validate().is_err());
    }

    #[test]
    fn too_many_names_are_rejected() {
        let names = (0..7).map(|i| format!("p{i}")).collect();
        let mut config = MatchConfig::new(names, Some(1), 100, true);
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidField { field, .. }) if field == "names"
        ));
    }

    #[test]
    fn player_count_is_bounded() {
        assert_eq!(validate_player_count(1), Ok(1));
        assert_eq!(validate_player_count(6), Ok(6));
        assert!(validate_player_count(0).is_err());
        assert!(validate_player_count(7).is_err());
    }

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_level("warning"), Some(Level::WARN));
        assert_eq!(parse_level("loud"), None);
    }
}
