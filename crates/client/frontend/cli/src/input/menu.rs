use arena_core::{ErrorSeverity, GameError};

/// Why a menu line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    #[error("{input:?} is not a number")]
    NotANumber { input: String },

    #[error("{choice} is not between 1 and {max}")]
    OutOfRange { choice: i64, max: usize },
}

impl GameError for ChoiceError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            ChoiceError::NotANumber { .. } => "CHOICE_NOT_A_NUMBER",
            ChoiceError::OutOfRange { .. } => "CHOICE_OUT_OF_RANGE",
        }
    }
}

/// Validates one input line against a `1..=max` menu.
///
/// Surrounding whitespace is ignored. Returns the 1-based choice.
pub fn parse_menu_choice(line: &str, max: usize) -> Result<usize, ChoiceError> {
    let trimmed = line.trim();
    let choice: i64 = trimmed.parse().map_err(|_| ChoiceError::NotANumber {
        input: trimmed.to_owned(),
    })?;

    match usize::try_from(choice) {
        Ok(valid) if (1..=max).contains(&valid) => Ok(valid),
        _ => Err(ChoiceError::OutOfRange { choice, max }),
    }
}
