//! Error types for the battle engine.

use crate::ability::AbilityError;
use crate::error::{ErrorSeverity, GameError};

use super::ProviderError;

/// Errors surfaced while running a battle through the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("robot {index} is not on the roster ({len} robots)")]
    RobotNotFound { index: usize, len: usize },

    #[error("robot {name} cannot act: it has no energy left")]
    RobotInactive { name: String },

    #[error("battle is already over")]
    BattleOver,

    #[error("invalid ability slot: {0}")]
    InvalidAbilitySlot(#[from] AbilityError),

    #[error("action provider failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("event sink failed: {0}")]
    Sink(#[source] std::io::Error),

    #[error("round limit of {limit} reached without a winner")]
    RoundLimit { limit: u32 },
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::RobotNotFound { .. } => ErrorSeverity::Internal,
            EngineError::RobotInactive { .. } | EngineError::BattleOver => {
                ErrorSeverity::Validation
            }
            EngineError::InvalidAbilitySlot(err) => err.severity(),
            EngineError::Provider(err) => err.severity(),
            EngineError::Sink(_) | EngineError::RoundLimit { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::RobotNotFound { .. } => "ENGINE_ROBOT_NOT_FOUND",
            EngineError::RobotInactive { .. } => "ENGINE_ROBOT_INACTIVE",
            EngineError::BattleOver => "ENGINE_BATTLE_OVER",
            EngineError::InvalidAbilitySlot(err) => err.error_code(),
            EngineError::Provider(err) => err.error_code(),
            EngineError::Sink(_) => "ENGINE_SINK",
            EngineError::RoundLimit { .. } => "ENGINE_ROUND_LIMIT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_classification() {
        let closed = EngineError::from(ProviderError::Closed);
        assert_eq!(closed.error_code(), "PROVIDER_CLOSED");
        assert_eq!(closed.severity(), ErrorSeverity::Fatal);

        let slot = EngineError::from(AbilityError::UnknownSlot {
            slot: 5,
            available: 2,
        });
        assert_eq!(slot.error_code(), "ABILITY_UNKNOWN_SLOT");
        assert_eq!(slot.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn misdriven_engine_is_a_bug() {
        let err = EngineError::RobotNotFound { index: 9, len: 2 };
        assert!(err.severity().is_bug());
        assert!(!EngineError::BattleOver.severity().is_bug());
    }
}
