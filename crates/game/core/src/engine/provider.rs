//! Input seam between the engine and whoever picks actions.

use std::collections::VecDeque;

use crate::error::{ErrorSeverity, GameError};
use crate::state::Robot;

/// What a robot does on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnChoice {
    /// Plain attack on the boss.
    Attack,
    /// Use the ability in this zero-based slot on the boss.
    Ability(usize),
}

/// Errors raised by action providers.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("input stream closed")]
    Closed,

    #[error("scripted provider ran out of choices")]
    Exhausted,

    #[error("input/output failed: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError for ProviderError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            ProviderError::Closed => "PROVIDER_CLOSED",
            ProviderError::Exhausted => "PROVIDER_EXHAUSTED",
            ProviderError::Io(_) => "PROVIDER_IO",
        }
    }
}

/// Supplies turn choices to the engine.
///
/// Implementations own any validation and retry loop; the engine only ever
/// sees a well-formed [`TurnChoice`].
pub trait ActionProvider {
    /// Picks the action for `robot`, which is about to act.
    fn choose_action(&mut self, robot: &Robot) -> Result<TurnChoice, ProviderError>;

    /// Called between rounds while the battle is still undecided.
    fn confirm_next_round(&mut self, _next_round: u32) -> Result<(), ProviderError> {
        Ok(())
    }
}

impl<P: ActionProvider + ?Sized> ActionProvider for &mut P {
    fn choose_action(&mut self, robot: &Robot) -> Result<TurnChoice, ProviderError> {
        (**self).choose_action(robot)
    }

    fn confirm_next_round(&mut self, next_round: u32) -> Result<(), ProviderError> {
        (**self).confirm_next_round(next_round)
    }
}

/// Provider that replays a fixed list of choices, then optionally repeats one.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProvider {
    script: VecDeque<TurnChoice>,
    fallback: Option<TurnChoice>,
}

impl ScriptedProvider {
    pub fn new(script: impl IntoIterator<Item = TurnChoice>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: None,
        }
    }

    /// Provider that always answers `choice`.
    pub fn always(choice: TurnChoice) -> Self {
        Self::new([]).then_repeat(choice)
    }

    /// Once the script is spent, keep answering `choice`.
    pub fn then_repeat(mut self, choice: TurnChoice) -> Self {
        self.fallback = Some(choice);
        self
    }

    /// Scripted choices not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ActionProvider for ScriptedProvider {
    fn choose_action(&mut self, _robot: &Robot) -> Result<TurnChoice, ProviderError> {
        self.script
            .pop_front()
            .or(self.fallback)
            .ok_or(ProviderError::Exhausted)
    }
}
