//! Shared error classification.
//!
//! Each subsystem keeps its own `thiserror` enum next to the code that raises
//! it (`RosterError`, `AbilityError`, `EngineError`, ...). This module only
//! defines how those errors are classified so frontends can decide whether
//! to re-prompt, abort, or report a bug.

/// How bad an error is, from the caller's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Bad input that can simply be asked for again (a typo in a menu).
    Recoverable,
    /// Rejected request or content; retrying unchanged fails the same way.
    Validation,
    /// The engine was driven into a state it should never reach.
    Internal,
    /// The battle cannot go on (input closed, output broken).
    Fatal,
}

impl ErrorSeverity {
    /// True when the same prompt may be shown again.
    pub const fn can_reprompt(self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// True when the error points at a bug rather than at the player or the
    /// environment.
    pub const fn is_bug(self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Implemented by every error enum in the arena crates.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable `SCREAMING_SNAKE` identifier for the variant, used in logs.
    fn error_code(&self) -> &'static str;
}
