//! Error types for action execution pipeline.

use crate::action::{AisleError, CartError, CurrencyError, ShelfError};
use crate::error::{ErrorSeverity, GameError};

use super::invariants::InvariantError;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
///
/// Whatever the variant, the engine has already restored the state it was
/// given to its value before the call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("cart action failed: {0}")]
    Cart(TransitionPhaseError<CartError>),

    #[error("shelf action failed: {0}")]
    Shelf(TransitionPhaseError<ShelfError>),

    #[error("aisle action failed: {0}")]
    Aisle(TransitionPhaseError<AisleError>),

    #[error("currency action failed: {0}")]
    Currency(TransitionPhaseError<CurrencyError>),

    #[error("state invariant violated: {0}")]
    Invariant(#[from] InvariantError),
}

impl ExecuteError {
    /// Phase that failed, `None` for invariant violations detected afterwards.
    pub fn phase(&self) -> Option<TransitionPhase> {
        match self {
            ExecuteError::Cart(err) => Some(err.phase),
            ExecuteError::Shelf(err) => Some(err.phase),
            ExecuteError::Aisle(err) => Some(err.phase),
            ExecuteError::Currency(err) => Some(err.phase),
            ExecuteError::Invariant(_) => None,
        }
    }

    fn inner(&self) -> &dyn GameError {
        match self {
            ExecuteError::Cart(err) => &err.error,
            ExecuteError::Shelf(err) => &err.error,
            ExecuteError::Aisle(err) => &err.error,
            ExecuteError::Currency(err) => &err.error,
            ExecuteError::Invariant(err) => err,
        }
    }

    /// Player-facing description of the underlying cause, without phase noise.
    pub fn reason(&self) -> String {
        self.inner().to_string()
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.inner().severity()
    }

    fn error_code(&self) -> &'static str {
        self.inner().error_code()
    }
}
