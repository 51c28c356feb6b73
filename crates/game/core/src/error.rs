//! Common error infrastructure for market-core.
//!
//! Domain-specific errors (`CartError`, `ShelfError`, ...) live next to the
//! actions that produce them. This module only provides the shared severity
//! classification and the [`GameError`] trait they all implement.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each action family has its own error type
//! - **Atomicity**: Any error returned by the engine means the state was left untouched
//! - **Severity Classification**: Errors are categorized for handling strategies

/// Severity level of an error, used for categorization and handling strategies.
///
/// - **Validation**: The player asked for something the rules do not allow
/// - **Internal**: Unexpected state inconsistency; indicates a bug
/// - **Fatal**: A collaborator was used before it was set up
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, rejected without side effects.
    ///
    /// Examples: cart full, slot index out of range, shelf position at capacity
    Validation,

    /// Internal error - a structural invariant did not hold after a mutation.
    ///
    /// Examples: position holding more units than its capacity, zero-quantity stack
    Internal,

    /// Fatal error - integration misuse that the caller must fix.
    ///
    /// Examples: requesting a scene transition before initialization
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug rather than a rejected request.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all market errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to act, not on impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
