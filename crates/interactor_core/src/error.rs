//! Error types for the interaction pipeline.

use thiserror::Error;

use crate::hooks::{Phase, Position};
use crate::validation::{ErrorMap, ValidationError};

/// Result alias used throughout the pipeline.
pub type InteractionResult<T> = Result<T, InteractionError>;

/// Errors returned by [`execute`](crate::execute) and [`compose`](crate::compose).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    /// The unit failed field validation.
    ///
    /// Only produced by the validation step; no after-validate hook,
    /// execute hook, or computation ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A declared hook name could not be bound to a method of the unit.
    #[error("{position}-{phase} hook '{name}' is not defined on {unit}")]
    UnresolvedHook {
        /// Type name of the unit.
        unit: &'static str,
        /// Phase the hook was declared for.
        phase: Phase,
        /// Position the hook was declared at.
        position: Position,
        /// The unresolvable name.
        name: String,
    },

    /// The unit's own computation failed.
    #[error("execution error: {0}")]
    Execution(String),
}

impl InteractionError {
    /// Creates an [`Execution`](Self::Execution) error.
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Returns the field-keyed messages of a validation failure.
    #[must_use]
    pub fn error_map(&self) -> Option<&ErrorMap> {
        match self {
            Self::Validation(err) => Some(err.error_map()),
            _ => None,
        }
    }

    /// Returns `true` for a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
