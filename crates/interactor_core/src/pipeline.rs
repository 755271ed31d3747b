//! The interaction lifecycle.
//!
//! [`execute`] runs a unit through, in order:
//!
//! 1. before-validate hooks
//! 2. field validation
//! 3. after-validate hooks (only if validation passed)
//! 4. before-execute hooks
//! 5. [`Interaction::run`], whose value is captured
//! 6. after-execute hooks
//!
//! and returns the captured value. [`compose`] runs the same lifecycle for a
//! unit called from inside another unit's computation.
//!
//! # Example
//!
//! ```
//! use interactor_core::prelude::*;
//!
//! #[derive(Lifecycle, Validate)]
//! struct Greeting {
//!     #[validate(required)]
//!     name: String,
//!     #[hooks(before = "trim")]
//!     validate_hooks: ValidateHooks,
//! }
//!
//! impl Greeting {
//!     fn trim(&mut self) {
//!         self.name = self.name.trim().to_string();
//!     }
//! }
//!
//! impl Interaction for Greeting {
//!     type Output = String;
//!
//!     fn run(&mut self) -> InteractionResult<String> {
//!         Ok(format!("hello, {}", self.name))
//!     }
//! }
//!
//! let mut greeting = Greeting {
//!     name: "  ada ".to_string(),
//!     validate_hooks: ValidateHooks,
//! };
//! assert_eq!(execute(&mut greeting).unwrap(), "hello, ada");
//!
//! let mut blank = Greeting {
//!     name: "   ".to_string(),
//!     validate_hooks: ValidateHooks,
//! };
//! let err = execute(&mut blank).unwrap_err();
//! assert_eq!(
//!     err.error_map().unwrap()["name"][0],
//!     "Field validation for 'name' failed on the 'required' tag"
//! );
//! ```

use core::any::type_name;

use crate::error::InteractionResult;
use crate::hooks::{HookPlan, Lifecycle, Phase, Position};
use crate::validation::{self, Validate};

/// A unit of business logic with a single computation.
///
/// Hooks come from the [`Lifecycle`] supertrait and field rules from
/// [`Validate`]; both default to "none", so a unit without either can use
/// empty impls or the derives.
pub trait Interaction: Lifecycle + Validate {
    /// The computed value.
    type Output;

    /// Runs the unit's computation.
    ///
    /// Called at most once per [`execute`], after validation and the
    /// before-execute hooks.
    ///
    /// # Errors
    ///
    /// Return [`InteractionError::execution`](crate::InteractionError::execution)
    /// for the unit's own failures, or propagate the error of a nested
    /// [`compose`] call with `?`.
    fn run(&mut self) -> InteractionResult<Self::Output>;
}

/// Runs `unit` through the full lifecycle.
///
/// The unit is borrowed mutably for the whole call, so every hook sees the
/// mutations of the hooks before it, and the caller sees the final state
/// afterward (including after-execute mutations, which never reach the
/// returned value).
///
/// # Errors
///
/// - [`InteractionError::UnresolvedHook`](crate::InteractionError::UnresolvedHook)
///   if a declared hook cannot be bound; reported before any hook runs.
/// - [`InteractionError::Validation`](crate::InteractionError::Validation)
///   if a field rule fails; nothing after validation runs.
/// - Whatever [`Interaction::run`] returns; after-execute hooks are skipped.
pub fn execute<T: Interaction>(unit: &mut T) -> InteractionResult<T::Output> {
    let span = tracing::debug_span!("execute", unit = type_name::<T>());
    let _enter = span.enter();
    run_lifecycle(unit)
}

/// Runs a nested `unit` through the full lifecycle.
///
/// Meant to be called from inside another unit's [`Interaction::run`]. The
/// nested result is returned as is: the calling computation decides whether
/// to propagate the error with `?`, substitute a default, or ignore it. A
/// nested failure never fails the outer [`execute`] on its own.
///
/// # Errors
///
/// Same as [`execute`].
pub fn compose<T: Interaction>(unit: &mut T) -> InteractionResult<T::Output> {
    let span = tracing::debug_span!("compose", unit = type_name::<T>());
    let _enter = span.enter();
    run_lifecycle(unit)
}

fn run_lifecycle<T: Interaction>(unit: &mut T) -> InteractionResult<T::Output> {
    let plan = HookPlan::<T>::resolve()?;

    plan.run(unit, Phase::Validate, Position::Before);

    if let Err(err) = validation::validate(&*unit) {
        tracing::debug!(fields = err.error_map().len(), "validation failed");
        return Err(err.into());
    }

    plan.run(unit, Phase::Validate, Position::After);
    plan.run(unit, Phase::Execute, Position::Before);

    let output = unit.run()?;

    plan.run(unit, Phase::Execute, Position::After);

    tracing::debug!("interaction completed");
    Ok(output)
}
