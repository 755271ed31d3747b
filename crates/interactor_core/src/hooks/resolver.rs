//! Binds declared hook names to callables.
//!
//! Resolution walks [`Lifecycle::hook_decls`] for one phase, splits each
//! marker's list for the requested position, and looks every name up through
//! [`Lifecycle::hook`]. The result keeps declaration order; invocation is
//! strictly sequential.

use core::any::type_name;
use core::fmt;

use super::{Hook, Lifecycle, Phase, Position};
use crate::error::{InteractionError, InteractionResult};

/// A declared hook name bound to its method.
pub struct ResolvedHook<T> {
    name: &'static str,
    hook: Hook<T>,
}

impl<T> ResolvedHook<T> {
    /// Binds `name` to `hook`.
    #[must_use]
    pub fn new(name: &'static str, hook: Hook<T>) -> Self {
        Self { name, hook }
    }

    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Calls the hook on `unit`.
    pub fn invoke(&self, unit: &mut T) {
        (self.hook)(unit);
    }
}

impl<T> Clone for ResolvedHook<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ResolvedHook<T> {}

impl<T> fmt::Debug for ResolvedHook<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedHook")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Resolves the hooks `T` declares for `phase` at `position`.
///
/// Returns an empty list when the unit has no marker for the phase or the
/// marker declares nothing for the position. A declared name that `T` cannot
/// bind is a broken declaration and yields
/// [`InteractionError::UnresolvedHook`].
///
/// # Errors
///
/// Returns [`InteractionError::UnresolvedHook`] for the first name that
/// [`Lifecycle::hook`] does not know.
pub fn resolve<T: Lifecycle>(
    phase: Phase,
    position: Position,
) -> InteractionResult<Vec<ResolvedHook<T>>> {
    let mut hooks = Vec::new();

    for decl in T::hook_decls().iter().filter(|decl| decl.phase == phase) {
        for name in decl.names(position) {
            let Some(hook) = T::hook(name) else {
                tracing::error!(
                    unit = type_name::<T>(),
                    %phase,
                    %position,
                    hook = name,
                    "declared hook is not defined on the unit"
                );
                return Err(InteractionError::UnresolvedHook {
                    unit: type_name::<T>(),
                    phase,
                    position,
                    name: name.to_string(),
                });
            };
            hooks.push(ResolvedHook::new(name, hook));
        }
    }

    Ok(hooks)
}

// ─────────────────────────────────────────────────────────────────────────────
// HookPlan
// ─────────────────────────────────────────────────────────────────────────────

/// Every hook a unit type declares, resolved up front.
///
/// The pipeline resolves the whole plan before the first hook runs, so a
/// broken declaration aborts a call without partial side effects.
pub struct HookPlan<T> {
    before_validate: Vec<ResolvedHook<T>>,
    after_validate: Vec<ResolvedHook<T>>,
    before_execute: Vec<ResolvedHook<T>>,
    after_execute: Vec<ResolvedHook<T>>,
}

impl<T: Lifecycle> HookPlan<T> {
    /// Resolves all four hook lists of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError::UnresolvedHook`] if any declared name
    /// cannot be bound.
    pub fn resolve() -> InteractionResult<Self> {
        Ok(Self {
            before_validate: resolve(Phase::Validate, Position::Before)?,
            after_validate: resolve(Phase::Validate, Position::After)?,
            before_execute: resolve(Phase::Execute, Position::Before)?,
            after_execute: resolve(Phase::Execute, Position::After)?,
        })
    }
}

impl<T> HookPlan<T> {
    /// Returns the resolved hooks for `phase` at `position`.
    #[must_use]
    pub fn hooks(&self, phase: Phase, position: Position) -> &[ResolvedHook<T>] {
        match (phase, position) {
            (Phase::Validate, Position::Before) => &self.before_validate,
            (Phase::Validate, Position::After) => &self.after_validate,
            (Phase::Execute, Position::Before) => &self.before_execute,
            (Phase::Execute, Position::After) => &self.after_execute,
        }
    }

    /// Returns `true` if no hook is declared for any phase.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.before_validate.is_empty()
            && self.after_validate.is_empty()
            && self.before_execute.is_empty()
            && self.after_execute.is_empty()
    }

    /// Invokes the hooks for `phase` at `position` on `unit`, in order.
    pub fn run(&self, unit: &mut T, phase: Phase, position: Position) {
        for hook in self.hooks(phase, position) {
            tracing::trace!(hook = hook.name(), %phase, %position, "invoking hook");
            hook.invoke(unit);
        }
    }
}

impl<T> fmt::Debug for HookPlan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookPlan")
            .field("before_validate", &self.before_validate)
            .field("after_validate", &self.after_validate)
            .field("before_execute", &self.before_execute)
            .field("after_execute", &self.after_execute)
            .finish()
    }
}
