//! Lifecycle hooks for interaction units.
//!
//! Hooks are zero-argument `&mut self` methods that run around the two
//! lifecycle phases:
//!
//! | Marker | `before` | `after` |
//! |--------|----------|---------|
//! | [`ValidateHooks`] | before validation | after a successful validation |
//! | [`ExecuteHooks`] | before the computation | after the computation's value is captured |
//!
//! # Architecture
//!
//! The hook system consists of three parts:
//!
//! - **Markers** ([`marker`]): zero-sized fields that carry the declared names
//! - **Lifecycle** ([`Lifecycle`]): the per-type declaration table and name lookup
//! - **Resolver** ([`resolver`]): binds declared names to callables, in order
//!
//! # Example
//!
//! ```ignore
//! use interactor_core::prelude::*;
//!
//! #[derive(Lifecycle, Validate)]
//! struct Counter {
//!     #[validate(gte = 4)]
//!     value: i64,
//!     #[hooks(before = "bump|bump_again")]
//!     validate_hooks: ValidateHooks,
//! }
//!
//! impl Counter {
//!     fn bump(&mut self) {
//!         self.value += 4;
//!     }
//!
//!     fn bump_again(&mut self) {
//!         self.value += 4;
//!     }
//! }
//! ```

pub mod marker;
pub mod resolver;

pub use marker::{
    ExecuteHooks, HOOK_DELIMITER, HookDecl, Phase, PhaseMarker, Position, ValidateHooks,
};
pub use resolver::{HookPlan, ResolvedHook, resolve};

/// A hook bound to a unit of type `T`.
pub type Hook<T> = fn(&mut T);

/// Hook declarations and name lookup for a unit type.
///
/// Usually derived with `#[derive(Lifecycle)]`, which collects every
/// `#[hooks(...)]` marker field into [`hook_decls`](Self::hook_decls) and
/// generates a [`hook`](Self::hook) lookup that binds each declared name to
/// the method of the same name. Both methods default to "no hooks", so a
/// unit without markers can use an empty impl.
///
/// # Manual implementation
///
/// ```ignore
/// impl Lifecycle for Counter {
///     fn hook_decls() -> &'static [HookDecl] {
///         const DECLS: &[HookDecl] = &[HookDecl::new(Phase::Execute, "bump", "")];
///         DECLS
///     }
///
///     fn hook(name: &str) -> Option<Hook<Self>> {
///         match name {
///             "bump" => Some(Self::bump as Hook<Self>),
///             _ => None,
///         }
///     }
/// }
/// ```
///
/// A declared name that [`hook`](Self::hook) does not know is reported as
/// [`InteractionError::UnresolvedHook`](crate::InteractionError::UnresolvedHook).
pub trait Lifecycle: Sized {
    /// The unit's marker declarations, in field order.
    fn hook_decls() -> &'static [HookDecl] {
        &[]
    }

    /// Looks up the hook method called `name`.
    fn hook(name: &str) -> Option<Hook<Self>> {
        let _ = name;
        None
    }
}
