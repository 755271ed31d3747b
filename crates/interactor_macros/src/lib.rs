//! Procedural macros for `interactor_core`.
//!
//! This crate provides `#[derive(Validate)]` for declaring field rules and
//! `#[derive(Lifecycle)]` for declaring lifecycle hooks through marker fields.

mod lifecycle;
mod validate;

use proc_macro::TokenStream;

/// Derive macro for the `Validate` trait.
///
/// Generates an implementation of `interactor_core::validation::Validate`
/// that reports every annotated field to the rule engine, in declaration
/// order. Rules within one attribute run left to right.
///
/// # Attributes
///
/// - `required`, `omitempty`, `alpha`, `alphanum`, `numeric`
/// - `gte = N`, `gt = N`, `lte = N`, `lt = N`, `min = N`, `max = N`, `len = N`
/// - `eq = V`, `ne = V` where `V` is a number, string or bool literal
/// - `oneof = "a b c"` (space-separated options)
/// - `nested`: validate the field's own rules, keyed `field.inner`
///
/// # Example
///
/// ```ignore
/// use interactor_core::Validate;
///
/// #[derive(Validate)]
/// struct Signup {
///     #[validate(required, min = 3)]
///     name: String,
///     #[validate(gte = 18)]
///     age: u8,
/// }
/// ```
#[proc_macro_derive(Validate, attributes(validate))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    validate::derive_validate(input)
}

/// Derive macro for the `Lifecycle` trait.
///
/// Every field annotated with `#[hooks(...)]` must be a capability marker
/// (`ValidateHooks` or `ExecuteHooks`). Its `before` / `after` lists become
/// the unit's hook declarations, and each listed name is bound to the
/// `&mut self` method of the same name.
///
/// # Attributes
///
/// - `before` (optional): `|`-separated hooks that run before the phase.
/// - `after` (optional): `|`-separated hooks that run after the phase.
///
/// # Example
///
/// ```ignore
/// use interactor_core::{ExecuteHooks, Lifecycle, ValidateHooks};
///
/// #[derive(Lifecycle)]
/// struct Transfer {
///     amount: i64,
///     #[hooks(before = "round|clamp")]
///     validate_hooks: ValidateHooks,
///     #[hooks(after = "notify")]
///     execute_hooks: ExecuteHooks,
/// }
/// ```
#[proc_macro_derive(Lifecycle, attributes(hooks))]
pub fn derive_lifecycle(input: TokenStream) -> TokenStream {
    lifecycle::derive_lifecycle(input)
}
