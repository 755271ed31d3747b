//! Lifecycle pipeline for interaction units.
//!
//! `interactor_core` runs a business-logic unit through a fixed lifecycle:
//! hooks around validation, declarative field validation, hooks around the
//! computation, and the computation itself. Units can run other units from
//! inside their computation through the same pipeline.
//!
//! # Core Concepts
//!
//! - [`Interaction`] - A unit with a single computation
//! - [`Lifecycle`] - Hook declarations, usually `#[derive(Lifecycle)]`
//! - [`Validate`] - Field rules, usually `#[derive(Validate)]`
//! - [`execute`] / [`compose`] - Run a unit, top-level or nested
//! - [`InteractionError`] - Validation, hook and execution failures
//!
//! # Example
//!
//! ```
//! use interactor_core::prelude::*;
//!
//! #[derive(Lifecycle, Validate)]
//! struct Deposit {
//!     #[validate(gt = 0)]
//!     amount: i64,
//!     balance: i64,
//!     #[hooks(after = "audit")]
//!     execute_hooks: ExecuteHooks,
//!     audited: bool,
//! }
//!
//! impl Deposit {
//!     fn audit(&mut self) {
//!         self.audited = true;
//!     }
//! }
//!
//! impl Interaction for Deposit {
//!     type Output = i64;
//!
//!     fn run(&mut self) -> InteractionResult<i64> {
//!         self.balance += self.amount;
//!         Ok(self.balance)
//!     }
//! }
//!
//! let mut deposit = Deposit {
//!     amount: 5,
//!     balance: 10,
//!     execute_hooks: ExecuteHooks,
//!     audited: false,
//! };
//! assert_eq!(execute(&mut deposit).unwrap(), 15);
//! assert!(deposit.audited);
//! ```
//!
//! # Architecture
//!
//! - [`hooks`]: capability markers, the [`Lifecycle`] table, the resolver
//! - [`validation`]: the rule engine and the field-keyed [`ErrorMap`]
//! - [`pipeline`]: [`execute`] and [`compose`]

// Self-reference so derive-generated `interactor_core::` paths resolve within this crate.
extern crate self as interactor_core;

pub mod error;
pub mod hooks;
pub mod pipeline;
pub mod validation;

pub use error::{InteractionError, InteractionResult};
pub use hooks::{ExecuteHooks, Hook, HookDecl, Lifecycle, Phase, Position, ValidateHooks};
pub use pipeline::{Interaction, compose, execute};
pub use validation::{ErrorMap, ValidationError, Validate};

// Re-export derive macros.
pub use interactor_macros::{Lifecycle, Validate};

/// Re-export all common types for easy access.
pub mod prelude {
    // Trait and derive share each name, so import them from the crate root.
    pub use crate::{Lifecycle, Validate};

    pub use crate::error::{InteractionError, InteractionResult};
    pub use crate::hooks::{ExecuteHooks, ValidateHooks};
    pub use crate::pipeline::{Interaction, compose, execute};
    pub use crate::validation::ErrorMap;
}
