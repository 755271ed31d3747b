//! Lifecycle pipeline for business-logic units in Rust.
//!
//! A unit runs through before-validate hooks, declarative field validation,
//! after-validate hooks, before-execute hooks, its own computation and
//! after-execute hooks. See [`interactor_core`] for the details.

pub use interactor_core::*;

/// Subscriber setup for the `tracing` events emitted by the pipeline.
#[cfg(feature = "telemetry")]
pub use interactor_telemetry;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use interactor_core::prelude::*;
}
