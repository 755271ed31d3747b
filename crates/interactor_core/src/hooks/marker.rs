//! Capability markers for the lifecycle hook phases.
//!
//! A unit opts into hook dispatch by embedding a marker field and attaching
//! the hook names to it:
//!
//! ```ignore
//! #[derive(Lifecycle)]
//! struct Signup {
//!     email: String,
//!     #[hooks(before = "trim|lowercase")]
//!     validate_hooks: ValidateHooks,
//! }
//! ```
//!
//! # Pure Markers
//!
//! Markers carry no behavior. The derive reads the phase from
//! [`PhaseMarker::PHASE`] and the names from the `#[hooks]` attribute, and
//! stores both in a static [`HookDecl`] table.

use core::fmt;

/// Separator between hook names in a declaration.
pub const HOOK_DELIMITER: char = '|';

// ─────────────────────────────────────────────────────────────────────────────
// Phase / Position
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle phase a hook is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Around field validation.
    Validate,
    /// Around the unit's computation.
    Execute,
}

impl Phase {
    /// Returns the lowercase name of the phase.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Validate => "validate",
            Phase::Execute => "execute",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a hook relative to its phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Runs before the phase.
    Before,
    /// Runs after the phase.
    After,
}

impl Position {
    /// Returns the lowercase name of the position.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Before => "before",
            Position::After => "after",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Marker types
// ─────────────────────────────────────────────────────────────────────────────

/// Implemented by the capability marker types.
pub trait PhaseMarker {
    /// The phase this marker opts the unit into.
    const PHASE: Phase;
}

/// Marker field for hooks around validation.
///
/// `before` hooks may normalize fields so that they pass validation. `after`
/// hooks only run when validation succeeded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidateHooks;

impl PhaseMarker for ValidateHooks {
    const PHASE: Phase = Phase::Validate;
}

/// Marker field for hooks around the unit's computation.
///
/// `after` hooks run once the computation's value has been captured, so
/// their mutations never reach the returned value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExecuteHooks;

impl PhaseMarker for ExecuteHooks {
    const PHASE: Phase = Phase::Execute;
}

// ─────────────────────────────────────────────────────────────────────────────
// HookDecl
// ─────────────────────────────────────────────────────────────────────────────

/// A marker's declared hook names, one entry per embedded marker field.
///
/// An empty list means the marker declares nothing for that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookDecl {
    /// Phase the marker belongs to.
    pub phase: Phase,
    /// `|`-separated names of the hooks that run before the phase.
    pub before: &'static str,
    /// `|`-separated names of the hooks that run after the phase.
    pub after: &'static str,
}

impl HookDecl {
    /// Creates a declaration for `phase`.
    #[must_use]
    pub const fn new(phase: Phase, before: &'static str, after: &'static str) -> Self {
        Self {
            phase,
            before,
            after,
        }
    }

    /// Returns the raw name list for `position`.
    #[must_use]
    pub fn list(&self, position: Position) -> &'static str {
        match position {
            Position::Before => self.before,
            Position::After => self.after,
        }
    }

    /// Iterates the hook names declared for `position`, in order.
    pub fn names(&self, position: Position) -> impl Iterator<Item = &'static str> {
        split_names(self.list(position))
    }
}

/// Splits a `|`-separated hook list into names.
///
/// Whitespace around each name is trimmed and empty segments are dropped, so
/// `""` yields no names and `"a| b"` yields `a`, `b`.
pub fn split_names(list: &str) -> impl Iterator<Item = &str> {
    list.split(HOOK_DELIMITER)
        .map(str::trim)
        .filter(|name| !name.is_empty())
}
