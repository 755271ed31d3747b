//! Tracing setup for interactor pipelines.
//!
//! The pipeline emits `tracing` spans and events (`execute` / `compose`
//! spans, hook invocations, validation failures). [`TelemetryConfig`] installs
//! a `tracing_subscriber` registry that renders them.
//!
//! # Example
//!
//! ```
//! use interactor_telemetry::{TelemetryConfig, TelemetryFormat};
//! use tracing::Level;
//!
//! TelemetryConfig::default()
//!     .with_level(Level::DEBUG)
//!     .with_format(TelemetryFormat::Compact)
//!     .init();
//! ```
//!
//! # Environment Filter
//!
//! `RUST_LOG` takes precedence over the configured filter when it is set,
//! so a deployed binary can raise verbosity without a rebuild:
//!
//! ```text
//! RUST_LOG=interactor_core=trace ./my-service
//! ```

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable that overrides the configured filter.
pub const ENV_FILTER_VAR: &str = "RUST_LOG";

/// Directives added by [`TelemetryConfig::with_hook_tracing`].
pub const HOOK_DIRECTIVES: [&str; 2] = [
    "interactor_core::hooks=trace",
    "interactor_core::validation=trace",
];

// ─────────────────────────────────────────────────────────────────────────────
// TelemetryFormat
// ─────────────────────────────────────────────────────────────────────────────

/// How events are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TelemetryFormat {
    /// Multi-line, colored; the default.
    #[default]
    Pretty,
    /// One line per event.
    Compact,
    /// Newline-delimited JSON objects.
    Json,
}

// ─────────────────────────────────────────────────────────────────────────────
// TelemetryError
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive string could not be parsed.
    #[error("invalid filter directive '{directive}': {source}")]
    InvalidFilter {
        /// The rejected directive string.
        directive: String,
        /// The parser error.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialized: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

// ─────────────────────────────────────────────────────────────────────────────
// TelemetryConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Subscriber configuration.
///
/// # Presets
///
/// ```
/// use interactor_telemetry::{TelemetryConfig, TelemetryFormat};
/// use tracing::Level;
///
/// // Local runs: every hook invocation, entering and leaving each unit
/// let local = TelemetryConfig::default()
///     .with_format(TelemetryFormat::Pretty)
///     .with_hook_tracing(true)
///     .with_span_events(true);
///
/// // Services: JSON lines, validation failures only
/// let service = TelemetryConfig::default()
///     .with_format(TelemetryFormat::Json)
///     .with_env_filter("interactor_core=debug,my_service=info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Level used when no directives are configured.
    level: Level,
    format: TelemetryFormat,
    /// Directives such as `"interactor_core=debug"`.
    env_filter: Option<String>,
    /// Emit an event when an `execute` / `compose` span is entered or left.
    span_events: bool,
    /// Raise `interactor_core::hooks` to `trace`, logging each hook call.
    trace_hooks: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: TelemetryFormat::Pretty,
            env_filter: None,
            span_events: false,
            trace_hooks: false,
        }
    }
}

impl TelemetryConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the level used when no directives are configured.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets how events are rendered.
    #[must_use]
    pub fn with_format(mut self, format: TelemetryFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets filter directives, `target=level` pairs separated by commas.
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Emits an event whenever a unit's span is entered or left.
    #[must_use]
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    /// Logs every hook invocation and failed rule, whatever the level.
    #[must_use]
    pub fn with_hook_tracing(mut self, enabled: bool) -> Self {
        self.trace_hooks = enabled;
        self
    }

    /// Returns the configured level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the configured format.
    #[must_use]
    pub fn format(&self) -> TelemetryFormat {
        self.format
    }

    /// Builds the filter: `RUST_LOG` if set, else the configured directives,
    /// else the configured level. Hook tracing applies on top of the latter
    /// two.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::InvalidFilter`] if the configured directives
    /// do not parse.
    pub fn filter(&self) -> Result<EnvFilter, TelemetryError> {
        if let Ok(filter) = EnvFilter::try_from_env(ENV_FILTER_VAR) {
            return Ok(filter);
        }

        let mut filter = match &self.env_filter {
            Some(directive) => {
                EnvFilter::try_new(directive).map_err(|source| TelemetryError::InvalidFilter {
                    directive: directive.clone(),
                    source,
                })?
            }
            None => EnvFilter::new(self.level.as_str()),
        };

        if self.trace_hooks {
            for directive in HOOK_DIRECTIVES {
                let parsed = directive
                    .parse()
                    .map_err(|source| TelemetryError::InvalidFilter {
                        directive: directive.to_string(),
                        source,
                    })?;
                filter = filter.add_directive(parsed);
            }
        }
        Ok(filter)
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter is invalid or a subscriber is already
    /// installed.
    pub fn try_init(&self) -> Result<(), TelemetryError> {
        let env_filter = self.filter()?;

        let span_events = if self.span_events {
            FmtSpan::ENTER | FmtSpan::EXIT
        } else {
            FmtSpan::NONE
        };

        let registry = tracing_subscriber::registry().with(env_filter);
        match self.format {
            TelemetryFormat::Pretty => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_span_events(span_events),
                )
                .try_init()?,
            TelemetryFormat::Compact => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_span_events(span_events),
                )
                .try_init()?,
            TelemetryFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_span_events(span_events),
                )
                .try_init()?,
        }

        tracing::info!(
            level = %self.level,
            format = ?self.format,
            "telemetry initialized"
        );
        Ok(())
    }

    /// Installs the global subscriber, keeping an existing one.
    ///
    /// An invalid filter falls back to the configured level.
    pub fn init(&self) {
        match self.try_init() {
            Ok(()) | Err(TelemetryError::AlreadyInitialized(_)) => {}
            Err(TelemetryError::InvalidFilter { directive, .. }) => {
                let fallback = Self {
                    env_filter: None,
                    ..self.clone()
                };
                fallback.try_init().ok();
                tracing::warn!(%directive, "invalid filter directive, using level filter");
            }
        }
    }
}
