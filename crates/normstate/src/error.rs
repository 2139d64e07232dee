//! CLI error types with miette diagnostics.
//!
//! Wraps snapshot I/O, parse failures, lookup misses and invariant
//! violations into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use normstate_core::StateError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const INVALID_STATE: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Snapshot input ───────────────────────────────────────────────

    #[error("Could not read snapshot {path}")]
    #[diagnostic(
        code(normstate::read),
        help("Check that the file exists and is readable, or pass '-' to read stdin.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot {path} is not valid JSON")]
    #[diagnostic(
        code(normstate::json),
        help("A snapshot needs at least `ids` (array) and `all` (object keyed by id).")
    )]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Snapshot {path} is not valid YAML")]
    #[diagnostic(
        code(normstate::yaml),
        help("A snapshot needs at least `ids` (sequence) and `all` (mapping keyed by id).")
    )]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    // ── Lookups ──────────────────────────────────────────────────────

    #[error("No entity with id {ids}")]
    #[diagnostic(
        code(normstate::not_found),
        help("Run: normstate list {path} to see the ids in this snapshot")
    )]
    NotFound { ids: String, path: String },

    #[error("Nothing is selected")]
    #[diagnostic(code(normstate::no_selection), help("The snapshot has no `selectedId`."))]
    NoSelection,

    // ── Invariants ───────────────────────────────────────────────────

    #[error("Snapshot violates {count} state invariant(s)")]
    #[diagnostic(
        code(normstate::invalid_state),
        help("Run: normstate check {path} for the full list")
    )]
    InvalidState {
        path: String,
        count: usize,
        #[source]
        first: StateError,
    },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(normstate::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(normstate::config))]
    Config(Box<figment::Error>),

    // ── Output ───────────────────────────────────────────────────────

    #[error("Could not render output: {0}")]
    #[diagnostic(code(normstate::render))]
    Render(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::NoSelection => exit_code::NOT_FOUND,
            Self::InvalidState { .. } => exit_code::INVALID_STATE,
            Self::Validation { .. } | Self::Config(_) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}
