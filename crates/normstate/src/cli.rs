//! Clap derive structures for the `normstate` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. Kept
//! free of other crate dependencies so `build.rs` can include it directly.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// normstate -- inspect normalized entity state snapshots
#[derive(Debug, Parser)]
#[command(
    name = "normstate",
    version,
    about = "Inspect normalized entity state snapshots",
    long_about = "Reads a JSON or YAML snapshot of a normalized collection \
        (ids, all, selectedId, loading, touched, errors, ready) and answers \
        the usual questions about it: is it loaded, what is selected, which \
        entities are there and in what order, and is the snapshot consistent.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, env = "NORMSTATE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(long, short = 'o', global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output (overrides config)
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Validate snapshot invariants before answering any query
    #[arg(long, global = true)]
    pub strict: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StateKind {
    /// ids + all
    Base,
    /// ids + all + selectedId
    Selectable,
    /// loading/touched/errors/ready
    Ajax,
    /// ids + all + loading/touched/errors/ready
    AjaxBase,
    /// ids + all + selectedId + loading/touched/errors/ready
    SelectableAjax,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the fetch status of a snapshot
    #[command(alias = "st")]
    Status(SnapshotArgs),

    /// List every entity in canonical (ids) order
    #[command(alias = "ls")]
    List(SnapshotArgs),

    /// Look up entities by id
    Get(GetArgs),

    /// Show the selected entity
    #[command(alias = "sel")]
    Selected(SnapshotArgs),

    /// Check a snapshot against the state invariants
    Check(SnapshotArgs),

    /// Print a freshly initialized state
    Init(InitArgs),

    /// Inspect CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Command Arguments ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Snapshot file (.json, .yaml, .yml), or '-' for JSON on stdin
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Snapshot file (.json, .yaml, .yml), or '-' for JSON on stdin
    pub file: PathBuf,

    /// Entity ids, in the order results should be returned
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Which state shape to initialize
    #[arg(long, short = 'k', default_value = "selectable-ajax")]
    pub kind: StateKind,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration (defaults, file, environment)
    Show,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
