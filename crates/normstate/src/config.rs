//! CLI configuration: an optional TOML file layered with environment
//! variables, then overridden by command-line flags.
//!
//! Precedence, lowest first: built-in defaults, config file,
//! `NORMSTATE_*` environment variables, flags.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── TOML config structs ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Default output format: table, json, json-compact, yaml, plain.
    #[serde(default = "default_output")]
    pub output: String,

    /// Color mode: auto, always, never.
    #[serde(default = "default_color")]
    pub color: String,

    /// Validate invariants before every read command.
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            strict: false,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

// ── Paths ────────────────────────────────────────────────────────────

/// Platform config file location (e.g. `~/.config/normstate/config.toml`).
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "normstate")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        })
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("normstate");
    p
}

/// The file `--config` points at, or the platform default.
pub fn effective_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

// ── Config loading ───────────────────────────────────────────────────

/// Load config from `path` (if it exists) and the environment.
pub fn load_config(path: &Path) -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("NORMSTATE_"));

    let config: Config = figment.extract()?;
    tracing::debug!(path = %path.display(), ?config, "loaded configuration");
    Ok(config)
}

// ── Resolution ───────────────────────────────────────────────────────

/// Settings after applying flag overrides to the loaded config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: ColorMode,
    pub strict: bool,
    pub quiet: bool,
}

pub fn resolve(global: &GlobalOpts, config: &Config) -> Result<Settings, CliError> {
    let output = match global.output {
        Some(output) => output,
        None => parse_value::<OutputFormat>("output", &config.output)?,
    };
    let color = match global.color {
        Some(color) => color,
        None => parse_value::<ColorMode>("color", &config.color)?,
    };

    Ok(Settings {
        output,
        color,
        strict: global.strict || config.strict,
        quiet: global.quiet,
    })
}

fn parse_value<V: ValueEnum>(field: &str, raw: &str) -> Result<V, CliError> {
    V::from_str(raw, true).map_err(|_| {
        let expected: Vec<String> = V::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value().map(|p| p.get_name().to_owned()))
            .collect();
        CliError::Validation {
            field: field.into(),
            reason: format!("expected one of {}, got '{raw}'", expected.join(", ")),
        }
    })
}
