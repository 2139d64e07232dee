//! Snapshot loading.
//!
//! A snapshot is one serialized `SelectableAjaxBaseState` whose entities
//! are arbitrary JSON values. Fields other than `ids` and `all` are
//! optional and fall back to the factory defaults.

use std::io::Read;
use std::path::Path;

use normstate_core::SelectableAjaxBaseState;
use normstate_core::validate;

use crate::error::CliError;

pub type Snapshot = SelectableAjaxBaseState<serde_json::Value>;

/// Encoding of a snapshot file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Json,
    Yaml,
}

impl Encoding {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_source(path: &Path) -> Result<String, CliError> {
    let read_err = |source| CliError::Read {
        path: path.display().to_string(),
        source,
    };

    if is_stdin(path) {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw).map_err(read_err)?;
        Ok(raw)
    } else {
        std::fs::read_to_string(path).map_err(read_err)
    }
}

/// Parse snapshot text in the given encoding.
fn parse(raw: &str, path: &Path) -> Result<Snapshot, CliError> {
    let display = path.display().to_string();
    match Encoding::for_path(path) {
        Encoding::Json => serde_json::from_str(raw).map_err(|source| CliError::Json {
            path: display,
            source,
        }),
        Encoding::Yaml => serde_yaml::from_str(raw).map_err(|source| CliError::Yaml {
            path: display,
            source,
        }),
    }
}

/// Read and parse a snapshot. `-` reads JSON from stdin.
pub fn load(path: &Path) -> Result<Snapshot, CliError> {
    let raw = read_source(path)?;
    let snapshot = parse(&raw, path)?;
    tracing::debug!(
        path = %path.display(),
        entities = snapshot.selectable.base.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Load a snapshot and, in strict mode, reject it on the first violation.
pub fn load_checked(path: &Path, strict: bool) -> Result<Snapshot, CliError> {
    let snapshot = load(path)?;
    if strict {
        let violations = validate::violations(&snapshot);
        if let Some(first) = violations.first() {
            return Err(CliError::InvalidState {
                path: path.display().to_string(),
                count: violations.len(),
                first: first.clone(),
            });
        }
    }
    Ok(snapshot)
}
