//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one value per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use normstate_core::AjaxStatus;

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Status label, colored by outcome when `color` is set.
pub fn status_label(status: Option<AjaxStatus>, color: bool) -> String {
    let label: &str = status.map_or("unclassified", <&'static str>::from);
    if !color {
        return label.to_owned();
    }
    match status {
        Some(AjaxStatus::Loaded) => label.green().to_string(),
        Some(AjaxStatus::Loading) => label.cyan().to_string(),
        Some(AjaxStatus::Errored) | None => label.red().bold().to_string(),
        Some(AjaxStatus::Untouched) => label.dimmed().to_string(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable items in the chosen format.
///
/// - `table`: builds rows with `to_row` and renders them with `tabled`
/// - `json` / `json-compact` / `yaml`: serializes `data` via serde
/// - `plain`: calls `line_fn` on each item, one line per item
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(usize, &T) -> R,
    line_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().enumerate().map(|(i, d)| to_row(i, d)).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(data.iter().map(&line_fn).collect::<Vec<_>>().join("\n")),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses `detail_fn`, since single-item views are not
/// tabular.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    line_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(line_fn(data)),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Pretty-printed JSON.
pub(crate) fn render_json_pretty<T: serde::Serialize + ?Sized>(
    data: &T,
) -> Result<String, CliError> {
    serde_json::to_string_pretty(data).map_err(|e| CliError::Render(e.to_string()))
}

/// Compact single-line JSON.
pub(crate) fn render_json_compact<T: serde::Serialize + ?Sized>(
    data: &T,
) -> Result<String, CliError> {
    serde_json::to_string(data).map_err(|e| CliError::Render(e.to_string()))
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    if compact {
        render_json_compact(data)
    } else {
        render_json_pretty(data)
    }
}

/// YAML output. Trailing newline trimmed so `print_output` adds exactly one.
pub(crate) fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data)
        .map(|s| s.trim_end().to_owned())
        .map_err(|e| CliError::Render(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "#")]
        pos: usize,
        value: String,
    }

    fn values() -> Vec<serde_json::Value> {
        vec![json!({"id": 1}), json!({"id": 2})]
    }

    fn row(i: usize, v: &serde_json::Value) -> Row {
        Row {
            pos: i + 1,
            value: v.to_string(),
        }
    }

    #[test]
    fn list_as_compact_json() {
        let out = render_list(OutputFormat::JsonCompact, &values(), row, |v| v.to_string()).unwrap();
        insta::assert_snapshot!(out, @r###"[{"id":1},{"id":2}]"###);
    }

    #[test]
    fn list_as_plain_lines() {
        let out = render_list(OutputFormat::Plain, &values(), row, |v| v["id"].to_string()).unwrap();
        assert_eq!(out, "1\n2");
    }

    #[test]
    fn list_as_table_has_header_and_rows() {
        let out = render_list(OutputFormat::Table, &values(), row, |v| v.to_string()).unwrap();
        assert!(out.contains('#'));
        assert!(out.contains("value"));
        assert!(out.contains(r#"{"id":2}"#));
    }

    #[test]
    fn yaml_has_no_trailing_newline() {
        let out = render_single(OutputFormat::Yaml, &json!({"a": 1}), |_| String::new(), |_| String::new())
            .unwrap();
        assert_eq!(out, "a: 1");
    }

    #[test]
    fn status_label_without_color_is_plain() {
        assert_eq!(status_label(Some(AjaxStatus::Loaded), false), "loaded");
        assert_eq!(status_label(None, false), "unclassified");
    }

    #[test]
    fn status_label_with_color_wraps_in_escapes() {
        let label = status_label(Some(AjaxStatus::Errored), true);
        assert!(label.contains("errored"));
        assert!(label.contains('\u{1b}'));
    }
}
