//! `init`: print a freshly initialized state of the requested shape.

use serde::Serialize;
use serde_json::Value;

use normstate_core::{
    ajax_base_state, ajax_state, base_state, selectable_ajax_base_state, selectable_state,
};

use crate::cli::{InitArgs, OutputFormat, StateKind};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

fn render<S: Serialize>(format: OutputFormat, state: &S) -> Result<String, CliError> {
    match format {
        OutputFormat::Table | OutputFormat::Json => output::render_json_pretty(state),
        OutputFormat::JsonCompact | OutputFormat::Plain => output::render_json_compact(state),
        OutputFormat::Yaml => output::render_yaml(state),
    }
}

/// Serialized initial state for `kind`.
pub fn initial_state(kind: StateKind, format: OutputFormat) -> Result<String, CliError> {
    match kind {
        StateKind::Base => render(format, &base_state::<Value>()),
        StateKind::Selectable => render(format, &selectable_state::<Value>()),
        StateKind::Ajax => render(format, &ajax_state::<String>()),
        StateKind::AjaxBase => render(format, &ajax_base_state::<Value, String>()),
        StateKind::SelectableAjax => {
            render(format, &selectable_ajax_base_state::<Value, String>())
        }
    }
}

pub fn handle(args: &InitArgs, settings: &Settings) -> Result<(), CliError> {
    let out = initial_state(args.kind, settings.output)?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
