//! `check`: report every invariant a snapshot violates.

use tabled::Tabled;

use normstate_core::validate;

use crate::cli::{OutputFormat, SnapshotArgs};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;
use crate::snapshot;

#[derive(Tabled)]
struct ViolationRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Violation")]
    message: String,
}

pub fn handle(args: &SnapshotArgs, settings: &Settings) -> Result<(), CliError> {
    // Always load leniently; reporting violations is the point.
    let snapshot = snapshot::load(&args.file)?;
    let violations = validate::violations(&snapshot);
    let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();

    let out = match settings.output {
        OutputFormat::Table | OutputFormat::Plain if messages.is_empty() => "ok".to_owned(),
        format => output::render_list(
            format,
            &messages,
            |i, message| ViolationRow {
                position: i + 1,
                message: message.clone(),
            },
            Clone::clone,
        )?,
    };
    output::print_output(&out, settings.quiet);

    match violations.into_iter().next() {
        None => Ok(()),
        Some(first) => Err(CliError::InvalidState {
            path: args.file.display().to_string(),
            count: messages.len(),
            first,
        }),
    }
}
