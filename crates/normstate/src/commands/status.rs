//! `status`: fetch status and predicates of a snapshot.

use std::fmt::Write;

use serde::Serialize;

use normstate_core::{
    AjaxStatus, EntityId, HasSelection, has_error, is_loaded, is_loading, is_ready, status,
};

use crate::cli::SnapshotArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;
use crate::snapshot::{self, Snapshot};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
struct StatusReport {
    status: String,
    loading: bool,
    loaded: bool,
    errored: bool,
    ready: bool,
    errors: Vec<String>,
    entities: usize,
    selected_id: Option<EntityId>,
    #[serde(skip)]
    classified: Option<AjaxStatus>,
}

impl StatusReport {
    fn of(snapshot: &Snapshot) -> Self {
        let classified = status(snapshot);
        Self {
            status: output::status_label(classified, false),
            loading: is_loading(snapshot),
            loaded: is_loaded(snapshot),
            errored: has_error(snapshot),
            ready: is_ready(snapshot),
            errors: snapshot.ajax.errors.clone(),
            entities: snapshot.selectable.base.len(),
            selected_id: snapshot.selected_id().cloned(),
            classified,
        }
    }
}

fn detail(report: &StatusReport, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Status:    {}", output::status_label(report.classified, color));
    let _ = writeln!(out, "Loading:   {}", report.loading);
    let _ = writeln!(out, "Loaded:    {}", report.loaded);
    let _ = writeln!(out, "Errored:   {}", report.errored);
    let _ = writeln!(out, "Ready:     {}", report.ready);
    let _ = writeln!(out, "Entities:  {}", report.entities);
    let selected = report
        .selected_id
        .as_ref()
        .map_or_else(|| "-".to_owned(), ToString::to_string);
    let _ = write!(out, "Selected:  {selected}");
    for error in &report.errors {
        let _ = write!(out, "\nError:     {error}");
    }
    out
}

pub fn handle(args: &SnapshotArgs, settings: &Settings) -> Result<(), CliError> {
    let snapshot = snapshot::load_checked(&args.file, settings.strict)?;
    let report = StatusReport::of(&snapshot);
    tracing::debug!(status = %report.status, "classified snapshot");

    let color = output::should_color(settings.color);
    let out = output::render_single(
        settings.output,
        &report,
        |r| detail(r, color),
        |r| r.status.clone(),
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use normstate_core::FetchLifecycle;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn report_of_fresh_snapshot_is_untouched() {
        let report = StatusReport::of(&Snapshot::new());
        assert_eq!(report.status, "untouched");
        assert!(!report.loading && !report.loaded && !report.errored && !report.ready);
        assert_eq!(report.entities, 0);
    }

    #[test]
    fn report_of_failed_fetch_lists_errors() {
        let snapshot = Snapshot::new()
            .begin_fetch()
            .fetch_failed(vec!["timeout".to_owned()]);
        let report = StatusReport::of(&snapshot);

        assert_eq!(report.status, "errored");
        assert!(report.errored);
        assert_eq!(report.errors, vec!["timeout".to_owned()]);
    }

    #[test]
    fn detail_shows_selection_and_errors() {
        let mut snapshot = Snapshot::new().begin_fetch().fetch_failed(vec!["boom".to_owned()]);
        snapshot.selectable.selected_id = Some(EntityId::from(7));

        let text = detail(&StatusReport::of(&snapshot), false);
        assert!(text.contains("Status:    errored"));
        assert!(text.contains("Selected:  7"));
        assert!(text.ends_with("Error:     boom"));
    }
}
