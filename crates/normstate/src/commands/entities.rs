//! Entity commands: `list`, `get`, `selected`.

use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use normstate_core::{
    EntityId, HasEntities, HasSelection, get_entities, map_entities, selected_entity,
};

use crate::cli::{GetArgs, SnapshotArgs};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;
use crate::snapshot;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct EntityRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Entity")]
    entity: String,
}

/// One `get` result: the requested id and what it resolved to.
#[derive(Debug, Serialize)]
struct Lookup<'a> {
    id: &'a EntityId,
    entity: Option<&'a Value>,
}

const NOT_FOUND: &str = "(not found)";

fn compact(value: &Value) -> String {
    value.to_string()
}

fn pretty(value: &Value) -> String {
    format!("{value:#}")
}

// ── list ────────────────────────────────────────────────────────────

pub fn list(args: &SnapshotArgs, settings: &Settings) -> Result<(), CliError> {
    let snapshot = snapshot::load_checked(&args.file, settings.strict)?;

    // One slot per id, so row `i` belongs to `ids[i]`.
    let ids = snapshot.ids();
    let entities = map_entities(&snapshot);

    let out = output::render_list(
        settings.output,
        &entities,
        |i, entity| EntityRow {
            position: i + 1,
            id: ids.get(i).map_or_else(String::new, ToString::to_string),
            entity: entity.map_or_else(|| NOT_FOUND.to_owned(), compact),
        },
        |entity| entity.map_or_else(|| "null".to_owned(), compact),
    )?;
    output::print_output(&out, settings.quiet);
    Ok(())
}

// ── get ─────────────────────────────────────────────────────────────

pub fn get(args: &GetArgs, settings: &Settings) -> Result<(), CliError> {
    let snapshot = snapshot::load_checked(&args.file, settings.strict)?;
    let ids: Vec<EntityId> = args.ids.iter().map(|raw| EntityId::from(raw.as_str())).collect();

    let found = get_entities(&snapshot, &ids);
    let missing: Vec<String> = ids
        .iter()
        .zip(&found)
        .filter(|(_, entity)| entity.is_none())
        .map(|(id, _)| id.to_string())
        .collect();

    let lookups: Vec<Lookup<'_>> = ids
        .iter()
        .zip(&found)
        .map(|(id, entity)| Lookup { id, entity: *entity })
        .collect();
    let out = output::render_list(
        settings.output,
        &lookups,
        |i, lookup| EntityRow {
            position: i + 1,
            id: lookup.id.to_string(),
            entity: lookup
                .entity
                .map_or_else(|| NOT_FOUND.to_owned(), compact),
        },
        |lookup| lookup.entity.map_or_else(|| "null".to_owned(), compact),
    )?;
    output::print_output(&out, settings.quiet);

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CliError::NotFound {
            ids: missing.join(", "),
            path: args.file.display().to_string(),
        })
    }
}

// ── selected ────────────────────────────────────────────────────────

pub fn selected(args: &SnapshotArgs, settings: &Settings) -> Result<(), CliError> {
    let snapshot = snapshot::load_checked(&args.file, settings.strict)?;

    let Some(entity) = selected_entity(&snapshot) else {
        return Err(match snapshot.selected_id() {
            None => CliError::NoSelection,
            Some(id) => CliError::NotFound {
                ids: id.to_string(),
                path: args.file.display().to_string(),
            },
        });
    };

    let out = output::render_single(settings.output, entity, pretty, compact)?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
