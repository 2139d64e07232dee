// ── Normalized data model ──
//
// Identity plus the state shapes that every selector reads from.

pub mod entity_id;
pub mod state;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use normstate_core::model::*` gives you everything.

pub use entity_id::{Entity, EntityId};

pub use state::{
    AjaxBaseState, AjaxState, BaseState, EntityMap, HasAjax, HasEntities, HasSelection,
    SelectableAjaxBaseState, SelectableState,
};
