// ── Selectors ──
//
// Pure derivations over any type implementing the capability traits in
// `crate::model`. Total for every input; lookups miss with `None`.

pub mod ajax;
pub mod entity;

pub use ajax::{AjaxStatus, has_error, is_loaded, is_loading, is_ready, status};
pub use entity::{get_entities, get_entity, map_entities, selected_entity};
