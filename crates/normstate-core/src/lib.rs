//! Normalized entity state and the selectors that read it.
//!
//! This crate owns the state contract for collections of uniquely
//! identified records kept in an application's in-memory cache:
//!
//! - **Data model** ([`model`]): [`BaseState`] (ordered `ids` plus an
//!   id-to-entity map), [`SelectableState`], [`AjaxState`] and the
//!   composites [`AjaxBaseState`] / [`SelectableAjaxBaseState`]. Shapes are
//!   combined by embedding, and read through the capability traits
//!   [`HasEntities`], [`HasSelection`] and [`HasAjax`], so application types
//!   with the same fields plug straight into the selectors.
//!
//! - **Factories** ([`states`]): the only way to obtain an initial state.
//!
//! - **Selectors** ([`selectors`]): pure, total derivations: entity lookup
//!   and projection, plus the Untouched / Loading / Loaded / Errored
//!   classification of the fetch status.
//!
//! - **Transitions** ([`transition`]): value-consuming helpers a reducer
//!   can use to build the next state without breaking the invariants.
//!
//! - **Validation** ([`validate`]): reports invariant violations as
//!   [`StateError`]s. Selectors never need it; they treat corrupt data as
//!   a lookup miss.
//!
//! Nothing here performs I/O, spawns work, or keeps hidden state.

pub mod error;
pub mod model;
pub mod selectors;
pub mod states;
pub mod transition;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::StateError;
pub use model::{
    AjaxBaseState, AjaxState, BaseState, Entity, EntityId, EntityMap, HasAjax, HasEntities,
    HasSelection, SelectableAjaxBaseState, SelectableState,
};
pub use selectors::{
    AjaxStatus, get_entities, get_entity, has_error, is_loaded, is_loading, is_ready,
    map_entities, selected_entity, status,
};
pub use states::{
    ajax_base_state, ajax_state, base_state, selectable_ajax_base_state, selectable_state,
};
pub use transition::{EntityReducer, FetchLifecycle, SelectionReducer};
