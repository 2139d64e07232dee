// ── State factories ──
//
// The only sanctioned way to obtain an initial state. Each call returns a
// fresh value with no storage shared with any other call.

use crate::model::{AjaxBaseState, AjaxState, BaseState, SelectableAjaxBaseState, SelectableState};

/// Empty collection: no ids, no entities.
pub fn base_state<T>() -> BaseState<T> {
    BaseState::new()
}

/// Empty collection with no selection.
pub fn selectable_state<T>() -> SelectableState<T> {
    SelectableState::new()
}

/// Untouched fetch status: not loading, no errors, not ready.
pub fn ajax_state<E>() -> AjaxState<E> {
    AjaxState::new()
}

pub fn ajax_base_state<T, E>() -> AjaxBaseState<T, E> {
    AjaxBaseState::new()
}

pub fn selectable_ajax_base_state<T, E>() -> SelectableAjaxBaseState<T, E> {
    SelectableAjaxBaseState::new()
}
