// ── Fetch status selectors ──
//
// Classifies the loading/touched/errors triple. Nothing is cached: every
// call re-reads the three fields.

use serde::Serialize;

use crate::model::HasAjax;

/// Where a collection's fetch lifecycle currently stands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AjaxStatus {
    /// No fetch has ever been attempted.
    Untouched,
    /// A fetch is in flight.
    Loading,
    /// The last fetch completed without errors.
    Loaded,
    /// The last fetch completed with at least one error.
    Errored,
}

/// A fetch is in flight and no error is recorded.
pub fn is_loading<E, S>(state: &S) -> bool
where
    S: HasAjax<E> + ?Sized,
{
    let ajax = state.ajax();
    ajax.loading && ajax.touched && ajax.errors.is_empty()
}

/// The last fetch finished successfully.
pub fn is_loaded<E, S>(state: &S) -> bool
where
    S: HasAjax<E> + ?Sized,
{
    let ajax = state.ajax();
    !ajax.loading && ajax.touched && ajax.errors.is_empty()
}

/// The last fetch finished with errors.
pub fn has_error<E, S>(state: &S) -> bool
where
    S: HasAjax<E> + ?Sized,
{
    let ajax = state.ajax();
    !ajax.loading && ajax.touched && !ajax.errors.is_empty()
}

/// The reducer-owned `ready` flag. Not derived from the other fields.
pub fn is_ready<E, S>(state: &S) -> bool
where
    S: HasAjax<E> + ?Sized,
{
    state.ajax().ready
}

/// Classify the fetch status.
///
/// Returns `None` for `loading` with a non-empty `errors` list. Producers
/// must clear errors before starting a fetch, so that combination is a
/// producer defect; it is reported rather than folded into `Loading` or
/// `Errored`, and all three predicates are `false` for it.
pub fn status<E, S>(state: &S) -> Option<AjaxStatus>
where
    S: HasAjax<E> + ?Sized,
{
    let ajax = state.ajax();
    if !ajax.touched {
        return Some(AjaxStatus::Untouched);
    }
    match (ajax.loading, ajax.errors.is_empty()) {
        (true, true) => Some(AjaxStatus::Loading),
        (false, true) => Some(AjaxStatus::Loaded),
        (false, false) => Some(AjaxStatus::Errored),
        (true, false) => None,
    }
}
