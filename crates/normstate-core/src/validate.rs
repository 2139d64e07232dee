// ── Invariant checks ──
//
// Detects, never repairs. Callers that trust their reducer can skip this
// entirely; selectors already degrade to "not found" on corrupt input.

use std::collections::HashSet;

use crate::error::StateError;
use crate::model::{HasAjax, HasEntities, HasSelection};

/// Every duplicate id, dangling id, and orphan entity in a collection.
///
/// Duplicates and dangling ids are reported in `ids` order; orphans are
/// sorted by id so the output is deterministic.
pub fn entity_violations<T, S>(state: &S) -> Vec<StateError>
where
    S: HasEntities<T> + ?Sized,
{
    let ids = state.ids();
    let all = state.all();
    let mut violations = Vec::new();
    let mut seen = HashSet::with_capacity(ids.len());

    for id in ids {
        if !seen.insert(id) {
            violations.push(StateError::DuplicateId { id: id.clone() });
        } else if !all.contains_key(id) {
            violations.push(StateError::DanglingId { id: id.clone() });
        }
    }

    let mut orphans: Vec<_> = all.keys().filter(|id| !seen.contains(id)).collect();
    orphans.sort();
    violations.extend(
        orphans
            .into_iter()
            .map(|id| StateError::OrphanEntity { id: id.clone() }),
    );

    violations
}

/// A selected id that is not a member of `ids`.
pub fn selection_violations<T, S>(state: &S) -> Vec<StateError>
where
    S: HasEntities<T> + HasSelection + ?Sized,
{
    match state.selected_id() {
        Some(id) if !state.ids().contains(id) => {
            vec![StateError::DanglingSelection { id: id.clone() }]
        }
        _ => Vec::new(),
    }
}

/// Fetch-status combinations the state machine does not classify.
pub fn ajax_violations<E, S>(state: &S) -> Vec<StateError>
where
    S: HasAjax<E> + ?Sized,
{
    let ajax = state.ajax();
    let mut violations = Vec::new();

    if ajax.loading && !ajax.errors.is_empty() {
        violations.push(StateError::StaleErrorsWhileLoading {
            count: ajax.errors.len(),
        });
    }
    if !ajax.touched {
        if ajax.loading {
            violations.push(StateError::UntouchedButActive { field: "loading" });
        }
        if !ajax.errors.is_empty() {
            violations.push(StateError::UntouchedButActive { field: "errors" });
        }
    }

    violations
}

/// All checks for a record carrying entities, a selection and a fetch status.
pub fn violations<T, E, S>(state: &S) -> Vec<StateError>
where
    S: HasEntities<T> + HasSelection + HasAjax<E> + ?Sized,
{
    let mut all = entity_violations::<T, S>(state);
    all.extend(selection_violations::<T, S>(state));
    all.extend(ajax_violations::<E, S>(state));
    all
}

fn first(violations: Vec<StateError>) -> Result<(), StateError> {
    match violations.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub fn validate_entities<T, S>(state: &S) -> Result<(), StateError>
where
    S: HasEntities<T> + ?Sized,
{
    first(entity_violations::<T, S>(state))
}

pub fn validate_selection<T, S>(state: &S) -> Result<(), StateError>
where
    S: HasEntities<T> + HasSelection + ?Sized,
{
    first(selection_violations::<T, S>(state))
}

pub fn validate_ajax<E, S>(state: &S) -> Result<(), StateError>
where
    S: HasAjax<E> + ?Sized,
{
    first(ajax_violations::<E, S>(state))
}

pub fn validate<T, E, S>(state: &S) -> Result<(), StateError>
where
    S: HasEntities<T> + HasSelection + HasAjax<E> + ?Sized,
{
    first(violations::<T, E, S>(state))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AjaxState, BaseState, EntityId, SelectableAjaxBaseState, SelectableState};
    use crate::states::{selectable_ajax_base_state, selectable_state};

    fn people() -> BaseState<&'static str> {
        BaseState::from_pairs([(EntityId::from(1), "Alice"), (EntityId::from(2), "Bob")])
    }

    #[test]
    fn well_formed_collection_passes() {
        assert_eq!(validate_entities(&people()), Ok(()));
    }

    #[test]
    fn factory_state_passes_every_check() {
        let state: SelectableAjaxBaseState<u8> = selectable_ajax_base_state();
        assert_eq!(validate(&state), Ok(()));
    }

    #[test]
    fn reports_duplicates_dangling_and_orphans() {
        let mut state = people();
        state.ids.push(EntityId::from(1));
        state.ids.push(EntityId::from(5));
        state.all.insert(EntityId::from("z"), "Zed");
        state.all.insert(EntityId::from("a"), "Ann");

        assert_eq!(
            entity_violations(&state),
            vec![
                StateError::DuplicateId { id: EntityId::from(1) },
                StateError::DanglingId { id: EntityId::from(5) },
                StateError::OrphanEntity { id: EntityId::from("a") },
                StateError::OrphanEntity { id: EntityId::from("z") },
            ]
        );
    }

    #[test]
    fn validate_returns_first_violation() {
        let mut state = people();
        state.ids.push(EntityId::from(9));

        assert_eq!(
            validate_entities(&state),
            Err(StateError::DanglingId { id: EntityId::from(9) })
        );
    }

    #[test]
    fn dangling_selection_is_reported() {
        let mut state = SelectableState::from(people());
        state.selected_id = Some(EntityId::from(3));

        assert_eq!(
            validate_selection(&state),
            Err(StateError::DanglingSelection { id: EntityId::from(3) })
        );

        state.selected_id = Some(EntityId::from(2));
        assert_eq!(validate_selection(&state), Ok(()));
    }

    #[test]
    fn no_selection_is_fine() {
        let state: SelectableState<u8> = selectable_state();
        assert!(selection_violations(&state).is_empty());
    }

    #[test]
    fn loading_with_errors_is_reported() {
        let state = AjaxState {
            loading: true,
            touched: true,
            errors: vec!["old".to_owned(), "older".to_owned()],
            ready: false,
        };

        assert_eq!(
            validate_ajax(&state),
            Err(StateError::StaleErrorsWhileLoading { count: 2 })
        );
    }

    #[test]
    fn activity_before_touch_is_reported() {
        let state = AjaxState {
            loading: true,
            touched: false,
            errors: vec!["x".to_owned()],
            ready: false,
        };

        assert_eq!(
            ajax_violations(&state),
            vec![
                StateError::StaleErrorsWhileLoading { count: 1 },
                StateError::UntouchedButActive { field: "loading" },
                StateError::UntouchedButActive { field: "errors" },
            ]
        );
    }

    #[test]
    fn violation_messages_name_the_id() {
        let err = StateError::DanglingId { id: EntityId::from("u-1") };
        assert_eq!(err.to_string(), "id u-1 is listed in ids but has no entity in all");
    }
}
