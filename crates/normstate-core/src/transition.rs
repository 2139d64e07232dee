// ── Reducer building blocks ──
//
// Value-in, value-out helpers for producing the next state. They take the
// previous state by value, so a snapshot that someone else still holds can
// only be "updated" by cloning it first; nothing is mutated behind a
// reader's back.

use tracing::debug;

use crate::model::{
    AjaxBaseState, AjaxState, BaseState, Entity, EntityId, SelectableAjaxBaseState,
    SelectableState,
};

// ── Entities ────────────────────────────────────────────────────────

/// Collection transitions that keep `ids` and `all` in step.
///
/// Implementors only provide access to their [`BaseState`]. Records that
/// refer into the collection (a selection) override [`reconcile`] to drop
/// references that no longer resolve.
///
/// [`reconcile`]: EntityReducer::reconcile
pub trait EntityReducer<T>: Sized {
    fn entities_mut(&mut self) -> &mut BaseState<T>;

    /// Called after every transition that can remove entities.
    fn reconcile(&mut self) {}

    /// Insert or replace one entity. A new id is appended to `ids`; an
    /// existing id keeps its position.
    fn upsert(mut self, id: EntityId, entity: T) -> Self {
        let base = self.entities_mut();
        if base.all.insert(id.clone(), entity).is_none() {
            base.ids.push(id);
        }
        self
    }

    fn upsert_many<I>(self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (EntityId, T)>,
    {
        pairs
            .into_iter()
            .fold(self, |state, (id, entity)| state.upsert(id, entity))
    }

    fn upsert_entity(self, entity: T) -> Self
    where
        T: Entity,
    {
        let id = entity.entity_id();
        self.upsert(id, entity)
    }

    /// Swap the whole collection for `pairs`, in their order.
    fn replace_all<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (EntityId, T)>,
    {
        *self.entities_mut() = BaseState::from_pairs(pairs);
        self.reconcile();
        self
    }

    /// Remove an id from both `ids` and `all`. Unknown ids are a no-op.
    fn remove(mut self, id: &EntityId) -> Self {
        let base = self.entities_mut();
        base.ids.retain(|existing| existing != id);
        if base.all.remove(id).is_none() {
            debug!(%id, "remove of unknown id");
        }
        self.reconcile();
        self
    }

    fn clear(mut self) -> Self {
        *self.entities_mut() = BaseState::new();
        self.reconcile();
        self
    }
}

// ── Selection ───────────────────────────────────────────────────────

pub trait SelectionReducer: Sized {
    fn selection_mut(&mut self) -> &mut Option<EntityId>;

    /// Replace the selection. Selecting an id that is not in the
    /// collection is allowed; `selected_entity` will report a miss.
    fn select(mut self, id: Option<EntityId>) -> Self {
        *self.selection_mut() = id;
        self
    }
}

// ── Fetch lifecycle ─────────────────────────────────────────────────

/// Drives the Untouched -> Loading -> Loaded | Errored machine.
///
/// `touched` only ever goes from `false` to `true`, and starting a fetch
/// clears previous errors, so these helpers never produce the unclassified
/// "loading with errors" combination.
pub trait FetchLifecycle<E>: Sized {
    fn ajax_mut(&mut self) -> &mut AjaxState<E>;

    fn begin_fetch(mut self) -> Self {
        let ajax = self.ajax_mut();
        ajax.loading = true;
        ajax.touched = true;
        ajax.errors.clear();
        self
    }

    fn fetch_succeeded(mut self) -> Self {
        let ajax = self.ajax_mut();
        ajax.loading = false;
        ajax.touched = true;
        ajax.errors.clear();
        self
    }

    /// Record a failed fetch. An empty `errors` batch leaves the state
    /// Loaded, since only the presence of errors marks a failure.
    fn fetch_failed<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let ajax = self.ajax_mut();
        ajax.loading = false;
        ajax.touched = true;
        ajax.errors = errors.into_iter().collect();
        if ajax.errors.is_empty() {
            debug!("fetch_failed called without errors; state is loaded");
        }
        self
    }

    fn set_ready(mut self, ready: bool) -> Self {
        self.ajax_mut().ready = ready;
        self
    }
}

// ── Implementations ─────────────────────────────────────────────────

fn drop_dangling_selection<T>(base: &BaseState<T>, selected: &mut Option<EntityId>) {
    if selected.as_ref().is_some_and(|id| !base.contains(id)) {
        debug!(id = ?selected, "selected entity removed; clearing selection");
        *selected = None;
    }
}

impl<T> EntityReducer<T> for BaseState<T> {
    fn entities_mut(&mut self) -> &mut BaseState<T> {
        self
    }
}

impl<T> EntityReducer<T> for SelectableState<T> {
    fn entities_mut(&mut self) -> &mut BaseState<T> {
        &mut self.base
    }

    fn reconcile(&mut self) {
        drop_dangling_selection(&self.base, &mut self.selected_id);
    }
}

impl<T> SelectionReducer for SelectableState<T> {
    fn selection_mut(&mut self) -> &mut Option<EntityId> {
        &mut self.selected_id
    }
}

impl<E> FetchLifecycle<E> for AjaxState<E> {
    fn ajax_mut(&mut self) -> &mut AjaxState<E> {
        self
    }
}

impl<T, E> EntityReducer<T> for AjaxBaseState<T, E> {
    fn entities_mut(&mut self) -> &mut BaseState<T> {
        &mut self.base
    }
}

impl<T, E> FetchLifecycle<E> for AjaxBaseState<T, E> {
    fn ajax_mut(&mut self) -> &mut AjaxState<E> {
        &mut self.ajax
    }
}

impl<T, E> EntityReducer<T> for SelectableAjaxBaseState<T, E> {
    fn entities_mut(&mut self) -> &mut BaseState<T> {
        &mut self.selectable.base
    }

    fn reconcile(&mut self) {
        self.selectable.reconcile();
    }
}

impl<T, E> SelectionReducer for SelectableAjaxBaseState<T, E> {
    fn selection_mut(&mut self) -> &mut Option<EntityId> {
        &mut self.selectable.selected_id
    }
}

impl<T, E> FetchLifecycle<E> for SelectableAjaxBaseState<T, E> {
    fn ajax_mut(&mut self) -> &mut AjaxState<E> {
        &mut self.ajax
    }
}
