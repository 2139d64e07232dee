// ── Normalized state shapes ──
//
// The constituent shapes (entities, selection, ajax) use disjoint field
// names, so the composite records flatten to a plain union of fields.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::entity_id::{Entity, EntityId};

/// Id-to-entity mapping. Iteration order is meaningless; use `ids`.
pub type EntityMap<T> = HashMap<EntityId, T>;

// ── BaseState ───────────────────────────────────────────────────────

/// A normalized collection: an ordered id list plus an id-to-entity map.
///
/// `ids` carries the canonical enumeration order and must be set-equal to
/// the key set of `all`, with no duplicates. The shape does not enforce
/// this; producers do, and [`crate::validate`] can check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseState<T> {
    pub ids: Vec<EntityId>,
    pub all: EntityMap<T>,
}

impl<T> BaseState<T> {
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            all: HashMap::new(),
        }
    }

    /// Build a collection from `(id, entity)` pairs in order.
    ///
    /// A repeated id keeps its first position and takes the later value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (EntityId, T)>,
    {
        let mut state = Self::new();
        for (id, entity) in pairs {
            if state.all.insert(id.clone(), entity).is_none() {
                state.ids.push(id);
            }
        }
        state
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.all.contains_key(id)
    }
}

impl<T: Entity> BaseState<T> {
    /// Build a collection from entities that carry their own id.
    pub fn from_entities<I>(entities: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_pairs(entities.into_iter().map(|e| (e.entity_id(), e)))
    }
}

impl<T> Default for BaseState<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ── SelectableState ─────────────────────────────────────────────────

/// A [`BaseState`] with an optional "current" entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectableState<T> {
    #[serde(flatten)]
    pub base: BaseState<T>,
    #[serde(default)]
    pub selected_id: Option<EntityId>,
}

impl<T> SelectableState<T> {
    pub fn new() -> Self {
        Self {
            base: BaseState::new(),
            selected_id: None,
        }
    }
}

impl<T> Default for SelectableState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<BaseState<T>> for SelectableState<T> {
    fn from(base: BaseState<T>) -> Self {
        Self {
            base,
            selected_id: None,
        }
    }
}

// ── AjaxState ───────────────────────────────────────────────────────

/// Status of the asynchronous fetch that populates a collection.
///
/// Producers must clear `errors` before setting `loading`; the state
/// machine in [`crate::selectors::ajax`] does not classify a loading
/// state with errors. `ready` is independent of the other three fields.
/// Missing fields deserialize to the factory defaults, so a plain entity
/// snapshot reads as an untouched collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AjaxState<E = String> {
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub touched: bool,
    #[serde(default = "Vec::new")]
    pub errors: Vec<E>,
    #[serde(default)]
    pub ready: bool,
}

impl<E> AjaxState<E> {
    pub fn new() -> Self {
        Self {
            loading: false,
            touched: false,
            errors: Vec::new(),
            ready: false,
        }
    }
}

impl<E> Default for AjaxState<E> {
    fn default() -> Self {
        Self::new()
    }
}

// ── Composites ──────────────────────────────────────────────────────

/// Entities plus fetch status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AjaxBaseState<T, E = String> {
    #[serde(flatten)]
    pub base: BaseState<T>,
    #[serde(flatten)]
    pub ajax: AjaxState<E>,
}

impl<T, E> AjaxBaseState<T, E> {
    pub fn new() -> Self {
        Self {
            base: BaseState::new(),
            ajax: AjaxState::new(),
        }
    }
}

impl<T, E> Default for AjaxBaseState<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Entities, selection and fetch status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectableAjaxBaseState<T, E = String> {
    #[serde(flatten)]
    pub selectable: SelectableState<T>,
    #[serde(flatten)]
    pub ajax: AjaxState<E>,
}

impl<T, E> SelectableAjaxBaseState<T, E> {
    pub fn new() -> Self {
        Self {
            selectable: SelectableState::new(),
            ajax: AjaxState::new(),
        }
    }
}

impl<T, E> Default for SelectableAjaxBaseState<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

// ── Capability traits ───────────────────────────────────────────────
//
// Selectors are generic over these rather than over concrete records, so
// any application type exposing the same fields can be read directly.

/// Read access to a normalized collection.
pub trait HasEntities<T> {
    fn ids(&self) -> &[EntityId];
    fn all(&self) -> &EntityMap<T>;
}

/// Read access to the selected id.
pub trait HasSelection {
    fn selected_id(&self) -> Option<&EntityId>;
}

/// Read access to the fetch status.
pub trait HasAjax<E> {
    fn ajax(&self) -> &AjaxState<E>;
}

impl<T> HasEntities<T> for BaseState<T> {
    fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    fn all(&self) -> &EntityMap<T> {
        &self.all
    }
}

impl<T> HasEntities<T> for SelectableState<T> {
    fn ids(&self) -> &[EntityId] {
        &self.base.ids
    }

    fn all(&self) -> &EntityMap<T> {
        &self.base.all
    }
}

impl<T> HasSelection for SelectableState<T> {
    fn selected_id(&self) -> Option<&EntityId> {
        self.selected_id.as_ref()
    }
}

impl<E> HasAjax<E> for AjaxState<E> {
    fn ajax(&self) -> &AjaxState<E> {
        self
    }
}

impl<T, E> HasEntities<T> for AjaxBaseState<T, E> {
    fn ids(&self) -> &[EntityId] {
        &self.base.ids
    }

    fn all(&self) -> &EntityMap<T> {
        &self.base.all
    }
}

impl<T, E> HasAjax<E> for AjaxBaseState<T, E> {
    fn ajax(&self) -> &AjaxState<E> {
        &self.ajax
    }
}

impl<T, E> HasEntities<T> for SelectableAjaxBaseState<T, E> {
    fn ids(&self) -> &[EntityId] {
        self.selectable.ids()
    }

    fn all(&self) -> &EntityMap<T> {
        self.selectable.all()
    }
}

impl<T, E> HasSelection for SelectableAjaxBaseState<T, E> {
    fn selected_id(&self) -> Option<&EntityId> {
        self.selectable.selected_id()
    }
}

impl<T, E> HasAjax<E> for SelectableAjaxBaseState<T, E> {
    fn ajax(&self) -> &AjaxState<E> {
        &self.ajax
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Task {
        id: i64,
        title: &'static str,
    }

    impl Entity for Task {
        fn entity_id(&self) -> EntityId {
            EntityId::from(self.id)
        }
    }

    #[test]
    fn from_pairs_keeps_first_position_and_last_value() {
        let state = BaseState::from_pairs([
            (EntityId::from(2), "b"),
            (EntityId::from(1), "a"),
            (EntityId::from(2), "b2"),
        ]);

        assert_eq!(state.ids, vec![EntityId::from(2), EntityId::from(1)]);
        assert_eq!(state.all.len(), 2);
        assert_eq!(state.all[&EntityId::from(2)], "b2");
    }

    #[test]
    fn from_entities_uses_entity_ids() {
        let state = BaseState::from_entities([
            Task { id: 9, title: "ship" },
            Task { id: 4, title: "test" },
        ]);

        assert_eq!(state.ids, vec![EntityId::from(9), EntityId::from(4)]);
        assert_eq!(state.all[&EntityId::from(4)].title, "test");
    }

    #[test]
    fn composite_serializes_as_flat_union() {
        let mut state: SelectableAjaxBaseState<String> = SelectableAjaxBaseState::new();
        state.selectable.base = BaseState::from_pairs([(EntityId::from(1), "Alice".to_owned())]);
        state.selectable.selected_id = Some(EntityId::from(1));

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            json!({
                "ids": [1],
                "all": { "1": "Alice" },
                "selectedId": 1,
                "loading": false,
                "touched": false,
                "errors": [],
                "ready": false,
            })
        );
    }

    #[test]
    fn composite_deserializes_numeric_keys_and_defaults() {
        let state: SelectableAjaxBaseState<String> = serde_json::from_value(json!({
            "ids": [2, "x"],
            "all": { "2": "Bob", "x": "Xavier" },
            "loading": false,
            "touched": true,
            "errors": [],
        }))
        .unwrap();

        assert_eq!(state.selectable.selected_id, None);
        assert!(!state.ajax.ready);
        assert_eq!(state.all()[&EntityId::from(2)], "Bob");
        assert_eq!(state.all()[&EntityId::from("x")], "Xavier");
    }

    /// An error payload with no `Default` impl.
    #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
    struct FetchError {
        status: u16,
        message: String,
    }

    #[test]
    fn composites_deserialize_with_non_default_error_type() {
        let missing: AjaxBaseState<String, FetchError> =
            serde_json::from_value(json!({ "ids": [], "all": {}, "touched": true })).unwrap();
        assert!(missing.ajax.errors.is_empty());

        let failed: SelectableAjaxBaseState<String, FetchError> = serde_json::from_value(json!({
            "ids": [1],
            "all": { "1": "Alice" },
            "touched": true,
            "errors": [{ "status": 503, "message": "unavailable" }],
        }))
        .unwrap();
        assert_eq!(
            failed.ajax.errors,
            vec![FetchError {
                status: 503,
                message: "unavailable".to_owned(),
            }]
        );
    }

    #[test]
    fn numeric_text_ids_round_trip_through_json() {
        let state = BaseState::from_pairs([(EntityId::from("1"), "x".to_owned())]);

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"ids":[1],"all":{"1":"x"}}"#);

        let back: BaseState<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert!(state.contains(&EntityId::from(1)));
    }
}
