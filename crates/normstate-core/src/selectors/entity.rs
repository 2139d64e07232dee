// ── Entity selectors ──
//
// Read-only projections over a normalized collection. A miss is `None`,
// never a panic, including when the collection violates its invariant.

use tracing::warn;

use crate::model::{EntityId, HasEntities, HasSelection};

/// Look up a single entity.
///
/// `None` for "no id given" and for ids that are not in `all`. Every
/// `EntityId` value, including `0` and `""`, is looked up normally.
pub fn get_entity<'a, T, S>(state: &'a S, id: Option<&EntityId>) -> Option<&'a T>
where
    S: HasEntities<T> + ?Sized,
{
    state.all().get(id?)
}

/// Look up several entities, one result per requested id.
///
/// Order and duplicates of `ids` are preserved; misses stay in place as
/// `None` so results line up with the request.
pub fn get_entities<'a, 'i, T, S, I>(state: &'a S, ids: I) -> Vec<Option<&'a T>>
where
    S: HasEntities<T> + ?Sized,
    I: IntoIterator<Item = &'i EntityId>,
{
    ids.into_iter().map(|id| state.all().get(id)).collect()
}

/// Every entity of the collection in `ids` order, one slot per id.
///
/// For a consistent state every slot is `Some`. An id without a backing
/// entity yields `None` in its position (and is logged), so the result is
/// always as long as `ids` and lines up with it.
pub fn map_entities<T, S>(state: &S) -> Vec<Option<&T>>
where
    S: HasEntities<T> + ?Sized,
{
    let entities = get_entities::<T, S, _>(state, state.ids());
    for (id, entity) in state.ids().iter().zip(&entities) {
        if entity.is_none() {
            warn!(%id, "id has no backing entity");
        }
    }
    entities
}

/// The currently selected entity, if any.
///
/// A selected id that no longer resolves is reported as `None`.
pub fn selected_entity<T, S>(state: &S) -> Option<&T>
where
    S: HasEntities<T> + HasSelection + ?Sized,
{
    get_entity::<T, S>(state, state.selected_id())
}
