// ── Core error types ──
//
// Selectors never fail. These errors only come out of `crate::validate`,
// which reports producer defects in a state value without repairing them.

use thiserror::Error;

use crate::model::EntityId;

/// An invariant the producing reducer was supposed to uphold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    // ── Entity collection ────────────────────────────────────────────
    #[error("id {id} appears more than once in ids")]
    DuplicateId { id: EntityId },

    #[error("id {id} is listed in ids but has no entity in all")]
    DanglingId { id: EntityId },

    #[error("entity {id} is in all but unreachable from ids")]
    OrphanEntity { id: EntityId },

    // ── Selection ────────────────────────────────────────────────────
    #[error("selected id {id} is not a member of ids")]
    DanglingSelection { id: EntityId },

    // ── Fetch status ─────────────────────────────────────────────────
    #[error("loading is set while {count} error(s) from a previous fetch remain")]
    StaleErrorsWhileLoading { count: usize },

    #[error("{field} is set on a collection that was never touched")]
    UntouchedButActive { field: &'static str },
}
