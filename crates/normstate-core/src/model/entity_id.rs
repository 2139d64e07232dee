// ── Core identity types ──
//
// EntityId is the key of every normalized collection. It unifies numeric
// and string identifiers behind a single ordered, hashable type.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ── EntityId ────────────────────────────────────────────────────────

/// Canonical identifier for an entity in a normalized collection.
///
/// Either a signed integer or an arbitrary string. A string that is the
/// canonical decimal rendering of an `i64` (`"42"`, `"-7"`, but not `"007"`
/// or `"+1"`) is normalized to a number. This keeps ids stable when they
/// travel through JSON object keys, which are always strings.
///
/// The representation is private, so every constructor goes through that
/// normalization: `EntityId::from("1") == EntityId::from(1)` always holds.
///
/// There is no "empty" id: `0` and `""` are ordinary ids. The absence of an
/// id is expressed with `Option<EntityId>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(Repr);

/// Numbers order before text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Repr {
    Number(i64),
    Text(String),
}

impl EntityId {
    pub fn as_number(&self) -> Option<i64> {
        match self.0 {
            Repr::Number(n) => Some(n),
            Repr::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.0 {
            Repr::Text(s) => Some(s),
            Repr::Number(_) => None,
        }
    }
}

/// Parse `s` as an `i64` only if formatting the result gives back `s`.
fn canonical_number(s: &str) -> Option<i64> {
    let n: i64 = s.parse().ok()?;
    (n.to_string() == s).then_some(n)
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Number(n) => write!(f, "{n}"),
            Repr::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        Self(Repr::Number(n))
    }
}

impl From<i32> for EntityId {
    fn from(n: i32) -> Self {
        Self(Repr::Number(i64::from(n)))
    }
}

impl From<u32> for EntityId {
    fn from(n: u32) -> Self {
        Self(Repr::Number(i64::from(n)))
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        match canonical_number(&s) {
            Some(n) => Self(Repr::Number(n)),
            None => Self(Repr::Text(s)),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        match canonical_number(s) {
            Some(n) => Self(Repr::Number(n)),
            None => Self(Repr::Text(s.to_owned())),
        }
    }
}

// ── Serde ───────────────────────────────────────────────────────────
//
// Hand-written so that ids survive being used as map keys: numbers are
// emitted as numbers (serde_json quotes them in key position) and any
// string input goes through the same normalization as `From<&str>`.

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Repr::Number(n) => serializer.serialize_i64(*n),
            Repr::Text(s) => serializer.serialize_str(s),
        }
    }
}

struct EntityIdVisitor;

impl Visitor<'_> for EntityIdVisitor {
    type Value = EntityId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or string entity id")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<EntityId, E> {
        Ok(EntityId::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<EntityId, E> {
        // Beyond i64 there is no canonical number, so the digits stay text.
        Ok(i64::try_from(v).map_or_else(
            |_| EntityId(Repr::Text(v.to_string())),
            EntityId::from,
        ))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<EntityId, E> {
        Ok(EntityId::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<EntityId, E> {
        Ok(EntityId::from(v))
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntityIdVisitor)
    }
}

// ── Entity ──────────────────────────────────────────────────────────

/// A record that knows its own identifier.
///
/// Only needed for the convenience constructors and transitions that take
/// bare entities (`from_entities`, `upsert_entity`). Collections of types
/// that do not implement it are built from `(EntityId, T)` pairs instead.
pub trait Entity {
    fn entity_id(&self) -> EntityId;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn entity_id_from_numeric_string() {
        let id = EntityId::from("42".to_owned());
        assert_eq!(id.as_number(), Some(42));
    }

    #[test]
    fn entity_id_keeps_non_canonical_numbers_as_text() {
        assert_eq!(EntityId::from("007").as_text(), Some("007"));
        assert_eq!(EntityId::from("+1").as_text(), Some("+1"));
        assert_eq!(EntityId::from(" 1").as_text(), Some(" 1"));
    }

    #[test]
    fn entity_id_zero_and_empty_are_real_ids() {
        assert_eq!(EntityId::from(0).as_number(), Some(0));
        assert_eq!(EntityId::from("").as_text(), Some(""));
    }

    #[test]
    fn entity_id_display() {
        assert_eq!(EntityId::from(-7).to_string(), "-7");
        assert_eq!(EntityId::from("user-a").to_string(), "user-a");
    }

    #[test]
    fn entity_id_from_str() {
        let id: EntityId = "abc".parse().unwrap();
        assert_eq!(id.as_text(), Some("abc"));
    }

    #[test]
    fn entity_id_serializes_as_scalar() {
        let ids = vec![EntityId::from(1), EntityId::from("a")];
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[1,"a"]"#);
    }

    #[test]
    fn entity_id_survives_json_map_keys() {
        let mut map = HashMap::new();
        map.insert(EntityId::from(3), "three");
        map.insert(EntityId::from("x"), "ex");

        let json = serde_json::to_string(&map).unwrap();
        let back: HashMap<EntityId, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.get(&EntityId::from(3)).map(String::as_str), Some("three"));
        assert_eq!(back.get(&EntityId::from("x")).map(String::as_str), Some("ex"));
    }

    #[test]
    fn entity_id_large_unsigned_becomes_text() {
        let id: EntityId = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(id.as_text(), Some("18446744073709551615"));
    }

    #[test]
    fn entity_id_numeric_text_equals_number() {
        assert_eq!(EntityId::from("1"), EntityId::from(1));
        assert_eq!(EntityId::from("1".to_owned()), EntityId::from(1));
        assert_eq!("-12".parse::<EntityId>().unwrap(), EntityId::from(-12));
    }

    #[test]
    fn entity_id_round_trips_through_json_unchanged() {
        for id in [
            EntityId::from("1"),
            EntityId::from(0),
            EntityId::from("007"),
            EntityId::from(""),
            EntityId::from("user-a"),
        ] {
            let json = serde_json::to_string(&id).unwrap();
            let back: EntityId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id, "{json}");
        }
    }

    #[test]
    fn numbers_order_before_text() {
        let mut ids = vec![EntityId::from("a"), EntityId::from(2), EntityId::from(-1)];
        ids.sort();
        assert_eq!(ids, vec![EntityId::from(-1), EntityId::from(2), EntityId::from("a")]);
    }
}
