//! Profile mapping: the user id → event count dictionary served by `/profiles`.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::id::UserId;

/// Read-only mapping of users to the number of events recorded for them.
///
/// Entries keep the order in which they appeared in the response document.
/// Each user id occurs at most once: a repeated key replaces the earlier
/// count in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileMapping {
    entries: Vec<(UserId, u64)>,
    index: HashMap<UserId, usize>,
}

impl ProfileMapping {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or replace the count for `user_id`, keeping its original position.
    pub fn insert(&mut self, user_id: UserId, count: u64) {
        if let Some(&pos) = self.index.get(&user_id) {
            self.entries[pos].1 = count;
        } else {
            self.index.insert(user_id.clone(), self.entries.len());
            self.entries.push((user_id, count));
        }
    }

    /// Event count recorded for `user_id`, if the user is known.
    #[must_use]
    pub fn get(&self, user_id: &UserId) -> Option<u64> {
        self.index.get(user_id).map(|&pos| self.entries[pos].1)
    }

    /// Resolve `user_id` into a [`UserLookup`].
    #[must_use]
    pub fn lookup(&self, user_id: &UserId) -> UserLookup {
        self.get(user_id)
            .map_or(UserLookup::NotFound, UserLookup::Found)
    }

    /// Number of users in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(user id, count)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&UserId, u64)> {
        self.entries.iter().map(|(id, count)| (id, *count))
    }
}

impl FromIterator<(UserId, u64)> for ProfileMapping {
    fn from_iter<I: IntoIterator<Item = (UserId, u64)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (user_id, count) in iter {
            mapping.insert(user_id, count);
        }
        mapping
    }
}

impl Serialize for ProfileMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (user_id, count) in &self.entries {
            map.serialize_entry(user_id, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProfileMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = ProfileMapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping user ids to non-negative event counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut mapping = ProfileMapping::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((user_id, count)) = access.next_entry::<UserId, u64>()? {
                    mapping.insert(user_id, count);
                }
                Ok(mapping)
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}

/// Body of a `GET /profiles` response: `{ "profiles": { "<user>": <count>, … } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesEnvelope {
    pub profiles: ProfileMapping,
}

/// Outcome of looking a single user up in a successfully fetched mapping.
///
/// `Found(0)` is a known user without events and must never be confused with
/// [`UserLookup::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserLookup {
    Found(u64),
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<ProfilesEnvelope, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn should_preserve_document_order_when_parsing() {
        let envelope = parse(r#"{"profiles":{"zed":1,"alice":3,"bob":0}}"#).unwrap();
        let ids: Vec<&str> = envelope.profiles.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["zed", "alice", "bob"]);
    }

    #[test]
    fn should_parse_empty_mapping() {
        let envelope = parse(r#"{"profiles":{}}"#).unwrap();
        assert!(envelope.profiles.is_empty());
        assert_eq!(envelope.profiles.len(), 0);
    }

    #[test]
    fn should_replace_repeated_key_in_place() {
        let envelope = parse(r#"{"profiles":{"alice":1,"bob":2,"alice":7}}"#).unwrap();
        let entries: Vec<(&str, u64)> = envelope
            .profiles
            .iter()
            .map(|(id, count)| (id.as_str(), count))
            .collect();
        assert_eq!(entries, vec![("alice", 7), ("bob", 2)]);
    }

    #[test]
    fn should_ignore_unrelated_envelope_fields() {
        let envelope = parse(r#"{"ok":true,"profiles":{"alice":3}}"#).unwrap();
        assert_eq!(envelope.profiles.get(&UserId::from("alice")), Some(3));
    }

    #[test]
    fn should_reject_missing_profiles_field() {
        assert!(parse(r#"{"users":{}}"#).is_err());
    }

    #[test]
    fn should_reject_non_object_profiles() {
        assert!(parse(r#"{"profiles":[1,2]}"#).is_err());
        assert!(parse(r#"{"profiles":null}"#).is_err());
    }

    #[test]
    fn should_reject_negative_or_fractional_counts() {
        assert!(parse(r#"{"profiles":{"alice":-1}}"#).is_err());
        assert!(parse(r#"{"profiles":{"alice":1.5}}"#).is_err());
        assert!(parse(r#"{"profiles":{"alice":"3"}}"#).is_err());
    }

    #[test]
    fn should_distinguish_zero_count_from_missing_user() {
        let mapping: ProfileMapping = [(UserId::from("bob"), 0)].into_iter().collect();
        assert_eq!(mapping.lookup(&UserId::from("bob")), UserLookup::Found(0));
        assert_eq!(mapping.lookup(&UserId::from("carol")), UserLookup::NotFound);
    }

    #[test]
    fn should_serialize_in_insertion_order() {
        let mapping: ProfileMapping = [(UserId::from("b"), 2), (UserId::from("a"), 1)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&ProfilesEnvelope { profiles: mapping }).unwrap();
        assert_eq!(json, r#"{"profiles":{"b":2,"a":1}}"#);
    }
}
