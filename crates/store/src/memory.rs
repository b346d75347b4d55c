//! In-process [`KvStore`] implementation.
//!
//! Backs every test in the workspace and any embedded use that does not want
//! a running Redis. Semantics follow the production backend where they are
//! observable: `increment` creates absent keys as 1, `hash_set` reports
//! whether the field was new, sets are unordered-but-deduplicated (modelled
//! here as ordered sets for deterministic iteration).

use crate::{KvStore, StoreError, StoreResult};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    strings: BTreeMap<String, String>,
    hashes: BTreeMap<String, BTreeMap<String, String>>,
    sets: BTreeMap<String, BTreeSet<String>>,
}

/// A shared in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.strings.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.lock()?.strings.insert(key.into(), value.into());
        Ok(())
    }

    fn increment(&self, key: &str) -> StoreResult<i64> {
        let mut inner = self.lock()?;
        let current = match inner.strings.get(key) {
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                StoreError::Unavailable(format!("value at {key} is not an integer"))
            })?,
            None => 0,
        };
        let next = current + 1;
        inner.strings.insert(key.into(), next.to_string());
        Ok(next)
    }

    fn hash_set(&self, key: &str, field: &str, value: &str) -> StoreResult<u64> {
        let mut inner = self.lock()?;
        let hash = inner.hashes.entry(key.into()).or_default();
        let created = !hash.contains_key(field);
        hash.insert(field.into(), value.into());
        Ok(u64::from(created))
    }

    fn hash_get_all(&self, key: &str) -> StoreResult<BTreeMap<String, String>> {
        Ok(self.lock()?.hashes.get(key).cloned().unwrap_or_default())
    }

    fn set_add(&self, key: &str, member: &str) -> StoreResult<()> {
        self.lock()?
            .sets
            .entry(key.into())
            .or_default()
            .insert(member.into());
        Ok(())
    }

    fn set_members(&self, key: &str) -> StoreResult<BTreeSet<String>> {
        Ok(self.lock()?.sets.get(key).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_creates_absent_key_as_one() {
        let store = MemoryStore::new();
        assert_eq!(store.increment("counter").unwrap(), 1);
        assert_eq!(store.increment("counter").unwrap(), 2);
        assert_eq!(store.get("counter").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn increment_rejects_non_integer_value() {
        let store = MemoryStore::new();
        store.set("counter", "not-a-number").unwrap();
        assert!(store.increment("counter").is_err());
    }

    #[test]
    fn hash_set_reports_new_versus_existing_field() {
        let store = MemoryStore::new();
        assert_eq!(store.hash_set("h", "name", "a").unwrap(), 1);
        assert_eq!(store.hash_set("h", "name", "b").unwrap(), 0);
        let map = store.hash_get_all("h").unwrap();
        assert_eq!(map.get("name").map(String::as_str), Some("b"));
    }

    #[test]
    fn hash_get_all_of_unknown_key_is_empty() {
        let store = MemoryStore::new();
        assert!(store.hash_get_all("missing").unwrap().is_empty());
    }

    #[test]
    fn set_add_is_idempotent() {
        let store = MemoryStore::new();
        store.set_add("s", "7").unwrap();
        store.set_add("s", "7").unwrap();
        store.set_add("s", "9").unwrap();
        let members = store.set_members("s").unwrap();
        assert_eq!(members.len(), 2);
        assert!(members.contains("7") && members.contains("9"));
    }

    #[test]
    fn set_members_of_unknown_key_is_empty() {
        let store = MemoryStore::new();
        assert!(store.set_members("missing").unwrap().is_empty());
    }
}
