//! # Clinic Store
//!
//! The key-value seam between the clinic registry and whatever actually holds
//! the data. The registry core is written against the [`KvStore`] trait and
//! never sees a concrete backend; the two implementations here are:
//!
//! - [`RedisStore`] — the production backend.
//! - [`MemoryStore`] — an in-process map, sufficient for tests and embedded use.
//!
//! The trait deliberately exposes only the seven primitives the registry
//! needs. Each primitive is atomic on its own; nothing here provides a
//! transaction across several of them, and the registry's contracts are
//! written with that in mind.
//!
//! **No domain concerns**: key naming, entity schemas, and validation belong
//! in `clinic-core`.

mod error;
mod memory;
mod redis_store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

use std::collections::{BTreeMap, BTreeSet};

/// The store primitives the clinic registry is built on.
///
/// Plain string keys and values throughout; a "hash" is a record's field map
/// and a "set" is a membership set. `hash_set` reports the store-level write
/// count (1 when the field was newly created, 0 otherwise) because the
/// registry counts those results to detect partially written records.
pub trait KvStore {
    /// Reads a plain string value, `None` if the key is absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes a plain string value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Increments an integer value by one, creating it as 1 if absent.
    fn increment(&self, key: &str) -> StoreResult<i64>;

    /// Sets one field of a hash. Returns 1 if the field was created,
    /// 0 if it already existed and was overwritten.
    fn hash_set(&self, key: &str, field: &str, value: &str) -> StoreResult<u64>;

    /// Reads all fields of a hash; empty map if the key is absent.
    fn hash_get_all(&self, key: &str) -> StoreResult<BTreeMap<String, String>>;

    /// Adds a member to a set, creating the set if absent. Idempotent.
    fn set_add(&self, key: &str, member: &str) -> StoreResult<()>;

    /// Reads all members of a set; empty set if the key is absent.
    fn set_members(&self, key: &str) -> StoreResult<BTreeSet<String>>;
}

// A shared store reference is itself a store, so a caller can keep hold of
// the concrete backend while handing the registry a borrow of it.
impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn increment(&self, key: &str) -> StoreResult<i64> {
        (**self).increment(key)
    }

    fn hash_set(&self, key: &str, field: &str, value: &str) -> StoreResult<u64> {
        (**self).hash_set(key, field, value)
    }

    fn hash_get_all(&self, key: &str) -> StoreResult<BTreeMap<String, String>> {
        (**self).hash_get_all(key)
    }

    fn set_add(&self, key: &str, member: &str) -> StoreResult<()> {
        (**self).set_add(key, member)
    }

    fn set_members(&self, key: &str) -> StoreResult<BTreeSet<String>> {
        (**self).set_members(key)
    }
}
