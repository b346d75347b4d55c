//! Entity records as field maps.
//!
//! A record is a field-name-to-value map stored under `<type>:<id>`. A
//! record is *present* only if its map is non-empty; an identifier below the
//! counter with no stored fields is a gap (a failed create's tombstone, or a
//! counter seeded above existing data) and is skipped, not an error.

use crate::config::CoreConfig;
use crate::entity::EntityKind;
use crate::error::RegistryResult;
use crate::keys;
use clinic_store::KvStore;
use std::collections::BTreeMap;
use std::fmt::Display;

/// One record's stored fields.
pub type FieldMap = BTreeMap<String, String>;

/// Sets a single field of a record. Returns the store-level write count
/// (1 if the field was created, 0 if it already existed).
pub fn put_field<S: KvStore>(
    store: &S,
    kind: EntityKind,
    id: u64,
    field: &str,
    value: &str,
) -> RegistryResult<u64> {
    Ok(store.hash_set(&keys::record_key(kind, id), field, value)?)
}

/// Reads one record's field map; empty if the record is absent.
///
/// The identifier is looked up verbatim, which is what makes caller-supplied
/// reference strings like `"99"` resolve (or fail to) without parsing.
pub fn get_record<S: KvStore>(
    store: &S,
    kind: EntityKind,
    id: impl Display,
) -> RegistryResult<FieldMap> {
    Ok(store.hash_get_all(&keys::record_key(kind, id))?)
}

/// Lists every present record of `kind` in ascending identifier order.
///
/// Iterates identifiers from the configured base up to (excluding) the
/// current counter, skipping gaps. The result is a snapshot: a fresh call
/// re-reads current state. An absent or malformed counter yields an empty
/// list, matching how the system has always treated an uninitialized type.
pub fn list_all<S: KvStore>(
    store: &S,
    cfg: &CoreConfig,
    kind: EntityKind,
) -> RegistryResult<Vec<FieldMap>> {
    let counter_key = keys::counter_key(kind);
    let raw = match store.get(&counter_key)? {
        Some(raw) => raw,
        None => return Ok(Vec::new()),
    };

    let counter = match raw.trim().parse::<u64>() {
        Ok(counter) => counter,
        Err(_) => {
            tracing::warn!(key = %counter_key, value = %raw, "malformed identifier counter, listing nothing");
            return Ok(Vec::new());
        }
    };

    let mut items = Vec::new();
    for id in cfg.id_base(kind)..counter {
        let record = store.hash_get_all(&keys::record_key(kind, id))?;
        if !record.is_empty() {
            items.push(record);
        }
    }

    Ok(items)
}
