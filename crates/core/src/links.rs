//! Doctor–patient membership sets.
//!
//! A link is membership of a patient identifier in the set stored under
//! `doctor-patient:<doctorId>`. Sets are created lazily on first link, grow
//! monotonically, and adding an existing pair again is a no-op. Unlike
//! records, links allocate no identifier of their own.

use crate::entity::EntityKind;
use crate::error::RegistryResult;
use crate::keys;
use clinic_store::KvStore;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

/// Adds `patient_id` to the member set of `doctor_id`. Idempotent.
pub fn link<S: KvStore>(store: &S, doctor_id: &str, patient_id: &str) -> RegistryResult<()> {
    store.set_add(&keys::link_key(doctor_id), patient_id)?;
    Ok(())
}

/// The patient identifiers linked to one doctor; empty if none.
pub fn members<S: KvStore>(store: &S, doctor_id: impl Display) -> RegistryResult<BTreeSet<String>> {
    Ok(store.set_members(&keys::link_key(doctor_id))?)
}

/// Every doctor's member set, keyed by doctor identifier, omitting doctors
/// with no links.
///
/// Iterates doctor identifiers from 0 up to (excluding) the doctor counter —
/// from 0, not from the identifier base, which is how link sets have always
/// been enumerated against existing data. An absent or malformed counter
/// yields an empty map.
pub fn list_all<S: KvStore>(store: &S) -> RegistryResult<BTreeMap<u64, BTreeSet<String>>> {
    let counter_key = keys::counter_key(EntityKind::Doctor);
    let counter = match store.get(&counter_key)? {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(counter) => counter,
            Err(_) => {
                tracing::warn!(key = %counter_key, value = %raw, "malformed doctor counter, listing no links");
                return Ok(BTreeMap::new());
            }
        },
        None => return Ok(BTreeMap::new()),
    };

    let mut items = BTreeMap::new();
    for doctor_id in 0..counter {
        let set = store.set_members(&keys::link_key(doctor_id))?;
        if !set.is_empty() {
            items.insert(doctor_id, set);
        }
    }

    Ok(items)
}
