//! Store key conventions.
//!
//! These key shapes are shared with previously stored data and must be
//! preserved bit-for-bit: `<type>:autoID` for counters, `<type>:<id>` for
//! records, `doctor-patient:<doctorId>` for link sets, and the
//! `db_initiated` bootstrap sentinel.
//!
//! Identifier arguments are accepted as anything displayable because
//! referential checks look up caller-supplied identifier *strings* verbatim,
//! while internal iteration uses integers.

use crate::entity::EntityKind;
use std::fmt::Display;

/// Key of the one-time bootstrap sentinel.
pub const INIT_SENTINEL_KEY: &str = "db_initiated";

/// Key of the identifier counter for an entity kind.
pub fn counter_key(kind: EntityKind) -> String {
    format!("{}:autoID", kind.key_prefix())
}

/// Key of one entity record.
pub fn record_key(kind: EntityKind, id: impl Display) -> String {
    format!("{}:{}", kind.key_prefix(), id)
}

/// Key of one doctor's patient membership set.
pub fn link_key(doctor_id: impl Display) -> String {
    format!("doctor-patient:{doctor_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_shapes_are_stable() {
        assert_eq!(counter_key(EntityKind::Hospital), "hospital:autoID");
        assert_eq!(counter_key(EntityKind::Diagnosis), "diagnosis:autoID");
        assert_eq!(record_key(EntityKind::Patient, 7), "patient:7");
        assert_eq!(record_key(EntityKind::Doctor, "42"), "doctor:42");
        assert_eq!(link_key(3), "doctor-patient:3");
        assert_eq!(INIT_SENTINEL_KEY, "db_initiated");
    }
}
