//! Entity kinds and typed create inputs.
//!
//! The record-bearing entity kinds are a deliberately *closed* enum so that
//! key naming, counter seeding, and listing never meet an unknown type. The
//! doctor–patient link is not a kind: it allocates no identifier and is
//! stored as a membership set, not a record.
//!
//! Create inputs carry the raw string fields the form layer collected.
//! `serde` renames keep the wire names (`hospital_ID`, `patient_ID`, `type`)
//! aligned with the stored field names so the embedding service can
//! deserialize request bodies directly.

use serde::{Deserialize, Serialize};

/// A record-bearing entity type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Hospital,
    Doctor,
    Patient,
    Diagnosis,
}

impl EntityKind {
    /// Every record-bearing kind, in counter-seeding order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Hospital,
        EntityKind::Doctor,
        EntityKind::Patient,
        EntityKind::Diagnosis,
    ];

    /// The store key prefix for this kind. These values are part of the
    /// stored data layout and must not change.
    pub fn key_prefix(self) -> &'static str {
        match self {
            EntityKind::Hospital => "hospital",
            EntityKind::Doctor => "doctor",
            EntityKind::Patient => "patient",
            EntityKind::Diagnosis => "diagnosis",
        }
    }
}

/// Fields for a new hospital record. No foreign references.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewHospital {
    pub name: String,
    pub address: String,
    pub beds_number: String,
    pub phone: String,
}

/// Fields for a new doctor record.
///
/// `hospital_id` is referentially checked only when non-empty; an empty
/// reference is accepted and stored as-is.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewDoctor {
    pub surname: String,
    pub profession: String,
    #[serde(rename = "hospital_ID", default)]
    pub hospital_id: String,
}

/// Fields for a new patient record. `sex` must be `M` or `F`; `mpn` is the
/// medical personal number, treated as an opaque string.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewPatient {
    pub surname: String,
    pub born_date: String,
    pub sex: String,
    pub mpn: String,
}

/// Fields for a new diagnosis record. `patient_id` is always referentially
/// checked, empty or not.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewDiagnosis {
    #[serde(rename = "patient_ID")]
    pub patient_id: String,
    #[serde(rename = "type")]
    pub diagnosis_type: String,
    #[serde(default)]
    pub information: String,
}

/// Endpoints for a new doctor–patient link. Both must resolve to existing
/// records; the link itself is an idempotent set membership.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewDoctorPatientLink {
    #[serde(rename = "doctor_ID")]
    pub doctor_id: String,
    #[serde(rename = "patient_ID")]
    pub patient_id: String,
}
