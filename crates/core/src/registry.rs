//! The repository facade.
//!
//! [`Registry`] composes the allocator, record store, link store, and
//! validation into the five create and five list operations the embedding
//! service calls, plus the one-time store bootstrap.
//!
//! Every create follows the same sequence: validate required fields (no
//! store access yet), resolve referential checks, peek the next identifier,
//! write each field counting store-level successes, and only then advance
//! the counter. A success-count mismatch surfaces as `WriteInconsistency`
//! without advancing, so the identifier is never reused and the partial
//! record stays behind as an orphan.
//!
//! ## Concurrency
//!
//! Store primitives are individually atomic, but a create spans several of
//! them with no transaction. Two concurrent creates for the same entity kind
//! can both peek the same identifier before either advances; one of them then
//! overwrites the other's fields at that identifier (and typically reports
//! `WriteInconsistency`, since its field writes find the fields already
//! present). This lost-update window is a documented property of the design,
//! demonstrated in the tests below, and is not silently hardened here.

use crate::allocator;
use crate::config::CoreConfig;
use crate::entity::{
    EntityKind, NewDiagnosis, NewDoctor, NewDoctorPatientLink, NewHospital, NewPatient,
};
use crate::error::{RegistryError, RegistryResult};
use crate::keys;
use crate::links;
use crate::records::{self, FieldMap};
use crate::validation;
use clinic_store::KvStore;
use std::collections::{BTreeMap, BTreeSet};

/// Entity repository over an injected key-value store.
#[derive(Clone, Debug)]
pub struct Registry<S> {
    store: S,
    cfg: CoreConfig,
}

impl<S: KvStore> Registry<S> {
    pub fn new(store: S, cfg: CoreConfig) -> Self {
        Self { store, cfg }
    }

    /// One-time store initialization.
    ///
    /// If the sentinel is already set (to any non-empty value) this is a
    /// no-op; otherwise every identifier counter is seeded with its
    /// configured base and the sentinel is set, as a logical (not atomic)
    /// sequence. A store failure here should abort process startup: nothing
    /// downstream can function without the counters.
    pub fn bootstrap(&self) -> RegistryResult<()> {
        match self.store.get(keys::INIT_SENTINEL_KEY)? {
            Some(flag) if !flag.is_empty() => Ok(()),
            _ => {
                for kind in EntityKind::ALL {
                    self.store
                        .set(&keys::counter_key(kind), &self.cfg.id_base(kind).to_string())?;
                }
                self.store.set(keys::INIT_SENTINEL_KEY, "1")?;
                tracing::debug!("store bootstrapped, identifier counters seeded");
                Ok(())
            }
        }
    }

    pub fn create_hospital(&self, hospital: &NewHospital) -> RegistryResult<u64> {
        validation::validate_new_hospital(hospital)?;
        tracing::debug!(
            name = %hospital.name,
            address = %hospital.address,
            beds_number = %hospital.beds_number,
            phone = %hospital.phone,
            "create hospital"
        );

        self.create_record(
            EntityKind::Hospital,
            &[
                ("name", &hospital.name),
                ("address", &hospital.address),
                ("phone", &hospital.phone),
                ("beds_number", &hospital.beds_number),
            ],
        )
    }

    /// Creates a doctor record. The hospital reference is checked only when
    /// non-empty; an empty reference is accepted and stored as-is.
    pub fn create_doctor(&self, doctor: &NewDoctor) -> RegistryResult<u64> {
        validation::validate_new_doctor(doctor)?;
        tracing::debug!(
            surname = %doctor.surname,
            profession = %doctor.profession,
            hospital_id = %doctor.hospital_id,
            "create doctor"
        );

        if !doctor.hospital_id.is_empty() {
            validation::require_exists(&self.store, EntityKind::Hospital, &doctor.hospital_id)?;
        }

        self.create_record(
            EntityKind::Doctor,
            &[
                ("surname", &doctor.surname),
                ("profession", &doctor.profession),
                ("hospital_ID", &doctor.hospital_id),
            ],
        )
    }

    pub fn create_patient(&self, patient: &NewPatient) -> RegistryResult<u64> {
        validation::validate_new_patient(patient)?;
        tracing::debug!(
            surname = %patient.surname,
            born_date = %patient.born_date,
            sex = %patient.sex,
            mpn = %patient.mpn,
            "create patient"
        );

        self.create_record(
            EntityKind::Patient,
            &[
                ("surname", &patient.surname),
                ("born_date", &patient.born_date),
                ("sex", &patient.sex),
                ("mpn", &patient.mpn),
            ],
        )
    }

    /// Creates a diagnosis record. The patient reference is always checked.
    pub fn create_diagnosis(&self, diagnosis: &NewDiagnosis) -> RegistryResult<u64> {
        validation::validate_new_diagnosis(diagnosis)?;
        tracing::debug!(
            patient_id = %diagnosis.patient_id,
            diagnosis_type = %diagnosis.diagnosis_type,
            information = %diagnosis.information,
            "create diagnosis"
        );

        validation::require_exists(&self.store, EntityKind::Patient, &diagnosis.patient_id)?;

        self.create_record(
            EntityKind::Diagnosis,
            &[
                ("patient_ID", &diagnosis.patient_id),
                ("type", &diagnosis.diagnosis_type),
                ("information", &diagnosis.information),
            ],
        )
    }

    /// Links a doctor and a patient. Both endpoints must exist; the link
    /// itself allocates no identifier and adding the same pair again is a
    /// no-op.
    pub fn link_doctor_patient(&self, link: &NewDoctorPatientLink) -> RegistryResult<()> {
        validation::validate_new_link(link)?;
        tracing::debug!(
            doctor_id = %link.doctor_id,
            patient_id = %link.patient_id,
            "link doctor and patient"
        );

        validation::require_exists(&self.store, EntityKind::Patient, &link.patient_id)?;
        validation::require_exists(&self.store, EntityKind::Doctor, &link.doctor_id)?;

        links::link(&self.store, &link.doctor_id, &link.patient_id)
    }

    /// Lists every present record of one kind, ascending by identifier.
    pub fn list_records(&self, kind: EntityKind) -> RegistryResult<Vec<FieldMap>> {
        records::list_all(&self.store, &self.cfg, kind)
    }

    pub fn list_hospitals(&self) -> RegistryResult<Vec<FieldMap>> {
        self.list_records(EntityKind::Hospital)
    }

    pub fn list_doctors(&self) -> RegistryResult<Vec<FieldMap>> {
        self.list_records(EntityKind::Doctor)
    }

    pub fn list_patients(&self) -> RegistryResult<Vec<FieldMap>> {
        self.list_records(EntityKind::Patient)
    }

    pub fn list_diagnoses(&self) -> RegistryResult<Vec<FieldMap>> {
        self.list_records(EntityKind::Diagnosis)
    }

    /// Every doctor's linked patients, omitting doctors with no links.
    pub fn list_doctor_patient_links(&self) -> RegistryResult<BTreeMap<u64, BTreeSet<String>>> {
        links::list_all(&self.store)
    }

    /// The patient identifiers linked to one doctor.
    pub fn linked_patients(&self, doctor_id: u64) -> RegistryResult<BTreeSet<String>> {
        links::members(&self.store, doctor_id)
    }

    /// Shared create algorithm: peek, write counting successes, advance.
    fn create_record(&self, kind: EntityKind, fields: &[(&str, &str)]) -> RegistryResult<u64> {
        let id = allocator::peek(&self.store, &self.cfg, kind)?;

        let mut written = 0u64;
        for (field, value) in fields {
            written += records::put_field(&self.store, kind, id, field, value)?;
        }

        let expected = fields.len() as u64;
        if written != expected {
            return Err(RegistryError::WriteInconsistency {
                key: keys::record_key(kind, id),
                written,
                expected,
            });
        }

        allocator::advance(&self.store, kind)?;
        Ok(id)
    }
}
