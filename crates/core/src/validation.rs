//! Required-field rules and referential checks.
//!
//! Field validation runs before any store access; referential checks read
//! the store but run before any field of the dependent record is written.
//! There is no cross-entity transaction between a check and the write that
//! follows it, but the system supports no deletion, so a reference that
//! resolved once stays resolvable.

use crate::entity::{
    EntityKind, NewDiagnosis, NewDoctor, NewDoctorPatientLink, NewHospital, NewPatient,
};
use crate::error::{RegistryError, RegistryResult};
use crate::records;
use clinic_store::KvStore;

pub fn validate_new_hospital(hospital: &NewHospital) -> RegistryResult<()> {
    if hospital.name.is_empty() || hospital.address.is_empty() {
        return Err(RegistryError::Validation(
            "hospital name and address are required".into(),
        ));
    }
    Ok(())
}

pub fn validate_new_doctor(doctor: &NewDoctor) -> RegistryResult<()> {
    if doctor.surname.is_empty() || doctor.profession.is_empty() {
        return Err(RegistryError::Validation(
            "surname and profession are required".into(),
        ));
    }
    Ok(())
}

pub fn validate_new_patient(patient: &NewPatient) -> RegistryResult<()> {
    if patient.surname.is_empty()
        || patient.born_date.is_empty()
        || patient.sex.is_empty()
        || patient.mpn.is_empty()
    {
        return Err(RegistryError::Validation(
            "all patient fields are required".into(),
        ));
    }
    if !matches!(patient.sex.as_str(), "M" | "F") {
        return Err(RegistryError::Validation("sex must be 'M' or 'F'".into()));
    }
    Ok(())
}

pub fn validate_new_diagnosis(diagnosis: &NewDiagnosis) -> RegistryResult<()> {
    if diagnosis.patient_id.is_empty() || diagnosis.diagnosis_type.is_empty() {
        return Err(RegistryError::Validation(
            "patient ID and diagnosis type are required".into(),
        ));
    }
    Ok(())
}

pub fn validate_new_link(link: &NewDoctorPatientLink) -> RegistryResult<()> {
    if link.doctor_id.is_empty() || link.patient_id.is_empty() {
        return Err(RegistryError::Validation(
            "doctor ID and patient ID are required".into(),
        ));
    }
    Ok(())
}

/// True iff a record of `kind` is present under the given identifier string.
pub fn exists<S: KvStore>(store: &S, kind: EntityKind, id: &str) -> RegistryResult<bool> {
    Ok(!records::get_record(store, kind, id)?.is_empty())
}

/// Fails with a `Reference` error unless the referenced record is present.
pub fn require_exists<S: KvStore>(store: &S, kind: EntityKind, id: &str) -> RegistryResult<()> {
    if exists(store, kind, id)? {
        Ok(())
    } else {
        Err(RegistryError::Reference {
            entity: kind.key_prefix(),
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_store::MemoryStore;

    #[test]
    fn hospital_requires_name_and_address() {
        let ok = NewHospital {
            name: "North".into(),
            address: "1 Main St".into(),
            beds_number: String::new(),
            phone: String::new(),
        };
        assert!(validate_new_hospital(&ok).is_ok());

        let missing = NewHospital {
            name: String::new(),
            ..ok
        };
        assert!(matches!(
            validate_new_hospital(&missing),
            Err(RegistryError::Validation(_))
        ));
    }

    #[test]
    fn patient_sex_must_be_m_or_f() {
        let mut patient = NewPatient {
            surname: "Ivanova".into(),
            born_date: "1990-01-01".into(),
            sex: "F".into(),
            mpn: "0001".into(),
        };
        assert!(validate_new_patient(&patient).is_ok());

        patient.sex = "X".into();
        assert!(matches!(
            validate_new_patient(&patient),
            Err(RegistryError::Validation(_))
        ));
    }

    #[test]
    fn patient_requires_every_field() {
        let patient = NewPatient {
            surname: "Ivanova".into(),
            born_date: String::new(),
            sex: "F".into(),
            mpn: "0001".into(),
        };
        assert!(matches!(
            validate_new_patient(&patient),
            Err(RegistryError::Validation(_))
        ));
    }

    #[test]
    fn require_exists_distinguishes_present_and_absent() {
        let store = MemoryStore::new();
        records::put_field(&store, EntityKind::Patient, 1, "surname", "Ivanova").unwrap();

        assert!(require_exists(&store, EntityKind::Patient, "1").is_ok());
        let err = require_exists(&store, EntityKind::Patient, "2").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Reference {
                entity: "patient",
                ..
            }
        ));
    }
}
