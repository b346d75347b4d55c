//! # Clinic Core
//!
//! The entity repository and relationship layer of the clinic record system:
//! stable identifier allocation, record persistence and listing, referential
//! checks, and the doctor–patient link set, all over an injected
//! [`clinic_store::KvStore`].
//!
//! The entry point is [`Registry`], which composes the pieces into
//! entity-specific create/list operations and owns the one-time store
//! bootstrap. The pieces themselves live in:
//!
//! - [`allocator`] — per-type identifier counters (`peek`/`advance`)
//! - [`records`] — entity records as field maps
//! - [`links`] — doctor→patient membership sets
//! - [`validation`] — required-field rules and referential checks
//! - [`keys`] — the store key conventions, kept compatible with existing data
//!
//! **No API concerns**: HTTP routing, form parsing, and rendering belong to
//! the embedding service; this crate takes already-parsed string fields and
//! returns typed results.

pub mod allocator;
pub mod config;
pub mod entity;
pub mod error;
pub mod keys;
pub mod links;
pub mod records;
pub mod registry;
pub mod validation;

pub use config::CoreConfig;
pub use entity::{
    EntityKind, NewDiagnosis, NewDoctor, NewDoctorPatientLink, NewHospital, NewPatient,
};
pub use error::{RegistryError, RegistryResult};
pub use records::FieldMap;
pub use registry::Registry;
