use clinic_store::StoreError;

/// The four failure kinds a registry operation can surface.
///
/// All of them are returned as typed results at the [`crate::Registry`]
/// boundary; none escapes as a panic. The embedding service decides how each
/// maps to a user-visible status.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A required field is missing/empty or fails a domain rule.
    /// Raised before any store access.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A foreign reference does not resolve to an existing record.
    /// Raised before any field of the dependent record is written.
    #[error("no {entity} with ID {id}")]
    Reference { entity: &'static str, id: String },

    /// The key-value store is unreachable. Fatal during startup bootstrap,
    /// recoverable during request handling.
    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),

    /// A create wrote fewer fields than expected. The record may exist in a
    /// partially written state at `key`; the identifier counter is not
    /// advanced, so the identifier is never reused and the partial record is
    /// left as an orphan.
    #[error("record {key} partially written: {written} of {expected} field writes succeeded")]
    WriteInconsistency {
        key: String,
        written: u64,
        expected: u64,
    },
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
