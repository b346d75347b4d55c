/// A store backend failure.
///
/// Every backend error collapses into the single `Unavailable` kind: the
/// registry treats the store as reachable-or-not and never branches on the
/// specific cause, so distinguishing them here would only leak backend detail
/// through the seam.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("key-value store unavailable: {0}")]
    Unavailable(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        StoreError::Unavailable(e.to_string())
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
