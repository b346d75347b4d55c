//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the
//! registry. Nothing in this crate reads environment variables during
//! request handling; the embedding process resolves its environment into a
//! [`CoreConfig`] and a store URL up front.

use crate::entity::EntityKind;
use crate::error::{RegistryError, RegistryResult};

/// The identifier base every counter is seeded with unless overridden.
pub const DEFAULT_ID_BASE: u64 = 1;

/// Default store endpoint, matching the original deployment.
pub const DEFAULT_STORE_HOST: &str = "localhost";
pub const DEFAULT_STORE_PORT: u16 = 6379;

/// Core configuration resolved at startup.
///
/// Holds the per-entity-type identifier base: the value counters are seeded
/// with at bootstrap, the fallback `peek` returns when a counter is absent,
/// and the lower bound of record listing.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    id_bases: [u64; EntityKind::ALL.len()],
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            id_bases: [DEFAULT_ID_BASE; EntityKind::ALL.len()],
        }
    }
}

impl CoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the identifier base for one entity kind.
    pub fn with_id_base(mut self, kind: EntityKind, base: u64) -> Self {
        self.id_bases[kind as usize] = base;
        self
    }

    pub fn id_base(&self, kind: EntityKind) -> u64 {
        self.id_bases[kind as usize]
    }
}

/// Builds a store URL from optional host/port values (typically
/// `REDIS_HOST`/`REDIS_PORT`). Empty or whitespace-only values fall back to
/// the defaults.
///
/// # Errors
///
/// Returns a `RegistryError::Validation` if the port value is not a valid
/// port number.
pub fn store_url_from_env_values(
    host: Option<String>,
    port: Option<String>,
) -> RegistryResult<String> {
    let host = host
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| DEFAULT_STORE_HOST.to_string());

    let port = match port.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()) {
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|_| RegistryError::Validation(format!("invalid store port: {raw}")))?,
        None => DEFAULT_STORE_PORT,
    };

    Ok(format!("redis://{host}:{port}/0"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_base_defaults_to_one_and_is_overridable() {
        let cfg = CoreConfig::new();
        assert_eq!(cfg.id_base(EntityKind::Hospital), 1);

        let cfg = cfg.with_id_base(EntityKind::Patient, 100);
        assert_eq!(cfg.id_base(EntityKind::Patient), 100);
        assert_eq!(cfg.id_base(EntityKind::Doctor), 1);
    }

    #[test]
    fn store_url_defaults_and_overrides() {
        assert_eq!(
            store_url_from_env_values(None, None).unwrap(),
            "redis://localhost:6379/0"
        );
        assert_eq!(
            store_url_from_env_values(Some("db.internal".into()), Some("6380".into())).unwrap(),
            "redis://db.internal:6380/0"
        );
        assert_eq!(
            store_url_from_env_values(Some("  ".into()), Some("".into())).unwrap(),
            "redis://localhost:6379/0"
        );
    }

    #[test]
    fn store_url_rejects_bad_port() {
        assert!(matches!(
            store_url_from_env_values(None, Some("not-a-port".into())),
            Err(RegistryError::Validation(_))
        ));
    }
}
