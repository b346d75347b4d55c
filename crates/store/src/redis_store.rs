//! Redis-backed [`KvStore`] implementation.
//!
//! One connection guarded by a mutex; the registry's store calls are blocking
//! and short, and the original deployment ran a single shared client the same
//! way. Every `redis::RedisError` — connection refused, protocol error, type
//! mismatch — is surfaced as `StoreError::Unavailable`, which is the only
//! store failure the registry distinguishes.

use crate::{KvStore, StoreError, StoreResult};
use redis::Commands;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

pub struct RedisStore {
    conn: Mutex<redis::Connection>,
}

impl RedisStore {
    /// Connects to Redis at `url` (e.g. `redis://localhost:6379/0`).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the URL is malformed or the
    /// server cannot be reached.
    pub fn connect(url: &str) -> StoreResult<Self> {
        let client = redis::Client::open(url)?;
        let conn = client.get_connection()?;
        tracing::debug!(url, "connected to redis");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, redis::Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("redis connection lock poisoned".into()))
    }
}

impl KvStore for RedisStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.get(key)?)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        Ok(self.lock()?.set(key, value)?)
    }

    fn increment(&self, key: &str) -> StoreResult<i64> {
        Ok(self.lock()?.incr(key, 1)?)
    }

    fn hash_set(&self, key: &str, field: &str, value: &str) -> StoreResult<u64> {
        Ok(self.lock()?.hset(key, field, value)?)
    }

    fn hash_get_all(&self, key: &str) -> StoreResult<BTreeMap<String, String>> {
        Ok(self.lock()?.hgetall(key)?)
    }

    fn set_add(&self, key: &str, member: &str) -> StoreResult<()> {
        self.lock()?.sadd::<_, _, i64>(key, member)?;
        Ok(())
    }

    fn set_members(&self, key: &str) -> StoreResult<BTreeSet<String>> {
        Ok(self.lock()?.smembers(key)?)
    }
}
