//! Key-value persistence for per-user records.
//!
//! Every record the service keeps (resume aggregate, preferences, wizard
//! artifacts, checklist, final submission) is a string value under a string
//! key. `Namespaced` scopes those keys to one user so that each user behaves
//! like a separate browser profile.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::AsyncCommands;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{Config, StoreBackend};
use crate::errors::AppError;

/// Flat string-to-string store. Carried in `AppState` as `Arc<dyn KeyValueStore>`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Backends
// ────────────────────────────────────────────────────────────────────────────

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    pub fn new(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url).context("Invalid REDIS_URL")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set(key, value).await?;
        Ok(())
    }
}

/// Builds the configured backend.
pub async fn create_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            info!("Using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis backend")?;
            let store = RedisStore::new(url)?;
            // Verify connectivity at startup.
            store
                .client
                .get_multiplexed_async_connection()
                .await
                .context("Could not connect to Redis")?;
            info!("Redis store connected");
            Ok(Arc::new(store))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-user namespace
// ────────────────────────────────────────────────────────────────────────────

/// A view of the store where every key is prefixed with `rb:{user_id}:`.
#[derive(Clone)]
pub struct Namespaced {
    inner: Arc<dyn KeyValueStore>,
    prefix: String,
}

impl Namespaced {
    pub fn for_user(inner: Arc<dyn KeyValueStore>, user_id: Uuid) -> Self {
        Self {
            inner,
            prefix: format!("rb:{user_id}:"),
        }
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.inner.get(&self.scoped(key)).await
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.inner.set(&self.scoped(key), value).await
    }

    /// Reads and decodes a JSON record. A value that fails to parse is
    /// reported as absent, never as an error.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        let Some(raw) = self.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Ignoring unreadable record '{key}': {e}");
                Ok(None)
            }
        }
    }

    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize record '{key}'"))?;
        self.set(key, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        value: u32,
    }

    fn namespaced(store: Arc<dyn KeyValueStore>) -> Namespaced {
        Namespaced::for_user(store, Uuid::nil())
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_namespaced_keys_are_prefixed() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let ns = namespaced(store.clone());
        ns.set("resumeBuilderTemplate", "modern").await.unwrap();

        let raw_key = format!("rb:{}:resumeBuilderTemplate", Uuid::nil());
        assert_eq!(store.get(&raw_key).await.unwrap().as_deref(), Some("modern"));
        assert_eq!(store.get("resumeBuilderTemplate").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_users_do_not_share_records() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let alice = Namespaced::for_user(store.clone(), Uuid::new_v4());
        let bob = Namespaced::for_user(store, Uuid::new_v4());
        alice.set("rb_checklist_item_1", "true").await.unwrap();
        assert_eq!(bob.get("rb_checklist_item_1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_json_treats_corrupt_value_as_absent() {
        let ns = namespaced(Arc::new(MemoryStore::new()));
        ns.set("probe", "{not json").await.unwrap();
        let read: Option<Probe> = ns.get_json("probe").await.unwrap();
        assert!(read.is_none());
    }

    #[tokio::test]
    async fn test_get_json_treats_foreign_shape_as_absent() {
        let ns = namespaced(Arc::new(MemoryStore::new()));
        ns.set("probe", "\"classic\"").await.unwrap();
        let read: Option<Probe> = ns.get_json("probe").await.unwrap();
        assert!(read.is_none());
    }

    #[tokio::test]
    async fn test_set_json_then_get_json() {
        let ns = namespaced(Arc::new(MemoryStore::new()));
        ns.set_json("probe", &Probe { value: 7 }).await.unwrap();
        let read: Option<Probe> = ns.get_json("probe").await.unwrap();
        assert_eq!(read, Some(Probe { value: 7 }));
    }
}
