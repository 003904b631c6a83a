use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use redis::{
    AsyncCommands,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

use scio::errors::StoreError;

/// Prefix under which per-event blacklists live in the key-value store.
pub const EVENT_KEY_PREFIX: &str = "blacklist:";

fn event_key(event: &str) -> String {
    format!("{EVENT_KEY_PREFIX}{event}")
}

/// A trait for reading per-event question blacklists from a key-value store.
///
/// Each event's blacklist is stored under `blacklist:<event>` as an ordered
/// sequence of question identifiers. The store is read-only from this
/// service's point of view; seeding and maintenance happen elsewhere.
///
/// Entries are independent of each other, so `list` carries no atomicity
/// guarantee across keys. Any failure aborts the whole operation rather than
/// returning a partial result.
#[async_trait]
pub trait BlacklistStore: Send + Sync {
    /// Retrieves the blacklist for a single event.
    ///
    /// An event with no stored key yields an empty list, not an error.
    async fn get(&self, event: &str) -> Result<Vec<String>, StoreError>;

    /// Retrieves every stored blacklist, keyed by event name.
    ///
    /// Enumerates keys matching `blacklist:*` and strips the prefix to
    /// recover the event names.
    async fn list(&self) -> Result<BTreeMap<String, Vec<String>>, StoreError>;
}

/// An in-memory implementation of the `BlacklistStore` trait.
///
/// Backed by a `DashMap` keyed by the full store key, mirroring the hosted
/// store's layout. Used for local development and tests.
pub struct BlacklistStoreInMemory {
    entries: DashMap<String, Vec<String>>,
}

impl BlacklistStoreInMemory {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Seeds the blacklist for an event, replacing any existing entry.
    pub fn insert(&self, event: &str, blacklist: Vec<String>) {
        self.entries.insert(event_key(event), blacklist);
    }
}

impl Default for BlacklistStoreInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlacklistStore for BlacklistStoreInMemory {
    async fn get(&self, event: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .entries
            .get(&event_key(event))
            .map(|entry| entry.clone())
            .unwrap_or_default())
    }

    async fn list(&self) -> Result<BTreeMap<String, Vec<String>>, StoreError> {
        let mut blacklists = BTreeMap::new();
        for entry in self.entries.iter() {
            if let Some(event) = entry.key().strip_prefix(EVENT_KEY_PREFIX) {
                blacklists.insert(event.to_string(), entry.value().clone());
            }
        }
        Ok(blacklists)
    }
}

/// A Redis-backed implementation of the `BlacklistStore` trait.
///
/// Values are JSON-encoded string arrays under `blacklist:<event>` keys.
/// Connection failures map to [`StoreError::Unavailable`]; entries that do
/// not decode as a string array map to [`StoreError::MalformedEntry`].
pub struct BlacklistStoreRedis {
    connection: ConnectionManager,
}

impl BlacklistStoreRedis {
    /// Connects to the store at `redis_url`.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(1)
            .set_connection_timeout(Duration::from_millis(500));

        let client = redis::Client::open(redis_url)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let connection = client
            .get_connection_manager_with_config(config)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self { connection })
    }

    fn decode(key: &str, raw: Option<String>) -> Result<Vec<String>, StoreError> {
        match raw {
            Some(json) => serde_json::from_str(&json).map_err(|_| StoreError::MalformedEntry {
                key: key.to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl BlacklistStore for BlacklistStoreRedis {
    async fn get(&self, event: &str) -> Result<Vec<String>, StoreError> {
        let key = event_key(event);
        let mut connection = self.connection.clone();
        let raw: Option<String> = connection
            .get(&key)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Self::decode(&key, raw)
    }

    async fn list(&self) -> Result<BTreeMap<String, Vec<String>>, StoreError> {
        let mut connection = self.connection.clone();

        let keys: Vec<String> = {
            let mut iter: redis::AsyncIter<'_, String> = connection
                .scan_match(format!("{EVENT_KEY_PREFIX}*"))
                .await
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;

            let mut keys = Vec::new();
            while let Some(key) = iter.next_item().await {
                keys.push(key);
            }
            keys
        };

        // One read per key, sequentially. The dataset is a handful of
        // events, so there is nothing to gain from pipelining here.
        let mut blacklists = BTreeMap::new();
        for key in keys {
            let raw: Option<String> = connection
                .get(&key)
                .await
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
            let Some(event) = key.strip_prefix(EVENT_KEY_PREFIX) else {
                continue;
            };
            blacklists.insert(event.to_string(), Self::decode(&key, raw)?);
        }

        Ok(blacklists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_event_yields_empty_list() {
        let store = BlacklistStoreInMemory::new();

        let blacklist = store.get("astronomy").await.unwrap();
        assert!(blacklist.is_empty());
    }

    #[tokio::test]
    async fn stored_blacklist_round_trips() {
        let store = BlacklistStoreInMemory::new();
        let questions = vec!["q-17".to_string(), "q-3".to_string(), "q-99".to_string()];
        store.insert("anatomy", questions.clone());

        let blacklist = store.get("anatomy").await.unwrap();
        assert_eq!(blacklist, questions);
    }

    #[tokio::test]
    async fn list_returns_exactly_the_stored_events() {
        let store = BlacklistStoreInMemory::new();
        store.insert("anatomy", vec!["q-1".to_string()]);
        store.insert("codebusters", Vec::new());

        let blacklists = store.list().await.unwrap();
        let events: Vec<String> = blacklists.keys().cloned().collect();
        assert_eq!(events, ["anatomy", "codebusters"]);
        assert_eq!(blacklists["anatomy"], vec!["q-1".to_string()]);
        assert!(blacklists["codebusters"].is_empty());
    }

    #[test]
    fn malformed_redis_entry_is_a_typed_error() {
        let result = BlacklistStoreRedis::decode("blacklist:anatomy", Some("{oops".to_string()));
        assert!(matches!(
            result,
            Err(StoreError::MalformedEntry { key }) if key == "blacklist:anatomy"
        ));
    }

    #[test]
    fn absent_redis_value_decodes_to_empty_list() {
        let blacklist = BlacklistStoreRedis::decode("blacklist:anatomy", None).unwrap();
        assert!(blacklist.is_empty());
    }
}
