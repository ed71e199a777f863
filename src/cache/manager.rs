use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;

/// Build the cache key for a logical id on a given day.
///
/// Two calls with the same id on the same calendar day yield identical keys;
/// the next day yields a different key, which misses and forces a refresh.
pub fn day_key(logical_id: &str, date: NaiveDate) -> String {
    format!("{}-{}", logical_id, date.format("%Y-%m-%d"))
}

/// In-memory cache from day key to an already-normalized value.
///
/// Entries are written once per key on first miss and read many times;
/// overwrite is allowed but not expected. Values are cloned out on read.
/// Reads and writes are guarded so the cache can be shared across tasks, but
/// the check-then-fetch-then-insert sequence in the accessors is not atomic:
/// concurrent misses on one key may each fetch and each insert, last write
/// wins.
#[derive(Debug)]
pub struct DayCache<T> {
    entries: RwLock<HashMap<String, T>>,
}

impl<T> DayCache<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, key: String, value: T) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key, value);
        }
    }
}

impl<T: Clone> DayCache<T> {
    pub fn get(&self, key: &str) -> Option<T> {
        self.entries.read().ok()?.get(key).cloned()
    }
}

impl<T> Default for DayCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
