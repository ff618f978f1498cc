//! In-memory cache of messages observed this session.
//!
//! Keyed by message guid.  Entries are never evicted: the cache tracks a
//! single conversation stream for the lifetime of the process, so growth is
//! bounded by session length rather than by any policy here.

use std::collections::HashMap;

use crate::models::MessageRecord;

/// Process-lifetime map from message guid to its last-known metadata.
///
/// Not synchronized; callers own the single-threaded access contract.
#[derive(Debug, Default)]
pub struct SeenCache {
    entries: HashMap<String, MessageRecord>,
}

impl SeenCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a record by guid.
    pub fn get(&self, guid: &str) -> Option<&MessageRecord> {
        self.entries.get(guid)
    }

    /// Whether a guid has been observed.
    pub fn contains(&self, guid: &str) -> bool {
        self.entries.contains_key(guid)
    }

    /// Insert or overwrite the entry for a record's guid.
    pub fn insert(&mut self, record: MessageRecord) {
        self.entries.insert(record.guid.clone(), record);
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(guid: &str, date: i64) -> MessageRecord {
        MessageRecord {
            guid: guid.to_string(),
            date,
            is_from_me: false,
        }
    }

    #[test]
    fn put_then_get_round_trip() {
        let mut cache = SeenCache::new();
        assert!(cache.is_empty());

        let r = record("guid-1", 42);
        cache.insert(r.clone());

        assert_eq!(cache.get("guid-1"), Some(&r));
        assert!(cache.contains("guid-1"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn insert_overwrites_same_guid() {
        let mut cache = SeenCache::new();
        cache.insert(record("guid-1", 1));
        cache.insert(record("guid-1", 2));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("guid-1").unwrap().date, 2);
    }

    #[test]
    fn get_missing_is_none() {
        let cache = SeenCache::new();
        assert_eq!(cache.get("nope"), None);
        assert!(!cache.contains("nope"));
    }
}
