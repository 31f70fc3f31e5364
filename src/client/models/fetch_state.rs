use std::collections::HashMap;

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::client::services::json_format::JsonDocument;
use crate::common::endpoints::Endpoint;
use crate::common::errors::FetchError;

/// Outcome of the latest fetch for one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    Pending,
    Ready(JsonDocument),
    Failed(String),
}

impl FetchResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchResult::Pending)
    }
}

/// Handle for an issued fetch; only the newest ticket per endpoint may
/// store its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub endpoint: Endpoint,
    pub seq: u64,
}

#[derive(Debug, Clone)]
struct Slot {
    seq: u64,
    result: FetchResult,
    updated_at: Option<DateTime<Local>>,
}

/// Per-endpoint fetch results keyed by endpoint.
#[derive(Debug, Default)]
pub struct FetchCache {
    slots: HashMap<Endpoint, Slot>,
    next_seq: u64,
}

impl FetchCache {
    /// Marks the endpoint pending and hands out a fresh ticket.
    pub fn begin(&mut self, endpoint: Endpoint) -> FetchTicket {
        self.next_seq += 1;
        let seq = self.next_seq;
        let updated_at = self.slots.get(&endpoint).and_then(|s| s.updated_at);
        self.slots.insert(endpoint, Slot { seq, result: FetchResult::Pending, updated_at });
        FetchTicket { endpoint, seq }
    }

    /// Stores the outcome unless a newer fetch for the same endpoint was
    /// issued (or the entry was cleared) in the meantime.
    pub fn complete(&mut self, ticket: FetchTicket, outcome: Result<Value, FetchError>) -> bool {
        match self.slots.get_mut(&ticket.endpoint) {
            Some(slot) if slot.seq == ticket.seq => {
                slot.result = match outcome {
                    Ok(value) => FetchResult::Ready(JsonDocument::from_value(value)),
                    Err(e) => FetchResult::Failed(e.to_string()),
                };
                slot.updated_at = Some(Local::now());
                true
            }
            _ => {
                log::debug!("Dropping stale response for {} (seq {})", ticket.endpoint.path(), ticket.seq);
                false
            }
        }
    }

    pub fn get(&self, endpoint: Endpoint) -> Option<&FetchResult> {
        self.slots.get(&endpoint).map(|s| &s.result)
    }

    pub fn updated_at(&self, endpoint: Endpoint) -> Option<DateTime<Local>> {
        self.slots.get(&endpoint).and_then(|s| s.updated_at)
    }

    pub fn contains(&self, endpoint: Endpoint) -> bool {
        self.slots.contains_key(&endpoint)
    }

    pub fn clear(&mut self, endpoint: Endpoint) {
        self.slots.remove(&endpoint);
    }

    pub fn clear_all(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn begin_marks_pending() {
        let mut cache = FetchCache::default();
        cache.begin(Endpoint::Health);
        assert_eq!(cache.get(Endpoint::Health), Some(&FetchResult::Pending));
        assert_eq!(cache.get(Endpoint::Info), None);
    }

    #[test]
    fn completion_overwrites_previous_result() {
        let mut cache = FetchCache::default();
        let first = cache.begin(Endpoint::Health);
        assert!(cache.complete(first, Err(FetchError::Timeout)));
        assert!(matches!(cache.get(Endpoint::Health), Some(FetchResult::Failed(m)) if m.contains("timeout")));

        let second = cache.begin(Endpoint::Health);
        assert!(cache.complete(second, Ok(json!({"status": "UP"}))));
        match cache.get(Endpoint::Health) {
            Some(FetchResult::Ready(doc)) => assert_eq!(doc.value()["status"], "UP"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(cache.updated_at(Endpoint::Health).is_some());
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut cache = FetchCache::default();
        let old = cache.begin(Endpoint::Git);
        let new = cache.begin(Endpoint::Git);
        assert!(cache.complete(new, Ok(json!({"branch": "main"}))));
        assert!(!cache.complete(old, Ok(json!({"branch": "stale"}))));
        match cache.get(Endpoint::Git) {
            Some(FetchResult::Ready(doc)) => assert_eq!(doc.value()["branch"], "main"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn cleared_entry_ignores_late_response() {
        let mut cache = FetchCache::default();
        let ticket = cache.begin(Endpoint::Memory);
        cache.clear(Endpoint::Memory);
        assert!(!cache.complete(ticket, Ok(json!({}))));
        assert!(!cache.contains(Endpoint::Memory));
    }

    #[test]
    fn keys_are_independent() {
        let mut cache = FetchCache::default();
        let a = cache.begin(Endpoint::Info);
        let b = cache.begin(Endpoint::Health);
        assert!(cache.complete(b, Ok(json!(1))));
        assert!(cache.complete(a, Ok(json!(2))));
    }
}
