//! Per-scope delivery history, newest first, bounded to
//! [`HISTORY_CAPACITY`](crate::messaging::constants::HISTORY_CAPACITY)
//! entries. Scopes are dispatcher names, so same-named dispatcher handles
//! share one history.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;

use crate::messaging::constants::HISTORY_CAPACITY;
use crate::messaging::types::DeliveryReport;

static STORE: Lazy<Mutex<HashMap<String, Vec<DeliveryReport>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

pub fn record(scope: &str, report: &DeliveryReport) {
    let mut store = STORE.lock().unwrap();
    let entries = store.entry(scope.to_string()).or_default();
    entries.insert(0, report.clone());
    entries.truncate(HISTORY_CAPACITY);
}

pub fn recent(scope: &str) -> Vec<DeliveryReport> {
    STORE
        .lock()
        .unwrap()
        .get(scope)
        .cloned()
        .unwrap_or_default()
}

pub fn clear(scope: &str) {
    STORE.lock().unwrap().remove(scope);
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::messaging::types::DeliveryOutcome;

    fn report(message_id: &str) -> DeliveryReport {
        DeliveryReport {
            outcome: DeliveryOutcome::Posted,
            channel_id: Some("default".to_string()),
            message_id: Some(message_id.to_string()),
            received_at: Utc::now(),
        }
    }

    #[test]
    fn newest_entries_come_first() {
        let scope = "history-order-test";
        clear(scope);
        record(scope, &report("first"));
        record(scope, &report("second"));

        let entries = recent(scope);
        assert_eq!(entries[0].message_id.as_deref(), Some("second"));
        assert_eq!(entries[1].message_id.as_deref(), Some("first"));
        clear(scope);
    }

    #[test]
    fn history_is_bounded() {
        let scope = "history-bound-test";
        clear(scope);
        for index in 0..HISTORY_CAPACITY + 10 {
            record(scope, &report(&index.to_string()));
        }

        let entries = recent(scope);
        assert_eq!(entries.len(), HISTORY_CAPACITY);
        // The oldest entries fell off the end.
        assert_eq!(
            entries.last().unwrap().message_id.as_deref(),
            Some("10")
        );
        clear(scope);
    }

    #[test]
    fn scopes_are_independent() {
        clear("history-scope-a");
        clear("history-scope-b");
        record("history-scope-a", &report("a"));

        assert_eq!(recent("history-scope-a").len(), 1);
        assert!(recent("history-scope-b").is_empty());
        clear("history-scope-a");
    }
}
