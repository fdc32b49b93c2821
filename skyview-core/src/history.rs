use parking_lot::Mutex;

use crate::model::SearchHistoryEntry;

/// Append-only log of completed lookups for the lifetime of the process.
///
/// There is deliberately no way to remove or edit an entry.
#[derive(Debug, Default)]
pub struct SearchHistory {
    entries: Mutex<Vec<SearchHistoryEntry>>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, entry: SearchHistoryEntry) {
        self.entries.lock().push(entry);
    }

    /// Copy of all entries in append order.
    pub fn snapshot(&self) -> Vec<SearchHistoryEntry> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};

    fn entry(city: &str) -> SearchHistoryEntry {
        SearchHistoryEntry { city_name: city.to_string(), local_time: "2025-06-05T18:00".into() }
    }

    #[test]
    fn keeps_append_order() {
        let history = SearchHistory::new();
        history.append(entry("Tokyo"));
        history.append(entry("Bangkok"));
        history.append(entry("Tokyo"));

        let names: Vec<_> = history.snapshot().into_iter().map(|e| e.city_name).collect();
        assert_eq!(names, ["Tokyo", "Bangkok", "Tokyo"]);
    }

    #[test]
    fn snapshot_is_detached_from_log() {
        let history = SearchHistory::new();
        history.append(entry("Oslo"));

        let mut copy = history.snapshot();
        copy.clear();

        assert_eq!(history.len(), 1);
    }

    #[test]
    fn concurrent_appends_are_all_kept() {
        let history = Arc::new(SearchHistory::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let history = Arc::clone(&history);
                thread::spawn(move || {
                    for i in 0..50 {
                        history.append(entry(&format!("city-{t}-{i}")));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let mut names: Vec<_> = history.snapshot().into_iter().map(|e| e.city_name).collect();
        assert_eq!(names.len(), 400);
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 400);
    }
}
