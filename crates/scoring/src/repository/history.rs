use std::collections::VecDeque;

use parking_lot::RwLock;

use crate::models::ConversionRecord;

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Bounded, newest-first log of recent conversions.
///
/// The store is meant to be shared behind an `Arc`. `append` prepends and
/// truncates under a single write lock, so readers never see more than
/// `capacity` records or a half-applied insert.
#[derive(Debug)]
pub struct RecentHistory {
    capacity: usize,
    records: RwLock<VecDeque<ConversionRecord>>,
}

impl RecentHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: RwLock::new(VecDeque::new()),
        }
    }

    pub fn append(&self, record: ConversionRecord) {
        let mut records = self.records.write();
        records.push_front(record);
        records.truncate(self.capacity);
    }

    /// Owned copy of the current records, newest first.
    pub fn snapshot(&self) -> Vec<ConversionRecord> {
        self.records.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for RecentHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::Number;
    use std::sync::Arc;
    use std::thread;

    fn record(score: i64) -> ConversionRecord {
        ConversionRecord {
            score: Number::from(score),
            from_country: "USA".to_string(),
            to_country: "UK".to_string(),
            converted_score: score,
            user: "Anonymous".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_empty_before_any_append() {
        let history = RecentHistory::default();
        assert!(history.snapshot().is_empty());
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 10);
    }

    #[test]
    fn test_newest_first() {
        let history = RecentHistory::default();
        history.append(record(1));
        history.append(record(2));
        history.append(record(3));

        let scores: Vec<i64> = history.snapshot().iter().map(|r| r.converted_score).collect();
        assert_eq!(scores, vec![3, 2, 1]);
    }

    #[test]
    fn test_bounded_to_ten_most_recent() {
        let history = RecentHistory::default();
        for i in 0..15 {
            history.append(record(i));
        }

        let scores: Vec<i64> = history.snapshot().iter().map(|r| r.converted_score).collect();
        let expected: Vec<i64> = (5..15).rev().collect();
        assert_eq!(history.len(), 10);
        assert_eq!(scores, expected);
    }

    #[test]
    fn test_identical_records_are_all_kept() {
        let history = RecentHistory::default();
        let same = record(700);
        for _ in 0..3 {
            history.append(same.clone());
        }
        assert_eq!(history.snapshot(), vec![same.clone(), same.clone(), same]);
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let history = RecentHistory::default();
        history.append(record(1));

        let mut snapshot = history.snapshot();
        snapshot.clear();
        history.append(record(2));

        assert!(snapshot.is_empty());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_custom_capacity() {
        let history = RecentHistory::new(2);
        history.append(record(1));
        history.append(record(2));
        history.append(record(3));

        let scores: Vec<i64> = history.snapshot().iter().map(|r| r.converted_score).collect();
        assert_eq!(scores, vec![3, 2]);
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let history = RecentHistory::new(usize::MAX);
        history.append(record(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.capacity(), usize::MAX);
    }

    #[test]
    fn test_concurrent_appends_never_exceed_capacity() {
        let history = Arc::new(RecentHistory::default());

        let writers: Vec<_> = (0..8)
            .map(|t| {
                let history = Arc::clone(&history);
                thread::spawn(move || {
                    for i in 0..100 {
                        history.append(record(t * 100 + i));
                        assert!(history.snapshot().len() <= 10);
                    }
                })
            })
            .collect();

        for writer in writers {
            writer.join().unwrap();
        }

        assert_eq!(history.len(), 10);
    }
}
