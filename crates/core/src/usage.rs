//! Tool usage counting and the redirect threshold.
//!
//! A [`UsageCounter`] is constructed once per process and shared (usually
//! behind an `Arc`). It starts at zero, only ever grows, and is never
//! persisted.

use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of tool runs between two redirect notifications.
pub const REDIRECT_THRESHOLD: NonZeroU64 = match NonZeroU64::new(3) {
    Some(threshold) => threshold,
    None => unreachable!(),
};

#[derive(Debug)]
pub struct UsageCounter {
    count: AtomicU64,
    threshold: NonZeroU64,
}

impl Default for UsageCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageCounter {
    pub fn new() -> Self {
        Self::with_threshold(REDIRECT_THRESHOLD)
    }

    pub fn with_threshold(threshold: NonZeroU64) -> Self {
        Self {
            count: AtomicU64::new(0),
            threshold,
        }
    }

    /// Records one tool run.
    ///
    /// Returns true when the new count is a multiple of the threshold.
    pub fn record_use(&self) -> bool {
        self.record().1
    }

    /// Records one tool run and returns the count it produced along with
    /// whether that count crossed the threshold.
    ///
    /// Both come from the value returned by a single `fetch_add`, so
    /// concurrent callers never both trigger on one crossing and each sees
    /// its own count.
    pub fn record(&self) -> (u64, bool) {
        let count = self.count.fetch_add(1, Ordering::AcqRel) + 1;
        (count, count % self.threshold.get() == 0)
    }

    pub fn current_count(&self) -> u64 {
        self.count.load(Ordering::Acquire)
    }

    pub fn threshold(&self) -> u64 {
        self.threshold.get()
    }

    /// Runs left until the next redirect.
    pub fn uses_until_redirect(&self) -> u64 {
        let threshold = self.threshold.get();
        threshold - self.current_count() % threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_triggers_on_multiples_of_three() {
        let counter = UsageCounter::new();
        let triggered: Vec<bool> = (0..9).map(|_| counter.record_use()).collect();
        assert_eq!(
            triggered,
            vec![false, false, true, false, false, true, false, false, true]
        );
        assert_eq!(counter.current_count(), 9);
    }

    #[test]
    fn test_starts_at_zero() {
        let counter = UsageCounter::default();
        assert_eq!(counter.current_count(), 0);
        assert_eq!(counter.threshold(), 3);
        assert_eq!(counter.uses_until_redirect(), 3);
    }

    #[test]
    fn test_current_count_has_no_side_effect() {
        let counter = UsageCounter::new();
        counter.record_use();
        assert_eq!(counter.current_count(), 1);
        assert_eq!(counter.current_count(), 1);
        assert_eq!(counter.uses_until_redirect(), 2);
    }

    #[test]
    fn test_custom_threshold() {
        let counter = UsageCounter::with_threshold(NonZeroU64::new(1).unwrap());
        assert!(counter.record_use());
        assert!(counter.record_use());
    }

    #[test]
    fn test_concurrent_use_triggers_once_per_crossing() {
        let counter = Arc::new(UsageCounter::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || (0..300).filter(|_| counter.record_use()).count())
            })
            .collect();

        let triggers: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(counter.current_count(), 2400);
        assert_eq!(triggers, 800);
    }

    #[test]
    fn test_record_returns_own_count() {
        let counter = UsageCounter::new();
        assert_eq!(counter.record(), (1, false));
        assert_eq!(counter.record(), (2, false));
        assert_eq!(counter.record(), (3, true));
    }

    #[test]
    fn test_concurrent_records_see_distinct_counts() {
        let counter = Arc::new(UsageCounter::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || (0..250).map(|_| counter.record()).collect::<Vec<_>>())
            })
            .collect();

        let mut records: Vec<(u64, bool)> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        records.sort_unstable();

        let counts: Vec<u64> = records.iter().map(|(count, _)| *count).collect();
        assert_eq!(counts, (1..=1000).collect::<Vec<_>>());
        for (count, triggered) in records {
            assert_eq!(triggered, count % 3 == 0, "count {count}");
        }
    }
}
