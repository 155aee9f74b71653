// Per-user onboarding event counters.
//
// Responsibilities
// - Own the mapping user_id -> event count. Nothing outside this type touches the map.
// - Increment-and-evaluate and check-and-remove are atomic per key.
//
// Invariants
// - A present key always has a count of at least 1.
// - Counts never decrease; a record leaves the store only through try_evict.

use dashmap::DashMap;

use crate::modules::onboarding::core::status::{OnboardingStatus, THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOutcome {
    pub count: u32,
    pub status: OnboardingStatus,
    /// True only for the call that moved the count across `THRESHOLD`.
    pub just_promoted: bool,
}

#[derive(Debug, Default)]
pub struct CounterStore {
    counts: DashMap<String, u32>,
}

impl CounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_event(&self, user_id: &str) -> RecordOutcome {
        let mut count = self.counts.entry(user_id.to_owned()).or_insert(0);
        let previous = *count;
        *count = previous.saturating_add(1);
        let current = *count;
        drop(count);

        RecordOutcome {
            count: current,
            status: OnboardingStatus::from_count(current),
            just_promoted: previous < THRESHOLD && current >= THRESHOLD,
        }
    }

    /// Removes the record if it is still `Ready`. Safe to call any number of times.
    pub fn try_evict(&self, user_id: &str) -> bool {
        self.counts
            .remove_if(user_id, |_, count| *count >= THRESHOLD)
            .is_some()
    }

    pub fn count(&self, user_id: &str) -> u32 {
        self.counts.get(user_id).map(|count| *count).unwrap_or(0)
    }

    pub fn status(&self, user_id: &str) -> OnboardingStatus {
        OnboardingStatus::from_count(self.count(user_id))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
