// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-overlay serialization of mutating requests.
//!
//! At most one update or delete is in flight for a given overlay id; later
//! submissions for that id wait in FIFO order until it completes.

use crate::models::overlay::OverlayId;
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Debug)]
pub struct MutationQueue<J> {
    in_flight: HashSet<OverlayId>,
    waiting: HashMap<OverlayId, VecDeque<J>>,
}

impl<J> Default for MutationQueue<J> {
    fn default() -> Self {
        Self {
            in_flight: HashSet::new(),
            waiting: HashMap::new(),
        }
    }
}

impl<J> MutationQueue<J> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a job for `key`. Returns the job back when it may run now,
    /// otherwise parks it behind the request already in flight.
    pub fn submit(&mut self, key: OverlayId, job: J) -> Option<J> {
        if self.in_flight.contains(&key) {
            self.waiting.entry(key).or_default().push_back(job);
            None
        } else {
            self.in_flight.insert(key);
            Some(job)
        }
    }

    /// Mark the in-flight job for `key` done and hand out the next waiting
    /// one, which becomes in flight.
    pub fn finish(&mut self, key: &OverlayId) -> Option<J> {
        let next = self.waiting.get_mut(key).and_then(|q| q.pop_front());
        if self.waiting.get(key).is_some_and(|q| q.is_empty()) {
            self.waiting.remove(key);
        }
        if next.is_none() {
            self.in_flight.remove(key);
        }
        next
    }

    pub fn is_busy(&self, key: &OverlayId) -> bool {
        self.in_flight.contains(key)
    }

    /// Number of jobs parked behind an in-flight request.
    pub fn waiting_len(&self) -> usize {
        self.waiting.values().map(|q| q.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> OverlayId {
        OverlayId::new(s)
    }

    #[test]
    fn test_first_job_runs_immediately() {
        let mut queue = MutationQueue::new();
        assert_eq!(queue.submit(id("a"), 1), Some(1));
        assert!(queue.is_busy(&id("a")));
        assert_eq!(queue.finish(&id("a")), None);
        assert!(!queue.is_busy(&id("a")));
    }

    #[test]
    fn test_same_id_waits_in_order() {
        let mut queue = MutationQueue::new();
        assert_eq!(queue.submit(id("a"), 1), Some(1));
        assert_eq!(queue.submit(id("a"), 2), None);
        assert_eq!(queue.submit(id("a"), 3), None);
        assert_eq!(queue.waiting_len(), 2);

        assert_eq!(queue.finish(&id("a")), Some(2));
        assert!(queue.is_busy(&id("a")));
        assert_eq!(queue.finish(&id("a")), Some(3));
        assert_eq!(queue.finish(&id("a")), None);
        assert_eq!(queue.waiting_len(), 0);
        assert!(!queue.is_busy(&id("a")));
    }

    #[test]
    fn test_different_ids_are_independent() {
        let mut queue = MutationQueue::new();
        assert_eq!(queue.submit(id("a"), 1), Some(1));
        assert_eq!(queue.submit(id("b"), 2), Some(2));
        assert_eq!(queue.finish(&id("b")), None);
        assert!(queue.is_busy(&id("a")));
    }
}
