//! Min-priority frontier with insert-or-improve semantics and lazy deletion.
//!
//! A decrease-key emulation over a standard binary heap: a side table records
//! the lowest priority ever accepted per location, superseded entries stay in
//! the heap, and stale entries are purged when popped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::cost::RouteMetrics;
use crate::map::LocationId;

/// Candidate expansion handed back by [`Frontier::pop_best`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrontierEntry {
    pub location: LocationId,
    /// Estimated total cost (g + h) this entry was enqueued with.
    pub priority: f64,
    /// Totals accumulated along the path that produced this entry.
    pub metrics: RouteMetrics,
}

/// Lowest priority accepted for a location, or the sentinel recorded once the
/// location has been popped and no further updates are accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BestPriority {
    Open(f64),
    Finalized,
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug, Clone)]
struct HeapEntry {
    priority: FloatOrd,
    location: LocationId,
    metrics: RouteMetrics,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.location == other.location
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.location.cmp(&self.location))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue keyed by estimated total cost, one authoritative entry
/// per location.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<HeapEntry>,
    best: HashMap<LocationId, BestPriority>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total entries currently queued, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Push a candidate unless its location already has an equal or better
    /// recorded priority, or was finalized. Returns whether the entry was
    /// accepted, so callers can keep parent pointers in step.
    pub fn insert_or_improve(
        &mut self,
        location: LocationId,
        priority: f64,
        metrics: RouteMetrics,
    ) -> bool {
        match self.best.get(&location) {
            Some(BestPriority::Finalized) => return false,
            Some(BestPriority::Open(best)) if *best <= priority => return false,
            _ => {}
        }
        self.best.insert(location, BestPriority::Open(priority));
        self.heap.push(HeapEntry {
            priority: FloatOrd(priority),
            location,
            metrics,
        });
        true
    }

    /// Remove and return the lowest-priority entry whose location has not
    /// been finalized, discarding stale entries along the way. The returned
    /// entry's location is marked finalized. `None` once the frontier is
    /// exhausted.
    pub fn pop_best(&mut self) -> Option<FrontierEntry> {
        while let Some(entry) = self.heap.pop() {
            if matches!(
                self.best.get(&entry.location),
                Some(BestPriority::Finalized)
            ) {
                continue;
            }
            self.best.insert(entry.location, BestPriority::Finalized);
            return Some(FrontierEntry {
                location: entry.location,
                priority: entry.priority.0,
                metrics: entry.metrics,
            });
        }
        None
    }
}
