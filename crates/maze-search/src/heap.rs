//! Indexed binary min-heap over search nodes.
//!
//! Unlike [`std::collections::BinaryHeap`], this queue records the current
//! heap position of every pending node so that a node's key can be lowered
//! in place in O(log n). Entries with equal keys come out in insertion
//! order.

use std::cmp::Ordering;
use std::fmt;

use crate::node::NodeId;

const NOT_QUEUED: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: NodeId,
    key: f64,
    seq: u64,
}

/// A binary min-heap of [`NodeId`]s keyed by an `f64` priority.
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: Vec<Entry>,
    /// Heap position of every node id, or `NOT_QUEUED`.
    index: Vec<usize>,
    next_seq: u64,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Current heap position of `id`, if it is pending.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        match self.index.get(id.0) {
            Some(&i) if i != NOT_QUEUED => Some(i),
            _ => None,
        }
    }

    /// Whether `id` is pending.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.position(id).is_some()
    }

    /// Insert `id` with priority `key`.
    ///
    /// Pushing an id that is already pending replaces its key.
    pub fn push(&mut self, id: NodeId, key: f64) {
        if let Some(pos) = self.position(id) {
            let old = self.heap[pos].key;
            self.heap[pos].key = key;
            match key.total_cmp(&old) {
                Ordering::Less => self.sift_up(pos),
                Ordering::Greater => self.sift_down(pos),
                Ordering::Equal => {}
            }
            return;
        }
        if self.index.len() <= id.0 {
            self.index.resize(id.0 + 1, NOT_QUEUED);
        }
        let pos = self.heap.len();
        self.heap.push(Entry {
            id,
            key,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.index[id.0] = pos;
        self.sift_up(pos);
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop_min(&mut self) -> Result<(NodeId, f64), EmptyQueueError> {
        if self.heap.is_empty() {
            return Err(EmptyQueueError);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let Some(top) = self.heap.pop() else {
            return Err(EmptyQueueError);
        };
        self.index[top.id.0] = NOT_QUEUED;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((top.id, top.key))
    }

    /// The entry `pop_min` would return, without removing it.
    pub fn peek_min(&self) -> Option<(NodeId, f64)> {
        self.heap.first().map(|e| (e.id, e.key))
    }

    /// Lower the key of a pending node. Returns `false` (and changes
    /// nothing) when `id` is not pending or `key` is not smaller.
    pub fn decrease_key(&mut self, id: NodeId, key: f64) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        if key.total_cmp(&self.heap[pos].key) != Ordering::Less {
            return false;
        }
        self.heap[pos].key = key;
        self.sift_up(pos);
        true
    }

    /// Pending entries in heap order (not sorted).
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.heap.iter().map(|e| (e.id, e.key))
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        for e in &self.heap {
            self.index[e.id.0] = NOT_QUEUED;
        }
        self.heap.clear();
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        let (a, b) = (&self.heap[i], &self.heap[j]);
        match a.key.total_cmp(&b.key) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => a.seq < b.seq,
        }
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.index[self.heap[i].id.0] = i;
        self.index[self.heap[j].id.0] = j;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let smallest = if right < n && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(smallest, pos) {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }

    /// Check the heap property and the index table. Used by tests.
    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let heap_ok = (1..self.heap.len()).all(|i| !self.less(i, (i - 1) / 2));
        let index_ok = self
            .heap
            .iter()
            .enumerate()
            .all(|(pos, e)| self.index[e.id.0] == pos);
        let queued = self.index.iter().filter(|&&i| i != NOT_QUEUED).count();
        heap_ok && index_ok && queued == self.heap.len()
    }
}

/// Returned by [`PriorityQueue::pop_min`] on an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("priority queue is empty")
    }
}

impl std::error::Error for EmptyQueueError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn id(i: usize) -> NodeId {
        NodeId(i)
    }

    #[test]
    fn pops_in_key_order() {
        let mut pq = PriorityQueue::new();
        for (i, k) in [5.0, 1.0, 4.0, 2.0, 3.0].into_iter().enumerate() {
            pq.push(id(i), k);
        }
        let keys: Vec<f64> = std::iter::from_fn(|| pq.pop_min().ok().map(|(_, k)| k)).collect();
        assert_eq!(keys, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut pq = PriorityQueue::new();
        for i in 0..8 {
            pq.push(id(i), 2.0);
        }
        pq.push(id(8), 1.0);
        assert_eq!(pq.pop_min().unwrap().0, id(8));
        for i in 0..8 {
            assert_eq!(pq.pop_min().unwrap().0, id(i));
        }
    }

    #[test]
    fn empty_pop_is_an_error() {
        let mut pq = PriorityQueue::new();
        assert_eq!(pq.pop_min(), Err(EmptyQueueError));
        pq.push(id(0), 0.0);
        assert!(pq.pop_min().is_ok());
        assert_eq!(pq.pop_min(), Err(EmptyQueueError));
        assert_eq!(EmptyQueueError.to_string(), "priority queue is empty");
    }

    #[test]
    fn decrease_key_moves_entry_up() {
        let mut pq = PriorityQueue::new();
        pq.push(id(0), 10.0);
        pq.push(id(1), 20.0);
        pq.push(id(2), 30.0);
        assert!(pq.decrease_key(id(2), 5.0));
        assert!(pq.is_consistent());
        assert_eq!(pq.peek_min(), Some((id(2), 5.0)));
        // not smaller
        assert!(!pq.decrease_key(id(1), 25.0));
        // not queued
        assert!(!pq.decrease_key(id(9), 0.0));
        assert_eq!(pq.position(id(2)), Some(0));
    }

    #[test]
    fn position_tracks_removal() {
        let mut pq = PriorityQueue::new();
        pq.push(id(3), 1.0);
        pq.push(id(1), 2.0);
        assert!(pq.contains(id(1)));
        let (top, _) = pq.pop_min().unwrap();
        assert_eq!(top, id(3));
        assert!(!pq.contains(id(3)));
        assert_eq!(pq.position(id(1)), Some(0));
        pq.clear();
        assert!(pq.is_empty());
        assert!(!pq.contains(id(1)));
    }

    #[test]
    fn repush_replaces_key() {
        let mut pq = PriorityQueue::new();
        pq.push(id(0), 1.0);
        pq.push(id(1), 2.0);
        pq.push(id(0), 3.0);
        assert_eq!(pq.len(), 2);
        assert!(pq.is_consistent());
        assert_eq!(pq.pop_min().unwrap(), (id(1), 2.0));
        assert_eq!(pq.pop_min().unwrap(), (id(0), 3.0));
    }

    #[test]
    fn interleaved_operations_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut pq = PriorityQueue::new();
        let mut model: Vec<(f64, usize)> = Vec::new();
        let mut next = 0usize;

        for _ in 0..2000 {
            match rng.random_range(0..3u32) {
                0 | 1 => {
                    let key = f64::from(rng.random_range(0..50u32));
                    pq.push(id(next), key);
                    model.push((key, next));
                    next += 1;
                }
                _ => {
                    let got = pq.pop_min();
                    if model.is_empty() {
                        assert_eq!(got, Err(EmptyQueueError));
                        continue;
                    }
                    // min key, earliest insertion among equals
                    let best = model
                        .iter()
                        .enumerate()
                        .min_by(|a, b| a.1.0.total_cmp(&b.1.0).then(a.1.1.cmp(&b.1.1)))
                        .map(|(i, _)| i)
                        .unwrap();
                    let (key, n) = model.remove(best);
                    assert_eq!(got, Ok((id(n), key)));
                }
            }
            assert!(pq.is_consistent());
            assert_eq!(pq.len(), model.len());
        }
    }
}
