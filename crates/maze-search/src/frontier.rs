//! Frontier containers: the set of discovered but unexpanded nodes.
//!
//! Every strategy shares the [`Frontier`] interface. [`StackFrontier`] and
//! [`QueueFrontier`] ignore cost entirely; [`PriorityFrontier`] delegates the
//! key of each inserted node to a [`PriorityKey`].

use std::collections::VecDeque;
use std::fmt;

use maze_core::Coord;

use crate::heap::PriorityQueue;
use crate::node::{NodeId, SearchNode, SearchTree};

/// The container a search strategy pulls its next node from.
pub trait Frontier {
    /// Insert a node. Cost-ordered frontiers record the key they assign in
    /// the node's `priority` field.
    fn add(&mut self, tree: &mut SearchTree, id: NodeId);

    /// Remove the next node to expand.
    fn remove(&mut self) -> Result<NodeId, EmptyFrontier>;

    /// Whether a pending node sits at `pos`. This is a linear scan.
    fn contains_state(&self, tree: &SearchTree, pos: Coord) -> bool;

    /// Number of pending nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pending nodes, for diagnostics. Order is container-specific.
    fn pending(&self) -> Vec<NodeId>;
}

/// Returned by [`Frontier::remove`] when nothing is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyFrontier;

impl fmt::Display for EmptyFrontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("frontier is empty")
    }
}

impl std::error::Error for EmptyFrontier {}

// ---------------------------------------------------------------------------
// Stack (depth-first)
// ---------------------------------------------------------------------------

/// Last-in, first-out frontier.
#[derive(Debug, Default)]
pub struct StackFrontier {
    items: Vec<NodeId>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, _tree: &mut SearchTree, id: NodeId) {
        self.items.push(id);
    }

    fn remove(&mut self) -> Result<NodeId, EmptyFrontier> {
        self.items.pop().ok_or(EmptyFrontier)
    }

    fn contains_state(&self, tree: &SearchTree, pos: Coord) -> bool {
        self.items.iter().any(|&id| tree.position(id) == pos)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn pending(&self) -> Vec<NodeId> {
        self.items.clone()
    }
}

// ---------------------------------------------------------------------------
// Queue (breadth-first)
// ---------------------------------------------------------------------------

/// First-in, first-out frontier.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    items: VecDeque<NodeId>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, _tree: &mut SearchTree, id: NodeId) {
        self.items.push_back(id);
    }

    fn remove(&mut self) -> Result<NodeId, EmptyFrontier> {
        self.items.pop_front().ok_or(EmptyFrontier)
    }

    fn contains_state(&self, tree: &SearchTree, pos: Coord) -> bool {
        self.items.iter().any(|&id| tree.position(id) == pos)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn pending(&self) -> Vec<NodeId> {
        self.items.iter().copied().collect()
    }
}

// ---------------------------------------------------------------------------
// Priority frontier
// ---------------------------------------------------------------------------

/// Assigns the ordering key of a node when it enters a [`PriorityFrontier`].
/// Smaller keys are expanded first.
pub trait PriorityKey {
    fn key(&self, node: &SearchNode) -> f64;
}

/// Min-heap frontier ordered by a [`PriorityKey`]. Ties are expanded in
/// insertion order.
#[derive(Debug)]
pub struct PriorityFrontier<K> {
    queue: PriorityQueue,
    key: K,
}

impl<K: PriorityKey> PriorityFrontier<K> {
    pub fn new(key: K) -> Self {
        Self {
            queue: PriorityQueue::new(),
            key,
        }
    }

    /// The underlying heap.
    pub fn queue(&self) -> &PriorityQueue {
        &self.queue
    }
}

impl<K: PriorityKey> Frontier for PriorityFrontier<K> {
    fn add(&mut self, tree: &mut SearchTree, id: NodeId) {
        let key = self.key.key(tree.get(id));
        tree.get_mut(id).priority = key;
        self.queue.push(id, key);
    }

    fn remove(&mut self) -> Result<NodeId, EmptyFrontier> {
        self.queue
            .pop_min()
            .map(|(id, _)| id)
            .map_err(|_| EmptyFrontier)
    }

    fn contains_state(&self, tree: &SearchTree, pos: Coord) -> bool {
        self.queue.iter().any(|(id, _)| tree.position(id) == pos)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn pending(&self) -> Vec<NodeId> {
        self.queue.iter().map(|(id, _)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Action;

    /// Larger columns first.
    struct FarthestColumn;

    impl PriorityKey for FarthestColumn {
        fn key(&self, node: &SearchNode) -> f64 {
            -f64::from(node.position.col)
        }
    }

    struct Flat;

    impl PriorityKey for Flat {
        fn key(&self, _node: &SearchNode) -> f64 {
            1.0
        }
    }

    /// Root plus three children at distinct columns.
    fn tree() -> (SearchTree, Vec<NodeId>) {
        let mut t = SearchTree::new();
        let r = t.root(Coord::new(0, 0), false);
        let a = t.child(r, Coord::new(0, 1), Action::Right, false);
        let b = t.child(a, Coord::new(0, 2), Action::Right, false);
        let c = t.child(b, Coord::new(0, 3), Action::Right, true);
        (t, vec![r, a, b, c])
    }

    #[test]
    fn stack_is_lifo() {
        let (mut t, ids) = tree();
        let mut f = StackFrontier::new();
        for &id in &ids {
            f.add(&mut t, id);
        }
        assert_eq!(f.len(), 4);
        for &id in ids.iter().rev() {
            assert_eq!(f.remove(), Ok(id));
        }
        assert!(f.is_empty());
        assert_eq!(f.remove(), Err(EmptyFrontier));
    }

    #[test]
    fn queue_is_fifo() {
        let (mut t, ids) = tree();
        let mut f = QueueFrontier::new();
        for &id in &ids {
            f.add(&mut t, id);
        }
        for &id in &ids {
            assert_eq!(f.remove(), Ok(id));
        }
        assert_eq!(f.remove(), Err(EmptyFrontier));
    }

    #[test]
    fn contains_state_matches_position() {
        let (mut t, ids) = tree();
        let mut f = QueueFrontier::new();
        f.add(&mut t, ids[1]);
        assert!(f.contains_state(&t, Coord::new(0, 1)));
        assert!(!f.contains_state(&t, Coord::new(0, 0)));
        f.remove().unwrap();
        assert!(!f.contains_state(&t, Coord::new(0, 1)));
    }

    #[test]
    fn priority_frontier_orders_by_key_and_records_it() {
        let (mut t, ids) = tree();
        let mut f = PriorityFrontier::new(FarthestColumn);
        for &id in &ids {
            f.add(&mut t, id);
        }
        assert_eq!(t.get(ids[3]).priority, -3.0);
        assert!(f.contains_state(&t, Coord::new(0, 2)));
        assert_eq!(f.pending().len(), 4);
        for &id in ids.iter().rev() {
            assert_eq!(f.remove(), Ok(id));
        }
        assert_eq!(f.remove(), Err(EmptyFrontier));
    }

    #[test]
    fn priority_frontier_ties_are_fifo() {
        let (mut t, ids) = tree();
        let mut f = PriorityFrontier::new(Flat);
        for &id in &ids {
            f.add(&mut t, id);
        }
        for &id in &ids {
            assert_eq!(f.remove(), Ok(id));
        }
    }
}
