//! Search-tree nodes and solution reconstruction.
//!
//! Nodes are stored in a [`SearchTree`] arena and refer to their parent by
//! [`NodeId`]. Every discovery creates a fresh node, so the backpointers
//! always form a tree rooted at the start node.

use maze_core::{Action, Coord};

/// Index of a node inside its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the search tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    pub position: Coord,
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    /// The move that produced this node; `None` only for the root.
    pub action: Option<Action>,
    /// Whether `position` is a water cell.
    pub flooded: bool,
    /// Number of moves from the root.
    pub path_cost: i32,
    /// Ordering key assigned by the frontier on insertion. Zero for
    /// frontiers that do not order by cost.
    pub priority: f64,
}

/// Arena owning every node created during one search.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the root node at `start`.
    pub fn root(&mut self, start: Coord, flooded: bool) -> NodeId {
        self.push(SearchNode {
            position: start,
            parent: None,
            action: None,
            flooded,
            path_cost: 0,
            priority: 0.0,
        })
    }

    /// Create a child of `parent` reached by `action`.
    pub fn child(
        &mut self,
        parent: NodeId,
        position: Coord,
        action: Action,
        flooded: bool,
    ) -> NodeId {
        let path_cost = self.nodes[parent.0].path_cost + 1;
        self.push(SearchNode {
            position,
            parent: Some(parent),
            action: Some(action),
            flooded,
            path_cost,
            priority: 0.0,
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    #[inline]
    pub fn position(&self, id: NodeId) -> Coord {
        self.nodes[id.0].position
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk backpointers from `id` to the root and return the moves in
    /// root-to-`id` order. The root itself is not part of the solution.
    pub fn solution(&self, id: NodeId) -> Solution {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut cur = id;
        while let Some(parent) = self.nodes[cur.0].parent {
            let node = &self.nodes[cur.0];
            if let Some(action) = node.action {
                actions.push(action);
            }
            cells.push(node.position);
            cur = parent;
        }
        actions.reverse();
        cells.reverse();
        Solution { actions, cells }
    }
}

/// The moves from start to goal and the cells they visit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub actions: Vec<Action>,
    pub cells: Vec<Coord>,
}

impl Solution {
    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Whether `c` is one of the visited cells.
    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn solution_round_trip() {
        let s = Solution {
            actions: vec![Action::Up, Action::Left],
            cells: vec![Coord::new(1, 2), Coord::new(1, 1)],
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
