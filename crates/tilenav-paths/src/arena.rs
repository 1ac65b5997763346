//! Per-search working set: a dense node arena indexed by cell index plus
//! the open-list heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Arena parent sentinel for the start node.
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeState {
    Unseen,
    Open,
    Closed,
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) state: NodeState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            f: 0,
            parent: NO_PARENT,
            state: NodeState::Unseen,
        }
    }
}

/// Open-list entry. The heap pops the lowest `f`; ties go to the lower `h`
/// (closer to the goal), then to the lower cell index.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nodes and open list for exactly one search. Dropped when the search
/// returns.
pub(crate) struct SearchArena {
    nodes: Vec<Node>,
    open: BinaryHeap<NodeRef>,
    pub(crate) expanded: usize,
}

impl SearchArena {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::default(); len],
            open: BinaryHeap::new(),
            expanded: 0,
        }
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Record `g`/`h` for `idx` with `parent` and queue it.
    pub(crate) fn open(&mut self, idx: usize, g: i32, h: i32, parent: usize) {
        let n = &mut self.nodes[idx];
        n.g = g;
        n.h = h;
        n.f = g + h;
        n.parent = parent;
        n.state = NodeState::Open;
        self.open.push(NodeRef { idx, f: n.f, h });
    }

    /// Lower the cost of an already closed node and re-parent it, without
    /// returning it to the open list.
    pub(crate) fn relax_closed(&mut self, idx: usize, g: i32, h: i32, parent: usize) {
        let n = &mut self.nodes[idx];
        n.g = g;
        n.h = h;
        n.f = g + h;
        n.parent = parent;
    }

    /// Pop the best open node, skipping entries superseded by a cheaper
    /// re-queue or already closed.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(r) = self.open.pop() {
            let n = &self.nodes[r.idx];
            if n.state == NodeState::Open && n.f == r.f {
                return Some(r.idx);
            }
        }
        None
    }

    pub(crate) fn close(&mut self, idx: usize) {
        self.nodes[idx].state = NodeState::Closed;
        self.expanded += 1;
    }

    /// Follow parents from `goal` back to the start; start-first order.
    pub(crate) fn path_to(&self, goal: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(ci);
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_prefers_low_f_then_low_h_then_low_index() {
        let mut arena = SearchArena::new(8);
        arena.open(5, 20, 10, NO_PARENT); // f 30
        arena.open(3, 10, 20, NO_PARENT); // f 30, higher h
        arena.open(6, 30, 0, NO_PARENT); // f 30, h 0
        arena.open(2, 30, 0, NO_PARENT); // f 30, h 0, lower index
        arena.open(7, 0, 25, NO_PARENT); // f 25
        let order: Vec<usize> = std::iter::from_fn(|| {
            let i = arena.pop()?;
            arena.close(i);
            Some(i)
        })
        .collect();
        assert_eq!(order, vec![7, 2, 6, 5, 3]);
        assert_eq!(arena.expanded, 5);
    }

    #[test]
    fn requeued_node_pops_once_at_its_lower_cost() {
        let mut arena = SearchArena::new(4);
        arena.open(1, 50, 0, NO_PARENT);
        arena.open(2, 40, 0, NO_PARENT);
        arena.open(1, 30, 0, 2);
        assert_eq!(arena.pop(), Some(1));
        arena.close(1);
        assert_eq!(arena.node(1).g, 30);
        assert_eq!(arena.pop(), Some(2));
        arena.close(2);
        // The stale f=50 entry for 1 is skipped.
        assert_eq!(arena.pop(), None);
    }

    #[test]
    fn path_follows_parents() {
        let mut arena = SearchArena::new(4);
        arena.open(0, 0, 0, NO_PARENT);
        arena.open(2, 10, 0, 0);
        arena.open(3, 20, 0, 2);
        assert_eq!(arena.path_to(3), vec![0, 2, 3]);
        arena.relax_closed(3, 14, 0, 0);
        assert_eq!(arena.path_to(3), vec![0, 3]);
        assert_eq!(arena.node(3).f, 14);
    }
}
