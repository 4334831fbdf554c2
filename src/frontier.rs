//! The open list of the search: discovered nodes that have not been expanded yet, keyed by
//! [Cell] so that at most one entry per cell is authoritative.
use crate::cell::Cell;
use crate::error::PathError;
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Index of a retired node in the arena owned by the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// One visited or queued search state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub cell: Cell,
    /// The node this one was reached from, [None] for the start node.
    pub parent: Option<NodeId>,
    pub g: u32,
    pub h: u32,
    pub f: u32,
}

impl SearchNode {
    pub fn new(cell: Cell, parent: Option<NodeId>, g: u32, h: u32) -> SearchNode {
        SearchNode {
            cell,
            parent,
            g,
            h,
            f: g + h,
        }
    }
}

struct SmallestCostHolder {
    estimated_cost: u32,
    order: u64,
    cell: Cell,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost && self.order == other.order
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: smallest estimated cost first, then the entry
        // that entered the frontier earliest
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.order.cmp(&self.order))
    }
}

#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    node: SearchNode,
    order: u64,
}

/// Priority queue of [SearchNode]s ordered by `f`. Ties go to the entry inserted first; an entry
/// improved through [insert_or_improve](Self::insert_or_improve) keeps its place in that order,
/// exactly as if it had been overwritten in a list scanned front to back.
///
/// Heap keys are removed lazily: replacing an entry leaves its old key in the heap, and
/// [extract_min](Self::extract_min) skips keys that no longer match the live entry.
#[derive(Default)]
pub struct Frontier {
    entries: FxIndexMap<Cell, FrontierEntry>,
    heap: BinaryHeap<SmallestCostHolder>,
    next_order: u64,
    max_len: usize,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The largest number of entries held at any one time.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.entries.contains_key(cell)
    }

    /// The live entry for a cell, if any.
    pub fn get(&self, cell: &Cell) -> Option<&SearchNode> {
        self.entries.get(cell).map(|e| &e.node)
    }

    /// Adds the node if its cell is not queued yet, or replaces the queued entry if the node is
    /// strictly cheaper. Returns whether the frontier changed.
    pub fn insert_or_improve(&mut self, node: SearchNode) -> bool {
        let order = match self.entries.entry(node.cell) {
            Vacant(e) => {
                let order = self.next_order;
                self.next_order += 1;
                e.insert(FrontierEntry { node, order });
                order
            }
            Occupied(mut e) => {
                if node.f >= e.get().node.f {
                    return false;
                }
                let order = e.get().order;
                e.insert(FrontierEntry { node, order });
                order
            }
        };
        self.push_key(node, order);
        true
    }

    /// Adds a node that was already expanded once, used when a cheaper route to it is found.
    pub fn reinsert(&mut self, node: SearchNode) {
        let order = self.next_order;
        self.next_order += 1;
        let previous = self
            .entries
            .insert(node.cell, FrontierEntry { node, order });
        debug_assert!(previous.is_none(), "{} reinserted while queued", node.cell);
        self.push_key(node, order);
    }

    /// Removes and returns the entry with the smallest `f`.
    pub fn extract_min(&mut self) -> Result<SearchNode, PathError> {
        while let Some(SmallestCostHolder {
            estimated_cost,
            order,
            cell,
        }) = self.heap.pop()
        {
            let live = match self.entries.get(&cell) {
                Some(e) => e.order == order && e.node.f == estimated_cost,
                None => false,
            };
            if live {
                if let Some(entry) = self.entries.swap_remove(&cell) {
                    return Ok(entry.node);
                }
            }
        }
        Err(PathError::EmptyFrontier)
    }

    fn push_key(&mut self, node: SearchNode, order: u64) {
        self.heap.push(SmallestCostHolder {
            estimated_cost: node.f,
            order,
            cell: node.cell,
        });
        self.max_len = self.max_len.max(self.entries.len());
    }
}
