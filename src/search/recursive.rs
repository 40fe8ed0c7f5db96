//! Depth-bounded search from the empty grid.
//!
//! Only configurations with at most `depth` filled cells are scored. The
//! default budget of `n + 2` is a heuristic: nothing guarantees the optimum
//! has that few cells, so this is not an exhaustive search.

use {
    super::Best,
    crate::{
        progress::Progress,
        topology::{GridSize, State, Topology},
    },
};

pub fn default_depth(size: GridSize) -> usize {
    size.num() + 2
}

/// Scores every node of the increasing-index subset tree, internal nodes
/// included. `report` hears about each finished top-level branch.
pub fn search(topology: &Topology, depth: usize, mut report: impl FnMut(Progress)) -> Best {
    let cells = topology.size().cells();
    let mut subsets = IncreasingSubsets::new(cells, depth);
    let mut best = Best::default();
    let mut branch = None;

    tracing::debug!(cells, depth, "recursive search");

    while let Some(state) = subsets.next() {
        let current = subsets.first();
        if current != branch {
            if let Some(finished) = branch {
                report(Progress::counted(finished as u128 + 1, cells as u128));
            }
            branch = current;
        }

        best.offer(topology.stabilization_length(state), state);
    }

    if let Some(finished) = branch {
        report(Progress::counted(finished as u128 + 1, cells as u128));
    }

    best
}

/// Every set of at most `depth` cells, as states, in depth-first pre-order of
/// the recursion that fills cells in strictly increasing index order. Each
/// set appears once, starting with the empty set.
pub struct IncreasingSubsets {
    cells: usize,
    depth: usize,
    stack: heapless::Vec<u8, 64>,
    state: State,
    started: bool,
}

impl IncreasingSubsets {
    pub fn new(cells: usize, depth: usize) -> Self {
        Self {
            cells,
            depth,
            stack: heapless::Vec::new(),
            state: State::EMPTY,
            started: false,
        }
    }

    /// Lowest filled index of the current set, the top-level branch.
    pub fn first(&self) -> Option<usize> {
        self.stack.first().map(|&ix| ix as usize)
    }

    fn push(&mut self, ix: usize) {
        let pushed = self.stack.push(ix as u8);
        debug_assert!(pushed.is_ok(), "indices are increasing and below 64");
        self.state = self.state.filled(ix);
    }

    fn pop(&mut self) -> Option<usize> {
        let ix = self.stack.pop()? as usize;
        self.state = self.state.cleared(ix);
        Some(ix)
    }
}

impl Iterator for IncreasingSubsets {
    type Item = State;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.state);
        }

        // descend
        if self.stack.len() < self.depth {
            let next = self.stack.last().map_or(0, |&ix| ix as usize + 1);
            if next < self.cells {
                self.push(next);
                return Some(self.state);
            }
        }

        // backtrack to the deepest index that can still move right
        while let Some(ix) = self.pop() {
            if ix + 1 < self.cells {
                self.push(ix + 1);
                return Some(self.state);
            }
        }

        None
    }
}
