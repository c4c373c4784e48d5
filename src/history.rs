use crate::{Grid, HISTORY_DEPTH};
use std::collections::VecDeque;

/// The most recent grids of a run, oldest first.
///
/// Kept for inspection only; the transition rules never look at it.
#[derive(Clone, Debug)]
pub struct History {
    grids: VecDeque<Grid>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_DEPTH)
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            grids: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `grid`, evicting the oldest one when full.
    pub fn push(&mut self, grid: Grid) {
        if self.capacity == 0 {
            return;
        }
        if self.grids.len() == self.capacity {
            self.grids.pop_front();
        }
        self.grids.push_back(grid);
    }

    pub fn latest(&self) -> Option<&Grid> {
        self.grids.back()
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Grid> {
        self.grids.iter()
    }
}
