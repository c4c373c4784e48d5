/// Index of a cell in the flattened grid.
type CellIdx = u32;

/// Disjoint-set forest stored as flat parent/rank arenas.
///
/// `find` compresses paths, `union` attaches the lower-ranked root under the
/// higher-ranked one. On equal ranks the second root goes under the first.
pub struct DisjointSet {
    parent: Vec<CellIdx>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Largest number of elements a forest can index.
    pub const MAX_LEN: usize = CellIdx::MAX as usize;

    /// Creates `len` singleton sets.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`Self::MAX_LEN`]. [`crate::Grid::new`] never
    /// builds a grid that large.
    pub fn new(len: usize) -> Self {
        let len = CellIdx::try_from(len).expect("Too many cells for DisjointSet");
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len as usize],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `i`.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i as CellIdx;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        // second pass points every visited node straight at the root
        let mut node = i as CellIdx;
        while node != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }
        root as usize
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// # Returns
    /// `false` if they were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (xroot, yroot) = (self.find(x), self.find(y));
        if xroot == yroot {
            return false;
        }
        match self.rank[xroot].cmp(&self.rank[yroot]) {
            std::cmp::Ordering::Less => self.parent[xroot] = yroot as CellIdx,
            std::cmp::Ordering::Greater => self.parent[yroot] = xroot as CellIdx,
            std::cmp::Ordering::Equal => {
                self.parent[yroot] = xroot as CellIdx;
                self.rank[xroot] += 1;
            }
        }
        true
    }

    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}
