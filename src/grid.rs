use crate::{CellCounts, CellState, ConfigError, DisjointSet, Mutation};
use anyhow::{anyhow, Result};
use rand::Rng;
use std::fmt;

/// Offsets of the 8 Moore neighbours.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Dense row-major field of cell states with fixed dimensions.
///
/// The field has hard edges: coordinates outside of it are not neighbours of
/// anything, there is no wraparound.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid where every cell is dead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDimensions`] if either dimension is zero
    /// or the grid has more than [`DisjointSet::MAX_LEN`] cells.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Dead; len],
        })
    }

    /// Number of cells of a `width` x `height` grid, if such a grid is allowed.
    pub(crate) fn checked_len(width: usize, height: usize) -> Result<usize, ConfigError> {
        match width.checked_mul(height) {
            Some(len) if len > 0 && len <= DisjointSet::MAX_LEN => Ok(len),
            _ => Err(ConfigError::InvalidDimensions { width, height }),
        }
    }

    /// Creates a grid where each cell is independently alive with probability `p`.
    /// Mutated cells never appear in a fresh grid.
    ///
    /// Cells are drawn in row-major order, one draw per cell.
    ///
    /// # Errors
    ///
    /// Returns an error for zero dimensions or `p` outside `[0, 1]`.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        p: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::InvalidProbability(p));
        }
        let mut grid = Self::new(width, height)?;
        for cell in grid.cells.iter_mut() {
            if rng.random_bool(p) {
                *cell = CellState::Alive;
            }
        }
        Ok(grid)
    }

    /// Parses a plaintext picture of the grid, one string per row.
    ///
    /// `.` or space is dead, `O`, `o` or `*` is alive, and `B`, `R`, `G`, `Y`
    /// are the mutation colours. Short rows are padded with dead cells.
    ///
    /// # Errors
    ///
    /// Returns an error on an empty picture or an unknown symbol.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let height = rows.len();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let state = CellState::from_symbol(c)
                    .ok_or_else(|| anyhow!("Unknown cell symbol {:?} at ({}, {})", c, x, y))?;
                grid.set(x, y, state);
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside of the {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index(x, y)]
    }

    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        let idx = self.index(x, y);
        self.cells[idx] = state;
    }

    /// In-bounds Moore neighbours of `(x, y)`.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < self.width && ny < self.height).then_some((nx, ny))
        })
    }

    /// Number of live neighbours of `(x, y)`, in `0..=8`.
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        self.neighbors(x, y)
            .filter(|&(nx, ny)| self.get(nx, ny).is_live())
            .count() as u8
    }

    /// Whether any neighbour of `(x, y)` carries a mutation, regardless of colour.
    pub fn has_mutated_neighbor(&self, x: usize, y: usize) -> bool {
        self.neighbors(x, y)
            .any(|(nx, ny)| self.get(nx, ny).mutation().is_some())
    }

    /// True when no cell is in any live state.
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|c| c.is_live())
    }

    /// Counts cells of every live type in a single scan.
    pub fn census(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &cell in &self.cells {
            match cell {
                CellState::Dead => (),
                CellState::Alive => counts.plain += 1,
                CellState::Mutated(Mutation::Blue) => counts.blue += 1,
                CellState::Mutated(Mutation::Red) => counts.red += 1,
                CellState::Mutated(Mutation::Green) => counts.green += 1,
                CellState::Mutated(Mutation::Yellow) => counts.yellow += 1,
            }
        }
        counts
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width)
    }

    /// All cells in row-major order together with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (i % self.width, i / self.width, c))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}
