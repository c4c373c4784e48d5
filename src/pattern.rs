use crate::{CellState, DisjointSet, Grid};
use ahash::AHashMap as HashMap;
use std::fmt::Write;

/// Integer cell coordinate; `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// A maximal 4-connected set of plain alive cells at absolute coordinates.
///
/// Cells are kept sorted, so equality and hashing are structural: two patterns
/// are the same exactly when they occupy the same cells. A shape that moved by
/// a single cell is a different pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    cells: Box<[Coord]>,
}

impl Pattern {
    pub fn new(cells: impl IntoIterator<Item = Coord>) -> Self {
        let mut cells: Vec<Coord> = cells.into_iter().collect();
        cells.sort_unstable();
        cells.dedup();
        Self {
            cells: cells.into_boxed_slice(),
        }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.binary_search(&coord).is_ok()
    }

    /// Translates the pattern so that its minimum `x` and minimum `y` are zero.
    pub fn normalized(&self) -> NormalizedPattern {
        let min_x = self.cells.iter().map(|c| c.x).min().unwrap_or(0);
        let min_y = self.cells.iter().map(|c| c.y).min().unwrap_or(0);
        // translation keeps the sort order
        let cells = self
            .cells
            .iter()
            .map(|c| Coord::new(c.x - min_x, c.y - min_y))
            .collect();
        NormalizedPattern(Pattern { cells })
    }
}

/// A [`Pattern`] translated to the origin. Identifies a shape regardless of
/// where it occurred; used for deduplication and export only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPattern(Pattern);

impl NormalizedPattern {
    pub fn as_pattern(&self) -> &Pattern {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `[max_x, max_y]`, zero for an empty pattern.
    pub fn extent(&self) -> [usize; 2] {
        let cells = self.0.cells();
        [
            cells.iter().map(|c| c.x).max().unwrap_or(0),
            cells.iter().map(|c| c.y).max().unwrap_or(0),
        ]
    }

    /// Renders the export block for this shape:
    ///
    /// ```text
    /// Cell Count: <N>
    /// <max_x + 2 dashes>
    /// <one line per row: ' ', then '*' or ' ' per column, then ' '>
    /// <max_x + 2 dashes>
    /// <blank line>
    /// ```
    pub fn to_text(&self) -> String {
        let [max_x, max_y] = self.extent();
        let border = "-".repeat(max_x + 2);
        let mut result = String::new();
        writeln!(result, "Cell Count: {}", self.len()).unwrap();
        writeln!(result, "{}", border).unwrap();
        for y in 0..=max_y {
            result.push(' ');
            for x in 0..=max_x {
                result.push(if self.0.contains(Coord::new(x, y)) {
                    '*'
                } else {
                    ' '
                });
            }
            result.push_str(" \n");
        }
        writeln!(result, "{}", border).unwrap();
        result.push('\n');
        result
    }
}

/// Splits the plain alive cells of `grid` into 4-connected patterns.
///
/// Mutated cells never belong to a pattern. Patterns are ordered by the
/// row-major position of their first cell.
pub fn detect_patterns(grid: &Grid) -> Vec<Pattern> {
    let (w, h) = (grid.width(), grid.height());
    let alive = |x: usize, y: usize| grid.get(x, y) == CellState::Alive;

    let mut sets = DisjointSet::new(w * h);
    for y in 0..h {
        for x in 0..w {
            if !alive(x, y) {
                continue;
            }
            // right and down cover every orthogonal adjacency once
            if x + 1 < w && alive(x + 1, y) {
                sets.union(y * w + x, y * w + x + 1);
            }
            if y + 1 < h && alive(x, y + 1) {
                sets.union(y * w + x, (y + 1) * w + x);
            }
        }
    }

    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<Vec<Coord>> = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if !alive(x, y) {
                continue;
            }
            let root = sets.find(y * w + x);
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(Coord::new(x, y));
        }
    }
    groups.into_iter().map(Pattern::new).collect()
}
