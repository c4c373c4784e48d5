use std::fmt;

/// One of the four mutation colours a live cell may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mutation {
    Blue,
    Red,
    Green,
    Yellow,
}

impl Mutation {
    /// Resolution order for newborn mutations: the first colour whose
    /// predicate holds wins.
    pub const ALL: [Mutation; 4] = [
        Mutation::Blue,
        Mutation::Red,
        Mutation::Green,
        Mutation::Yellow,
    ];

    /// Neighbour counts under which a cell of this colour survives.
    /// Red has no survival window and always dies.
    pub fn survival_window(self) -> Option<[u8; 2]> {
        match self {
            Mutation::Blue => Some([3, 4]),
            Mutation::Red => None,
            Mutation::Green => Some([4, 5]),
            Mutation::Yellow => Some([5, 6]),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mutation::Blue => "blue",
            Mutation::Red => "red",
            Mutation::Green => "green",
            Mutation::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of a single cell. Every cell holds exactly one of the six states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    /// Plain live cell, the only state that takes part in patterns.
    Alive,
    Mutated(Mutation),
}

impl CellState {
    pub const BLUE: CellState = CellState::Mutated(Mutation::Blue);
    pub const RED: CellState = CellState::Mutated(Mutation::Red);
    pub const GREEN: CellState = CellState::Mutated(Mutation::Green);
    pub const YELLOW: CellState = CellState::Mutated(Mutation::Yellow);

    /// Any state other than [`CellState::Dead`].
    #[inline]
    pub fn is_live(self) -> bool {
        self != CellState::Dead
    }

    #[inline]
    pub fn mutation(self) -> Option<Mutation> {
        match self {
            CellState::Mutated(m) => Some(m),
            _ => None,
        }
    }

    /// Whether a live cell in this state stays as it is with `neighbors` live neighbours.
    /// Dead cells never "survive"; births are handled by the transition rules.
    pub fn survives(self, neighbors: u8) -> bool {
        let window = match self {
            CellState::Dead => return false,
            CellState::Alive => [2, 3],
            CellState::Mutated(m) => match m.survival_window() {
                Some(w) => w,
                None => return false,
            },
        };
        window.contains(&neighbors)
    }

    /// Plaintext symbol used by [`crate::Grid::from_rows`] and the grid's `Display`.
    pub fn symbol(self) -> char {
        match self {
            CellState::Dead => '.',
            CellState::Alive => 'O',
            CellState::Mutated(Mutation::Blue) => 'B',
            CellState::Mutated(Mutation::Red) => 'R',
            CellState::Mutated(Mutation::Green) => 'G',
            CellState::Mutated(Mutation::Yellow) => 'Y',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        Some(match c {
            '.' | ' ' => CellState::Dead,
            'O' | 'o' | '*' => CellState::Alive,
            'B' => CellState::BLUE,
            'R' => CellState::RED,
            'G' => CellState::GREEN,
            'Y' => CellState::YELLOW,
            _ => return None,
        })
    }
}
