#![warn(clippy::all)]

mod cell;
mod config;
mod engine;
mod grid;
mod history;
mod lifespan;
mod pattern;
mod registry;
mod rules;
mod spawn;
mod stats;
mod traits;
mod union_find;

pub use cell::{CellState, Mutation};
pub use config::{ConfigError, MutationOdds, SimulationConfig};
pub use engine::{advance, Advance, GenerationReport, RunState, Simulation, Termination};
pub use grid::Grid;
pub use history::History;
pub use lifespan::LifespanMap;
pub use pattern::{detect_patterns, Coord, NormalizedPattern, Pattern};
pub use registry::PatternRegistry;
pub use rules::next_candidate;
pub use spawn::{apply_spawns, plan_spawns, spawn_points};
pub use stats::{CellCounts, Totals};
pub use traits::Entropy;
pub use union_find::DisjointSet;

pub type DefaultRng = rand_chacha::ChaCha8Rng;

/// A pattern alive for at least this many consecutive generations may spawn a red cell.
pub const SPAWN_LIFESPAN: u32 = 10;
/// Number of past grids kept by [`History`].
pub const HISTORY_DEPTH: usize = 10;

#[cfg(test)]
pub(crate) mod testing {
    use crate::Entropy;

    /// Answers every draw with the same fixed outcome and records how many draws were made.
    #[derive(Clone, Debug, Default)]
    pub(crate) struct FixedEntropy {
        pub(crate) coin: bool,
        pub(crate) one_in: bool,
        pub(crate) pick: usize,
        pub(crate) coin_flips: usize,
        pub(crate) one_in_draws: Vec<u32>,
        pub(crate) picks: usize,
    }

    impl FixedEntropy {
        pub(crate) fn new(coin: bool, one_in: bool) -> Self {
            Self {
                coin,
                one_in,
                ..Self::default()
            }
        }
    }

    impl Entropy for FixedEntropy {
        fn coin_flip(&mut self) -> bool {
            self.coin_flips += 1;
            self.coin
        }

        fn one_in(&mut self, denominator: u32) -> bool {
            self.one_in_draws.push(denominator);
            self.one_in
        }

        fn pick(&mut self, len: usize) -> usize {
            self.picks += 1;
            self.pick.min(len - 1)
        }
    }
}
