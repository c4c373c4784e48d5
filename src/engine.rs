use crate::{
    apply_spawns, detect_patterns, next_candidate, plan_spawns, CellCounts, ConfigError, Coord,
    DefaultRng, Entropy, Grid, History, LifespanMap, MutationOdds, Pattern, PatternRegistry,
    SimulationConfig, Totals,
};
use rand::SeedableRng;
use tracing::{info, trace};

/// Everything one generation step produces.
#[derive(Clone, Debug)]
pub struct Advance {
    /// The grid of the next generation, spawn overrides included.
    pub next: Grid,
    /// Patterns of the input grid, in detection order.
    pub patterns: Vec<Pattern>,
    /// Lifespans of `patterns`, counting the input generation.
    pub lifespans: LifespanMap,
    /// Census of the input grid.
    pub stats: CellCounts,
    /// Cells forced to red by long-lived patterns.
    pub spawned: Vec<Coord>,
}

/// Computes one generation.
///
/// The pipeline has two phases that never alias: first the full candidate
/// grid is derived from `grid` by the transition rules, then the spawn
/// overrides chosen from the patterns of `grid` are written over it.
/// Randomness is consumed in that same order, so the result depends only on
/// the inputs and the state of `entropy`.
///
/// # Arguments
///
/// * `grid` - The current generation; left untouched.
/// * `lifespans` - Lifespans computed in the previous step.
/// * `odds` - Mutation denominators; the red one also drives spawning.
/// * `entropy` - Source of all random draws.
pub fn advance<E: Entropy + ?Sized>(
    grid: &Grid,
    lifespans: &LifespanMap,
    odds: &MutationOdds,
    entropy: &mut E,
) -> Advance {
    let mut next = next_candidate(grid, odds, entropy);
    let patterns = detect_patterns(grid);
    let lifespans = lifespans.advance(&patterns);
    let spawned = plan_spawns(grid, &patterns, &lifespans, odds, entropy);
    apply_spawns(&mut next, &spawned);
    Advance {
        next,
        patterns,
        lifespans,
        stats: grid.census(),
        spawned,
    }
}

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The configured number of generations has been computed.
    GenerationLimit,
    /// No live cell is left.
    Extinct,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// Absorbing: no further generation is computed.
    Terminated(Termination),
}

/// Summary of one computed generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Index of the generation the statistics describe.
    pub generation: u64,
    pub stats: CellCounts,
    pub patterns: usize,
    /// Shapes seen for the first time in this generation.
    pub new_shapes: usize,
    pub longest_lifespan: u32,
    pub spawned: Vec<Coord>,
}

/// A single run: the grid and every piece of state that lives across generations.
///
/// # Example
///
/// ```rust
/// use gol_mutations::{Simulation, SimulationConfig};
///
/// let config = SimulationConfig {
///     max_generations: 20,
///     seed: Some(7),
///     ..SimulationConfig::default()
/// };
/// let mut sim = Simulation::new(config).unwrap();
/// while let Some(report) = sim.step() {
///     assert!(report.stats.alive_total() >= report.stats.mutation_total());
/// }
/// assert!(sim.is_terminated());
/// ```
pub struct Simulation<E = DefaultRng> {
    config: SimulationConfig,
    grid: Grid,
    lifespans: LifespanMap,
    registry: PatternRegistry,
    totals: Totals,
    history: History,
    generation: u64,
    state: RunState,
    entropy: E,
}

impl Simulation<DefaultRng> {
    /// Validates `config`, seeds the PRNG and fills a random initial grid.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] found by [`SimulationConfig::validate`].
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => DefaultRng::seed_from_u64(seed),
            None => DefaultRng::from_os_rng(),
        };
        let grid = Grid::random(config.width, config.height, config.live_probability, &mut rng)?;
        Self::with_grid(config, grid, rng)
    }
}

impl<E: Entropy> Simulation<E> {
    /// Starts a run from a given grid and randomness source.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid or the grid dimensions differ
    /// from the configured ones.
    pub fn with_grid(config: SimulationConfig, grid: Grid, entropy: E) -> Result<Self, ConfigError> {
        config.validate()?;
        if (grid.width(), grid.height()) != (config.width, config.height) {
            return Err(ConfigError::GridMismatch {
                width: config.width,
                height: config.height,
                actual_width: grid.width(),
                actual_height: grid.height(),
            });
        }
        let state = if config.max_generations == 0 {
            RunState::Terminated(Termination::GenerationLimit)
        } else {
            RunState::Running
        };
        Ok(Self {
            config,
            grid,
            lifespans: LifespanMap::new(),
            registry: PatternRegistry::new(),
            totals: Totals::default(),
            history: History::default(),
            generation: 0,
            state,
            entropy,
        })
    }

    /// Computes the next generation.
    ///
    /// # Returns
    /// The report for the generation that was just processed, or `None` once
    /// the run has terminated.
    pub fn step(&mut self) -> Option<GenerationReport> {
        if self.is_terminated() {
            return None;
        }
        let Advance {
            next,
            patterns,
            lifespans,
            stats,
            spawned,
        } = advance(&self.grid, &self.lifespans, &self.config.odds, &mut self.entropy);

        self.totals += stats;
        let new_shapes = self.registry.extend(&patterns);
        let report = GenerationReport {
            generation: self.generation,
            stats,
            patterns: patterns.len(),
            new_shapes,
            longest_lifespan: lifespans.longest(),
            spawned,
        };
        trace!(
            generation = self.generation,
            alive = stats.alive_total(),
            mutations = stats.mutation_total(),
            patterns = report.patterns,
            "Advanced generation"
        );

        self.history.push(next.clone());
        self.grid = next;
        self.lifespans = lifespans;
        self.generation += 1;

        if self.generation >= self.config.max_generations {
            self.terminate(Termination::GenerationLimit);
        } else if self.grid.is_extinct() {
            self.terminate(Termination::Extinct);
        }
        Some(report)
    }

    /// Steps until the run terminates.
    ///
    /// # Returns
    /// The reason the run stopped.
    pub fn run(&mut self) -> Termination {
        while self.step().is_some() {}
        match self.state {
            RunState::Terminated(reason) => reason,
            RunState::Running => unreachable!("step returned None while running"),
        }
    }

    fn terminate(&mut self, reason: Termination) {
        info!(
            generation = self.generation,
            ?reason,
            shapes = self.registry.len(),
            "Simulation terminated"
        );
        self.state = RunState::Terminated(reason);
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, RunState::Terminated(_))
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn lifespans(&self) -> &LifespanMap {
        &self.lifespans
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{testing::FixedEntropy, CellState, SPAWN_LIFESPAN};
    const SEED: u64 = 42;

    fn block_config(max_generations: u64) -> SimulationConfig {
        SimulationConfig {
            width: 6,
            height: 6,
            max_generations,
            ..SimulationConfig::default()
        }
    }

    fn block() -> Grid {
        Grid::from_rows(&[
            "......", //
            "......",
            "..OO..",
            "..OO..",
            "......",
            "......",
        ])
        .unwrap()
    }

    #[test]
    fn test_advance_blinker() {
        let grid = Grid::from_rows(&[".O.", ".O.", ".O."]).unwrap();
        let mut entropy = FixedEntropy::new(true, false);
        let result = advance(
            &grid,
            &LifespanMap::new(),
            &MutationOdds::default(),
            &mut entropy,
        );
        assert_eq!(result.next, Grid::from_rows(&["...", "OOO", "..."]).unwrap());
        assert_eq!(result.patterns.len(), 1);
        assert_eq!(result.lifespans.get(&result.patterns[0]), Some(1));
        assert_eq!(result.stats.plain, 3);
        assert!(result.spawned.is_empty());
    }

    #[test]
    fn test_block_lifespan_reaches_threshold() {
        // failing draws keep spawning out of the picture
        let mut sim =
            Simulation::with_grid(block_config(100), block(), FixedEntropy::new(true, false))
                .unwrap();
        let pattern = detect_patterns(&block()).remove(0);
        for expected in 1..=SPAWN_LIFESPAN {
            sim.step().unwrap();
            assert_eq!(sim.grid(), &block());
            assert_eq!(sim.lifespans().get(&pattern), Some(expected));
        }
    }

    #[test]
    fn test_spawn_happens_exactly_at_threshold() {
        let mut sim =
            Simulation::with_grid(block_config(100), block(), FixedEntropy::new(true, true))
                .unwrap();
        for _ in 1..SPAWN_LIFESPAN {
            let report = sim.step().unwrap();
            assert!(report.spawned.is_empty());
            assert_eq!(sim.grid().census().red, 0);
        }
        let report = sim.step().unwrap();
        assert_eq!(report.longest_lifespan, SPAWN_LIFESPAN);
        assert_eq!(report.spawned.len(), 1);
        assert_eq!(sim.grid().census().red, 1);
        let red = report.spawned[0];
        assert_eq!(sim.grid().get(red.x, red.y), CellState::RED);
    }

    #[test]
    fn test_spawn_overrides_newborn_cell() {
        let grid = Grid::from_rows(&["OO", "O."]).unwrap();
        let mut lifespans = LifespanMap::new();
        lifespans.set(detect_patterns(&grid).remove(0), SPAWN_LIFESPAN - 1);

        // without spawning the corner is born plain alive
        let candidate = next_candidate(
            &grid,
            &MutationOdds::default(),
            &mut FixedEntropy::new(true, true),
        );
        assert_eq!(candidate.get(1, 1), CellState::Alive);

        let mut entropy = FixedEntropy::new(true, true);
        let result = advance(&grid, &lifespans, &MutationOdds::default(), &mut entropy);
        assert_eq!(result.spawned, vec![Coord::new(1, 1)]);
        assert_eq!(result.next, Grid::from_rows(&["OO", "OR"]).unwrap());
    }

    #[test]
    fn test_terminates_at_generation_limit() {
        let mut sim =
            Simulation::with_grid(block_config(3), block(), FixedEntropy::new(true, false))
                .unwrap();
        assert_eq!(sim.run(), Termination::GenerationLimit);
        assert_eq!(sim.generation(), 3);
        assert_eq!(sim.totals().generations, 3);
        assert_eq!(sim.totals().alive_total(), 12);
        assert!(sim.step().is_none());
        assert_eq!(sim.generation(), 3);
    }

    #[test]
    fn test_terminates_on_extinction() {
        let grid = Grid::from_rows(&["......", ".O....", "......", "......", "....R.", "......"])
            .unwrap();
        let mut sim =
            Simulation::with_grid(block_config(100), grid, FixedEntropy::new(true, false))
                .unwrap();
        assert_eq!(sim.run(), Termination::Extinct);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.state(), RunState::Terminated(Termination::Extinct));
        assert_eq!(sim.registry().len(), 1);
    }

    #[test]
    fn test_zero_generations_starts_terminated() {
        let sim = Simulation::with_grid(block_config(0), block(), FixedEntropy::default()).unwrap();
        assert!(sim.is_terminated());
    }

    #[test]
    fn test_rejects_mismatched_grid() {
        let result = Simulation::with_grid(
            block_config(10),
            Grid::new(5, 6).unwrap(),
            FixedEntropy::default(),
        );
        assert!(matches!(result, Err(ConfigError::GridMismatch { .. })));
    }

    #[test]
    fn test_history_keeps_last_grids() {
        let config = SimulationConfig {
            max_generations: 25,
            seed: Some(SEED),
            ..SimulationConfig::default()
        };
        let mut sim = Simulation::new(config).unwrap();
        sim.run();
        assert!(sim.history().len() <= crate::HISTORY_DEPTH);
        assert_eq!(sim.history().latest(), Some(sim.grid()));
    }
}
