use rand::Rng;

/// Source of every random decision the simulation makes.
///
/// Each generation consumes draws in a fixed order (see [`crate::next_candidate`]
/// and [`crate::plan_spawns`]), so a seeded implementation yields a fully
/// deterministic run. Every [`rand::Rng`] implements this trait; tests can
/// provide scripted implementations to force particular outcomes.
pub trait Entropy {
    /// Fair coin used when a dead cell is born.
    ///
    /// # Returns
    /// `true` for heads, which makes the newborn a plain alive cell.
    fn coin_flip(&mut self) -> bool;

    /// Draws a uniform integer in `1..=denominator` and reports whether it is `1`.
    ///
    /// # Parameters
    /// * `denominator` - Must be non-zero; [`crate::SimulationConfig::validate`]
    ///   guarantees it for every configured channel.
    fn one_in(&mut self, denominator: u32) -> bool;

    /// Picks a uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> Entropy for R {
    fn coin_flip(&mut self) -> bool {
        self.random_bool(0.5)
    }

    fn one_in(&mut self, denominator: u32) -> bool {
        self.random_range(1..=denominator) == 1
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}
