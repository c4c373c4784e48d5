use crate::{Grid, Mutation};
use thiserror::Error;

/// Rejected simulation settings. Raised before the first generation is computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("probability denominator for {0} mutations must be positive")]
    ZeroDenominator(Mutation),

    #[error("live cell probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("grid is {actual_width}x{actual_height} but the configuration expects {width}x{height}")]
    GridMismatch {
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },
}

/// Independent 1-in-N probability denominators, one per mutation colour.
///
/// The red denominator is also used for the spawn draw of long-lived patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MutationOdds {
    pub blue: u32,
    pub red: u32,
    pub green: u32,
    pub yellow: u32,
}

impl MutationOdds {
    pub const DEFAULT_DENOMINATOR: u32 = 64;

    /// Same denominator for every colour.
    pub fn uniform(denominator: u32) -> Self {
        Self {
            blue: denominator,
            red: denominator,
            green: denominator,
            yellow: denominator,
        }
    }

    pub fn denominator(&self, mutation: Mutation) -> u32 {
        match mutation {
            Mutation::Blue => self.blue,
            Mutation::Red => self.red,
            Mutation::Green => self.green,
            Mutation::Yellow => self.yellow,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match Mutation::ALL.into_iter().find(|&m| self.denominator(m) == 0) {
            Some(m) => Err(ConfigError::ZeroDenominator(m)),
            None => Ok(()),
        }
    }
}

impl Default for MutationOdds {
    fn default() -> Self {
        Self::uniform(Self::DEFAULT_DENOMINATOR)
    }
}

/// Settings of a single run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    /// The run terminates once this many generations have been computed.
    pub max_generations: u64,
    /// Probability of each cell of the initial grid being alive.
    pub live_probability: f64,
    pub odds: MutationOdds,
    /// Seed of the PRNG; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 27,
            max_generations: 100,
            live_probability: 0.5,
            odds: MutationOdds::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Checks every setting the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint:
    /// - zero width or height, or more cells than [`crate::DisjointSet::MAX_LEN`]
    /// - a zero mutation denominator
    /// - `live_probability` outside `[0, 1]` (NaN included)
    pub fn validate(&self) -> Result<(), ConfigError> {
        Grid::checked_len(self.width, self.height)?;
        self.odds.validate()?;
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(ConfigError::InvalidProbability(self.live_probability));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!((config.width, config.height), (50, 27));
        assert_eq!(config.odds, MutationOdds::uniform(64));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let config = SimulationConfig {
            height: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDimensions {
                width: 50,
                height: 0
            })
        );
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        let config = SimulationConfig {
            width: usize::MAX,
            height: 2,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
        let config = SimulationConfig {
            width: 1 << 20,
            height: 1 << 20,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_denominator() {
        let config = SimulationConfig {
            odds: MutationOdds {
                green: 0,
                ..MutationOdds::default()
            },
            ..SimulationConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDenominator(Mutation::Green))
        );
    }

    #[test]
    fn test_rejects_bad_probability() {
        for p in [-0.1, 1.5, f64::NAN] {
            let config = SimulationConfig {
                live_probability: p,
                ..SimulationConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidProbability(_))
            ));
        }
    }
}
