//! Per-generation and cumulative counts of live cells by type.
use crate::Mutation;
use std::ops::AddAssign;

/// Live cells of each type in one grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// Plain alive cells, without a mutation.
    pub plain: u64,
    pub blue: u64,
    pub red: u64,
    pub green: u64,
    pub yellow: u64,
}

impl CellCounts {
    /// All live cells, plain and mutated.
    pub fn alive_total(&self) -> u64 {
        self.plain + self.mutation_total()
    }

    pub fn mutation_total(&self) -> u64 {
        self.blue + self.red + self.green + self.yellow
    }

    pub fn mutation(&self, mutation: Mutation) -> u64 {
        match mutation {
            Mutation::Blue => self.blue,
            Mutation::Red => self.red,
            Mutation::Green => self.green,
            Mutation::Yellow => self.yellow,
        }
    }
}

/// Running sum of [`CellCounts`] over every generation of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub generations: u64,
    pub counts: CellCounts,
}

impl Totals {
    pub fn alive_total(&self) -> u64 {
        self.counts.alive_total()
    }

    pub fn mutation_total(&self) -> u64 {
        self.counts.mutation_total()
    }
}

impl AddAssign<CellCounts> for Totals {
    fn add_assign(&mut self, rhs: CellCounts) {
        self.generations += 1;
        self.counts.plain += rhs.plain;
        self.counts.blue += rhs.blue;
        self.counts.red += rhs.red;
        self.counts.green += rhs.green;
        self.counts.yellow += rhs.yellow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_accumulate() {
        let a = CellCounts {
            plain: 10,
            blue: 1,
            red: 2,
            green: 0,
            yellow: 3,
        };
        let b = CellCounts {
            plain: 4,
            red: 1,
            ..CellCounts::default()
        };
        let mut totals = Totals::default();
        totals += a;
        totals += b;
        assert_eq!(totals.generations, 2);
        assert_eq!(totals.alive_total(), 16 + 5);
        assert_eq!(totals.mutation_total(), 7);
        assert_eq!(totals.counts.mutation(Mutation::Red), 3);
    }

    #[test]
    fn test_alive_total_includes_mutations() {
        let counts = CellCounts {
            plain: 5,
            blue: 1,
            red: 1,
            green: 1,
            yellow: 1,
        };
        assert_eq!(counts.alive_total(), 9);
        assert_eq!(counts.mutation_total(), 4);
    }
}
