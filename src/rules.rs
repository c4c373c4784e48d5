//! Per-cell transition rules of the mutation variant.
use crate::{CellState, Entropy, Grid, Mutation, MutationOdds};

/// Resolves the state of a cell born with exactly 3 live neighbours.
///
/// Heads on the coin gives a plain alive cell. On tails the colours are tried
/// in [`Mutation::ALL`] order, each with the predicate "has a mutated
/// neighbour, or its own 1-in-N draw succeeds". The neighbour check does not
/// depend on the colour, so any mutated neighbour makes the newborn blue, and
/// in that case no draws are made at all. If no predicate holds the cell is
/// plain alive.
fn newborn<E: Entropy + ?Sized>(
    mutated_neighbor: bool,
    odds: &MutationOdds,
    entropy: &mut E,
) -> CellState {
    if entropy.coin_flip() {
        return CellState::Alive;
    }
    for mutation in Mutation::ALL {
        if mutated_neighbor || entropy.one_in(odds.denominator(mutation)) {
            return CellState::Mutated(mutation);
        }
    }
    CellState::Alive
}

/// Computes the next grid from `grid` alone, before any spawn overrides.
///
/// | state  | stays when n in | otherwise |
/// |--------|-----------------|-----------|
/// | alive  | 2, 3            | dead      |
/// | blue   | 3, 4            | dead      |
/// | green  | 4, 5            | dead      |
/// | yellow | 5, 6            | dead      |
/// | red    | never           | dead      |
/// | dead   | born if n == 3  | dead      |
///
/// Cells are visited in row-major order and only births consume randomness:
/// one coin flip, then on tails up to four 1-in-N draws (blue, red, green,
/// yellow), skipped entirely when a mutated neighbour exists.
pub fn next_candidate<E: Entropy + ?Sized>(
    grid: &Grid,
    odds: &MutationOdds,
    entropy: &mut E,
) -> Grid {
    let mut next = grid.clone();
    for (x, y, state) in grid.cells() {
        let n = grid.neighbor_count(x, y);
        let new_state = match state {
            CellState::Dead if n == 3 => newborn(grid.has_mutated_neighbor(x, y), odds, entropy),
            CellState::Dead => CellState::Dead,
            live if live.survives(n) => live,
            _ => CellState::Dead,
        };
        next.set(x, y, new_state);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedEntropy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    const SEED: u64 = 42;

    fn step(rows: &[&str], entropy: &mut FixedEntropy) -> Grid {
        let grid = Grid::from_rows(rows).unwrap();
        next_candidate(&grid, &MutationOdds::default(), entropy)
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut entropy = FixedEntropy::new(true, false);
        let next = step(&[".O.", ".O.", ".O."], &mut entropy);
        assert_eq!(next, Grid::from_rows(&["...", "OOO", "..."]).unwrap());
        // one coin per birth, no mutation draws on heads
        assert_eq!(entropy.coin_flips, 2);
        assert!(entropy.one_in_draws.is_empty());
    }

    #[test]
    fn test_tails_without_luck_is_plain_alive() {
        let mut entropy = FixedEntropy::new(false, false);
        let next = step(&["O.O", "...", ".O."], &mut entropy);
        assert_eq!(next.get(1, 1), CellState::Alive);
        assert_eq!(entropy.one_in_draws, vec![64, 64, 64, 64]);
    }

    #[test]
    fn test_tails_uses_each_colour_denominator_in_order() {
        let grid = Grid::from_rows(&["O.O", "...", ".O."]).unwrap();
        let odds = MutationOdds {
            blue: 2,
            red: 3,
            green: 5,
            yellow: 7,
        };
        let mut entropy = FixedEntropy::new(false, false);
        next_candidate(&grid, &odds, &mut entropy);
        assert_eq!(entropy.one_in_draws, vec![2, 3, 5, 7]);
    }

    #[test]
    fn test_lucky_first_draw_gives_blue() {
        let mut entropy = FixedEntropy::new(false, true);
        let next = step(&["O.O", "...", ".O."], &mut entropy);
        assert_eq!(next.get(1, 1), CellState::BLUE);
        assert_eq!(entropy.one_in_draws.len(), 1);
    }

    #[test]
    fn test_any_mutated_neighbor_gives_blue_without_draws() {
        for colour in ["R", "G", "Y", "B"] {
            let top = format!("{colour}.O");
            let mut entropy = FixedEntropy::new(false, false);
            let next = step(&[top.as_str(), "...", ".O."], &mut entropy);
            assert_eq!(next.get(1, 1), CellState::BLUE, "neighbor {}", colour);
            assert!(entropy.one_in_draws.is_empty());
        }
    }

    #[test]
    fn test_heads_ignores_mutated_neighbor() {
        let mut entropy = FixedEntropy::new(true, true);
        let next = step(&["R.O", "...", ".O."], &mut entropy);
        assert_eq!(next.get(1, 1), CellState::Alive);
    }

    #[test]
    fn test_red_always_dies() {
        let mut entropy = FixedEntropy::new(true, false);
        let next = step(&["OOO", "ORO", "OOO"], &mut entropy);
        assert_eq!(next.get(1, 1), CellState::Dead);
        let next = step(&["OO.", "OR.", "..."], &mut entropy);
        assert_eq!(next.get(1, 1), CellState::Dead);
    }

    #[test]
    fn test_mutation_survival() {
        let mut entropy = FixedEntropy::new(true, false);
        // centre has 4 neighbours: blue and green survive, yellow dies
        let rows = |c: char| {
            [
                "O.O".to_string(),
                format!(".{c}."),
                "O.O".to_string(),
            ]
        };
        for (c, expected) in [
            ('B', CellState::BLUE),
            ('G', CellState::GREEN),
            ('Y', CellState::Dead),
            ('O', CellState::Dead),
        ] {
            let rows = rows(c);
            let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
            let next = step(&refs, &mut entropy);
            assert_eq!(next.get(1, 1), expected, "centre {}", c);
        }
    }

    #[test]
    fn test_states_stay_valid_on_random_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let mut grid = Grid::random(40, 20, 0.4, &mut rng).unwrap();
        let odds = MutationOdds::uniform(4);
        for _ in 0..30 {
            grid = next_candidate(&grid, &odds, &mut rng);
            assert_eq!((grid.width(), grid.height()), (40, 20));
            for (x, y, state) in grid.cells() {
                assert!(grid.neighbor_count(x, y) <= 8);
                assert!(matches!(
                    state,
                    CellState::Dead | CellState::Alive | CellState::Mutated(_)
                ));
            }
        }
    }
}
