use crate::{CellState, Coord, Entropy, Grid, LifespanMap, MutationOdds, Pattern, SPAWN_LIFESPAN};
use tracing::debug;

/// Dead cells of `grid` touching `pattern` (Moore neighbourhood), excluding the
/// pattern's own cells. Sorted and without duplicates.
pub fn spawn_points(grid: &Grid, pattern: &Pattern) -> Vec<Coord> {
    let mut points: Vec<Coord> = pattern
        .cells()
        .iter()
        .flat_map(|c| grid.neighbors(c.x, c.y))
        .map(Coord::from)
        .filter(|&c| grid.get(c.x, c.y) == CellState::Dead && !pattern.contains(c))
        .collect();
    points.sort_unstable();
    points.dedup();
    points
}

/// Chooses the cells that long-lived patterns turn red in the next generation.
///
/// `patterns` are the patterns of the current grid in detection order and
/// `lifespans` their lifespans including the current generation. Every pattern
/// that has lived at least [`SPAWN_LIFESPAN`] generations and touches at least
/// one dead cell makes one 1-in-`odds.red` draw; on success one of its
/// [`spawn_points`] is picked uniformly. Each pattern yields at most one cell.
pub fn plan_spawns<E: Entropy + ?Sized>(
    current: &Grid,
    patterns: &[Pattern],
    lifespans: &LifespanMap,
    odds: &MutationOdds,
    entropy: &mut E,
) -> Vec<Coord> {
    let mut overrides = Vec::new();
    for pattern in patterns {
        let lifespan = lifespans.get(pattern).unwrap_or(0);
        if lifespan < SPAWN_LIFESPAN {
            continue;
        }
        let points = spawn_points(current, pattern);
        if points.is_empty() || !entropy.one_in(odds.red) {
            continue;
        }
        let target = points[entropy.pick(points.len())];
        debug!(
            x = target.x,
            y = target.y,
            lifespan,
            cells = pattern.len(),
            "Spawning red cell next to long-lived pattern"
        );
        overrides.push(target);
    }
    overrides
}

/// Forces every cell in `overrides` to red, replacing the transition result.
pub fn apply_spawns(next: &mut Grid, overrides: &[Coord]) {
    for c in overrides {
        next.set(c.x, c.y, CellState::RED);
    }
}
