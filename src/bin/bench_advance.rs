use gol_mutations::*;
use rand::SeedableRng;

const SEED: u64 = 42;
const GENERATIONS: u32 = 200;

fn main() {
    // timing `advance` on square grids of growing size
    for side_log2 in 5..=10 {
        let side = 1usize << side_log2;
        let mut rng = DefaultRng::seed_from_u64(SEED);
        let mut grid = Grid::random(side, side, 0.5, &mut rng).unwrap();
        let mut lifespans = LifespanMap::new();
        let odds = MutationOdds::default();

        let timer = std::time::Instant::now();
        let mut spawned = 0;
        for _ in 0..GENERATIONS {
            let step = advance(&grid, &lifespans, &odds, &mut rng);
            spawned += step.spawned.len();
            grid = step.next;
            lifespans = step.lifespans;
        }
        let elapsed = timer.elapsed().as_secs_f64();
        println!(
            "{side}x{side}\t{:.3} secs\t{:.1} ns/cell\tspawned={spawned}\talive={}",
            elapsed,
            elapsed * 1e9 / (GENERATIONS as f64 * (side * side) as f64),
            grid.census().alive_total()
        );
    }
}
