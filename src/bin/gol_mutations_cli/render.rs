use crate::util::grouped;
use gol_mutations::{CellCounts, CellState, Grid, Mutation, Totals};
use std::fmt::Write;

const RESET: &str = "\x1b[0m";
const BORDER: &str = "\x1b[96m|\x1b[0m";
const RULE: &str = "\x1b[95m---------------\x1b[0m";
/// Column at which the stats start when the grid is narrow.
const STATS_COLUMN: usize = 52;

fn colour(mutation: Mutation) -> &'static str {
    match mutation {
        Mutation::Blue => "\x1b[94m",
        Mutation::Red => "\x1b[91m",
        Mutation::Green => "\x1b[92m",
        Mutation::Yellow => "\x1b[93m",
    }
}

fn stats_lines(generation: u64, counts: &CellCounts, totals: &Totals) -> Vec<String> {
    let t = &totals.counts;
    vec![
        format!("Generation: {generation}"),
        RULE.to_string(),
        "Current Stats:".to_string(),
        format!("Alive: {}", counts.alive_total()),
        format!("Mutations: {}", counts.mutation_total()),
        format!("Blue: {}", counts.blue),
        format!("Red: {}", counts.red),
        format!("Green: {}", counts.green),
        format!("Yellow: {}", counts.yellow),
        RULE.to_string(),
        "Historic Stats:".to_string(),
        format!("Total: {}", grouped(t.alive_total())),
        format!("Mutations: {}", grouped(t.mutation_total())),
        format!("Total Blue: {}", grouped(t.blue)),
        format!("Total Red: {}", grouped(t.red)),
        format!("Total Green: {}", grouped(t.green)),
        format!("Total Yellow: {}", grouped(t.yellow)),
    ]
}

/// Draws the grid with the statistics to its right, clearing the screen first.
pub(super) fn frame(grid: &Grid, generation: u64, counts: &CellCounts, totals: &Totals) -> String {
    let stats = stats_lines(generation, counts, totals);
    let pad = " ".repeat(STATS_COLUMN.saturating_sub(grid.width() * 2));
    let mut out = String::from("\x1b[2J\x1b[H");
    for (y, row) in grid.rows().enumerate() {
        out.push_str(BORDER);
        for &cell in row {
            match cell {
                CellState::Dead => out.push_str("  "),
                CellState::Alive => out.push_str("* "),
                CellState::Mutated(m) => {
                    write!(out, "{}*{} ", colour(m), RESET).unwrap();
                }
            }
        }
        out.push_str(BORDER);
        out.push(' ');
        if let Some(line) = stats.get(y) {
            out.push_str(&pad);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
