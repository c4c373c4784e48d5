use anyhow::{anyhow, Context, Result};
use chrono::Local;
use clap::Args;
use gol_mutations::{MutationOdds, Simulation, SimulationConfig};
use num_format::{CustomFormat, Grouping, ToFormattedString};
use std::io::{BufRead, Write};

/// Flags shared by every subcommand that builds a simulation.
#[derive(Args, Debug)]
pub(super) struct SimulationArgs {
    /// Number of generations to simulate; prompted for when omitted
    #[arg(short, long)]
    generations: Option<u64>,

    /// Width of the grid in cells
    #[arg(long, default_value_t = 50)]
    width: usize,

    /// Height of the grid in cells
    #[arg(long, default_value_t = 27)]
    height: usize,

    /// Probability of each initial cell being alive
    #[arg(short = 'p', long, default_value_t = 0.5)]
    live_probability: f64,

    /// Seed for the random number generator, random by default
    #[arg(short, long)]
    seed: Option<u64>,

    /// 1-in-N chance of a newborn turning blue
    #[arg(long, default_value_t = MutationOdds::DEFAULT_DENOMINATOR)]
    blue_odds: u32,

    /// 1-in-N chance of a newborn turning red; also used for spawning
    #[arg(long, default_value_t = MutationOdds::DEFAULT_DENOMINATOR)]
    red_odds: u32,

    /// 1-in-N chance of a newborn turning green
    #[arg(long, default_value_t = MutationOdds::DEFAULT_DENOMINATOR)]
    green_odds: u32,

    /// 1-in-N chance of a newborn turning yellow
    #[arg(long, default_value_t = MutationOdds::DEFAULT_DENOMINATOR)]
    yellow_odds: u32,

    /// Write the distinct patterns seen during the run to this file (.gz compresses)
    #[arg(short, long)]
    pub(super) export: Option<String>,
}

impl SimulationArgs {
    pub(super) fn build(&self) -> Result<Simulation> {
        let max_generations = match self.generations {
            Some(n) => n,
            None => prompt_generations()?,
        };
        let config = SimulationConfig {
            width: self.width,
            height: self.height,
            max_generations,
            live_probability: self.live_probability,
            odds: MutationOdds {
                blue: self.blue_odds,
                red: self.red_odds,
                green: self.green_odds,
                yellow: self.yellow_odds,
            },
            seed: self.seed,
        };
        Ok(Simulation::new(config)?)
    }
}

fn prompt_generations() -> Result<u64> {
    print!("Enter the \x1b[91mmaximum\x1b[0m number of generations for the simulation to run: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read the number of generations")?;
    line.trim()
        .parse()
        .map_err(|_| anyhow!("{:?} is not a number of generations", line.trim()))
}

pub(super) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

pub(super) fn grouped(value: u64) -> String {
    let fmt = CustomFormat::builder()
        .grouping(Grouping::Standard)
        .separator("_")
        .build()
        .unwrap();
    value.to_formatted_string(&fmt)
}

pub(super) fn local_time() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

pub(super) fn export_patterns(sim: &Simulation, path: &str) -> Result<()> {
    sim.registry().to_file(path)?;
    println!(
        "[{}] Exported {} patterns to {}",
        local_time(),
        grouped(sim.registry().len() as u64),
        path
    );
    Ok(())
}
