use crate::render::frame;
use crate::util::{export_patterns, SimulationArgs};
use anyhow::Result;
use clap::Args;
use std::time::Duration;

#[derive(Args, Debug)]
pub(super) struct RunArgs {
    #[command(flatten)]
    simulation: SimulationArgs,

    /// Pause between frames, in milliseconds
    #[arg(short, long, default_value_t = 100)]
    delay_ms: u64,
}

pub(super) fn run_animation(args: RunArgs) -> Result<()> {
    let mut sim = args.simulation.build()?;
    let delay = Duration::from_millis(args.delay_ms);

    loop {
        let generation = sim.generation();
        let grid = sim.grid().clone();
        let Some(report) = sim.step() else {
            break;
        };
        print!("{}", frame(&grid, generation, &report.stats, sim.totals()));
        std::thread::sleep(delay);
    }

    println!("\n\x1b[93mSimulation Over\x1b[0m ({:?})", sim.state());
    if let Some(path) = &args.simulation.export {
        export_patterns(&sim, path)?;
    }
    Ok(())
}
