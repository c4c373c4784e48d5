use crate::util::{export_patterns, grouped, local_time, SimulationArgs};
use anyhow::Result;
use clap::Args;

#[derive(Args, Debug)]
pub(super) struct CensusArgs {
    #[command(flatten)]
    simulation: SimulationArgs,

    /// Only print every n-th generation
    #[arg(short = 'n', long, default_value_t = 1)]
    every: u64,
}

pub(super) fn run_census(args: CensusArgs) -> Result<()> {
    let timer = std::time::Instant::now();
    let mut sim = args.simulation.build()?;
    let every = args.every.max(1);

    println!("gen\talive\tmut\tblue\tred\tgreen\tyellow\tpatterns\tspawned");
    while let Some(report) = sim.step() {
        if report.generation % every != 0 {
            continue;
        }
        let s = &report.stats;
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            report.generation,
            s.alive_total(),
            s.mutation_total(),
            s.blue,
            s.red,
            s.green,
            s.yellow,
            report.patterns,
            report.spawned.len()
        );
    }

    let totals = sim.totals();
    println!(
        "[{}] Finished after {} generations ({:?}) in {:.1} secs",
        local_time(),
        sim.generation(),
        sim.state(),
        timer.elapsed().as_secs_f64()
    );
    println!("Total alive: {}", grouped(totals.alive_total()));
    println!("Total mutations: {}", grouped(totals.mutation_total()));
    println!("Distinct patterns: {}", grouped(sim.registry().len() as u64));
    if let Some(path) = &args.simulation.export {
        export_patterns(&sim, path)?;
    }
    Ok(())
}
