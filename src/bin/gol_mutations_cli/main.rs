mod census;
mod render;
mod run;
mod util;

use census::{run_census, CensusArgs};
use clap::{Parser, Subcommand};
use run::{run_animation, RunArgs};

#[derive(Parser, Debug)]
#[command(version, about)]
struct CLIParser {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Animate the simulation in the terminal with coloured mutations
    Run(RunArgs),
    /// Run the simulation without rendering and print per-generation counts
    Census(CensusArgs),
}

fn main() {
    util::init_tracing();
    let args = CLIParser::parse();

    let result = match args.action {
        Action::Run(args) => run_animation(args),
        Action::Census(args) => run_census(args),
    };
    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
