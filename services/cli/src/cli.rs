use crate::demo::{run_demo, DemoArgs};
use clap::{Parser, Subcommand};
use rental_registry::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "rental-registry",
    about = "Exercise the short-let rental registry from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Seed a registry, issue sample rentals, and print a JSON report
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    match Cli::parse().command {
        Command::Demo(args) => run_demo(args),
    }
}
