mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{diff::DiffArgs, print::PrintArgs};

#[derive(Parser)]
#[command(
    name = "parqinfer",
    about = "Infer Parquet-style schemas from type definition files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the inferred schema for one type
    Print(PrintArgs),
    /// Compare the schemas inferred from two definition files
    Diff(DiffArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print(args) => args.run(),
        Commands::Diff(args) => args.run(),
    }
}
