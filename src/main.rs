use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = cli::Args::parse();
    commands::run(args)
}
