use anyhow::Result;
use clap::Parser;
use libretto::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
