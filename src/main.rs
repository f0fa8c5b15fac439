use anyhow::Result;
use clap::Parser;
use payrun::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
