mod app;
mod cli;
mod effects;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    scrape_logging::initialize(&args.log_settings());

    let report = app::run(&args)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
