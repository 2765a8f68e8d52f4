// File: crates/bench-report/src/main.rs
// Summary: Entry point: parse flags, set up logging, render the timing chart.

use anyhow::{Context, Result};
use bench_report::Config;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let out = bench_report::run(&config)
        .with_context(|| format!("failed to build report from '{}'", config.results_dir.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
