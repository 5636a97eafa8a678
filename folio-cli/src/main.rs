//! folio command-line front end.
//!
//! Usage:
//!   folio --catalog data/catalog.json list --kind lab
//!   folio show easy-garden --format text
//!   folio embed "https://youtube.com/shorts/4ubBHyGPA30?feature=share"

use anyhow::Result;
use clap::Parser;
use folio_cli::{Args, run};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let output = run(&args)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
