use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use listing_dashboard::data::synthetic::{generate_listings, SyntheticConfig};
use listing_dashboard::data::writer::write_file;

/// Write the seeded synthetic listings to a file.
#[derive(Debug, Parser)]
#[command(about)]
struct Args {
    /// Output path; the extension picks the format (.parquet, .csv, .json).
    output: PathBuf,

    #[arg(long, default_value_t = 1000)]
    rows: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Leave latitude/longitude out.
    #[arg(long)]
    no_coordinates: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let listings = generate_listings(&SyntheticConfig {
        seed: args.seed,
        rows: args.rows,
        coordinates: !args.no_coordinates,
    });
    write_file(&args.output, &listings)?;

    println!(
        "Wrote {} listings (seed {}) to {}",
        listings.len(),
        args.seed,
        args.output.display()
    );
    Ok(())
}
