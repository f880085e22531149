use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rusty_explorer::data::{export, synth};

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_data.csv"));

    let mut rng = StdRng::seed_from_u64(42);
    let table = synth::generate(&mut rng, synth::SYNTHETIC_ROWS);
    export::save_csv(&table, &output_path)?;

    println!(
        "Wrote {} rows ({} columns) to {}",
        table.len(),
        table.column_count(),
        output_path.display()
    );
    Ok(())
}
