use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "weightnorm",
    about = "Convert every \"weight\" field in a JSON file to a float, in place",
    version
)]
struct Args {
    /// JSON file to normalize (read and overwritten)
    #[arg(default_value = "workout.json")]
    file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    weightnorm::normalize_file(&args.file)?;
    println!("All 'weight' fields have been converted to double.");

    Ok(())
}
