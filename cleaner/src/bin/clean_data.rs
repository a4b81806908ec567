use std::path::PathBuf;

use anyhow::{Context, Result};

use table_cleaner::io::load_csv;
use table_cleaner::preprocessing::{CleanConfig, CleanPipeline};

const USAGE: &str =
    "Usage: clean-data <input.csv> [output.csv] [--config <file.toml>] [--normalize-names]";

fn main() -> Result<()> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut normalize_names = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().context("--config requires a file path")?;
                config_path = Some(PathBuf::from(value));
            }
            "--normalize-names" => normalize_names = true,
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ if output.is_none() => output = Some(PathBuf::from(arg)),
            _ => anyhow::bail!("Unexpected argument: {arg}\n{USAGE}"),
        }
    }

    let input = input.context(USAGE)?;

    let mut config = match config_path {
        Some(path) => CleanConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CleanConfig::default(),
    };
    if let Some(output) = output {
        config.output_path = output;
    }
    if normalize_names {
        config.normalize_column_names = true;
    }

    println!("=== Customer Data Cleaner ===");
    println!("Input file:  {}", input.display());
    println!("Output file: {}", config.output_path.display());
    println!();

    let df = load_csv(&input).with_context(|| format!("Failed to read {}", input.display()))?;
    println!("Loaded {} rows, {} columns", df.height(), df.width());

    let outcome = CleanPipeline::with_config(config).run(df)?;

    println!(
        "Cleaned {} -> {} rows ({} duplicates removed)",
        outcome.report.rows_in, outcome.report.rows_out, outcome.report.duplicates_removed
    );
    println!("{}", serde_json::to_string_pretty(&outcome.report)?);

    Ok(())
}
