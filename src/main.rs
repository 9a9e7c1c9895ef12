use std::path::PathBuf;

use anova::{
    analyze, read_grid_from_path, render, AnalysisConfig, Design, ReaderConfig, RenderConfig,
};
use anyhow::Context as _;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Compute ANOVA tables from a CSV grid", long_about = None)]
struct CommandArgs {
    /// Experimental design to decompose: simple, blocked or twoway
    method: Design,
    /// CSV file, one row per replicate record and one column per level
    csv_file: PathBuf,
    /// Number of consecutive rows that form one block
    reps: usize,
    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,
    /// Skip the first record as a header row
    #[arg(long)]
    has_header: bool,
    /// Decimal places in the rendered table
    #[arg(long, default_value_t = 4)]
    precision: usize,
    /// Relative tolerance before a negative sum of squares is flagged
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,
    /// Print the table as JSON instead of text
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = CommandArgs::parse();

    let delimiter = u8::try_from(args.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("delimiter {:?} is not a single ASCII character", args.delimiter))?;
    let reader_config = ReaderConfig {
        delimiter,
        has_headers: args.has_header,
    };
    let grid = read_grid_from_path(&args.csv_file, &reader_config)
        .with_context(|| format!("failed to load {}", args.csv_file.display()))?;

    let config = AnalysisConfig {
        ss_tolerance: args.tolerance,
    };
    let design = args.method;
    let table = analyze(design, &grid, args.reps, &config)
        .with_context(|| format!("{design} ANOVA failed for {}", args.csv_file.display()))?;

    #[cfg(feature = "serde")]
    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!(
        "{}",
        render(
            &table,
            &RenderConfig {
                precision: args.precision
            }
        )
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parses_through_design() {
        let args = CommandArgs::try_parse_from(["anova", "twoway", "data.csv", "2"]).unwrap();
        assert_eq!(args.method, Design::TwoWay);
        assert_eq!(args.reps, 2);
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let err = CommandArgs::try_parse_from(["anova", "latin", "data.csv", "2"]).unwrap_err();
        assert!(err.to_string().contains("unknown design \"latin\""), "{err}");
    }
}
