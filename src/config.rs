use std::path::PathBuf;

use clap::Parser;

/// Share of rows held out for testing when none is given.
pub const DEFAULT_TEST_SIZE: f64 = 0.4;

/// Settings for one evaluation run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Fraction of rows held out for testing, in (0, 1).
    pub test_size: f64,
    /// Split seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            test_size: DEFAULT_TEST_SIZE,
            seed: None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "shopping-knn",
    version,
    about = "Predict purchase intent from shopping sessions with a 1-nearest-neighbour classifier"
)]
pub struct Cli {
    /// Shopping sessions CSV (header row plus one session per line).
    pub data: PathBuf,

    /// Fraction of sessions held out for testing.
    #[arg(long, default_value_t = DEFAULT_TEST_SIZE, value_parser = parse_fraction)]
    pub test_size: f64,

    /// Seed for the train/test shuffle. Omit for a fresh split each run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            test_size: self.test_size,
            seed: self.seed,
        }
    }
}

fn parse_fraction(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|_| format!("'{raw}' is not a number"))?;
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(format!("{value} is not between 0 and 1 (exclusive)"))
    }
}
