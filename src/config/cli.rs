use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "quad-solver")]
#[command(about = "Solve quadratic equations a * x^2 + b * x + c = 0")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    /// Coefficients, three per equation: a b c [a b c ...]
    pub coefficients: Vec<String>,

    /// Read equations from a file
    #[arg(short, long)]
    pub file: Option<String>,

    /// Run the solver against a fixture file of known answers
    #[arg(short, long)]
    pub test: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Absolute tolerance below which a value counts as zero
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Significant digits in printed numbers
    #[arg(long)]
    pub precision: Option<usize>,

    /// Print the fixture report as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for (field, path) in [("file", &self.file), ("test", &self.test), ("config", &self.config)] {
            if let Some(path) = path {
                validate_path(field, path)?;
            }
        }
        Ok(())
    }
}
