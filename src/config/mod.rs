pub mod local;

use crate::core::ConfigProvider;
use crate::utils::error::{MultiplesError, Result};
use crate::utils::validation::{validate_non_empty_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "multiples-etl")]
#[command(about = "Computes multiples of two base numbers below a goal, per input line")]
pub struct CliConfig {
    /// Path to the input file (one `A B GOAL` triplet per line)
    pub input_file: String,

    /// Path to the output file
    pub output_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_file
    }

    fn output_path(&self) -> &str {
        &self.output_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_path("input_file", &self.input_file)?;
        validate_non_empty_path("output_file", &self.output_file)?;

        if self.input_file == self.output_file {
            return Err(MultiplesError::ConfigError {
                message: "Input and output file names must be different".to_string(),
            });
        }

        Ok(())
    }
}
