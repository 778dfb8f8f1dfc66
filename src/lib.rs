pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{local::LocalStorage, CliConfig};
pub use core::{engine::PipelineEngine, pipeline::MultiplesPipeline};
pub use domain::model::{ResultEntry, ResultSet, Triplet};
pub use utils::error::{MultiplesError, Result};
