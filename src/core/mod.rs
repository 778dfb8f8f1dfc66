pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{ResultEntry, ResultSet, Triplet};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
