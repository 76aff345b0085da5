pub mod engine;
pub mod filter;
pub mod stats;

pub use crate::domain::model::{Client, SearchOutcome, StatsBundle};
pub use crate::domain::ports::{Pipeline, SearchConfig, Storage};
pub use crate::utils::error::Result;
