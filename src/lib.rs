pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use app::pipelines::{DiscoveryPipeline, SearchPipeline};
pub use config::{DiscoverySettings, SearchSettings};
pub use crate::core::engine::SearchEngine;
pub use crate::core::filter::IndustrySelector;
pub use domain::store::ClientStore;
pub use utils::error::{FinderError, Result};
