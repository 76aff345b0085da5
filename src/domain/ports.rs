use crate::domain::model::{Client, ReportFormat, SearchOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Resolved search inputs, however they were supplied (flags, settings file).
pub trait SearchConfig: Send + Sync {
    /// Free-text query; empty matches everything.
    fn query(&self) -> &str;
    /// Raw industry selector; `"all"` is the match-everything sentinel.
    fn industry(&self) -> &str;
    fn min_score(&self) -> Option<u8>;
    /// When set, the store is restricted to these acquisition channels.
    fn enabled_sources(&self) -> Option<&[String]>;
    /// JSON store file; the built-in seed set is used when absent.
    fn store_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
    fn formats(&self) -> &[ReportFormat];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Client>>;
    async fn transform(&self, clients: Vec<Client>) -> Result<SearchOutcome>;
    async fn load(&self, outcome: SearchOutcome) -> Result<String>;
}
