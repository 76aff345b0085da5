use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a pipeline through extract, transform and load, with optional
/// per-phase resource reporting.
pub struct SearchEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> SearchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting client search");

        tracing::debug!("Extracting clients...");
        let clients = self.pipeline.extract().await?;
        tracing::info!("Extracted {} client(s)", clients.len());
        self.monitor.log_stats("extract");

        tracing::debug!("Filtering and aggregating...");
        let outcome = self.pipeline.transform(clients).await?;
        tracing::info!("Matched {} client(s)", outcome.matched.len());
        self.monitor.log_stats("transform");

        tracing::debug!("Delivering results...");
        let destination = self.pipeline.load(outcome).await?;
        self.monitor.log_stats("load");

        self.monitor.log_final_stats();

        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{filter, stats};
    use crate::domain::model::{Client, SearchOutcome};
    use crate::domain::store::seed_clients;
    use async_trait::async_trait;

    struct FixedPipeline {
        query: String,
    }

    #[async_trait]
    impl Pipeline for FixedPipeline {
        async fn extract(&self) -> Result<Vec<Client>> {
            Ok(seed_clients())
        }

        async fn transform(&self, clients: Vec<Client>) -> Result<SearchOutcome> {
            let matched =
                filter::filter_clients(&clients, &self.query, &filter::IndustrySelector::All);
            Ok(SearchOutcome {
                matched,
                stats: stats::aggregate(&clients),
                text_view: String::new(),
                report_json: String::new(),
                matched_csv: String::new(),
            })
        }

        async fn load(&self, outcome: SearchOutcome) -> Result<String> {
            Ok(format!("matched:{}", outcome.matched.len()))
        }
    }

    #[tokio::test]
    async fn engine_runs_all_three_phases() {
        let engine = SearchEngine::new(FixedPipeline {
            query: "CRM".to_string(),
        });
        let destination = engine.run().await.unwrap();
        assert_eq!(destination, "matched:1");
    }

    #[tokio::test]
    async fn engine_with_monitoring_still_returns_destination() {
        let engine = SearchEngine::new_with_monitoring(
            FixedPipeline {
                query: String::new(),
            },
            true,
        );
        let destination = engine.run().await.unwrap();
        assert_eq!(destination, "matched:5");
    }
}
