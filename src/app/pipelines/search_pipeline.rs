use crate::app::report;
use crate::core::filter::{self, IndustrySelector};
use crate::core::stats;
use crate::domain::model::{Client, SearchOutcome};
use crate::domain::ports::{Pipeline, SearchConfig, Storage};
use crate::domain::store::ClientStore;
use crate::utils::error::Result;

/// Browse pipeline: loads the store, applies the query/industry/min-score
/// narrowing and delivers the report. Generic over the config source so the
/// same pipeline serves flags, settings files and tests.
pub struct SearchPipeline<S: Storage, C: SearchConfig> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: SearchConfig> SearchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: SearchConfig> Pipeline for SearchPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Client>> {
        let store = match self.config.store_path() {
            Some(path) => {
                tracing::debug!("Loading client store from: {}", path);
                let bytes = self.storage.read_file(path).await?;
                ClientStore::from_json(&bytes)?
            }
            None => ClientStore::builtin(),
        };

        let mut clients = store.into_clients();

        // Source restriction narrows the store itself: aggregates computed
        // later only see the enabled channels.
        if let Some(enabled) = self.config.enabled_sources() {
            clients.retain(|client| enabled.iter().any(|source| *source == client.source));
        }

        if clients.is_empty() {
            tracing::warn!("Client store is empty after source restriction");
        }

        tracing::info!("📊 Extracted {} client(s)", clients.len());
        Ok(clients)
    }

    async fn transform(&self, clients: Vec<Client>) -> Result<SearchOutcome> {
        let stats = stats::aggregate(&clients);

        let selector = IndustrySelector::parse(self.config.industry());
        let matched = filter::filter_clients(&clients, self.config.query(), &selector);
        let matched = filter::apply_min_score(matched, self.config.min_score());

        tracing::info!(
            "✅ {} of {} client(s) match the current filters",
            matched.len(),
            clients.len()
        );

        report::build_outcome(
            matched,
            stats,
            self.config.query(),
            self.config.industry(),
            self.config.min_score(),
        )
    }

    async fn load(&self, outcome: SearchOutcome) -> Result<String> {
        super::deliver(
            &self.storage,
            self.config.output_path(),
            self.config.formats(),
            &outcome,
        )
        .await
    }
}
