use crate::app::{discovery, report};
use crate::config::DiscoverySettings;
use crate::core::filter::{self, IndustrySelector};
use crate::core::stats;
use crate::domain::model::{Client, SearchOutcome};
use crate::domain::ports::{Pipeline, Storage};
use crate::utils::error::Result;

/// Discovery pipeline: fabricates a batch of fresh leads instead of reading
/// a store, then runs the same narrowing and reporting as a browse.
pub struct DiscoveryPipeline<S: Storage> {
    pub(crate) storage: S,
    pub(crate) settings: DiscoverySettings,
}

impl<S: Storage> DiscoveryPipeline<S> {
    pub fn new(storage: S, settings: DiscoverySettings) -> Self {
        Self { storage, settings }
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for DiscoveryPipeline<S> {
    async fn extract(&self) -> Result<Vec<Client>> {
        let mut rng = discovery::batch_rng(self.settings.rng_seed);
        let batch = discovery::generate(&mut rng, self.settings.count, self.settings.min_score);

        tracing::info!("🔍 Discovered {} candidate lead(s)", batch.len());
        Ok(batch)
    }

    async fn transform(&self, clients: Vec<Client>) -> Result<SearchOutcome> {
        let stats = stats::aggregate(&clients);

        let selector = IndustrySelector::parse(&self.settings.industry);
        let matched = filter::filter_clients(&clients, &self.settings.query, &selector);
        let mut matched = filter::apply_min_score(matched, Some(self.settings.min_score));

        // Fresh leads are presented best-first; browse results keep store order.
        filter::rank_by_score(&mut matched);

        tracing::info!(
            "✅ {} of {} lead(s) kept after narrowing",
            matched.len(),
            clients.len()
        );

        report::build_outcome(
            matched,
            stats,
            &self.settings.query,
            &self.settings.industry,
            Some(self.settings.min_score),
        )
    }

    async fn load(&self, outcome: SearchOutcome) -> Result<String> {
        super::deliver(
            &self.storage,
            self.settings.output_path.as_deref(),
            &self.settings.formats,
            &outcome,
        )
        .await
    }
}
