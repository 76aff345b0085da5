use crate::domain::model::{Client, NeedCount, ShareEntry, StatsBundle, TierSummary};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Priority bucket derived from the match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    High,
    Medium,
    Other,
}

impl Tier {
    pub const HIGH_MIN: u8 = 90;
    pub const MEDIUM_MIN: u8 = 80;

    pub fn of(score: u8) -> Tier {
        if score >= Self::HIGH_MIN {
            Tier::High
        } else if score >= Self::MEDIUM_MIN {
            Tier::Medium
        } else {
            Tier::Other
        }
    }
}

/// Headline counters: total, per-tier counts, distinct source channels.
pub fn tier_summary(clients: &[Client]) -> TierSummary {
    let mut high_priority = 0;
    let mut medium_priority = 0;
    for client in clients {
        match Tier::of(client.score) {
            Tier::High => high_priority += 1,
            Tier::Medium => medium_priority += 1,
            Tier::Other => {}
        }
    }

    let sources: HashSet<&str> = clients.iter().map(|c| c.source.as_str()).collect();

    TierSummary {
        total: clients.len(),
        high_priority,
        medium_priority,
        source_count: sources.len(),
    }
}

/// Per-industry counts and shares, labels in first-seen order.
pub fn industry_distribution(clients: &[Client]) -> Vec<ShareEntry> {
    label_shares(clients.iter().map(|c| c.industry.as_str()), clients.len())
}

/// Per-source counts and shares, labels in first-seen order.
pub fn source_effectiveness(clients: &[Client]) -> Vec<ShareEntry> {
    label_shares(clients.iter().map(|c| c.source.as_str()), clients.len())
}

/// How many clients name each distinct need. Needs are collected in
/// first-seen order across clients in list order; a need repeated inside
/// one client's list still counts that client once.
pub fn need_frequency(clients: &[Client]) -> Vec<NeedCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for client in clients {
        let mut counted: HashSet<&str> = HashSet::new();
        for need in &client.needs {
            if counted.insert(need.as_str()) {
                *counts.entry(need.as_str()).or_insert(0) += 1;
            }
        }
    }

    counts
        .into_iter()
        .map(|(need, count)| NeedCount {
            need: need.to_string(),
            count,
        })
        .collect()
}

/// All four aggregates over the full (unfiltered) list. The current
/// query/industry selection never feeds into these.
pub fn aggregate(clients: &[Client]) -> StatsBundle {
    StatsBundle {
        tiers: tier_summary(clients),
        industries: industry_distribution(clients),
        sources: source_effectiveness(clients),
        needs: need_frequency(clients),
    }
}

fn label_shares<'a>(labels: impl Iterator<Item = &'a str>, total: usize) -> Vec<ShareEntry> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(label, count)| ShareEntry {
            label: label.to_string(),
            count,
            percentage: share(count, total),
        })
        .collect()
}

// Division-by-zero guard: an empty store reports 0%, not an error.
fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}
