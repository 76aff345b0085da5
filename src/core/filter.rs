use crate::domain::model::Client;
use std::fmt;

/// Sentinel value that disables industry narrowing.
pub const ALL_INDUSTRIES: &str = "all";

/// Parsed industry selector: everything, or one exact label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndustrySelector {
    All,
    Only(String),
}

impl IndustrySelector {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_INDUSTRIES {
            IndustrySelector::All
        } else {
            IndustrySelector::Only(raw.to_string())
        }
    }

    /// Exact, case-sensitive label match. An unknown label simply matches
    /// nothing; that is not an error.
    pub fn admits(&self, industry: &str) -> bool {
        match self {
            IndustrySelector::All => true,
            IndustrySelector::Only(label) => industry == label,
        }
    }
}

impl fmt::Display for IndustrySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndustrySelector::All => write!(f, "{}", ALL_INDUSTRIES),
            IndustrySelector::Only(label) => write!(f, "{}", label),
        }
    }
}

/// Whether a single client passes the (query, industry) predicate.
///
/// The query matches case-insensitively as a substring of the name, the
/// company, or any need. No tokenization, no fuzzing, no ranking.
pub fn matches(client: &Client, query: &str, industry: &IndustrySelector) -> bool {
    industry.admits(&client.industry) && matches_query(client, &query.to_lowercase())
}

fn matches_query(client: &Client, needle: &str) -> bool {
    needle.is_empty()
        || client.name.to_lowercase().contains(needle)
        || client.company.to_lowercase().contains(needle)
        || client
            .needs
            .iter()
            .any(|need| need.to_lowercase().contains(needle))
}

/// Stable filter: the result is a subsequence of `clients` in original order.
/// An unmatched query yields an empty list, never an error.
pub fn filter_clients(clients: &[Client], query: &str, industry: &IndustrySelector) -> Vec<Client> {
    let needle = query.to_lowercase();
    clients
        .iter()
        .filter(|client| industry.admits(&client.industry) && matches_query(client, &needle))
        .cloned()
        .collect()
}

/// Drops clients below the threshold, preserving order. `None` is identity.
pub fn apply_min_score(mut clients: Vec<Client>, min_score: Option<u8>) -> Vec<Client> {
    if let Some(min) = min_score {
        clients.retain(|client| client.score >= min);
    }
    clients
}

/// Stable descending sort by score. Only the discovery surface ranks;
/// browse results always keep store order.
pub fn rank_by_score(clients: &mut [Client]) {
    clients.sort_by(|a, b| b.score.cmp(&a.score));
}
