use crate::utils::error::FinderError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A prospective client. Immutable for the session once the store is built.
///
/// `score` is a trusted match percentage in [0, 100]; the store does not
/// enforce the range. `needs` keeps insertion order and is never deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub company: String,
    pub industry: String,
    pub needs: Vec<String>,
    pub score: u8,
    pub contact: String,
    pub source: String,
    /// When a discovered lead was fabricated; absent on seed records.
    #[serde(rename = "foundAt", default, skip_serializing_if = "Option::is_none")]
    pub found_at: Option<DateTime<Utc>>,
}

/// Headline counters shown at the top of every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSummary {
    pub total: usize,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub source_count: usize,
}

/// One label's slice of the store (industry distribution, source effectiveness).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareEntry {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

/// How many clients name a given need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedCount {
    pub need: String,
    pub count: usize,
}

/// The full aggregate bundle, always computed over the unfiltered store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsBundle {
    pub tiers: TierSummary,
    pub industries: Vec<ShareEntry>,
    pub sources: Vec<ShareEntry>,
    pub needs: Vec<NeedCount>,
}

/// Everything the transform phase hands to the load phase: the matched
/// clients, the aggregates, and the already-rendered report artifacts.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub matched: Vec<Client>,
    pub stats: StatsBundle,
    pub text_view: String,
    pub report_json: String,
    pub matched_csv: String,
}

/// File formats the load phase can write next to the stdout view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Json,
    Csv,
}

impl ReportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportFormat::Json => "report.json",
            ReportFormat::Csv => "clients.csv",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(FinderError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Supported formats: json, csv".to_string(),
            }),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_json_shape_matches_original_payload() {
        let json = r#"{
            "id": "1",
            "name": "Алексей Иванов",
            "company": "ТехноСтарт",
            "industry": "IT-стартапы",
            "needs": ["Автоматизация продаж", "CRM-система"],
            "score": 95,
            "contact": "a.ivanov@techstart.ru",
            "source": "LinkedIn"
        }"#;

        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.id, "1");
        assert_eq!(client.needs.len(), 2);
        assert!(client.found_at.is_none());

        // foundAt must not appear for seed records when serializing back.
        let out = serde_json::to_string(&client).unwrap();
        assert!(!out.contains("foundAt"));
    }

    #[test]
    fn report_format_parsing() {
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!(" CSV ".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
