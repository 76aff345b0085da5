use crate::domain::model::{Client, SearchOutcome, StatsBundle};
use crate::utils::error::{FinderError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON envelope written as `report.json` for downstream tooling.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport<'a> {
    pub clients: &'a [Client],
    pub total: usize,
    pub query: &'a str,
    pub filters: FilterEcho<'a>,
    pub stats: &'a StatsBundle,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterEcho<'a> {
    pub industry: &'a str,
    pub min_score: Option<u8>,
}

/// Renders all artifacts once so every load target sees the same snapshot.
pub fn build_outcome(
    matched: Vec<Client>,
    stats: StatsBundle,
    query: &str,
    industry: &str,
    min_score: Option<u8>,
) -> Result<SearchOutcome> {
    let text_view = render_text(&matched, &stats, query, industry, min_score);
    let report_json = to_json(&matched, &stats, query, industry, min_score)?;
    let matched_csv = to_csv(&matched)?;

    Ok(SearchOutcome {
        matched,
        stats,
        text_view,
        report_json,
        matched_csv,
    })
}

pub fn to_json(
    matched: &[Client],
    stats: &StatsBundle,
    query: &str,
    industry: &str,
    min_score: Option<u8>,
) -> Result<String> {
    let report = SearchReport {
        clients: matched,
        total: matched.len(),
        query,
        filters: FilterEcho {
            industry,
            min_score,
        },
        stats,
        timestamp: Utc::now(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    company: &'a str,
    industry: &'a str,
    needs: String,
    score: u8,
    contact: &'a str,
    source: &'a str,
    found_at: String,
}

/// Flat CSV of the matched clients; needs are joined with `"; "`.
pub fn to_csv(matched: &[Client]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for client in matched {
        writer.serialize(CsvRow {
            id: &client.id,
            name: &client.name,
            company: &client.company,
            industry: &client.industry,
            needs: client.needs.join("; "),
            score: client.score,
            contact: &client.contact,
            source: &client.source,
            found_at: client
                .found_at
                .map(|at| at.to_rfc3339())
                .unwrap_or_default(),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FinderError::ProcessingError {
            message: format!("CSV buffer error: {e}"),
        })?;

    String::from_utf8(bytes).map_err(|e| FinderError::ProcessingError {
        message: format!("CSV produced non-UTF8 output: {e}"),
    })
}

/// Human view printed to stdout. Labels are English, data stays as stored.
pub fn render_text(
    matched: &[Client],
    stats: &StatsBundle,
    query: &str,
    industry: &str,
    min_score: Option<u8>,
) -> String {
    let mut out = String::new();

    out.push_str("=== Client Search ===\n");
    out.push_str(&format!(
        "query: \"{}\" | industry: {} | min score: {}\n",
        query,
        industry,
        min_score
            .map(|m| m.to_string())
            .unwrap_or_else(|| "none".to_string()),
    ));
    out.push_str(&format!(
        "matched {} of {} | high priority: {} | medium: {} | sources: {}\n\n",
        matched.len(),
        stats.tiers.total,
        stats.tiers.high_priority,
        stats.tiers.medium_priority,
        stats.tiers.source_count,
    ));

    if matched.is_empty() {
        out.push_str("(no matches)\n");
    } else {
        for client in matched {
            out.push_str(&format!(
                "[{:>3}] {} {} / {}\n",
                client.score,
                score_bar(client.score),
                client.name,
                client.company,
            ));
            out.push_str(&format!(
                "      industry: {} | source: {}\n",
                client.industry, client.source,
            ));
            out.push_str(&format!("      needs: {}\n", client.needs.join("; ")));
            out.push_str(&format!("      contact: {}\n\n", client.contact));
        }
    }

    if !stats.industries.is_empty() {
        out.push_str("Industry distribution:\n");
        for entry in &stats.industries {
            out.push_str(&format!(
                "  {:<28} {} ({:.1}%)\n",
                entry.label, entry.count, entry.percentage,
            ));
        }
        out.push('\n');
    }

    if !stats.sources.is_empty() {
        out.push_str("Source effectiveness:\n");
        for entry in &stats.sources {
            out.push_str(&format!(
                "  {:<28} {} lead(s)\n",
                entry.label, entry.count,
            ));
        }
        out.push('\n');
    }

    if !stats.needs.is_empty() {
        out.push_str("Top needs:\n");
        let mut ranked = stats.needs.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        for entry in ranked.iter().take(5) {
            out.push_str(&format!("  {:<28} {}\n", entry.need, entry.count));
        }
    }

    out
}

// 10-slot bar, one slot per 10 score points.
fn score_bar(score: u8) -> String {
    let filled = usize::from(score / 10).min(10);
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}
