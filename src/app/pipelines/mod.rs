pub mod discovery_pipeline;
pub mod search_pipeline;

pub use discovery_pipeline::DiscoveryPipeline;
pub use search_pipeline::SearchPipeline;

use crate::domain::model::{ReportFormat, SearchOutcome};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Prints the text view, then writes one file per requested format when an
/// output directory is set. Returns where the results went.
pub(crate) async fn deliver<S: Storage>(
    storage: &S,
    output_path: Option<&str>,
    formats: &[ReportFormat],
    outcome: &SearchOutcome,
) -> Result<String> {
    println!("{}", outcome.text_view);

    let Some(dir) = output_path else {
        return Ok("stdout".to_string());
    };

    for format in formats {
        let artifact = match format {
            ReportFormat::Json => outcome.report_json.as_bytes(),
            ReportFormat::Csv => outcome.matched_csv.as_bytes(),
        };
        let path = format!("{}/{}", dir, format.file_name());
        storage.write_file(&path, artifact).await?;
        tracing::info!("📦 Wrote {}", path);
    }

    Ok(dir.to_string())
}
