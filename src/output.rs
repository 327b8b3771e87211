//! Result rendering for the text and JSON formats

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{Result, SigSearchError};
use crate::schema::RankedResult;

/// Render emitted results; text output has no trailing newline
pub fn format_results(results: &[RankedResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(results
            .iter()
            .map(|r| r.record.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => to_json(results),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| SigSearchError::Serialization {
        message: e.to_string(),
    })
}
