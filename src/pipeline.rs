//! Search orchestration
//!
//! files -> function records -> (optional includes filter) -> ranked, truncated
//! results. Every stage is a pure transformation over the previous one.

use std::path::Path;

use tracing::info;

use crate::detectors::CapabilityRegistry;
use crate::error::Result;
use crate::indexing::{collect_files, extract_files, FileFailure, ProgressCallback, WalkOptions};
use crate::matching::{IncludesFilter, MatchMode};
use crate::query::SignatureQuery;
use crate::ranking::{rank, TruncationPolicy};
use crate::schema::{FunctionRecord, RankedResult};

/// Library-level search configuration
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub mode: MatchMode,
    pub truncation: TruncationPolicy,
    /// Worker threads for extraction (0 = one per CPU)
    pub jobs: usize,
    pub walk: WalkOptions,
}

/// Outcome of a directory search
#[derive(Debug)]
pub struct SearchReport {
    /// Emitted results, in emission order
    pub results: Vec<RankedResult>,
    pub files_scanned: usize,
    pub functions_extracted: usize,
    pub failures: Vec<FileFailure>,
}

/// Filter, rank and truncate already-extracted records
pub fn search_records(
    records: Vec<FunctionRecord>,
    query: &SignatureQuery,
    mode: MatchMode,
    truncation: TruncationPolicy,
) -> Vec<RankedResult> {
    let candidates = match mode {
        MatchMode::Includes => IncludesFilter::for_query(query).filter(records),
        MatchMode::Default => records,
    };

    truncation.apply(rank(candidates, query))
}

/// Search every supported file under `root` for functions resembling `pattern`.
///
/// The pattern is parsed before any file is touched, so an invalid query fails
/// without partial results.
pub fn search(
    pattern: &str,
    root: &Path,
    options: &SearchOptions,
    registry: &CapabilityRegistry,
    progress: Option<&ProgressCallback<'_>>,
) -> Result<SearchReport> {
    let query = SignatureQuery::parse(pattern)?;

    let files = collect_files(root, &options.walk)?;
    let outcome = extract_files(&files, registry, options.jobs, progress)?;
    let functions_extracted = outcome.records.len();

    let results = search_records(outcome.records, &query, options.mode, options.truncation);

    info!(
        files = outcome.files_processed,
        functions = functions_extracted,
        failures = outcome.failures.len(),
        emitted = results.len(),
        "search complete"
    );

    Ok(SearchReport {
        results,
        files_scanned: outcome.files_processed,
        functions_extracted,
        failures: outcome.failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Location;

    fn record(name: &str, args: &[&str], rets: &[&str]) -> FunctionRecord {
        FunctionRecord {
            path: "drive.go".to_string(),
            location: Location::default(),
            name: name.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            rets: rets.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn names(results: &[RankedResult]) -> Vec<&str> {
        results.iter().map(|r| r.record.name.as_str()).collect()
    }

    #[test]
    fn test_includes_mode_filters_before_ranking() {
        let q = SignatureQuery::parse("(Path) -> (Path)").unwrap();
        let records = vec![
            record("Resolve", &["Path"], &["*DrivePath", "error"]),
            record("Open", &["string"], &["*File", "error"]),
        ];

        let results = search_records(records, &q, MatchMode::Includes, TruncationPolicy::default());
        assert_eq!(names(&results), vec!["Resolve"]);
    }

    #[test]
    fn test_default_mode_ranks_everything() {
        let q = SignatureQuery::parse("(Path) -> (Path)").unwrap();
        let records = vec![
            record("Open", &["string"], &["*File", "error"]),
            record("Same", &["Path"], &["Path"]),
        ];

        let results = search_records(records, &q, MatchMode::Default, TruncationPolicy::default());
        assert_eq!(names(&results), vec!["Same", "Open"]);
        assert_eq!(results[0].distance, 0);
    }

    #[test]
    fn test_search_reports_progress_to_a_borrowing_callback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.go"), "package p\nfunc A(x int) bool { return true }\n").unwrap();
        std::fs::write(dir.path().join("b.go"), "package p\nfunc B() {}\n").unwrap();

        let seen = std::sync::Mutex::new(Vec::new());
        let on_file = |path: &Path| {
            if let Ok(mut seen) = seen.lock() {
                seen.push(path.to_path_buf());
            }
        };

        let registry = CapabilityRegistry::with_defaults().unwrap();
        let report = search(
            "(int) -> (bool)",
            dir.path(),
            &SearchOptions::default(),
            &registry,
            Some(&on_file),
        )
        .unwrap();

        assert_eq!(report.files_scanned, 2);
        assert_eq!(report.results[0].record.name, "A");
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_pattern_fails_before_walking() {
        let registry = CapabilityRegistry::new();
        let err = search(
            "(int) (bool)",
            Path::new("/definitely/not/here"),
            &SearchOptions::default(),
            &registry,
            None,
        );
        assert!(matches!(err, Err(crate::SigSearchError::InvalidQuery { .. })));
    }
}
