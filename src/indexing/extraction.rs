//! Parallel extraction over discovered files
//!
//! Files are independent, so each one is read and extracted as its own task on
//! a bounded rayon pool. Results are collected in discovery order, which keeps
//! the tie order of ranking identical to a sequential run.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::detectors::CapabilityRegistry;
use crate::error::{Result, SigSearchError};
use crate::indexing::files::SourceFile;
use crate::schema::FunctionRecord;

/// Called once per processed file, from worker threads
pub type ProgressCallback<'a> = dyn Fn(&Path) + Sync + 'a;

/// A file that contributed no records because extraction failed
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: SigSearchError,
}

/// Aggregated result of extracting a batch of files
#[derive(Debug, Default)]
pub struct ExtractionOutcome {
    pub records: Vec<FunctionRecord>,
    pub failures: Vec<FileFailure>,
    pub files_processed: usize,
}

/// Read and extract a single file
pub fn extract_file(file: &SourceFile, registry: &CapabilityRegistry) -> Result<Vec<FunctionRecord>> {
    let capability = registry.get(file.lang)?;
    let source = fs::read(&file.path)?;
    let records = capability.extract(&file.path.display().to_string(), &source)?;
    debug!(path = %file.path.display(), functions = records.len(), "extracted");
    Ok(records)
}

/// Extract every file on a pool of `jobs` workers (0 = one per CPU).
///
/// Per-file failures are collected, not propagated; only failing to start the
/// pool is an error.
pub fn extract_files(
    files: &[SourceFile],
    registry: &CapabilityRegistry,
    jobs: usize,
    progress: Option<&ProgressCallback<'_>>,
) -> Result<ExtractionOutcome> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| SigSearchError::WorkerPool {
            message: e.to_string(),
        })?;

    let results: Vec<Result<Vec<FunctionRecord>>> = pool.install(|| {
        files
            .par_iter()
            .map(|file| {
                let result = extract_file(file, registry);
                if let Some(callback) = progress {
                    callback(&file.path);
                }
                result
            })
            .collect()
    });

    let mut outcome = ExtractionOutcome {
        files_processed: files.len(),
        ..Default::default()
    };

    for (file, result) in files.iter().zip(results) {
        match result {
            Ok(records) => outcome.records.extend(records),
            Err(error) => {
                warn!(path = %file.path.display(), error = %error, "skipping file");
                outcome.failures.push(FileFailure {
                    path: file.path.clone(),
                    error,
                });
            }
        }
    }

    Ok(outcome)
}
