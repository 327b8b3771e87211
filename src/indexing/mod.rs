//! File discovery and parallel extraction
//!
//! # Key Features
//!
//! - **Deterministic discovery**: lexical walk honoring ignore files
//! - **Parallel Processing**: bounded Rayon pool, results kept in discovery order
//! - **Error Handling**: per-file failures are collected without stopping the run
//!
//! # Example
//!
//! ```ignore
//! use sigsearch::indexing::{collect_files, extract_files, WalkOptions};
//! use sigsearch::CapabilityRegistry;
//!
//! let registry = CapabilityRegistry::with_defaults()?;
//! let files = collect_files(&repo_dir, &WalkOptions::default())?;
//! let outcome = extract_files(&files, &registry, 0, None)?;
//!
//! println!("{} functions, {} failures", outcome.records.len(), outcome.failures.len());
//! ```

mod extraction;
mod files;

pub use extraction::{extract_file, extract_files, ExtractionOutcome, FileFailure, ProgressCallback};
pub use files::{collect_files, SourceFile, WalkOptions};
