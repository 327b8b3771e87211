//! sigsearch: find functions by type signature
//!
//! This library extracts function signatures from source files with
//! tree-sitter queries, canonicalizes them, and ranks them against a user
//! pattern such as `(int, string) -> (bool, error)` by edit distance, with an
//! optional structural "includes" pre-filter.
//!
//! # Supported Languages
//!
//! - Go (functions and methods)
//! - Rust
//! - Python (annotated parameters and returns)
//! - TypeScript, TSX
//! - Java
//!
//! # Example
//!
//! ```ignore
//! use sigsearch::{search_records, CapabilityRegistry, Lang, MatchMode, SignatureQuery, TruncationPolicy};
//!
//! let registry = CapabilityRegistry::with_defaults()?;
//! let records = registry.extract(Lang::Go, "foo.go", b"package p\nfunc Foo(a int) error { return nil }\n")?;
//!
//! let query = SignatureQuery::parse("(int) -> (error)")?;
//! for result in search_records(records, &query, MatchMode::Default, TruncationPolicy::default()) {
//!     println!("{}", result.record);
//! }
//! ```

pub mod cli;
pub mod detectors;
pub mod error;
pub mod indexing;
pub mod lang;
pub mod matching;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod ranking;
pub mod schema;
pub mod signature;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use detectors::{CapabilityRegistry, ExtractionCapability, QueryCapability};
pub use error::{Result, SigSearchError};
pub use lang::Lang;
pub use matching::{IncludesFilter, MatchMode};
pub use output::format_results;
pub use pipeline::{search, search_records, SearchOptions, SearchReport};
pub use query::SignatureQuery;
pub use ranking::{rank, TruncationPolicy};
pub use schema::{FunctionRecord, Location, RankedResult};
pub use signature::canonicalize;
