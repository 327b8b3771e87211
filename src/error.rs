//! Error types for signature search

use std::process::ExitCode;
use thiserror::Error;

/// Errors produced by extraction, query parsing and the search pipeline
#[derive(Error, Debug)]
pub enum SigSearchError {
    /// No extraction capability is registered for the language tag
    #[error("language {tag} not supported")]
    UnsupportedLanguage { tag: String },

    /// The query pattern does not contain exactly one ` -> ` separator
    #[error("invalid query {pattern:?}: expected exactly one \" -> \" between inputs and outputs")]
    InvalidQuery { pattern: String },

    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// tree-sitter could not produce a tree
    #[error("parse failure: {message}")]
    ParseFailure { message: String },

    /// A grammar's signature queries failed to compile
    #[error("failed to compile {lang} query: {message}")]
    QueryCompile { lang: String, message: String },

    #[error("failed to start worker pool: {message}")]
    WorkerPool { message: String },

    #[error("JSON serialization failed: {message}")]
    Serialization { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SigSearchError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidQuery { .. } => ExitCode::from(2),
            Self::FileNotFound { .. } => ExitCode::from(3),
            _ => ExitCode::FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, SigSearchError>;
