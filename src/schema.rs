//! Data records flowing through the search pipeline

use serde::Serialize;

/// Zero-indexed start position of a declaration, for display only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

/// One extracted function
///
/// `args` and `rets` hold the raw text of each declared parameter/return type
/// node in declaration order. Composite types (`*T`, `[]T`, ...) are single
/// opaque tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    pub path: String,
    #[serde(flatten)]
    pub location: Location,
    pub name: String,
    pub args: Vec<String>,
    pub rets: Vec<String>,
}

impl FunctionRecord {
    /// Canonical comparison string, see [`crate::signature::canonicalize`]
    pub fn signature(&self) -> String {
        crate::signature::canonicalize(self)
    }
}

/// A function record paired with its edit distance from the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub record: FunctionRecord,
    pub distance: usize,
}
