//! Matching modes and the "includes" containment filter
//!
//! The containment filter approximates type compatibility: every requested
//! token on a side must appear (as literal text, unanchored) inside at least
//! one actual token on the same side. Order and multiplicity are ignored, and
//! repeated query variables are not required to bind to the same type.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::query::SignatureQuery;
use crate::schema::FunctionRecord;

/// Characters escaped in requested tokens before pattern compilation
const METACHARACTERS: [char; 8] = ['[', ']', '*', '.', '{', '}', '(', ')'];

/// Matching algorithm selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Rank every extracted function
    #[default]
    Default,
    /// Keep only functions whose sides contain every requested type
    Includes,
}

impl MatchMode {
    /// Resolve a mode by name; anything unrecognized is `Default`
    pub fn from_name(name: &str) -> Self {
        match name {
            "includes" => Self::Includes,
            _ => Self::Default,
        }
    }
}

/// Compiled containment filter for one query
#[derive(Debug)]
pub struct IncludesFilter {
    inputs: Vec<TokenPattern>,
    outputs: Vec<TokenPattern>,
}

impl IncludesFilter {
    pub fn new(inputs: &[String], outputs: &[String]) -> Self {
        Self {
            inputs: inputs.iter().map(|t| TokenPattern::compile(t)).collect(),
            outputs: outputs.iter().map(|t| TokenPattern::compile(t)).collect(),
        }
    }

    pub fn for_query(query: &SignatureQuery) -> Self {
        Self::new(&query.inputs, &query.outputs)
    }

    /// Whether the record satisfies both sides of the query
    pub fn matches(&self, record: &FunctionRecord) -> bool {
        // Cardinality pre-check, not structural
        if record.args.len() < self.inputs.len() || record.rets.len() < self.outputs.len() {
            return false;
        }

        side_satisfied(&self.inputs, &record.args) && side_satisfied(&self.outputs, &record.rets)
    }

    /// Keep matching records, preserving their order
    pub fn filter(&self, records: Vec<FunctionRecord>) -> Vec<FunctionRecord> {
        let before = records.len();
        let kept: Vec<FunctionRecord> = records.into_iter().filter(|r| self.matches(r)).collect();
        debug!(before, after = kept.len(), "includes filter applied");
        kept
    }
}

/// One-shot form of [`IncludesFilter::matches`]
pub fn matches(record: &FunctionRecord, inputs: &[String], outputs: &[String]) -> bool {
    IncludesFilter::new(inputs, outputs).matches(record)
}

fn side_satisfied(requested: &[TokenPattern], actual: &[String]) -> bool {
    requested
        .iter()
        .all(|pattern| actual.iter().any(|token| pattern.is_match(token)))
}

/// A requested type token ready for unanchored matching
#[derive(Debug)]
enum TokenPattern {
    Pattern(Regex),
    /// Token that does not compile even after escaping (e.g. a stray `\`)
    Literal(String),
}

impl TokenPattern {
    /// Escape the metacharacter set, then compile as an unanchored pattern
    fn compile(token: &str) -> Self {
        let mut escaped = String::with_capacity(token.len() * 2);
        for c in token.chars() {
            if METACHARACTERS.contains(&c) {
                escaped.push('\\');
            }
            escaped.push(c);
        }

        match Regex::new(&escaped) {
            Ok(re) => Self::Pattern(re),
            Err(_) => Self::Literal(token.to_string()),
        }
    }

    fn is_match(&self, actual: &str) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(actual),
            Self::Literal(text) => actual.contains(text.as_str()),
        }
    }
}
