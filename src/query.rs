//! Query pattern parsing
//!
//! A pattern looks like `(T1, T2) -> (R1, R2)`. Parentheses are stripped, the
//! rest is split on the literal ` -> ` separator and each side on `,`.

use crate::error::{Result, SigSearchError};
use crate::signature::canonical_form;

const ARROW: &str = " -> ";

/// A parsed user pattern
///
/// A side written as `()` parses to a single empty token, not to an empty list.
/// The containment filter therefore requires at least one actual token on that
/// side (the empty token itself matches anything).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureQuery {
    raw: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl SignatureQuery {
    /// Parse a pattern, failing with `InvalidQuery` unless it has exactly one arrow
    pub fn parse(pattern: &str) -> Result<Self> {
        // Parens become spaces so `(a) -> (b)` keeps its space-delimited arrow
        let stripped: String = pattern
            .chars()
            .map(|c| if c == '(' || c == ')' { ' ' } else { c })
            .collect();

        let segments: Vec<&str> = stripped.split(ARROW).collect();
        let [inputs, outputs] = segments.as_slice() else {
            return Err(SigSearchError::InvalidQuery {
                pattern: pattern.to_string(),
            });
        };

        Ok(Self {
            raw: pattern.to_string(),
            inputs: split_tokens(inputs),
            outputs: split_tokens(outputs),
        })
    }

    /// The pattern as the user wrote it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Canonical rendering of the query, comparable with record signatures
    ///
    /// Empty tokens are dropped, so `() -> (bool)` renders as `( ) -> ( bool )`.
    pub fn canonical(&self) -> String {
        let inputs = non_empty(&self.inputs);
        let outputs = non_empty(&self.outputs);
        canonical_form(&inputs, &outputs)
    }
}

fn split_tokens(segment: &str) -> Vec<String> {
    segment.split(',').map(|t| t.trim().to_string()).collect()
}

fn non_empty(tokens: &[String]) -> Vec<&str> {
    tokens
        .iter()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .collect()
}
