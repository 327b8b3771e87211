//! Edit-distance ranking and result truncation

use strsim::levenshtein;

use crate::query::SignatureQuery;
use crate::schema::{FunctionRecord, RankedResult};

/// Emission cutoff applied to a ranked list
///
/// Entries are emitted in order; after emitting index `i` the walk stops if
/// `i > min_index` and the entry's distance is `> max_distance`. The entry
/// that triggers the stop is itself emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationPolicy {
    pub min_index: usize,
    pub max_distance: usize,
}

impl Default for TruncationPolicy {
    fn default() -> Self {
        Self {
            min_index: 10,
            max_distance: 30,
        }
    }
}

impl TruncationPolicy {
    /// A policy that never stops early
    pub fn unbounded() -> Self {
        Self {
            min_index: usize::MAX,
            max_distance: usize::MAX,
        }
    }

    /// Apply the cutoff, returning the emitted prefix
    pub fn apply(&self, mut ranked: Vec<RankedResult>) -> Vec<RankedResult> {
        let cut = ranked
            .iter()
            .enumerate()
            .position(|(i, r)| i > self.min_index && r.distance > self.max_distance);

        if let Some(stop) = cut {
            ranked.truncate(stop + 1);
        }
        ranked
    }
}

/// Levenshtein distance between a query string and a candidate signature
pub fn distance(query: &str, signature: &str) -> usize {
    levenshtein(query, signature)
}

/// Score every record against the query and stably sort by ascending distance
///
/// The record's canonical signature is compared with the query's canonical
/// rendering. Ties keep their input order.
pub fn rank(records: Vec<FunctionRecord>, query: &SignatureQuery) -> Vec<RankedResult> {
    let target = query.canonical();
    rank_against(records, &target)
}

/// Same as [`rank`] but against an arbitrary comparison string
pub fn rank_against(records: Vec<FunctionRecord>, target: &str) -> Vec<RankedResult> {
    let mut ranked: Vec<RankedResult> = records
        .into_iter()
        .map(|record| {
            let distance = distance(target, &record.signature());
            RankedResult { record, distance }
        })
        .collect();

    // sort_by_key is stable
    ranked.sort_by_key(|r| r.distance);
    ranked
}
