//! Signature canonicalization and result line rendering

use std::fmt;

use crate::schema::FunctionRecord;

/// Render a record's argument/return tokens into the canonical comparison string
///
/// Format is `( a1, a2 ) -> ( r1, r2 )`. Empty lists render as `( )`. Tokens are
/// passed through verbatim.
pub fn canonicalize(record: &FunctionRecord) -> String {
    canonical_form(&record.args, &record.rets)
}

/// Canonical form for arbitrary input/output token lists
pub fn canonical_form<S: AsRef<str>>(args: &[S], rets: &[S]) -> String {
    format!("{} -> {}", render_side(args), render_side(rets))
}

fn render_side<S: AsRef<str>>(tokens: &[S]) -> String {
    if tokens.is_empty() {
        return "( )".to_string();
    }
    format!("( {} )", join(tokens))
}

fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}

/// `path:row:column:name (a1, a2) -> (r1, r2)`
impl fmt::Display for FunctionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{} ({}) -> ({})",
            self.path,
            self.location.row,
            self.location.column,
            self.name,
            join(&self.args),
            join(&self.rets),
        )
    }
}
