use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::whitespace::collapse_whitespace;

/// A clause-head line: `C<number>`, an optional trailing dot, then at least
/// one whitespace character before the remainder. Anchored after the per-line
/// trim. `C1a` and `C1.1` are continuations, not heads.
static CLAUSE_HEAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(c\d+)\.?\s+(.*)$").expect("clause head pattern"));

/// One segmented clause.
///
/// `raw_text` is the clause exactly as accumulated from its source lines
/// (head rewritten to the canonical `C<N>. ` form, continuations
/// space-joined). `normalized_text` additionally collapses whitespace runs
/// and is what alignment, diffing and rendering operate on. Clauses are
/// immutable once segmentation is done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub index: usize,
    pub raw_text: String,
    pub normalized_text: String,
}

/// Split `text` into its numbered clauses.
///
/// Head lines are re-emitted as `"C<N>. <rest>"` with the head uppercased and
/// exactly one dot, regardless of how the source wrote them. Lines before the
/// first head carry no clause and are dropped; with no head anywhere the
/// result is empty, never a catch-all clause.
pub fn segment(text: &str) -> Vec<Clause> {
    let mut clauses: Vec<Clause> = Vec::new();
    let mut current: Option<String> = None;

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(caps) = CLAUSE_HEAD.captures(line) {
            if let Some(done) = current.take() {
                push_clause(&mut clauses, done);
            }
            let head = caps[1].to_uppercase();
            let rest = &caps[2];
            current = Some(format!("{head}. {rest}"));
        } else if let Some(acc) = current.as_mut() {
            acc.push(' ');
            acc.push_str(line);
        }
    }

    if let Some(done) = current {
        push_clause(&mut clauses, done);
    }
    clauses
}

fn push_clause(clauses: &mut Vec<Clause>, text: String) {
    let normalized = collapse_whitespace(&text);
    clauses.push(Clause {
        index: clauses.len(),
        raw_text: text,
        normalized_text: normalized,
    });
}
