//! HTML annotation rendering.
//!
//! One styled `<div>` row per occupied slot: matched pairs carry their
//! per-segment spans inline, deleted originals are plain red, inserted
//! revised clauses are red with strike-through. The styling strings are a
//! wire contract with downstream consumers that pattern-match on them, so
//! they are emitted verbatim; do not reformat. Clause text goes in as-is;
//! markup was already stripped by extraction, and escaping would mangle the
//! line-break sentinels.

use diffing::{DiffKind, DiffSegment};
use segment::LINE_BREAK_SENTINEL;

const ROW_STYLE: &str = "font-family:Courier; font-size:15px; white-space:pre-wrap;";
const DELETED_ROW_STYLE: &str = "font-family:Courier; font-size:15px; white-space:pre-wrap; color:red;";
const INSERTED_ROW_STYLE: &str =
    "font-family:Courier; font-size:15px; white-space:pre-wrap; color:red;text-decoration:line-through;";

/// Row for a matched pair: every diff segment becomes a span.
pub fn render_matched(segments: &[DiffSegment]) -> String {
    let mut body = String::new();
    for seg in segments {
        match seg.kind {
            DiffKind::Insert => {
                body.push_str("&nbsp<span style=\"color:red;text-decoration:line-through;\">");
                body.push_str(&seg.text);
                body.push_str("</span>");
            }
            DiffKind::Delete => {
                body.push_str("<span style=\"color:red;\">");
                body.push_str(&seg.text);
                body.push_str("</span>");
            }
            DiffKind::Equal => {
                body.push_str("<span>");
                body.push_str(&seg.text);
                body.push_str("</span>");
            }
        }
    }
    format!("<div style='{ROW_STYLE}'>{body}</div>")
}

/// Row for an original clause that found no counterpart.
pub fn render_deleted(text: &str) -> String {
    format!("<div style='{DELETED_ROW_STYLE}'>{text}</div>")
}

/// Row for a revised clause that found no counterpart.
pub fn render_inserted(text: &str) -> String {
    format!("<div style='{INSERTED_ROW_STYLE}'>{text}</div>")
}

/// Turn line-break sentinels back into `<br>`. Runs last, after all span
/// markup is in place.
pub fn expand_sentinels(html: &str) -> String {
    html.replace(LINE_BREAK_SENTINEL, "<br>")
}

/// Assemble the final document. Empty slots contribute nothing at all.
pub fn render_document(rows: &[Option<String>]) -> String {
    let mut out = String::from(
        "<html><body style='font-family:Courier; font-size:15px; white-space:pre-wrap;'>",
    );
    for row in rows.iter().flatten() {
        out.push_str(&expand_sentinels(row));
    }
    out.push_str("</body></html>");
    out
}
