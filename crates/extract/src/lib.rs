//! Revised-document extraction.
//!
//! The revised side arrives as real-world email HTML. [`html_to_text`] is a
//! forgiving tag stripper, not a parser: it tolerates unclosed and unknown
//! tags, drops `<script>`/`<style>` subtrees, turns block boundaries into
//! line breaks, and decodes the common entities. [`extract_between_markers`]
//! then cuts out the window between two caller-supplied marker strings.

mod html;
mod markers;

pub use html::html_to_text;
pub use markers::extract_between_markers;
