use crate::html::html_to_text;

/// Convert `html` to text, then cut out the comparison window: everything
/// strictly between the first occurrence of `start` and the first
/// occurrence of `end` at or after it.
///
/// Degrades gracefully rather than failing:
/// - start found, end not found after it: from the start marker to the end
///   of the text;
/// - only the end marker found: from the beginning up to it;
/// - neither found: the whole text.
pub fn extract_between_markers(html: &str, start: &str, end: &str) -> String {
    let text = html_to_text(html);
    window(&text, start, end).to_string()
}

fn window<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    if let Some(s) = text.find(start) {
        let after = s + start.len();
        match text[after..].find(end) {
            Some(rel) => &text[after..after + rel],
            None => &text[after..],
        }
    } else if let Some(e) = text.find(end) {
        &text[..e]
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_between_both_markers() {
        assert_eq!(window("A INICIO B FIM C", "INICIO", "FIM"), " B ");
    }

    #[test]
    fn end_marker_before_start_is_ignored() {
        // The end marker is searched at or after the start marker, so an
        // earlier occurrence does not produce an inverted window.
        assert_eq!(window("FIM A INICIO B", "INICIO", "FIM"), " B");
    }

    #[test]
    fn start_only_runs_to_end_of_text() {
        assert_eq!(window("x INICIO tail", "INICIO", "FIM"), " tail");
    }

    #[test]
    fn end_only_runs_from_beginning() {
        assert_eq!(window("head FIM x", "INICIO", "FIM"), "head ");
    }

    #[test]
    fn neither_marker_keeps_everything() {
        assert_eq!(window("no markers here", "INICIO", "FIM"), "no markers here");
    }

    #[test]
    fn first_occurrences_win() {
        assert_eq!(window("INICIO a FIM INICIO b FIM", "INICIO", "FIM"), " a ");
    }

    #[test]
    fn markers_are_searched_in_stripped_text() {
        let html = "<p>START</p><p>C1. Clause body.</p><p>END</p>";
        assert_eq!(
            extract_between_markers(html, "START", "END"),
            "\nC1. Clause body.\n"
        );
    }
}
