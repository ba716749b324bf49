/// Marker appended to every source line before segmentation so that original
/// line boundaries survive whitespace collapsing. The renderer expands it
/// back into `<br>` as its very last step; nothing in between treats it as
/// whitespace.
pub const LINE_BREAK_SENTINEL: char = 'α';

/// Append [`LINE_BREAK_SENTINEL`] to every line of `text`, blank lines
/// included. Splits on `'\n'` so a trailing newline still contributes a
/// (sentinel-only) final line.
pub fn append_line_sentinels(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line);
        out.push(LINE_BREAK_SENTINEL);
    }
    out
}
