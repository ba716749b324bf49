/// Tags whose open or close implies a line boundary in the text rendering.
fn is_block_tag(name: &str) -> bool {
    matches!(
        name,
        "p" | "div"
            | "br"
            | "li"
            | "ul"
            | "ol"
            | "tr"
            | "table"
            | "blockquote"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "section"
            | "article"
            | "header"
            | "footer"
            | "hr"
    )
}

/// Strip markup from real-world HTML and return plain text.
///
/// Single forward pass over the characters. Inline tags vanish, block tags
/// emit a newline, `<script>`/`<style>` bodies and comments are dropped
/// whole, entities are decoded, and nothing is ever wrapped. As a final
/// step the literal characters `|`, `~` and `-` are removed: the markers
/// and clause text never carry them, and stray table borders or signature
/// rules in email HTML otherwise leak into the clause text.
pub fn html_to_text(html: &str) -> String {
    let chars: Vec<char> = html.chars().collect();
    let mut out = String::with_capacity(html.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '<' => {
                if chars[i + 1..].starts_with(&['!', '-', '-']) {
                    i = match find_seq(&chars, i + 4, &['-', '-', '>']) {
                        Some(p) => p + 3,
                        None => chars.len(),
                    };
                    continue;
                }
                let Some(close) = position_from(&chars, i + 1, '>') else {
                    // Dangling '<': keep the rest verbatim.
                    out.extend(&chars[i..]);
                    break;
                };
                let tag: String = chars[i + 1..close].iter().collect();
                let name = tag_name(&tag);
                let is_closing = tag.trim_start().starts_with('/');
                let self_closing = tag.trim_end().ends_with('/');
                if !is_closing && !self_closing && (name == "script" || name == "style") {
                    i = match find_close_tag(&chars, close + 1, &name) {
                        Some(after) => after,
                        None => chars.len(),
                    };
                    continue;
                }
                if is_block_tag(&name) && !out.ends_with('\n') {
                    out.push('\n');
                }
                i = close + 1;
            }
            '&' => match decode_entity(&chars[i..]) {
                Some((decoded, consumed)) => {
                    out.push(decoded);
                    i += consumed;
                }
                None => {
                    out.push('&');
                    i += 1;
                }
            },
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out.retain(|c| !matches!(c, '|' | '~' | '-'));
    out
}

fn tag_name(tag: &str) -> String {
    tag.trim_start()
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn position_from(chars: &[char], from: usize, needle: char) -> Option<usize> {
    (from..chars.len()).find(|&p| chars[p] == needle)
}

fn find_seq(chars: &[char], from: usize, needle: &[char]) -> Option<usize> {
    if chars.len() < needle.len() {
        return None;
    }
    (from..=chars.len() - needle.len()).find(|&p| &chars[p..p + needle.len()] == needle)
}

/// Find `</name ... >` case-insensitively; returns the index just past its
/// closing `>`.
fn find_close_tag(chars: &[char], from: usize, name: &str) -> Option<usize> {
    let name_chars: Vec<char> = name.chars().collect();
    let mut i = from;
    while i + 1 < chars.len() {
        if chars[i] == '<' && chars[i + 1] == '/' {
            let start = i + 2;
            let matches_name = name_chars.iter().enumerate().all(|(k, &nc)| {
                chars
                    .get(start + k)
                    .map(|c| c.to_ascii_lowercase() == nc)
                    .unwrap_or(false)
            });
            if matches_name {
                return match position_from(chars, start + name_chars.len(), '>') {
                    Some(p) => Some(p + 1),
                    None => Some(chars.len()),
                };
            }
        }
        i += 1;
    }
    None
}

/// Decode one entity starting at `chars[0] == '&'`. Returns the character
/// and how many input chars it consumed, or `None` to emit the `&` as-is.
fn decode_entity(chars: &[char]) -> Option<(char, usize)> {
    let mut end = None;
    for (k, &c) in chars.iter().enumerate().take(10).skip(1) {
        if c == ';' {
            end = Some(k);
            break;
        }
        if c == '&' || c == '<' || c.is_whitespace() {
            break;
        }
    }
    let end = end?;
    let name: String = chars[1..end].iter().collect();
    let decoded = match name.as_str() {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse().ok()?
            } else {
                return None;
            };
            // 160 is nbsp; treat it as a plain space like the named form.
            if code == 160 {
                ' '
            } else {
                char::from_u32(code)?
            }
        }
    };
    Some((decoded, end + 1))
}
