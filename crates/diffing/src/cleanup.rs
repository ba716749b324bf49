//! Post-passes that rewrite a minimal edit script into a readable one.

use crate::{common_prefix, common_suffix, DiffKind, DiffSegment};

/// Canonical form: no empty segments, adjacent segments differ in kind, and
/// within every insert/delete cluster the deletions come first. Common
/// prefixes and suffixes of a substitution migrate into the neighboring
/// equalities.
pub(crate) fn merge(segments: &mut Vec<DiffSegment>) {
    loop {
        coalesce_in_place(segments);
        if !normalize_clusters(segments) {
            break;
        }
    }
}

fn coalesce_in_place(segments: &mut Vec<DiffSegment>) {
    let mut out: Vec<DiffSegment> = Vec::with_capacity(segments.len());
    for seg in segments.drain(..) {
        if seg.text.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(last) if last.kind == seg.kind => last.text.push_str(&seg.text),
            _ => out.push(seg),
        }
    }
    *segments = out;
}

/// Rebuild every maximal non-equal run as `[Delete, Insert]`, sliding any
/// text common to both ends of the substitution out into the surrounding
/// equalities. Returns whether anything changed.
fn normalize_clusters(segments: &mut Vec<DiffSegment>) -> bool {
    let segs = std::mem::take(segments);
    let len = segs.len();
    let mut out: Vec<DiffSegment> = Vec::with_capacity(len);
    let mut changed = false;
    let mut i = 0;

    while i < len {
        if segs[i].kind == DiffKind::Equal {
            out.push(segs[i].clone());
            i += 1;
            continue;
        }

        let mut del = String::new();
        let mut ins = String::new();
        let mut del_count = 0usize;
        let mut ins_count = 0usize;
        let mut insert_seen_before_delete = false;
        let mut j = i;
        while j < len && segs[j].kind != DiffKind::Equal {
            match segs[j].kind {
                DiffKind::Delete => {
                    if ins_count > 0 {
                        insert_seen_before_delete = true;
                    }
                    del.push_str(&segs[j].text);
                    del_count += 1;
                }
                DiffKind::Insert => {
                    ins.push_str(&segs[j].text);
                    ins_count += 1;
                }
                DiffKind::Equal => {}
            }
            j += 1;
        }
        if del_count > 1 || ins_count > 1 || insert_seen_before_delete {
            changed = true;
        }

        let mut del_chars: Vec<char> = del.chars().collect();
        let mut ins_chars: Vec<char> = ins.chars().collect();
        let mut trailing_equal = String::new();
        if !del_chars.is_empty() && !ins_chars.is_empty() {
            let p = common_prefix(&del_chars, &ins_chars);
            if p > 0 {
                let prefix: String = del_chars[..p].iter().collect();
                match out.last_mut() {
                    Some(last) if last.kind == DiffKind::Equal => last.text.push_str(&prefix),
                    _ => out.push(DiffSegment::new(DiffKind::Equal, prefix)),
                }
                del_chars.drain(..p);
                ins_chars.drain(..p);
                changed = true;
            }
            let s = common_suffix(&del_chars, &ins_chars);
            if s > 0 {
                trailing_equal = del_chars[del_chars.len() - s..].iter().collect();
                del_chars.truncate(del_chars.len() - s);
                ins_chars.truncate(ins_chars.len() - s);
                changed = true;
            }
        }

        if !del_chars.is_empty() {
            out.push(DiffSegment::new(
                DiffKind::Delete,
                del_chars.iter().collect::<String>(),
            ));
        }
        if !ins_chars.is_empty() {
            out.push(DiffSegment::new(
                DiffKind::Insert,
                ins_chars.iter().collect::<String>(),
            ));
        }
        if !trailing_equal.is_empty() {
            if j < len {
                out.push(DiffSegment::new(
                    DiffKind::Equal,
                    format!("{trailing_equal}{}", segs[j].text),
                ));
                j += 1;
            } else {
                out.push(DiffSegment::new(DiffKind::Equal, trailing_equal));
            }
        }
        i = j;
    }

    *segments = out;
    changed
}

/// Fold equalities that are shorter than the edits on both of their sides
/// into one larger substitution, then slide the remaining single edits to
/// the nicest nearby boundary.
pub(crate) fn semantic(segments: &mut Vec<DiffSegment>) {
    let mut changes = false;
    // Indices of candidate equalities; `last_equality` mirrors the top.
    let mut equalities: Vec<isize> = Vec::new();
    let mut last_equality: Option<String> = None;
    let mut pointer: isize = 0;
    // Edit sizes before and after the candidate equality.
    let mut len_ins1 = 0usize;
    let mut len_del1 = 0usize;
    let mut len_ins2 = 0usize;
    let mut len_del2 = 0usize;

    while pointer >= 0 && (pointer as usize) < segments.len() {
        let p = pointer as usize;
        if segments[p].kind == DiffKind::Equal {
            equalities.push(pointer);
            len_ins1 = len_ins2;
            len_del1 = len_del2;
            len_ins2 = 0;
            len_del2 = 0;
            last_equality = Some(segments[p].text.clone());
        } else {
            let edit_len = segments[p].char_len();
            if segments[p].kind == DiffKind::Insert {
                len_ins2 += edit_len;
            } else {
                len_del2 += edit_len;
            }
            let fold = last_equality.as_ref().is_some_and(|eq| {
                let eq_len = eq.chars().count();
                eq_len <= len_ins1.max(len_del1) && eq_len <= len_ins2.max(len_del2)
            });
            if fold {
                if let (Some(eq_text), Some(&idx)) = (last_equality.take(), equalities.last()) {
                    let idx = idx as usize;
                    segments[idx] = DiffSegment::new(DiffKind::Delete, eq_text.clone());
                    segments.insert(idx + 1, DiffSegment::new(DiffKind::Insert, eq_text));
                    equalities.pop();
                    // The equality before that one needs re-evaluation too.
                    equalities.pop();
                    pointer = equalities.last().copied().unwrap_or(-1);
                    len_ins1 = 0;
                    len_del1 = 0;
                    len_ins2 = 0;
                    len_del2 = 0;
                    last_equality = None;
                    changes = true;
                }
            }
        }
        pointer += 1;
    }

    if changes {
        merge(segments);
    }
    semantic_lossless(segments);
}

/// Slide each single edit that sits between two equalities left and right,
/// keeping the position whose boundaries score best (word and sentence
/// breaks beat mid-word splits).
fn semantic_lossless(segments: &mut Vec<DiffSegment>) {
    let mut pointer: isize = 1;
    while pointer + 1 < segments.len() as isize {
        let p = pointer as usize;
        if segments[p - 1].kind == DiffKind::Equal
            && segments[p + 1].kind == DiffKind::Equal
            && segments[p].kind != DiffKind::Equal
        {
            let mut equality1: Vec<char> = segments[p - 1].text.chars().collect();
            let mut edit: Vec<char> = segments[p].text.chars().collect();
            let mut equality2: Vec<char> = segments[p + 1].text.chars().collect();

            // Shift the edit as far left as it will go.
            let shift = common_suffix(&equality1, &edit);
            if shift > 0 {
                let common: Vec<char> = edit[edit.len() - shift..].to_vec();
                equality1.truncate(equality1.len() - shift);
                let mut shifted = common.clone();
                shifted.extend_from_slice(&edit[..edit.len() - shift]);
                edit = shifted;
                let mut prefixed = common;
                prefixed.extend_from_slice(&equality2);
                equality2 = prefixed;
            }

            // Then walk right one character at a time, tracking the best
            // scoring split (ties go to the rightmost position).
            let mut best_equality1 = equality1.clone();
            let mut best_edit = edit.clone();
            let mut best_equality2 = equality2.clone();
            let mut best_score =
                boundary_score(&equality1, &edit) + boundary_score(&edit, &equality2);
            while !edit.is_empty() && !equality2.is_empty() && edit[0] == equality2[0] {
                equality1.push(edit[0]);
                edit.remove(0);
                edit.push(equality2[0]);
                equality2.remove(0);
                let score = boundary_score(&equality1, &edit) + boundary_score(&edit, &equality2);
                if score >= best_score {
                    best_score = score;
                    best_equality1 = equality1.clone();
                    best_edit = edit.clone();
                    best_equality2 = equality2.clone();
                }
            }

            let new_eq1: String = best_equality1.into_iter().collect();
            let new_edit: String = best_edit.into_iter().collect();
            let new_eq2: String = best_equality2.into_iter().collect();
            if segments[p - 1].text != new_eq1 {
                let mut p = p as isize;
                if new_eq1.is_empty() {
                    segments.remove((p - 1) as usize);
                    p -= 1;
                } else {
                    segments[(p - 1) as usize].text = new_eq1;
                }
                segments[p as usize].text = new_edit;
                if new_eq2.is_empty() {
                    segments.remove((p + 1) as usize);
                    p -= 1;
                } else {
                    segments[(p + 1) as usize].text = new_eq2;
                }
                pointer = p;
            }
        }
        pointer += 1;
    }
}

/// Score the split between two spans: 6 at either text edge, then blank
/// lines, line breaks, sentence ends, whitespace, punctuation, and finally 0
/// for a mid-word cut.
fn boundary_score(one: &[char], two: &[char]) -> i32 {
    if one.is_empty() || two.is_empty() {
        return 6;
    }
    let char1 = one[one.len() - 1];
    let char2 = two[0];
    let non_alnum1 = !char1.is_alphanumeric();
    let non_alnum2 = !char2.is_alphanumeric();
    let ws1 = non_alnum1 && char1.is_whitespace();
    let ws2 = non_alnum2 && char2.is_whitespace();
    let line_break1 = ws1 && (char1 == '\n' || char1 == '\r');
    let line_break2 = ws2 && (char2 == '\n' || char2 == '\r');
    let blank_line1 = line_break1 && ends_with_blank_line(one);
    let blank_line2 = line_break2 && starts_with_blank_line(two);

    if blank_line1 || blank_line2 {
        5
    } else if line_break1 || line_break2 {
        4
    } else if non_alnum1 && !ws1 && ws2 {
        // End of sentence.
        3
    } else if ws1 || ws2 {
        2
    } else if non_alnum1 || non_alnum2 {
        1
    } else {
        0
    }
}

fn ends_with_blank_line(chars: &[char]) -> bool {
    let n = chars.len();
    (n >= 2 && chars[n - 2] == '\n' && chars[n - 1] == '\n')
        || (n >= 3 && chars[n - 3] == '\n' && chars[n - 2] == '\r' && chars[n - 1] == '\n')
}

fn starts_with_blank_line(chars: &[char]) -> bool {
    let mut i = 0;
    for _ in 0..2 {
        if chars.get(i) == Some(&'\r') {
            i += 1;
        }
        if chars.get(i) == Some(&'\n') {
            i += 1;
        } else {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(kind: DiffKind, text: &str) -> DiffSegment {
        DiffSegment::new(kind, text)
    }

    #[test]
    fn merge_coalesces_and_drops_empties() {
        let mut segments = vec![
            seg(DiffKind::Equal, "a"),
            seg(DiffKind::Equal, "b"),
            seg(DiffKind::Delete, ""),
            seg(DiffKind::Delete, "c"),
        ];
        merge(&mut segments);
        assert_eq!(
            segments,
            vec![seg(DiffKind::Equal, "ab"), seg(DiffKind::Delete, "c")]
        );
    }

    #[test]
    fn merge_orders_deletes_before_inserts() {
        let mut segments = vec![
            seg(DiffKind::Insert, "x"),
            seg(DiffKind::Delete, "y"),
            seg(DiffKind::Insert, "z"),
        ];
        merge(&mut segments);
        assert_eq!(
            segments,
            vec![seg(DiffKind::Delete, "y"), seg(DiffKind::Insert, "xz")]
        );
    }

    #[test]
    fn merge_slides_shared_affixes_into_equalities() {
        let mut segments = vec![
            seg(DiffKind::Equal, "pre "),
            seg(DiffKind::Delete, "abXcd"),
            seg(DiffKind::Insert, "abYcd"),
            seg(DiffKind::Equal, " post"),
        ];
        merge(&mut segments);
        assert_eq!(
            segments,
            vec![
                seg(DiffKind::Equal, "pre ab"),
                seg(DiffKind::Delete, "X"),
                seg(DiffKind::Insert, "Y"),
                seg(DiffKind::Equal, "cd post"),
            ]
        );
    }

    #[test]
    fn semantic_folds_doubly_sandwiched_equality() {
        let mut segments = vec![
            seg(DiffKind::Delete, "ab"),
            seg(DiffKind::Equal, "c"),
            seg(DiffKind::Delete, "de"),
            seg(DiffKind::Insert, "wxyz"),
        ];
        semantic(&mut segments);
        assert_eq!(
            segments,
            vec![seg(DiffKind::Delete, "abcde"), seg(DiffKind::Insert, "cwxyz")]
        );
    }

    #[test]
    fn semantic_keeps_substantial_equalities() {
        let mut segments = vec![
            seg(DiffKind::Delete, "a"),
            seg(DiffKind::Equal, "shared middle"),
            seg(DiffKind::Insert, "b"),
        ];
        semantic(&mut segments);
        assert_eq!(
            segments,
            vec![
                seg(DiffKind::Delete, "a"),
                seg(DiffKind::Equal, "shared middle"),
                seg(DiffKind::Insert, "b"),
            ]
        );
    }

    #[test]
    fn boundary_score_prefers_word_breaks() {
        let word_break = boundary_score(&['a', ' '], &['b']);
        let mid_word = boundary_score(&['a'], &['b']);
        let sentence_end = boundary_score(&['a', '.'], &[' ', 'b']);
        assert!(word_break > mid_word);
        assert!(sentence_end > word_break);
    }

    #[test]
    fn edge_boundaries_score_highest() {
        assert_eq!(boundary_score(&[], &['x']), 6);
        assert_eq!(boundary_score(&['x'], &[]), 6);
    }
}
