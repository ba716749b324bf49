//! Myers O((N+M)D) shortest edit script over `char` slices.
//!
//! The forward variant with a per-round snapshot of the furthest-reaching
//! endpoints, backtracked into per-character operations. Inputs here are the
//! middles left over after common prefix/suffix trimming, so N and M are
//! small in practice.

use crate::{DiffKind, DiffSegment};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Op {
    Equal,
    Delete,
    Insert,
}

pub(crate) fn diff_chars(a: &[char], b: &[char]) -> Vec<DiffSegment> {
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }
    if a.is_empty() {
        return vec![DiffSegment::new(
            DiffKind::Insert,
            b.iter().collect::<String>(),
        )];
    }
    if b.is_empty() {
        return vec![DiffSegment::new(
            DiffKind::Delete,
            a.iter().collect::<String>(),
        )];
    }
    coalesce(edit_script(a, b))
}

/// Forward search. `v[k + offset]` holds the furthest x reached on diagonal
/// k; a snapshot of `v` is kept per round for the backtrack.
fn edit_script(a: &[char], b: &[char]) -> Vec<(Op, char)> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = n + m;
    let offset = max;
    let mut v = vec![0isize; (2 * max + 2) as usize];
    let mut trace: Vec<Vec<isize>> = Vec::new();

    'search: for d in 0..=max {
        trace.push(v.clone());
        let mut k = -d;
        while k <= d {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n && y >= m {
                break 'search;
            }
            k += 2;
        }
    }

    // Walk back from (n, m); each round's snapshot tells us which diagonal
    // we came from.
    let mut rev: Vec<(Op, char)> = Vec::with_capacity((n + m) as usize);
    let (mut x, mut y) = (n, m);
    for d in (0..trace.len()).rev() {
        let v = &trace[d];
        let d = d as isize;
        let k = x - y;
        let idx = (k + offset) as usize;
        let prev_k = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[(prev_k + offset) as usize];
        let prev_y = prev_x - prev_k;
        while x > prev_x && y > prev_y {
            rev.push((Op::Equal, a[(x - 1) as usize]));
            x -= 1;
            y -= 1;
        }
        if d > 0 {
            if x == prev_x {
                rev.push((Op::Insert, b[(y - 1) as usize]));
                y -= 1;
            } else {
                rev.push((Op::Delete, a[(x - 1) as usize]));
                x -= 1;
            }
        }
    }
    rev.reverse();
    rev
}

fn coalesce(ops: Vec<(Op, char)>) -> Vec<DiffSegment> {
    let mut segments: Vec<DiffSegment> = Vec::new();
    for (op, ch) in ops {
        let kind = match op {
            Op::Equal => DiffKind::Equal,
            Op::Delete => DiffKind::Delete,
            Op::Insert => DiffKind::Insert,
        };
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push(ch),
            _ => segments.push(DiffSegment::new(kind, ch.to_string())),
        }
    }
    segments
}
