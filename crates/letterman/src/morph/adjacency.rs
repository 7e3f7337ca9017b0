//! Adjacency predicate under a set of enabled edit kinds.

use crate::config::EditKinds;

/// True iff `a` and `b` are exactly one enabled edit apart.
///
/// Equal lengths go through change/swap; lengths one apart go through
/// insertion/deletion. Anything further apart is never adjacent. Lengths and
/// positions count characters; ASCII words are compared on bytes directly.
pub fn are_adjacent(a: &str, b: &str, kinds: EditKinds) -> bool {
    if a.is_ascii() && b.is_ascii() {
        letters_adjacent(a.as_bytes(), b.as_bytes(), kinds)
    } else {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        letters_adjacent(&a, &b, kinds)
    }
}

fn letters_adjacent<T: PartialEq>(a: &[T], b: &[T], kinds: EditKinds) -> bool {
    match a.len().abs_diff(b.len()) {
        0 => same_length_adjacent(a, b, kinds),
        1 => kinds.length && differs_by_one_char(a, b),
        _ => false,
    }
}

fn same_length_adjacent<T: PartialEq>(a: &[T], b: &[T], kinds: EditKinds) -> bool {
    if !(kinds.change || kinds.swap) {
        return false;
    }
    let mut diff_count = 0usize;
    let mut has_transpose = false;
    for i in 0..a.len() {
        if a[i] != b[i] {
            diff_count += 1;
            if i + 1 < a.len() && a[i] == b[i + 1] && a[i + 1] == b[i] {
                has_transpose = true;
            }
        }
    }
    match (kinds.change, kinds.swap) {
        (true, true) => (diff_count == 1 && !has_transpose) || (diff_count == 2 && has_transpose),
        (true, false) => diff_count == 1,
        (false, true) => diff_count == 2 && has_transpose,
        (false, false) => false,
    }
}

/// Lengths one apart: true iff deleting one letter of the longer word yields
/// the shorter one.
///
/// Greedy left-to-right scan: both cursors advance on a match, only the
/// longer cursor on a mismatch. The scan is argument-order independent
/// because it always walks the longer word.
pub fn differs_by_one_char<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if long.len() != short.len() + 1 {
        return false;
    }
    let (mut i, mut j) = (0, 0);
    while i < long.len() && j < short.len() {
        if long[i] == short[j] {
            j += 1;
        }
        i += 1;
    }
    j == short.len()
}
