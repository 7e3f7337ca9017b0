//! The single edit between two neighbouring words of a ladder.

use std::fmt;

/// One edit, positioned (in characters) on the word *before* it is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Replace the letter at `pos` with `ch`.
    Change { pos: usize, ch: char },
    /// Transpose the letters at `pos` and `pos + 1`.
    Swap { pos: usize },
    /// Insert `ch` so that it ends up at `pos`.
    Insert { pos: usize, ch: char },
    /// Remove the letter at `pos`.
    Delete { pos: usize },
}

impl Edit {
    /// Apply this edit to `word`, returning `None` when the position is out
    /// of range for it.
    pub fn apply(&self, word: &str) -> Option<String> {
        let mut chars: Vec<char> = word.chars().collect();
        match *self {
            Edit::Change { pos, ch } => *chars.get_mut(pos)? = ch,
            Edit::Swap { pos } => {
                if pos + 1 >= chars.len() {
                    return None;
                }
                chars.swap(pos, pos + 1);
            }
            Edit::Insert { pos, ch } => {
                if pos > chars.len() {
                    return None;
                }
                chars.insert(pos, ch);
            }
            Edit::Delete { pos } => {
                if pos >= chars.len() {
                    return None;
                }
                chars.remove(pos);
            }
        }
        Some(chars.into_iter().collect())
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Edit::Change { pos, ch } => write!(f, "c,{pos},{ch}"),
            Edit::Swap { pos } => write!(f, "s,{pos}"),
            Edit::Insert { pos, ch } => write!(f, "i,{pos},{ch}"),
            Edit::Delete { pos } => write!(f, "d,{pos}"),
        }
    }
}

/// The edit turning `before` into `after`, for words on a ladder edge.
///
/// Only the first differing position is inspected; the result is exact for
/// words that are adjacent under some set of kinds. Returns `None` for
/// identical words and for lengths more than one apart.
pub fn diff(before: &str, after: &str) -> Option<Edit> {
    let b: Vec<char> = before.chars().collect();
    let a: Vec<char> = after.chars().collect();
    if b.len() == a.len() {
        let i = first_mismatch(&b, &a)?;
        if i + 1 == a.len() || b[i + 1] == a[i + 1] {
            Some(Edit::Change {
                pos: i,
                ch: a[i],
            })
        } else {
            Some(Edit::Swap { pos: i })
        }
    } else if a.len() == b.len() + 1 {
        let pos = first_mismatch(&b, &a).unwrap_or(a.len() - 1);
        Some(Edit::Insert {
            pos,
            ch: a[pos],
        })
    } else if b.len() == a.len() + 1 {
        let pos = first_mismatch(&a, &b).unwrap_or(a.len());
        Some(Edit::Delete { pos })
    } else {
        None
    }
}

/// First index below `short.len()` where the two words disagree.
#[inline]
fn first_mismatch(short: &[char], other: &[char]) -> Option<usize> {
    short.iter().zip(other).position(|(x, y)| x != y)
}
