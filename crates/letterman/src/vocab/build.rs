//! Vocabulary construction: directive expansion and the admission filter.

use tracing::debug;

use super::reader::{Dialect, RawInput};
use super::{InputError, Vocabulary, WordRecord};
use crate::config::MorphCfg;

const REVERSAL: u8 = b'&';
const INSERT_OPEN: u8 = b'[';
const INSERT_CLOSE: u8 = b']';
const SWAP: u8 = b'!';
const DOUBLE: u8 = b'?';
const MARKERS: [u8; 5] = [REVERSAL, INSERT_OPEN, INSERT_CLOSE, SWAP, DOUBLE];

/// Admission filter derived once from the configuration.
///
/// The start and end words are always admitted. Without length edits only
/// words of the start word's length can ever be reached, and with swaps as
/// the only kind only permutations of the start word can.
#[derive(Clone, Debug)]
pub struct Admission<'a> {
    cfg: &'a MorphCfg,
    /// Sorted letters of the start word; set only for swap-only runs.
    anagram_key: Option<Vec<char>>,
    start_len: usize,
    /// Swap-only run whose start and end are not permutations of each other.
    reject_all: bool,
}

impl<'a> Admission<'a> {
    pub fn new(cfg: &'a MorphCfg) -> Self {
        let mut anagram_key = None;
        let mut reject_all = false;
        if !cfg.kinds.length && !cfg.kinds.change {
            let start_key = sorted_letters(&cfg.start);
            reject_all = start_key != sorted_letters(&cfg.end);
            anagram_key = Some(start_key);
        }
        Self {
            cfg,
            anagram_key,
            start_len: cfg.start.chars().count(),
            reject_all,
        }
    }

    pub fn admits(&self, word: &str) -> bool {
        if word == self.cfg.start || word == self.cfg.end {
            return true;
        }
        if self.cfg.kinds.length {
            return true;
        }
        if word.chars().count() != self.start_len {
            return false;
        }
        match &self.anagram_key {
            Some(_) if self.reject_all => false,
            Some(key) => sorted_letters(word) == *key,
            None => true,
        }
    }
}

fn sorted_letters(word: &str) -> Vec<char> {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters
}

/// Expand one coded-dialect entry into its candidate words, in emission order.
///
/// Entries without a marker are literals. Otherwise the first of `& [ ] ! ?`
/// selects the directive:
/// - `ab&`: `ab`, then `ba` (text after the marker is ignored);
/// - `a[bc]d`: `abd`, `acd`;
/// - `abc!d`: `abcd`, `acbd`;
/// - `ab?c`: `abc`, `abbc`.
pub fn expand_directive(token: &str) -> Result<Vec<String>, InputError> {
    let bytes = token.as_bytes();
    let Some(at) = bytes.iter().position(|b| MARKERS.contains(b)) else {
        return Ok(vec![token.to_string()]);
    };
    let malformed = |reason| InputError::MalformedDirective {
        token: token.to_string(),
        reason,
    };
    let prefix = &token[..at];
    let suffix = &token[at + 1..];
    match bytes[at] {
        REVERSAL => Ok(vec![prefix.to_string(), prefix.chars().rev().collect()]),
        INSERT_OPEN => {
            let close = suffix
                .find(INSERT_CLOSE as char)
                .ok_or_else(|| malformed("`[` without a closing `]`"))?;
            let tail = &suffix[close + 1..];
            Ok(suffix[..close]
                .chars()
                .map(|c| format!("{prefix}{c}{tail}"))
                .collect())
        }
        SWAP => {
            let mut head: Vec<char> = prefix.chars().collect();
            let n = head.len();
            if n < 2 {
                return Err(malformed("`!` needs two letters before it"));
            }
            let plain = format!("{prefix}{suffix}");
            head.swap(n - 2, n - 1);
            let swapped: String = head.into_iter().chain(suffix.chars()).collect();
            Ok(vec![plain, swapped])
        }
        DOUBLE => {
            let Some(prev) = prefix.chars().next_back() else {
                return Err(malformed("`?` needs a letter before it"));
            };
            Ok(vec![
                format!("{prefix}{suffix}"),
                format!("{prefix}{prev}{suffix}"),
            ])
        }
        // Only `]` is left: a close bracket with no open one before it.
        _ => Err(malformed("`]` before `[`")),
    }
}

/// Build the vocabulary for `cfg` from parsed input.
///
/// Every candidate, in order, is offered to the admission filter; admitted
/// candidates are appended and the first admitted occurrence of the start
/// and end words fixes their indices. Duplicates stay as separate records.
pub fn build(raw: &RawInput, cfg: &MorphCfg) -> Result<Vocabulary, InputError> {
    let admission = Admission::new(cfg);
    let mut vocab = Vocabulary {
        words: Vec::with_capacity(raw.entries.len()),
        ..Vocabulary::default()
    };
    let mut offered = 0usize;
    let mut offer = |vocab: &mut Vocabulary, word: String| {
        offered += 1;
        if admission.admits(&word) {
            vocab.push(WordRecord::new(word), &cfg.start, &cfg.end);
        }
    };
    for entry in &raw.entries {
        match raw.dialect {
            Dialect::Plain => offer(&mut vocab, entry.clone()),
            Dialect::Coded => {
                for word in expand_directive(entry)? {
                    offer(&mut vocab, word);
                }
            }
        }
    }
    debug!(
        offered,
        admitted = vocab.len(),
        start = ?vocab.start,
        end = ?vocab.end,
        "vocabulary built"
    );
    Ok(vocab)
}
