//! Reproducible synthetic dictionaries (random walks of single edits).
//!
//! Model
//! - Draw a base word over the first `alphabet` lowercase letters.
//! - Walk: apply one random enabled edit to the current word and keep the
//!   result; occasionally restart the walk from an earlier word. The output
//!   therefore contains ladders, with the base word first.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::EditKinds;
use crate::morph::Edit;

/// Generator configuration.
#[derive(Clone, Copy, Debug)]
pub struct DictCfg {
    /// Number of words to emit (duplicates included).
    pub words: usize,
    /// Length of the base word. Clamped to at least 1.
    pub base_len: usize,
    /// Letters drawn from `a..` of this size. Clamped to [2, 26].
    pub alphabet: u8,
    /// Edit kinds used by the walk. Empty falls back to changes only.
    pub kinds: EditKinds,
    /// Probability of restarting the walk at an earlier word after each step.
    pub restart_prob: f64,
}

impl Default for DictCfg {
    fn default() -> Self {
        Self {
            words: 200,
            base_len: 4,
            alphabet: 6,
            kinds: EditKinds {
                change: true,
                ..EditKinds::default()
            },
            restart_prob: 0.1,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a dictionary. The first word is the base of the walk.
pub fn draw_dictionary(cfg: DictCfg, tok: ReplayToken) -> Vec<String> {
    let mut rng = tok.to_std_rng();
    let alphabet = cfg.alphabet.clamp(2, 26);
    let kinds = if cfg.kinds.is_empty() {
        EditKinds {
            change: true,
            ..EditKinds::default()
        }
    } else {
        cfg.kinds
    };
    let restart = cfg.restart_prob.clamp(0.0, 1.0);
    let max_len = cfg.base_len.max(1) + 3;

    let base: String = (0..cfg.base_len.max(1))
        .map(|_| random_letter(&mut rng, alphabet))
        .collect();
    let mut out = Vec::with_capacity(cfg.words);
    if cfg.words == 0 {
        return out;
    }
    out.push(base.clone());
    let mut cur = base;
    // Bounded so a degenerate config (e.g. swaps on a one-letter word) ends.
    let mut attempts = cfg.words.saturating_mul(20);
    while out.len() < cfg.words && attempts > 0 {
        attempts -= 1;
        let edit = random_edit(&mut rng, &cur, kinds, alphabet, max_len);
        let Some(next) = edit.and_then(|e| e.apply(&cur)) else {
            continue;
        };
        if next == cur {
            continue;
        }
        out.push(next.clone());
        cur = if rng.gen_bool(restart) {
            out[rng.gen_range(0..out.len())].clone()
        } else {
            next
        };
    }
    out
}

fn random_letter<R: Rng>(rng: &mut R, alphabet: u8) -> char {
    (b'a' + rng.gen_range(0..alphabet)) as char
}

fn random_edit<R: Rng>(
    rng: &mut R,
    word: &str,
    kinds: EditKinds,
    alphabet: u8,
    max_len: usize,
) -> Option<Edit> {
    let len = word.len();
    let mut options = Vec::with_capacity(4);
    if kinds.change && len > 0 {
        options.push(0u8);
    }
    if kinds.swap && len > 1 {
        options.push(1);
    }
    if kinds.length && len < max_len {
        options.push(2);
    }
    if kinds.length && len > 1 {
        options.push(3);
    }
    if options.is_empty() {
        return None;
    }
    let edit = match options[rng.gen_range(0..options.len())] {
        0 => Edit::Change {
            pos: rng.gen_range(0..len),
            ch: random_letter(rng, alphabet),
        },
        1 => Edit::Swap {
            pos: rng.gen_range(0..len - 1),
        },
        2 => Edit::Insert {
            pos: rng.gen_range(0..=len),
            ch: random_letter(rng, alphabet),
        },
        _ => Edit::Delete {
            pos: rng.gen_range(0..len),
        },
    };
    Some(edit)
}

/// Render `words` as a plain-dialect dictionary (`S`, count, one word per line).
pub fn to_plain_dictionary(words: &[String]) -> String {
    let mut s = format!("S\n{}\n", words.len());
    for w in words {
        s.push_str(w);
        s.push('\n');
    }
    s
}
