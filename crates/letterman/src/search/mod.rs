//! Frontier-based discovery over the vocabulary.
//!
//! Purpose
//! - Starting at the start record, repeatedly pop one index from the frontier
//!   and scan the whole vocabulary for undiscovered neighbours, marking each
//!   discovered with the popped index as predecessor.
//! - A stack frontier gives depth-first order (no length guarantee); a queue
//!   gives breadth-first order, so the ladder found has the fewest steps.
//!
//! Every record is discovered at most once, so the predecessor links form a
//! tree rooted at the start record and the discovered count is bounded by the
//! vocabulary size.

mod frontier;

pub use frontier::Frontier;

use tracing::debug;

use crate::config::{EditKinds, FrontierOrder, MorphCfg};
use crate::morph::are_adjacent;
use crate::vocab::Vocabulary;

/// Outcome of one traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Whether the end record was discovered.
    pub found: bool,
    /// Records discovered, the start record included.
    pub discovered: usize,
}

/// Search from the vocabulary's start word to its end word under `cfg`.
///
/// When either word is missing from the vocabulary nothing is traversed and
/// the report is a failure with zero discoveries.
pub fn search(vocab: &mut Vocabulary, cfg: &MorphCfg) -> SearchReport {
    match (vocab.start(), vocab.end()) {
        (Some(start), Some(end)) => traverse(vocab, start, end, cfg.kinds, cfg.order),
        _ => SearchReport {
            found: false,
            discovered: 0,
        },
    }
}

/// Discover records reachable from `start` until `end` is discovered or the
/// frontier runs dry.
///
/// Discovery state is written in place. The scan over the vocabulary stops as
/// soon as `end` is discovered; neighbours pushed earlier in that scan stay on
/// the frontier.
pub fn traverse(
    vocab: &mut Vocabulary,
    start: usize,
    end: usize,
    kinds: EditKinds,
    order: FrontierOrder,
) -> SearchReport {
    let words = &mut vocab.words;
    let mut frontier = Frontier::new(order);
    words[start].discover(None);
    let mut discovered = 1usize;
    frontier.push(start);

    while !words[end].is_discovered() {
        let Some(current) = frontier.pop() else {
            debug!(discovered, %order, "frontier exhausted");
            return SearchReport {
                found: false,
                discovered,
            };
        };
        for i in 0..words.len() {
            if words[i].is_discovered() {
                continue;
            }
            if are_adjacent(words[i].text(), words[current].text(), kinds) {
                words[i].discover(Some(current));
                discovered += 1;
                frontier.push(i);
                if i == end {
                    break;
                }
            }
        }
    }
    debug!(discovered, %order, pending = frontier.len(), "end word discovered");
    SearchReport {
        found: true,
        discovered,
    }
}

#[cfg(test)]
mod tests;
