//! Word ladders over arbitrary dictionaries.
//!
//! A ladder connects a start word to an end word through dictionary words that
//! are each one edit apart: a letter change, an adjacent swap, or a single
//! insertion/deletion. The enabled edit kinds and the frontier discipline
//! (stack or queue) come from one immutable [`MorphCfg`].
//!
//! Layout
//! - `config`: validated run configuration (`MorphCfg`, `EditKinds`, ...).
//! - `morph`: adjacency predicate and per-step `Edit`s.
//! - `vocab`: input reader and vocabulary builder (plain and coded dialects).
//! - `search`: frontier-based traversal recording predecessor links.
//! - `path`: path reconstruction from predecessor links.
//! - `rand_dict`: reproducible synthetic dictionaries for benches and tests.

pub mod api;
pub mod config;
pub mod morph;
pub mod path;
pub mod rand_dict;
pub mod search;
pub mod vocab;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{CliOptions, ConfigError, EditKinds, FrontierOrder, MorphCfg, OutputMode};
pub use morph::{are_adjacent, diff, Edit};
pub use search::{search, traverse, SearchReport};
pub use vocab::{InputError, Vocabulary, WordRecord};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::config::{EditKinds, FrontierOrder, MorphCfg, OutputMode};
    pub use crate::morph::{are_adjacent, diff, Edit};
    pub use crate::path::{morph_steps, reconstruct_path};
    pub use crate::search::{search, SearchReport};
    pub use crate::vocab::{build, reader::parse_input, Dialect, RawInput, Vocabulary};
}

/// Parse `text`, build the vocabulary for `cfg`, and run the search.
///
/// The returned vocabulary carries the discovery state, so callers can
/// reconstruct the path when `report.found` is set.
pub fn solve(text: &str, cfg: &MorphCfg) -> Result<(Vocabulary, SearchReport), InputError> {
    let raw = vocab::reader::parse_input(text)?;
    let mut vocab = vocab::build(&raw, cfg)?;
    let report = search::search(&mut vocab, cfg);
    Ok((vocab, report))
}
