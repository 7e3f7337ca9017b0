//! Curated surface for the command-line front end.
//!
//! - Groups what a driver needs in one place: option validation, input
//!   parsing, the search, and path/edit reconstruction.
//! - Internal to the workspace; items move when the modules change.

// Configuration
pub use crate::config::{CliOptions, ConfigError, EditKinds, FrontierOrder, MorphCfg, OutputMode};
// Input and vocabulary
pub use crate::vocab::{build, reader::parse_input, Dialect, InputError, RawInput, Vocabulary};
// Search and reconstruction
pub use crate::morph::Edit;
pub use crate::path::{morph_steps, reconstruct_path};
pub use crate::search::{search, SearchReport};
// Synthetic dictionaries
pub use crate::rand_dict::{draw_dictionary, to_plain_dictionary, DictCfg, ReplayToken};
