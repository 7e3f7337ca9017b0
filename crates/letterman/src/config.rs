//! Run configuration: one immutable record consumed by every component.
//!
//! - `CliOptions`: raw switches as the front end collected them.
//! - `MorphCfg`: the validated record. Components take it (or the relevant
//!   field) by parameter; nothing reads global state.

use std::fmt;

/// Frontier discipline: which end of the frontier the traversal pops from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrontierOrder {
    /// Stack: pop the most recently pushed index (depth-first).
    Lifo,
    /// Queue: pop the earliest pushed index (breadth-first).
    Fifo,
}

impl fmt::Display for FrontierOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FrontierOrder::Lifo => "stack",
            FrontierOrder::Fifo => "queue",
        })
    }
}

/// Output selector: the word list, or the start word followed by edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputMode {
    Words,
    Morph,
}

impl OutputMode {
    /// Parse the single-letter selector (`W` or `M`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "W" => Some(OutputMode::Words),
            "M" => Some(OutputMode::Morph),
            _ => None,
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputMode::Words => "W",
            OutputMode::Morph => "M",
        })
    }
}

/// Enabled transformation kinds.
///
/// `change` and `swap` act on equal-length words; `length` covers single
/// insertions and deletions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EditKinds {
    pub change: bool,
    pub swap: bool,
    pub length: bool,
}

impl EditKinds {
    pub const ALL: EditKinds = EditKinds {
        change: true,
        swap: true,
        length: true,
    };

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.change || self.swap || self.length)
    }

    /// Swap is the only kind that keeps the length (no change, no length edits).
    #[inline]
    pub fn swap_only(&self) -> bool {
        self.swap && !self.change && !self.length
    }

    /// Compact label such as `c+p+l`, used in logs and run summaries.
    pub fn label(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if self.change {
            parts.push("c");
        }
        if self.swap {
            parts.push("p");
        }
        if self.length {
            parts.push("l");
        }
        parts.join("+")
    }
}

/// Raw switches before validation; mirrors the command line one-to-one.
#[derive(Clone, Debug, Default)]
pub struct CliOptions {
    pub queue: bool,
    pub stack: bool,
    pub begin: Option<String>,
    pub end: Option<String>,
    /// Output selector; `None` means word-list mode.
    pub output: Option<String>,
    pub change: bool,
    pub swap: bool,
    pub length: bool,
}

/// Configuration errors, reported before any input is read.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Conflicting or duplicate stack and queue specified")]
    ConflictingOrder,
    #[error("Must specify one of stack or queue")]
    MissingOrder,
    #[error("Must specify at least one modification mode (change length swap)")]
    NoEditKind,
    #[error("Beginning word not specified")]
    MissingBegin,
    #[error("Ending word not specified")]
    MissingEnd,
    #[error("The first and last words must have the same length when length mode is off")]
    LengthMismatch,
    #[error("Invalid output mode specified, outputFormat: {0}")]
    InvalidOutput(String),
}

/// Validated run configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MorphCfg {
    pub start: String,
    pub end: String,
    pub order: FrontierOrder,
    pub kinds: EditKinds,
    pub output: OutputMode,
}

impl MorphCfg {
    /// Validate raw switches. Checks run in a fixed order so the first
    /// problem found is the one reported.
    pub fn from_options(opts: CliOptions) -> Result<Self, ConfigError> {
        let order = match (opts.stack, opts.queue) {
            (true, true) => return Err(ConfigError::ConflictingOrder),
            (false, false) => return Err(ConfigError::MissingOrder),
            (true, false) => FrontierOrder::Lifo,
            (false, true) => FrontierOrder::Fifo,
        };
        let kinds = EditKinds {
            change: opts.change,
            swap: opts.swap,
            length: opts.length,
        };
        if kinds.is_empty() {
            return Err(ConfigError::NoEditKind);
        }
        let start = match opts.begin {
            Some(w) if !w.is_empty() => w,
            _ => return Err(ConfigError::MissingBegin),
        };
        let end = match opts.end {
            Some(w) if !w.is_empty() => w,
            _ => return Err(ConfigError::MissingEnd),
        };
        if !kinds.length && start.chars().count() != end.chars().count() {
            return Err(ConfigError::LengthMismatch);
        }
        let output = match opts.output.as_deref() {
            None => OutputMode::Words,
            Some(s) => OutputMode::parse(s).ok_or_else(|| ConfigError::InvalidOutput(s.to_string()))?,
        };
        Ok(Self {
            start,
            end,
            order,
            kinds,
            output,
        })
    }
}
