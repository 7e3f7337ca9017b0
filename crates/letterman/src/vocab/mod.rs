//! Vocabulary: the admitted words of one run, as an index-addressed arena.
//!
//! - `reader`: splits raw input into the dialect tag and the entry tokens.
//! - `build`: expands coded directives and applies the admission filter.
//!
//! Records are owned by the `Vocabulary`; traversal state lives on them and is
//! written only by `crate::search`. Predecessors are indices into the same
//! arena, so the predecessor links need no shared ownership.

mod build;
pub mod reader;

pub use build::{build, expand_directive, Admission};
pub use reader::{parse_input, Dialect, RawInput};

/// Input errors: a bad header or a malformed coded directive.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("missing dictionary type tag")]
    MissingTag,
    #[error("missing or invalid line count: {0:?}")]
    BadCount(Option<String>),
    #[error("malformed directive {token:?}: {reason}")]
    MalformedDirective { token: String, reason: &'static str },
}

/// One admitted word and its discovery state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordRecord {
    text: String,
    predecessor: Option<usize>,
    discovered: bool,
}

impl WordRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            predecessor: None,
            discovered: false,
        }
    }
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
    /// Index of the record that discovered this one; `None` for the start
    /// record and for undiscovered records.
    #[inline]
    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }
    #[inline]
    pub fn is_discovered(&self) -> bool {
        self.discovered
    }
    /// Mark discovered (once). Only the traversal calls this.
    #[inline]
    pub(crate) fn discover(&mut self, predecessor: Option<usize>) {
        debug_assert!(!self.discovered, "record discovered twice");
        self.discovered = true;
        self.predecessor = predecessor;
    }
}

/// Ordered admitted words plus the positions of the start and end words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub(crate) words: Vec<WordRecord>,
    pub(crate) start: Option<usize>,
    pub(crate) end: Option<usize>,
}

impl Vocabulary {
    /// Vocabulary over literal words, locating `start`/`end` by first
    /// occurrence. No admission filter is applied.
    pub fn from_words<I, S>(words: I, start: &str, end: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Vocabulary::default();
        for w in words {
            vocab.push(WordRecord::new(w), start, end);
        }
        vocab
    }

    pub(crate) fn push(&mut self, record: WordRecord, start: &str, end: &str) {
        let idx = self.words.len();
        if self.start.is_none() && record.text == start {
            self.start = Some(idx);
        }
        if self.end.is_none() && record.text == end {
            self.end = Some(idx);
        }
        self.words.push(record);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
    #[inline]
    pub fn start(&self) -> Option<usize> {
        self.start
    }
    #[inline]
    pub fn end(&self) -> Option<usize> {
        self.end
    }
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&WordRecord> {
        self.words.get(idx)
    }
    #[inline]
    pub fn records(&self) -> &[WordRecord] {
        &self.words
    }
    /// Text of the record at `idx`. Panics when out of range, like slice indexing.
    #[inline]
    pub fn text(&self, idx: usize) -> &str {
        &self.words[idx].text
    }
    /// Number of records flagged discovered.
    pub fn discovered_count(&self) -> usize {
        self.words.iter().filter(|w| w.discovered).count()
    }
}
