//! Token reader for dictionary input.
//!
//! Format: a dialect tag, a declared entry count, then entries separated by
//! whitespace. A token starting with `//` opens a comment that runs to the end
//! of its line; comments do not count against the declared entries.

use tracing::{debug, warn};

use super::InputError;

const COMMENT: &str = "//";

/// Input dialect, chosen by the leading tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    /// Tag `S`: every entry is a literal word.
    Plain,
    /// Any other tag: entries may carry expansion directives.
    Coded,
}

impl Dialect {
    #[inline]
    pub fn from_tag(tag: char) -> Self {
        if tag == 'S' {
            Dialect::Plain
        } else {
            Dialect::Coded
        }
    }
}

/// Parsed but not yet expanded input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawInput {
    pub dialect: Dialect,
    /// Entry count announced by the header.
    pub declared: usize,
    /// Entry tokens in input order, comments removed.
    pub entries: Vec<String>,
}

/// Split `text` into header and entries.
///
/// Reading stops after `declared` entries; trailing text is ignored. Input
/// that ends early is accepted with a warning.
pub fn parse_input(text: &str) -> Result<RawInput, InputError> {
    let mut dialect = None;
    let mut declared = None;
    let mut entries = Vec::new();

    'lines: for line in text.lines() {
        for tok in line.split_whitespace() {
            if dialect.is_none() {
                let mut chars = tok.chars();
                let tag = chars.next().ok_or(InputError::MissingTag)?;
                dialect = Some(Dialect::from_tag(tag));
                // `S12` reads as tag `S`, count `12`.
                let rest = chars.as_str();
                if !rest.is_empty() {
                    declared = Some(parse_count(rest)?);
                }
                continue;
            }
            let Some(declared) = declared else {
                declared = Some(parse_count(tok)?);
                continue;
            };
            if entries.len() >= declared {
                break 'lines;
            }
            if tok.starts_with(COMMENT) {
                continue 'lines;
            }
            entries.push(tok.to_string());
        }
    }

    let dialect = dialect.ok_or(InputError::MissingTag)?;
    let declared = declared.ok_or(InputError::BadCount(None))?;
    if entries.len() < declared {
        warn!(
            declared,
            read = entries.len(),
            "input ended before the declared entry count"
        );
    }
    debug!(?dialect, declared, read = entries.len(), "input parsed");
    Ok(RawInput {
        dialect,
        declared,
        entries,
    })
}

fn parse_count(tok: &str) -> Result<usize, InputError> {
    tok.parse()
        .map_err(|_| InputError::BadCount(Some(tok.to_string())))
}
