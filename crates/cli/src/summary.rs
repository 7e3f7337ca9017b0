use anyhow::{Context, Result};
use letterman::api::{MorphCfg, SearchReport, Vocabulary};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters of one search, as recorded in the run summary.
#[derive(Debug, Serialize)]
pub struct Params {
    pub begin: String,
    pub end: String,
    pub order: String,
    pub kinds: String,
    pub output: String,
    pub input: String,
}

/// What the search produced.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub found: bool,
    pub discovered: usize,
    pub vocabulary: usize,
    pub path_len: Option<usize>,
}

/// Metadata used to generate a run summary.
#[derive(Debug)]
pub struct Payload {
    pub params: Params,
    pub outcome: Outcome,
}

impl Payload {
    pub fn new(cfg: &MorphCfg, input: String, vocab: &Vocabulary, report: SearchReport) -> Self {
        let path_len = vocab
            .end()
            .filter(|_| report.found)
            .map(|end| letterman::path::reconstruct_path(vocab, end).len());
        Self {
            params: Params {
                begin: cfg.start.clone(),
                end: cfg.end.clone(),
                order: cfg.order.to_string(),
                kinds: cfg.kinds.label(),
                output: cfg.output.to_string(),
                input,
            },
            outcome: Outcome {
                found: report.found,
                discovered: report.discovered,
                vocabulary: vocab.len(),
                path_len,
            },
        }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct SummaryDoc<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    params: &'a Params,
    outcome: &'a Outcome,
    outputs: Vec<String>,
}

/// Write a pretty JSON run summary to `path`, creating parent directories.
#[track_caller]
pub fn write_summary<P: AsRef<Path>>(path: P, payload: &Payload) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating summary dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = SummaryDoc {
        code_rev: current_git_rev(),
        version: letterman::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        params: &payload.params,
        outcome: &payload.outcome,
        outputs: vec![path.to_string_lossy().into_owned()],
    };
    fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}

/// Revision of the running build: `GIT_COMMIT` (baked in at compile time,
/// else read at run time), then `git rev-parse`, then `"unknown"`.
pub fn current_git_rev() -> String {
    let pinned = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok());
    resolve_rev(pinned, head_rev)
}

fn resolve_rev(pinned: Option<String>, fallback: impl FnOnce() -> Option<String>) -> String {
    pinned
        .filter(|rev| !rev.is_empty())
        .or_else(fallback)
        .unwrap_or_else(|| "unknown".to_string())
}

fn head_rev() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let rev = String::from_utf8(out.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|r| !r.is_empty())
}
