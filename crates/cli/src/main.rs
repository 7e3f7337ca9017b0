use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use letterman::api::{
    build, draw_dictionary, parse_input, search, to_plain_dictionary, CliOptions, DictCfg,
    EditKinds, MorphCfg, ReplayToken,
};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod render;
mod summary;

#[derive(Parser)]
#[command(name = "letterman")]
#[command(about = "Word ladders: morph a begin word into an end word one edit at a time")]
struct Cmd {
    /// Log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read a dictionary and print a ladder from --begin to --end
    Search(SearchArgs),
    /// Print a synthetic plain-dialect dictionary
    Gen(GenArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Explore with a queue (breadth-first)
    #[arg(short = 'q', long)]
    queue: bool,
    /// Explore with a stack (depth-first)
    #[arg(short = 's', long)]
    stack: bool,
    #[arg(short = 'b', long)]
    begin: Option<String>,
    #[arg(short = 'e', long)]
    end: Option<String>,
    /// W (word list) or M (morph edits); defaults to W
    #[arg(short = 'o', long)]
    output: Option<String>,
    /// Allow changing one letter
    #[arg(short = 'c', long)]
    change: bool,
    /// Allow inserting or deleting one letter
    #[arg(short = 'l', long)]
    length: bool,
    /// Allow swapping two adjacent letters
    #[arg(short = 'p', long)]
    swap: bool,
    /// Dictionary file; stdin when absent
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,
    /// Also write a JSON run summary here
    #[arg(long)]
    summary: Option<PathBuf>,
}

impl SearchArgs {
    fn options(&self) -> CliOptions {
        CliOptions {
            queue: self.queue,
            stack: self.stack,
            begin: self.begin.clone(),
            end: self.end.clone(),
            output: self.output.clone(),
            change: self.change,
            swap: self.swap,
            length: self.length,
        }
    }
}

#[derive(Args)]
struct GenArgs {
    #[arg(long, default_value_t = 200)]
    words: usize,
    /// Length of the base word
    #[arg(long, default_value_t = 4)]
    len: usize,
    #[arg(long, default_value_t = 6)]
    alphabet: u8,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long)]
    change: bool,
    #[arg(long)]
    swap: bool,
    #[arg(long)]
    length: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        Action::Search(args) => run_search(args),
        Action::Gen(args) => gen(args),
    }
}

fn run_search(args: SearchArgs) -> Result<()> {
    let cfg = MorphCfg::from_options(args.options())?;
    let input_label = args
        .input
        .as_deref()
        .map_or_else(|| "-".to_string(), |p| p.display().to_string());
    tracing::info!(
        begin = %cfg.start,
        end = %cfg.end,
        order = %cfg.order,
        kinds = %cfg.kinds.label(),
        input = %input_label,
        "search"
    );

    let text = read_input(args.input.as_deref())?;
    let raw = parse_input(&text).context("reading dictionary")?;
    let mut vocab = build(&raw, &cfg).context("building vocabulary")?;
    if vocab.start().is_none() {
        bail!("Beginning word does not exist in the dictionary");
    }
    if vocab.end().is_none() {
        bail!("Ending word does not exist in the dictionary");
    }

    let report = search(&mut vocab, &cfg);
    tracing::info!(
        found = report.found,
        discovered = report.discovered,
        vocabulary = vocab.len(),
        "search finished"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render::render(&mut out, &vocab, report, &cfg)?;
    out.flush()?;

    if let Some(path) = args.summary {
        let payload = summary::Payload::new(&cfg, input_label, &vocab, report);
        let written = summary::write_summary(&path, &payload)?;
        tracing::info!(path = %written.display(), "summary written");
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(text)
        }
    }
}

fn gen(args: GenArgs) -> Result<()> {
    let cfg = DictCfg {
        words: args.words,
        base_len: args.len,
        alphabet: args.alphabet,
        kinds: EditKinds {
            change: args.change,
            swap: args.swap,
            length: args.length,
        },
        ..DictCfg::default()
    };
    tracing::info!(words = cfg.words, seed = args.seed, index = args.index, "gen");
    let words = draw_dictionary(
        cfg,
        ReplayToken {
            seed: args.seed,
            index: args.index,
        },
    );
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    out.write_all(to_plain_dictionary(&words).as_bytes())?;
    out.flush()?;
    Ok(())
}
