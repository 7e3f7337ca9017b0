//! Text rendering of search results.

use std::io::{self, Write};

use letterman::api::{morph_steps, reconstruct_path, MorphCfg, OutputMode, SearchReport, Vocabulary};

/// Write the result of one search to `out`.
///
/// Success: `Words in morph: <n>`, then each word (`W`) or the start word and
/// one edit per step (`M`). Failure: `No solution, <n> words discovered.`
pub fn render<W: Write>(
    out: &mut W,
    vocab: &Vocabulary,
    report: SearchReport,
    cfg: &MorphCfg,
) -> io::Result<()> {
    let end = match vocab.end() {
        Some(end) if report.found => end,
        _ => {
            return writeln!(out, "No solution, {} words discovered.", report.discovered);
        }
    };
    let path = reconstruct_path(vocab, end);
    writeln!(out, "Words in morph: {}", path.len())?;
    match cfg.output {
        OutputMode::Words => {
            for &idx in &path {
                writeln!(out, "{}", vocab.text(idx))?;
            }
        }
        OutputMode::Morph => {
            writeln!(out, "{}", cfg.start)?;
            for edit in morph_steps(vocab, &path) {
                writeln!(out, "{edit}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterman::api::{search, EditKinds, FrontierOrder};

    fn run(words: &[&str], start: &str, end: &str, output: OutputMode) -> String {
        let cfg = MorphCfg {
            start: start.into(),
            end: end.into(),
            order: FrontierOrder::Fifo,
            kinds: EditKinds::ALL,
            output,
        };
        let mut vocab = Vocabulary::from_words(words.iter().copied(), start, end);
        let report = search(&mut vocab, &cfg);
        let mut buf = Vec::new();
        render(&mut buf, &vocab, report, &cfg).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn word_mode_lists_the_ladder() {
        let out = run(&["cat", "cot", "dot", "dog"], "cat", "dog", OutputMode::Words);
        assert_eq!(out, "Words in morph: 4\ncat\ncot\ndot\ndog\n");
    }

    #[test]
    fn morph_mode_lists_edits() {
        let out = run(&["cat", "cats", "acts"], "cat", "acts", OutputMode::Morph);
        assert_eq!(out, "Words in morph: 3\ncat\ni,3,s\ns,0\n");
    }

    #[test]
    fn failure_reports_discoveries() {
        let out = run(&["cat", "cot", "xyz"], "cat", "xyz", OutputMode::Words);
        assert_eq!(out, "No solution, 2 words discovered.\n");
    }
}
