//! Ladder reconstruction from predecessor links.

use crate::morph::{diff, Edit};
use crate::vocab::Vocabulary;

/// Indices from the start record to `end`, following predecessor links.
///
/// Terminates because links only point at records discovered earlier. For an
/// undiscovered `end` the result is just `[end]`.
pub fn reconstruct_path(vocab: &Vocabulary, end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut cur = end;
    while let Some(prev) = vocab.get(cur).and_then(|r| r.predecessor()) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}

/// One edit per consecutive pair of `path`.
///
/// Pairs that are not a single edit apart (which a reconstructed path never
/// contains) are skipped.
pub fn morph_steps(vocab: &Vocabulary, path: &[usize]) -> Vec<Edit> {
    path.windows(2)
        .filter_map(|w| diff(vocab.text(w[0]), vocab.text(w[1])))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EditKinds, FrontierOrder};
    use crate::search::traverse;

    #[test]
    fn path_runs_from_start_to_end() {
        let mut v = Vocabulary::from_words(["cat", "cot", "cog", "dog"], "cat", "dog");
        let kinds = EditKinds {
            change: true,
            ..EditKinds::default()
        };
        let report = traverse(&mut v, 0, 3, kinds, FrontierOrder::Fifo);
        assert!(report.found);
        assert_eq!(reconstruct_path(&v, 3), vec![0, 1, 2, 3]);
        let steps: Vec<String> = morph_steps(&v, &[0, 1, 2, 3])
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(steps, vec!["c,1,o", "c,2,g", "c,0,d"]);
    }

    #[test]
    fn undiscovered_end_is_a_single_index() {
        let v = Vocabulary::from_words(["cat", "dog"], "cat", "dog");
        assert_eq!(reconstruct_path(&v, 1), vec![1]);
        assert!(morph_steps(&v, &[1]).is_empty());
    }
}
