//! Traversal scenarios and invariants.

use super::*;
use crate::config::OutputMode;
use crate::path::{morph_steps, reconstruct_path};
use crate::rand_dict::{draw_dictionary, DictCfg, ReplayToken};
use proptest::prelude::*;

fn kinds(change: bool, swap: bool, length: bool) -> EditKinds {
    EditKinds {
        change,
        swap,
        length,
    }
}

fn cfg(start: &str, end: &str, kinds: EditKinds, order: FrontierOrder) -> MorphCfg {
    MorphCfg {
        start: start.into(),
        end: end.into(),
        order,
        kinds,
        output: OutputMode::Words,
    }
}

fn path_texts(v: &Vocabulary) -> Vec<&str> {
    let end = v.end().unwrap();
    reconstruct_path(v, end).into_iter().map(|i| v.text(i)).collect()
}

#[test]
fn frontier_pops_per_order() {
    let mut stack = Frontier::new(FrontierOrder::Lifo);
    let mut queue = Frontier::new(FrontierOrder::Fifo);
    for i in 0..3 {
        stack.push(i);
        queue.push(i);
    }
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(queue.pop(), Some(0));
    assert_eq!(stack.len(), 2);
    assert!(!queue.is_empty());
}

#[test]
fn change_ladder_with_queue() {
    let mut v = Vocabulary::from_words(["cat", "bat", "bag", "bog", "dog"], "cat", "dog");
    let c = cfg("cat", "dog", kinds(true, false, false), FrontierOrder::Fifo);
    let report = search(&mut v, &c);
    assert!(report.found);
    assert_eq!(path_texts(&v), vec!["cat", "bat", "bag", "bog", "dog"]);
}

#[test]
fn single_swap_reports_s0() {
    let mut v = Vocabulary::from_words(["abc", "bac"], "abc", "bac");
    let c = cfg("abc", "bac", kinds(false, true, false), FrontierOrder::Fifo);
    assert!(search(&mut v, &c).found);
    let path = reconstruct_path(&v, 1);
    assert_eq!(path.len(), 2);
    assert_eq!(morph_steps(&v, &path)[0].to_string(), "s,0");
}

#[test]
fn single_insert_reports_i3s() {
    let mut v = Vocabulary::from_words(["cat", "cats"], "cat", "cats");
    let c = cfg("cat", "cats", kinds(false, false, true), FrontierOrder::Lifo);
    assert!(search(&mut v, &c).found);
    let path = reconstruct_path(&v, 1);
    assert_eq!(path.len(), 2);
    assert_eq!(morph_steps(&v, &path)[0].to_string(), "i,3,s");
}

#[test]
fn missing_start_is_not_traversed() {
    let mut v = Vocabulary::from_words(["bat", "dog"], "cat", "dog");
    let c = cfg("cat", "dog", kinds(true, false, false), FrontierOrder::Fifo);
    let report = search(&mut v, &c);
    assert_eq!(
        report,
        SearchReport {
            found: false,
            discovered: 0
        }
    );
    assert_eq!(v.discovered_count(), 0);
}

#[test]
fn exhausted_frontier_counts_the_explored_component() {
    // {cat, cot, cut} is connected; {dog, dig} is not reachable.
    let mut v = Vocabulary::from_words(["cat", "dog", "cot", "dig", "cut"], "cat", "dog");
    let c = cfg("cat", "dog", kinds(true, false, false), FrontierOrder::Fifo);
    let report = search(&mut v, &c);
    assert!(!report.found);
    assert_eq!(report.discovered, 3);
    assert_eq!(v.discovered_count(), 3);
}

#[test]
fn start_equal_to_end_is_immediate() {
    let mut v = Vocabulary::from_words(["cat", "bat"], "cat", "cat");
    let c = cfg("cat", "cat", kinds(true, false, false), FrontierOrder::Fifo);
    let report = search(&mut v, &c);
    assert_eq!(
        report,
        SearchReport {
            found: true,
            discovered: 1
        }
    );
    assert_eq!(reconstruct_path(&v, 0), vec![0]);
}

#[test]
fn scan_stops_once_end_is_discovered() {
    // `bat` and `cab` both neighbour `cat`; the scan stops at `bat` (the end).
    let mut v = Vocabulary::from_words(["cat", "bat", "cab"], "cat", "bat");
    let c = cfg("cat", "bat", kinds(true, false, false), FrontierOrder::Fifo);
    let report = search(&mut v, &c);
    assert!(report.found);
    assert_eq!(report.discovered, 2);
    assert!(!v.get(2).unwrap().is_discovered());
}

#[test]
fn stack_goes_deep_queue_goes_wide() {
    // cat reaches dog in three steps through cot and cog, or in six through
    // the hat..dig chain. Both cot and hat are neighbours of cat.
    let words = ["cat", "cot", "cog", "dog", "hat", "hit", "hid", "did", "dig"];
    let c_kinds = kinds(true, false, false);

    let mut fifo = Vocabulary::from_words(words, "cat", "dog");
    let report = search(&mut fifo, &cfg("cat", "dog", c_kinds, FrontierOrder::Fifo));
    assert!(report.found);
    assert_eq!(path_texts(&fifo), vec!["cat", "cot", "cog", "dog"]);
    // hit was discovered from hat before cog got popped
    assert_eq!(report.discovered, 6);

    // The stack pops hat (pushed last) and follows its chain to the end,
    // leaving cot on the frontier and cog undiscovered.
    let mut lifo = Vocabulary::from_words(words, "cat", "dog");
    let report = search(&mut lifo, &cfg("cat", "dog", c_kinds, FrontierOrder::Lifo));
    assert!(report.found);
    assert_eq!(
        path_texts(&lifo),
        vec!["cat", "hat", "hit", "hid", "did", "dig", "dog"]
    );
    assert_eq!(report.discovered, 8);
    assert!(!lifo.get(2).unwrap().is_discovered());
}

#[test]
fn duplicates_are_independent_nodes() {
    let mut v = Vocabulary::from_words(["cat", "bat", "bat", "bot"], "cat", "bot");
    let c = cfg("cat", "bot", kinds(true, false, false), FrontierOrder::Fifo);
    let report = search(&mut v, &c);
    assert!(report.found);
    // both copies of `bat` are discovered from `cat`
    assert_eq!(report.discovered, 4);
    assert_eq!(path_texts(&v), vec!["cat", "bat", "bot"]);
}

fn kinds_strategy() -> impl Strategy<Value = EditKinds> {
    (1u8..8).prop_map(|b| kinds(b & 1 != 0, b & 2 != 0, b & 4 != 0))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_dictionaries_keep_search_invariants(
        seed in any::<u64>(),
        k in kinds_strategy(),
        fifo in any::<bool>(),
    ) {
        let dict_cfg = DictCfg { words: 60, base_len: 4, alphabet: 4, kinds: k, restart_prob: 0.2 };
        let words = draw_dictionary(dict_cfg, ReplayToken { seed, index: 0 });
        let start = words[0].clone();
        let end = words[words.len() - 1].clone();
        let order = if fifo { FrontierOrder::Fifo } else { FrontierOrder::Lifo };
        let mut v = Vocabulary::from_words(words, &start, &end);
        let report = search(&mut v, &cfg(&start, &end, k, order));

        prop_assert!(report.discovered <= v.len());
        prop_assert_eq!(report.discovered, v.discovered_count());
        if report.found {
            let end_idx = v.end().unwrap();
            let path = reconstruct_path(&v, end_idx);
            prop_assert!(path.len() <= v.len());
            prop_assert_eq!(Some(path[0]), v.start());
            prop_assert_eq!(*path.last().unwrap(), end_idx);
            for w in path.windows(2) {
                let (before, after) = (v.text(w[0]), v.text(w[1]));
                prop_assert!(are_adjacent(before, after, k));
                let edit = crate::morph::diff(before, after).unwrap();
                let replayed = edit.apply(before);
                prop_assert_eq!(replayed.as_deref(), Some(after));
            }
        }
    }
}
