use std::hash::Hash;

use indexmap::IndexMap;

/// Identifies one contiguous run of elements sharing the same derived key.
///
/// `index` is the position of the run's first element in the input sequence,
/// so the same key value appearing in two non-adjacent runs produces two
/// distinct `RunKey`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunKey<K> {
    pub key: K,
    pub index: usize,
}

/// Groups maximal contiguous runs of elements sharing the same derived key.
///
/// Each run gets its own entry keyed by [`RunKey`], the derived key paired
/// with the run's start index. Runs are continued on structural equality of
/// the derived key. The returned map iterates over runs in increasing
/// start-index order, so concatenating its value lists reproduces the input
/// sequence exactly.
///
/// ```rust
/// use group_map::{group_by_contiguous_key, RunKey};
///
/// let runs = group_by_contiguous_key(vec!['a', 'a', 'b', 'a'], |c| *c);
///
/// assert_eq!(runs[&RunKey { key: 'a', index: 0 }], vec!['a', 'a']);
/// assert_eq!(runs[&RunKey { key: 'b', index: 2 }], vec!['b']);
/// assert_eq!(runs[&RunKey { key: 'a', index: 3 }], vec!['a']);
/// ```
pub fn group_by_contiguous_key<I, K, F>(elements: I, mut key_of: F) -> IndexMap<RunKey<K>, Vec<I::Item>>
where I: IntoIterator,
      K: Hash + Eq,
      F: FnMut(&I::Item) -> K,
{
    let mut runs = IndexMap::new();
    // the one run still accepting elements: its key, start index and elements
    let mut open: Option<(K, usize, Vec<I::Item>)> = None;

    for (index, element) in elements.into_iter().enumerate() {
        let key = key_of(&element);

        match &mut open {
            Some((open_key, _, run)) if *open_key == key => {
                run.push(element);
            }
            _ => {
                if let Some((key, start, run)) = open.take() {
                    runs.insert(RunKey { key, index: start }, run);
                }
                open = Some((key, index, vec![element]));
            }
        }
    }

    if let Some((key, start, run)) = open {
        runs.insert(RunKey { key, index: start }, run);
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let elements: Vec<i32> = Vec::new();

        let runs = group_by_contiguous_key(elements, |x| *x);

        assert!(runs.is_empty());
    }

    #[test]
    fn one_big_run() {
        let runs = group_by_contiguous_key(vec![1, 1, 1, 1], |x| *x);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[&RunKey { key: 1, index: 0 }], vec![1, 1, 1, 1]);
    }

    #[test]
    fn three_runs() {
        let runs = group_by_contiguous_key(vec![1, 1, 1, 3, 3, 2, 2, 2], |x| *x);

        assert_eq!(runs.len(), 3);
        assert_eq!(runs[&RunKey { key: 1, index: 0 }], vec![1, 1, 1]);
        assert_eq!(runs[&RunKey { key: 3, index: 3 }], vec![3, 3]);
        assert_eq!(runs[&RunKey { key: 2, index: 5 }], vec![2, 2, 2]);
    }

    #[test]
    fn same_key_in_separate_runs() {
        let runs = group_by_contiguous_key(vec!['a', 'a', 'b', 'a'], |c| *c);

        assert_eq!(runs.len(), 3);
        assert_eq!(runs[&RunKey { key: 'a', index: 0 }], vec!['a', 'a']);
        assert_eq!(runs[&RunKey { key: 'b', index: 2 }], vec!['b']);
        assert_eq!(runs[&RunKey { key: 'a', index: 3 }], vec!['a']);
    }

    #[test]
    fn runs_iterate_in_start_index_order() {
        let runs = group_by_contiguous_key(vec![1, 1, 2, 1, 3, 3], |x| *x);

        let starts: Vec<_> = runs.keys().map(|k| k.index).collect();
        assert_eq!(starts, vec![0, 2, 3, 4]);
    }

    #[test]
    fn concatenation_reconstructs_input() {
        let elements = vec![5, 5, 1, 1, 1, 5, 2, 2, 5];

        let runs = group_by_contiguous_key(elements.clone(), |x| *x);

        let rebuilt: Vec<_> = runs.values().flatten().copied().collect();
        assert_eq!(rebuilt, elements);
    }

    #[test]
    fn composite_keys_continue_runs_structurally() {
        // derived keys are freshly built tuples at every position,
        // run continuation must compare their contents
        let words = vec!["aa", "ab", "ba", "bb"];

        let runs = group_by_contiguous_key(words, |w| (w.len(), w.as_bytes()[0]));

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[&RunKey { key: (2, b'a'), index: 0 }], vec!["aa", "ab"]);
        assert_eq!(runs[&RunKey { key: (2, b'b'), index: 2 }], vec!["ba", "bb"]);
    }

    #[test]
    fn singleton_runs() {
        let runs = group_by_contiguous_key(vec![1, 3, 2], |x| *x);

        assert_eq!(runs.len(), 3);
        assert_eq!(runs[&RunKey { key: 1, index: 0 }], vec![1]);
        assert_eq!(runs[&RunKey { key: 3, index: 1 }], vec![3]);
        assert_eq!(runs[&RunKey { key: 2, index: 2 }], vec![2]);
    }

    #[test]
    fn works_on_iterator_adapters() {
        let runs = group_by_contiguous_key("aabba".chars(), |c| *c);

        assert_eq!(runs.len(), 3);
        assert_eq!(runs[&RunKey { key: 'a', index: 0 }], vec!['a', 'a']);
        assert_eq!(runs[&RunKey { key: 'b', index: 2 }], vec!['b', 'b']);
        assert_eq!(runs[&RunKey { key: 'a', index: 4 }], vec!['a']);
    }
}

#[cfg(all(feature = "nightly", test))]
mod bench {
    extern crate test;
    extern crate rand;

    use super::*;
    use self::rand::{Rng, SeedableRng};
    use self::rand::rngs::StdRng;
    use self::rand::distributions::Alphanumeric;

    #[bench]
    fn vector_16_000(b: &mut test::Bencher) {
        let mut rng = StdRng::from_seed([42; 32]);

        let len = 16_000;
        let mut vec = Vec::with_capacity(len);
        for _ in 0..len {
            vec.push(rng.sample(Alphanumeric));
        }

        b.iter(|| {
            let runs = group_by_contiguous_key(vec.iter().copied(), |c| *c);
            test::black_box(runs.len())
        })
    }

    #[bench]
    fn vector_16_000_one_run(b: &mut test::Bencher) {
        let vec = vec![1; 16_000];

        b.iter(|| {
            let runs = group_by_contiguous_key(vec.iter().copied(), |x| *x);
            test::black_box(runs.len())
        })
    }
}
