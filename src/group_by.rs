use std::hash::Hash;

use indexmap::IndexMap;

/// Groups the elements of a sequence by the key that `key_of` derives
/// from each of them.
///
/// The returned map iterates over keys in the order they were first
/// encountered and every group preserves the input order of its elements.
/// Elements producing the same key do not need to be contiguous, a key
/// gets exactly one entry over the whole sequence.
///
/// ```rust
/// use group_map::group_by;
///
/// let groups = group_by(vec![1, 2, 3, 4, 5, 6], |x| x % 3);
///
/// assert_eq!(groups[&1], vec![1, 4]);
/// assert_eq!(groups[&2], vec![2, 5]);
/// assert_eq!(groups[&0], vec![3, 6]);
/// ```
pub fn group_by<I, K, F>(elements: I, mut key_of: F) -> IndexMap<K, Vec<I::Item>>
where I: IntoIterator,
      K: Hash + Eq,
      F: FnMut(&I::Item) -> K,
{
    let mut groups = IndexMap::new();

    for element in elements {
        let key = key_of(&element);
        groups.entry(key).or_insert_with(Vec::new).push(element);
    }

    groups
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
            let groups = group_by(vec.iter().copied(), |c| *c);
            test::black_box(groups.len())
        })
    }

    #[bench]
    fn vector_16_000_one_group(b: &mut test::Bencher) {
        let vec = vec![1; 16_000];

        b.iter(|| {
            let groups = group_by(vec.iter().copied(), |x| *x);
            test::black_box(groups.len())
        })
    }
}
