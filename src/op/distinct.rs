use rustc_hash::FxHashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

/// 按键去重，仅保留每个键第一次出现的元素，见[`crate::SeqExt::distinct_by`]。
///
/// 已出现的键保存在迭代器内部，内存随不同键的数量增长。
#[derive(Clone)]
pub struct DistinctBy<I, F, K> {
    iter: I,
    key: F,
    seen: FxHashSet<K>,
}

impl<I, F, K> DistinctBy<I, F, K> {
    pub(crate) fn new(iter: I, key: F) -> Self {
        DistinctBy { iter, key, seen: FxHashSet::default() }
    }
}

impl<I: fmt::Debug, F, K: fmt::Debug> fmt::Debug for DistinctBy<I, F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistinctBy").field("iter", &self.iter).field("seen", &self.seen).finish()
    }
}

impl<I, F, K> Iterator for DistinctBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, seen) = (&mut self.key, &mut self.seen);
        // insert返回true表示首次出现
        self.iter.find(|item| seen.insert(key(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        ((lower > 0 && self.seen.is_empty()) as usize, upper)
    }
}

impl<I, F, K> FusedIterator for DistinctBy<I, F, K>
where
    I: FusedIterator,
    F: FnMut(&I::Item) -> K,
    K: Hash + Eq,
{
}

#[cfg(test)]
mod tests {
    use crate::SeqExt;
    use ordered_float::OrderedFloat;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;
    use unicase::UniCase;

    #[test]
    fn test_distinct_by_key() {
        let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
        let res: Vec<_> = words.into_iter().distinct_by(|w| w.chars().next()).collect();
        assert_eq!(res, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_distinct_by_nocase() {
        let words = vec!["Rust", "rust", "RUST", "Ruby", "ruby"];
        let res: Vec<_> = words.into_iter().distinct_by(|w| UniCase::new(w.to_string())).collect();
        assert_eq!(res, vec!["Rust", "Ruby"]);
    }

    #[test]
    fn test_distinct_by_float_key() {
        let points = vec![(1, 0.5), (2, 1.5), (3, 0.5), (4, 2.0), (5, 1.5)];
        let res: Vec<_> = points.into_iter().distinct_by(|(_, v)| OrderedFloat(*v)).map(|(id, _)| id).collect();
        assert_eq!(res, vec![1, 2, 4]);
    }

    #[test]
    fn test_distinct_by_none_key() {
        let source = vec![Some(1), None, Some(1), None, Some(2)];
        let res: Vec<_> = source.into_iter().distinct_by(|x| *x).collect();
        assert_eq!(res, vec![Some(1), None, Some(2)]);
    }

    #[test]
    fn test_distinct_identity_matches_dedup() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..50 {
            let len = rng.random_range(0..80);
            let source: Vec<u8> = (0..len).map(|_| rng.random_range(0..20)).collect();
            let mut seen = HashSet::new();
            let expected: Vec<_> = source.iter().copied().filter(|x| seen.insert(*x)).collect();
            assert_eq!(source.into_iter().distinct().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn test_distinct_infinite_source() {
        let res: Vec<_> = (0..).distinct_by(|x| x / 10).take(3).collect();
        assert_eq!(res, vec![0, 10, 20]);
    }
}
