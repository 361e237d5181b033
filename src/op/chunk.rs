use crate::SeqRes;
use crate::config::{Config, skip_empty_chunk};
use crate::err::SeqErr;
use std::iter::FusedIterator;

/// 按固定大小对元素分组，见[`crate::SeqExt::chunk`]。
///
/// 每个分组在被拉取时才从源中取出，因此可用于无限序列。
/// 除最后一组外每组恰好有`size`个元素；空序列默认产生一个空分组，
/// 指定[`Config::SkipEmptyChunk`]后不产生分组。
#[derive(Debug, Clone)]
pub struct Chunk<I> {
    iter: I,
    size: usize,
    /// 是否已经产生过分组
    started: bool,
    done: bool,
    skip_empty: bool,
}

impl<I: Iterator> Chunk<I> {
    pub(crate) fn new(iter: I, size: usize, configs: &[Config]) -> SeqRes<Self> {
        if size == 0 {
            Err(SeqErr::invalid_arg("chunk", "size", size, "chunk size must be positive"))?
        }
        Ok(Chunk { iter, size, started: false, done: false, skip_empty: skip_empty_chunk(configs) })
    }

    pub fn chunk_size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Chunk<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let group: Vec<_> = self.iter.by_ref().take(self.size).collect();
        let first = !self.started;
        self.started = true;
        if group.len() == self.size {
            Some(group)
        } else {
            self.done = true;
            if !group.is_empty() || (first && !self.skip_empty) { Some(group) } else { None }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        let pending_empty = if !self.started && !self.skip_empty { 1 } else { 0 };
        (lower.div_ceil(self.size).max(pending_empty), upper.map(|u| u.div_ceil(self.size).max(pending_empty)))
    }
}

impl<I: Iterator> FusedIterator for Chunk<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeqExt;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_chunk_with_tail() {
        let res: Vec<_> = (1..=5).chunk(2).unwrap().collect();
        assert_eq!(res, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_chunk_exact_multiple() {
        let res: Vec<_> = (1..=4).chunk(2).unwrap().collect();
        assert_eq!(res, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_chunk_empty_source() {
        let res: Vec<Vec<i32>> = std::iter::empty().chunk(3).unwrap().collect();
        assert_eq!(res, vec![Vec::<i32>::new()]);
        let res: Vec<Vec<i32>> = std::iter::empty().chunk_with(3, &[Config::SkipEmptyChunk]).unwrap().collect();
        assert!(res.is_empty());
    }

    #[test]
    fn test_chunk_zero_size() {
        assert_eq!(
            (1..3).chunk(0).unwrap_err(),
            SeqErr::InvalidArg {
                op: "chunk",
                arg: "size",
                value: "0".to_owned(),
                reason: "chunk size must be positive"
            }
        );
    }

    #[test]
    fn test_chunk_larger_than_source() {
        let mut chunk = (1..=3).chunk(10).unwrap();
        assert_eq!(chunk.chunk_size(), 10);
        assert_eq!(chunk.next(), Some(vec![1, 2, 3]));
        assert_eq!(chunk.next(), None);
        assert_eq!(chunk.next(), None);
    }

    #[test]
    fn test_chunk_infinite_source() {
        let res: Vec<_> = (0..).chunk(3).unwrap().take(2).collect();
        assert_eq!(res, vec![vec![0, 1, 2], vec![3, 4, 5]]);
    }

    #[test]
    fn test_chunk_size_hint() {
        assert_eq!((1..=5).chunk(2).unwrap().size_hint(), (3, Some(3)));
        assert_eq!(std::iter::empty::<u8>().chunk(2).unwrap().size_hint(), (1, Some(1)));
        let skip = std::iter::empty::<u8>().chunk_with(2, &[Config::SkipEmptyChunk]).unwrap();
        assert_eq!(skip.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_chunk_concat_rebuilds_source() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let len = rng.random_range(1..60);
            let size = rng.random_range(1..8);
            let source: Vec<u16> = (0..len).map(|_| rng.random()).collect();
            let groups: Vec<_> = source.iter().copied().chunk(size).unwrap().collect();
            let (last, init) = groups.split_last().unwrap();
            assert!(init.iter().all(|g| g.len() == size));
            assert!((1..=size).contains(&last.len()));
            assert_eq!(groups.concat(), source);
        }
    }
}
