use crate::SeqRes;
use crate::config::Config;
use crate::op::{self, Chunk, Compact, DistinctBy, Each, EachWithIndex, Reject};
use std::hash::Hash;
use std::sync::atomic::AtomicBool;

/// 为所有迭代器提供的扩展操作。
///
/// 返回迭代器的操作都是惰性的，元素在被拉取时才会从源中取出并执行回调。
pub trait SeqExt: Iterator {
    /// 丢弃`pred`为`true`的元素。
    ///
    /// ```
    /// use rseq::SeqExt;
    ///
    /// let odd: Vec<_> = (1..=6).reject(|x| x % 2 == 0).collect();
    /// assert_eq!(odd, vec![1, 3, 5]);
    /// ```
    fn reject<P>(self, pred: P) -> Reject<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Reject::new(self, pred)
    }

    /// 按`size`个元素一组进行分组，最后一组可能不足`size`个。
    ///
    /// 空序列产生一个空分组；`size`为0时返回[`crate::SeqErr::InvalidArg`]。
    ///
    /// ```
    /// use rseq::SeqExt;
    ///
    /// let groups: Vec<_> = (1..=5).chunk(2).unwrap().collect();
    /// assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// ```
    fn chunk(self, size: usize) -> SeqRes<Chunk<Self>>
    where
        Self: Sized,
    {
        Chunk::new(self, size, &[])
    }

    /// 同[`SeqExt::chunk`]，可通过`configs`调整行为。
    fn chunk_with(self, size: usize, configs: &[Config]) -> SeqRes<Chunk<Self>>
    where
        Self: Sized,
    {
        Chunk::new(self, size, configs)
    }

    /// 在分组序列中查找第一个包含`target`的分组。
    ///
    /// ```
    /// use rseq::SeqExt;
    ///
    /// let groups = vec![vec![1, 2], vec![3, 4]];
    /// assert_eq!(groups.clone().into_iter().assoc(&3), Some(vec![3, 4]));
    /// assert_eq!(groups.into_iter().assoc(&9), None);
    /// ```
    fn assoc<T>(self, target: &T) -> Option<Self::Item>
    where
        Self: Sized,
        for<'a> &'a Self::Item: IntoIterator<Item = &'a T>,
        T: PartialEq + ?Sized,
    {
        op::assoc(self, target)
    }

    /// 去除`None`，保留`Some`中的值。
    fn compact<T>(self) -> Compact<Self>
    where
        Self: Sized + Iterator<Item = Option<T>>,
    {
        Compact::new(self)
    }

    /// 遍历`times`次，对每个元素执行`action`。
    ///
    /// 每一轮从克隆时的位置开始，因此需传入尚未推进过的迭代器才能从头遍历。
    ///
    /// ```
    /// use rseq::SeqExt;
    ///
    /// let mut seen = vec![];
    /// [1, 2, 3].into_iter().cycle_each(2, |x| seen.push(x));
    /// assert_eq!(seen, vec![1, 2, 3, 1, 2, 3]);
    /// ```
    fn cycle_each<F>(self, times: usize, action: F)
    where
        Self: Sized + Clone,
        F: FnMut(Self::Item),
    {
        op::cycle_each(self, times, action)
    }

    /// 无限循环遍历，直到`stop`被置为`true`，返回执行`action`的次数。
    ///
    /// 源为空时立即返回。
    fn cycle_each_until<F>(self, stop: &AtomicBool, action: F) -> usize
    where
        Self: Sized + Clone,
        F: FnMut(Self::Item),
    {
        op::cycle_each_until(self, stop, action)
    }

    /// 元素被拉取时执行`action`，并原样产出元素。
    fn each<F>(self, action: F) -> Each<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        Each::new(self, action)
    }

    /// 同[`SeqExt::each`]，`action`额外接收从0开始的序号。
    fn each_with_index<F>(self, action: F) -> EachWithIndex<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item, usize),
    {
        EachWithIndex::new(self, action)
    }

    /// 按`key`去重，保留每个键第一次出现的元素。
    ///
    /// ```
    /// use rseq::SeqExt;
    ///
    /// let res: Vec<_> = ["ab", "ac", "b"].into_iter().distinct_by(|s| s.len()).collect();
    /// assert_eq!(res, vec!["ab", "b"]);
    /// ```
    fn distinct_by<K, F>(self, key: F) -> DistinctBy<Self, F, K>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        K: Hash + Eq,
    {
        DistinctBy::new(self, key)
    }

    /// 以元素自身为键去重。
    #[allow(clippy::type_complexity)]
    fn distinct(self) -> DistinctBy<Self, fn(&Self::Item) -> Self::Item, Self::Item>
    where
        Self: Sized,
        Self::Item: Clone + Hash + Eq,
    {
        let key: fn(&Self::Item) -> Self::Item = <Self::Item as Clone>::clone;
        DistinctBy::new(self, key)
    }
}

impl<I: Iterator> SeqExt for I {}
