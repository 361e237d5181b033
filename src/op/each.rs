use std::fmt;
use std::iter::FusedIterator;

/// 惰性地对每个元素执行回调，并原样产出元素，见[`crate::SeqExt::each`]。
///
/// 回调在元素被拉取时执行，未迭代时不会执行。
#[derive(Clone)]
pub struct Each<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Each<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Each { iter, f }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Each<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Each").field("iter", &self.iter).finish()
    }
}

impl<I, F> Iterator for Each<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        (self.f)(&item);
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> FusedIterator for Each<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item),
{
}

/// 同[`Each`]，回调额外接收从0开始的序号。
#[derive(Clone)]
pub struct EachWithIndex<I, F> {
    iter: I,
    f: F,
    index: usize,
}

impl<I, F> EachWithIndex<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        EachWithIndex { iter, f, index: 0 }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for EachWithIndex<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EachWithIndex").field("iter", &self.iter).field("index", &self.index).finish()
    }
}

impl<I, F> Iterator for EachWithIndex<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize),
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        (self.f)(&item, self.index);
        self.index += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, F> FusedIterator for EachWithIndex<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item, usize),
{
}
