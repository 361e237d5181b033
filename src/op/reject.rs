use std::fmt;
use std::iter::FusedIterator;

/// 丢弃满足条件的元素，保留其余元素，见[`crate::SeqExt::reject`]。
#[derive(Clone)]
pub struct Reject<I, P> {
    iter: I,
    pred: P,
}

impl<I, P> Reject<I, P> {
    pub(crate) fn new(iter: I, pred: P) -> Self {
        Reject { iter, pred }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Reject<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reject").field("iter", &self.iter).finish()
    }
}

impl<I, P> Iterator for Reject<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let pred = &mut self.pred;
        self.iter.find(|item| !pred(item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> FusedIterator for Reject<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}
