use std::convert::identity;
use std::iter::FusedIterator;

/// 去除`None`，展开`Some`，见[`crate::SeqExt::compact`]。
#[derive(Debug, Clone)]
pub struct Compact<I> {
    iter: I,
}

impl<I> Compact<I> {
    pub(crate) fn new(iter: I) -> Self {
        Compact { iter }
    }
}

impl<I, T> Iterator for Compact<I>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.find_map(identity)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, T> FusedIterator for Compact<I> where I: FusedIterator<Item = Option<T>> {}
