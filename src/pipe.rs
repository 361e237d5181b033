use crate::SeqRes;
use crate::config::Config;
use crate::ext::SeqExt;
use std::fmt;
use std::hash::Hash;

/// 类型擦除的惰性流水线，可在运行时逐步组装操作。
pub struct Pipe<'a, T> {
    iter: Box<dyn Iterator<Item = T> + 'a>,
}

impl<T> fmt::Debug for Pipe<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipe").field("size_hint", &self.iter.size_hint()).finish()
    }
}

impl<T> Iterator for Pipe<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T: 'a> Pipe<'a, T> {
    pub fn new(iter: impl IntoIterator<Item = T> + 'a) -> Pipe<'a, T> {
        Pipe { iter: Box::new(iter.into_iter()) }
    }

    pub fn op_map<U: 'a>(self, f: impl FnMut(T) -> U + 'a) -> Pipe<'a, U> {
        Pipe { iter: Box::new(self.map(f)) }
    }

    pub fn op_filter(self, f: impl FnMut(&T) -> bool + 'a) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.filter(f)) }
    }

    pub fn op_inspect(self, f: impl FnMut(&T) + 'a) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.inspect(f)) }
    }

    pub fn op_reject(self, f: impl FnMut(&T) -> bool + 'a) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.reject(f)) }
    }

    pub fn op_each(self, f: impl FnMut(&T) + 'a) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.each(f)) }
    }

    pub fn op_each_with_index(self, f: impl FnMut(&T, usize) + 'a) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.each_with_index(f)) }
    }

    pub fn op_distinct_by<K: Hash + Eq + 'a>(self, f: impl FnMut(&T) -> K + 'a) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.distinct_by(f)) }
    }

    pub fn op_chunk(self, size: usize, configs: &[Config]) -> SeqRes<Pipe<'a, Vec<T>>> {
        Ok(Pipe { iter: Box::new(self.chunk_with(size, configs)?) })
    }
}

impl<'a, T: 'a> Pipe<'a, Option<T>> {
    pub fn op_compact(self) -> Pipe<'a, T> {
        Pipe { iter: Box::new(self.compact()) }
    }
}
