use strand_memo::Memo;

use crate::stream::core::{unlink, Element, Stream, StreamCore};

/// A node whose head and tail are both known when it is built.
pub(crate) struct Cons<T> {
    head: T,
    tail: Stream<T>,
}

impl<T> Cons<T> {
    pub(crate) fn new(head: T, tail: Stream<T>) -> Self {
        Cons { head, tail }
    }

    pub(crate) fn take_tail(&mut self) -> Stream<T> {
        std::mem::take(&mut self.tail)
    }
}

impl<T> Drop for Cons<T> {
    fn drop(&mut self) {
        unlink(Some(self.take_tail()));
    }
}

impl<T: Element> StreamCore<T> for Cons<T> {
    #[inline]
    fn head(&self) -> Option<T> {
        Some(self.head.clone())
    }

    #[inline]
    fn tail(&self) -> Stream<T> {
        self.tail.clone()
    }

    #[inline]
    fn head_is_forced(&self) -> bool {
        true
    }

    #[inline]
    fn tail_is_forced(&self) -> bool {
        true
    }
}

/// A node with a known head whose tail is computed on first use.
pub(crate) struct LazyCons<T> {
    head: T,
    tail: Memo<Stream<T>>,
}

impl<T> LazyCons<T> {
    pub(crate) fn new(head: T, tail: Memo<Stream<T>>) -> Self {
        LazyCons { head, tail }
    }

    pub(crate) fn take_tail(&mut self) -> Option<Stream<T>> {
        self.tail.replace(Stream::empty())
    }
}

impl<T> Drop for LazyCons<T> {
    fn drop(&mut self) {
        unlink(self.take_tail());
    }
}

impl<T: Element> StreamCore<T> for LazyCons<T> {
    #[inline]
    fn head(&self) -> Option<T> {
        Some(self.head.clone())
    }

    #[inline]
    fn tail(&self) -> Stream<T> {
        self.tail.force()
    }

    #[inline]
    fn head_is_forced(&self) -> bool {
        true
    }

    #[inline]
    fn tail_is_forced(&self) -> bool {
        self.tail.is_forced()
    }
}
