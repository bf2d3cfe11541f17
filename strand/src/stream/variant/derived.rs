use strand_memo::Memo;

use crate::stream::core::{unlink, Element, Stream, StreamCore};

/// A node whose head and tail are each computed on first use.
///
/// Filtered, mapped and flat-mapped streams all have this shape; they
/// differ only in the computations they put into the two cells.
pub(crate) struct Derived<T> {
    head: Memo<Option<T>>,
    tail: Memo<Stream<T>>,
}

impl<T> Derived<T> {
    pub(crate) fn new(head: Memo<Option<T>>, tail: Memo<Stream<T>>) -> Self {
        Derived { head, tail }
    }

    pub(crate) fn take_tail(&mut self) -> Option<Stream<T>> {
        self.tail.replace(Stream::empty())
    }

    /// The head was forced and there was no element.
    pub(crate) fn head_is_absent(&self) -> bool {
        matches!(self.head.get(), Some(None))
    }
}

impl<T> Drop for Derived<T> {
    fn drop(&mut self) {
        unlink(self.take_tail());
    }
}

impl<T: Element> StreamCore<T> for Derived<T> {
    #[inline]
    fn head(&self) -> Option<T> {
        self.head.force()
    }

    #[inline]
    fn tail(&self) -> Stream<T> {
        self.tail.force()
    }

    #[inline]
    fn head_is_forced(&self) -> bool {
        self.head.is_forced()
    }

    #[inline]
    fn tail_is_forced(&self) -> bool {
        self.tail.is_forced()
    }
}
