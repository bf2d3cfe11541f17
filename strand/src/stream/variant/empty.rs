use crate::stream::core::{Element, Stream, StreamCore};

/// The terminal node. Its tail is itself.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Empty;

impl<T: Element> StreamCore<T> for Empty {
    #[inline]
    fn head(&self) -> Option<T> {
        None
    }

    #[inline]
    fn tail(&self) -> Stream<T> {
        Stream::empty()
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
