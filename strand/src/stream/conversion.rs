use super::builder::StreamBuilder;
use super::core::{Element, Stream};

/// Conversion into a [`Stream`].
///
/// This is what [`Stream::flat_map`] accepts from its function. A stream
/// converts into itself without being walked, so it may be infinite.
pub trait IntoStream<T> {
    fn into_stream(self) -> Stream<T>;
}

impl<T> IntoStream<T> for Stream<T> {
    #[inline]
    fn into_stream(self) -> Stream<T> {
        self
    }
}

impl<T: Element> IntoStream<T> for Vec<T> {
    fn into_stream(self) -> Stream<T> {
        self.into()
    }
}

impl<T: Element, const N: usize> IntoStream<T> for [T; N] {
    fn into_stream(self) -> Stream<T> {
        self.into()
    }
}

impl<T: Element> IntoStream<T> for Option<T> {
    fn into_stream(self) -> Stream<T> {
        self.into()
    }
}

impl<T: Element> IntoStream<T> for StreamBuilder<T> {
    fn into_stream(self) -> Stream<T> {
        self.build()
    }
}
