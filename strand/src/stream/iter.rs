use super::core::{Element, Stream};

/// A cursor over the elements of a stream.
///
/// Iterating never changes the stream itself; only the cursor moves. The
/// cursor steps to the tail lazily, when the next element is requested, so
/// stopping after an element never forces the tail behind it.
pub struct Iter<T> {
    current: Stream<T>,
    advance: bool,
}

impl<T> Iter<T> {
    pub(crate) fn new(stream: Stream<T>) -> Self {
        Iter {
            current: stream,
            advance: false,
        }
    }
}

impl<T: Element> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.advance {
            self.current = self.current.tail();
        }
        let head = self.current.head();
        self.advance = head.is_some();
        head
    }
}

impl<T: Element> Stream<T> {
    /// Iterate over the elements, starting from the head.
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self.clone())
    }
}

impl<T: Element> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        Iter::new(self)
    }
}

impl<T: Element> IntoIterator for &Stream<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}
