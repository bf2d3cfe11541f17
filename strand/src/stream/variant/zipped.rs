use std::sync::Arc;

use strand_value::Pair;

use crate::stream::core::{Element, Stream, StreamCore, Variant};

/// Pairs of elements at the same position in two streams.
///
/// Nothing is memoized here: head and tail are derived from the two
/// upstream nodes on every call, and those memoize their own cells.
struct Zipped<A, B> {
    a: Stream<A>,
    b: Stream<B>,
}

impl<A: Element, B: Element> StreamCore<Pair<A, B>> for Zipped<A, B> {
    fn head(&self) -> Option<Pair<A, B>> {
        let a = self.a.head()?;
        let b = self.b.head()?;
        Some(Pair::new(a, b))
    }

    fn tail(&self) -> Stream<Pair<A, B>> {
        zip_streams(self.a.tail(), self.b.tail())
    }

    fn head_is_forced(&self) -> bool {
        self.a.head_is_forced() && self.b.head_is_forced()
    }

    fn tail_is_forced(&self) -> bool {
        self.a.tail_is_forced() && self.b.tail_is_forced()
    }
}

pub(crate) fn zip_streams<A: Element, B: Element>(a: Stream<A>, b: Stream<B>) -> Stream<Pair<A, B>> {
    if a.is_known_empty() || b.is_known_empty() {
        return Stream::empty();
    }
    Stream::from_variant(Variant::Zipped(Arc::new(Zipped { a, b })))
}
