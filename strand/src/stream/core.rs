use std::sync::Arc;

use super::variant::{Cons, Derived, Empty, LazyCons};

/// The bound on stream elements.
///
/// Elements are handed out by value, and stream nodes are shared between
/// threads, so elements must be cheaply cloneable and thread-safe.
pub trait Element: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Element for T {}

/// The interface every stream variant implements.
pub(crate) trait StreamCore<T> {
    /// The first element, or `None` if the stream is empty.
    fn head(&self) -> Option<T>;

    /// Everything after the first element.
    fn tail(&self) -> Stream<T>;

    /// Would `head` return without computing anything?
    fn head_is_forced(&self) -> bool;

    /// Would `tail` return without computing anything?
    fn tail_is_forced(&self) -> bool;
}

pub(crate) type SharedCore<T> = Arc<dyn StreamCore<T> + Send + Sync>;

pub(crate) enum Variant<T> {
    Empty,
    Cons(Arc<Cons<T>>),
    LazyCons(Arc<LazyCons<T>>),
    Filtered(Arc<Derived<T>>),
    Mapped(Arc<Derived<T>>),
    FlatMapped(Arc<Derived<T>>),
    Appended(Arc<Derived<T>>),
    Zipped(SharedCore<T>),
}

/// A persistent, lazily evaluated, possibly infinite sequence.
///
/// A stream is a first element (its head) plus another stream (its tail).
/// Derived streams (filtered, mapped, flat-mapped, zipped or appended) only
/// compute an element when it is asked for, and remember it afterwards:
/// every node computes its head and tail at most once, no matter how many
/// streams share it or how many threads look at it.
///
/// Cloning a stream is cheap and shares all nodes, so forcing an element
/// through one clone makes it visible through every other.
pub struct Stream<T> {
    pub(crate) variant: Variant<T>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        let variant = match &self.variant {
            Variant::Empty => Variant::Empty,
            Variant::Cons(node) => Variant::Cons(node.clone()),
            Variant::LazyCons(node) => Variant::LazyCons(node.clone()),
            Variant::Filtered(node) => Variant::Filtered(node.clone()),
            Variant::Mapped(node) => Variant::Mapped(node.clone()),
            Variant::FlatMapped(node) => Variant::FlatMapped(node.clone()),
            Variant::Appended(node) => Variant::Appended(node.clone()),
            Variant::Zipped(node) => Variant::Zipped(node.clone()),
        };
        Stream { variant }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Stream::empty()
    }
}

impl<T> Stream<T> {
    pub(crate) fn from_variant(variant: Variant<T>) -> Self {
        Stream { variant }
    }

    /// Detach the memoized tail of a node nobody else refers to.
    ///
    /// Dropping a long chain node by node would recurse once per node;
    /// [`unlink`] uses this to walk the chain in a loop instead.
    fn into_tail(self) -> Option<Stream<T>> {
        match self.variant {
            Variant::Empty | Variant::Zipped(_) => None,
            Variant::Cons(node) => Arc::into_inner(node).map(|mut node| node.take_tail()),
            Variant::LazyCons(node) => Arc::into_inner(node).and_then(|mut node| node.take_tail()),
            Variant::Filtered(node)
            | Variant::Mapped(node)
            | Variant::FlatMapped(node)
            | Variant::Appended(node) => Arc::into_inner(node).and_then(|mut node| node.take_tail()),
        }
    }
}

pub(crate) fn unlink<T>(mut next: Option<Stream<T>>) {
    while let Some(stream) = next {
        next = stream.into_tail();
    }
}

impl<T: Element> Stream<T> {
    fn core(&self) -> &(dyn StreamCore<T> + Send + Sync) {
        match &self.variant {
            Variant::Empty => &Empty,
            Variant::Cons(node) => node.as_ref(),
            Variant::LazyCons(node) => node.as_ref(),
            Variant::Filtered(node)
            | Variant::Mapped(node)
            | Variant::FlatMapped(node)
            | Variant::Appended(node) => node.as_ref(),
            Variant::Zipped(node) => node.as_ref(),
        }
    }

    /// The first element, or `None` if the stream is empty.
    ///
    /// This may compute the element, and anything upstream it depends on.
    #[inline]
    pub fn head(&self) -> Option<T> {
        self.core().head()
    }

    /// The stream after the first element. The tail of the empty stream is
    /// the empty stream.
    #[inline]
    pub fn tail(&self) -> Stream<T> {
        self.core().tail()
    }

    /// Whether [`Stream::head`] would return without computing anything.
    ///
    /// Only meant for display and debugging.
    #[inline]
    pub fn head_is_forced(&self) -> bool {
        self.core().head_is_forced()
    }

    /// Whether [`Stream::tail`] would return without computing anything.
    ///
    /// Only meant for display and debugging.
    #[inline]
    pub fn tail_is_forced(&self) -> bool {
        self.core().tail_is_forced()
    }

    /// Check whether the stream is empty. Forces the head.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head().is_none()
    }

    /// Check whether the stream has at least one element. Forces the head.
    #[inline]
    pub fn is_nonempty(&self) -> bool {
        !self.is_empty()
    }

    /// Is this stream known to be empty without computing anything?
    ///
    /// True for the empty stream itself, and for a node whose head has
    /// already been forced and turned out absent.
    pub(crate) fn is_known_empty(&self) -> bool {
        match &self.variant {
            Variant::Empty => true,
            Variant::Cons(_) | Variant::LazyCons(_) => false,
            Variant::Filtered(node)
            | Variant::Mapped(node)
            | Variant::FlatMapped(node)
            | Variant::Appended(node) => node.head_is_absent(),
            Variant::Zipped(node) => node.head_is_forced() && node.head().is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tail_is_empty() {
        let empty: Stream<i32> = Stream::empty();
        assert!(empty.is_empty());
        assert!(empty.tail().is_empty());
        assert!(empty.head_is_forced());
        assert!(empty.tail_is_forced());
    }

    #[test]
    fn test_known_empty_does_not_force() {
        let stream = Stream::from(vec![1, 2, 3]).filter(|x| *x > 10);
        assert!(!stream.is_known_empty());
        assert!(!stream.head_is_forced());
        assert!(stream.is_empty());
        assert!(stream.is_known_empty());
    }

    #[test]
    fn test_drop_long_chain() {
        let stream = Stream::from((0..200_000).collect::<Vec<i64>>());
        assert_eq!(stream.len(), 200_000);
        drop(stream);
    }

    #[test]
    fn test_drop_long_forced_lazy_chain() {
        let naturals = Stream::starting_at(0);
        assert_eq!(naturals.drop(200_000).head(), Some(200_000));
        drop(naturals);
    }

    #[test]
    fn test_drop_long_forced_mapped_chain() {
        let doubled = Stream::starting_at(0).map(|x| x * 2);
        assert_eq!(doubled.drop(100_000).head(), Some(200_000));
        drop(doubled);
    }
}
