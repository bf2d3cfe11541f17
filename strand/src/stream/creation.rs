use std::sync::Arc;

use ibig::IBig;
use strand_memo::Memo;

use super::core::{Element, Stream, Variant};
use super::variant::{Cons, LazyCons};

type StepFunction<T> = Arc<dyn Fn(&T) -> T + Send + Sync>;

impl<T> Stream<T> {
    /// The empty stream.
    ///
    /// All empty streams are the same stateless sentinel; building one never
    /// allocates.
    #[inline]
    pub fn empty() -> Self {
        Stream::from_variant(Variant::Empty)
    }
}

impl<T: Element> Stream<T> {
    /// A stream with a known head in front of an existing stream.
    pub fn cons(head: T, tail: Stream<T>) -> Self {
        Stream::from_variant(Variant::Cons(Arc::new(Cons::new(head, tail))))
    }

    /// A stream with a known head and a tail that is generated the first
    /// time it is needed.
    pub fn lazy_cons(head: T, tail: impl Fn() -> Stream<T> + Send + Sync + 'static) -> Self {
        Stream::from_variant(Variant::LazyCons(Arc::new(LazyCons::new(
            head,
            Memo::new(tail),
        ))))
    }

    /// The infinite stream `initial`, `step(initial)`, `step(step(initial))`
    /// and so on.
    ///
    /// Each element is computed when the tail before it is first forced, and
    /// then kept in its own node.
    pub fn repeat(initial: T, step: impl Fn(&T) -> T + Send + Sync + 'static) -> Self {
        repeat_with(initial, Arc::new(step))
    }
}

fn repeat_with<T: Element>(initial: T, step: StepFunction<T>) -> Stream<T> {
    let current = initial.clone();
    Stream::lazy_cons(initial, move || repeat_with(step(&current), step.clone()))
}

impl Stream<i64> {
    /// All integers from `first` upwards.
    pub fn starting_at(first: i64) -> Self {
        Stream::repeat(first, |i| i + 1)
    }
}

impl Stream<IBig> {
    /// All integers from `first` upwards, without an upper bound.
    pub fn starting_at_big(first: IBig) -> Self {
        Stream::repeat(first, |i| i + IBig::from(1u8))
    }
}

// streams are built back to front so each node is complete when it is made
impl<T: Element> From<Vec<T>> for Stream<T> {
    fn from(items: Vec<T>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(Stream::empty(), |tail, head| Stream::cons(head, tail))
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Stream<T> {
    fn from(items: [T; N]) -> Self {
        Vec::from(items).into()
    }
}

impl<T: Element> From<Option<T>> for Stream<T> {
    fn from(item: Option<T>) -> Self {
        match item {
            Some(item) => Stream::cons(item, Stream::empty()),
            None => Stream::empty(),
        }
    }
}

impl<T: Element> FromIterator<T> for Stream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}
