//! Everything that walks a stream eagerly.
//!
//! Streams may be infinite, so every walk here is bounded by a continuation
//! predicate through [`Stream::fold_left_while`] (or by a count), never by
//! running out of elements. Operations documented as unbounded only
//! terminate on finite streams.
use strand_value::{unit, Unit};

use super::core::{Element, Stream};
use super::polarity::Polarity;
use super::variant::with_filter;

impl<T: Element> Stream<T> {
    /// Left fold that stops as soon as `proceed` rejects the accumulator and
    /// the current element, or the stream ends.
    ///
    /// This terminates on an infinite stream only if `proceed` eventually
    /// rejects.
    pub fn fold_left_while<R>(
        &self,
        initial: R,
        mut proceed: impl FnMut(&R, &T) -> bool,
        mut step: impl FnMut(R, T) -> R,
    ) -> R {
        let mut result = initial;
        let mut current = self.clone();
        while let Some(head) = current.head() {
            if !proceed(&result, &head) {
                break;
            }
            result = step(result, head);
            current = current.tail();
        }
        result
    }

    /// Left fold over every element. Does not terminate on an infinite
    /// stream.
    pub fn fold_left<R>(&self, initial: R, step: impl FnMut(R, T) -> R) -> R {
        self.fold_left_while(initial, |_, _| true, step)
    }

    /// The number of elements. Does not terminate on an infinite stream.
    pub fn len(&self) -> usize {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Skip the first `count` elements.
    ///
    /// Unlike the other combinators this is eager: it forces up to `count`
    /// nodes right away, stopping early if the stream runs out.
    pub fn drop(&self, count: usize) -> Stream<T> {
        let mut result = self.clone();
        for _ in 0..count {
            if result.is_empty() {
                break;
            }
            result = result.tail();
        }
        result
    }

    /// The stream from the first element that doesn't satisfy `predicate`.
    pub fn drop_while(&self, predicate: impl FnMut(&T) -> bool) -> Stream<T> {
        self.drop_while_if(predicate, Polarity::Matching)
    }

    /// The stream from the first element that satisfies `predicate`.
    pub fn drop_while_not(&self, predicate: impl FnMut(&T) -> bool) -> Stream<T> {
        self.drop_while_if(predicate, Polarity::NotMatching)
    }

    fn drop_while_if(
        &self,
        mut predicate: impl FnMut(&T) -> bool,
        polarity: Polarity,
    ) -> Stream<T> {
        self.fold_left_while(
            self.clone(),
            |_, item| polarity.accepts(predicate(item)),
            |rest, _| rest.tail(),
        )
    }

    /// Is there an element that satisfies `predicate`?
    ///
    /// Stops at the first such element, so this terminates on an infinite
    /// stream as long as one exists.
    pub fn exists(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.exists_if(predicate, Polarity::Matching)
    }

    /// Is there an element that does not satisfy `predicate`?
    pub fn exists_not(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.exists_if(predicate, Polarity::NotMatching)
    }

    fn exists_if(&self, mut predicate: impl FnMut(&T) -> bool, polarity: Polarity) -> bool {
        self.fold_left_while(
            false,
            |found, _| !found,
            |_, item| polarity.accepts(predicate(&item)),
        )
    }

    /// Do all elements satisfy `predicate`? True for the empty stream.
    ///
    /// Stops at the first counter-example.
    pub fn for_all(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.fold_left_while(true, |holds, _| *holds, |_, item| predicate(&item))
    }

    /// Run `consumer` on every element. Does not terminate on an infinite
    /// stream.
    pub fn for_each(&self, mut consumer: impl FnMut(T)) -> Unit {
        self.fold_left(unit(), Unit::from_bi_consumer(move |_: Unit, item: T| consumer(item)))
    }

    /// Run `consumer` on elements while they satisfy `predicate`, returning
    /// how many were consumed.
    pub fn for_each_while(
        &self,
        predicate: impl FnMut(&T) -> bool,
        consumer: impl FnMut(T),
    ) -> usize {
        self.for_each_while_if(predicate, consumer, Polarity::Matching)
    }

    /// Run `consumer` on elements until one satisfies `predicate`, returning
    /// how many were consumed.
    pub fn for_each_while_not(
        &self,
        predicate: impl FnMut(&T) -> bool,
        consumer: impl FnMut(T),
    ) -> usize {
        self.for_each_while_if(predicate, consumer, Polarity::NotMatching)
    }

    fn for_each_while_if(
        &self,
        mut predicate: impl FnMut(&T) -> bool,
        mut consumer: impl FnMut(T),
        polarity: Polarity,
    ) -> usize {
        self.fold_left_while(
            0,
            |_, item| polarity.accepts(predicate(item)),
            |count, item| {
                consumer(item);
                count + 1
            },
        )
    }

    /// The first `count` elements, or all of them if there are fewer.
    ///
    /// Forces exactly the nodes it returns: the tail of the last returned
    /// element is left alone.
    pub fn take(&self, count: usize) -> Vec<T> {
        self.iter().take(count).collect()
    }

    /// The longest prefix whose elements satisfy `predicate`.
    pub fn take_while(&self, predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        self.take_while_if(predicate, Polarity::Matching)
    }

    /// The longest prefix whose elements don't satisfy `predicate`.
    pub fn take_while_not(&self, predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        self.take_while_if(predicate, Polarity::NotMatching)
    }

    fn take_while_if(&self, mut predicate: impl FnMut(&T) -> bool, polarity: Polarity) -> Vec<T> {
        self.fold_left_while(
            Vec::new(),
            |_, item| polarity.accepts(predicate(item)),
            |mut taken, item| {
                taken.push(item);
                taken
            },
        )
    }

    /// The first element that satisfies `predicate`.
    pub fn first(&self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Option<T> {
        self.nth(0, predicate)
    }

    /// The first element that does not satisfy `predicate`.
    pub fn first_not(&self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Option<T> {
        self.nth_not(0, predicate)
    }

    /// The element at zero-based position `n` among those satisfying
    /// `predicate`.
    ///
    /// `None` if a finite stream has too few matches. On an infinite stream
    /// with too few matches this does not return.
    pub fn nth(&self, n: usize, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Option<T> {
        self.nth_with(n, Polarity::Matching, predicate)
    }

    /// The element at zero-based position `n` among those not satisfying
    /// `predicate`.
    pub fn nth_not(
        &self,
        n: usize,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Option<T> {
        self.nth_with(n, Polarity::NotMatching, predicate)
    }

    /// The element at zero-based position `n` among those selected by
    /// `predicate` under `polarity`.
    pub fn nth_with(
        &self,
        n: usize,
        polarity: Polarity,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Option<T> {
        with_filter(self.clone(), std::sync::Arc::new(predicate), polarity)
            .drop(n)
            .head()
    }

    /// Do the two streams have the same length and equal elements at every
    /// position?
    pub fn corresponds<U>(&self, other: &Stream<U>) -> bool
    where
        U: Element,
        T: PartialEq<U>,
    {
        self.corresponds_by(other, |a, b| a == b)
    }

    /// Do the two streams have the same length, with `relation` holding for
    /// the elements at every position?
    ///
    /// Walks both streams in step; a stream that runs out before the other
    /// makes the answer false.
    pub fn corresponds_by<U: Element>(
        &self,
        other: &Stream<U>,
        mut relation: impl FnMut(&T, &U) -> bool,
    ) -> bool {
        let mut a = self.clone();
        let mut b = other.clone();
        loop {
            match (a.head(), b.head()) {
                (None, None) => return true,
                (Some(x), Some(y)) => {
                    if !relation(&x, &y) {
                        return false;
                    }
                }
                _ => return false,
            }
            a = a.tail();
            b = b.tail();
        }
    }
}
