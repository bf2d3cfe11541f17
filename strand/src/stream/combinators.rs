//! Combinators that build new streams without walking the receiver.
use std::sync::Arc;

use strand_memo::Memo;
use strand_value::Pair;

use super::conversion::IntoStream;
use super::core::{Element, Stream, Variant};
use super::polarity::Polarity;
use super::variant::{with_filter, with_flat_map, with_map, zip_streams, Derived};

type Generator<T> = Arc<dyn Fn() -> Stream<T> + Send + Sync>;

impl<T: Element> Stream<T> {
    /// This stream followed by `item`.
    pub fn append(&self, item: T) -> Stream<T> {
        self.append_with(move || Stream::cons(item.clone(), Stream::empty()))
    }

    /// This stream followed by `other`.
    pub fn append_stream(&self, other: Stream<T>) -> Stream<T> {
        self.append_with(move || other.clone())
    }

    /// This stream followed by the stream `generator` produces.
    ///
    /// The result is built one node at a time as it is walked, so this is
    /// cheap on an infinite receiver. Only the receiver's first element is
    /// computed up front. `generator` runs when the element after the
    /// receiver's last one is first asked for, never earlier, so the
    /// stream it returns may refer to the result of this call.
    pub fn append_with(
        &self,
        generator: impl Fn() -> Stream<T> + Send + Sync + 'static,
    ) -> Stream<T> {
        append_lazily(self.clone(), Arc::new(generator))
    }

    /// This stream followed by the stream held in a shared memo cell.
    pub fn append_memo(&self, memo: Arc<Memo<Stream<T>>>) -> Stream<T> {
        self.append_with(move || memo.force())
    }

    /// `item` followed by this stream.
    pub fn prepend(&self, item: T) -> Stream<T> {
        Stream::cons(item, self.clone())
    }

    /// `other` followed by this stream.
    pub fn prepend_stream(&self, other: &Stream<T>) -> Stream<T> {
        other.append_stream(self.clone())
    }

    /// The elements that satisfy `predicate`.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Stream<T> {
        with_filter(self.clone(), Arc::new(predicate), Polarity::Matching)
    }

    /// The elements that don't satisfy `predicate`.
    pub fn filter_not(&self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Stream<T> {
        with_filter(self.clone(), Arc::new(predicate), Polarity::NotMatching)
    }

    /// Apply `function` to every element.
    ///
    /// Each result is computed once, when it is first looked at.
    pub fn map<R: Element>(&self, function: impl Fn(&T) -> R + Send + Sync + 'static) -> Stream<R> {
        with_map(self.clone(), Arc::new(function))
    }

    /// Replace every element by the elements of `function(element)`, in
    /// order.
    ///
    /// `function` may return anything that converts into a stream,
    /// including a stream that is itself infinite.
    pub fn flat_map<R, I>(&self, function: impl Fn(&T) -> I + Send + Sync + 'static) -> Stream<R>
    where
        R: Element,
        I: IntoStream<R>,
    {
        with_flat_map(self.clone(), Arc::new(move |item: &T| function(item).into_stream()))
    }

    /// Pair up the elements of two streams by position.
    ///
    /// The result is as long as the shorter of the two.
    pub fn zip<U: Element>(&self, other: &Stream<U>) -> Stream<Pair<T, U>> {
        zip_streams(self.clone(), other.clone())
    }

    /// Pair every element with its zero-based position.
    pub fn zip_with_index(&self) -> Stream<Pair<T, usize>> {
        self.zip(&Stream::repeat(0, |i| i + 1))
    }
}

fn append_lazily<T: Element>(receiver: Stream<T>, generator: Generator<T>) -> Stream<T> {
    match receiver.head() {
        Some(head) => Stream::lazy_cons(head, move || {
            append_lazily(receiver.tail(), generator.clone())
        }),
        None => deferred(generator),
    }
}

fn deferred<T: Element>(generator: Generator<T>) -> Stream<T> {
    let generated = Arc::new(Memo::new(move || generator()));
    let head = Memo::new({
        let generated = generated.clone();
        move || generated.force().head()
    });
    let tail = Memo::new(move || generated.force().tail());
    Stream::from_variant(Variant::Appended(Arc::new(Derived::new(head, tail))))
}
