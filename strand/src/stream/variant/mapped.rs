use std::sync::Arc;

use strand_memo::Memo;

use crate::stream::core::{Element, Stream, Variant};

use super::Derived;

pub(crate) type MapFunction<A, R> = Arc<dyn Fn(&A) -> R + Send + Sync>;

pub(crate) fn with_map<A: Element, R: Element>(
    upstream: Stream<A>,
    function: MapFunction<A, R>,
) -> Stream<R> {
    if upstream.is_known_empty() {
        return Stream::empty();
    }
    let head = Memo::new({
        let upstream = upstream.clone();
        let function = function.clone();
        move || upstream.head().map(|item| function(&item))
    });
    let tail = Memo::new(move || {
        if upstream.is_empty() {
            Stream::empty()
        } else {
            with_map(upstream.tail(), function.clone())
        }
    });
    Stream::from_variant(Variant::Mapped(Arc::new(Derived::new(head, tail))))
}
