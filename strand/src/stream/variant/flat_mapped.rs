use std::sync::Arc;

use strand_memo::Memo;

use crate::stream::core::{Element, Stream, Variant};

use super::Derived;

pub(crate) type ExpandFunction<A, R> = Arc<dyn Fn(&A) -> Stream<R> + Send + Sync>;

/// Concatenate the expansions of every element of `upstream`.
///
/// The head is the head of the first non-empty expansion. Elements that
/// expand to nothing are skipped in a loop rather than by recursion, so long
/// runs of empty expansions don't grow the call stack.
pub(crate) fn with_flat_map<A: Element, R: Element>(
    upstream: Stream<A>,
    expand: ExpandFunction<A, R>,
) -> Stream<R> {
    if upstream.is_known_empty() {
        return Stream::empty();
    }
    let expansion = Arc::new(Memo::new(move || {
        let mut source = upstream.clone();
        while let Some(item) = source.head() {
            let expanded = expand(&item);
            if expanded.is_nonempty() {
                // upstream only moves on once this expansion runs out
                let expand = expand.clone();
                return expanded
                    .append_with(move || with_flat_map(source.tail(), expand.clone()));
            }
            source = source.tail();
        }
        Stream::empty()
    }));
    let head = Memo::new({
        let expansion = expansion.clone();
        move || expansion.force().head()
    });
    let tail = Memo::new(move || expansion.force().tail());
    Stream::from_variant(Variant::FlatMapped(Arc::new(Derived::new(head, tail))))
}
