use std::sync::Arc;

use strand_memo::Memo;

use crate::stream::core::{Element, Stream, Variant};
use crate::stream::polarity::Polarity;

use super::Derived;

pub(crate) type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// The elements of `upstream` for which `predicate` agrees with `polarity`.
///
/// Both cells share one search for the first matching element; the tail is
/// the filtered view of whatever follows that match.
pub(crate) fn with_filter<T: Element>(
    upstream: Stream<T>,
    predicate: Predicate<T>,
    polarity: Polarity,
) -> Stream<T> {
    if upstream.is_known_empty() {
        return Stream::empty();
    }
    let first_match = Arc::new(Memo::new({
        let predicate = predicate.clone();
        move || upstream.drop_while(|item| !polarity.accepts(predicate(item)))
    }));
    let head = Memo::new({
        let first_match = first_match.clone();
        move || first_match.force().head()
    });
    let tail = Memo::new(move || {
        let matched = first_match.force();
        if matched.is_empty() {
            Stream::empty()
        } else {
            with_filter(matched.tail(), predicate.clone(), polarity)
        }
    });
    Stream::from_variant(Variant::Filtered(Arc::new(Derived::new(head, tail))))
}
