use std::sync::{Arc, Weak};

use strand_memo::Memo;
use tracing::debug;

use super::core::{Element, Stream};

/// Accumulates items one at a time and turns them into a stream.
///
/// A builder is persistent: [`StreamBuilder::append`] returns a new builder
/// and leaves the receiver as it was, so builders can share their common
/// prefix. Each builder node records only the item appended and the node
/// before it. The stream is assembled the first time
/// [`StreamBuilder::build`] is called and remembered from then on.
pub struct StreamBuilder<T> {
    last: Option<Arc<BuilderNode<T>>>,
}

struct BuilderNode<T> {
    item: T,
    prior: Option<Arc<BuilderNode<T>>>,
    built: Memo<Stream<T>>,
}

impl<T> Clone for StreamBuilder<T> {
    fn clone(&self) -> Self {
        StreamBuilder {
            last: self.last.clone(),
        }
    }
}

impl<T> Default for StreamBuilder<T> {
    fn default() -> Self {
        StreamBuilder { last: None }
    }
}

impl<T: Element> StreamBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// A builder with `item` added after everything in this one.
    pub fn append(&self, item: T) -> Self {
        let prior = self.last.clone();
        let node = Arc::new_cyclic(|this: &Weak<BuilderNode<T>>| {
            let this = this.clone();
            BuilderNode {
                item,
                prior,
                built: Memo::new(move || match this.upgrade() {
                    Some(node) => node.assemble(),
                    None => Stream::empty(),
                }),
            }
        });
        StreamBuilder { last: Some(node) }
    }

    /// The stream of all appended items, in the order they were appended.
    pub fn build(&self) -> Stream<T> {
        match &self.last {
            Some(node) => node.built.force(),
            None => Stream::empty(),
        }
    }
}

impl<T: Element> BuilderNode<T> {
    fn assemble(&self) -> Stream<T> {
        // newest item first, so consing in this order puts the oldest in front
        let mut items = vec![self.item.clone()];
        let mut prior = self.prior.as_deref();
        while let Some(node) = prior {
            items.push(node.item.clone());
            prior = node.prior.as_deref();
        }
        debug!(items = items.len(), "assembling stream from builder");
        items
            .into_iter()
            .fold(Stream::empty(), |tail, head| Stream::cons(head, tail))
    }
}

impl<T> Drop for BuilderNode<T> {
    fn drop(&mut self) {
        let mut prior = self.prior.take();
        while let Some(node) = prior {
            prior = Arc::into_inner(node).and_then(|mut node| node.prior.take());
        }
    }
}

impl<T: Element> FromIterator<T> for StreamBuilder<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(StreamBuilder::new(), |builder, item| builder.append(item))
    }
}
