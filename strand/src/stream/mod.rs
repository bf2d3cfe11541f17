/// A stream is a persistent, lazily evaluated sequence that may go on
/// forever. Nodes are shared between streams and compute their contents at
/// most once.
///
/// Combinators such as [`Stream::map`] and [`Stream::filter`] return a new
/// stream immediately without looking at the receiver. Terminal operations
/// such as [`Stream::take`] and [`Stream::fold_left_while`] walk it.
mod attempt;
mod builder;
mod combinators;
mod conversion;
mod core;
mod creation;
mod fold;
mod iter;
mod polarity;
mod render;
mod variant;

pub use builder::StreamBuilder;
pub use conversion::IntoStream;
pub use self::core::{Element, Stream};
pub use iter::Iter;
pub use polarity::Polarity;
pub use render::RenderOptions;
