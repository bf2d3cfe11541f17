//! Persistent, lazily evaluated and possibly infinite streams.
//!
//! A [`Stream`] is a head element plus a tail stream, where both may be
//! computed on demand. Every derived node remembers what it computed, so
//! walking a stream twice, or from two threads, does the work once.
//!
//! ```
//! use strand::Stream;
//!
//! let squares = Stream::starting_at(1).map(|x| x * x);
//! assert_eq!(squares.take(4), vec![1, 4, 9, 16]);
//! assert!(squares.exists(|x| *x > 1000));
//! ```
pub mod stream;

pub use stream::{Element, IntoStream, Iter, Polarity, RenderOptions, Stream, StreamBuilder};
pub use strand_memo::Memo;
pub use strand_value::{unit, Attempt, Failure, Pair, Unit};
