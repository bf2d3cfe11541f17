//! A thread-safe, at-most-once deferred computation.
//!
//! [`Memo`] is the building block for lazily evaluated data structures: it
//! holds a computation that is run the first time its value is requested,
//! after which the value is fixed.
mod memo;

pub use memo::Memo;
