//! Small value types that the strand streams are built with: an ordered
//! [`Pair`], the [`Unit`] marker and [`Attempt`], which turns a computation
//! that may fail into a value.
mod attempt;
mod error;
mod pair;
mod unit;

pub use attempt::Attempt;
pub use error::{Failure, Result};
pub use pair::Pair;
pub use unit::{unit, Unit};
