use std::fmt;

/// The marker for "no meaningful value".
///
/// Adapting a side effect into a function returning `Unit` lets the
/// value-returning combinators drive side effects too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

/// The unit value.
#[inline]
pub fn unit() -> Unit {
    Unit
}

impl Unit {
    /// Adapt a side effect without arguments.
    pub fn from_fn(mut f: impl FnMut()) -> impl FnMut() -> Unit {
        move || {
            f();
            Unit
        }
    }

    /// Adapt a side effect consuming one argument.
    pub fn from_consumer<A>(mut f: impl FnMut(A)) -> impl FnMut(A) -> Unit {
        move |a| {
            f(a);
            Unit
        }
    }

    /// Adapt a side effect consuming two arguments.
    pub fn from_bi_consumer<A, B>(mut f: impl FnMut(A, B)) -> impl FnMut(A, B) -> Unit {
        move |a, b| {
            f(a, b);
            Unit
        }
    }
}

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}
