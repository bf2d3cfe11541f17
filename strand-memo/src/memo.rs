use std::cell::RefCell;
use std::convert::Infallible;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::ReentrantMutex;
use tracing::{debug, trace};

type Thunk<V, E> = Arc<dyn Fn() -> Result<V, E> + Send + Sync>;

struct Slot<V, E> {
    // released once a value is stored
    thunk: Option<Thunk<V, E>>,
    evaluating: bool,
}

/// A single-slot deferred computation that runs at most once.
///
/// The first successful [`Memo::force`] (or [`Memo::try_force`]) runs the
/// computation and fixes its result; later calls return that result without
/// running it again. Forcing is safe from any number of threads: exactly one
/// of them runs the computation while the others wait on a lock that belongs
/// to this cell only, then observe the same value.
///
/// Failures are never cached. If the computation returns an error or
/// panics, the cell stays unforced and the next force runs it again.
pub struct Memo<V, E = Infallible> {
    value: OnceLock<V>,
    slot: ReentrantMutex<RefCell<Slot<V, E>>>,
}

impl<V> Memo<V> {
    /// Create a memo cell from an infallible computation.
    pub fn new(f: impl Fn() -> V + Send + Sync + 'static) -> Self {
        Self::fallible(move || Ok(f()))
    }
}

impl<V: Clone> Memo<V> {
    /// Get the value, running the computation if this is the first force.
    pub fn force(&self) -> V {
        match self.try_force() {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl<V, E> Memo<V, E> {
    /// Create a memo cell from a computation that can fail.
    ///
    /// An `Err` is handed to the caller of [`Memo::try_force`] and leaves
    /// the cell unforced.
    pub fn fallible(f: impl Fn() -> Result<V, E> + Send + Sync + 'static) -> Self {
        Self {
            value: OnceLock::new(),
            slot: ReentrantMutex::new(RefCell::new(Slot {
                thunk: Some(Arc::new(f)),
                evaluating: false,
            })),
        }
    }

    /// Create a memo cell that is already forced to `value`.
    pub fn ready(value: V) -> Self {
        Self {
            value: OnceLock::from(value),
            slot: ReentrantMutex::new(RefCell::new(Slot {
                thunk: None,
                evaluating: false,
            })),
        }
    }

    /// Has a value been stored in this cell?
    ///
    /// This says nothing about what the value is: a cell holding
    /// `Option<T>` may well be forced to `None`.
    #[inline]
    pub fn is_forced(&self) -> bool {
        self.value.get().is_some()
    }

    /// Borrow the stored value without ever running the computation.
    #[inline]
    pub fn get(&self) -> Option<&V> {
        self.value.get()
    }

    /// Fix the cell to `value`, returning the value it held, if any.
    ///
    /// A pending computation is discarded, so the cell is forced afterwards
    /// and every later force returns `value`.
    pub fn replace(&mut self, value: V) -> Option<V> {
        self.slot.get_mut().get_mut().thunk = None;
        std::mem::replace(&mut self.value, OnceLock::from(value)).into_inner()
    }

    /// Consume the cell, returning the stored value, if any.
    pub fn into_inner(self) -> Option<V> {
        self.value.into_inner()
    }
}

impl<V: Clone, E> Memo<V, E> {
    /// The stored value if the cell has been forced, otherwise `None`.
    ///
    /// Never runs the computation.
    #[inline]
    pub fn peek(&self) -> Option<V> {
        self.value.get().cloned()
    }

    /// Get the value, running the computation if no value is stored yet.
    ///
    /// # Panics
    ///
    /// Panics if the computation forces this same cell (directly or through
    /// other cells); such a value is not well-defined. A panic raised by the
    /// computation itself propagates and leaves the cell unforced.
    pub fn try_force(&self) -> Result<V, E> {
        if let Some(value) = self.value.get() {
            return Ok(value.clone());
        }
        let guard = self.slot.lock();
        // another thread may have won the race while we waited on the lock
        if let Some(value) = self.value.get() {
            return Ok(value.clone());
        }
        let thunk = {
            let mut slot = guard.borrow_mut();
            if slot.evaluating {
                panic!("memo cell forced while computing its own value");
            }
            slot.evaluating = true;
            slot.thunk.clone()
        };
        let Some(thunk) = thunk else {
            unreachable!("memo cell has neither a value nor a computation");
        };
        let _evaluating = EvaluatingGuard { slot: &*guard };
        trace!("running memo cell computation");
        match thunk() {
            Ok(value) => {
                let value = self.value.get_or_init(|| value).clone();
                guard.borrow_mut().thunk = None;
                trace!("memo cell forced");
                Ok(value)
            }
            Err(error) => {
                debug!("memo cell computation failed, cell left unforced");
                Err(error)
            }
        }
    }
}

// Clears the evaluating flag on the way out, including when the computation
// unwinds.
struct EvaluatingGuard<'a, V, E> {
    slot: &'a RefCell<Slot<V, E>>,
}

impl<V, E> Drop for EvaluatingGuard<'_, V, E> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            debug!("memo cell computation panicked, cell left unforced");
        }
        self.slot.borrow_mut().evaluating = false;
    }
}

impl<V: fmt::Debug, E> fmt::Debug for Memo<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => f.debug_tuple("Memo").field(value).finish(),
            None => f.write_str("Memo(<unforced>)"),
        }
    }
}
