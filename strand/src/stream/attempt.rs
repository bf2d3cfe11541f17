use strand_value::{Attempt, Failure};

use super::core::{Element, Stream};

impl<T: Element> Stream<T> {
    /// Apply a fallible `function` to every element, keeping each outcome.
    ///
    /// Errors and panics raised by `function` end up as failures in the
    /// resulting stream instead of propagating out of whoever forces it.
    pub fn map_attempt<R, E>(
        &self,
        function: impl Fn(&T) -> Result<R, E> + Send + Sync + 'static,
    ) -> Stream<Attempt<R>>
    where
        R: Element,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.map(move |item| Attempt::try_of(|| function(item)))
    }
}

impl<T: Element> Stream<Attempt<T>> {
    /// The values of the successful attempts, in order.
    pub fn successes(&self) -> Stream<T> {
        self.flat_map(|attempt: &Attempt<T>| attempt.clone().ok())
    }

    /// The failures, in order.
    pub fn failures(&self) -> Stream<Failure> {
        self.flat_map(|attempt: &Attempt<T>| attempt.clone().err())
    }
}
