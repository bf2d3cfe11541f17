/// Whether an operation is looking for elements that satisfy a predicate or
/// for elements that don't.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Elements for which the predicate returns `true`.
    Matching,
    /// Elements for which the predicate returns `false`.
    NotMatching,
}

impl Polarity {
    /// Does a predicate outcome select the element under this polarity?
    #[inline]
    pub fn accepts(self, outcome: bool) -> bool {
        match self {
            Polarity::Matching => outcome,
            Polarity::NotMatching => !outcome,
        }
    }
}
