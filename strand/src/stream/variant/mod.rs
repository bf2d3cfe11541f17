mod cons;
mod derived;
mod empty;
mod filtered;
mod flat_mapped;
mod mapped;
mod zipped;

pub(crate) use cons::{Cons, LazyCons};
pub(crate) use derived::Derived;
pub(crate) use empty::Empty;
pub(crate) use filtered::with_filter;
pub(crate) use flat_mapped::with_flat_map;
pub(crate) use mapped::with_map;
pub(crate) use zipped::zip_streams;
