//! Fixed-capacity collections built on [`Slot`](crate::slot::Slot) storage.

pub mod bounded_vec;
pub mod into_iter;

pub use bounded_vec::BoundedVec;
pub use into_iter::IntoIter;
