//! # `slotted` - Allocation-free value types over manual storage slots
//!
//! Two leaf value types for code that cannot allocate or unwind as control flow:
//!
//! - [`BoundedVec<T, N>`]: a vector of at most `N` elements stored inline. It never
//!   allocates; pushing past `N` is a reported error, not a reallocation.
//! - [`Expected<T, E>`]: a tagged union holding a value, an error, or (only when
//!   defaulted or moved-from) nothing, in one overlapping region.
//!
//! ## Storage discipline
//!
//! Both are built on [`slot::Slot`] / [`slot::DualSlot`]: raw, correctly sized and
//! aligned storage that is constructed into and destroyed from explicitly. The owner
//! records which slots are live (a length, a discriminant) and keeps that record
//! consistent across every path:
//!
//! - growth constructs first and claims second; shrinking unclaims first and destroys second;
//! - a panicking constructor or `Clone` leaves no claimed-but-vacant slot;
//! - self-assignment, self-move and self-swap are identity-checked before anything
//!   is destroyed;
//! - every live object is dropped exactly once.
//!
//! ## Errors
//!
//! Precondition violations are reported as [`Error`] (`OutOfRange`, `Underflow`,
//! `CapacityExceeded`, `BadAccess`). A call that reports an error leaves the instance
//! exactly as it was. With the `tracing` feature each failure is also emitted as a
//! `debug` event.
//!
//! ## Example
//!
//! ```rust
//! use slotted::{BoundedVec, Error, Expected};
//!
//! let mut vec: BoundedVec<i32, 3> = BoundedVec::new();
//! for v in [10, 20, 30] {
//!     vec.push_back(v)?;
//! }
//! assert!(vec.is_full());
//! assert_eq!(vec.iter().sum::<i32>(), 60);
//! assert_eq!(vec.push_back(40), Err(Error::CapacityExceeded { capacity: 3 }));
//!
//! let parsed: Expected<i32, String> = Expected::make_error("err".to_string());
//! assert!(parsed.has_error());
//! assert!(parsed.value().is_err());
//! # Ok::<(), Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod collections;
pub mod error;
pub mod expected;
pub mod slot;

pub use collections::BoundedVec;
pub use error::{Error, Result};
pub use expected::{Expected, Member, State};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // `Slot<T>` is `repr(transparent)` over `MaybeUninit<T>`.
    assert!(mem::size_of::<slot::Slot<u64>>() == mem::size_of::<u64>());
    assert!(mem::align_of::<slot::Slot<u64>>() == mem::align_of::<u64>());

    // The dual slot overlaps its members rather than placing them side by side.
    assert!(mem::size_of::<slot::DualSlot<u32, u64>>() == mem::size_of::<u64>());

    // No hidden header: an empty-capacity vector is just its length.
    assert!(mem::size_of::<BoundedVec<u64, 0>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<BoundedVec<u8, 16>>() <= 16 + mem::size_of::<usize>());

    // One byte of discriminant on top of the overlapping storage, padded to alignment.
    assert!(mem::size_of::<Expected<u64, u32>>() == 2 * mem::size_of::<u64>());
};
