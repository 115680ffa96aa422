//! Error type shared by [`BoundedVec`](crate::BoundedVec) and [`Expected`](crate::Expected).
//!
//! Every variant is a synchronous precondition violation reported at the offending
//! call. None of them is retried, and the instance that reported it is left exactly
//! as it was before the call.

use core::fmt;

use crate::expected::{Member, State};

/// Failures reported by the containers in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Checked access at `index` on a container holding `len` elements.
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Length at the time of the call.
        len: usize,
    },
    /// Removal from an empty container.
    Underflow,
    /// Insertion into a container already holding `capacity` elements.
    CapacityExceeded {
        /// Fixed capacity of the container.
        capacity: usize,
    },
    /// Access to a member of an `Expected` that is not live.
    BadAccess {
        /// The member the caller asked for.
        requested: Member,
        /// What the instance actually held.
        active: State,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Error::Underflow => f.write_str("no element left to pop"),
            Error::CapacityExceeded { capacity } => {
                write!(f, "no room to emplace: capacity {capacity} reached")
            }
            Error::BadAccess { requested, active } => {
                write!(f, "bad expected access: requested {requested}, holds {active}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::OutOfRange { index: 5, len: 2 }.to_string(),
            "index 5 out of range for length 2"
        );
        assert_eq!(Error::Underflow.to_string(), "no element left to pop");
        assert_eq!(
            Error::CapacityExceeded { capacity: 3 }.to_string(),
            "no room to emplace: capacity 3 reached"
        );
        assert_eq!(
            Error::BadAccess {
                requested: Member::Value,
                active: State::Error
            }
            .to_string(),
            "bad expected access: requested value, holds error"
        );
    }
}
