//! Discriminant types for [`Expected`](super::Expected).

use core::fmt;

/// Which member of an `Expected` is currently live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum State {
    /// Nothing is live: freshly defaulted or moved-from.
    #[default]
    None = 0,
    /// The success value is live.
    Value = 1,
    /// The failure value is live.
    Error = 2,
}

/// A member an accessor asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Member {
    /// The success value.
    Value,
    /// The failure value.
    Error,
}

impl State {
    /// Returns `true` if `member` is the live one.
    #[inline]
    pub const fn holds(self, member: Member) -> bool {
        matches!(
            (self, member),
            (State::Value, Member::Value) | (State::Error, Member::Error)
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            State::None => "none",
            State::Value => "value",
            State::Error => "error",
        })
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Member::Value => "value",
            Member::Error => "error",
        })
    }
}
