//! `Expected` — a tagged union holding a success value or a failure value.
//!
//! Both members share one [`DualSlot`] region; a [`State`] discriminant records which
//! one (if any) is live. The discriminant is updated on every transition so that it
//! never names a member that is not live:
//!
//! | from            | via                                          | to      |
//! |-----------------|----------------------------------------------|---------|
//! | any             | `make_value`, `emplace_value`, `From<T>`     | `Value` |
//! | any             | `make_error`, `emplace_error`                | `Error` |
//! | `Value`/`Error` | `take`, `take_value`/`take_error`, moved-from | `None`  |
//!
//! Replacing a member destroys the old one before the new one is constructed. If the
//! new member's constructor panics the instance settles at [`State::None`].

mod state;

pub use state::{Member, State};

use core::hash::{Hash, Hasher};
use core::{fmt, mem, ptr};

use crate::error::{Error, Result};
use crate::slot::DualSlot;
use crate::trace::trace_failure;

/// Either a value `T`, an error `E`, or (only when defaulted or moved-from) nothing.
pub struct Expected<T, E> {
    storage: DualSlot<T, E>,
    state: State,
}

impl<T, E> Expected<T, E> {
    /// Creates an instance holding nothing.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: DualSlot::vacant(),
            state: State::None,
        }
    }

    /// Creates an instance holding `value`.
    #[inline]
    pub fn make_value(value: T) -> Self {
        Self::make_value_with(|| value)
    }

    /// Creates an instance holding the value returned by `make`.
    #[inline]
    pub fn make_value_with<F>(make: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let mut out = Self::new();
        out.emplace_value_with(make);
        out
    }

    /// Creates an instance holding `error`.
    #[inline]
    pub fn make_error(error: E) -> Self {
        Self::make_error_with(|| error)
    }

    /// Creates an instance holding the error returned by `make`.
    #[inline]
    pub fn make_error_with<F>(make: F) -> Self
    where
        F: FnOnce() -> E,
    {
        let mut out = Self::new();
        out.emplace_error_with(make);
        out
    }

    /// The current discriminant.
    #[inline(always)]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Returns `true` if a value is live.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        matches!(self.state, State::Value)
    }

    /// Returns `true` if an error is live.
    #[inline(always)]
    pub const fn has_error(&self) -> bool {
        matches!(self.state, State::Error)
    }

    /// Shared access to the value.
    ///
    /// # Errors
    /// [`Error::BadAccess`] if no value is live.
    #[inline]
    pub fn value(&self) -> Result<&T> {
        self.check(Member::Value)?;
        // SAFETY: the value is live.
        Ok(unsafe { self.storage.first() })
    }

    /// Exclusive access to the value.
    ///
    /// # Errors
    /// [`Error::BadAccess`] if no value is live.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T> {
        self.check(Member::Value)?;
        // SAFETY: the value is live.
        Ok(unsafe { self.storage.first_mut() })
    }

    /// Moves the value out and leaves the instance holding nothing.
    ///
    /// # Errors
    /// [`Error::BadAccess`] if no value is live; the instance is unchanged.
    pub fn take_value(&mut self) -> Result<T> {
        self.check(Member::Value)?;
        self.state = State::None;
        // SAFETY: the value was live and is no longer claimed.
        Ok(unsafe { self.storage.take_first() })
    }

    /// Consumes the instance and returns its value.
    ///
    /// # Errors
    /// [`Error::BadAccess`] if no value is live. Whatever was live is dropped.
    pub fn into_value(mut self) -> Result<T> {
        self.take_value()
    }

    /// Shared access to the error.
    ///
    /// # Errors
    /// [`Error::BadAccess`] if no error is live.
    #[inline]
    pub fn error(&self) -> Result<&E> {
        self.check(Member::Error)?;
        // SAFETY: the error is live.
        Ok(unsafe { self.storage.second() })
    }

    /// Exclusive access to the error.
    ///
    /// # Errors
    /// [`Error::BadAccess`] if no error is live.
    #[inline]
    pub fn error_mut(&mut self) -> Result<&mut E> {
        self.check(Member::Error)?;
        // SAFETY: the error is live.
        Ok(unsafe { self.storage.second_mut() })
    }

    /// Moves the error out and leaves the instance holding nothing.
    ///
    /// # Errors
    /// [`Error::BadAccess`] if no error is live; the instance is unchanged.
    pub fn take_error(&mut self) -> Result<E> {
        self.check(Member::Error)?;
        self.state = State::None;
        // SAFETY: the error was live and is no longer claimed.
        Ok(unsafe { self.storage.take_second() })
    }

    /// Consumes the instance and returns its error.
    ///
    /// # Errors
    /// [`Error::BadAccess`] if no error is live. Whatever was live is dropped.
    pub fn into_error(mut self) -> Result<E> {
        self.take_error()
    }

    /// Destroys whatever is live and constructs `value` in its place.
    #[inline]
    pub fn emplace_value(&mut self, value: T) -> &mut T {
        self.emplace_value_with(|| value)
    }

    /// Destroys whatever is live, then constructs the value returned by `make`.
    ///
    /// If `make` panics the instance is left holding nothing.
    pub fn emplace_value_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.destroy();
        let value = make();
        // SAFETY: `destroy` left the storage vacant.
        let slot = unsafe { self.storage.construct_first(value) };
        self.state = State::Value;
        slot
    }

    /// Destroys whatever is live and constructs `error` in its place.
    #[inline]
    pub fn emplace_error(&mut self, error: E) -> &mut E {
        self.emplace_error_with(|| error)
    }

    /// Destroys whatever is live, then constructs the error returned by `make`.
    ///
    /// If `make` panics the instance is left holding nothing.
    pub fn emplace_error_with<F>(&mut self, make: F) -> &mut E
    where
        F: FnOnce() -> E,
    {
        self.destroy();
        let error = make();
        // SAFETY: `destroy` left the storage vacant.
        let slot = unsafe { self.storage.construct_second(error) };
        self.state = State::Error;
        slot
    }

    /// Moves the live member (if any) into a new instance, leaving `self` holding nothing.
    #[must_use = "the moved member is dropped if the returned instance is discarded"]
    pub fn take(&mut self) -> Self {
        let mut out = Self::new();
        out.transfer_from(self);
        out
    }

    /// Replaces `self` with the contents of `source`, leaving `source` holding nothing.
    /// Moving an instance into itself does nothing.
    pub fn move_from(&mut self, source: &mut Self) {
        if ptr::eq(self, source) {
            return;
        }
        self.destroy();
        self.transfer_from(source);
    }

    /// Exchanges the full state of `self` and `other` through a temporary.
    /// Swapping an instance with itself does nothing.
    pub fn swap(&mut self, other: &mut Self) {
        if ptr::eq(self, other) {
            return;
        }
        let mut tmp = other.take();
        other.move_from(self);
        self.move_from(&mut tmp);
    }

    /// Borrows the live member as a `Result`, or `None` if nothing is live.
    pub fn as_result(&self) -> Option<core::result::Result<&T, &E>> {
        // SAFETY: each arm reads only the member named by the discriminant.
        unsafe {
            match self.state {
                State::None => None,
                State::Value => Some(Ok(self.storage.first())),
                State::Error => Some(Err(self.storage.second())),
            }
        }
    }

    /// Converts into a `Result`, or `None` if nothing is live.
    pub fn into_result(mut self) -> Option<core::result::Result<T, E>> {
        // SAFETY: each arm moves out only the member named by the discriminant,
        // after the discriminant has been cleared.
        unsafe {
            match mem::replace(&mut self.state, State::None) {
                State::None => None,
                State::Value => Some(Ok(self.storage.take_first())),
                State::Error => Some(Err(self.storage.take_second())),
            }
        }
    }

    #[inline]
    fn check(&self, requested: Member) -> Result<()> {
        if self.state.holds(requested) {
            Ok(())
        } else {
            trace_failure!(%requested, active = %self.state, "bad expected access");
            Err(Error::BadAccess {
                requested,
                active: self.state,
            })
        }
    }

    /// Drops the live member, if any. The discriminant is cleared first.
    fn destroy(&mut self) {
        // SAFETY: each arm drops only the member named by the old discriminant,
        // which no longer claims it.
        unsafe {
            match mem::replace(&mut self.state, State::None) {
                State::None => {}
                State::Value => self.storage.destroy_first(),
                State::Error => self.storage.destroy_second(),
            }
        }
    }

    /// Moves `source`'s live member into a vacant `self`.
    fn transfer_from(&mut self, source: &mut Self) {
        debug_assert_eq!(self.state, State::None);
        let state = mem::replace(&mut source.state, State::None);
        // SAFETY: `source` held the member named by `state` and no longer claims it;
        // `self` is vacant.
        unsafe {
            match state {
                State::None => {}
                State::Value => {
                    self.storage.construct_first(source.storage.take_first());
                }
                State::Error => {
                    self.storage.construct_second(source.storage.take_second());
                }
            }
        }
        self.state = state;
    }
}

impl<T, E> Drop for Expected<T, E> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<T, E> Default for Expected<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-argument construction always produces a value.
impl<T, E> From<T> for Expected<T, E> {
    fn from(value: T) -> Self {
        Self::make_value(value)
    }
}

impl<T, E> From<core::result::Result<T, E>> for Expected<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::make_value(value),
            Err(error) => Self::make_error(error),
        }
    }
}

impl<T: Clone, E: Clone> Clone for Expected<T, E> {
    fn clone(&self) -> Self {
        match self.as_result() {
            None => Self::new(),
            Some(Ok(value)) => Self::make_value_with(|| value.clone()),
            Some(Err(error)) => Self::make_error_with(|| error.clone()),
        }
    }

    /// Clones `source` into a temporary first, so a panicking `Clone` leaves `self`
    /// untouched.
    fn clone_from(&mut self, source: &Self) {
        if ptr::eq(self, source) {
            return;
        }
        let mut copy = source.clone();
        self.move_from(&mut copy);
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Expected<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_result() {
            None => f.write_str("None"),
            Some(Ok(value)) => f.debug_tuple("Value").field(value).finish(),
            Some(Err(error)) => f.debug_tuple("Error").field(error).finish(),
        }
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Expected<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.as_result() == other.as_result()
    }
}

impl<T: Eq, E: Eq> Eq for Expected<T, E> {}

impl<T: Hash, E: Hash> Hash for Expected<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_result().hash(state);
    }
}
