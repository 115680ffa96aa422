//! `BoundedVec` — a fixed-capacity vector that never allocates.
//!
//! Elements live in an inline array of [`Slot`]s. The first `len` slots are live and
//! contiguous, the rest are vacant. Every size change constructs or destroys exactly
//! the slots crossing the boundary:
//! - growth constructs at index `len`, then increments `len`;
//! - shrinking decrements `len`, then destroys the slot at the new `len`.
//!
//! Because `len` is only advanced after a construction completes, a panicking
//! constructor or `Clone` never leaves a claimed-but-vacant slot behind, and drop
//! never sees a slot twice.
//!
//! Failures (`OutOfRange`, `Underflow`, `CapacityExceeded`) are reported through
//! [`Result`](crate::Result) and leave the vector untouched.

use core::borrow::{Borrow, BorrowMut};
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};
use core::{fmt, ptr, slice};

use crate::error::{Error, Result};
use crate::slot::Slot;
use crate::trace::trace_failure;

use super::into_iter::IntoIter;

/// A vector holding at most `N` elements in inline storage.
pub struct BoundedVec<T, const N: usize> {
    slots: [Slot<T>; N],
    len: usize,
}

impl<T, const N: usize> BoundedVec<T, N> {
    /// Fixed capacity of every `BoundedVec<T, N>`.
    pub const CAPACITY: usize = N;

    /// Creates an empty vector. No element is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Slot::vacant_array(),
            len: 0,
        }
    }

    /// Fixed capacity, always `N`.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of live elements.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no element is live.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len() == N`.
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Number of further elements that fit.
    #[inline(always)]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Pointer to the first slot.
    ///
    /// Only the first `len()` elements behind it are live. Any size-changing call
    /// invalidates pointers obtained earlier.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.slots.as_ptr().cast::<T>()
    }

    /// Mutable pointer to the first slot.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr().cast::<T>()
    }

    /// The live elements as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` are live and `Slot<T>` has the layout of `T`.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, with exclusive access through `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    /// Caller must ensure `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: caller asserts `index < len`, so the slot is live.
        unsafe { self.slots.get_unchecked(index).get() }
    }

    /// Returns the element at `index` mutably without bounds checking.
    ///
    /// # Safety
    /// Caller must ensure `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: caller asserts `index < len`.
        unsafe { self.slots.get_unchecked_mut(index).get_mut() }
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len()`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        // SAFETY: checked above.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len()`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        // SAFETY: checked above.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Constructs a new last element from `make` directly into its slot.
    ///
    /// `make` is only called once the vector is known to have room. If it panics,
    /// the vector is unchanged.
    ///
    /// # Errors
    /// [`Error::CapacityExceeded`] if the vector is full.
    #[inline]
    pub fn emplace_back<F>(&mut self, make: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        if self.is_full() {
            trace_failure!(capacity = N, "emplace on full bounded vector");
            return Err(Error::CapacityExceeded { capacity: N });
        }
        // SAFETY: not full, so slot `len` exists and is vacant.
        Ok(unsafe { self.push_unchecked(make()) })
    }

    /// Appends `value`.
    ///
    /// On failure `value` is dropped and the vector is unchanged.
    ///
    /// # Errors
    /// [`Error::CapacityExceeded`] if the vector is full.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<&mut T> {
        self.emplace_back(|| value)
    }

    /// Removes the last element and hands it to the caller.
    ///
    /// # Errors
    /// [`Error::Underflow`] if the vector is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            trace_failure!("pop on empty bounded vector");
            return Err(Error::Underflow);
        }
        self.len -= 1;
        // SAFETY: slot `len` was the last live slot and is no longer claimed.
        Ok(unsafe { self.slots.get_unchecked_mut(self.len).take() })
    }

    /// Destroys every element, last to first.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Destroys the elements at `[new_len, len)`, last to first. No-op if
    /// `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            // Unclaim before destroying so a panicking destructor cannot cause a second drop.
            self.len -= 1;
            // SAFETY: slot `len` was live and is no longer claimed.
            unsafe { self.slots.get_unchecked_mut(self.len).destroy() };
        }
    }

    /// Moves every element into a new vector, leaving `self` empty.
    ///
    /// Elements are transferred slot by slot in ascending order.
    #[must_use = "the moved elements are dropped if the returned vector is discarded"]
    pub fn take(&mut self) -> Self {
        let mut out = Self::new();
        out.transfer_from(self);
        out
    }

    /// Replaces the contents of `self` with the elements of `source`, leaving
    /// `source` empty. Moving a vector into itself does nothing.
    pub fn move_from(&mut self, source: &mut Self) {
        if ptr::eq(self, source) {
            return;
        }
        self.clear();
        self.transfer_from(source);
    }

    /// Builds a vector from `iter`.
    ///
    /// # Errors
    /// [`Error::CapacityExceeded`] if `iter` yields more than `N` items. Items
    /// collected so far are dropped.
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut out = Self::new();
        out.try_extend(iter)?;
        Ok(out)
    }

    /// Appends every item of `iter`.
    ///
    /// # Errors
    /// [`Error::CapacityExceeded`] if the items do not fit. The vector is rolled back
    /// to its previous length; consumed items are dropped.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.len;
        for item in iter {
            if let Err(err) = self.push_back(item) {
                self.truncate(start);
                return Err(err);
            }
        }
        Ok(())
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            trace_failure!(index, len = self.len, "checked access out of range");
            Err(Error::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// # Safety
    /// `len < N`.
    #[inline(always)]
    unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < N);
        // SAFETY: caller asserts room; slot `len` is vacant.
        let slot = unsafe { self.slots.get_unchecked_mut(self.len) };
        let value = unsafe { slot.construct(value) };
        self.len += 1;
        value
    }

    /// Moves `source`'s elements onto the end of an empty `self`.
    fn transfer_from(&mut self, source: &mut Self) {
        debug_assert!(self.is_empty());
        let count = source.len;
        source.len = 0;
        for i in 0..count {
            // SAFETY: `i < count <= N`; source slot `i` was live and is no longer
            // claimed, destination slot `i` is vacant because `self` was empty.
            unsafe {
                let value = source.slots.get_unchecked_mut(i).take();
                self.slots.get_unchecked_mut(i).construct(value);
            }
            self.len = i + 1;
        }
    }

    pub(super) fn into_parts(self) -> ([Slot<T>; N], usize) {
        let this = core::mem::ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so ownership of the slots moves to the caller.
        let slots = unsafe { ptr::read(&this.slots) };
        (slots, this.len)
    }
}

impl<T, const N: usize> Drop for BoundedVec<T, N> {
    fn drop(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: `[0, len)` were live and are no longer claimed.
        unsafe { Slot::destroy_all_rev(&mut self.slots[..len]) };
    }
}

impl<T, const N: usize> Default for BoundedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for BoundedVec<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for item in self {
            // SAFETY: `out` never holds more than `self.len <= N` elements.
            unsafe { out.push_unchecked(item.clone()) };
        }
        out
    }

    fn clone_from(&mut self, source: &Self) {
        if ptr::eq(self, source) {
            return;
        }
        self.clear();
        for item in source {
            // SAFETY: as in `clone`.
            unsafe { self.push_unchecked(item.clone()) };
        }
    }
}

impl<T, const N: usize> Deref for BoundedVec<T, N> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for BoundedVec<T, N> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for BoundedVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> AsMut<[T]> for BoundedVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Borrow<[T]> for BoundedVec<T, N> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> BorrowMut<[T]> for BoundedVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<BoundedVec<T, M>> for BoundedVec<T, N> {
    fn eq(&self, other: &BoundedVec<T, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for BoundedVec<T, N> {}

impl<T: PartialEq, const N: usize> PartialEq<[T]> for BoundedVec<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<[T; M]> for BoundedVec<T, N> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash, const N: usize> Hash for BoundedVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, const N: usize, const M: usize> TryFrom<[T; M]> for BoundedVec<T, N> {
    type Error = Error;

    /// Moves the array's elements in, in order.
    ///
    /// Fails up front with [`Error::CapacityExceeded`] if `M > N`.
    fn try_from(array: [T; M]) -> Result<Self> {
        if M > N {
            trace_failure!(capacity = N, len = M, "array does not fit bounded vector");
            return Err(Error::CapacityExceeded { capacity: N });
        }
        let mut out = Self::new();
        for item in array {
            // SAFETY: at most `M <= N` pushes.
            unsafe { out.push_unchecked(item) };
        }
        Ok(out)
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for BoundedVec<T, N> {
    type Error = Error;

    /// Clones the slice's elements in, in order.
    ///
    /// Fails up front with [`Error::CapacityExceeded`] if the slice is longer than `N`.
    fn try_from(items: &[T]) -> Result<Self> {
        if items.len() > N {
            trace_failure!(capacity = N, len = items.len(), "slice does not fit bounded vector");
            return Err(Error::CapacityExceeded { capacity: N });
        }
        let mut out = Self::new();
        for item in items {
            // SAFETY: at most `items.len() <= N` pushes.
            unsafe { out.push_unchecked(item.clone()) };
        }
        Ok(out)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut BoundedVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for BoundedVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        let (slots, len) = self.into_parts();
        IntoIter::new(slots, len)
    }
}
