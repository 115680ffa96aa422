//! Manual storage slots.
//!
//! A slot is raw storage sized and aligned for one value that is *not* live until
//! it is explicitly constructed. The slot never tracks its own liveness: the owning
//! container records which slots are live (a length, a discriminant) and must only
//! call the `unsafe` accessors on slots it knows to be live.
//!
//! - [`Slot<T>`]: storage for one `T`.
//! - [`DualSlot<A, B>`]: one overlapping region sized for either an `A` or a `B`.
//!
//! Neither type ever drops its payload on its own; owners are responsible for
//! calling [`Slot::destroy`] / [`DualSlot::destroy_first`] / [`DualSlot::destroy_second`].

pub(crate) mod raw;
mod dual;

pub use dual::DualSlot;

use core::mem::MaybeUninit;

/// Uninitialized storage for exactly one `T`.
///
/// `Slot<T>` has the same size and alignment as `T`.
#[repr(transparent)]
pub struct Slot<T> {
    cell: MaybeUninit<T>,
}

impl<T> Slot<T> {
    /// Creates a vacant slot.
    #[inline(always)]
    pub const fn vacant() -> Self {
        Self {
            cell: MaybeUninit::uninit(),
        }
    }

    /// Creates an array of `N` vacant slots.
    #[inline(always)]
    pub const fn vacant_array<const N: usize>() -> [Self; N] {
        [const { Self::vacant() }; N]
    }

    /// Constructs `value` in place and returns a reference to it.
    ///
    /// # Safety
    /// The slot must be vacant. Constructing over a live value leaks it.
    #[inline(always)]
    pub unsafe fn construct(&mut self, value: T) -> &mut T {
        // SAFETY: caller asserts the slot is vacant.
        unsafe {
            raw::write_ptr(&mut self.cell, value);
            raw::assume_init_mut(&mut self.cell)
        }
    }

    /// Drops the live value in place, leaving the slot vacant.
    ///
    /// # Safety
    /// The slot must be live, and must not be destroyed twice.
    #[inline(always)]
    pub unsafe fn destroy(&mut self) {
        // SAFETY: caller asserts liveness and drop uniqueness.
        unsafe { raw::drop_in_place_ptr(&mut self.cell) }
    }

    /// Moves the live value out, leaving the slot vacant.
    ///
    /// # Safety
    /// The slot must be live. The caller must treat it as vacant afterwards.
    #[inline(always)]
    pub unsafe fn take(&mut self) -> T {
        // SAFETY: caller asserts liveness and relinquishes the slot.
        unsafe { raw::read_ptr(&self.cell) }
    }

    /// Returns a shared reference to the live value.
    ///
    /// # Safety
    /// The slot must be live.
    #[inline(always)]
    pub unsafe fn get(&self) -> &T {
        // SAFETY: caller asserts liveness.
        unsafe { raw::assume_init_ref(&self.cell) }
    }

    /// Returns an exclusive reference to the live value.
    ///
    /// # Safety
    /// The slot must be live.
    #[inline(always)]
    pub unsafe fn get_mut(&mut self) -> &mut T {
        // SAFETY: caller asserts liveness.
        unsafe { raw::assume_init_mut(&mut self.cell) }
    }

    /// Drops every value in `slots`, last to first.
    ///
    /// # Safety
    /// Every slot in `slots` must be live, and the caller must already have stopped
    /// claiming them.
    #[inline]
    pub unsafe fn destroy_all_rev(slots: &mut [Self]) {
        // `Slot<T>` is `repr(transparent)` over `MaybeUninit<T>`.
        let first = slots.as_mut_ptr().cast::<MaybeUninit<T>>();
        // SAFETY: caller asserts the whole range is live.
        unsafe { raw::drop_range_rev(first, slots.len()) }
    }

    /// Raw pointer to the storage, valid whether or not the slot is live.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.cell.as_ptr()
    }

    /// Raw mutable pointer to the storage.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.cell.as_mut_ptr()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::vacant()
    }
}

impl<T> core::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Liveness is owned by the container, so the payload is never printed.
        f.write_str("Slot { .. }")
    }
}
