//! Unsafe, centralized operations on uninitialized storage.
//!
//! `Slot<T>` and `DualSlot<A, B>` keep their payloads in `MaybeUninit` / `ManuallyDrop`
//! storage. These helpers are the single place to audit:
//! - in-place construction (`ptr::write`)
//! - bitwise move-out (`ptr::read`)
//! - destruction (`drop_in_place`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! Whether a slot is live is never recorded by the slot itself. The owner
//! (`BoundedVec::len`, `Expected::state`) is the only source of truth and must be
//! updated so that it never claims a slot that is not live.

use core::{mem::MaybeUninit, ptr};

/// Interprets a live slot as `&T`.
///
/// # Safety
/// - `slot` must hold a live `T`.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is live.
    unsafe { slot.assume_init_ref() }
}

/// Interprets a live slot as `&mut T`.
///
/// # Safety
/// - `slot` must hold a live `T`.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is live and the borrow is exclusive.
    unsafe { slot.assume_init_mut() }
}

/// Bitwise-moves a live value out of a slot. The slot is vacant afterwards.
///
/// # Safety
/// - `slot` must hold a live `T`.
/// - The caller must stop treating the slot as live, or the value is dropped twice.
#[inline(always)]
pub(crate) unsafe fn read_ptr<T>(slot: *const MaybeUninit<T>) -> T {
    // SAFETY: caller asserts liveness + `ptr::read` contract.
    unsafe { ptr::read(slot.cast::<T>()) }
}

/// Constructs a value into a slot, overwriting its bytes.
///
/// # Safety
/// - The slot must be vacant; writing over a live value leaks it.
#[inline(always)]
pub(crate) unsafe fn write_ptr<T>(slot: *mut MaybeUninit<T>, value: T) {
    // SAFETY: caller upholds the vacancy contract.
    unsafe { ptr::write(slot.cast::<T>(), value) }
}

/// Drops a live value in place. The slot is vacant afterwards.
///
/// # Safety
/// - `slot` must hold a live `T`.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place_ptr<T>(slot: *mut MaybeUninit<T>) {
    // SAFETY: caller asserts liveness and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.cast::<T>()) }
}

/// Drops `len` live values starting at `first`, last to first.
///
/// If one destructor panics, the values below it are still dropped while unwinding.
///
/// # Safety
/// - `first..first + len` must all be live and exclusively owned by the caller.
/// - The caller must already have stopped claiming the range.
#[inline]
pub(crate) unsafe fn drop_range_rev<T>(first: *mut MaybeUninit<T>, len: usize) {
    let mut rest = RevDropGuard {
        first,
        remaining: len,
    };
    rest.drop_remaining();
}

/// Drops `[first, first + remaining)` in descending order, including on unwind.
struct RevDropGuard<T> {
    first: *mut MaybeUninit<T>,
    remaining: usize,
}

impl<T> RevDropGuard<T> {
    #[inline]
    fn drop_remaining(&mut self) {
        while self.remaining > 0 {
            // Shrink first so an unwinding guard never revisits the panicking slot.
            self.remaining -= 1;
            // SAFETY: slots below the old `remaining` are live and owned by the guard.
            unsafe { drop_in_place_ptr(self.first.add(self.remaining)) };
        }
    }
}

impl<T> Drop for RevDropGuard<T> {
    fn drop(&mut self) {
        self.drop_remaining();
    }
}
