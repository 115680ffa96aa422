//! Overlapping storage for one of two types.

use core::mem::ManuallyDrop;

use super::Slot;

/// Storage large enough for either an `A` or a `B`, never both.
///
/// The region is shared: constructing one member overwrites the bytes of the other,
/// so the owner must destroy (or move out) the live member first. Which member is
/// live is recorded by the owner, not by the slot.
pub union DualSlot<A, B> {
    first: ManuallyDrop<Slot<A>>,
    second: ManuallyDrop<Slot<B>>,
}

impl<A, B> DualSlot<A, B> {
    /// Creates vacant storage.
    #[inline(always)]
    pub const fn vacant() -> Self {
        Self {
            first: ManuallyDrop::new(Slot::vacant()),
        }
    }

    /// Constructs an `A` in place.
    ///
    /// # Safety
    /// Neither member may be live.
    #[inline(always)]
    pub unsafe fn construct_first(&mut self, value: A) -> &mut A {
        // SAFETY: every bit pattern is a valid `Slot<A>`; caller asserts vacancy.
        unsafe { (*self.first).construct(value) }
    }

    /// Constructs a `B` in place.
    ///
    /// # Safety
    /// Neither member may be live.
    #[inline(always)]
    pub unsafe fn construct_second(&mut self, value: B) -> &mut B {
        // SAFETY: as above.
        unsafe { (*self.second).construct(value) }
    }

    /// Shared reference to the `A` member.
    ///
    /// # Safety
    /// The `A` member must be live.
    #[inline(always)]
    pub unsafe fn first(&self) -> &A {
        // SAFETY: caller asserts the `A` member is live.
        unsafe { self.first.get() }
    }

    /// Exclusive reference to the `A` member.
    ///
    /// # Safety
    /// The `A` member must be live.
    #[inline(always)]
    pub unsafe fn first_mut(&mut self) -> &mut A {
        // SAFETY: caller asserts the `A` member is live; `&mut self` makes the borrow exclusive.
        unsafe { (*self.first).get_mut() }
    }

    /// Shared reference to the `B` member.
    ///
    /// # Safety
    /// The `B` member must be live.
    #[inline(always)]
    pub unsafe fn second(&self) -> &B {
        // SAFETY: caller asserts the `B` member is live.
        unsafe { self.second.get() }
    }

    /// Exclusive reference to the `B` member.
    ///
    /// # Safety
    /// The `B` member must be live.
    #[inline(always)]
    pub unsafe fn second_mut(&mut self) -> &mut B {
        // SAFETY: caller asserts the `B` member is live; `&mut self` makes the borrow exclusive.
        unsafe { (*self.second).get_mut() }
    }

    /// Moves the live `A` out, leaving the storage vacant.
    ///
    /// # Safety
    /// The `A` member must be live; the caller must treat the storage as vacant afterwards.
    #[inline(always)]
    pub unsafe fn take_first(&mut self) -> A {
        // SAFETY: caller asserts the `A` member is live and stops claiming it.
        unsafe { (*self.first).take() }
    }

    /// Moves the live `B` out, leaving the storage vacant.
    ///
    /// # Safety
    /// The `B` member must be live; the caller must treat the storage as vacant afterwards.
    #[inline(always)]
    pub unsafe fn take_second(&mut self) -> B {
        // SAFETY: caller asserts the `B` member is live and stops claiming it.
        unsafe { (*self.second).take() }
    }

    /// Drops the live `A` in place.
    ///
    /// # Safety
    /// The `A` member must be live and not already destroyed.
    #[inline(always)]
    pub unsafe fn destroy_first(&mut self) {
        // SAFETY: caller asserts the `A` member is live and not yet destroyed.
        unsafe { (*self.first).destroy() }
    }

    /// Drops the live `B` in place.
    ///
    /// # Safety
    /// The `B` member must be live and not already destroyed.
    #[inline(always)]
    pub unsafe fn destroy_second(&mut self) {
        // SAFETY: caller asserts the `B` member is live and not yet destroyed.
        unsafe { (*self.second).destroy() }
    }
}

impl<A, B> Default for DualSlot<A, B> {
    fn default() -> Self {
        Self::vacant()
    }
}

impl<A, B> core::fmt::Debug for DualSlot<A, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("DualSlot { .. }")
    }
}
