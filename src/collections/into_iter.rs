//! Owning iterator for [`BoundedVec`](super::BoundedVec).

use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use crate::slot::Slot;

/// Yields the elements of a `BoundedVec` by value, front to back.
///
/// Elements not consumed by the time the iterator is dropped are dropped with it.
pub struct IntoIter<T, const N: usize> {
    slots: [Slot<T>; N],
    /// Live range is `[front, back)`.
    front: usize,
    back: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(super) fn new(slots: [Slot<T>; N], len: usize) -> Self {
        Self {
            slots,
            front: 0,
            back: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` are live.
        unsafe {
            slice::from_raw_parts(
                self.slots.as_ptr().add(self.front).cast::<T>(),
                self.back - self.front,
            )
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        // SAFETY: `index` was the first live slot and is no longer claimed.
        Some(unsafe { self.slots.get_unchecked_mut(index).take() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `back` was the last live slot and is no longer claimed.
        Some(unsafe { self.slots.get_unchecked_mut(self.back).take() })
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        self.front = back;
        // SAFETY: `[front, back)` were live and are no longer claimed.
        unsafe { Slot::destroy_all_rev(&mut self.slots[front..back]) };
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
