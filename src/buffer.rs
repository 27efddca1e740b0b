use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::Range;

use crate::error::ExtendibleArrayError;

/// Fixed-capacity run of slots, each either holding one element or empty.
///
/// The capacity is chosen at allocation time and never changes. A
/// zero-capacity buffer does not touch the allocator and stands in for an
/// absent buffer.
#[derive(Clone)]
pub(crate) struct SlotBuffer<T> {
    slots: Box<[Option<T>]>,
}

impl<T> SlotBuffer<T> {
    pub(crate) fn empty() -> Self {
        Self {
            slots: Vec::new().into_boxed_slice(),
        }
    }

    /// One empty slot: the starting `new` buffer, whose only slot is the
    /// sentinel position 0.
    pub(crate) fn sentinel() -> Self {
        Self {
            slots: alloc::vec![None].into_boxed_slice(),
        }
    }

    /// Allocates a buffer of `capacity` empty slots.
    ///
    /// # Errors
    ///
    /// Returns `ExtendibleArrayError::AllocationFailure` if the allocator
    /// refuses the request or the byte size overflows.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, ExtendibleArrayError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| ExtendibleArrayError::AllocationFailure { capacity })?;
        slots.resize_with(capacity, || None);

        // len == capacity, so this does not reallocate
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    #[must_use]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub(crate) fn get(&self, pos: usize) -> Option<&T> {
        self.slots.get(pos)?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        self.slots.get_mut(pos)?.as_mut()
    }

    /// Moves the element out of a slot, leaving it empty.
    pub(crate) fn take(&mut self, pos: usize) -> Option<T> {
        self.slots.get_mut(pos)?.take()
    }

    /// Raw access to a slot, used to move elements between buffers.
    #[allow(clippy::indexing_slicing)] // Positions come from cursors bounded by capacity
    pub(crate) fn slot_mut(&mut self, pos: usize) -> &mut Option<T> {
        &mut self.slots[pos]
    }

    /// Shifts the slots of `range` one position towards the front; the slot at
    /// `range.start` wraps around to `range.end - 1`.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn shift_down(&mut self, range: Range<usize>) {
        if range.len() > 1 {
            self.slots[range].rotate_left(1);
        }
    }

    /// Shifts the slots of `range` one position towards the back; the slot at
    /// `range.end - 1` wraps around to `range.start`.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn shift_up(&mut self, range: Range<usize>) {
        if range.len() > 1 {
            self.slots[range].rotate_right(1);
        }
    }

    pub(crate) fn slots(&self, range: Range<usize>) -> &[Option<T>] {
        self.slots.get(range).unwrap_or(&[])
    }

    pub(crate) fn slots_mut(&mut self, range: Range<usize>) -> &mut [Option<T>] {
        self.slots.get_mut(range).unwrap_or(&mut [])
    }

    pub(crate) fn into_slots(self) -> alloc::vec::IntoIter<Option<T>> {
        self.slots.into_vec().into_iter()
    }
}
