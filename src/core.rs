use core::hash::{Hash, Hasher};
use core::{fmt, mem};

use tracing::trace;

use crate::buffer::SlotBuffer;
use crate::error::ExtendibleArrayError;
use crate::iter::{Iter, IterMut};

/// A random-access array with worst-case O(1) push, pop and indexing.
///
/// Storage is split between two slot buffers. `new` is twice as large as
/// `old`; elements migrate from `old` to `new` one at a time, one per push,
/// so no single push ever copies the whole array.
///
/// Public index `i` lives at internal position `i + 1`. Position 0 is a
/// sentinel slot that never holds an element, which lets the empty array
/// and the very first push follow the same arithmetic as every other state.
///
/// Positions below `seam` live in `old`, positions in `seam..end` live in
/// `new`. The cursors always satisfy `seam + end == new.capacity()`: a push
/// lowers `seam` by one and raises `end` by one, a removal does the reverse.
#[derive(Clone)]
pub struct ExtendibleArray<T> {
    old: SlotBuffer<T>,
    new: SlotBuffer<T>,
    /// First position resident in `new`; the "shadow" cursor plus one.
    seam: usize,
    /// First free position in `new`.
    end: usize,
}

/// Read-only snapshot of the buffer bookkeeping of an [`ExtendibleArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLayout {
    /// Slot count of the buffer receiving pushes, sentinel included
    pub new_capacity: usize,
    /// Slot count of the buffer still being migrated; 0 when absent
    pub old_capacity: usize,
    /// Last position still resident in the old buffer, or -1
    pub shadow: isize,
    /// First free position in the new buffer; the length is `end - 1`
    pub end: usize,
}

impl<T> ExtendibleArray<T> {
    /// Creates an empty array.
    ///
    /// The new buffer holds only the sentinel slot and no old buffer exists.
    #[must_use]
    pub fn new() -> Self {
        Self {
            old: SlotBuffer::empty(),
            new: SlotBuffer::sentinel(),
            seam: 0,
            end: 1,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == 1
    }

    /// Number of elements the array holds before the next buffer promotion.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.new.capacity() - 1
    }

    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // Slot counts never exceed isize::MAX
    pub fn layout(&self) -> BufferLayout {
        BufferLayout {
            new_capacity: self.new.capacity(),
            old_capacity: self.old.capacity(),
            shadow: self.seam as isize - 1,
            end: self.end,
        }
    }

    fn check_bounds(&self, index: usize) -> Result<(), ExtendibleArrayError> {
        if index >= self.len() {
            Err(ExtendibleArrayError::IndexOutOfRange {
                index,
                length: self.len(),
            })
        } else {
            Ok(())
        }
    }

    fn buffer(&self, pos: usize) -> &SlotBuffer<T> {
        if pos < self.seam {
            &self.old
        } else {
            &self.new
        }
    }

    fn buffer_mut(&mut self, pos: usize) -> &mut SlotBuffer<T> {
        if pos < self.seam {
            &mut self.old
        } else {
            &mut self.new
        }
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        self.buffer(index + 1).get(index + 1)
    }

    /// Gets a mutable reference to the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        self.buffer_mut(index + 1).get_mut(index + 1)
    }

    /// Tries to get the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `ExtendibleArrayError::IndexOutOfRange` if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<&T, ExtendibleArrayError> {
        self.check_bounds(index)?;
        self.get(index).ok_or(ExtendibleArrayError::IndexOutOfRange {
            index,
            length: self.len(),
        })
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Overwrites the element at the specified index, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `ExtendibleArrayError::IndexOutOfRange` if `index` is out of bounds.
    ///
    /// # Panics
    ///
    /// May panic if buffer integrity is compromised (internal validation failure).
    #[allow(clippy::expect_used)]
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ExtendibleArrayError> {
        self.check_bounds(index)?;
        let previous = self
            .buffer_mut(index + 1)
            .slot_mut(index + 1)
            .replace(value);
        Ok(previous.expect("Positions between the sentinel and `end` are occupied"))
    }

    /// Swaps two elements.
    ///
    /// # Errors
    ///
    /// Returns `ExtendibleArrayError::IndexOutOfRange` if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), ExtendibleArrayError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        if a == b {
            return Ok(());
        }

        let a_value = self.buffer_mut(a + 1).slot_mut(a + 1).take();
        let b_value = mem::replace(self.buffer_mut(b + 1).slot_mut(b + 1), a_value);
        *self.buffer_mut(a + 1).slot_mut(a + 1) = b_value;
        Ok(())
    }

    /// Appends an element, migrating exactly one element from the old buffer.
    ///
    /// When the new buffer is full it is first promoted: it becomes the old
    /// buffer and a buffer twice its size takes its place. The larger buffer is
    /// allocated before any state changes.
    ///
    /// # Errors
    ///
    /// Returns `ExtendibleArrayError::AllocationFailure` if the promoted buffer
    /// cannot be allocated. The array is left unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), ExtendibleArrayError> {
        if self.end == self.new.capacity() {
            self.promote()?;
        }

        *self.new.slot_mut(self.end) = Some(value);

        // `seam + end == capacity` and `end < capacity`, so `seam >= 1`
        self.seam -= 1;
        *self.new.slot_mut(self.seam) = self.old.take(self.seam);
        self.end += 1;

        debug_assert_eq!(self.seam + self.end, self.new.capacity());
        Ok(())
    }

    /// Appends an element.
    ///
    /// # Panics
    ///
    /// Panics if a buffer promotion is needed and the allocation fails.
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            panic!("{err}");
        }
    }

    fn promote(&mut self) -> Result<(), ExtendibleArrayError> {
        let capacity = self.new.capacity().checked_mul(2).ok_or(
            ExtendibleArrayError::AllocationFailure {
                capacity: usize::MAX,
            },
        )?;
        let grown = SlotBuffer::try_with_capacity(capacity)?;

        // Every old position is migrated once `new` is full; nothing is lost.
        self.old = mem::replace(&mut self.new, grown);
        self.seam = self.end;

        trace!(
            old_capacity = self.old.capacity(),
            new_capacity = capacity,
            len = self.len(),
            "promoted buffers"
        );
        Ok(())
    }

    /// Inserts an element at `index`, shifting the tail up by one.
    ///
    /// Runs as a push, which takes care of capacity and migration, followed by
    /// rotating the pushed value down into place. O(n) in the worst case.
    ///
    /// # Errors
    ///
    /// Returns `ExtendibleArrayError::IndexOutOfRange` if `index > len()`, or
    /// `ExtendibleArrayError::AllocationFailure` if the push has to promote and
    /// the allocation fails. In both cases the array is unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ExtendibleArrayError> {
        if index > self.len() {
            return Err(ExtendibleArrayError::IndexOutOfRange {
                index,
                length: self.len(),
            });
        }

        self.try_push(value)?;

        let pos = index + 1;
        if pos >= self.seam {
            self.new.shift_up(pos..self.end);
        } else {
            // Rotate old[pos..seam] ++ new[seam..end] right by one: the pushed
            // value lands in old[pos], the last old resident crosses the seam.
            self.new.shift_up(self.seam..self.end);
            self.old.shift_up(pos..self.seam);
            mem::swap(self.old.slot_mut(pos), self.new.slot_mut(self.seam));
        }
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail down by one.
    ///
    /// Removing the last element touches a constant number of slots. When the
    /// removal drains the new buffer, the old buffer takes its place and a
    /// fresh buffer of half its size becomes the old one; that buffer is
    /// allocated before any state changes.
    ///
    /// # Errors
    ///
    /// Returns `ExtendibleArrayError::IndexOutOfRange` if `index` is out of
    /// bounds, or `ExtendibleArrayError::AllocationFailure` if the demotion
    /// buffer cannot be allocated. In both cases the array is unchanged.
    ///
    /// # Panics
    ///
    /// May panic if buffer integrity is compromised (internal validation failure).
    #[allow(clippy::expect_used)]
    pub fn remove(&mut self, index: usize) -> Result<T, ExtendibleArrayError> {
        self.check_bounds(index)?;

        // Each removal shrinks `seam..end` by two
        let demotion = if self.end - self.seam == 2 {
            Some(SlotBuffer::try_with_capacity(self.old.capacity() / 2)?)
        } else {
            None
        };

        let pos = index + 1;
        let removed = if pos >= self.seam {
            self.remove_from_new(pos)
        } else {
            self.remove_from_old(pos)
        };

        if let Some(shrunk) = demotion {
            self.demote(shrunk);
        }

        debug_assert_eq!(self.seam + self.end, self.new.capacity());
        Ok(removed.expect("Positions between the sentinel and `end` are occupied"))
    }

    fn remove_from_new(&mut self, pos: usize) -> Option<T> {
        let removed = self.new.take(pos);
        self.new.shift_down(pos..self.end);

        // The lowest resident of `new` moves back across the seam
        *self.old.slot_mut(self.seam) = self.new.take(self.seam);
        self.seam += 1;
        self.end -= 1;

        removed
    }

    fn remove_from_old(&mut self, pos: usize) -> Option<T> {
        let removed = self.old.take(pos);
        self.old.shift_down(pos..self.seam);

        // Refill the vacated `seam - 1` and pull the seam up by one: the two
        // lowest residents of `new` both move into `old`.
        *self.old.slot_mut(self.seam - 1) = self.new.take(self.seam);
        *self.old.slot_mut(self.seam) = self.new.take(self.seam + 1);
        self.seam += 1;

        self.new.shift_down(self.seam..self.end);
        self.end -= 1;

        removed
    }

    fn demote(&mut self, shrunk: SlotBuffer<T>) {
        debug_assert_eq!(self.seam, self.end);

        let drained_capacity = self.new.capacity();
        self.new = mem::replace(&mut self.old, shrunk);
        self.seam = 0;
        self.end = self.new.capacity();

        trace!(
            old_capacity = self.old.capacity(),
            new_capacity = self.new.capacity(),
            drained_capacity,
            len = self.len(),
            "demoted buffers"
        );
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the array is empty.
    ///
    /// # Panics
    ///
    /// Panics if the removal has to demote and the allocation fails.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        match self.remove(self.len() - 1) {
            Ok(value) => Some(value),
            Err(err) => panic!("{err}"),
        }
    }

    /// Tries to remove and return the last element.
    ///
    /// # Errors
    ///
    /// Returns `ExtendibleArrayError::EmptyArray` if the array is empty, or
    /// `ExtendibleArrayError::AllocationFailure` if the demotion buffer cannot
    /// be allocated.
    pub fn try_pop(&mut self) -> Result<T, ExtendibleArrayError> {
        if self.is_empty() {
            return Err(ExtendibleArrayError::EmptyArray);
        }
        self.remove(self.len() - 1)
    }

    /// Drops every element and returns to the initial single-slot layout.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        let (old, new) = self.resident_slots();
        Iter::new(old, new)
    }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (old, new) = self.resident_slots_mut();
        IterMut::new(old, new)
    }

    /// Occupied slots in logical order: old residents, then new residents.
    pub(crate) fn resident_slots(&self) -> (&[Option<T>], &[Option<T>]) {
        let boundary = self.seam.max(1);
        (
            self.old.slots(1..boundary),
            self.new.slots(boundary..self.end),
        )
    }

    pub(crate) fn resident_slots_mut(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let boundary = self.seam.max(1);
        (
            self.old.slots_mut(1..boundary),
            self.new.slots_mut(boundary..self.end),
        )
    }

    /// Both buffers in logical order; every slot outside the resident ranges is empty.
    pub(crate) fn into_buffers(self) -> (SlotBuffer<T>, SlotBuffer<T>) {
        (self.old, self.new)
    }
}

impl<T> Default for ExtendibleArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ExtendibleArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ExtendibleArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ExtendibleArray<T> {}

impl<T: Hash> Hash for ExtendibleArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self {
            element.hash(state);
        }
    }
}
