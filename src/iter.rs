use alloc::vec;
use core::iter::{Chain, FusedIterator};
use core::ops::{Index, IndexMut};
use core::slice;

use crate::core::ExtendibleArray;

/// Iterator over the elements of an `ExtendibleArray`
///
/// Yields the old buffer's residents, then the new buffer's.
/// This iterator implements `Clone`.
pub struct Iter<'a, T> {
    old: slice::Iter<'a, Option<T>>,
    new: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(old: &'a [Option<T>], new: &'a [Option<T>]) -> Self {
        Self {
            old: old.iter(),
            new: new.iter(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            old: self.old.clone(),
            new: self.new.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.old.next().or_else(|| self.new.next())?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.old.len() + self.new.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.new.next_back().or_else(|| self.old.next_back())?.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over the elements of an `ExtendibleArray`
pub struct IterMut<'a, T> {
    old: slice::IterMut<'a, Option<T>>,
    new: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(old: &'a mut [Option<T>], new: &'a mut [Option<T>]) -> Self {
        Self {
            old: old.iter_mut(),
            new: new.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.old.next().or_else(|| self.new.next())?.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.old.len() + self.new.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.new.next_back().or_else(|| self.old.next_back())?.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the elements of an `ExtendibleArray`
///
/// Elements not yet yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    slots: Chain<vec::IntoIter<Option<T>>, vec::IntoIter<Option<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn new(array: ExtendibleArray<T>) -> Self {
        let remaining = array.len();
        let (old, new) = array.into_buffers();
        Self {
            slots: old.into_slots().chain(new.into_slots()),
            remaining,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // Outside the resident ranges every slot is empty, so the occupied
        // slots of old-then-new come out in logical order.
        let element = self.slots.find(Option::is_some).flatten()?;
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let element = self.slots.rfind(Option::is_some).flatten()?;
        self.remaining -= 1;
        Some(element)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ExtendibleArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a ExtendibleArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ExtendibleArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for ExtendibleArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for ExtendibleArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ExtendibleArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> Index<usize> for ExtendibleArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "Index {} out of bounds for array of length {}",
                index,
                self.len()
            ),
        }
    }
}

impl<T> IndexMut<usize> for ExtendibleArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.len();
        match self.get_mut(index) {
            Some(element) => element,
            None => panic!("Index {index} out of bounds for array of length {length}"),
        }
    }
}
