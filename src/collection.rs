//! Growable indexed container
//!
//! [`GrowableContainer`] owns a contiguous slot store whose first `size`
//! slots are live. Unused trailing slots hold `None` and are never handed
//! out. Capacity only grows; `clear` and removals keep the store allocated.

use std::fmt;
use std::iter::Flatten;

use crate::error::{Result, RosterError};

/// Capacity used by [`GrowableContainer::new`]
pub const DEFAULT_CAPACITY: usize = 10;

pub struct GrowableContainer<T> {
    /// Backing store, `slots.len()` is the capacity
    slots: Box<[Option<T>]>,
    /// Number of live slots at the front of `slots`
    size: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> GrowableContainer<T> {
    pub fn new() -> Self {
        Self {
            slots: empty_slots(DEFAULT_CAPACITY),
            size: 0,
        }
    }

    /// Create an empty container with room for `capacity` elements
    ///
    /// A zero capacity is rejected with `InvalidArgument`.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RosterError::InvalidArgument(
                "capacity must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            slots: empty_slots(capacity),
            size: 0,
        })
    }

    /// Append an element at the end, growing the store first when full
    pub fn append(&mut self, element: T) -> bool {
        if self.size == self.slots.len() {
            self.grow(self.size + 1);
        }
        self.slots[self.size] = Some(element);
        self.size += 1;
        true
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        self.slots[index]
            .as_ref()
            .ok_or(RosterError::IndexOutOfRange {
                index,
                size: self.size,
            })
    }

    /// Replace the element at `index`, returning the previous one
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        self.check_index(index)?;
        self.slots[index]
            .replace(element)
            .ok_or(RosterError::IndexOutOfRange {
                index,
                size: self.size,
            })
    }

    /// Remove the element at `index` and shift everything after it left by one
    ///
    /// Survivors keep their relative order. The vacated trailing slot is
    /// cleared so the removed value is not retained.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let removed = self.slots[index].take();
        // The emptied slot travels to position size - 1
        self.slots[index..self.size].rotate_left(1);
        self.size -= 1;
        removed.ok_or(RosterError::IndexOutOfRange {
            index,
            size: self.size + 1,
        })
    }

    /// Remove the first element equal to `element`
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.iter().position(|e| e == element) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Drop all live elements; capacity is unchanged
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.size] {
            *slot = None;
        }
        self.size = 0;
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Append clones of every element of `other`, in its iteration order
    ///
    /// Returns `false` and does nothing when `other` is empty. The store
    /// grows at most once, straight to a size that fits both.
    pub fn append_all(&mut self, other: &GrowableContainer<T>) -> bool
    where
        T: Clone,
    {
        if other.is_empty() {
            return false;
        }

        let required = self.size + other.size;
        if required > self.slots.len() {
            self.grow(required);
        }
        for element in other {
            self.slots[self.size] = Some(element.clone());
            self.size += 1;
        }
        true
    }

    /// Read-only view over the live range, lazily yielding `&T`
    ///
    /// Suitable for aggregates such as counting matches; it never touches
    /// slots past `len()` and copies nothing.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.size].iter(),
        }
    }

    /// Forward cursor that can remove the element it last returned
    ///
    /// The cursor holds the container mutably, so no other mutation can
    /// interleave with it; its own [`Cursor::remove`] is the only
    /// structural change possible while it lives.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor {
            container: self,
            position: 0,
            last_returned: None,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(RosterError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Grow to `max(capacity * 1.5 + 1, required)`, keeping live elements in order
    fn grow(&mut self, required: usize) {
        let old_capacity = self.slots.len();
        let new_capacity = (old_capacity + old_capacity / 2 + 1).max(required);
        assert!(
            new_capacity > old_capacity,
            "growth must strictly increase capacity ({old_capacity} -> {new_capacity})"
        );

        let mut slots = std::mem::take(&mut self.slots).into_vec();
        slots.resize_with(new_capacity, || None);
        self.slots = slots.into_boxed_slice();

        tracing::trace!(old_capacity, new_capacity, size = self.size, "container grew");
    }
}

impl<T> Default for GrowableContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableContainer<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            size: self.size,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Containers are equal when their live ranges are equal; capacity is ignored
impl<T: PartialEq> PartialEq for GrowableContainer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowableContainer<T> {}

impl<T> FromIterator<T> for GrowableContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut container = GrowableContainer::new();
        container.extend(iter);
        container
    }
}

impl<T> Extend<T> for GrowableContainer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableContainer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for GrowableContainer<T> {
    type Item = T;
    type IntoIter = Flatten<std::vec::IntoIter<Option<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = self.slots.into_vec();
        slots.truncate(self.size);
        slots.into_iter().flatten()
    }
}

/// Borrowing iterator over the live range of a [`GrowableContainer`]
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Fail-fast removing cursor over a [`GrowableContainer`]
///
/// Not restartable: once exhausted, create a new one. `remove` is legal
/// exactly once per successful `next_element`.
pub struct Cursor<'a, T> {
    container: &'a mut GrowableContainer<T>,
    /// Index of the element the next call to `next_element` yields
    position: usize,
    last_returned: Option<usize>,
}

impl<T> Cursor<'_, T> {
    pub fn has_next(&self) -> bool {
        self.position < self.container.size
    }

    /// Advance and return the next live element
    pub fn next_element(&mut self) -> Result<&T> {
        if !self.has_next() {
            return Err(RosterError::NoMoreElements);
        }
        let index = self.position;
        self.position += 1;
        self.last_returned = Some(index);
        self.container.get(index)
    }

    /// Remove the element returned by the last `next_element`
    ///
    /// The cursor steps back onto the removed index, so the following
    /// `next_element` yields the element that shifted into that slot.
    pub fn remove(&mut self) -> Result<T> {
        let index = self
            .last_returned
            .take()
            .ok_or(RosterError::IllegalIteratorState)?;
        let removed = self.container.remove_at(index)?;
        self.position = index;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container_of(values: &[i32]) -> GrowableContainer<i32> {
        values.iter().copied().collect()
    }

    fn contents(container: &GrowableContainer<i32>) -> Vec<i32> {
        container.iter().copied().collect()
    }

    #[test]
    fn test_new_is_empty_with_default_capacity() {
        let container: GrowableContainer<i32> = GrowableContainer::new();
        assert!(container.is_empty());
        assert_eq!(container.len(), 0);
        assert_eq!(container.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = GrowableContainer::<i32>::with_capacity(0).unwrap_err();
        assert!(matches!(err, RosterError::InvalidArgument(_)));
    }

    #[test]
    fn test_append_and_get() {
        let mut container = GrowableContainer::new();
        assert!(container.append("a"));
        assert!(container.append("b"));
        assert_eq!(container.len(), 2);
        assert_eq!(*container.get(0).unwrap(), "a");
        assert_eq!(*container.get(1).unwrap(), "b");
    }

    #[test]
    fn test_get_out_of_range() {
        let container = container_of(&[1, 2]);
        assert!(matches!(
            container.get(2),
            Err(RosterError::IndexOutOfRange { index: 2, size: 2 })
        ));
    }

    #[test]
    fn test_unused_slots_not_readable() {
        let container = GrowableContainer::<i32>::with_capacity(5).unwrap();
        assert!(container.get(0).is_err());
        assert_eq!(container.iter().count(), 0);
    }

    #[test]
    fn test_growth_preserves_elements() {
        let mut container = GrowableContainer::with_capacity(1).unwrap();
        for i in 0..25 {
            container.append(i);
            assert!(container.capacity() >= container.len());
        }
        assert_eq!(contents(&container), (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_growth_policy() {
        let mut container = GrowableContainer::with_capacity(1).unwrap();
        container.append(0);
        container.append(1);
        // 1 + 1/2 + 1
        assert_eq!(container.capacity(), 2);
        container.append(2);
        // 2 + 1 + 1
        assert_eq!(container.capacity(), 4);

        let mut container = GrowableContainer::new();
        for i in 0..11 {
            container.append(i);
        }
        assert_eq!(container.capacity(), 16);
    }

    #[test]
    fn test_set_returns_previous() {
        let mut container = container_of(&[1, 2, 3]);
        assert_eq!(container.set(1, 20).unwrap(), 2);
        assert_eq!(contents(&container), vec![1, 20, 3]);
        assert!(container.set(3, 0).is_err());
    }

    #[test]
    fn test_remove_at_shifts_left() {
        let mut container = container_of(&[1, 2, 3]);
        assert_eq!(container.remove_at(0).unwrap(), 1);
        assert_eq!(contents(&container), vec![2, 3]);
        assert_eq!(*container.get(0).unwrap(), 2);
        assert!(container.get(2).is_err());
    }

    #[test]
    fn test_remove_at_middle_and_end() {
        let mut container = container_of(&[1, 2, 3, 4]);
        container.remove_at(1).unwrap();
        container.remove_at(2).unwrap();
        assert_eq!(contents(&container), vec![1, 3]);
        assert!(matches!(
            container.remove_at(2),
            Err(RosterError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_remove_by_value() {
        let mut container = container_of(&[5, 6, 5]);
        assert!(container.remove(&5));
        assert_eq!(contents(&container), vec![6, 5]);
        assert!(!container.remove(&9));
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_remove_and_clear_release_elements() {
        use std::rc::Rc;

        let shared = Rc::new(5);
        let mut container: GrowableContainer<Rc<i32>> =
            (0..4).map(|_| Rc::clone(&shared)).collect();
        assert_eq!(Rc::strong_count(&shared), 5);

        drop(container.remove_at(3).unwrap());
        assert_eq!(Rc::strong_count(&shared), 4);
        drop(container.remove_at(0).unwrap());
        assert_eq!(Rc::strong_count(&shared), 3);

        container.clear();
        assert_eq!(Rc::strong_count(&shared), 1);
        assert_eq!(container.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut container = container_of(&(0..30).collect::<Vec<_>>());
        let capacity = container.capacity();
        container.clear();
        assert!(container.is_empty());
        assert_eq!(container.capacity(), capacity);
        container.append(7);
        assert_eq!(contents(&container), vec![7]);
    }

    #[test]
    fn test_append_all_grows_once() {
        let mut target = container_of(&[1, 2, 3]);
        let source = container_of(&(10..30).collect::<Vec<_>>());
        assert!(target.append_all(&source));
        assert_eq!(target.len(), 23);
        // max(10 + 5 + 1, 23) reached in a single step
        assert_eq!(target.capacity(), 23);
        assert_eq!(*target.get(3).unwrap(), 10);
        assert_eq!(*target.get(22).unwrap(), 29);
    }

    #[test]
    fn test_append_all_empty_is_noop() {
        let mut target = container_of(&[1]);
        let source = GrowableContainer::new();
        assert!(!target.append_all(&source));
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn test_cursor_walks_live_range() {
        let mut container = container_of(&[1, 2, 3]);
        let mut cursor = container.cursor();
        let mut seen = Vec::new();
        while cursor.has_next() {
            seen.push(*cursor.next_element().unwrap());
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert!(matches!(
            cursor.next_element(),
            Err(RosterError::NoMoreElements)
        ));
    }

    #[test]
    fn test_cursor_remove_repositions() {
        let mut container = container_of(&[1, 2, 3, 4]);
        let mut cursor = container.cursor();
        assert_eq!(*cursor.next_element().unwrap(), 1);
        assert_eq!(*cursor.next_element().unwrap(), 2);
        assert_eq!(cursor.remove().unwrap(), 2);
        // 3 shifted into the removed slot
        assert_eq!(*cursor.next_element().unwrap(), 3);
        assert_eq!(*cursor.next_element().unwrap(), 4);
        assert!(!cursor.has_next());
        assert_eq!(contents(&container), vec![1, 3, 4]);
    }

    #[test]
    fn test_cursor_remove_without_next() {
        let mut container = container_of(&[1]);
        let mut cursor = container.cursor();
        assert!(matches!(
            cursor.remove(),
            Err(RosterError::IllegalIteratorState)
        ));
    }

    #[test]
    fn test_cursor_double_remove() {
        let mut container = container_of(&[1, 2]);
        let mut cursor = container.cursor();
        cursor.next_element().unwrap();
        cursor.remove().unwrap();
        assert!(matches!(
            cursor.remove(),
            Err(RosterError::IllegalIteratorState)
        ));
    }

    #[test]
    fn test_cursor_remove_all() {
        let mut container = container_of(&[1, 2, 3]);
        let mut cursor = container.cursor();
        while cursor.has_next() {
            cursor.next_element().unwrap();
            cursor.remove().unwrap();
        }
        assert!(container.is_empty());
    }

    #[test]
    fn test_iter_counts_matches() {
        let container = container_of(&[1, 2, 3, 4, 6]);
        assert_eq!(container.iter().filter(|v| *v % 2 == 0).count(), 3);
        assert_eq!(container.iter().len(), 5);
        assert_eq!(container.iter().rev().next(), Some(&6));
    }

    #[test]
    fn test_owned_into_iter_skips_unused_slots() {
        let container = container_of(&[1, 2]);
        let values: Vec<i32> = container.into_iter().collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_equality_ignores_capacity() {
        let mut a = GrowableContainer::with_capacity(1).unwrap();
        a.append(1);
        let b = container_of(&[1]);
        assert_eq!(a, b);
        assert_eq!(format!("{:?}", b), "[1]");
    }
}
