//! Contiguous, index-addressable collection with doubling growth.
//!
//! Provides [`ArrayCollection`] — elements live in a boxed slice of slots.
//! Slots `[0, len)` are occupied in positional order, slots `[len, capacity)`
//! are vacant. When an insertion finds every slot occupied the buffer is
//! reallocated to twice its capacity; it never shrinks.

use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use crate::{Collection, CollectionError};

/// A growable array-backed collection.
///
/// Append is amortized $O(1)$, random access is $O(1)$, positional insert and
/// remove are $O(n)$ in the number of elements shifted.
///
/// # Capacity policy
/// Capacity is at least 1, starts at [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY)
/// unless chosen by the caller, doubles only when an insertion meets a full
/// buffer, and is retained by [`clear`](Self::clear).
pub struct ArrayCollection<T> {
    len: usize,
    elements: Box<[Option<T>]>,
}

impl<T> ArrayCollection<T> {
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates an empty collection with the default capacity.
    pub fn new() -> Self {
        Self::allocate(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty collection with room for `capacity` elements.
    ///
    /// Fails with [`CollectionError::InvalidArgument`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, CollectionError> {
        Self::check_capacity(capacity)?;
        Ok(Self::allocate(capacity))
    }

    /// Creates a copy of `other`.
    ///
    /// The starting capacity is the default capacity or `other.size()`,
    /// whichever is larger, so copying never reallocates.
    pub fn from_collection(other: &dyn Collection<T>) -> Self
    where
        T: Clone,
    {
        let mut this = Self::allocate(Self::DEFAULT_CAPACITY.max(other.size()));
        this.add_all(other);
        this
    }

    /// Creates a copy of `other` with a starting capacity of at least `capacity`.
    pub fn from_collection_with_capacity(
        other: &dyn Collection<T>,
        capacity: usize,
    ) -> Result<Self, CollectionError>
    where
        T: Clone,
    {
        Self::check_capacity(capacity)?;
        let mut this = Self::allocate(capacity.max(other.size()));
        this.add_all(other);
        Ok(this)
    }

    fn check_capacity(capacity: usize) -> Result<(), CollectionError> {
        if capacity < 1 {
            return Err(CollectionError::InvalidArgument(
                "initial capacity must be at least 1",
            ));
        }
        Ok(())
    }

    fn allocate(capacity: usize) -> Self {
        Self {
            len: 0,
            elements: Self::vacant_slots(capacity),
        }
    }

    fn vacant_slots(capacity: usize) -> Box<[Option<T>]> {
        core::iter::repeat_with(|| None).take(capacity).collect()
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the collection holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots allocated, occupied or not.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// Returns the element at `index` in $O(1)$.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        CollectionError::check_index(index, self.len)?;
        Ok(self.occupied(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// ```rust
    /// use indexed_collections::ArrayCollection;
    ///
    /// let mut array: ArrayCollection<i32> = [1, 2, 3].into_iter().collect();
    /// *array.get_mut(1).unwrap() *= 10;
    /// assert_eq!(array.to_vec(), vec![1, 20, 3]);
    /// assert_eq!(array.first(), Some(&1));
    /// assert_eq!(array.last(), Some(&3));
    /// assert!(array.contains(&20));
    /// assert!(array.get_mut(3).is_err());
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        CollectionError::check_index(index, self.len)?;
        match &mut self.elements[index] {
            Some(value) => Ok(value),
            None => unreachable!("Logic Error: slot {index} below len is vacant"),
        }
    }

    /// Returns the element at position 0, or `None` if empty.
    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Returns the element at position `len() - 1`, or `None` if empty.
    pub fn last(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Appends `value` after the last element.
    #[inline(always)]
    pub fn add(&mut self, value: T) {
        let end = self.len;
        self.place(end, value);
    }

    /// Inserts `value` at `position`, shifting later elements one slot toward the end.
    ///
    /// `position` may equal `len()`, which appends. Fails with
    /// [`CollectionError::IndexOutOfRange`] beyond that.
    pub fn insert(&mut self, position: usize, value: T) -> Result<(), CollectionError> {
        CollectionError::check_index(position, self.len + 1)?;
        self.place(position, value);
        Ok(())
    }

    /// Like [`insert`](Self::insert), rejecting an absent value with
    /// [`CollectionError::NullValue`] before the bounds check.
    pub fn try_insert(&mut self, position: usize, value: Option<T>) -> Result<(), CollectionError> {
        let value = value.ok_or(CollectionError::NullValue)?;
        self.insert(position, value)
    }

    fn place(&mut self, position: usize, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        // Slot `len` is vacant; writing there and rotating the tail right by
        // one moves `[position, len)` up a slot, highest index first.
        self.elements[self.len] = Some(value);
        self.elements[position..=self.len].rotate_right(1);
        self.len += 1;
    }

    #[inline(never)]
    fn grow(&mut self) {
        let mut grown = Self::vacant_slots(self.capacity() * 2);
        for (to, from) in grown.iter_mut().zip(self.elements.iter_mut()) {
            *to = from.take();
        }
        self.elements = grown;
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// one slot toward the start.
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        CollectionError::check_index(index, self.len)?;
        let removed = self.elements[index].take();
        // The vacated slot travels to `len - 1`, so no stale value stays
        // behind the shrunken logical end.
        self.elements[index..self.len].rotate_left(1);
        self.len -= 1;
        match removed {
            Some(value) => Ok(value),
            None => unreachable!("Logic Error: slot {index} below len is vacant"),
        }
    }

    /// Returns the position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Empties the collection. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.elements[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Iterates the elements in positional order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.elements[..self.len].iter(),
        }
    }

    /// Returns an independent copy of the occupied slots.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    #[inline(always)]
    fn occupied(&self, index: usize) -> &T {
        match &self.elements[index] {
            Some(value) => value,
            None => unreachable!("Logic Error: slot {index} below len is vacant"),
        }
    }
}

impl<T> Collection<T> for ArrayCollection<T> {
    fn size(&self) -> usize {
        self.len
    }

    fn add(&mut self, value: T) {
        ArrayCollection::add(self, value);
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        ArrayCollection::contains(self, value)
    }

    fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        ArrayCollection::remove_value(self, value)
    }

    fn to_sequence(&self) -> Result<Vec<T>, CollectionError>
    where
        T: Clone,
    {
        Ok(self.to_vec())
    }

    fn for_each(&self, visit: &mut dyn FnMut(&T)) {
        self.iter().for_each(visit);
    }

    fn clear(&mut self) {
        ArrayCollection::clear(self);
    }
}

// ─── Iteration ───────────────────────────────────────────────────────────────

/// Borrowing iterator over an [`ArrayCollection`] in positional order.
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(|slot| match slot {
            Some(value) => value,
            None => unreachable!("Logic Error: vacant slot inside occupied range"),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(|slot| match slot {
            Some(value) => value,
            None => unreachable!("Logic Error: vacant slot inside occupied range"),
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ArrayCollection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── Std traits ──────────────────────────────────────────────────────────────

impl<T> Default for ArrayCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayCollection<T> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            elements: self.elements.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayCollection<T> {}

impl<T> Extend<T> for ArrayCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for ArrayCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<T> core::ops::Index<usize> for ArrayCollection<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> core::ops::IndexMut<usize> for ArrayCollection<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).unwrap_or_else(|err| panic!("{err}"))
    }
}
