//! Doubly-linked indexed collection with nearest-end traversal.
//!
//! Provides [`LinkedCollection`] — a chain of nodes supporting $O(1)$ append
//! and prepend, and $O(\min(i, n - i))$ positional access: every lookup by
//! position walks from whichever end of the chain is closer.

use core::fmt;
use core::iter::FusedIterator;

use crate::{Collection, CollectionError};

/// Sentinel handle meaning "no node".
const NIL: usize = usize::MAX;

struct Node<T> {
    /// `None` only while the node sits on the free list.
    value: Option<T>,
    previous: usize,
    next: usize,
}

/// A doubly-linked collection whose nodes live in an arena.
///
/// # Architecture
/// Nodes are stored in a `Vec` and refer to their neighbours by integer
/// handle rather than by pointer, so the arena is the sole owner of every
/// node and `previous` links are plain back-references.
///
/// - `first`, `last`: handles of the chain ends, both `NIL` when empty.
/// - `free_head`: first node released by a removal. Released nodes are
///   threaded through their `next` field and reused by later insertions.
///
/// ## Positional lookup
/// ```text
/// 1. If index <= len - index: start at `first`, follow `next` index times.
/// 2. Else: start at `last`, follow `previous` (len - 1 - index) times.
/// ```
pub struct LinkedCollection<T> {
    nodes: Vec<Node<T>>,
    first: usize,
    last: usize,
    len: usize,
    free_head: usize,
}

impl<T> LinkedCollection<T> {
    /// Creates an empty collection.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            first: NIL,
            last: NIL,
            len: 0,
            free_head: NIL,
        }
    }

    /// Creates a copy of `other`, preserving its traversal order.
    pub fn from_collection(other: &dyn Collection<T>) -> Self
    where
        T: Clone,
    {
        let mut this = Self::new();
        this.add_all(other);
        this
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the element at `index`, walking from the nearer end.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        CollectionError::check_index(index, self.len)?;
        Ok(self.value(self.locate(index)))
    }

    /// Returns a mutable reference to the element at `index`, walking from the nearer end.
    ///
    /// ```rust
    /// use indexed_collections::LinkedCollection;
    ///
    /// let mut list: LinkedCollection<i32> = [1, 2, 3].into_iter().collect();
    /// *list.get_mut(2).unwrap() += 1;
    /// assert_eq!(list.to_vec(), vec![1, 2, 4]);
    /// assert_eq!((list.first(), list.last()), (Some(&1), Some(&4)));
    /// assert!(list.contains(&4));
    /// assert!(list.get_mut(3).is_err());
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        CollectionError::check_index(index, self.len)?;
        let idx = self.locate(index);
        match &mut self.nodes[idx].value {
            Some(value) => Ok(value),
            None => unreachable!("Logic Error: linked node {idx} has no value"),
        }
    }

    /// Returns the head element in $O(1)$, or `None` if empty.
    pub fn first(&self) -> Option<&T> {
        (self.first != NIL).then(|| self.value(self.first))
    }

    /// Returns the tail element in $O(1)$, or `None` if empty.
    pub fn last(&self) -> Option<&T> {
        (self.last != NIL).then(|| self.value(self.last))
    }

    /// Appends `value` after the last element in $O(1)$.
    #[inline(always)]
    pub fn add(&mut self, value: T) {
        let end = self.len;
        self.link(end, value);
    }

    /// Inserts `value` so that it ends up at `position`.
    ///
    /// `position` may equal `len()`, which appends. Fails with
    /// [`CollectionError::IndexOutOfRange`] beyond that.
    pub fn insert(&mut self, position: usize, value: T) -> Result<(), CollectionError> {
        CollectionError::check_index(position, self.len + 1)?;
        self.link(position, value);
        Ok(())
    }

    /// Like [`insert`](Self::insert), rejecting an absent value with
    /// [`CollectionError::NullValue`] before the bounds check.
    pub fn try_insert(&mut self, position: usize, value: Option<T>) -> Result<(), CollectionError> {
        let value = value.ok_or(CollectionError::NullValue)?;
        self.insert(position, value)
    }

    fn link(&mut self, position: usize, value: T) {
        if self.len == 0 {
            let idx = self.alloc(value, NIL, NIL);
            self.first = idx;
            self.last = idx;
        } else if position == self.len {
            let idx = self.alloc(value, self.last, NIL);
            self.nodes[self.last].next = idx;
            self.last = idx;
        } else if position == 0 {
            let idx = self.alloc(value, NIL, self.first);
            self.nodes[self.first].previous = idx;
            self.first = idx;
        } else {
            // Splice in front of the node currently holding `position`.
            let at = self.locate(position);
            let before = self.nodes[at].previous;
            let idx = self.alloc(value, before, at);
            self.nodes[before].next = idx;
            self.nodes[at].previous = idx;
        }
        self.len += 1;
    }

    /// Removes and returns the element at `index`, walking from the nearer end.
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        CollectionError::check_index(index, self.len)?;
        let idx = self.locate(index);
        self.unlink(idx);
        Ok(self.release(idx))
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
        self.iter().any(|v| v == value)
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

    /// Empties the collection and releases every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.first = NIL;
        self.last = NIL;
        self.free_head = NIL;
        self.len = 0;
    }

    /// Iterates head to tail; also double-ended.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.first,
            back: self.last,
            remaining: self.len,
        }
    }

    /// Returns an independent array-backed copy, built in one forward pass.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter().cloned());
        out
    }

    fn locate(&self, index: usize) -> usize {
        if index <= self.len - index {
            self.walk_forward(index)
        } else {
            self.walk_backward(index)
        }
    }

    fn walk_forward(&self, index: usize) -> usize {
        let mut curr = self.first;
        for _ in 0..index {
            curr = self.nodes[curr].next;
        }
        curr
    }

    fn walk_backward(&self, index: usize) -> usize {
        let mut curr = self.last;
        for _ in index + 1..self.len {
            curr = self.nodes[curr].previous;
        }
        curr
    }

    fn alloc(&mut self, value: T, previous: usize, next: usize) -> usize {
        if self.free_head != NIL {
            let idx = self.free_head;
            let node = &mut self.nodes[idx];
            self.free_head = node.next;
            node.value = Some(value);
            node.previous = previous;
            node.next = next;
            idx
        } else {
            self.nodes.push(Node {
                value: Some(value),
                previous,
                next,
            });
            self.nodes.len() - 1
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (p, n) = (self.nodes[idx].previous, self.nodes[idx].next);
        if p != NIL {
            self.nodes[p].next = n;
        } else {
            self.first = n;
        }
        if n != NIL {
            self.nodes[n].previous = p;
        } else {
            self.last = p;
        }
        self.len -= 1;
    }

    fn release(&mut self, idx: usize) -> T {
        let node = &mut self.nodes[idx];
        let value = node.value.take();
        node.previous = NIL;
        node.next = self.free_head;
        self.free_head = idx;
        match value {
            Some(value) => value,
            None => unreachable!("Logic Error: released linked node {idx} twice"),
        }
    }

    #[inline(always)]
    fn value(&self, idx: usize) -> &T {
        match &self.nodes[idx].value {
            Some(value) => value,
            None => unreachable!("Logic Error: linked node {idx} has no value"),
        }
    }
}

impl<T> Collection<T> for LinkedCollection<T> {
    fn size(&self) -> usize {
        self.len
    }

    fn add(&mut self, value: T) {
        LinkedCollection::add(self, value);
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        LinkedCollection::contains(self, value)
    }

    fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        LinkedCollection::remove_value(self, value)
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
        LinkedCollection::clear(self);
    }
}

// ─── Iteration ───────────────────────────────────────────────────────────────

/// Borrowing iterator over a [`LinkedCollection`], walkable from either end.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn value_at(&self, idx: usize) -> &'a T {
        match &self.nodes[idx].value {
            Some(value) => value,
            None => unreachable!("Logic Error: linked node {idx} has no value"),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front;
        self.front = self.nodes[idx].next;
        self.remaining -= 1;
        Some(self.value_at(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back;
        self.back = self.nodes[idx].previous;
        self.remaining -= 1;
        Some(self.value_at(idx))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedCollection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── Std traits ──────────────────────────────────────────────────────────────

impl<T> Default for LinkedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedCollection<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedCollection<T> {}

impl<T> Extend<T> for LinkedCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<T> core::ops::Index<usize> for LinkedCollection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T> core::ops::IndexMut<usize> for LinkedCollection<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).unwrap_or_else(|err| panic!("{err}"))
    }
}
