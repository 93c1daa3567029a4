//! Last-in-first-out stack over an [`ArrayCollection`].

use crate::{ArrayCollection, CollectionError};

/// A LIFO stack whose top is the last slot of an [`ArrayCollection`].
///
/// Push and pop are amortized $O(1)$. The stack is not itself a
/// [`Collection`](crate::Collection); it only exposes stack operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    elements: ArrayCollection<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack with the default capacity.
    pub fn new() -> Self {
        Self {
            elements: ArrayCollection::new(),
        }
    }

    /// Fails with [`CollectionError::InvalidArgument`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, CollectionError> {
        Ok(Self {
            elements: ArrayCollection::with_capacity(capacity)?,
        })
    }

    /// Returns `true` if nothing has been pushed (or everything was popped).
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements on the stack.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Places `value` on top.
    pub fn push(&mut self, value: T) {
        self.elements.add(value);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        match self.size() {
            0 => Err(CollectionError::EmptyStack),
            len => self.elements.remove(len - 1),
        }
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Result<&T, CollectionError> {
        match self.size() {
            0 => Err(CollectionError::EmptyStack),
            len => self.elements.get(len - 1),
        }
    }

    /// Removes every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
