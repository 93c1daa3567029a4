//! The collection contract shared by every container in this crate.
//!
//! [`Collection`] is a dyn-compatible trait: callers that only need to count,
//! search, copy or traverse elements can take `&dyn Collection<T>` and stay
//! agnostic of whether the storage is contiguous ([`ArrayCollection`]) or
//! linked ([`LinkedCollection`]).
//!
//! Positional operations (`get`, `insert`, `remove` by index) are deliberately
//! *not* part of the contract. Both concrete collections provide them, but
//! with different cost guarantees, so they live as inherent methods.
//!
//! [`ArrayCollection`]: crate::ArrayCollection
//! [`LinkedCollection`]: crate::LinkedCollection

use core::fmt;
use core::marker::PhantomData;

use crate::CollectionError;

/// Operations every container must support.
///
/// Implementers supply the primitive operations; [`is_empty`](Self::is_empty),
/// [`try_add`](Self::try_add) and [`add_all`](Self::add_all) are derived from
/// them and need not be overridden.
///
/// Mutating a collection while it is being traversed through
/// [`for_each`](Self::for_each) is not possible through this API (the visitor
/// receives shared references only); callers sharing a collection across
/// threads must serialize access themselves.
pub trait Collection<T> {
    /// Returns the number of stored elements.
    fn size(&self) -> usize;

    /// Returns `true` if the collection holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Appends `value` at the end of the traversal order.
    fn add(&mut self, value: T);

    /// Appends `value`, rejecting an absent one with [`CollectionError::NullValue`].
    fn try_add(&mut self, value: Option<T>) -> Result<(), CollectionError> {
        match value {
            Some(value) => {
                self.add(value);
                Ok(())
            }
            None => Err(CollectionError::NullValue),
        }
    }

    /// Returns `true` if some element is equal to `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Removes the first element equal to `value`. Returns whether one was found.
    fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq;

    /// Returns a newly allocated snapshot of the elements in traversal order.
    ///
    /// An empty collection yields an empty vector. Only [`NullCollection`]
    /// fails, with [`CollectionError::UnsupportedOperation`].
    fn to_sequence(&self) -> Result<Vec<T>, CollectionError>
    where
        T: Clone;

    /// Calls `visit` once per element, in traversal order.
    fn for_each(&self, visit: &mut dyn FnMut(&T));

    /// Copies every element of `other` into `self`, in `other`'s traversal order.
    fn add_all(&mut self, other: &dyn Collection<T>)
    where
        T: Clone,
    {
        other.for_each(&mut |value| self.add(value.clone()));
    }

    /// Removes every element.
    fn clear(&mut self);
}

impl<T> Collection<T> for Vec<T> {
    fn size(&self) -> usize {
        Vec::len(self)
    }

    fn add(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.as_slice().iter().position(|v| v == value) {
            Some(index) => {
                Vec::remove(self, index);
                true
            }
            None => false,
        }
    }

    fn to_sequence(&self) -> Result<Vec<T>, CollectionError>
    where
        T: Clone,
    {
        Ok(self.as_slice().to_vec())
    }

    fn for_each(&self, visit: &mut dyn FnMut(&T)) {
        self.as_slice().iter().for_each(visit);
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

// ─── NullCollection ──────────────────────────────────────────────────────────

/// A collection that stores nothing.
///
/// Stands in wherever a `Collection` is required but no storage is wanted:
/// additions are discarded, searches find nothing and traversal visits
/// nothing. Because it has no contents to export,
/// [`to_sequence`](Collection::to_sequence) fails.
pub struct NullCollection<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> NullCollection<T> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for NullCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NullCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NullCollection<T> {}

impl<T> fmt::Debug for NullCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NullCollection")
    }
}

impl<T> Collection<T> for NullCollection<T> {
    fn size(&self) -> usize {
        0
    }

    fn add(&mut self, _value: T) {}

    fn contains(&self, _value: &T) -> bool
    where
        T: PartialEq,
    {
        false
    }

    fn remove_value(&mut self, _value: &T) -> bool
    where
        T: PartialEq,
    {
        false
    }

    fn to_sequence(&self) -> Result<Vec<T>, CollectionError>
    where
        T: Clone,
    {
        Err(CollectionError::UnsupportedOperation(
            "a null collection has no elements to export",
        ))
    }

    fn for_each(&self, _visit: &mut dyn FnMut(&T)) {}

    fn clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArrayCollection, LinkedCollection};

    fn describe(c: &dyn Collection<i32>) -> (usize, bool, Vec<i32>) {
        let mut seen = Vec::new();
        c.for_each(&mut |v| seen.push(*v));
        (c.size(), c.is_empty(), seen)
    }

    #[test]
    fn test_collection_dyn_dispatch_over_all_backends() {
        let array: ArrayCollection<i32> = [1, 2, 3].into_iter().collect();
        let linked: LinkedCollection<i32> = [1, 2, 3].into_iter().collect();
        let std_vec = vec![1, 2, 3];

        for c in [
            &array as &dyn Collection<i32>,
            &linked as &dyn Collection<i32>,
            &std_vec as &dyn Collection<i32>,
        ] {
            assert_eq!(describe(c), (3, false, vec![1, 2, 3]));
        }
    }

    #[test]
    fn test_collection_add_all_preserves_source_order() {
        let source: LinkedCollection<&str> = ["a", "b", "c"].into_iter().collect();
        let mut target: ArrayCollection<&str> = ArrayCollection::new();
        target.add("z");
        target.add_all(&source);
        assert_eq!(target.to_vec(), vec!["z", "a", "b", "c"]);

        let mut back: LinkedCollection<&str> = LinkedCollection::new();
        back.add_all(&target);
        assert_eq!(back.to_vec(), vec!["z", "a", "b", "c"]);
    }

    #[test]
    fn test_collection_add_all_from_empty_is_noop() {
        let empty: ArrayCollection<i32> = ArrayCollection::new();
        let mut target: LinkedCollection<i32> = [7].into_iter().collect();
        target.add_all(&empty);
        assert_eq!(target.to_vec(), vec![7]);
    }

    #[test]
    fn test_collection_try_add_rejects_none() {
        let mut array: ArrayCollection<i32> = ArrayCollection::new();
        let mut linked: LinkedCollection<i32> = LinkedCollection::new();
        assert_eq!(array.try_add(None), Err(CollectionError::NullValue));
        assert_eq!(linked.try_add(None), Err(CollectionError::NullValue));
        assert!(Collection::is_empty(&array));
        assert!(Collection::is_empty(&linked));

        assert_eq!(array.try_add(Some(4)), Ok(()));
        assert_eq!(linked.try_add(Some(4)), Ok(()));
        assert_eq!(array.size(), 1);
        assert_eq!(linked.size(), 1);
    }

    #[test]
    fn test_collection_to_sequence_is_independent_snapshot() {
        let mut array: ArrayCollection<String> = ArrayCollection::new();
        array.add("x".to_string());
        let mut snapshot = array.to_sequence().unwrap();
        snapshot.push("y".to_string());
        assert_eq!(array.size(), 1);

        let empty: LinkedCollection<String> = LinkedCollection::new();
        assert_eq!(empty.to_sequence(), Ok(Vec::new()));
    }

    #[test]
    fn test_collection_value_equality_not_identity() {
        let mut array: ArrayCollection<String> = ArrayCollection::new();
        let mut linked: LinkedCollection<String> = LinkedCollection::new();
        for c in [
            &mut array as &mut dyn Collection<String>,
            &mut linked as &mut dyn Collection<String>,
        ] {
            c.add(String::from("dup"));
            c.add(String::from("other"));
            c.add(String::from("dup"));
            let probe = "dup".to_string();
            assert!(c.contains(&probe));
            assert!(c.remove_value(&probe));
            assert_eq!(c.size(), 2);
            assert_eq!(
                c.to_sequence().unwrap(),
                vec!["other".to_string(), "dup".to_string()]
            );
            assert!(!c.remove_value(&"missing".to_string()));
        }
    }

    #[test]
    fn test_collection_vec_interop() {
        let mut v: Vec<i32> = Vec::new();
        let linked: LinkedCollection<i32> = [3, 1, 3].into_iter().collect();
        v.add_all(&linked);
        assert_eq!(v, vec![3, 1, 3]);
        assert!(Collection::remove_value(&mut v, &3));
        assert_eq!(v, vec![1, 3]);
        Collection::clear(&mut v);
        assert_eq!(Collection::size(&v), 0);
    }

    #[test]
    fn test_null_collection_behaves_as_empty() {
        let mut null: NullCollection<i32> = NullCollection::new();
        null.add(1);
        assert_eq!(null.try_add(Some(2)), Ok(()));
        assert_eq!(null.size(), 0);
        assert!(null.is_empty());
        assert!(!null.contains(&1));
        assert!(!null.remove_value(&1));
        assert!(matches!(
            null.to_sequence(),
            Err(CollectionError::UnsupportedOperation(_))
        ));

        let mut target: ArrayCollection<i32> = [5].into_iter().collect();
        target.add_all(&null);
        assert_eq!(target.to_vec(), vec![5]);
    }
}
