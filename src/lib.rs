//! # Indexed Collections
//!
//! Two storage strategies behind one collection contract, plus a stack and a
//! postfix evaluator built on top of them.
//!
//! This crate provides `ArrayCollection` and `LinkedCollection`, both of which
//! implement the dyn-compatible [`Collection`] trait, so code that only counts,
//! searches, copies or traverses can accept `&dyn Collection<T>`.
//!
//! ## Key Features
//!
//! * **Contiguous storage:** `ArrayCollection` keeps elements in a boxed slice
//!   with $O(1)$ random access and amortized $O(1)$ append. Capacity doubles only
//!   when an insertion finds the buffer full and never shrinks.
//! * **Linked storage:** `LinkedCollection` is a doubly-linked chain held in an
//!   index-based arena. Appends and prepends are $O(1)$; positional access walks
//!   from whichever end is nearer, costing $O(\min(i, n - i))$.
//! * **Shared copy algorithm:** [`Collection::add_all`] drives the source's
//!   traversal into the target's `add`; both copy constructors use it.
//! * **Checked positions:** every positional operation returns
//!   [`CollectionError::IndexOutOfRange`] instead of panicking. `insert` accepts
//!   `position == len()`, `get` and `remove` do not.
//!
//! ## Examples
//!
//! ### ArrayCollection
//!
//! ```rust
//! use indexed_collections::{ArrayCollection, CollectionError};
//!
//! let mut array = ArrayCollection::with_capacity(2)?;
//! array.add("a");
//! array.add("c");
//! array.insert(1, "b")?; // buffer was full: capacity doubles to 4
//!
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(array.get(1), Ok(&"b"));
//! assert_eq!(array.remove(0), Ok("a"));
//! assert!(array.get(2).is_err());
//! # Ok::<(), CollectionError>(())
//! ```
//!
//! ### LinkedCollection
//!
//! ```rust
//! use indexed_collections::{Collection, LinkedCollection};
//!
//! let mut list: LinkedCollection<i32> = (1..=5).collect();
//! list.insert(0, 0).unwrap();
//! assert_eq!(list.get(5), Ok(&5)); // resolved from the tail
//! assert!(list.remove_value(&3));
//! assert_eq!(list.index_of(&4), Some(3));
//! assert_eq!(list.to_sequence(), Ok(vec![0, 1, 2, 4, 5]));
//! ```
//!
//! ### Copying through the contract
//!
//! ```rust
//! use indexed_collections::{ArrayCollection, LinkedCollection};
//!
//! let list: LinkedCollection<&str> = ["x", "y"].into_iter().collect();
//! let array = ArrayCollection::<&str>::from_collection(&list);
//! let back = LinkedCollection::<&str>::from_collection(&array);
//! assert_eq!(back.to_vec(), vec!["x", "y"]);
//! ```
//!
//! ### Stack
//!
//! ```rust
//! use indexed_collections::{CollectionError, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.peek(), Ok(&1));
//! stack.clear();
//! assert_eq!(stack.pop(), Err(CollectionError::EmptyStack));
//! ```
//!
//! ## Concurrency
//!
//! Nothing here locks. Every operation runs to completion on the calling
//! thread; callers sharing a collection between threads must serialize access
//! themselves, for example behind a `Mutex`.

// --- Module Declarations ---

pub mod array;
pub mod collection;
pub mod error;
pub mod linked;
pub mod postfix;
pub mod stack;

// --- Re-exports ---

pub use array::ArrayCollection;
pub use collection::{Collection, NullCollection};
pub use error::CollectionError;
pub use linked::LinkedCollection;
pub use stack::Stack;
