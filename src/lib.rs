#![no_std]

//! `ExtendibleArray`: a random-access array with worst-case constant-time push and pop.
//!
//! A classic doubling vector gives amortized O(1) push, but the push that
//! triggers a reallocation copies every element at once. `ExtendibleArray`
//! pays that copy explicitly and lazily instead: it keeps the previous buffer
//! around and moves exactly one element from it into the larger buffer on
//! every push.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push()`, `try_push()`: O(1) worst case, one element migrated per call
//! - `get()`, `set()`, `len()`: O(1) worst case
//! - `pop()`, `try_pop()`: O(1) worst case
//! - `insert()`, `remove()`: O(n), shifting the elements after the index
//! - Iterator operations: O(n) - linear traversal
//!
//! Buffer allocation initializes every slot, as any zeroed allocation does;
//! the element copying of a resize is what gets spread across pushes.
//!
//! ## Space Complexity
//! - Two buffers: the active one and the one being migrated, half its size
//! - One permanently empty sentinel slot
//!
//! # Buffer Layout
//!
//! ```text
//! old: [ ] [1] [2] [ ]
//! new: [ ] [ ] [ ] [3] [4] [ ] [ ] [ ]
//!                   ^       ^
//!                  seam    end
//! ```
//!
//! Index `i` lives at position `i + 1`. Positions before the seam are read
//! from the old buffer, the rest from the new one. A push writes at `end` and
//! pulls the element just before the seam up into the new buffer. When the
//! new buffer fills, it becomes the old buffer and a buffer of twice the size
//! takes its place (promotion). Removals run the process backwards and, when
//! the new buffer drains, the old buffer takes its place again (demotion).
//!
//! Use [`ExtendibleArray::layout`] to observe the bookkeeping.
//!
//! # Vector Interface
//!
//! ```
//! # use extendible_array::ExtendibleArray;
//! let mut array = ExtendibleArray::new();
//!
//! array.push(1);
//! array.push(2);
//! array.push(4);
//! array.insert(2, 3).unwrap();
//!
//! assert_eq!(array.len(), 4);
//! assert_eq!(array.get(2), Some(&3));
//! assert_eq!(array.set(0, 10), Ok(1));
//! assert_eq!(array.remove(1), Ok(2));
//! assert_eq!(array[0], 10);
//!
//! // Safe variants for error handling
//! assert!(array.try_get(10).is_err());
//! assert!(array.remove(10).is_err());
//! ```
//!
//! # Stack Interface
//!
//! ```
//! # use extendible_array::ExtendibleArray;
//! let mut array = ExtendibleArray::new();
//!
//! array.push("first");
//! array.push("second");
//!
//! assert_eq!(array.last(), Some(&"second"));
//! assert_eq!(array.pop(), Some("second"));
//! assert_eq!(array.pop(), Some("first"));
//! assert_eq!(array.pop(), None);
//! assert!(array.try_pop().is_err());
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use extendible_array::ExtendibleArray;
//! let mut array: ExtendibleArray<u32> = (1..=5).collect();
//!
//! for element in &mut array {
//!     *element *= 10;
//! }
//!
//! let collected: Vec<_> = array.iter().copied().collect();
//! assert_eq!(collected, [10, 20, 30, 40, 50]);
//!
//! let owned: Vec<u32> = array.into_iter().rev().collect();
//! assert_eq!(owned, [50, 40, 30, 20, 10]);
//! ```
//!
//! # Thread Safety
//!
//! Mutation takes `&mut self`, so the borrow checker serializes writers; share
//! an array across threads behind a lock. References handed out by `get` and
//! the iterators cannot outlive the next mutation.
//!
//! ## `no_std` Compatibility
//!
//! The crate needs only `core` and `alloc`. Enable the optional `std` feature
//! to forward `std` to the dependencies:
//! ```toml
//! [dependencies]
//! extendible_array = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod buffer;
mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::{BufferLayout, ExtendibleArray};
pub use error::ExtendibleArrayError;
pub use iter::{IntoIter, Iter, IterMut};
