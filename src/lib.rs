//! # Scratch Collections
//!
//! Two container cores written from first principles:
//!
//! * **Expandable circular buffer**: [`GrowableRing`] backs both [`ExpandableStack`]
//!   (LIFO) and [`ExpandableQueue`] (FIFO). The buffer doubles when a push finds it
//!   full and halves when a pop finds it at most a quarter full, never going below
//!   [`MINIMUM_CAPACITY`] slots.
//! * **Sentinel doubly-linked list**: [`SentinelList`] keeps one permanent,
//!   payload-free node in its ring so insertion, removal, splitting, splicing and
//!   reversal never special-case the ends or the empty list.
//!
//! Fallible operations return [`Result`] with a [`ContainerError`]; a failed call
//! leaves the container untouched.
//!
//! ## Capacity Constraints (`MIN`)
//!
//! The buffer types take a const generic minimum capacity `MIN` (default `16`).
//!
//! * `MIN` must be a **power of two** (e.g. 1, 2, 4, 16...).
//! * The capacity is always a power of two `>= MIN`.
//! * *Constraint source:* the bitmask used to map logical to physical slots.
//!
//! ## Cargo features
//!
//! `stack`, `queue` and `list` each enable one container. All are on by default.
//!
//! ## Examples
//!
//! ### ExpandableStack
//!
//! ```rust
//! use scratch_collections::{ContainerError, ExpandableStack};
//!
//! let mut s: ExpandableStack<i32> = ExpandableStack::new();
//! for i in 0..17 {
//!     s.push(i);
//! }
//! // 17th push doubled the buffer
//! assert_eq!(s.capacity(), 32);
//! assert_eq!(s.pop(), Ok(16));
//!
//! let mut empty: ExpandableStack<i32> = ExpandableStack::new();
//! assert_eq!(empty.pop(), Err(ContainerError::Empty));
//! ```
//!
//! ### ExpandableQueue
//!
//! ```rust
//! use scratch_collections::ExpandableQueue;
//!
//! let mut q: ExpandableQueue<&str> = ExpandableQueue::new();
//! q.enqueue("first");
//! q.enqueue("second");
//! assert_eq!(q.dequeue(), Ok("first"));
//! assert_eq!(q.peek(), Ok(&"second"));
//! ```
//!
//! ### SentinelList
//!
//! ```rust
//! use scratch_collections::SentinelList;
//!
//! let mut list = SentinelList::from([1, 2, 3]);
//! let mut other = SentinelList::from([4, 5]);
//!
//! // O(1) splice; `other` is left empty
//! list.append(&mut other);
//! assert!(other.is_empty());
//!
//! list.filter(|x| x % 2 == 1);
//! assert!(list.every(|x| x % 2 == 1));
//! assert_eq!(list.index_of(&5), Some(2));
//! ```

// --- Module Declarations ---

pub mod error;
pub mod lists;
pub mod vecs;

// --- Re-exports ---

pub use error::{ContainerError, Result};

#[cfg(feature = "list")]
pub use lists::sentinel_list::SentinelList;
#[cfg(feature = "queue")]
pub use vecs::queue::{AnyQueue, ExpandableQueue};
#[cfg(any(feature = "stack", feature = "queue"))]
pub use vecs::ring::{GrowableRing, MINIMUM_CAPACITY};
#[cfg(feature = "stack")]
pub use vecs::stack::{AnyStack, ExpandableStack};
