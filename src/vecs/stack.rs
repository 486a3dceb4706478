#![cfg(feature = "stack")]
//! LIFO stack over a [`GrowableRing`].
//!
//! The stack only pushes and pops at the back of the ring, so the ring's head never
//! moves and element `i` (counting from the bottom) sits in physical slot `i`.

use core::fmt;

use crate::error::{ContainerError, Result};
use crate::vecs::ring::{self, GrowableRing};

// ─── AnyStack ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over LIFO stacks.
///
/// Implemented by `Vec<T>` and [`ExpandableStack<T, MIN>`] so that tests and callers
/// can drive either through the same interface.
pub trait AnyStack<T> {
    /// Returns the number of items on the stack.
    fn len(&self) -> usize;
    /// Returns `true` if the stack holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Adds `item` to the top.
    fn push(&mut self, item: T);
    /// Removes and returns the top item.
    fn pop(&mut self) -> Result<T>;
    /// Returns the top item without removing it.
    fn peek(&self) -> Result<&T>;
}

impl<T> AnyStack<T> for Vec<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) {
        self.push(item);
    }
    fn pop(&mut self) -> Result<T> {
        self.pop().ok_or(ContainerError::Empty)
    }
    fn peek(&self) -> Result<&T> {
        self.last().ok_or(ContainerError::Empty)
    }
}

impl<T, const MIN: usize> AnyStack<T> for ExpandableStack<T, MIN> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push(&mut self, item: T) {
        self.push(item);
    }
    fn pop(&mut self) -> Result<T> {
        self.pop()
    }
    fn peek(&self) -> Result<&T> {
        self.peek()
    }
}

/// A stack whose buffer doubles when full and halves when a pop finds it at most
/// a quarter full, never dropping below `MIN` slots.
///
/// ```
/// use scratch_collections::{ContainerError, ExpandableStack};
///
/// let mut s: ExpandableStack<&str> = ExpandableStack::new();
/// s.push("a");
/// s.push("b");
/// assert_eq!(s.peek(), Ok(&"b"));
/// assert_eq!(s.pop(), Ok("b"));
/// assert_eq!(s.pop(), Ok("a"));
/// assert_eq!(s.pop(), Err(ContainerError::Empty));
/// ```
#[derive(Clone)]
pub struct ExpandableStack<T, const MIN: usize = 16> {
    ring: GrowableRing<T, MIN>,
}

impl<T, const MIN: usize> ExpandableStack<T, MIN> {
    /// Creates an empty stack with `MIN` slots.
    pub fn new() -> Self {
        Self {
            ring: GrowableRing::new(),
        }
    }

    /// Creates an empty stack that can hold `capacity` items before its first
    /// reallocation (rounded up to a power of two, at least `MIN`).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ring: GrowableRing::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns the size of the backing buffer.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Puts `item` on top. Doubles the buffer first if it is full.
    #[inline(always)]
    pub fn push(&mut self, item: T) {
        self.ring.push_back(item);
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] if the stack is empty; the buffer is not resized in that case.
    pub fn pop(&mut self) -> Result<T> {
        self.ring.pop_back().ok_or(ContainerError::Empty)
    }

    /// Returns the top item.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] if the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.ring.back().ok_or(ContainerError::Empty)
    }

    pub fn peek_mut(&mut self) -> Result<&mut T> {
        self.ring.back_mut().ok_or(ContainerError::Empty)
    }

    /// Removes every item and returns the buffer to `MIN` slots.
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> ring::Iter<'_, T> {
        self.ring.iter()
    }
}

impl<T, const MIN: usize> Default for ExpandableStack<T, MIN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const MIN: usize> fmt::Debug for ExpandableStack<T, MIN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const MIN: usize> PartialEq for ExpandableStack<T, MIN> {
    fn eq(&self, other: &Self) -> bool {
        self.ring == other.ring
    }
}
impl<T: Eq, const MIN: usize> Eq for ExpandableStack<T, MIN> {}

impl<T, const MIN: usize> Extend<T> for ExpandableStack<T, MIN> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.ring.extend(iter);
    }
}

/// Pushes in iteration order, so the last item yielded ends up on top.
impl<T, const MIN: usize> FromIterator<T> for ExpandableStack<T, MIN> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ring: GrowableRing::from_iter(iter),
        }
    }
}

impl<T, const MIN: usize> IntoIterator for ExpandableStack<T, MIN> {
    type Item = T;
    type IntoIter = ring::IntoIter<T, MIN>;

    /// Yields bottom to top, like `Vec`.
    fn into_iter(self) -> Self::IntoIter {
        self.ring.into_iter()
    }
}

impl<'a, T, const MIN: usize> IntoIterator for &'a ExpandableStack<T, MIN> {
    type Item = &'a T;
    type IntoIter = ring::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
