//! Power-of-two circular buffer that doubles when full and halves when sparse.
//!
//! [`GrowableRing`] is the backing store for both [`ExpandableStack`](crate::ExpandableStack)
//! and [`ExpandableQueue`](crate::ExpandableQueue). The stack only ever touches the back
//! end, so its `head` stays at `0` and the live region is `[0, len)`; the queue consumes
//! from the front and lets `head` travel around the buffer.
//!
//! # Resize policy
//! | Event | Condition | New capacity |
//! |-------|-----------|--------------|
//! | push  | `len == capacity` (checked before writing) | `capacity * 2` |
//! | pop   | `len <= capacity / 4 && capacity > MIN` (checked before removing) | `capacity / 2` |
//!
//! Growth triggers at 100% occupancy and shrinking at 25%, so after either
//! reallocation the buffer sits at 50% and needs `capacity / 4` further operations
//! in one direction before the next reallocation.

use core::fmt;
use core::iter::FusedIterator;

/// Capacity every ring starts at unless a different `MIN` is chosen.
pub const MINIMUM_CAPACITY: usize = 16;

/// A growable ring buffer of `Option<T>` slots.
///
/// # Invariants
/// - `capacity()` is a power of two and never below `MIN`.
/// - Logical element `i` lives in slot `(head + i) & (capacity - 1)`.
/// - Slots outside the live region hold `None`.
///
/// `MIN` must be a non-zero power of two; this is checked at compile time by the
/// constructors.
#[derive(Clone)]
pub struct GrowableRing<T, const MIN: usize = 16> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T, const MIN: usize> GrowableRing<T, MIN> {
    /// Creates an empty ring with `MIN` slots.
    pub fn new() -> Self {
        Self::with_capacity(MIN)
    }

    /// Creates an empty ring able to hold `capacity` items without reallocating.
    ///
    /// The request is rounded up to a power of two and never below `MIN`.
    pub fn with_capacity(capacity: usize) -> Self {
        const {
            assert!(MIN.is_power_of_two(), "GrowableRing MIN must be a power of two");
        }
        Self {
            slots: Self::alloc(capacity.max(MIN).next_power_of_two()),
            head: 0,
            len: 0,
        }
    }

    fn alloc(capacity: usize) -> Box<[Option<T>]> {
        (0..capacity).map(|_| None).collect()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of physical slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        (idx + add) & (self.capacity() - 1)
    }

    /// Slot the next `push_back` will write to.
    #[inline(always)]
    fn tail(&self) -> usize {
        self.wrap_add(self.head, self.len)
    }

    /// Returns the element at logical `index` (0 is the front), or `None`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.slots[self.wrap_add(self.head, index)].as_ref()
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let idx = self.wrap_add(self.head, index);
            self.slots[idx].as_mut()
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last),
            None => None,
        }
    }

    /// Appends `item` at the logical back, doubling the buffer first if it is full.
    #[inline(always)]
    pub fn push_back(&mut self, item: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let tail = self.tail();
        self.slots[tail] = Some(item);
        self.len += 1;
    }

    /// Cold path: doubles the buffer.
    #[inline(never)]
    fn grow(&mut self) {
        self.reallocate(self.capacity() * 2);
    }

    /// Removes and returns the front element, or `None` if empty.
    ///
    /// The emptiness check runs before the shrink check.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.shrink_if_sparse();
        Some(self.remove_front())
    }

    /// Removes and returns the back element, or `None` if empty.
    ///
    /// The emptiness check runs before the shrink check.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.shrink_if_sparse();
        Some(self.remove_back())
    }

    /// Halves the buffer when occupancy is at most 25% and the capacity is above `MIN`.
    #[inline(always)]
    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if self.len <= capacity / 4 && capacity > MIN {
            self.reallocate(capacity / 2);
        }
    }

    /// Takes the front item without any resize logic. `len` must be non-zero.
    fn remove_front(&mut self) -> T {
        let item = self.take_slot(self.head);
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
        item
    }

    /// Takes the back item without any resize logic. `len` must be non-zero.
    fn remove_back(&mut self) -> T {
        let idx = self.wrap_add(self.head, self.len - 1);
        let item = self.take_slot(idx);
        self.len -= 1;
        item
    }

    fn take_slot(&mut self, idx: usize) -> T {
        match self.slots[idx].take() {
            Some(item) => item,
            None => unreachable!("slot {idx} inside the live region is vacant"),
        }
    }

    /// Moves the live elements into a fresh buffer of `new_capacity` slots.
    ///
    /// Logical element `i` lands in physical slot `i`, so afterwards `head == 0`
    /// and the tail is `len`.
    #[inline(never)]
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len && new_capacity >= MIN);
        debug_assert!(new_capacity.is_power_of_two());
        let mut slots = Self::alloc(new_capacity);
        for (i, slot) in slots.iter_mut().take(self.len).enumerate() {
            let idx = self.wrap_add(self.head, i);
            *slot = self.slots[idx].take();
        }
        log::trace!(
            "ring reallocated: capacity {} -> {}, len {}",
            self.capacity(),
            new_capacity,
            self.len
        );
        self.slots = slots;
        self.head = 0;
    }

    /// Drops every element and returns the buffer to `MIN` slots.
    pub fn clear(&mut self) {
        self.slots = Self::alloc(MIN);
        self.head = 0;
        self.len = 0;
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            head: self.head,
            front: 0,
            back: self.len,
        }
    }
}

impl<T, const MIN: usize> Default for GrowableRing<T, MIN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const MIN: usize> fmt::Debug for GrowableRing<T, MIN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const MIN: usize> PartialEq for GrowableRing<T, MIN> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq, const MIN: usize> Eq for GrowableRing<T, MIN> {}

impl<T, const MIN: usize> Extend<T> for GrowableRing<T, MIN> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, const MIN: usize> FromIterator<T> for GrowableRing<T, MIN> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Self::new();
        ring.extend(iter);
        ring
    }
}

/// Borrowing iterator over a [`GrowableRing`] in logical order.
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    head: usize,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    fn slot(&self, logical: usize) -> Option<&'a T> {
        let slots: &'a [Option<T>] = self.slots;
        slots[(self.head + logical) & (slots.len() - 1)].as_ref()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.slot(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.slot(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Owning iterator over a [`GrowableRing`]. Never reallocates while draining.
pub struct IntoIter<T, const MIN: usize> {
    ring: GrowableRing<T, MIN>,
}

impl<T, const MIN: usize> Iterator for IntoIter<T, MIN> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.ring.is_empty() {
            None
        } else {
            Some(self.ring.remove_front())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len, Some(self.ring.len))
    }
}

impl<T, const MIN: usize> DoubleEndedIterator for IntoIter<T, MIN> {
    fn next_back(&mut self) -> Option<T> {
        if self.ring.is_empty() {
            None
        } else {
            Some(self.ring.remove_back())
        }
    }
}

impl<T, const MIN: usize> ExactSizeIterator for IntoIter<T, MIN> {}
impl<T, const MIN: usize> FusedIterator for IntoIter<T, MIN> {}

impl<T, const MIN: usize> IntoIterator for GrowableRing<T, MIN> {
    type Item = T;
    type IntoIter = IntoIter<T, MIN>;

    fn into_iter(self) -> IntoIter<T, MIN> {
        IntoIter { ring: self }
    }
}

impl<'a, T, const MIN: usize> IntoIterator for &'a GrowableRing<T, MIN> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
