#![cfg(feature = "queue")]
//! FIFO queue over a [`GrowableRing`].
//!
//! Items are enqueued at the ring's tail and dequeued from its head, so the live
//! region wraps around the buffer. Every reallocation straightens it back out to
//! start at slot 0.

use core::fmt;
use std::collections::VecDeque;

use crate::error::{ContainerError, Result};
use crate::vecs::ring::{self, GrowableRing};

// ─── AnyQueue ─────────────────────────────────────────────────────────────────

/// An object-safe abstraction over FIFO queues.
///
/// Implemented by `VecDeque<T>` and [`ExpandableQueue<T, MIN>`].
pub trait AnyQueue<T> {
    /// Returns the number of queued items.
    fn len(&self) -> usize;
    /// Returns `true` if nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Adds `item` at the back.
    fn enqueue(&mut self, item: T);
    /// Removes and returns the front item.
    fn dequeue(&mut self) -> Result<T>;
    /// Returns the front item without removing it.
    fn peek(&self) -> Result<&T>;
}

impl<T> AnyQueue<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }
    fn dequeue(&mut self) -> Result<T> {
        self.pop_front().ok_or(ContainerError::Empty)
    }
    fn peek(&self) -> Result<&T> {
        self.front().ok_or(ContainerError::Empty)
    }
}

impl<T, const MIN: usize> AnyQueue<T> for ExpandableQueue<T, MIN> {
    fn len(&self) -> usize {
        self.len()
    }
    fn enqueue(&mut self, item: T) {
        self.enqueue(item);
    }
    fn dequeue(&mut self) -> Result<T> {
        self.dequeue()
    }
    fn peek(&self) -> Result<&T> {
        self.peek()
    }
}

/// A queue backed by a circular buffer that doubles when full and halves when a
/// dequeue finds it at most a quarter full, never dropping below `MIN` slots.
///
/// Logical element `i` (0 is the front) is stored in slot `(head + i) mod capacity`.
///
/// ```
/// use scratch_collections::ExpandableQueue;
///
/// let mut q: ExpandableQueue<u32> = ExpandableQueue::new();
/// for i in 0..17 {
///     q.enqueue(i);
/// }
/// assert_eq!(q.capacity(), 32);
/// assert_eq!(q.dequeue(), Ok(0));
/// assert_eq!(q.peek(), Ok(&1));
/// ```
#[derive(Clone)]
pub struct ExpandableQueue<T, const MIN: usize = 16> {
    ring: GrowableRing<T, MIN>,
}

impl<T, const MIN: usize> ExpandableQueue<T, MIN> {
    /// Creates an empty queue with `MIN` slots.
    pub fn new() -> Self {
        Self {
            ring: GrowableRing::new(),
        }
    }

    /// Creates an empty queue able to hold `capacity` items before reallocating.
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

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Adds `item` at the back of the queue.
    #[inline(always)]
    pub fn enqueue(&mut self, item: T) {
        self.ring.push_back(item);
    }

    /// Removes and returns the front item.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.ring.pop_front().ok_or(ContainerError::Empty)
    }

    /// Returns the front item, the one [`dequeue`](Self::dequeue) would remove.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.ring.front().ok_or(ContainerError::Empty)
    }

    pub fn peek_mut(&mut self) -> Result<&mut T> {
        self.ring.front_mut().ok_or(ContainerError::Empty)
    }

    /// Returns the item `index` places behind the front.
    ///
    /// # Errors
    /// [`ContainerError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.ring
            .get(index)
            .ok_or(ContainerError::IndexOutOfRange { index, len })
    }

    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Iterates front to back.
    pub fn iter(&self) -> ring::Iter<'_, T> {
        self.ring.iter()
    }
}

impl<T, const MIN: usize> Default for ExpandableQueue<T, MIN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const MIN: usize> fmt::Debug for ExpandableQueue<T, MIN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const MIN: usize> PartialEq for ExpandableQueue<T, MIN> {
    fn eq(&self, other: &Self) -> bool {
        self.ring == other.ring
    }
}
impl<T: Eq, const MIN: usize> Eq for ExpandableQueue<T, MIN> {}

impl<T, const MIN: usize> Extend<T> for ExpandableQueue<T, MIN> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.ring.extend(iter);
    }
}

impl<T, const MIN: usize> FromIterator<T> for ExpandableQueue<T, MIN> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ring: GrowableRing::from_iter(iter),
        }
    }
}

impl<T, const MIN: usize> IntoIterator for ExpandableQueue<T, MIN> {
    type Item = T;
    type IntoIter = ring::IntoIter<T, MIN>;

    fn into_iter(self) -> Self::IntoIter {
        self.ring.into_iter()
    }
}

impl<'a, T, const MIN: usize> IntoIterator for &'a ExpandableQueue<T, MIN> {
    type Item = &'a T;
    type IntoIter = ring::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcg(seed: &mut u64) -> u64 {
        *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        *seed >> 33
    }

    // ─── basic ops ────────────────────────────────────────────────────────────
    #[test]
    fn test_queue_new_is_empty() {
        let q: ExpandableQueue<i32> = ExpandableQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), 16);
    }

    #[test]
    fn test_queue_enqueue_then_dequeue_and_peek() {
        let mut q = ExpandableQueue::<&str>::new();
        q.enqueue("hello");
        q.enqueue("world");
        assert_eq!(q.peek(), Ok(&"hello"));
        assert_eq!(q.len(), 2);
        assert_eq!(q.dequeue(), Ok("hello"));
        assert_eq!(q.dequeue(), Ok("world"));
        assert!(q.is_empty());
    }

    #[test]
    fn test_queue_fifo_order_across_wrap() {
        let mut q = ExpandableQueue::<i32>::new();
        for round in 0..5 {
            for i in 0..12 {
                q.enqueue(round * 100 + i);
            }
            for i in 0..12 {
                assert_eq!(q.dequeue(), Ok(round * 100 + i));
            }
        }
        assert_eq!(q.capacity(), 16);
    }

    #[test]
    fn test_queue_get_by_logical_index() {
        let mut q = ExpandableQueue::<i32>::new();
        q.extend(0..20);
        for _ in 0..5 {
            q.dequeue().unwrap();
        }
        assert_eq!(q.get(0), Ok(&5));
        assert_eq!(q.get(14), Ok(&19));
        assert_eq!(
            q.get(15),
            Err(ContainerError::IndexOutOfRange { index: 15, len: 15 })
        );
    }

    // ─── empty errors ─────────────────────────────────────────────────────────
    #[test]
    fn test_queue_empty_errors() {
        let mut q = ExpandableQueue::<i32>::new();
        assert_eq!(q.dequeue(), Err(ContainerError::Empty));
        assert_eq!(q.peek(), Err(ContainerError::Empty));
        assert_eq!(q.peek_mut(), Err(ContainerError::Empty));
        q.enqueue(1);
        q.dequeue().unwrap();
        assert_eq!(q.dequeue(), Err(ContainerError::Empty));
    }

    // ─── resize policy ────────────────────────────────────────────────────────
    #[test]
    fn test_queue_enqueue_to_full_grows() {
        let mut q = ExpandableQueue::<&str>::new();
        let initial = q.capacity();
        for _ in 0..initial {
            assert_eq!(q.capacity(), initial);
            q.enqueue("abc");
        }
        assert_eq!(q.len(), q.capacity());
        q.enqueue("pi");
        assert_eq!(q.len(), initial + 1);
        assert_eq!(q.capacity(), initial * 2);
        while q.len() < initial * 2 {
            assert_eq!(q.capacity(), initial * 2);
            q.enqueue("abc");
        }
        assert_eq!(q.capacity(), initial * 2);
        q.enqueue("abc");
        assert_eq!(q.capacity(), initial * 4);
    }

    #[test]
    fn test_queue_shrinks_when_sparse() {
        let mut q = ExpandableQueue::<usize>::new();
        let initial = q.capacity();
        for i in 0..=initial * 4 {
            q.enqueue(i);
        }
        assert_eq!(q.len(), initial * 4 + 1);
        assert_eq!(q.capacity(), initial * 8);
        q.dequeue().unwrap();
        assert_eq!(q.len(), initial * 4);
        assert_eq!(q.capacity(), initial * 8);
        for _ in 0..initial * 2 {
            q.dequeue().unwrap();
        }
        assert_eq!(q.len(), initial * 2);
        assert_eq!(q.capacity(), initial * 8);
        let front = *q.peek().unwrap();
        assert_eq!(q.dequeue(), Ok(front));
        assert_eq!(q.len(), initial * 2 - 1);
        assert_eq!(q.capacity(), initial * 4);
        assert_eq!(q.peek(), Ok(&(front + 1)));
    }

    #[test]
    fn test_queue_does_not_shrink_at_minimum() {
        let mut q = ExpandableQueue::<i32>::new();
        let initial = q.capacity();
        for i in 0..initial as i32 {
            q.enqueue(i);
            assert_eq!(q.capacity(), initial);
        }
        for _ in 0..initial {
            q.dequeue().unwrap();
            assert_eq!(q.capacity(), initial);
        }
    }

    #[test]
    fn test_queue_reallocation_preserves_front() {
        let mut q: ExpandableQueue<i32, 4> = ExpandableQueue::new();
        q.extend([1, 2, 3, 4]);
        q.dequeue().unwrap();
        q.dequeue().unwrap();
        q.extend([5, 6]); // wrapped, full
        let before = *q.peek().unwrap();
        q.enqueue(7); // grow
        assert_eq!(q.capacity(), 8);
        assert_eq!(q.peek(), Ok(&before));
        assert_eq!(q.get(0), Ok(&before));
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
    }

    // ─── reference model ──────────────────────────────────────────────────────
    #[test]
    fn test_queue_matches_vec_deque_model() {
        let mut seed = 0xfeed;
        let mut model: VecDeque<u64> = VecDeque::new();
        let mut q: ExpandableQueue<u64> = ExpandableQueue::new();
        for step in 0..20_000 {
            let roll = lcg(&mut seed) % 3;
            let enqueue = if step < 10_000 { roll != 0 } else { roll == 0 };
            if enqueue {
                let v = lcg(&mut seed);
                AnyQueue::enqueue(&mut model, v);
                q.enqueue(v);
            } else {
                assert_eq!(AnyQueue::dequeue(&mut model), q.dequeue());
            }
            assert_eq!(AnyQueue::peek(&model), q.peek());
            assert_eq!(model.len(), q.len());
            let cap = q.capacity();
            assert!(cap.is_power_of_two() && cap >= 16 && q.len() <= cap);
        }
        assert!(q.iter().eq(model.iter()));
    }

    // ─── traits ───────────────────────────────────────────────────────────────
    #[test]
    fn test_queue_clone_eq_debug() {
        let q: ExpandableQueue<i32> = (1..=3).collect();
        let mut cloned = q.clone();
        assert_eq!(q, cloned);
        cloned.dequeue().unwrap();
        assert_ne!(q, cloned);
        assert_eq!(format!("{:?}", q), "[1, 2, 3]");
    }

    #[test]
    fn test_queue_into_iter_front_to_back() {
        let q: ExpandableQueue<i32> = (1..=40).collect();
        assert_eq!(q.into_iter().collect::<Vec<_>>(), (1..=40).collect::<Vec<_>>());
    }

    #[test]
    fn test_queue_any_queue_dyn_dispatch() {
        let mut q = ExpandableQueue::<i32>::new();
        let any: &mut dyn AnyQueue<i32> = &mut q;
        any.enqueue(1);
        any.enqueue(2);
        assert_eq!(any.len(), 2);
        assert_eq!(any.peek(), Ok(&1));
        assert_eq!(any.dequeue(), Ok(1));
        assert_eq!(any.dequeue(), Ok(2));
        assert!(any.is_empty());
        assert_eq!(any.dequeue(), Err(ContainerError::Empty));
    }
}
