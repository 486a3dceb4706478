#![cfg(feature = "list")]
//! Doubly-linked list built around one permanent, payload-free sentinel node.
//!
//! # Layout
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   ↓                                                              │
//! ┌──────────┐  next   ┌────────┐  next   ┌────────┐  next         │
//! │ sentinel │ ──────→ │ node 0 │ ──────→ │ node 1 │ ──────→ ┄┄ ───┘
//! │ (no item)│ ←────── │  item  │ ←────── │  item  │ ←────── ┄┄ ───┐
//! └──────────┘  prev   └────────┘  prev   └────────┘  prev         │
//!   │                                                              ↑
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//! `sentinel.next` is the head and `sentinel.prev` the tail; an empty list is the
//! sentinel linked to itself. Every insertion is "link before some node" and every
//! removal is "unlink this node", with no special case for either end or for the
//! list becoming empty.
//!
//! # Ownership
//! The list owns every node, sentinel included. Links are non-owning
//! [`NonNull`] pointers; nodes are freed only when unlinked by the list itself or
//! when the list is dropped. Position `len` names the sentinel, so
//! `insert(len, x)` appends.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::{self, MaybeUninit};
use core::ptr::NonNull;

use crate::error::{ContainerError, Result};

type Link<T> = NonNull<Node<T>>;

struct Node<T> {
    next: Link<T>,
    prev: Link<T>,
    /// Uninitialized only in the sentinel.
    item: MaybeUninit<T>,
}

/// A doubly-linked list with a sentinel node.
///
/// Insertion and removal at either end, [`append`](Self::append), and the relink
/// step of [`split_off`](Self::split_off), [`take`](Self::take) and
/// [`drop`](Self::drop) are O(1). Positional access is O(n), walking from
/// whichever end is closer.
///
/// ```
/// use scratch_collections::SentinelList;
///
/// let mut list = SentinelList::from([1, 2, 3, 4, 5]);
/// list.take(4).unwrap();
/// list.drop(1).unwrap();
/// list.reverse();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2]);
/// ```
///
/// Appending a list to itself is rejected by the borrow checker:
///
/// ```compile_fail
/// use scratch_collections::SentinelList;
///
/// let mut list = SentinelList::from([1, 2]);
/// list.append(&mut list);
/// ```
pub struct SentinelList<T> {
    sentinel: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// The list owns its nodes exactly like a `Box` would.
unsafe impl<T: Send> Send for SentinelList<T> {}
unsafe impl<T: Sync> Sync for SentinelList<T> {}

impl<T> SentinelList<T> {
    /// Creates an empty list. Allocates the sentinel.
    pub fn new() -> Self {
        let sentinel = NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            item: MaybeUninit::uninit(),
        })));
        unsafe {
            (*sentinel.as_ptr()).next = sentinel;
            (*sentinel.as_ptr()).prev = sentinel;
        }
        Self {
            sentinel,
            len: 0,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn head(&self) -> Link<T> {
        unsafe { (*self.sentinel.as_ptr()).next }
    }

    #[inline(always)]
    fn tail(&self) -> Link<T> {
        unsafe { (*self.sentinel.as_ptr()).prev }
    }

    /// Allocates a node for `item` and links it immediately before `at`.
    fn link_before(&mut self, item: T, at: Link<T>) {
        unsafe {
            let prev = (*at.as_ptr()).prev;
            let node = NonNull::from(Box::leak(Box::new(Node {
                next: at,
                prev,
                item: MaybeUninit::new(item),
            })));
            (*prev.as_ptr()).next = node;
            (*at.as_ptr()).prev = node;
        }
        self.len += 1;
    }

    /// Unlinks `node`, frees it and returns its item.
    ///
    /// # Safety
    /// `node` must be a non-sentinel node of this list.
    unsafe fn unlink(&mut self, node: Link<T>) -> T {
        unsafe {
            let Node { next, prev, item } = *Box::from_raw(node.as_ptr());
            (*prev.as_ptr()).next = next;
            (*next.as_ptr()).prev = prev;
            self.len -= 1;
            item.assume_init()
        }
    }

    /// Returns the node at `index`, or the sentinel when `index == len`.
    ///
    /// Walks forward from the head for the first half and backward from the
    /// sentinel for the second.
    fn node_at(&self, index: usize) -> Link<T> {
        debug_assert!(index <= self.len);
        unsafe {
            if index <= self.len / 2 {
                let mut node = self.head();
                for _ in 0..index {
                    node = (*node.as_ptr()).next;
                }
                node
            } else {
                let mut node = self.sentinel;
                for _ in index..self.len {
                    node = (*node.as_ptr()).prev;
                }
                node
            }
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(ContainerError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn check_count(&self, n: usize) -> Result<()> {
        if n <= self.len {
            Ok(())
        } else {
            Err(ContainerError::InvalidArgument { n, len: self.len })
        }
    }

    // ─── ends ────────────────────────────────────────────────────────────────

    /// Inserts `item` right after the sentinel.
    pub fn push_front(&mut self, item: T) {
        self.link_before(item, self.head());
    }

    /// Inserts `item` right before the sentinel.
    pub fn push_back(&mut self, item: T) {
        self.link_before(item, self.sentinel);
    }

    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        Ok(unsafe { self.unlink(self.head()) })
    }

    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        Ok(unsafe { self.unlink(self.tail()) })
    }

    /// Returns the head item.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] if the list is empty.
    pub fn first(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        Ok(unsafe { (*self.head().as_ptr()).item.assume_init_ref() })
    }

    /// Returns the tail item.
    ///
    /// # Errors
    /// [`ContainerError::Empty`] if the list is empty.
    pub fn last(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        Ok(unsafe { (*self.tail().as_ptr()).item.assume_init_ref() })
    }

    // ─── positional ──────────────────────────────────────────────────────────

    /// Inserts `item` before the element currently at `index`; `index == len` appends.
    ///
    /// # Errors
    /// [`ContainerError::IndexOutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.len {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.link_before(item, self.node_at(index));
        Ok(())
    }

    /// Unlinks the element at `index` and returns it.
    ///
    /// # Errors
    /// [`ContainerError::IndexOutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(unsafe { self.unlink(self.node_at(index)) })
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(unsafe { (*self.node_at(index).as_ptr()).item.assume_init_ref() })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(unsafe { (*self.node_at(index).as_ptr()).item.assume_init_mut() })
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, item))
    }

    /// Position of the first element equal to `item`, scanning from the head.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == item)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    // ─── splicing ────────────────────────────────────────────────────────────

    /// Detaches the elements from `at` onward into a new list.
    ///
    /// Finding the cut walks from the nearer end; the detach itself rewires four
    /// links on each side.
    ///
    /// # Errors
    /// [`ContainerError::InvalidArgument`] if `at > len`.
    pub fn split_off(&mut self, at: usize) -> Result<Self> {
        self.check_count(at)?;
        let mut rest = Self::new();
        if at == self.len {
            return Ok(rest);
        }
        let first = self.node_at(at);
        let last = self.tail();
        unsafe {
            let before = (*first.as_ptr()).prev;
            (*before.as_ptr()).next = self.sentinel;
            (*self.sentinel.as_ptr()).prev = before;

            (*first.as_ptr()).prev = rest.sentinel;
            (*last.as_ptr()).next = rest.sentinel;
            (*rest.sentinel.as_ptr()).next = first;
            (*rest.sentinel.as_ptr()).prev = last;
        }
        rest.len = self.len - at;
        self.len = at;
        Ok(rest)
    }

    /// Keeps only the first `n` elements.
    ///
    /// # Errors
    /// [`ContainerError::InvalidArgument`] if `n > len`; the list is unchanged.
    pub fn take(&mut self, n: usize) -> Result<()> {
        self.split_off(n)?;
        Ok(())
    }

    /// Removes the first `n` elements.
    ///
    /// # Errors
    /// [`ContainerError::InvalidArgument`] if `n > len`; the list is unchanged.
    pub fn drop(&mut self, n: usize) -> Result<()> {
        let rest = self.split_off(n)?;
        let _front = mem::replace(self, rest);
        Ok(())
    }

    /// Moves every node of `other` onto the end of `self` in O(1), leaving
    /// `other` empty and reusable.
    ///
    /// `self` and `other` are distinct `&mut` borrows, so a list can never be
    /// appended to itself.
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        unsafe {
            let first = other.head();
            let last = other.tail();
            let tail = self.tail();
            (*tail.as_ptr()).next = first;
            (*first.as_ptr()).prev = tail;
            (*last.as_ptr()).next = self.sentinel;
            (*self.sentinel.as_ptr()).prev = last;

            let os = other.sentinel;
            (*os.as_ptr()).next = os;
            (*os.as_ptr()).prev = os;
        }
        self.len += mem::replace(&mut other.len, 0);
    }

    /// Reverses the list in place by swapping `next` and `prev` on every node,
    /// sentinel included.
    pub fn reverse(&mut self) {
        unsafe {
            let mut node = self.sentinel;
            loop {
                let n = node.as_ptr();
                mem::swap(&mut (*n).next, &mut (*n).prev);
                node = (*n).prev;
                if node == self.sentinel {
                    break;
                }
            }
        }
    }

    // ─── bulk ────────────────────────────────────────────────────────────────

    /// Replaces every item with `f(item)`, head to tail.
    pub fn map<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> T,
    {
        for item in self.iter_mut() {
            let mapped = f(item);
            *item = mapped;
        }
    }

    /// Unlinks every element for which `keep` returns `false`. Survivors keep
    /// their relative order.
    pub fn filter<P>(&mut self, mut keep: P)
    where
        P: FnMut(&T) -> bool,
    {
        let mut node = self.head();
        while node != self.sentinel {
            unsafe {
                let next = (*node.as_ptr()).next;
                if !keep((*node.as_ptr()).item.assume_init_ref()) {
                    self.unlink(node);
                }
                node = next;
            }
        }
    }

    /// `true` if `p` holds for every element; `true` for an empty list.
    pub fn every<P>(&self, p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(p)
    }

    /// `true` if `p` holds for some element; `false` for an empty list.
    pub fn some<P>(&self, p: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(p)
    }

    /// Calls `visitor` on each item, head to tail.
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visitor);
    }

    /// Unlinks and drops every element. The sentinel stays.
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    // ─── iteration ───────────────────────────────────────────────────────────

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head(),
            tail: self.tail(),
            len: self.len,
            _marker: PhantomData,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            head: self.head(),
            tail: self.tail(),
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for SentinelList<T> {
    fn drop(&mut self) {
        self.clear();
        unsafe {
            drop(Box::from_raw(self.sentinel.as_ptr()));
        }
    }
}

impl<T> Default for SentinelList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SentinelList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for SentinelList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SentinelList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for SentinelList<T> {}

impl<T> Extend<T> for SentinelList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for SentinelList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SentinelList<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

// ─── iterators ───────────────────────────────────────────────────────────────

/// Borrowing iterator, head to tail.
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<&'a Node<T>>,
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        unsafe {
            let node = &*self.head.as_ptr();
            self.head = node.next;
            self.len -= 1;
            Some(node.item.assume_init_ref())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        unsafe {
            let node = &*self.tail.as_ptr();
            self.tail = node.prev;
            self.len -= 1;
            Some(node.item.assume_init_ref())
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Mutably borrowing iterator, head to tail. Items can change, links cannot.
pub struct IterMut<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        unsafe {
            let node = &mut *self.head.as_ptr();
            self.head = node.next;
            self.len -= 1;
            Some(node.item.assume_init_mut())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        unsafe {
            let node = &mut *self.tail.as_ptr();
            self.tail = node.prev;
            self.len -= 1;
            Some(node.item.assume_init_mut())
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator, head to tail.
pub struct IntoIter<T> {
    list: SentinelList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SentinelList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SentinelList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SentinelList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
