// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A priority queue implemented with a weighted binary heap.
//!
//! A [`WeightedHeap`] stores weight/payload pairs and surfaces either the
//! smallest or the greatest weight at the root, selected by a runtime
//! [`Mode`]. It can be used wherever a [`BinaryHeap`][bh] can, but keeps the
//! ordering key separate from the value it carries and accepts custom
//! comparators, so payloads never need an `Ord` implementation of their own.
//!
//! Insertion has `O(log n)` time complexity. Popping the root is `O(log n)`.
//! Retrieving the root is `O(1)`. Restoring the heap property over arbitrary
//! contents with [`WeightedHeap::reset`] is `O(n)`.
//!
//! [bh]: https://doc.rust-lang.org/stable/std/collections/struct.BinaryHeap.html

use std::fmt::{self, Debug};
use std::ops::{Deref, DerefMut};
use std::slice;
use std::str::FromStr;
use std::vec;

use compare::{Compare, Natural, natural};
use thiserror::Error;

// A weighted heap is a complete binary tree: every level is fully populated
// except possibly the last, which fills left to right. The tree is stored
// without pointers in a Vec, in level order. Here's the layout of a tree
// with 6 nodes where the numbers represent the *offsets* in the vector:
//
//            0
//          /   \
//         1     2
//        / \   /
//       3   4 5
//
// The children of the node at offset i live at 2*i + 1 and 2*i + 2, and its
// parent at (i - 1) / 2. A child exists iff its offset is below the current
// length; offsets are never dereferenced without that bounds check.
//
// Pushing appends at the tail, popping swaps the tail into the root slot and
// truncates, so the tree stays complete without any extra bookkeeping.

/// Returns the offset of the parent of the node at `index`.
fn parent(index: usize) -> usize {
    debug_assert!(index > 0);
    (index - 1) / 2
}

/// Returns the offset of the left child of the node at `index`.
fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Returns the offset of the right child of the node at `index`.
fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Errors returned by the fallible heap operations.
///
/// Every failure is a local, recoverable condition reported through this
/// enum; weights and payloads are never overloaded with sentinel values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A mode token other than `"min"` or `"max"` reached the configuration
    /// boundary. Carries the offending token.
    #[error("invalid heap mode `{0}`, expected `min` or `max`")]
    InvalidMode(String),
    /// [`pop`](WeightedHeap::pop) or [`peek`](WeightedHeap::peek) was called
    /// on a heap with no nodes.
    #[error("heap is empty")]
    EmptyHeap,
    /// [`fetch`](WeightedHeap::fetch) was given an offset at or past the end
    /// of the heap.
    #[error("index {index} out of range for a heap of {len} nodes")]
    IndexOutOfRange {
        /// The offset that was requested.
        index: usize,
        /// The number of nodes the heap held at the time.
        len: usize,
    },
}

/// The comparison direction of a [`WeightedHeap`]: whether the smallest or
/// the greatest weight surfaces at the root.
///
/// `Mode` is a closed two-variant set, so a constructed heap always has a
/// meaningful direction. Untrusted input such as a configuration value is
/// funneled through the [`FromStr`] impl, the one place an invalid mode can
/// appear and be rejected:
///
/// ```
/// use weighted_heap::Mode;
///
/// assert_eq!("min".parse::<Mode>(), Ok(Mode::Min));
/// assert_eq!("max".parse::<Mode>(), Ok(Mode::Max));
/// assert!("avg".parse::<Mode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// The root holds the smallest weight.
    #[default]
    Min,
    /// The root holds the greatest weight.
    Max,
}

impl FromStr for Mode {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Mode, HeapError> {
        match s {
            "min" => Ok(Mode::Min),
            "max" => Ok(Mode::Max),
            other => Err(HeapError::InvalidMode(other.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Min => "min",
            Mode::Max => "max",
        })
    }
}

/// A single heap entry: an ordering weight and the payload it carries.
///
/// The heap orders nodes by `weight` alone; `payload` is opaque to it and is
/// only moved around, never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<W, T> {
    /// The ordering key.
    pub weight: W,
    /// The value carried alongside the key.
    pub payload: T,
}

impl<W, T> Node<W, T> {
    /// Creates a node from a weight and its payload.
    pub fn new(weight: W, payload: T) -> Node<W, T> {
        Node { weight, payload }
    }
}

/// A priority queue implemented with a binary heap over weighted payloads.
///
/// The heap property is directional: in [`Mode::Min`] every node's weight is
/// less than or equal to the weights of its children, in [`Mode::Max`]
/// greater than or equal. [`push`](Self::push) and [`pop`](Self::pop)
/// maintain the property incrementally; [`reset`](Self::reset) restores it
/// over arbitrary contents and [`is_valid`](Self::is_valid) reports whether
/// it currently holds.
///
/// It is a logic error for a weight to be modified in such a way that its
/// ordering relative to any other weight, as determined by the heap's
/// comparator, changes while it is in the heap. This is normally only
/// possible through `Cell`, `RefCell`, global state, I/O, or unsafe code.
///
/// # Examples
///
/// ```
/// use weighted_heap::{Mode, WeightedHeap};
///
/// let mut heap = WeightedHeap::new(Mode::Min);
/// heap.push(5, "a");
/// heap.push(1, "b");
/// heap.push(3, "c");
///
/// assert_eq!(heap.pop().map(|node| node.payload), Ok("b"));
/// assert_eq!(heap.pop().map(|node| node.payload), Ok("c"));
/// assert_eq!(heap.pop().map(|node| node.payload), Ok("a"));
/// assert!(heap.pop().is_err());
/// ```
#[derive(Clone)]
pub struct WeightedHeap<W, T, C: Compare<W> = Natural<W>> {
    nodes: Vec<Node<W, T>>,
    mode: Mode,
    cmp: C,
}

impl<W: Ord, T> Default for WeightedHeap<W, T> {
    /// Returns an empty [`Mode::Min`] heap ordered by the natural order of
    /// its weights.
    #[inline]
    fn default() -> WeightedHeap<W, T> {
        WeightedHeap::new(Mode::default())
    }
}

impl<W: Ord, T> WeightedHeap<W, T> {
    /// Returns an empty heap ordered according to the natural order of its
    /// weights, in the given mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_heap::{Mode, WeightedHeap};
    ///
    /// let heap = WeightedHeap::<u32, &str>::new(Mode::Min);
    /// assert!(heap.is_empty());
    /// ```
    pub fn new(mode: Mode) -> WeightedHeap<W, T> {
        WeightedHeap::with_comparator(mode, natural())
    }

    /// Returns an empty heap with the given capacity, ordered according to
    /// the natural order of its weights.
    ///
    /// The heap will be able to hold at least `capacity` nodes without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_heap::{Mode, WeightedHeap};
    ///
    /// let heap = WeightedHeap::<u32, &str>::with_capacity(Mode::Max, 5);
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 5);
    /// ```
    pub fn with_capacity(mode: Mode, capacity: usize) -> WeightedHeap<W, T> {
        WeightedHeap::with_capacity_and_comparator(mode, capacity, natural())
    }

    /// Returns a heap using `nodes` verbatim as its backing storage, ordered
    /// according to the natural order of its weights.
    ///
    /// The vector is adopted as-is and is **not** re-heapified: an empty or
    /// already-ordered sequence is immediately usable, while arbitrary input
    /// does not satisfy the heap property until [`reset`](Self::reset) is
    /// called. [`is_valid`](Self::is_valid) reports which state the heap is
    /// in.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_heap::{Mode, Node, WeightedHeap};
    ///
    /// let nodes = vec![Node::new(4, "d"), Node::new(1, "a"), Node::new(3, "c")];
    /// let mut heap = WeightedHeap::from_nodes(nodes, Mode::Min);
    ///
    /// assert!(!heap.is_valid());
    /// heap.reset();
    /// assert!(heap.is_valid());
    /// assert_eq!(heap.peek().map(|node| node.weight), Ok(1));
    /// ```
    pub fn from_nodes(nodes: Vec<Node<W, T>>, mode: Mode) -> WeightedHeap<W, T> {
        WeightedHeap::from_nodes_and_comparator(nodes, mode, natural())
    }
}

impl<W, T, C: Compare<W>> WeightedHeap<W, T, C> {
    /// Returns an empty heap in the given mode, ordered according to the
    /// given comparator.
    pub fn with_comparator(mode: Mode, cmp: C) -> WeightedHeap<W, T, C> {
        WeightedHeap { nodes: vec![], mode, cmp }
    }

    /// Returns an empty heap with the given capacity, ordered according to
    /// the given comparator.
    pub fn with_capacity_and_comparator(
        mode: Mode,
        capacity: usize,
        cmp: C,
    ) -> WeightedHeap<W, T, C> {
        WeightedHeap { nodes: Vec::with_capacity(capacity), mode, cmp }
    }

    /// Returns a heap using `nodes` verbatim as its backing storage, ordered
    /// according to the given comparator.
    ///
    /// Like [`from_nodes`](WeightedHeap::from_nodes), this does not
    /// re-heapify the input; call [`reset`](Self::reset) if the sequence is
    /// not already ordered for `mode`.
    pub fn from_nodes_and_comparator(
        nodes: Vec<Node<W, T>>,
        mode: Mode,
        cmp: C,
    ) -> WeightedHeap<W, T, C> {
        WeightedHeap { nodes, mode, cmp }
    }

    /// Returns the heap's current comparison direction.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Changes the comparison direction without touching the nodes.
    ///
    /// Existing contents are left in their current order, so a non-empty
    /// heap stops satisfying the heap property for the new mode until
    /// [`reset`](Self::reset) is called. That follow-up is the caller's
    /// responsibility; it is not performed implicitly.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_heap::{Mode, WeightedHeap};
    ///
    /// let mut heap = WeightedHeap::new(Mode::Min);
    /// heap.push(1, "a");
    /// heap.push(2, "b");
    ///
    /// heap.set_mode(Mode::Max);
    /// assert!(!heap.is_valid());
    ///
    /// heap.reset();
    /// assert!(heap.is_valid());
    /// assert_eq!(heap.peek().map(|node| node.weight), Ok(2));
    /// ```
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Returns a reference to the node at the root without removing it.
    ///
    /// Fails with [`HeapError::EmptyHeap`] if the heap has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_heap::{Mode, WeightedHeap};
    ///
    /// let mut heap = WeightedHeap::new(Mode::Max);
    /// assert!(heap.peek().is_err());
    ///
    /// heap.push(1, "a");
    /// heap.push(5, "b");
    /// assert_eq!(heap.peek().map(|node| node.weight), Ok(5));
    /// ```
    pub fn peek(&self) -> Result<&Node<W, T>, HeapError> {
        self.nodes.first().ok_or(HeapError::EmptyHeap)
    }

    /// Returns a mutable view of the root node, or `None` if the heap is
    /// empty.
    ///
    /// If the weight is changed through the view, the node is sifted back
    /// into place when the [`PeekMut`] guard drops.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_heap::{Mode, WeightedHeap};
    ///
    /// let mut heap = WeightedHeap::new(Mode::Min);
    /// heap.push(1, "a");
    /// heap.push(2, "b");
    ///
    /// {
    ///     let mut root = heap.peek_mut().unwrap();
    ///     root.weight = 7;
    /// }
    /// assert_eq!(heap.peek().map(|node| node.weight), Ok(2));
    /// ```
    pub fn peek_mut(&mut self) -> Option<PeekMut<'_, W, T, C>> {
        if self.is_empty() {
            None
        } else {
            Some(PeekMut { heap: self, sift: false })
        }
    }

    /// Returns a reference to the node at `index` in the backing sequence
    /// without removing it.
    ///
    /// Offsets follow the level-order array encoding, so `fetch(0)` is the
    /// root. Fails with [`HeapError::IndexOutOfRange`] if `index` is at or
    /// past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_heap::{Mode, WeightedHeap};
    ///
    /// let mut heap = WeightedHeap::new(Mode::Min);
    /// heap.push(2, "b");
    ///
    /// assert_eq!(heap.fetch(0).map(|node| node.payload), Ok("b"));
    /// assert!(heap.fetch(1).is_err());
    /// ```
    pub fn fetch(&self, index: usize) -> Result<&Node<W, T>, HeapError> {
        self.nodes.get(index).ok_or(HeapError::IndexOutOfRange {
            index,
            len: self.nodes.len(),
        })
    }

    /// Returns the number of nodes the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves the minimum capacity for exactly `additional` more nodes to
    /// be inserted into the heap.
    ///
    /// Does nothing if the capacity is already sufficient.
    ///
    /// Note that the allocator may give the heap more space than it
    /// requests. Therefore capacity can not be relied upon to be precisely
    /// minimal. Prefer `reserve` if future insertions are expected.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.nodes.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` more nodes to be inserted
    /// into the heap.
    ///
    /// The heap may reserve more space to avoid frequent reallocations.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Discards as much additional capacity from the heap as possible.
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Removes the root node from the heap and returns it.
    ///
    /// Fails with [`HeapError::EmptyHeap`] if the heap has no nodes. When
    /// more than one node remains, the tail node replaces the root and is
    /// sifted down to restore the heap property.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_heap::{Mode, WeightedHeap};
    ///
    /// let mut heap = WeightedHeap::new(Mode::Min);
    /// heap.push(3, "c");
    /// heap.push(1, "a");
    ///
    /// assert_eq!(heap.pop().map(|node| node.weight), Ok(1));
    /// assert_eq!(heap.pop().map(|node| node.weight), Ok(3));
    /// assert!(heap.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<Node<W, T>, HeapError> {
        if self.nodes.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        let node = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        debug_assert!(self.is_valid());
        Ok(node)
    }

    /// Pushes a node onto the heap.
    ///
    /// The node is appended at the tail and sifted up until its parent
    /// precedes it, so the heap property is preserved.
    pub fn push(&mut self, weight: W, payload: T) {
        self.nodes.push(Node { weight, payload });
        self.sift_up(self.nodes.len() - 1);
        debug_assert!(self.is_valid());
    }

    /// Restores the heap property over the entire backing sequence.
    ///
    /// Runs the standard bottom-up heapify: every parent, from the last down
    /// to the root, is sifted into place. Afterwards
    /// [`is_valid`](Self::is_valid) returns `true` for any input sequence
    /// and any mode. `O(n)`, unlike rebuilding by repeated insertion.
    pub fn reset(&mut self) {
        let mut index = self.nodes.len() / 2;
        while index > 0 {
            index -= 1;
            self.sift_down(index);
        }
        debug_assert!(self.is_valid());
    }

    /// Checks whether every node precedes its children for the current mode.
    ///
    /// Returns `true` for an empty heap. `O(n)`. The structural operations
    /// maintain the heap property incrementally and do not depend on this;
    /// it exists for diagnostics, for tests, and for callers that adopt or
    /// redirect backing storage (see [`from_nodes`](WeightedHeap::from_nodes)
    /// and [`set_mode`](Self::set_mode)).
    pub fn is_valid(&self) -> bool {
        let len = self.nodes.len();
        for index in 0..len {
            let left = left_child(index);
            let right = right_child(index);
            if left < len && !self.precedes(&self.nodes[index].weight, &self.nodes[left].weight) {
                return false;
            }
            if right < len && !self.precedes(&self.nodes[index].weight, &self.nodes[right].weight) {
                return false;
            }
        }
        true
    }

    /// Returns an iterator visiting all nodes in the heap in arbitrary
    /// order.
    pub fn iter(&self) -> Iter<'_, W, T> {
        Iter(self.nodes.iter())
    }

    /// Consumes the heap and returns its nodes as a vector in arbitrary
    /// order.
    pub fn into_vec(self) -> Vec<Node<W, T>> {
        self.nodes
    }

    /// Consumes the heap and returns its nodes in extraction order: weights
    /// ascending for [`Mode::Min`], descending for [`Mode::Max`].
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_heap::{Mode, WeightedHeap};
    ///
    /// let mut heap = WeightedHeap::new(Mode::Min);
    /// heap.push(3, "c");
    /// heap.push(5, "e");
    /// heap.push(1, "a");
    ///
    /// let weights: Vec<u32> =
    ///     heap.into_sorted_vec().into_iter().map(|node| node.weight).collect();
    /// assert_eq!(weights, [1, 3, 5]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<Node<W, T>> {
        for end in (1..self.nodes.len()).rev() {
            self.nodes.swap(0, end);
            self.sift_down_range(0, end);
        }
        // The heapsort pass leaves extraction order reversed.
        self.nodes.reverse();
        self.nodes
    }

    /// Returns the number of nodes in the heap.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the heap contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes all nodes from the heap, keeping its mode and comparator.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Clears the heap, returning an iterator over the removed nodes in
    /// arbitrary order.
    pub fn drain(&mut self) -> Drain<'_, W, T> {
        Drain(self.nodes.drain(..))
    }

    /// Returns true when `a` may sit at or above `b` in the tree for the
    /// current mode: `a <= b` for [`Mode::Min`], `a >= b` for [`Mode::Max`].
    ///
    /// Every structural operation routes its comparisons through this one
    /// predicate.
    fn precedes(&self, a: &W, b: &W) -> bool {
        match self.mode {
            Mode::Min => self.cmp.compares_le(a, b),
            Mode::Max => self.cmp.compares_ge(a, b),
        }
    }

    /// Moves the node at `index` towards the root until its parent precedes
    /// it or it becomes the root.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let par = parent(index);
            if self.precedes(&self.nodes[par].weight, &self.nodes[index].weight) {
                break;
            }
            self.nodes.swap(par, index);
            index = par;
        }
    }

    /// Moves the node at `index` away from the root until it precedes both
    /// of its children, considering only offsets below `end`.
    ///
    /// A child at or past `end` does not exist and is never compared.
    fn sift_down_range(&mut self, mut index: usize, end: usize) {
        loop {
            let left = left_child(index);
            if left >= end {
                break;
            }
            let right = right_child(index);
            // Of the existing children, pick the one that must sit nearer
            // the root.
            let child = if right < end
                && !self.precedes(&self.nodes[left].weight, &self.nodes[right].weight)
            {
                right
            } else {
                left
            };
            if self.precedes(&self.nodes[index].weight, &self.nodes[child].weight) {
                break;
            }
            self.nodes.swap(index, child);
            index = child;
        }
    }

    /// Moves the node at `index` away from the root until it precedes both
    /// of its children or reaches a leaf.
    fn sift_down(&mut self, index: usize) {
        let end = self.nodes.len();
        self.sift_down_range(index, end);
    }
}

impl<W: Debug, T: Debug, C: Compare<W>> Debug for WeightedHeap<W, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<W: Ord, T> FromIterator<(W, T)> for WeightedHeap<W, T> {
    /// Builds a [`Mode::Min`] heap ordered by the natural order of its
    /// weights, heapifying the collected pairs in linear time.
    ///
    /// ```
    /// use weighted_heap::WeightedHeap;
    ///
    /// let heap: WeightedHeap<u32, &str> = vec![(5, "a"), (1, "b")].into_iter().collect();
    /// assert_eq!(heap.peek().map(|node| node.weight), Ok(1));
    /// ```
    fn from_iter<I: IntoIterator<Item = (W, T)>>(iter: I) -> WeightedHeap<W, T> {
        let nodes = iter
            .into_iter()
            .map(|(weight, payload)| Node { weight, payload })
            .collect();
        let mut heap = WeightedHeap::from_nodes(nodes, Mode::Min);
        heap.reset();
        heap
    }
}

impl<W, T, C: Compare<W>> Extend<(W, T)> for WeightedHeap<W, T, C> {
    fn extend<I: IntoIterator<Item = (W, T)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for (weight, payload) in iter {
            self.push(weight, payload);
        }
    }
}

impl<'a, W: 'a + Copy, T: 'a + Copy, C: Compare<W>> Extend<&'a (W, T)> for WeightedHeap<W, T, C> {
    fn extend<I: IntoIterator<Item = &'a (W, T)>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|&(weight, payload)| (weight, payload)));
    }
}

/// An iterator over a `WeightedHeap` in arbitrary order.
///
/// Acquire through [`WeightedHeap::iter`].
pub struct Iter<'a, W, T>(slice::Iter<'a, Node<W, T>>);

impl<'a, W, T> Clone for Iter<'a, W, T> {
    fn clone(&self) -> Iter<'a, W, T> {
        Iter(self.0.clone())
    }
}

impl<'a, W, T> Iterator for Iter<'a, W, T> {
    type Item = &'a Node<W, T>;
    #[inline]
    fn next(&mut self) -> Option<&'a Node<W, T>> {
        self.0.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, W, T> DoubleEndedIterator for Iter<'a, W, T> {
    fn next_back(&mut self) -> Option<&'a Node<W, T>> {
        self.0.next_back()
    }
}

impl<'a, W, T> ExactSizeIterator for Iter<'a, W, T> {}

/// A consuming iterator over a `WeightedHeap` in arbitrary order.
///
/// Acquire through [`IntoIterator::into_iter`].
pub struct IntoIter<W, T>(vec::IntoIter<Node<W, T>>);

impl<W, T> Iterator for IntoIter<W, T> {
    type Item = Node<W, T>;
    #[inline]
    fn next(&mut self) -> Option<Node<W, T>> {
        self.0.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<W, T> DoubleEndedIterator for IntoIter<W, T> {
    fn next_back(&mut self) -> Option<Node<W, T>> {
        self.0.next_back()
    }
}

impl<W, T> ExactSizeIterator for IntoIter<W, T> {}

/// An iterator that drains a `WeightedHeap` in arbitrary order.
///
/// Acquire through [`WeightedHeap::drain`].
pub struct Drain<'a, W, T>(vec::Drain<'a, Node<W, T>>);

impl<'a, W, T> Iterator for Drain<'a, W, T> {
    type Item = Node<W, T>;
    #[inline]
    fn next(&mut self) -> Option<Node<W, T>> {
        self.0.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, W, T> DoubleEndedIterator for Drain<'a, W, T> {
    fn next_back(&mut self) -> Option<Node<W, T>> {
        self.0.next_back()
    }
}

impl<'a, W, T> ExactSizeIterator for Drain<'a, W, T> {}

impl<W, T, C: Compare<W>> IntoIterator for WeightedHeap<W, T, C> {
    type Item = Node<W, T>;
    type IntoIter = IntoIter<W, T>;
    fn into_iter(self) -> IntoIter<W, T> {
        IntoIter(self.nodes.into_iter())
    }
}

impl<'a, W, T, C: Compare<W>> IntoIterator for &'a WeightedHeap<W, T, C> {
    type Item = &'a Node<W, T>;
    type IntoIter = Iter<'a, W, T>;
    fn into_iter(self) -> Iter<'a, W, T> {
        self.iter()
    }
}

/// A mutable view of the root node of a `WeightedHeap`.
///
/// Acquire through [`WeightedHeap::peek_mut`]. When the guard drops after a
/// mutation, the root is sifted down so the heap property holds again.
pub struct PeekMut<'a, W, T, C: Compare<W> = Natural<W>> {
    heap: &'a mut WeightedHeap<W, T, C>,
    sift: bool,
}

impl<'a, W, T, C: Compare<W>> Drop for PeekMut<'a, W, T, C> {
    fn drop(&mut self) {
        if self.sift {
            self.heap.sift_down(0);
        }
    }
}

impl<'a, W, T, C: Compare<W>> Deref for PeekMut<'a, W, T, C> {
    type Target = Node<W, T>;
    fn deref(&self) -> &Node<W, T> {
        debug_assert!(!self.heap.is_empty());
        &self.heap.nodes[0]
    }
}

impl<'a, W, T, C: Compare<W>> DerefMut for PeekMut<'a, W, T, C> {
    fn deref_mut(&mut self) -> &mut Node<W, T> {
        debug_assert!(!self.heap.is_empty());
        self.sift = true;
        &mut self.heap.nodes[0]
    }
}

impl<'a, W, T, C: Compare<W>> PeekMut<'a, W, T, C> {
    /// Removes the peeked node from the heap and returns it.
    pub fn pop(mut self) -> Node<W, T> {
        let node = self
            .heap
            .pop()
            .expect("PeekMut is only handed out for non-empty heaps");
        self.sift = false;
        node
    }
}
