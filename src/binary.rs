//! Array-backed binary heap
//!
//! [`BinaryHeap`] embeds an implicit binary tree in a `Vec<T>`: the node at
//! index `i` has children at `2i + 1` and `2i + 2`. A single engine serves
//! both max-heaps and min-heaps; the direction comes from the
//! [`Order`](crate::order::Order) policy fixed at construction.
//!
//! The backing vector may be longer than the logical heap. Only the prefix
//! `[0, len())` is subject to the heap property; heapsort grows a sorted
//! suffix behind it, and [`BinaryHeap::with_elements`] starts with an empty
//! logical heap until [`BinaryHeap::build`] runs.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `build`     | O(n)       |
//! | `insert`    | O(log n)   |
//! | `delete`    | O(log n)   |
//! | `extract`   | O(log n)   |
//! | `update`    | O(log n)   |
//! | `peek`      | O(1)       |
//! | `heapsort`  | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use rust_array_heap::{MaxHeap, MinHeap, MaxFirst, MinFirst};
//!
//! let mut heap = MaxHeap::from_vec(vec![5, 3, 8, 1, 9], MaxFirst);
//! assert_eq!(heap.peek(), Some(&9));
//! heap.heapsort();
//! assert_eq!(heap.backing(), &[1, 3, 5, 8, 9]);
//!
//! let mut heap = MinHeap::from_vec(vec![5, 3, 8, 1, 9], MinFirst);
//! heap.heapsort();
//! assert_eq!(heap.backing(), &[9, 8, 5, 3, 1]);
//! ```

use std::fmt;

use crate::observer::{self, Event, Observer};
use crate::order::{MaxFirst, MinFirst, Order};
use crate::traits::{Heap, HeapError};
use crate::tree;

/// A binary heap over a growable array, ordered by `O`, reporting to `Ob`
///
/// `Ob` defaults to `()`, which discards all notifications at no cost.
#[derive(Clone)]
pub struct BinaryHeap<T, O = MaxFirst, Ob = ()> {
    elements: Vec<T>,
    size: usize,
    order: O,
    observer: Ob,
}

/// Max-first binary heap
pub type MaxHeap<T> = BinaryHeap<T, MaxFirst>;

/// Min-first binary heap
pub type MinHeap<T> = BinaryHeap<T, MinFirst>;

impl<T, O: Order<T>> BinaryHeap<T, O> {
    /// Creates an empty heap
    pub fn new(order: O) -> Self {
        Self::with_elements(Vec::new(), order)
    }

    /// Wraps `elements` without establishing the heap property
    ///
    /// The logical heap starts empty; call [`build`](Self::build) to make
    /// every element a member.
    pub fn with_elements(elements: Vec<T>, order: O) -> Self {
        Self {
            elements,
            size: 0,
            order,
            observer: (),
        }
    }

    /// Builds a heap from `elements` in O(n)
    pub fn from_vec(elements: Vec<T>, order: O) -> Self {
        let mut heap = Self::with_elements(elements, order);
        heap.build();
        heap
    }
}

impl<T, O: Order<T>, Ob: Observer<T>> BinaryHeap<T, O, Ob> {
    /// Replaces the observer, keeping contents and order
    pub fn with_observer<Ob2: Observer<T>>(self, observer: Ob2) -> BinaryHeap<T, O, Ob2> {
        BinaryHeap {
            elements: self.elements,
            size: self.size,
            order: self.order,
            observer,
        }
    }

    /// Number of elements in the logical heap
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the logical heap is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The logical heap, `[0, len())`, in tree layout order
    pub fn as_slice(&self) -> &[T] {
        &self.elements[..self.size]
    }

    /// The whole backing sequence, including anything past the logical heap
    pub fn backing(&self) -> &[T] {
        &self.elements
    }

    /// Iterates over the logical heap in tree layout order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// The root, or `None` if the logical heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The ordering policy fixed at construction
    pub fn order(&self) -> &O {
        &self.order
    }

    /// The attached observer
    pub fn observer(&self) -> &Ob {
        &self.observer
    }

    /// The attached observer, mutably
    pub fn observer_mut(&mut self) -> &mut Ob {
        &mut self.observer
    }

    /// Consumes the heap, returning the whole backing sequence
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Consumes the heap, returning every element sorted in the order's
    /// reverse direction (ascending for max-first)
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.heapsort();
        self.elements
    }

    /// Parent of `i` within the logical heap
    pub fn parent(&self, i: usize) -> Option<usize> {
        tree::parent(i, self.size)
    }

    /// Left child of `i` within the logical heap
    pub fn left(&self, i: usize) -> Option<usize> {
        tree::left(i, self.size)
    }

    /// Right child of `i` within the logical heap
    pub fn right(&self, i: usize) -> Option<usize> {
        tree::right(i, self.size)
    }

    /// Returns true if every parent in the logical heap precedes its children
    pub fn is_heap(&self) -> bool {
        (1..self.size).all(|c| {
            let p = (c - 1) / 2;
            self.order.precedes(&self.elements[p], &self.elements[c])
        })
    }

    /// Checks the heap property at `i` against its children
    ///
    /// Returns `(true, i)` if it holds, otherwise `(false, c)` where `c` is
    /// the child that should replace `i`. When both children are equally
    /// extreme, the left child wins.
    pub fn heap_property(&self, i: usize) -> Result<(bool, usize), HeapError> {
        self.check_index(i)?;
        let target = self.worst_offender(i);
        Ok((target == i, target))
    }

    /// Sifts the element at `i` down until its subtree is a heap
    ///
    /// Both child subtrees of `i` must already be heaps.
    pub fn heapify(&mut self, i: usize) -> Result<(), HeapError> {
        self.check_index(i)?;
        self.sift_down(i);
        Ok(())
    }

    /// Sifts the element at `i` up until the path from the root is ordered
    pub fn bubble_up(&mut self, i: usize) -> Result<(), HeapError> {
        self.check_index(i)?;
        self.sift_up(i);
        Ok(())
    }

    /// Establishes the heap property over the whole backing sequence
    ///
    /// Leaves are already heaps, so only `[0, n/2)` is visited, deepest
    /// subtree roots first.
    pub fn build(&mut self) {
        self.rebuild();
        self.report("build");
    }

    /// Sorts the backing sequence in place
    ///
    /// Each round moves the current root behind the shrinking logical heap,
    /// so a max-first heap ends up ascending and a min-first heap
    /// descending. Afterwards the logical heap is empty and
    /// [`backing`](Self::backing) holds the sorted elements.
    pub fn heapsort(&mut self) {
        self.rebuild();
        for end in (1..self.elements.len()).rev() {
            self.swap(0, end);
            self.size -= 1;
            self.sift_down(0);
        }
        self.size = 0;
        self.report("heapsort");
    }

    /// Inserts `value`
    ///
    /// If the logical heap does not cover the backing sequence (after
    /// `heapsort` or `with_elements`), it is rebuilt first so that no element
    /// is left outside the heap.
    pub fn insert(&mut self, value: T) {
        if self.size < self.elements.len() {
            self.rebuild();
        }
        self.elements.push(value);
        self.size += 1;
        self.sift_up(self.size - 1);
        self.report("insert");
    }

    /// Removes and returns the element at `i`
    pub fn delete(&mut self, i: usize) -> Result<T, HeapError> {
        let removed = self.remove_at(i)?;
        self.report("delete");
        Ok(removed)
    }

    /// Removes and returns the root
    pub fn extract(&mut self) -> Result<T, HeapError> {
        if self.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        let root = self.remove_at(0)?;
        self.report("extract");
        Ok(root)
    }

    /// Replaces the element at `i` with `value`, returning the old element
    ///
    /// The new value may move either toward the root or toward the leaves.
    pub fn update(&mut self, i: usize, value: T) -> Result<T, HeapError> {
        self.check_index(i)?;
        let old = std::mem::replace(&mut self.elements[i], value);
        self.repair(i);
        self.report("update");
        Ok(old)
    }

    /// Publishes the current logical heap to the observer
    pub fn refresh(&mut self) {
        if self.observer.is_attached() {
            observer::publish_frame(&mut self.observer, &self.elements[..self.size]);
        }
    }

    fn rebuild(&mut self) {
        self.size = self.elements.len();
        for i in (0..tree::first_leaf(self.size)).rev() {
            self.sift_down(i);
        }
    }

    fn remove_at(&mut self, i: usize) -> Result<T, HeapError> {
        self.check_index(i)?;
        let last = self.size - 1;
        if i != last {
            self.swap(i, last);
        }
        self.size -= 1;
        let removed = self.elements.remove(last);
        if i < self.size {
            self.repair(i);
        }
        Ok(removed)
    }

    /// Tells the observer that public operation `name` has completed
    fn report(&mut self, name: &'static str) {
        if self.observer.is_attached() {
            self.observer.on_event(Event::Op {
                name,
                heap: &self.elements,
                size: self.size,
            });
        }
    }

    fn check_index(&self, i: usize) -> Result<(), HeapError> {
        if i < self.size {
            Ok(())
        } else {
            Err(HeapError::OutOfRange {
                index: i,
                size: self.size,
            })
        }
    }

    /// Index among `i` and its children that belongs on top
    fn worst_offender(&self, i: usize) -> usize {
        let mut target = i;
        for child in [self.left(i), self.right(i)].into_iter().flatten() {
            if !self
                .order
                .precedes(&self.elements[target], &self.elements[child])
            {
                target = child;
            }
        }
        target
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let target = self.worst_offender(i);
            if target == i {
                break;
            }
            self.swap(i, target);
            i = target;
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while let Some(p) = self.parent(i) {
            if self.order.precedes(&self.elements[p], &self.elements[i]) {
                break;
            }
            self.swap(p, i);
            i = p;
        }
    }

    /// Restores the heap property after the element at `i` changed
    fn repair(&mut self, i: usize) {
        match self.parent(i) {
            Some(p) if !self.order.precedes(&self.elements[p], &self.elements[i]) => {
                self.sift_up(i)
            }
            _ => self.sift_down(i),
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.elements.swap(i, j);
        if self.observer.is_attached() {
            observer::publish_frame(&mut self.observer, &self.elements[..self.size]);
            self.observer.on_event(Event::HighlightEdge {
                from: i.min(j) + 1,
                to: i.max(j) + 1,
            });
        }
    }
}

impl<T, O: Order<T> + Default> Default for BinaryHeap<T, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<T, O: Order<T> + Default> FromIterator<T> for BinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), O::default())
    }
}

impl<T, O: Order<T>, Ob: Observer<T>> Extend<T> for BinaryHeap<T, O, Ob> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, O: Order<T> + Default> Heap<T> for BinaryHeap<T, O> {
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn len(&self) -> usize {
        self.size
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        self.as_slice().first()
    }

    fn pop(&mut self) -> Option<T> {
        self.extract().ok()
    }

    fn merge(&mut self, other: Self) {
        self.elements.extend(other.elements);
        self.rebuild();
    }
}

impl<T: fmt::Debug, O: Order<T>, Ob> fmt::Display for BinaryHeap<T, O, Ob> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:?}, heapsize: {}",
            self.order.name(),
            self.elements,
            self.size
        )
    }
}

impl<T: fmt::Debug, O: fmt::Debug, Ob> fmt::Debug for BinaryHeap<T, O, Ob> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("elements", &self.elements)
            .field("size", &self.size)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}
