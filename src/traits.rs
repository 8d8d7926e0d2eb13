//! Common traits and error types for array-backed heaps
//!
//! - [`HeapError`]: errors reported by index-addressed heap operations
//! - [`Heap`]: a `BinaryHeap`-style priority-queue interface
//!
//! The [`Heap`] trait mirrors the shape of `std::collections::BinaryHeap`
//! (`push`, `peek`, `pop`), but which element comes out first is decided by
//! the heap's [`Order`](crate::order::Order), not fixed to max-first.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The index is outside the logical heap `[0, size)`
    OutOfRange {
        /// The offending index
        index: usize,
        /// The logical heap size at the time of the call
        size: usize,
    },
    /// The operation needs a root, but the logical heap is empty
    EmptyHeap,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::OutOfRange { index, size } => {
                write!(f, "index {index} is out of range for heap of size {size}")
            }
            HeapError::EmptyHeap => {
                write!(f, "heap is empty")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Priority-queue interface for heap data structures
///
/// # Example
///
/// ```rust
/// use rust_array_heap::{Heap, MinHeap};
///
/// let mut heap: MinHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the element that would be popped next without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the root element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(n + m), by rebuilding over the concatenated elements.
    fn merge(&mut self, other: Self);
}
