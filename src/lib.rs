//! Array-Backed Binary Heaps for Rust
//!
//! This crate provides one binary heap engine, [`BinaryHeap`], that stores an
//! implicit binary tree in a flat `Vec<T>` and is parameterized by an
//! ordering policy. Max-heaps and min-heaps are the same code with a
//! different [`Order`].
//!
//! # Features
//!
//! - **Build**: O(n) bottom-up construction from an arbitrary vector
//! - **Insert / delete-at-index / extract / update**: O(log n) with sift-up or sift-down repair
//! - **Heapsort**: in place, ascending for [`MaxFirst`], descending for [`MinFirst`]
//! - **Observers**: every swap can be reported to an [`Observer`], e.g. the
//!   [`animation::Animation`] recorder or the [`logging::SlogObserver`]
//! - **Sharing**: [`sync::SharedHeap`] puts a heap behind a single lock
//!
//! # Example
//!
//! ```rust
//! use rust_array_heap::{MaxFirst, MaxHeap};
//!
//! let mut heap = MaxHeap::from_vec(vec![5, 3, 8, 1, 9], MaxFirst);
//! assert_eq!(heap.peek(), Some(&9));
//!
//! heap.insert(10);
//! assert_eq!(heap.delete(0), Ok(10));
//!
//! heap.heapsort();
//! assert_eq!(heap.backing(), &[1, 3, 5, 8, 9]);
//! ```

pub mod animation;
pub mod binary;
pub mod logging;
pub mod observer;
pub mod order;
pub mod sync;
pub mod traits;
pub mod tree;

// Re-export the main types for convenience
pub use binary::{BinaryHeap, MaxHeap, MinHeap};
pub use observer::{Event, Observer};
pub use order::{FnOrder, MaxFirst, MinFirst, Order};
pub use traits::{Heap, HeapError};
