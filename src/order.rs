//! Ordering policies
//!
//! A heap engine is parameterized by a single predicate, [`Order::precedes`],
//! which answers "may `a` sit above `b` in the tree?". Every sift, build and
//! sort decision goes through it, so max-heaps and min-heaps share one
//! implementation and differ only in the policy value they carry.
//!
//! - [`MaxFirst`]: parent `>=` children; heapsort yields ascending order
//! - [`MinFirst`]: parent `<=` children; heapsort yields descending order
//! - [`FnOrder`]: any caller-supplied predicate
//!
//! `precedes` must describe a total preorder: reflexive (`precedes(a, a)`),
//! transitive, and total (`precedes(a, b) || precedes(b, a)`).

/// Comparison policy used by the heap engine
pub trait Order<T: ?Sized> {
    /// Returns true if `a` may be the parent of `b`
    fn precedes(&self, a: &T, b: &T) -> bool;

    /// Human-readable heap kind, used by `Display`
    fn name(&self) -> &'static str {
        "BinaryHeap"
    }
}

/// Max-first ordering: every parent is at least as large as its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Order<T> for MaxFirst {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a >= b
    }

    fn name(&self) -> &'static str {
        "MaxHeap"
    }
}

/// Min-first ordering: every parent is at most as large as its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Order<T> for MinFirst {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a <= b
    }

    fn name(&self) -> &'static str {
        "MinHeap"
    }
}

/// Ordering backed by a comparison function supplied at construction
///
/// # Example
///
/// ```rust
/// use rust_array_heap::{BinaryHeap, FnOrder};
///
/// // Max-heap on the second field only
/// let order = FnOrder::new(|a: &(char, u32), b: &(char, u32)| a.1 >= b.1);
/// let heap = BinaryHeap::from_vec(vec![('a', 1), ('b', 9), ('c', 4)], order);
/// assert_eq!(heap.peek(), Some(&('b', 9)));
/// ```
#[derive(Clone, Copy)]
pub struct FnOrder<F> {
    precedes: F,
}

impl<F> FnOrder<F> {
    /// Wraps `precedes`, which must describe a total preorder
    pub fn new(precedes: F) -> Self {
        Self { precedes }
    }
}

impl<F> std::fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnOrder").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Order<T> for FnOrder<F> {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.precedes)(a, b)
    }
}

impl<T: ?Sized, O: Order<T> + ?Sized> Order<T> for &O {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        (**self).precedes(a, b)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
