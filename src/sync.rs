//! A heap shared between threads
//!
//! Sift operations leave the array transiently out of order, so concurrent
//! callers must serialize whole operations. [`SharedHeap`] holds one
//! `parking_lot::Mutex` per heap and takes it for every call; use
//! [`SharedHeap::lock`] to run several operations under one acquisition.

use parking_lot::{Mutex, MutexGuard};

use crate::binary::BinaryHeap;
use crate::observer::Observer;
use crate::order::{MaxFirst, Order};
use crate::traits::HeapError;

/// A [`BinaryHeap`] behind a mutex
///
/// # Example
///
/// ```rust
/// use rust_array_heap::sync::SharedHeap;
/// use rust_array_heap::{MinFirst, MinHeap};
///
/// let shared = SharedHeap::new(MinHeap::new(MinFirst));
/// std::thread::scope(|s| {
///     for t in 0..4 {
///         let shared = &shared;
///         s.spawn(move || {
///             for v in 0..100 {
///                 shared.insert(t * 100 + v);
///             }
///         });
///     }
/// });
/// assert_eq!(shared.len(), 400);
/// assert_eq!(shared.extract(), Ok(0));
/// ```
pub struct SharedHeap<T, O = MaxFirst, Ob = ()> {
    inner: Mutex<BinaryHeap<T, O, Ob>>,
}

impl<T, O: Order<T>, Ob: Observer<T>> SharedHeap<T, O, Ob> {
    /// Takes ownership of `heap`
    pub fn new(heap: BinaryHeap<T, O, Ob>) -> Self {
        Self {
            inner: Mutex::new(heap),
        }
    }

    /// Holds the lock for a sequence of operations
    pub fn lock(&self) -> MutexGuard<'_, BinaryHeap<T, O, Ob>> {
        self.inner.lock()
    }

    /// Releases the heap
    pub fn into_inner(self) -> BinaryHeap<T, O, Ob> {
        self.inner.into_inner()
    }

    /// Number of elements in the logical heap
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the logical heap is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Inserts `value` under the lock
    pub fn insert(&self, value: T) {
        self.inner.lock().insert(value)
    }

    /// Removes and returns the element at `i`
    pub fn delete(&self, i: usize) -> Result<T, HeapError> {
        self.inner.lock().delete(i)
    }

    /// Removes and returns the root
    pub fn extract(&self) -> Result<T, HeapError> {
        self.inner.lock().extract()
    }

    /// Copy of the current root
    pub fn peek_cloned(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().peek().cloned()
    }
}

impl<T, O, Ob> std::fmt::Debug for SharedHeap<T, O, Ob>
where
    T: std::fmt::Debug,
    O: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_lock() {
            Some(heap) => f.debug_struct("SharedHeap").field("inner", &*heap).finish(),
            None => f.debug_struct("SharedHeap").field("inner", &"<locked>").finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MaxHeap, MinFirst, MinHeap};

    #[test]
    fn test_concurrent_inserts() {
        let shared = SharedHeap::new(MaxHeap::new(MaxFirst));
        std::thread::scope(|s| {
            for t in 0..8u32 {
                let shared = &shared;
                s.spawn(move || {
                    for v in 0..250 {
                        shared.insert(t * 1000 + v);
                    }
                });
            }
        });

        assert_eq!(shared.len(), 2000);
        assert_eq!(shared.peek_cloned(), Some(7249));
        let heap = shared.into_inner();
        assert!(heap.is_heap());
    }

    #[test]
    fn test_concurrent_insert_and_extract() {
        let shared = SharedHeap::new(MinHeap::from_vec((0..1000).collect(), MinFirst));
        let extracted = Mutex::new(Vec::new());
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..100 {
                        if let Ok(v) = shared.extract() {
                            extracted.lock().push(v);
                        }
                    }
                });
            }
        });

        let mut extracted = extracted.into_inner();
        extracted.sort_unstable();
        assert_eq!(extracted, (0..400).collect::<Vec<_>>());
        assert_eq!(shared.len(), 600);
        assert!(shared.lock().is_heap());
    }

    #[test]
    fn test_errors_pass_through() {
        let shared: SharedHeap<i32> = SharedHeap::new(MaxHeap::new(MaxFirst));
        assert!(shared.is_empty());
        assert_eq!(shared.extract(), Err(HeapError::EmptyHeap));
        assert_eq!(
            shared.delete(3),
            Err(HeapError::OutOfRange { index: 3, size: 0 })
        );
    }

    #[test]
    fn test_compound_under_one_lock() {
        let shared = SharedHeap::new(MaxHeap::from_vec(vec![4, 9, 2], MaxFirst));
        {
            let mut heap = shared.lock();
            let top = heap.extract().unwrap();
            heap.insert(top + 1);
        }
        assert_eq!(shared.peek_cloned(), Some(10));
    }
}
