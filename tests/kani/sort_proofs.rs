//! Heapsort proofs and index-0 regressions

#[cfg(kani)]
use rust_array_heap::{MaxFirst, MaxHeap, MinFirst, MinHeap};

/// Proof: heapsort on a max-first heap sorts ascending
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(7)]
fn verify_heapsort_ascending() {
    let values: [u8; 5] = kani::any();
    let sorted = MaxHeap::from_vec(values.to_vec(), MaxFirst).into_sorted_vec();
    assert!(sorted.len() == 5);
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
}

/// Proof: heapsort on a min-first heap sorts descending
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(7)]
fn verify_heapsort_descending() {
    let values: [u8; 5] = kani::any();
    let sorted = MinHeap::from_vec(values.to_vec(), MinFirst).into_sorted_vec();
    assert!(sorted.windows(2).all(|w| w[0] >= w[1]));
}

/// Proof: a zero at the root is a real element
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_zero_root() {
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let mut heap = MinHeap::from_vec(vec![a, 0, b], MinFirst);
    assert!(heap.peek() == Some(&0));
    assert!(heap.parent(1) == Some(0));
    assert!(heap.parent(2) == Some(0));
    assert!(heap.extract() == Ok(0));
    assert!(heap.is_heap());
}
