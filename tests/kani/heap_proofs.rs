//! Invariant proofs over small symbolic heaps
//!
//! Every harness builds a heap from a symbolic array, applies one mutation
//! and asserts the heap property plus the element count.

#[cfg(kani)]
use rust_array_heap::{MaxFirst, MaxHeap, MinFirst, MinHeap};

// ============================================================================
// Build
// ============================================================================

/// Proof: build establishes the heap property (max-first)
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(7)]
fn verify_build_max() {
    let values: [u8; 5] = kani::any();
    let heap = MaxHeap::from_vec(values.to_vec(), MaxFirst);
    assert!(heap.is_heap());
    assert!(heap.len() == 5);
    let root = *heap.peek().expect("non-empty heap has a root");
    assert!(values.iter().all(|v| *v <= root));
}

/// Proof: build establishes the heap property (min-first)
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(7)]
fn verify_build_min() {
    let values: [u8; 5] = kani::any();
    let heap = MinHeap::from_vec(values.to_vec(), MinFirst);
    assert!(heap.is_heap());
    let root = *heap.peek().expect("non-empty heap has a root");
    assert!(values.iter().all(|v| *v >= root));
}

// ============================================================================
// Insert / Delete / Update
// ============================================================================

/// Proof: insert keeps the heap property and grows by one
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(7)]
fn verify_insert() {
    let values: [u8; 4] = kani::any();
    let extra: u8 = kani::any();
    let mut heap = MaxHeap::from_vec(values.to_vec(), MaxFirst);
    heap.insert(extra);
    assert!(heap.is_heap());
    assert!(heap.len() == 5);
    assert!(heap.iter().any(|v| *v == extra));
}

/// Proof: delete at any valid index keeps the heap property and removes that element
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(7)]
fn verify_delete_any_index() {
    let values: [u8; 5] = kani::any();
    let i: usize = kani::any();
    kani::assume(i < 5);
    let mut heap = MinHeap::from_vec(values.to_vec(), MinFirst);
    let expected = heap.as_slice()[i];
    let removed = heap.delete(i);
    assert!(removed == Ok(expected));
    assert!(heap.is_heap());
    assert!(heap.len() == 4);
}

/// Proof: delete past the end fails without touching the heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(7)]
fn verify_delete_out_of_range() {
    let values: [u8; 3] = kani::any();
    let i: usize = kani::any();
    kani::assume(i >= 3);
    let mut heap = MaxHeap::from_vec(values.to_vec(), MaxFirst);
    assert!(heap.delete(i).is_err());
    assert!(heap.len() == 3);
}

/// Proof: update repairs in either direction
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(7)]
fn verify_update() {
    let values: [u8; 5] = kani::any();
    let i: usize = kani::any();
    let value: u8 = kani::any();
    kani::assume(i < 5);
    let mut heap = MaxHeap::from_vec(values.to_vec(), MaxFirst);
    let old = heap.as_slice()[i];
    assert!(heap.update(i, value) == Ok(old));
    assert!(heap.is_heap());
}
