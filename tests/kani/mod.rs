//! Kani proof harnesses
//!
//! - `heap_proofs.rs`: invariant preservation for build, insert, delete, update
//! - `sort_proofs.rs`: heapsort ordering and index-0 regressions

#[cfg(kani)]
#[path = "heap_proofs.rs"]
mod heap_proofs;
#[cfg(kani)]
#[path = "sort_proofs.rs"]
mod sort_proofs;
