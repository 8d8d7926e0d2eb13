//! Index arithmetic for the implicit binary tree
//!
//! The node at index `i` (0-based) has its parent at `(i - 1) / 2` and its
//! children at `2i + 1` and `2i + 2`. Absence is always reported as `None`;
//! index `0` is the root, a perfectly valid node.

/// Parent of `i`, or `None` for the root or when the parent is outside `[0, size)`
#[inline]
pub fn parent(i: usize, size: usize) -> Option<usize> {
    if i == 0 {
        return None;
    }
    Some((i - 1) / 2).filter(|&p| p < size)
}

/// Left child of `i`, or `None` when it falls outside `[0, size)`
#[inline]
pub fn left(i: usize, size: usize) -> Option<usize> {
    i.checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .filter(|&c| c < size)
}

/// Right child of `i`, or `None` when it falls outside `[0, size)`
#[inline]
pub fn right(i: usize, size: usize) -> Option<usize> {
    i.checked_mul(2)
        .and_then(|d| d.checked_add(2))
        .filter(|&c| c < size)
}

/// First index in `[0, size)` that has no children
///
/// Every index from here to `size` is a leaf, so bottom-up construction only
/// visits `[0, first_leaf(size))`.
#[inline]
pub fn first_leaf(size: usize) -> usize {
    size / 2
}
