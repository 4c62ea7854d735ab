//! The cached position cursor and the seek algorithm built on it.
//!
//! The cursor remembers the last-visited node together with its index. A
//! positional operation compares the hop distances of three candidate
//! origins, the cached cursor, the head and the tail, and walks from the
//! cheapest one. Ties prefer the cursor, then the head, then the tail, so
//! the choice is stable.

use std::ptr::NonNull;

use crate::list::{next_of, prev_of, List, Node};

/// The cached `(node, index)` pair of the last-visited position.
///
/// Holding a `CachedCursor` asserts that `node` is the live node located
/// exactly `index` steps from the head of its list. Every mutating list
/// operation re-establishes this before returning.
pub(crate) struct CachedCursor<T> {
    pub(crate) node: NonNull<Node<T>>,
    pub(crate) index: usize,
}

impl<T> CachedCursor<T> {
    pub(crate) fn new(node: NonNull<Node<T>>, index: usize) -> Self {
        Self { node, index }
    }
}

// Manual impls: the cursor is a raw position and copies regardless of `T`.
impl<T> Clone for CachedCursor<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node,
            index: self.index,
        }
    }
}

impl<T> Copy for CachedCursor<T> {}

/// The starting point a seek walks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    Cursor,
    Head,
    Tail,
}

/// Pick the cheapest origin for reaching `position` in a list of length
/// `len`, given the index of the cached cursor if one is set.
///
/// The costs are `|cursor_index - position|` from the cursor, `position`
/// from the head and `len - 1 - position` from the tail. Ties break towards
/// the cursor, then the head, then the tail.
pub(crate) fn choose_origin(cursor_index: Option<usize>, position: usize, len: usize) -> Origin {
    debug_assert!(position < len);
    let from_head = position;
    let from_tail = len - 1 - position;
    match cursor_index {
        Some(index) if index.abs_diff(position) <= from_head.min(from_tail) => Origin::Cursor,
        _ if from_head <= from_tail => Origin::Head,
        _ => Origin::Tail,
    }
}

impl<T> List<T> {
    /// Return the node at `position`, walking from the cheapest of the
    /// cached cursor, the head and the tail, and leave the cursor parked on
    /// the arrived node.
    ///
    /// The caller must guarantee `position < len`, which bounds every walk
    /// strictly inside the chain; the loop never dereferences past an end
    /// link.
    pub(crate) fn locate(&self, position: usize) -> NonNull<Node<T>> {
        debug_assert!(position < self.len());
        let cached = self.cursor.get();
        let (mut node, mut index) =
            match choose_origin(cached.map(|c| c.index), position, self.len()) {
                // SAFETY: a set cursor always points at a live node of this
                // non-empty list, and `position < len` guarantees head and
                // tail exist.
                Origin::Cursor => unsafe {
                    let cached = cached.unwrap_unchecked();
                    (cached.node, cached.index)
                },
                Origin::Head => (unsafe { self.head_node() }, 0),
                Origin::Tail => (unsafe { self.tail_node() }, self.len() - 1),
            };
        // SAFETY: `index` always equals the physical position of `node`, and
        // the walk stops at `position < len`, so every followed link exists.
        unsafe {
            while index < position {
                node = next_of(node);
                index += 1;
            }
            while index > position {
                node = prev_of(node);
                index -= 1;
            }
        }
        self.cursor.set(Some(CachedCursor::new(node, position)));
        node
    }
}
