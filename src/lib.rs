//! This crate provides a doubly-linked list with owned nodes and a cached
//! position cursor.
//!
//! The [`List`] remembers the last-accessed node together with its index.
//! Every positional operation compares the hop distances of three candidate
//! starting points (the cached cursor, the head, and the tail), walks from
//! the cheapest one, and leaves the cursor at the target. Access patterns
//! with locality, such as sequential reads, runs of nearby positions, or
//! ascending inserts, approach *O*(1) per operation; a cold access still
//! costs at most *O*(min(*i*, *n* − *i*)) instead of a head-only *O*(*i*)
//! walk.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use seek_list::List;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! list.insert(0, 0).unwrap(); // becomes [0, 1, 2, 3, 4]
//! assert_eq!(list.element_at(1), Ok(&1));
//!
//! assert_eq!(list.remove_at(3), Ok(3)); // becomes [0, 1, 2, 4]
//! assert_eq!(list.element_at(3), Ok(&4));
//!
//! assert_eq!(list.to_string(), "0->1->2->4->");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ╔═══════════╗           ╔═══════════╗           ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ──→ ┄┄ ──→║   next    ║ ──→ ∅
//!    ╟───────────╢           ╟───────────╢           ╟───────────╢
//! ∅ ←─║   prev    ║ ←──────── ║   prev    ║ ←── ┄┄ ←──║   prev    ║
//!    ╟───────────╢           ╟───────────╢           ╟───────────╢
//!    ║ payload T ║           ║ payload T ║           ║ payload T ║
//!    ╚═══════════╝           ╚═══════════╝           ╚═══════════╝
//!        Node 0                  Node 1                 Node n−1
//!        ↑                           ↑                      ↑
//!      head                   cursor (node, index)        tail
//! ```
//! The `List` contains:
//! - the `head` and `tail` pointers to the first and last nodes;
//! - a length field `len`;
//! - the cached cursor, a `(node, index)` pair recording the last-accessed
//!   position. It is a performance cache only: every mutation re-points or
//!   clears it, so it never refers to a freed node.
//!
//! Each node of the list `List<T>` is allocated on the heap and contains the
//! `next` and `prev` pointers (`None` at the respective end of the list) and
//! the payload `T`.
//!
//! The cursor lives in a [`Cell`](std::cell::Cell) so read-only operations
//! like [`element_at`](List::element_at) can refresh it through a shared
//! reference. In exchange the list is not `Sync`; use it from one thread, or
//! synchronize externally.
//!
//! # Errors
//!
//! Fallible operations return [`Error`]: positions outside the valid range,
//! operations on an empty list, negative construction lengths, and growth
//! past [`MAX_LEN`](list::MAX_LEN) are all reported synchronously, and a
//! failed call never leaves a partial mutation behind.
//!
//! ```
//! use seek_list::{Error, List};
//!
//! let mut list = List::from_iter([1, 2]);
//! assert_eq!(
//!     list.remove_at(2),
//!     Err(Error::OutOfRange { position: 2, len: 2 }),
//! );
//! assert_eq!(list.len(), 2); // untouched
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended, exact-size and fused, and iterate the list like an
//! array. [`IterMut`] provides mutability of the elements (but not the
//! linked structure of the list). Iteration goes link to link and ignores
//! the cursor.
//!
//! ## Examples
//!
//! ```
//! use seek_list::List;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Merging
//!
//! Two lists combine either by cloning ([`merge`](List::merge), the source
//! list is unmodified) or by moving ([`append`](List::append), which splices
//! the donor's whole node chain over in *O*(1) and leaves it a valid empty
//! list).
//!
//! ```
//! use seek_list::List;
//!
//! let mut list = List::from_iter([1, 2]);
//! let mut other = List::from_iter([3, 4]);
//!
//! list.append(&mut other).unwrap();
//! assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3, &4]);
//! assert!(other.is_empty());
//! ```

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod list;

mod experiments;
