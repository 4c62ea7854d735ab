use std::cell::Cell;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::cursor::CachedCursor;
use crate::{Error, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The maximum number of elements a [`List`] may hold.
///
/// This is the standard allocation limit; operations that would grow a list
/// past it report [`Error::CapacityExceeded`] before touching any node.
pub const MAX_LEN: usize = isize::MAX as usize;

/// A doubly-linked list with owned nodes and a cached position cursor.
///
/// The `List` keeps the last-accessed node and its index as an internal
/// cursor. Positional operations pick the cheapest of three starting points
/// (cached cursor, head, tail) and walk from there, so access patterns with
/// locality (repeated nearby positions, ascending inserts, sequential reads)
/// approach *O*(1) per operation, and the worst case is
/// *O*(min(*i*, *n* − *i*)) instead of a head-only *O*(*i*) walk.
///
/// The cursor is a performance cache only: it never outlives the node it
/// points to. Every removal path re-points or clears it, so it is always
/// either unset or located at a live node of the list.
///
/// The cursor lives in a [`Cell`] so that read-only operations can refresh it
/// through a shared reference. As a consequence the list is not `Sync`;
/// sharing one instance across threads requires external synchronization,
/// which matches its single-threaded design.
///
/// # Examples
///
/// ```
/// use seek_list::List;
///
/// let mut list = List::from_iter(vec![1, 2, 3, 4, 5]);
///
/// assert_eq!(list.element_at(2), Ok(&3));
/// assert_eq!(list.remove_at(2), Ok(3));
/// assert_eq!(list.element_at(2), Ok(&4));
/// assert_eq!(list.len(), 4);
/// ```
pub struct List<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    pub(crate) cursor: Cell<Option<CachedCursor<T>>>,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

impl<T> Node<T> {
    /// Create a detached node with the given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            element,
        })))
    }

    /// Deallocate a node and return its element.
    ///
    /// It is unsafe because `node` must have been created by
    /// [`Node::new_detached`] and must already be unlinked from its list.
    pub(crate) unsafe fn into_element(node: NonNull<Node<T>>) -> T {
        Box::from_raw(node.as_ptr()).element
    }
}

/// Return the successor of `node`.
///
/// It is unsafe because `node` must be a live node with a successor.
pub(crate) unsafe fn next_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    debug_assert!((*node.as_ptr()).next.is_some());
    (*node.as_ptr()).next.unwrap_unchecked()
}

/// Return the predecessor of `node`.
///
/// It is unsafe because `node` must be a live node with a predecessor.
pub(crate) unsafe fn prev_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    debug_assert!((*node.as_ptr()).prev.is_some());
    (*node.as_ptr()).prev.unwrap_unchecked()
}

// private methods
impl<T> List<T> {
    /// The first node of a non-empty list.
    ///
    /// It is unsafe because the list must not be empty.
    pub(crate) unsafe fn head_node(&self) -> NonNull<Node<T>> {
        debug_assert!(!self.is_empty());
        self.head.unwrap_unchecked()
    }

    /// The last node of a non-empty list.
    ///
    /// It is unsafe because the list must not be empty.
    pub(crate) unsafe fn tail_node(&self) -> NonNull<Node<T>> {
        debug_assert!(!self.is_empty());
        self.tail.unwrap_unchecked()
    }

    /// Link `node` after the current tail (or as the sole node) without a
    /// capacity check. The cursor stays put: no existing index changes.
    pub(crate) fn push_back_node(&mut self, node: NonNull<Node<T>>) {
        // SAFETY: `node` is detached and exclusively ours; the tail, if any,
        // is a live node of this list.
        unsafe {
            (*node.as_ptr()).next = None;
            (*node.as_ptr()).prev = self.tail;
            match self.tail {
                Some(tail) => (*tail.as_ptr()).next = Some(node),
                None => self.head = Some(node),
            }
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Link `node` before the current head (or as the sole node) without a
    /// capacity check. Every existing node slides one position towards the
    /// tail, so a set cursor has its index bumped to stay physically correct.
    fn push_front_node(&mut self, node: NonNull<Node<T>>) {
        // SAFETY: `node` is detached and exclusively ours; the head, if any,
        // is a live node of this list.
        unsafe {
            (*node.as_ptr()).prev = None;
            (*node.as_ptr()).next = self.head;
            match self.head {
                Some(head) => (*head.as_ptr()).prev = Some(node),
                None => self.tail = Some(node),
            }
        }
        self.head = Some(node);
        self.len += 1;
        if let Some(mut cached) = self.cursor.get() {
            cached.index += 1;
            self.cursor.set(Some(cached));
        }
    }

    /// Unlink the head node and return its element, or `None` if the list is
    /// empty. A cursor at the old head moves to the new head; any other
    /// cursor index shifts down by one.
    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` is a live node of this list, and the new head (if
        // any) is its successor.
        unsafe {
            self.head = (*head.as_ptr()).next;
            match self.head {
                Some(new_head) => {
                    (*new_head.as_ptr()).prev = None;
                    match self.cursor.get() {
                        Some(cached) if cached.node == head => {
                            self.cursor.set(Some(CachedCursor::new(new_head, 0)));
                        }
                        Some(mut cached) => {
                            cached.index -= 1;
                            self.cursor.set(Some(cached));
                        }
                        None => {}
                    }
                }
                None => {
                    self.tail = None;
                    self.cursor.set(None);
                }
            }
            self.len -= 1;
            Some(Node::into_element(head))
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use seek_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            cursor: Cell::new(None),
            _marker: PhantomData,
        }
    }

    /// Create a list of `len` default-valued elements, or fail with
    /// [`Error::InvalidLength`] if `len` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::{Error, List};
    ///
    /// let list = List::<i32>::with_len(3).unwrap();
    /// assert_eq!(list, List::from_iter(vec![0, 0, 0]));
    ///
    /// assert_eq!(List::<i32>::with_len(-1), Err(Error::InvalidLength(-1)));
    /// ```
    pub fn with_len(len: isize) -> Result<Self, Error>
    where
        T: Default,
    {
        if len < 0 {
            return Err(Error::InvalidLength(len));
        }
        let mut list = List::new();
        for _ in 0..len {
            list.push_back_node(Node::new_detached(T::default()));
        }
        Ok(list)
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back("foo").unwrap();
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(1).unwrap();
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(2).unwrap();
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`, releasing every node exactly
    /// once. Safe to call on an already-empty list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::from_iter(vec![1, 2]);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.first().ok(), None);
    ///
    /// list.clear(); // no-op
    /// ```
    pub fn clear(&mut self) {
        let mut next = self.head.take();
        self.tail = None;
        self.len = 0;
        self.cursor.set(None);
        while let Some(node) = next {
            // SAFETY: every node was allocated by `Node::new_detached` and the
            // chain is walked exactly once.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            next = node.next;
        }
    }

    /// Returns a reference to the element at `position`, or
    /// [`Error::OutOfRange`] if `position >= len`.
    ///
    /// A pure read of the list contents; as a side effect the internal cursor
    /// moves to `position`, which makes runs of nearby accesses cheap.
    ///
    /// # Complexity
    ///
    /// *O*(min(*d*, *i*, *n* − *i*)) time, where *d* is the hop distance from
    /// the cached cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::{Error, List};
    ///
    /// let list = List::from_iter(vec![1, 2, 3]);
    /// assert_eq!(list.element_at(0), Ok(&1));
    /// assert_eq!(list.element_at(2), Ok(&3));
    /// assert_eq!(
    ///     list.element_at(3),
    ///     Err(Error::OutOfRange { position: 3, len: 3 }),
    /// );
    /// ```
    pub fn element_at(&self, position: usize) -> Result<&T, Error> {
        if position >= self.len {
            return Err(Error::OutOfRange { position, len: self.len });
        }
        let node = self.locate(position);
        // SAFETY: `locate` returns a live node owned by this list; the shared
        // borrow of `self` keeps it alive for the returned reference.
        Ok(unsafe { &(*node.as_ptr()).element })
    }

    /// Returns a mutable reference to the element at `position`, or
    /// [`Error::OutOfRange`] if `position >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::from_iter(vec![1, 2, 3]);
    /// *list.element_at_mut(1).unwrap() = 20;
    /// assert_eq!(list, List::from_iter(vec![1, 20, 3]));
    /// ```
    pub fn element_at_mut(&mut self, position: usize) -> Result<&mut T, Error> {
        if position >= self.len {
            return Err(Error::OutOfRange { position, len: self.len });
        }
        let node = self.locate(position);
        // SAFETY: `locate` returns a live node owned by this list; the
        // exclusive borrow of `self` grants unique access to its element.
        Ok(unsafe { &mut (*node.as_ptr()).element })
    }

    /// Appends an element to the back of the list, or fails with
    /// [`Error::CapacityExceeded`] if the list is already at [`MAX_LEN`].
    ///
    /// The cursor does not move: the cached node keeps its index.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1).unwrap();
    /// list.push_back(3).unwrap();
    /// assert_eq!(list.last(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, value: T) -> Result<(), Error> {
        if self.len == MAX_LEN {
            return Err(Error::CapacityExceeded);
        }
        self.push_back_node(Node::new_detached(value));
        Ok(())
    }

    /// Inserts an element at `position`, shifting everything at and after it
    /// towards the tail.
    ///
    /// Fails with [`Error::OutOfRange`] if `position > len` and with
    /// [`Error::CapacityExceeded`] at [`MAX_LEN`]. `position == len` appends;
    /// `position == 0` splices a new head directly. Otherwise the new node is
    /// spliced before the current occupant of `position` and becomes the
    /// cursor, so a run of ascending inserts stays cheap.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::from_iter(vec![1, 2, 3]);
    ///
    /// list.insert(2, 4).unwrap();
    /// list.insert(4, 5).unwrap();
    /// list.insert(0, 0).unwrap();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, position: usize, value: T) -> Result<(), Error> {
        if position > self.len {
            return Err(Error::OutOfRange { position, len: self.len });
        }
        if self.len == MAX_LEN {
            return Err(Error::CapacityExceeded);
        }
        if position == self.len {
            self.push_back_node(Node::new_detached(value));
        } else if position == 0 {
            self.push_front_node(Node::new_detached(value));
        } else {
            let occupant = self.locate(position);
            let node = Node::new_detached(value);
            // SAFETY: `position > 0`, so the occupant has a predecessor, and
            // both are live nodes of this list.
            unsafe {
                let prev = prev_of(occupant);
                (*node.as_ptr()).prev = Some(prev);
                (*node.as_ptr()).next = Some(occupant);
                (*prev.as_ptr()).next = Some(node);
                (*occupant.as_ptr()).prev = Some(node);
            }
            self.len += 1;
            self.cursor.set(Some(CachedCursor::new(node, position)));
        }
        Ok(())
    }

    /// Appends every element of an ordered sequence of known length, or fails
    /// with [`Error::CapacityExceeded`] if the combined length would exceed
    /// [`MAX_LEN`].
    ///
    /// The capacity check happens before any node is created, so a failed
    /// call leaves the list untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::from_iter(vec![1, 2]);
    /// list.try_extend(vec![3, 4]).unwrap();
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
    /// ```
    pub fn try_extend<I>(&mut self, values: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        if values.len() > MAX_LEN - self.len {
            return Err(Error::CapacityExceeded);
        }
        for value in values {
            self.push_back_node(Node::new_detached(value));
        }
        Ok(())
    }

    /// Appends a clone of every element of `other`, in order; `other` is
    /// unmodified.
    ///
    /// Fails with [`Error::CapacityExceeded`] if the combined length would
    /// exceed [`MAX_LEN`], checked before any node is created.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`other.len()`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::from_iter(vec![1, 2]);
    /// let other = List::from_iter(vec![3, 4]);
    ///
    /// list.merge(&other).unwrap();
    ///
    /// assert_eq!(list, List::from_iter(vec![1, 2, 3, 4]));
    /// assert_eq!(other.len(), 2);
    /// ```
    pub fn merge(&mut self, other: &Self) -> Result<(), Error>
    where
        T: Clone,
    {
        if other.len > MAX_LEN - self.len {
            return Err(Error::CapacityExceeded);
        }
        for value in other.iter() {
            self.push_back_node(Node::new_detached(value.clone()));
        }
        Ok(())
    }

    /// Moves all elements from `other` to the end of this list.
    ///
    /// This reuses all the nodes from `other` and splices them onto this
    /// list's tail; no element is copied. After this operation `other` is a
    /// valid empty list. Fails with [`Error::CapacityExceeded`] if the
    /// combined length would exceed [`MAX_LEN`], checked before any mutation.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::from_iter(vec![1, 2]);
    /// let mut other = List::from_iter(vec![3, 4]);
    ///
    /// list.append(&mut other).unwrap();
    ///
    /// assert_eq!(list, List::from_iter(vec![1, 2, 3, 4]));
    /// assert!(other.is_empty());
    /// assert_eq!(other.len(), 0);
    /// ```
    pub fn append(&mut self, other: &mut Self) -> Result<(), Error> {
        if other.len > MAX_LEN - self.len {
            return Err(Error::CapacityExceeded);
        }
        let (other_head, other_tail) = match (other.head.take(), other.tail.take()) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return Ok(()),
        };
        match self.tail {
            // SAFETY: both are live nodes, exclusively owned by their lists.
            Some(tail) => unsafe {
                (*tail.as_ptr()).next = Some(other_head);
                (*other_head.as_ptr()).prev = Some(tail);
            },
            None => self.head = Some(other_head),
        }
        self.tail = Some(other_tail);
        self.len += other.len;
        other.len = 0;
        other.cursor.set(None);
        Ok(())
    }

    /// Removes the last element and returns it, or fails with
    /// [`Error::Empty`].
    ///
    /// If the cursor referenced the removed node it is re-pointed at the new
    /// tail, or cleared when the list becomes empty; the cursor never
    /// references a freed node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::{Error, List};
    ///
    /// let mut list = List::from_iter(vec![1, 3]);
    /// assert_eq!(list.pop(), Ok(3));
    /// assert_eq!(list.pop(), Ok(1));
    /// assert_eq!(list.pop(), Err(Error::Empty));
    /// ```
    pub fn pop(&mut self) -> Result<T, Error> {
        let tail = self.tail.ok_or(Error::Empty)?;
        if self.len == 1 {
            self.head = None;
            self.tail = None;
            self.len = 0;
            self.cursor.set(None);
            // SAFETY: the sole node is unlinked on both sides.
            return Ok(unsafe { Node::into_element(tail) });
        }
        // SAFETY: `len > 1`, so the tail has a predecessor, and both are live
        // nodes of this list.
        unsafe {
            let prev = prev_of(tail);
            (*prev.as_ptr()).next = None;
            self.tail = Some(prev);
            self.len -= 1;
            if let Some(cached) = self.cursor.get() {
                if cached.node == tail {
                    self.cursor.set(Some(CachedCursor::new(prev, self.len - 1)));
                }
            }
            Ok(Node::into_element(tail))
        }
    }

    /// Removes the element at `position` and returns it, or fails with
    /// [`Error::OutOfRange`] if `position >= len`.
    ///
    /// Removing the last index (or from a singleton list) delegates to
    /// [`pop`](List::pop). Removing the head re-points a head cursor at the
    /// new head. In the general case the cursor advances to the node that
    /// slid into `position` (the old successor).
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::from_iter(vec![1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(list.remove_at(2), Ok(3));
    /// assert_eq!(list.len(), 4);
    /// assert_eq!(list.element_at(2), Ok(&4));
    ///
    /// assert_eq!(list.remove_at(0), Ok(1));
    /// assert_eq!(list.remove_at(2), Ok(5));
    /// assert_eq!(Vec::from_iter(list), vec![2, 4]);
    /// ```
    pub fn remove_at(&mut self, position: usize) -> Result<T, Error> {
        if position >= self.len {
            return Err(Error::OutOfRange { position, len: self.len });
        }
        if position + 1 == self.len || self.len == 1 {
            return self.pop();
        }
        if position == 0 {
            // SAFETY: the list is non-empty, so `pop_front` succeeds.
            return Ok(unsafe { self.pop_front().unwrap_unchecked() });
        }
        let node = self.locate(position);
        // SAFETY: `0 < position < len - 1`, so both neighbours exist and all
        // three are live nodes of this list.
        unsafe {
            let prev = prev_of(node);
            let next = next_of(node);
            (*prev.as_ptr()).next = Some(next);
            (*next.as_ptr()).prev = Some(prev);
            self.len -= 1;
            // the old successor now occupies the removed index
            self.cursor.set(Some(CachedCursor::new(next, position)));
            Ok(Node::into_element(node))
        }
    }

    /// Returns a reference to the first element, or fails with
    /// [`Error::Empty`]. *O*(1), no cursor movement.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.first(), Err(Error::Empty));
    ///
    /// list.push_back(1).unwrap();
    /// assert_eq!(list.first(), Ok(&1));
    /// ```
    #[inline]
    pub fn first(&self) -> Result<&T, Error> {
        match self.head {
            // SAFETY: the head is a live node owned by this list.
            Some(node) => Ok(unsafe { &(*node.as_ptr()).element }),
            None => Err(Error::Empty),
        }
    }

    /// Returns a reference to the last element, or fails with
    /// [`Error::Empty`]. *O*(1), no cursor movement.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.last(), Err(Error::Empty));
    ///
    /// list.push_back(1).unwrap();
    /// list.push_back(2).unwrap();
    /// assert_eq!(list.last(), Ok(&2));
    /// ```
    #[inline]
    pub fn last(&self) -> Result<&T, Error> {
        match self.tail {
            // SAFETY: the tail is a live node owned by this list.
            Some(node) => Ok(unsafe { &(*node.as_ptr()).element }),
            None => Err(Error::Empty),
        }
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let list = List::from_iter(vec![0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::from_iter(vec![0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(Vec::from_iter(list), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// The cursor cache lives in a `Cell`, so the list must not be `Sync`; it is
// still fine to move it to another thread as a whole.
unsafe impl<T: Send> Send for List<T> {}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the list in both directions and check every structural
    /// invariant: length, link symmetry, and the cursor cache.
    pub(crate) fn assert_well_formed(&self) {
        let mut count = 0;
        let mut prev: Option<NonNull<Node<T>>> = None;
        let mut node = self.head;
        while let Some(n) = node {
            unsafe {
                assert_eq!((*n.as_ptr()).prev, prev, "broken prev link at {}", count);
                prev = Some(n);
                node = (*n.as_ptr()).next;
            }
            count += 1;
            assert!(count <= self.len, "next chain longer than len");
        }
        assert_eq!(count, self.len, "next chain shorter than len");
        assert_eq!(self.tail, prev, "tail does not end the next chain");
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(self.tail.is_none(), self.len == 0);
        if let Some(cached) = self.cursor.get() {
            assert!(cached.index < self.len, "cursor index out of range");
            let mut walk = self.head;
            for _ in 0..cached.index {
                walk = unsafe { (*walk.unwrap().as_ptr()).next };
            }
            assert_eq!(walk, Some(cached.node), "cursor node not at cursor index");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use crate::Error;
    use std::cell::RefCell;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1).unwrap();
        assert!(!list.is_empty());
        assert_eq!(list.pop(), Ok(1));
        assert!(list.is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_with_len() {
        let list = List::<i32>::with_len(4).unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list, List::from_iter(vec![0, 0, 0, 0]));
        list.assert_well_formed();

        assert!(List::<i32>::with_len(0).unwrap().is_empty());
        assert_eq!(List::<i32>::with_len(-1), Err(Error::InvalidLength(-1)));
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped)).unwrap();
        list.push_back(DropChecker::new(2, &dropped)).unwrap();
        list.push_back(DropChecker::new(3, &dropped)).unwrap();
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_element_at() {
        let list = List::from_iter(0..10);
        for i in 0..10 {
            assert_eq!(list.element_at(i), Ok(&(i as i32)));
            list.assert_well_formed();
        }
        // jump around to exercise all three origins
        assert_eq!(list.element_at(9), Ok(&9));
        assert_eq!(list.element_at(0), Ok(&0));
        assert_eq!(list.element_at(5), Ok(&5));
        assert_eq!(list.element_at(4), Ok(&4));
        assert_eq!(list.element_at(6), Ok(&6));
        list.assert_well_formed();

        assert_eq!(
            list.element_at(10),
            Err(Error::OutOfRange { position: 10, len: 10 })
        );
    }

    #[test]
    fn list_element_at_mut() {
        let mut list = List::from_iter(vec![1, 2, 3]);
        *list.element_at_mut(1).unwrap() *= 10;
        assert_eq!(list, List::from_iter(vec![1, 20, 3]));
        assert_eq!(
            list.element_at_mut(3),
            Err(Error::OutOfRange { position: 3, len: 3 })
        );
        list.assert_well_formed();
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = List::from_iter(0..10);
        list.insert(5, 10).unwrap();
        list.assert_well_formed();
        assert_eq!(
            Vec::from_iter(list.iter().copied()),
            Vec::from_iter((0..5).chain(Some(10)).chain(5..10))
        );

        assert_eq!(list.remove_at(10), Ok(9));
        assert_eq!(list.last(), Ok(&8));
        list.assert_well_formed();

        list.insert(0, 11).unwrap();
        assert_eq!(list.first(), Ok(&11));
        list.assert_well_formed();

        assert_eq!(list.remove_at(0), Ok(11));
        assert_eq!(list.first(), Ok(&0));
        list.assert_well_formed();

        list.insert(10, 12).unwrap();
        assert_eq!(list.last(), Ok(&12));
        list.assert_well_formed();

        assert_eq!(
            list.insert(13, 13),
            Err(Error::OutOfRange { position: 13, len: 11 })
        );
        assert_eq!(
            list.remove_at(11),
            Err(Error::OutOfRange { position: 11, len: 11 })
        );
    }

    #[test]
    fn list_remove_middle_moves_cursor_to_successor() {
        let mut list = List::from_iter(vec![1, 2, 3, 4, 5]);
        assert_eq!(list.remove_at(2), Ok(3));
        assert_eq!(list.len(), 4);
        assert_eq!(list.element_at(2), Ok(&4));
        list.assert_well_formed();
    }

    #[test]
    fn list_pop_relocates_tail_cursor() {
        let mut list = List::from_iter(0..5);
        // park the cursor on the tail, then free that node
        assert_eq!(list.element_at(4), Ok(&4));
        assert_eq!(list.pop(), Ok(4));
        list.assert_well_formed();
        assert_eq!(list.element_at(3), Ok(&3));

        // same at the head
        assert_eq!(list.element_at(0), Ok(&0));
        assert_eq!(list.remove_at(0), Ok(0));
        list.assert_well_formed();
        assert_eq!(list.element_at(0), Ok(&1));
    }

    #[test]
    fn list_pop_to_empty_clears_cursor() {
        let mut list = List::from_iter(vec![7]);
        assert_eq!(list.element_at(0), Ok(&7));
        assert_eq!(list.pop(), Ok(7));
        assert!(list.is_empty());
        list.assert_well_formed();
        assert_eq!(list.pop(), Err(Error::Empty));
    }

    #[test]
    fn list_insert_at_head_keeps_cursor_honest() {
        let mut list = List::from_iter(vec![10, 20, 30]);
        // cursor now at index 1
        assert_eq!(list.element_at(1), Ok(&20));
        list.insert(0, 5).unwrap();
        list.assert_well_formed();
        // the cached node slid to index 2
        assert_eq!(list.element_at(2), Ok(&20));
    }

    #[test]
    fn list_append() {
        let mut list = List::from_iter(vec![1, 2]);
        let mut other = List::from_iter(vec![3, 4]);
        list.append(&mut other).unwrap();
        assert_eq!(list, List::from_iter(vec![1, 2, 3, 4]));
        assert_eq!(list.len(), 4);
        assert!(other.is_empty());
        assert_eq!(other.len(), 0);
        list.assert_well_formed();
        other.assert_well_formed();

        // the donor is a valid empty list, not a dangling shell
        other.push_back(5).unwrap();
        assert_eq!(other, List::from_iter(vec![5]));

        // appending an empty list is a no-op
        let mut empty = List::new();
        list.append(&mut empty).unwrap();
        assert_eq!(list.len(), 4);

        // appending onto an empty list adopts the chain
        let mut target = List::new();
        target.append(&mut list).unwrap();
        assert_eq!(target, List::from_iter(vec![1, 2, 3, 4]));
        assert!(list.is_empty());
        target.assert_well_formed();
    }

    #[test]
    fn list_append_clears_donor_cursor() {
        let mut list = List::from_iter(vec![1, 2]);
        let mut other = List::from_iter(vec![3, 4]);
        assert_eq!(other.element_at(1), Ok(&4));
        list.append(&mut other).unwrap();
        other.assert_well_formed();
        list.assert_well_formed();
        assert_eq!(list.element_at(3), Ok(&4));
    }

    #[test]
    fn list_merge_clones() {
        let mut list = List::from_iter(vec![1, 2]);
        let other = List::from_iter(vec![3, 4]);
        list.merge(&other).unwrap();
        assert_eq!(list, List::from_iter(vec![1, 2, 3, 4]));
        assert_eq!(other, List::from_iter(vec![3, 4]));
        list.assert_well_formed();
    }

    #[test]
    fn list_try_extend() {
        let mut list = List::from_iter(vec![1, 2]);
        list.try_extend(vec![3, 4, 5]).unwrap();
        assert_eq!(list, List::from_iter(1..=5));
        list.try_extend(Vec::new()).unwrap();
        assert_eq!(list.len(), 5);
        list.assert_well_formed();
    }

    #[test]
    fn list_reference_model() {
        // deterministic pseudo-random interleaving, cross-checked against Vec
        let mut seed = 0x2545_f491_4f6c_dd1d_u64;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            seed
        };
        let mut list = List::new();
        let mut model: Vec<u64> = Vec::new();
        for _ in 0..1000 {
            let r = next();
            match r % 5 {
                0 | 1 => {
                    let at = if model.is_empty() {
                        0
                    } else {
                        (r / 5) as usize % (model.len() + 1)
                    };
                    list.insert(at, r).unwrap();
                    model.insert(at, r);
                }
                2 => {
                    list.push_back(r).unwrap();
                    model.push(r);
                }
                3 if !model.is_empty() => {
                    let at = (r / 5) as usize % model.len();
                    assert_eq!(list.remove_at(at), Ok(model.remove(at)));
                }
                4 if !model.is_empty() => {
                    assert_eq!(list.pop(), Ok(model.pop().unwrap()));
                }
                _ => {}
            }
            list.assert_well_formed();
            assert_eq!(list.len(), model.len());
            if !model.is_empty() {
                let at = (r >> 32) as usize % model.len();
                assert_eq!(list.element_at(at), Ok(&model[at]));
            }
        }
        assert_eq!(Vec::from_iter(list), model);
    }
}
