//! A fully safe rendition of the doubly-linked list, with node ownership
//! checked at compile time.
//!
//! Each node is held by two half-owners (`StaticRc<_, 1, 2>`), one per
//! neighbouring link, and interior mutability goes through a `GhostToken`
//! instead of raw pointers. Positional access walks from the nearer end; the
//! cached-cursor trick of the main [`List`](crate::List) does not fit here
//! because a cursor would be a third reference to a node that only has two
//! halves to give.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct List<'id, T> {
    ends: [Option<NodePtr<'id, T>>; 2],
    len: usize,
}

struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    element: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    fn new(element: T) -> Self {
        Self {
            links: [None, None],
            element,
        }
    }
}

impl<'id, T> Default for List<'id, T> {
    fn default() -> Self {
        Self {
            ends: [None, None],
            len: 0,
        }
    }
}

// private link surgery, parameterized over the side it works from
impl<'id, T> List<'id, T> {
    const HEAD: usize = 0;
    const TAIL: usize = 1;

    fn push_at(&mut self, side: usize, element: T, token: &mut GhostToken<'id>) {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let (left, right) = Full::split(Full::new(GhostCell::new(Node::new(element))));
        match self.ends[side].take() {
            Some(this_side) => {
                this_side.deref().borrow_mut(token).links[oppo] = Some(left);
                right.deref().borrow_mut(token).links[side] = Some(this_side);
            }
            None => self.ends[oppo] = Some(left),
        }
        self.ends[side] = Some(right);
        self.len += 1;
    }

    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<T> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let right = self.ends[side].take()?;
        let left = match right.deref().borrow_mut(token).links[side].take() {
            Some(this_side) => {
                let left = this_side.deref().borrow_mut(token).links[oppo]
                    .take()
                    .unwrap();
                self.ends[side] = Some(this_side);
                left
            }
            None => self.ends[oppo].take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(left, right)).into_inner().element)
    }

    /// Walk `steps` links away from the end on `side`.
    fn walk_from<'a>(
        &'a self,
        side: usize,
        steps: usize,
        token: &'a GhostToken<'id>,
    ) -> Option<&'a Node<'id, T>> {
        let oppo = 1 - side;
        let mut node = self.ends[side].as_ref()?.deref().borrow(token);
        for _ in 0..steps {
            node = node.links[oppo].as_ref()?.deref().borrow(token);
        }
        Some(node)
    }
}

impl<'id, T> List<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A reference to the element at `position`, walking from the nearer end,
    /// or `None` when `position >= len`.
    pub fn value_at<'a>(&'a self, position: usize, token: &'a GhostToken<'id>) -> Option<&'a T> {
        if position >= self.len {
            return None;
        }
        let from_tail = self.len - 1 - position;
        let node = if position <= from_tail {
            self.walk_from(Self::HEAD, position, token)
        } else {
            self.walk_from(Self::TAIL, from_tail, token)
        };
        node.map(|node| &node.element)
    }

    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        self.push_at(Self::TAIL, element, token);
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(Self::TAIL, token)
    }

    pub fn push_front(&mut self, element: T, token: &mut GhostToken<'id>) {
        self.push_at(Self::HEAD, element, token);
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(Self::HEAD, token)
    }
}
