//! A deque built from the same doubly linked shape as [`crate::List`], but
//! without any unsafe code.
//!
//! Each node is owned by exactly two `StaticRc` halves: one held by the
//! neighbour (or list end) on each side. Removing a node joins its halves
//! back into full ownership, so the element is released as an owned value
//! rather than read out of a raw pointer. Interior mutability goes through a
//! `GhostToken`, which brands every cell with the `'id` lifetime and makes
//! aliasing checks compile-time.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;

type Half<'id, T> = StaticRc<GhostCell<'id, SafeNode<'id, T>>, 1, 2>;
type Full<'id, T> = StaticRc<GhostCell<'id, SafeNode<'id, T>>, 2, 2>;

pub struct SafeList<'id, T> {
    head: Option<Half<'id, T>>,
    tail: Option<Half<'id, T>>,
    len: usize,
}

struct SafeNode<'id, T> {
    prev: Option<Half<'id, T>>,
    next: Option<Half<'id, T>>,
    elem: T,
}

impl<'id, T> SafeNode<'id, T> {
    fn new(elem: T) -> Self {
        Self {
            prev: None,
            next: None,
            elem,
        }
    }
}

impl<'id, T> Default for SafeList<'id, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<'id, T> SafeList<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.head.as_ref().map(|node| &node.borrow(token).elem)
    }

    pub fn back<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.tail.as_ref().map(|node| &node.borrow(token).elem)
    }

    pub fn push_front(&mut self, elem: T, token: &mut GhostToken<'id>) {
        let (kept, given) = Full::split(Full::new(GhostCell::new(SafeNode::new(elem))));
        match self.head.take() {
            Some(old_head) => {
                old_head.borrow_mut(token).prev = Some(given);
                kept.borrow_mut(token).next = Some(old_head);
            }
            None => self.tail = Some(given),
        }
        self.head = Some(kept);
        self.len += 1;
    }

    pub fn push_back(&mut self, elem: T, token: &mut GhostToken<'id>) {
        let (kept, given) = Full::split(Full::new(GhostCell::new(SafeNode::new(elem))));
        match self.tail.take() {
            Some(old_tail) => {
                old_tail.borrow_mut(token).next = Some(given);
                kept.borrow_mut(token).prev = Some(old_tail);
            }
            None => self.head = Some(given),
        }
        self.tail = Some(kept);
        self.len += 1;
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let head = self.head.take()?;
        let other = match head.borrow_mut(token).next.take() {
            Some(next) => {
                // The removed node's second half is held by its old
                // neighbour.
                let other = next.borrow_mut(token).prev.take().unwrap();
                self.head = Some(next);
                other
            }
            None => self.tail.take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(head, other)).into_inner().elem)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let tail = self.tail.take()?;
        let other = match tail.borrow_mut(token).prev.take() {
            Some(prev) => {
                let other = prev.borrow_mut(token).next.take().unwrap();
                self.tail = Some(prev);
                other
            }
            None => self.head.take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(tail, other)).into_inner().elem)
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::SafeList;
    use ghost_cell::GhostToken;

    #[test]
    fn safe_list_push_pop() {
        GhostToken::new(|mut token| {
            let mut list = SafeList::new();
            assert!(list.is_empty());
            list.push_back(1, &mut token);
            list.push_front(2, &mut token);
            assert_eq!(list.len(), 2);
            assert_eq!(list.front(&token), Some(&2));
            assert_eq!(list.back(&token), Some(&1));
            assert_eq!(list.pop_back(&mut token), Some(1));
            assert_eq!(list.pop_front(&mut token), Some(2));
            assert_eq!(list.pop_front(&mut token), None);
            assert!(list.is_empty());
        })
    }

    #[test]
    fn safe_list_is_a_deque() {
        GhostToken::new(|mut token| {
            let mut list = SafeList::new();
            for i in 0..5 {
                list.push_back(i, &mut token);
            }
            assert_eq!(list.len(), 5);
            // Drain alternately from both ends.
            assert_eq!(list.pop_front(&mut token), Some(0));
            assert_eq!(list.pop_back(&mut token), Some(4));
            assert_eq!(list.pop_front(&mut token), Some(1));
            assert_eq!(list.pop_back(&mut token), Some(3));
            assert_eq!(list.pop_front(&mut token), Some(2));
            assert_eq!(list.pop_back(&mut token), None);
        })
    }
}
