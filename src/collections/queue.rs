//! First-in first-out queue on a circular doubly linked list with a sentinel.
//!
//! The nodes are stored in an arena and linked by their indices. The node at
//! index zero is the sentinel. It never holds a value and is linked to itself
//! when the queue is empty, so the list is never structurally empty and
//! insertion and removal need no special cases.
//!
//! New elements are inserted right after the sentinel (on its `next` side) and
//! removed right before it (on its `prev` side).
//!
//! # Examples
//!
//! ```
//! use undigraph::collections::Queue;
//!
//! let mut queue = Queue::new();
//!
//! queue.enqueue(5);
//! queue.enqueue(12);
//! queue.enqueue(77);
//!
//! assert_eq!(queue.dequeue(), Some(5));
//! assert_eq!(queue.len(), 2);
//! assert_eq!(queue.iter().collect::<Vec<_>>(), vec![&12, &77]);
//! ```

use std::fmt;

const SENTINEL: usize = 0;

#[derive(Clone)]
struct Node<T> {
    prev: usize,
    next: usize,
    // `None` for the sentinel and for free slots.
    value: Option<T>,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Self {
            prev: SENTINEL,
            next: SENTINEL,
            value: None,
        }
    }
}

/// A first-in first-out queue.
#[derive(Clone)]
pub struct Queue<T> {
    nodes: Vec<Node<T>>,
    // Slots of dequeued nodes available for reuse.
    free: Vec<usize>,
    len: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::sentinel()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[SENTINEL].next == SENTINEL
    }

    /// Appends an element to the queue.
    pub fn enqueue(&mut self, value: T) {
        let newest = self.nodes[SENTINEL].next;

        let node = Node {
            prev: SENTINEL,
            next: newest,
            value: Some(value),
        };

        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        self.nodes[newest].prev = index;
        self.nodes[SENTINEL].next = index;
        self.len += 1;
    }

    /// Removes the oldest element from the queue and returns it, or `None` if
    /// the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let oldest = self.nodes[SENTINEL].prev;
        let before = self.nodes[oldest].prev;

        self.nodes[SENTINEL].prev = before;
        self.nodes[before].next = SENTINEL;

        self.free.push(oldest);
        self.len -= 1;

        self.nodes[oldest].value.take()
    }

    /// Returns the oldest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.nodes[self.nodes[SENTINEL].prev].value.as_ref()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[SENTINEL] = Node::sentinel();
        self.free.clear();
        self.len = 0;
    }

    /// Returns an iterator over the elements from the oldest to the newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            curr: self.nodes[SENTINEL].prev,
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned from [`Queue::iter`].
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    curr: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr == SENTINEL {
            return None;
        }

        let node = &self.nodes[self.curr];
        self.curr = node.prev;
        node.value.as_ref()
    }
}
