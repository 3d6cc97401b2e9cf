//! Doubly linked deque with [`Stack`] and [`Queue`] views.
//!
//! Nodes live in an arena and link to each other by index; freed slots are recycled.
//!
//! - [`Stack`] pushes and pops at the front, so the front is always the newest element.
//! - [`Queue`] adds at the back and removes at the front, so the front is always the oldest element.
//!
//! Removing from an empty stack or queue is an [`UnderflowError`], never a panic.

use std::fmt;

use thiserror::Error;

/// Raised when removing from an empty [`Stack`] or [`Queue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnderflowError {
    #[error("pop from empty stack")]
    Stack,
    #[error("remove from empty queue")]
    Queue,
}

#[derive(Debug, Clone)]
struct Node<T> {
    data: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Arena-backed doubly linked list.
#[derive(Clone)]
pub struct Deque<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, data: T) {
        let index = self.alloc(Node {
            data,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old) => self.node_mut(old).prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.len += 1;
    }

    pub fn push_back(&mut self, data: T) {
        let index = self.alloc(Node {
            data,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old) => self.node_mut(old).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let index = self.head?;
        let node = self.release(index);
        self.head = node.next;
        match node.next {
            Some(next) => self.node_mut(next).prev = None,
            None => self.tail = None,
        }
        Some(node.data)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let index = self.tail?;
        let node = self.release(index);
        self.tail = node.prev;
        match node.prev {
            Some(prev) => self.node_mut(prev).next = None,
            None => self.head = None,
        }
        Some(node.data)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|index| &self.node(index).data)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        let index = self.head?;
        Some(&mut self.node_mut(index).data)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|index| &self.node(index).data)
    }

    /// Mutable access to the element `position` steps behind the front.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        let index = self.slot_at(position)?;
        Some(&mut self.node_mut(index).data)
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = self.node(cursor?);
            cursor = node.next;
            Some(&node.data)
        })
    }

    fn slot_at(&self, position: usize) -> Option<usize> {
        let mut cursor = self.head;
        for _ in 0..position {
            cursor = self.node(cursor?).next;
        }
        cursor
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) -> Node<T> {
        let node = self.slots[index]
            .take()
            .expect("INVARIANT: linked slots are always occupied");
        self.free.push(index);
        self.len -= 1;
        node
    }

    fn node(&self, index: usize) -> &Node<T> {
        self.slots[index]
            .as_ref()
            .expect("INVARIANT: linked slots are always occupied")
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        self.slots[index]
            .as_mut()
            .expect("INVARIANT: linked slots are always occupied")
    }
}

/// LIFO view over a [`Deque`]; the top of the stack is the deque's front.
#[derive(Clone)]
pub struct Stack<T> {
    inner: Deque<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("top_first", &self.inner).finish()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { inner: Deque::new() }
    }

    pub fn push(&mut self, data: T) {
        self.inner.push_front(data);
    }

    pub fn pop(&mut self) -> Result<T, UnderflowError> {
        self.inner.pop_front().ok_or(UnderflowError::Stack)
    }

    pub fn peek(&self) -> Option<&T> {
        self.inner.front()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.inner.front_mut()
    }

    /// Return the element `depth` levels below the top (`0` is the top).
    pub fn get_mut(&mut self, depth: usize) -> Option<&mut T> {
        self.inner.get_mut(depth)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate from the top of the stack down to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter()
    }
}

/// FIFO view over a [`Deque`]; the oldest element sits at the deque's front.
#[derive(Clone)]
pub struct Queue<T> {
    inner: Deque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("oldest_first", &self.inner).finish()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { inner: Deque::new() }
    }

    pub fn add(&mut self, data: T) {
        self.inner.push_back(data);
    }

    pub fn remove(&mut self) -> Result<T, UnderflowError> {
        self.inner.pop_front().ok_or(UnderflowError::Queue)
    }

    /// Return the oldest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.inner.front()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = Stack::new();
        stack.push('a');
        stack.push('b');
        stack.push('c');
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Ok('c'));
        assert_eq!(stack.pop(), Ok('b'));
        assert_eq!(stack.pop(), Ok('a'));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stack_underflow() {
        let mut stack: Stack<u8> = Stack::new();
        assert_eq!(stack.pop(), Err(UnderflowError::Stack));
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = Queue::new();
        queue.add('a');
        queue.add('b');
        queue.add('c');
        assert_eq!(queue.peek(), Some(&'a'));
        assert_eq!(queue.remove(), Ok('a'));
        assert_eq!(queue.remove(), Ok('b'));
        assert_eq!(queue.remove(), Ok('c'));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_underflow() {
        let mut queue: Queue<u8> = Queue::new();
        assert_eq!(queue.remove(), Err(UnderflowError::Queue));
        assert_eq!(UnderflowError::Queue.to_string(), "remove from empty queue");
    }

    #[test]
    fn test_stack_iterates_top_down() {
        let mut stack = Stack::new();
        for n in 1..=3 {
            stack.push(n);
        }
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        if let Some(bottom) = stack.get_mut(2) {
            *bottom = 10;
        }
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 10]);
        assert!(stack.get_mut(3).is_none());
    }

    #[test]
    fn test_deque_both_ends() {
        let mut deque = Deque::new();
        deque.push_back(2);
        deque.push_front(1);
        deque.push_back(3);
        assert_eq!(deque.front(), Some(&1));
        assert_eq!(deque.back(), Some(&3));
        assert_eq!(deque.pop_back(), Some(3));
        assert_eq!(deque.pop_front(), Some(1));
        assert_eq!(deque.pop_front(), Some(2));
        assert_eq!(deque.pop_back(), None);
        assert_eq!(deque.front(), None);
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut queue = Queue::new();
        for round in 0..4 {
            queue.add(round);
            queue.add(round + 10);
            assert_eq!(queue.remove(), Ok(round));
            assert_eq!(queue.remove(), Ok(round + 10));
        }
        assert!(queue.inner.slots.len() <= 2);
        queue.add(99);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![&99]);
    }
}
