use crate::error::Result;
use crate::node::{Arena, NodeId, UniNode, id};
use crate::traits::Queue;

/// Queue on a singly linked chain: values are linked after the tail and
/// unlinked from the head.
pub struct UninodeQueue<T> {
    nodes: Arena<UniNode<T>>,
    head: NodeId,
    tail: NodeId,
}

impl<T> UninodeQueue<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: NodeId::NIL,
            tail: NodeId::NIL,
        }
    }

    fn append(&mut self, node: NodeId) {
        if self.tail.is_nil() {
            self.head = node;
        } else {
            self.nodes.node_mut(self.tail).next = node;
        }
        self.tail = node;
    }
}

impl<T> Default for UninodeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue for UninodeQueue<T> {
    type Value = T;

    fn new() -> Self {
        Self::new()
    }

    fn filled(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        if count == 0 {
            return Self::new();
        }
        Self {
            nodes: Arena::<UniNode<T>>::chain(value, count),
            head: id(0),
            tail: id(count - 1),
        }
    }

    fn is_empty(&self) -> bool {
        self.head.is_nil()
    }

    fn front(&self) -> Option<&T> {
        if self.head.is_nil() {
            return None;
        }
        Some(&self.nodes.node(self.head).value)
    }

    fn insert(&mut self, value: T) {
        let node = self.nodes.alloc(UniNode::detached(value));
        self.append(node);
    }

    fn try_insert(&mut self, value: T) -> Result<()> {
        let node = self.nodes.try_alloc(UniNode::detached(value))?;
        self.append(node);
        Ok(())
    }

    fn remove(&mut self) -> Option<T> {
        if self.head.is_nil() {
            return None;
        }
        let removed = self.nodes.release(self.head);
        self.head = removed.next;
        if self.head.is_nil() {
            self.tail = NodeId::NIL;
        }
        Some(removed.value)
    }
}

#[cfg(test)]
mod tests {
    use super::UninodeQueue;
    use crate::traits::Queue;

    #[test]
    fn tail_resets_when_drained() {
        let mut queue = UninodeQueue::filled('x', 1);
        queue.insert('y');
        assert_eq!(queue.remove(), Some('x'));
        assert_eq!(queue.remove(), Some('y'));
        assert!(queue.is_empty());
        queue.insert('z');
        assert_eq!(queue.front(), Some(&'z'));
        queue.insert('w');
        assert_eq!(queue.remove(), Some('z'));
        assert_eq!(queue.front(), Some(&'w'));
    }
}
