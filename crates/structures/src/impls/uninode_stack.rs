use crate::error::Result;
use crate::node::{Arena, NodeId, UniNode, id};
use crate::traits::Stack;

/// Stack on a singly linked chain; the top is the head node.
pub struct UninodeStack<T> {
    nodes: Arena<UniNode<T>>,
    head: NodeId,
}

impl<T> UninodeStack<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: NodeId::NIL,
        }
    }

    fn push(&mut self, node: NodeId) {
        self.nodes.node_mut(node).next = self.head;
        self.head = node;
    }
}

impl<T> Default for UninodeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack for UninodeStack<T> {
    type Value = T;

    fn new() -> Self {
        Self::new()
    }

    fn filled(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Self {
            nodes: Arena::<UniNode<T>>::chain(value, count),
            head: if count == 0 { NodeId::NIL } else { id(0) },
        }
    }

    fn is_empty(&self) -> bool {
        self.head.is_nil()
    }

    fn top(&self) -> Option<&T> {
        if self.head.is_nil() {
            return None;
        }
        Some(&self.nodes.node(self.head).value)
    }

    fn insert(&mut self, value: T) {
        let node = self.nodes.alloc(UniNode::detached(value));
        self.push(node);
    }

    fn try_insert(&mut self, value: T) -> Result<()> {
        let node = self.nodes.try_alloc(UniNode::detached(value))?;
        self.push(node);
        Ok(())
    }

    fn erase(&mut self) -> Option<T> {
        if self.head.is_nil() {
            return None;
        }
        let removed = self.nodes.release(self.head);
        self.head = removed.next;
        Some(removed.value)
    }
}
