use crate::error::Result;
use crate::node::{Arena, BiNode, NodeId, id};
use crate::traits::Deck;

/// Double-ended container on a doubly linked chain.
pub struct BinodeDeck<T> {
    nodes: Arena<BiNode<T>>,
    head: NodeId,
    tail: NodeId,
    len: usize,
}

impl<T> BinodeDeck<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: NodeId::NIL,
            tail: NodeId::NIL,
            len: 0,
        }
    }

    fn link_top(&mut self, node: NodeId) {
        self.nodes.node_mut(node).next = self.head;
        if self.head.is_nil() {
            self.tail = node;
        } else {
            self.nodes.node_mut(self.head).prev = node;
        }
        self.head = node;
        self.len += 1;
    }

    fn link_bottom(&mut self, node: NodeId) {
        self.nodes.node_mut(node).prev = self.tail;
        if self.tail.is_nil() {
            self.head = node;
        } else {
            self.nodes.node_mut(self.tail).next = node;
        }
        self.tail = node;
        self.len += 1;
    }

    fn value_at(&self, node: NodeId) -> Option<&T> {
        if node.is_nil() {
            return None;
        }
        Some(&self.nodes.node(node).value)
    }
}

impl<T> Default for BinodeDeck<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deck for BinodeDeck<T> {
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
            nodes: Arena::<BiNode<T>>::chain(value, count),
            head: id(0),
            tail: id(count - 1),
            len: count,
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn top(&self) -> Option<&T> {
        self.value_at(self.head)
    }

    fn bottom(&self) -> Option<&T> {
        self.value_at(self.tail)
    }

    fn insert_top(&mut self, value: T) {
        let node = self.nodes.alloc(BiNode::detached(value));
        self.link_top(node);
    }

    fn insert_bottom(&mut self, value: T) {
        let node = self.nodes.alloc(BiNode::detached(value));
        self.link_bottom(node);
    }

    fn try_insert_top(&mut self, value: T) -> Result<()> {
        let node = self.nodes.try_alloc(BiNode::detached(value))?;
        self.link_top(node);
        Ok(())
    }

    fn try_insert_bottom(&mut self, value: T) -> Result<()> {
        let node = self.nodes.try_alloc(BiNode::detached(value))?;
        self.link_bottom(node);
        Ok(())
    }

    fn erase_top(&mut self) -> Option<T> {
        if self.head.is_nil() {
            return None;
        }
        let removed = self.nodes.release(self.head);
        self.head = removed.next;
        if self.head.is_nil() {
            self.tail = NodeId::NIL;
        } else {
            self.nodes.node_mut(self.head).prev = NodeId::NIL;
        }
        self.len -= 1;
        Some(removed.value)
    }

    fn erase_bottom(&mut self) -> Option<T> {
        if self.tail.is_nil() {
            return None;
        }
        let removed = self.nodes.release(self.tail);
        self.tail = removed.prev;
        if self.tail.is_nil() {
            self.head = NodeId::NIL;
        } else {
            self.nodes.node_mut(self.tail).next = NodeId::NIL;
        }
        self.len -= 1;
        Some(removed.value)
    }
}
