use crate::error::{Error, Result, invalid_position};
use crate::node::{Arena, BiNode, NodeId, NodePosition, id};
use crate::position::{ReverseSequence, Sequence, SequenceMut, walk};
use crate::traits::{BidirectionalList, List};

/// Doubly linked list caching its last node and its length.
pub struct BinodeListV3<T> {
    nodes: Arena<BiNode<T>>,
    head: NodeId,
    tail: NodeId,
    len: usize,
}

impl<T> BinodeListV3<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: NodeId::NIL,
            tail: NodeId::NIL,
            len: 0,
        }
    }

    fn link_after(&mut self, at: NodePosition, node: NodeId) -> NodePosition {
        let next = self.nodes.link_of(self.head, at);
        let prev = at.as_link();
        let fresh = self.nodes.node_mut(node);
        fresh.next = next;
        fresh.prev = prev;
        if prev.is_nil() {
            self.head = node;
        } else {
            self.nodes.node_mut(prev).next = node;
        }
        if next.is_nil() {
            self.tail = node;
        } else {
            self.nodes.node_mut(next).prev = node;
        }
        self.len += 1;
        NodePosition::Node(node)
    }

    fn unlink(&mut self, node: NodeId) -> T {
        let removed = self.nodes.release(node);
        if removed.prev.is_nil() {
            self.head = removed.next;
        } else {
            self.nodes.node_mut(removed.prev).next = removed.next;
        }
        if removed.next.is_nil() {
            self.tail = removed.prev;
        } else {
            self.nodes.node_mut(removed.next).prev = removed.prev;
        }
        self.len -= 1;
        removed.value
    }
}

impl<T> Default for BinodeListV3<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for BinodeListV3<T> {
    type Position = NodePosition;
    type Value = T;

    #[inline]
    fn get(&self, at: NodePosition) -> Option<&T> {
        self.nodes.value_at(at)
    }

    #[inline]
    fn next(&self, at: NodePosition) -> NodePosition {
        self.nodes.step(self.head, at)
    }

    fn distance(&self, from: NodePosition, to: NodePosition) -> usize {
        if to == NodePosition::AfterLast {
            if from == NodePosition::BeforeFirst {
                return self.len + 1;
            }
            if from == self.first() {
                return self.len;
            }
        }
        walk(self, from, to)
    }
}

impl<T> ReverseSequence for BinodeListV3<T> {
    fn previous(&self, at: NodePosition) -> NodePosition {
        let prev = match at {
            NodePosition::BeforeFirst => invalid_position(at),
            NodePosition::Node(node) => self.nodes.node(node).prev,
            NodePosition::AfterLast => self.tail,
        };
        NodePosition::from_back_link(prev)
    }
}

impl<T> SequenceMut for BinodeListV3<T> {
    fn get_mut(&mut self, at: NodePosition) -> Option<&mut T> {
        self.nodes.value_at_mut(at)
    }
}

impl<T> List for BinodeListV3<T> {
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

    fn before_first(&self) -> NodePosition {
        NodePosition::BeforeFirst
    }

    fn first(&self) -> NodePosition {
        NodePosition::from_link(self.head)
    }

    fn after_last(&self) -> NodePosition {
        NodePosition::AfterLast
    }

    fn last(&self) -> NodePosition {
        self.previous(NodePosition::AfterLast)
    }

    fn insert_after(&mut self, at: NodePosition, value: T) -> NodePosition {
        if !self.nodes.is_anchor(at) {
            invalid_position(at);
        }
        let node = self.nodes.alloc(BiNode::detached(value));
        self.link_after(at, node)
    }

    fn try_insert_after(&mut self, at: NodePosition, value: T) -> Result<NodePosition> {
        if !self.nodes.is_anchor(at) {
            return Err(Error::InvalidPosition);
        }
        let node = self.nodes.try_alloc(BiNode::detached(value))?;
        Ok(self.link_after(at, node))
    }

    fn erase_after(&mut self, at: NodePosition) -> Option<T> {
        if !self.nodes.is_anchor(at) {
            return None;
        }
        let victim = self.nodes.link_of(self.head, at);
        if victim.is_nil() {
            return None;
        }
        Some(self.unlink(victim))
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> BidirectionalList for BinodeListV3<T> {
    fn insert_at(&mut self, at: NodePosition, value: T) -> NodePosition {
        let anchor = match at {
            NodePosition::Node(node) if !self.nodes.contains(node) => invalid_position(at),
            NodePosition::BeforeFirst => invalid_position(at),
            _ => self.previous(at),
        };
        self.insert_after(anchor, value)
    }

    fn erase_at(&mut self, at: NodePosition) -> Option<T> {
        match at {
            NodePosition::Node(node) if self.nodes.contains(node) => Some(self.unlink(node)),
            _ => None,
        }
    }
}
