use crate::error::{Result, invalid_position};
use crate::node::{Arena, BiNode, NodeId, NodePosition, id};
use crate::position::{ReverseSequence, Sequence, SequenceMut};
use crate::traits::Hoop;

/// Circular doubly linked chain.
///
/// A ring of one links to itself both ways. The empty hoop has no ring and
/// reports `AfterLast` as its start placeholder.
pub struct BinodeHoopV1<T> {
    nodes: Arena<BiNode<T>>,
    start: NodeId,
}

impl<T> BinodeHoopV1<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            start: NodeId::NIL,
        }
    }

    fn link_alone(&mut self, node: NodeId) {
        let fresh = self.nodes.node_mut(node);
        fresh.next = node;
        fresh.prev = node;
        self.start = node;
    }

    /// Link `node` between `prev` and its current successor.
    fn link_after(&mut self, prev: NodeId, node: NodeId) {
        let next = self.nodes.node(prev).next;
        let fresh = self.nodes.node_mut(node);
        fresh.next = next;
        fresh.prev = prev;
        self.nodes.node_mut(prev).next = node;
        self.nodes.node_mut(next).prev = node;
    }

    fn unlink(&mut self, node: NodeId) -> T {
        let removed = self.nodes.release(node);
        if removed.next == node {
            self.start = NodeId::NIL;
        } else {
            self.nodes.node_mut(removed.prev).next = removed.next;
            self.nodes.node_mut(removed.next).prev = removed.prev;
            if self.start == node {
                self.start = removed.next;
            }
        }
        removed.value
    }

    fn place_start(&mut self, node: NodeId) -> NodePosition {
        if self.start.is_nil() {
            self.link_alone(node);
        } else {
            let last = self.nodes.node(self.start).prev;
            self.link_after(last, node);
            self.start = node;
        }
        NodePosition::Node(node)
    }

    fn ring_node(&self, at: NodePosition) -> NodeId {
        match at {
            NodePosition::Node(node) if self.nodes.contains(node) => node,
            _ => invalid_position(at),
        }
    }
}

impl<T> Default for BinodeHoopV1<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for BinodeHoopV1<T> {
    type Position = NodePosition;
    type Value = T;

    #[inline]
    fn get(&self, at: NodePosition) -> Option<&T> {
        self.nodes.value_at(at)
    }

    #[inline]
    fn next(&self, at: NodePosition) -> NodePosition {
        NodePosition::Node(self.nodes.node(self.ring_node(at)).next)
    }
}

impl<T> ReverseSequence for BinodeHoopV1<T> {
    #[inline]
    fn previous(&self, at: NodePosition) -> NodePosition {
        NodePosition::Node(self.nodes.node(self.ring_node(at)).prev)
    }
}

impl<T> SequenceMut for BinodeHoopV1<T> {
    fn get_mut(&mut self, at: NodePosition) -> Option<&mut T> {
        self.nodes.value_at_mut(at)
    }
}

impl<T> Hoop for BinodeHoopV1<T> {
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
            nodes: Arena::<BiNode<T>>::ring(value, count),
            start: id(0),
        }
    }

    fn is_empty(&self) -> bool {
        self.start.is_nil()
    }

    fn start(&self) -> NodePosition {
        NodePosition::from_link(self.start)
    }

    fn insert_start(&mut self, value: T) -> NodePosition {
        let node = self.nodes.alloc(BiNode::detached(value));
        self.place_start(node)
    }

    fn try_insert_start(&mut self, value: T) -> Result<NodePosition> {
        let node = self.nodes.try_alloc(BiNode::detached(value))?;
        Ok(self.place_start(node))
    }

    fn insert_after(&mut self, at: NodePosition, value: T) -> NodePosition {
        if self.start.is_nil() {
            if at != self.start() {
                invalid_position(at);
            }
            let node = self.nodes.alloc(BiNode::detached(value));
            self.link_alone(node);
            return NodePosition::Node(node);
        }
        let prev = self.ring_node(at);
        let node = self.nodes.alloc(BiNode::detached(value));
        self.link_after(prev, node);
        NodePosition::Node(node)
    }

    fn remove_first(&mut self) -> Option<T> {
        if self.start.is_nil() {
            return None;
        }
        Some(self.unlink(self.start))
    }

    fn remove_after(&mut self, at: NodePosition) -> Option<T> {
        let prev = match at {
            NodePosition::Node(node) if self.nodes.contains(node) => node,
            _ => return None,
        };
        let victim = self.nodes.node(prev).next;
        Some(self.unlink(victim))
    }

    fn rotate(&mut self) {
        if !self.start.is_nil() {
            self.start = self.nodes.node(self.start).next;
        }
    }
}
