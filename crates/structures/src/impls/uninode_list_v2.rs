use crate::error::{Error, Result, invalid_position};
use crate::node::{Arena, NodeId, NodePosition, UniNode, id};
use crate::position::{Sequence, SequenceMut};
use crate::traits::List;

/// Singly linked list caching its last node.
///
/// `last` and `insert_last` are O(1). Every path that can change the last
/// node updates `tail`.
pub struct UninodeListV2<T> {
    nodes: Arena<UniNode<T>>,
    head: NodeId,
    tail: NodeId,
}

impl<T> UninodeListV2<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: NodeId::NIL,
            tail: NodeId::NIL,
        }
    }

    fn link_after(&mut self, at: NodePosition, node: NodeId) -> NodePosition {
        let next = self.nodes.link_of(self.head, at);
        self.nodes.node_mut(node).next = next;
        self.nodes.set_link(&mut self.head, at, node);
        if next.is_nil() {
            self.tail = node;
        }
        NodePosition::Node(node)
    }
}

impl<T> Default for UninodeListV2<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for UninodeListV2<T> {
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
}

impl<T> SequenceMut for UninodeListV2<T> {
    fn get_mut(&mut self, at: NodePosition) -> Option<&mut T> {
        self.nodes.value_at_mut(at)
    }
}

impl<T> List for UninodeListV2<T> {
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
        NodePosition::from_back_link(self.tail)
    }

    fn insert_after(&mut self, at: NodePosition, value: T) -> NodePosition {
        if !self.nodes.is_anchor(at) {
            invalid_position(at);
        }
        let node = self.nodes.alloc(UniNode::detached(value));
        self.link_after(at, node)
    }

    fn try_insert_after(&mut self, at: NodePosition, value: T) -> Result<NodePosition> {
        if !self.nodes.is_anchor(at) {
            return Err(Error::InvalidPosition);
        }
        let node = self.nodes.try_alloc(UniNode::detached(value))?;
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
        let removed = self.nodes.release(victim);
        self.nodes.set_link(&mut self.head, at, removed.next);
        if victim == self.tail {
            self.tail = at.as_link();
        }
        Some(removed.value)
    }
}
