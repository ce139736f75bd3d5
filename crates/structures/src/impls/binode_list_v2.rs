use crate::error::{Error, Result, invalid_position};
use crate::node::{Arena, BiNode, NodeId, NodePosition, id};
use crate::position::{ReverseSequence, Sequence, SequenceMut};
use crate::traits::{BidirectionalList, List};

/// Doubly linked list caching its last node.
///
/// Both ends are O(1), including `previous(after_last)`.
pub struct BinodeListV2<T> {
    nodes: Arena<BiNode<T>>,
    head: NodeId,
    tail: NodeId,
}

impl<T> BinodeListV2<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: NodeId::NIL,
            tail: NodeId::NIL,
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
        removed.value
    }
}

impl<T> Default for BinodeListV2<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for BinodeListV2<T> {
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

impl<T> ReverseSequence for BinodeListV2<T> {
    fn previous(&self, at: NodePosition) -> NodePosition {
        let prev = match at {
            NodePosition::BeforeFirst => invalid_position(at),
            NodePosition::Node(node) => self.nodes.node(node).prev,
            NodePosition::AfterLast => self.tail,
        };
        NodePosition::from_back_link(prev)
    }
}

impl<T> SequenceMut for BinodeListV2<T> {
    fn get_mut(&mut self, at: NodePosition) -> Option<&mut T> {
        self.nodes.value_at_mut(at)
    }
}

impl<T> List for BinodeListV2<T> {
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
}

impl<T> BidirectionalList for BinodeListV2<T> {
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

#[cfg(test)]
mod tests {
    use super::BinodeListV2;
    use crate::node::NodePosition;
    use crate::position::ReverseSequence;
    use crate::traits::{BidirectionalList, List};

    #[test]
    fn tail_tracks_both_erase_paths() {
        let mut list = BinodeListV2::new();
        let a = list.insert_last('a');
        let b = list.insert_last('b');
        let c = list.insert_at(list.after_last(), 'c');
        assert_eq!(list.last(), c);
        assert_eq!(list.erase_at(c), Some('c'));
        assert_eq!(list.last(), b);
        assert_eq!(list.erase_after(a), Some('b'));
        assert_eq!(list.last(), a);
        assert_eq!(list.previous(list.after_last()), a);
        assert_eq!(list.erase_at(a), Some('a'));
        assert_eq!(list.last(), NodePosition::BeforeFirst);
        assert!(list.is_empty());
    }
}
