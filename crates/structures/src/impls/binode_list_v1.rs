use crate::error::{Error, Result, invalid_position};
use crate::node::{Arena, BiNode, NodeId, NodePosition, id};
use crate::position::{ReverseSequence, Sequence, SequenceMut};
use crate::traits::{BidirectionalList, List};

/// Doubly linked list keeping only a head link.
///
/// Erasing at a position is O(1) without its predecessor; reaching the last
/// node walks the chain.
pub struct BinodeListV1<T> {
    nodes: Arena<BiNode<T>>,
    head: NodeId,
}

impl<T> BinodeListV1<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: NodeId::NIL,
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
        if !next.is_nil() {
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
        if !removed.next.is_nil() {
            self.nodes.node_mut(removed.next).prev = removed.prev;
        }
        removed.value
    }
}

impl<T> Default for BinodeListV1<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for BinodeListV1<T> {
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

impl<T> ReverseSequence for BinodeListV1<T> {
    fn previous(&self, at: NodePosition) -> NodePosition {
        match at {
            NodePosition::BeforeFirst => invalid_position(at),
            NodePosition::Node(node) => NodePosition::from_back_link(self.nodes.node(node).prev),
            NodePosition::AfterLast => self.last(),
        }
    }
}

impl<T> SequenceMut for BinodeListV1<T> {
    fn get_mut(&mut self, at: NodePosition) -> Option<&mut T> {
        self.nodes.value_at_mut(at)
    }
}

impl<T> List for BinodeListV1<T> {
    fn new() -> Self {
        Self::new()
    }

    fn filled(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Self {
            nodes: Arena::<BiNode<T>>::chain(value, count),
            head: if count == 0 { NodeId::NIL } else { id(0) },
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

impl<T> BidirectionalList for BinodeListV1<T> {
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
    use super::BinodeListV1;
    use crate::node::NodePosition;
    use crate::position::{ReverseSequence, Sequence};
    use crate::traits::{BidirectionalList, List};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Thing {
        One,
        FortyNine,
    }

    #[test]
    fn default_insert_at() {
        let mut list = BinodeListV1::new();
        list.insert_at(list.first(), Thing::FortyNine);
        assert_eq!(*list.load(list.first()), Thing::FortyNine);
    }

    #[test]
    fn filled_erase_at() {
        let mut list = BinodeListV1::filled(Thing::One, 1);
        assert_eq!(list.erase_at(list.first()), Some(Thing::One));
        assert_eq!(list.first(), list.limit());
    }

    #[test]
    fn filled_insert_at() {
        let mut list = BinodeListV1::filled(Thing::One, 1);
        list.insert_at(list.first(), Thing::FortyNine);
        assert_eq!(*list.load(list.first()), Thing::FortyNine);
        assert_eq!(*list.load(list.last()), Thing::One);
    }

    #[test]
    fn previous_walks_back_to_before_first() {
        let list = BinodeListV1::filled(0_u8, 3);
        let mut at = list.after_last();
        let mut steps = 0;
        while at != NodePosition::BeforeFirst {
            at = list.previous(at);
            steps += 1;
        }
        assert_eq!(steps, 4);
    }

    #[test]
    fn erase_in_middle_relinks_both_ways() {
        let mut list = BinodeListV1::new();
        let a = list.insert_first(1);
        let b = list.insert_after(a, 2);
        let c = list.insert_after(b, 3);
        assert_eq!(list.erase_at(b), Some(2));
        assert_eq!(list.next(a), c);
        assert_eq!(list.previous(c), a);
        assert_eq!(list.erase_at(b), None);
    }
}
