use crate::error::{Error, Result, invalid_position};
use crate::node::{Arena, NodeId, NodePosition, UniNode, id};
use crate::position::{Sequence, SequenceMut};
use crate::traits::List;

/// Singly linked list keeping only a head link.
///
/// Front insertion and `insert_after` are O(1); `last` and `len` walk the
/// chain.
pub struct UninodeListV1<T> {
    nodes: Arena<UniNode<T>>,
    head: NodeId,
}

impl<T> UninodeListV1<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: NodeId::NIL,
        }
    }

    fn link_after(&mut self, at: NodePosition, id: NodeId) -> NodePosition {
        let next = self.nodes.link_of(self.head, at);
        self.nodes.node_mut(id).next = next;
        self.nodes.set_link(&mut self.head, at, id);
        NodePosition::Node(id)
    }
}

impl<T> Default for UninodeListV1<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for UninodeListV1<T> {
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

impl<T> SequenceMut for UninodeListV1<T> {
    fn get_mut(&mut self, at: NodePosition) -> Option<&mut T> {
        self.nodes.value_at_mut(at)
    }
}

impl<T> List for UninodeListV1<T> {
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
        let id = self.nodes.alloc(UniNode::detached(value));
        self.link_after(at, id)
    }

    fn try_insert_after(&mut self, at: NodePosition, value: T) -> Result<NodePosition> {
        if !self.nodes.is_anchor(at) {
            return Err(Error::InvalidPosition);
        }
        let id = self.nodes.try_alloc(UniNode::detached(value))?;
        Ok(self.link_after(at, id))
    }

    fn erase_after(&mut self, at: NodePosition) -> Option<T> {
        if !self.nodes.is_anchor(at) {
            return None;
        }
        let victim = self.nodes.link_of(self.head, at);
        if victim.is_nil() {
            return None;
        }
        let node = self.nodes.release(victim);
        self.nodes.set_link(&mut self.head, at, node.next);
        Some(node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::UninodeListV1;
    use crate::position::Sequence;
    use crate::traits::List;

    #[test]
    fn insert_after_keeps_untouched_positions_valid() {
        let mut list = UninodeListV1::new();
        let a = list.insert_first(1);
        let c = list.insert_after(a, 3);
        let b = list.insert_after(a, 2);
        assert_eq!(list.values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(list.erase_after(a), Some(2));
        assert_eq!(*list.load(a), 1);
        assert_eq!(*list.load(c), 3);
        assert!(list.get(b).is_none());
        assert_eq!(list.last(), c);
    }

    #[test]
    fn erase_after_last_is_none() {
        let mut list = UninodeListV1::filled('x', 2);
        let last = list.last();
        assert_eq!(list.erase_after(last), None);
        assert_eq!(list.erase_after(list.after_last()), None);
        assert_eq!(list.len(), 2);
    }
}
