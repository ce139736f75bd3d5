use crate::error::{Error, Result, invalid_position};
use crate::node::{Arena, NodeId, NodePosition, UniNode, id};
use crate::position::{Sequence, SequenceMut, walk};
use crate::traits::List;

/// Singly linked list caching its last node and its length.
///
/// `len` and `distance(first, after_last)` are O(1). The count is adjusted
/// on every insert and erase path.
pub struct UninodeListV3<T> {
    nodes: Arena<UniNode<T>>,
    head: NodeId,
    tail: NodeId,
    len: usize,
}

impl<T> UninodeListV3<T> {
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
        self.nodes.node_mut(node).next = next;
        self.nodes.set_link(&mut self.head, at, node);
        if next.is_nil() {
            self.tail = node;
        }
        self.len += 1;
        NodePosition::Node(node)
    }
}

impl<T> Default for UninodeListV3<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for UninodeListV3<T> {
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

impl<T> SequenceMut for UninodeListV3<T> {
    fn get_mut(&mut self, at: NodePosition) -> Option<&mut T> {
        self.nodes.value_at_mut(at)
    }
}

impl<T> List for UninodeListV3<T> {
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
        self.len -= 1;
        Some(removed.value)
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::UninodeListV3;
    use crate::position::{Sequence, walk};
    use crate::traits::List;

    #[test]
    fn cached_length_matches_walk() {
        let mut list = UninodeListV3::filled(1_u32, 10);
        let second = list.next(list.first());
        list.insert_after(second, 7);
        list.erase_after(list.before_first());
        list.erase_after(second);
        let third = list.insert_after(second, 8);
        list.erase_after(third);
        assert_eq!(list.len(), walk(&list, list.first(), list.after_last()));
        assert_eq!(list.len(), 9);
        assert_eq!(
            list.distance(list.before_first(), list.after_last()),
            list.len() + 1
        );
        assert_eq!(list.distance(second, list.after_last()), 9);
    }

    #[test]
    fn empty_after_draining() {
        let mut list = UninodeListV3::filled('a', 3);
        while list.remove_first().is_some() {}
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), list.after_last());
    }
}
