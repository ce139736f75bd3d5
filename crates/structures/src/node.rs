//! Node storage for the linked containers.
//!
//! Nodes live in an [`Arena`] owned by their container and link to each
//! other by [`NodeId`]. The arena owns every node exactly once, so dropping a
//! container drops its `Vec` of nodes without recursing along the chain, and
//! moving a container moves the whole chain in O(1). Back links in doubly
//! linked nodes are plain ids used for traversal only.

use std::mem;

use crate::error::{Error, Result, invalid_position};

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const NIL: Self = Self(u32::MAX);

    #[inline(always)]
    pub(crate) fn is_nil(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline(always)]
    fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Live nodes one arena can hold; the last id is reserved for `NIL`.
const MAX_NODES: usize = u32::MAX as usize;

#[inline(always)]
pub(crate) fn id(v: usize) -> NodeId {
    debug_assert!(v < u32::MAX as usize);
    NodeId(v as u32)
}

/// Position in a linked container.
///
/// The sentinels are distinct cases rather than reserved ids, so loading
/// one is a detectable error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodePosition {
    BeforeFirst,
    Node(NodeId),
    AfterLast,
}

impl NodePosition {
    /// `Node(link)`, or `AfterLast` for a nil link.
    #[inline(always)]
    pub(crate) fn from_link(link: NodeId) -> Self {
        if link.is_nil() {
            Self::AfterLast
        } else {
            Self::Node(link)
        }
    }

    /// `Node(link)`, or `BeforeFirst` for a nil back link.
    #[inline(always)]
    pub(crate) fn from_back_link(link: NodeId) -> Self {
        if link.is_nil() {
            Self::BeforeFirst
        } else {
            Self::Node(link)
        }
    }

    /// The node id, or nil for `BeforeFirst`; used as a predecessor link.
    #[inline(always)]
    pub(crate) fn as_link(self) -> NodeId {
        match self {
            Self::Node(id) => id,
            _ => NodeId::NIL,
        }
    }
}

pub(crate) struct UniNode<T> {
    pub(crate) value: T,
    pub(crate) next: NodeId,
}

pub(crate) struct BiNode<T> {
    pub(crate) value: T,
    pub(crate) next: NodeId,
    pub(crate) prev: NodeId,
}

impl<T> UniNode<T> {
    pub(crate) fn detached(value: T) -> Self {
        Self {
            value,
            next: NodeId::NIL,
        }
    }
}

impl<T> BiNode<T> {
    pub(crate) fn detached(value: T) -> Self {
        Self {
            value,
            next: NodeId::NIL,
            prev: NodeId::NIL,
        }
    }
}

/// What the chain helpers of [`Arena`] need from a node.
pub(crate) trait Link {
    type Value;

    fn value(&self) -> &Self::Value;
    fn value_mut(&mut self) -> &mut Self::Value;
    fn next(&self) -> NodeId;
    fn set_next(&mut self, next: NodeId);
}

impl<T> Link for UniNode<T> {
    type Value = T;

    #[inline(always)]
    fn value(&self) -> &T {
        &self.value
    }

    #[inline(always)]
    fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[inline(always)]
    fn next(&self) -> NodeId {
        self.next
    }

    #[inline(always)]
    fn set_next(&mut self, next: NodeId) {
        self.next = next;
    }
}

impl<T> Link for BiNode<T> {
    type Value = T;

    #[inline(always)]
    fn value(&self) -> &T {
        &self.value
    }

    #[inline(always)]
    fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[inline(always)]
    fn next(&self) -> NodeId {
        self.next
    }

    #[inline(always)]
    fn set_next(&mut self, next: NodeId) {
        self.next = next;
    }
}

enum Entry<N> {
    Occupied(N),
    Vacant(NodeId),
}

/// Slot allocator with a free list threaded through vacant entries.
pub(crate) struct Arena<N> {
    entries: Vec<Entry<N>>,
    free: NodeId,
}

impl<N> Arena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: NodeId::NIL,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity < u32::MAX as usize);
        Self {
            entries: Vec::with_capacity(capacity),
            free: NodeId::NIL,
        }
    }

    /// Id of the next slot pushed onto an arena holding `len` entries.
    fn fresh_slot(len: usize) -> Result<NodeId> {
        if len < MAX_NODES {
            Ok(NodeId(len as u32))
        } else {
            Err(Error::CapacityExceeded)
        }
    }

    pub(crate) fn alloc(&mut self, node: N) -> NodeId {
        if self.free.is_nil() {
            let slot = match Self::fresh_slot(self.entries.len()) {
                Ok(slot) => slot,
                Err(err) => panic!("{err}"),
            };
            self.entries.push(Entry::Occupied(node));
            return slot;
        }
        let slot = self.free;
        let entry = mem::replace(&mut self.entries[slot.idx()], Entry::Occupied(node));
        self.free = match entry {
            Entry::Vacant(next_free) => next_free,
            Entry::Occupied(_) => unreachable!("free list points at a live node"),
        };
        slot
    }

    /// Like [`alloc`](Self::alloc), but reports allocation failure instead of
    /// aborting. On failure nothing is allocated and `node` is dropped.
    pub(crate) fn try_alloc(&mut self, node: N) -> Result<NodeId> {
        if self.free.is_nil() {
            Self::fresh_slot(self.entries.len())?;
            self.entries.try_reserve(1)?;
        }
        Ok(self.alloc(node))
    }

    /// Remove a live node, returning it. Its slot goes on the free list.
    pub(crate) fn release(&mut self, slot: NodeId) -> N {
        let entry = mem::replace(&mut self.entries[slot.idx()], Entry::Vacant(self.free));
        match entry {
            Entry::Occupied(node) => {
                self.free = slot;
                node
            }
            Entry::Vacant(next_free) => {
                self.entries[slot.idx()] = Entry::Vacant(next_free);
                invalid_position(slot)
            }
        }
    }

    #[inline]
    pub(crate) fn get(&self, slot: NodeId) -> Option<&N> {
        match self.entries.get(slot.idx()) {
            Some(Entry::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, slot: NodeId) -> Option<&mut N> {
        match self.entries.get_mut(slot.idx()) {
            Some(Entry::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn contains(&self, slot: NodeId) -> bool {
        self.get(slot).is_some()
    }

    #[inline]
    pub(crate) fn node(&self, slot: NodeId) -> &N {
        debug_assert!(!slot.is_nil());
        match self.get(slot) {
            Some(node) => node,
            None => invalid_position(slot),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, slot: NodeId) -> &mut N {
        debug_assert!(!slot.is_nil());
        match self.entries.get_mut(slot.idx()) {
            Some(Entry::Occupied(node)) => node,
            _ => invalid_position(slot),
        }
    }
}

/// Walking and relinking a chain entered through a `head` link owned by the
/// container. `BeforeFirst` stands for the head link itself.
impl<N: Link> Arena<N> {
    #[inline]
    pub(crate) fn value_at(&self, at: NodePosition) -> Option<&N::Value> {
        match at {
            NodePosition::Node(node) => self.get(node).map(N::value),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn value_at_mut(&mut self, at: NodePosition) -> Option<&mut N::Value> {
        match at {
            NodePosition::Node(node) => self.get_mut(node).map(N::value_mut),
            _ => None,
        }
    }

    /// Link following `at`.
    #[inline]
    pub(crate) fn link_of(&self, head: NodeId, at: NodePosition) -> NodeId {
        match at {
            NodePosition::BeforeFirst => head,
            NodePosition::Node(node) => self.node(node).next(),
            NodePosition::AfterLast => NodeId::NIL,
        }
    }

    pub(crate) fn set_link(&mut self, head: &mut NodeId, at: NodePosition, next: NodeId) {
        match at {
            NodePosition::BeforeFirst => *head = next,
            NodePosition::Node(node) => self.node_mut(node).set_next(next),
            NodePosition::AfterLast => invalid_position(at),
        }
    }

    /// Whether something can be linked after `at`.
    pub(crate) fn is_anchor(&self, at: NodePosition) -> bool {
        match at {
            NodePosition::BeforeFirst => true,
            NodePosition::Node(node) => self.contains(node),
            NodePosition::AfterLast => false,
        }
    }

    #[inline]
    pub(crate) fn step(&self, head: NodeId, at: NodePosition) -> NodePosition {
        match at {
            NodePosition::AfterLast => invalid_position(at),
            _ => NodePosition::from_link(self.link_of(head, at)),
        }
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Arena<UniNode<T>> {
    /// `count` nodes linked `0 -> 1 -> .. -> count - 1`, in one allocation.
    pub(crate) fn chain(value: T, count: usize) -> Self {
        let mut arena = Self::with_capacity(count);
        for i in 0..count {
            let next = if i + 1 < count { id(i + 1) } else { NodeId::NIL };
            let slot = arena.alloc(UniNode {
                value: value.clone(),
                next,
            });
            debug_assert_eq!(slot, id(i));
        }
        arena
    }
}

impl<T: Clone> Arena<BiNode<T>> {
    /// `count` nodes linked both ways in index order; the ends are nil.
    pub(crate) fn chain(value: T, count: usize) -> Self {
        let mut arena = Self::with_capacity(count);
        for i in 0..count {
            let next = if i + 1 < count { id(i + 1) } else { NodeId::NIL };
            let prev = if i > 0 { id(i - 1) } else { NodeId::NIL };
            let slot = arena.alloc(BiNode {
                value: value.clone(),
                next,
                prev,
            });
            debug_assert_eq!(slot, id(i));
        }
        arena
    }

    /// `count` nodes linked into a ring in index order.
    pub(crate) fn ring(value: T, count: usize) -> Self {
        let mut arena = Self::with_capacity(count);
        for i in 0..count {
            let next = id((i + 1) % count);
            let prev = id((i + count - 1) % count);
            arena.alloc(BiNode {
                value: value.clone(),
                next,
                prev,
            });
        }
        arena
    }
}
