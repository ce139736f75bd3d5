use crate::error::{Error, Result, invalid_position};
use crate::position::{Cursor, IndexedSequence, ReverseSequence, Sequence, SequenceMut};
use crate::traits::{BidirectionalList, List};

const MIN_CAPACITY: usize = 4;

/// Biased index into a [`SegmentListV2`].
///
/// `0` is before-first, `k + 1` is element `k` and `len + 1` is after-last,
/// so both sentinels fit in an unsigned index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentPosition(usize);

impl SegmentPosition {
    pub const BEFORE_FIRST: Self = Self(0);

    pub const fn at(index: usize) -> Self {
        Self(index + 1)
    }

    /// Element index, or `None` for before-first.
    pub const fn index(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

/// List on one buffer that grows by doubling.
///
/// Besides the position API, [`bounds`](Self::bounds) hands out cursors over
/// the buffer itself, whose `next` and `load` skip the container entirely.
pub struct SegmentListV2<T> {
    items: Vec<T>,
}

impl<T> SegmentListV2<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Cursors to the first element and past the last one.
    pub fn bounds(&self) -> (Cursor<'_, [T]>, Cursor<'_, [T]>) {
        let slice = self.items.as_slice();
        (slice.cursor(0), slice.cursor(slice.len()))
    }

    /// The list position matching a cursor from [`bounds`](Self::bounds).
    pub fn position_of(&self, at: Cursor<'_, [T]>) -> SegmentPosition {
        debug_assert!(at.position() <= self.items.len());
        SegmentPosition::at(at.position())
    }

    fn grow(&mut self) {
        if self.items.len() == self.items.capacity() {
            let extra = self.items.capacity().max(MIN_CAPACITY);
            self.items.reserve_exact(extra);
        }
    }

    fn try_grow(&mut self) -> Result<()> {
        if self.items.len() == self.items.capacity() {
            let extra = self.items.capacity().max(MIN_CAPACITY);
            self.items.try_reserve_exact(extra)?;
        }
        Ok(())
    }

    #[inline]
    fn end(&self) -> usize {
        self.items.len() + 1
    }

    #[inline]
    fn slot(&self, at: SegmentPosition) -> Option<usize> {
        at.index().filter(|&i| i < self.items.len())
    }

    fn is_anchor(&self, at: SegmentPosition) -> bool {
        at.0 < self.end()
    }
}

impl<T> Default for SegmentListV2<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for SegmentListV2<T> {
    type Position = SegmentPosition;
    type Value = T;

    #[inline]
    fn get(&self, at: SegmentPosition) -> Option<&T> {
        self.slot(at).map(|i| &self.items[i])
    }

    #[inline]
    fn next(&self, at: SegmentPosition) -> SegmentPosition {
        if !self.is_anchor(at) {
            invalid_position(at);
        }
        SegmentPosition(at.0 + 1)
    }

    fn distance(&self, from: SegmentPosition, to: SegmentPosition) -> usize {
        to.0.checked_sub(from.0).unwrap_or_else(|| invalid_position(to))
    }
}

impl<T> ReverseSequence for SegmentListV2<T> {
    #[inline]
    fn previous(&self, at: SegmentPosition) -> SegmentPosition {
        if at.0 == 0 || at.0 > self.end() {
            invalid_position(at);
        }
        SegmentPosition(at.0 - 1)
    }
}

impl<T> IndexedSequence for SegmentListV2<T> {
    fn advance(&self, at: SegmentPosition, by: isize) -> SegmentPosition {
        match at.0.checked_add_signed(by) {
            Some(to) if to <= self.end() => SegmentPosition(to),
            _ => invalid_position(at),
        }
    }
}

impl<T> SequenceMut for SegmentListV2<T> {
    fn get_mut(&mut self, at: SegmentPosition) -> Option<&mut T> {
        let i = self.slot(at)?;
        Some(&mut self.items[i])
    }
}

impl<T> List for SegmentListV2<T> {
    fn new() -> Self {
        Self::new()
    }

    fn filled(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Self {
            items: vec![value; count],
        }
    }

    fn before_first(&self) -> SegmentPosition {
        SegmentPosition::BEFORE_FIRST
    }

    fn first(&self) -> SegmentPosition {
        SegmentPosition(1)
    }

    fn after_last(&self) -> SegmentPosition {
        SegmentPosition(self.end())
    }

    fn last(&self) -> SegmentPosition {
        SegmentPosition(self.items.len())
    }

    fn insert_after(&mut self, at: SegmentPosition, value: T) -> SegmentPosition {
        if !self.is_anchor(at) {
            invalid_position(at);
        }
        self.grow();
        self.items.insert(at.0, value);
        SegmentPosition(at.0 + 1)
    }

    fn try_insert_after(&mut self, at: SegmentPosition, value: T) -> Result<SegmentPosition> {
        if !self.is_anchor(at) {
            return Err(Error::InvalidPosition);
        }
        self.try_grow()?;
        self.items.insert(at.0, value);
        Ok(SegmentPosition(at.0 + 1))
    }

    fn erase_after(&mut self, at: SegmentPosition) -> Option<T> {
        if at.0 >= self.items.len() {
            return None;
        }
        Some(self.items.remove(at.0))
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> BidirectionalList for SegmentListV2<T> {
    fn insert_at(&mut self, at: SegmentPosition, value: T) -> SegmentPosition {
        if at.0 == 0 || at.0 > self.end() {
            invalid_position(at);
        }
        self.grow();
        self.items.insert(at.0 - 1, value);
        at
    }

    fn erase_at(&mut self, at: SegmentPosition) -> Option<T> {
        let i = self.slot(at)?;
        Some(self.items.remove(i))
    }
}
