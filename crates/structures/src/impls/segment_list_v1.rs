use crate::error::{Error, Result, invalid_position};
use crate::position::{IndexedSequence, ReverseSequence, Sequence, SequenceMut};
use crate::traits::{BidirectionalList, List};

/// List on one growable buffer.
///
/// Positions are signed indices: `-1` is before-first and `len` after-last.
/// Inserting or erasing at index `i` shifts every element after it, so
/// positions at or past `i` are invalidated.
pub struct SegmentListV1<T> {
    items: Vec<T>,
}

impl<T> SegmentListV1<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    fn end(&self) -> isize {
        self.items.len() as isize
    }

    #[inline]
    fn index(&self, at: isize) -> Option<usize> {
        if (0..self.end()).contains(&at) {
            Some(at as usize)
        } else {
            None
        }
    }

    fn is_anchor(&self, at: isize) -> bool {
        (-1..self.end()).contains(&at)
    }
}

impl<T> Default for SegmentListV1<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for SegmentListV1<T> {
    type Position = isize;
    type Value = T;

    #[inline]
    fn get(&self, at: isize) -> Option<&T> {
        self.index(at).map(|i| &self.items[i])
    }

    #[inline]
    fn next(&self, at: isize) -> isize {
        if !self.is_anchor(at) {
            invalid_position(at);
        }
        at + 1
    }

    fn distance(&self, from: isize, to: isize) -> usize {
        usize::try_from(to - from).unwrap_or_else(|_| invalid_position(to))
    }
}

impl<T> ReverseSequence for SegmentListV1<T> {
    #[inline]
    fn previous(&self, at: isize) -> isize {
        if !(0..=self.end()).contains(&at) {
            invalid_position(at);
        }
        at - 1
    }
}

impl<T> IndexedSequence for SegmentListV1<T> {
    fn advance(&self, at: isize, by: isize) -> isize {
        match at.checked_add(by) {
            Some(to) if (-1..=self.end()).contains(&to) => to,
            _ => invalid_position(at),
        }
    }
}

impl<T> SequenceMut for SegmentListV1<T> {
    fn get_mut(&mut self, at: isize) -> Option<&mut T> {
        let i = self.index(at)?;
        Some(&mut self.items[i])
    }
}

impl<T> List for SegmentListV1<T> {
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

    fn before_first(&self) -> isize {
        -1
    }

    fn first(&self) -> isize {
        0
    }

    fn after_last(&self) -> isize {
        self.end()
    }

    fn last(&self) -> isize {
        self.end() - 1
    }

    fn insert_after(&mut self, at: isize, value: T) -> isize {
        if !self.is_anchor(at) {
            invalid_position(at);
        }
        self.items.insert((at + 1) as usize, value);
        at + 1
    }

    fn try_insert_after(&mut self, at: isize, value: T) -> Result<isize> {
        if !self.is_anchor(at) {
            return Err(Error::InvalidPosition);
        }
        self.items.try_reserve(1)?;
        self.items.insert((at + 1) as usize, value);
        Ok(at + 1)
    }

    fn erase_after(&mut self, at: isize) -> Option<T> {
        if !self.is_anchor(at) {
            return None;
        }
        let i = self.index(at + 1)?;
        Some(self.items.remove(i))
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> BidirectionalList for SegmentListV1<T> {
    fn insert_at(&mut self, at: isize, value: T) -> isize {
        if !(0..=self.end()).contains(&at) {
            invalid_position(at);
        }
        self.items.insert(at as usize, value);
        at
    }

    fn erase_at(&mut self, at: isize) -> Option<T> {
        let i = self.index(at)?;
        Some(self.items.remove(i))
    }
}
