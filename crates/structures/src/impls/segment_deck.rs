use crate::error::Result;
use crate::ring::Ring;
use crate::traits::Deck;

/// Double-ended container on a ring buffer.
pub struct SegmentDeck<T> {
    ring: Ring<T>,
}

impl<T> SegmentDeck<T> {
    pub const fn new() -> Self {
        Self { ring: Ring::new() }
    }
}

impl<T> Default for SegmentDeck<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deck for SegmentDeck<T> {
    type Value = T;

    fn new() -> Self {
        Self::new()
    }

    fn filled(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Self {
            ring: Ring::filled(value, count),
        }
    }

    fn len(&self) -> usize {
        self.ring.len()
    }

    fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    fn top(&self) -> Option<&T> {
        self.ring.front()
    }

    fn bottom(&self) -> Option<&T> {
        self.ring.back()
    }

    fn insert_top(&mut self, value: T) {
        self.ring.push_front(value);
    }

    fn insert_bottom(&mut self, value: T) {
        self.ring.push_back(value);
    }

    fn try_insert_top(&mut self, value: T) -> Result<()> {
        self.ring.try_reserve_one()?;
        self.ring.push_front(value);
        Ok(())
    }

    fn try_insert_bottom(&mut self, value: T) -> Result<()> {
        self.ring.try_reserve_one()?;
        self.ring.push_back(value);
        Ok(())
    }

    fn erase_top(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    fn erase_bottom(&mut self) -> Option<T> {
        self.ring.pop_back()
    }
}
