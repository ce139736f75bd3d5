use crate::error::Result;
use crate::ring::Ring;
use crate::traits::Queue;

/// Queue on a ring buffer, so `remove` never shifts the remaining values.
pub struct SegmentQueue<T> {
    ring: Ring<T>,
}

impl<T> SegmentQueue<T> {
    pub const fn new() -> Self {
        Self { ring: Ring::new() }
    }
}

impl<T> Default for SegmentQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue for SegmentQueue<T> {
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

    fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    fn front(&self) -> Option<&T> {
        self.ring.front()
    }

    fn insert(&mut self, value: T) {
        self.ring.push_back(value);
    }

    fn try_insert(&mut self, value: T) -> Result<()> {
        self.ring.try_reserve_one()?;
        self.ring.push_back(value);
        Ok(())
    }

    fn remove(&mut self) -> Option<T> {
        self.ring.pop_front()
    }
}
