use crate::error::Result;
use crate::traits::Stack;

/// Stack on a growable buffer; the top is the last slot.
pub struct SegmentStack<T> {
    items: Vec<T>,
}

impl<T> SegmentStack<T> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for SegmentStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack for SegmentStack<T> {
    type Value = T;

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

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn top(&self) -> Option<&T> {
        self.items.last()
    }

    fn insert(&mut self, value: T) {
        self.items.push(value);
    }

    fn try_insert(&mut self, value: T) -> Result<()> {
        self.items.try_reserve(1)?;
        self.items.push(value);
        Ok(())
    }

    fn erase(&mut self) -> Option<T> {
        self.items.pop()
    }
}
