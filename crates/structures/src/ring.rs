//! Growable ring buffer backing the double-ended segment containers.
//!
//! Slots are `Option<T>` so relocation and removal need no unsafe code.
//! Capacity doubles when full (minimum [`MIN_CAPACITY`]), so pushes at either
//! end are amortized O(1); positional insert and remove shift whichever side
//! of `i` is shorter, O(min(i, len - i)).

use crate::error::Result;

const MIN_CAPACITY: usize = 4;

pub(crate) struct Ring<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> Ring<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    pub(crate) fn filled(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Self {
            slots: vec![Some(value); count],
            head: 0,
            len: count,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn physical(&self, logical: usize) -> usize {
        debug_assert!(logical < self.slots.len());
        let at = self.head + logical;
        if at >= self.slots.len() {
            at - self.slots.len()
        } else {
            at
        }
    }

    #[inline]
    pub(crate) fn get(&self, logical: usize) -> Option<&T> {
        if logical >= self.len {
            return None;
        }
        self.slots[self.physical(logical)].as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, logical: usize) -> Option<&mut T> {
        if logical >= self.len {
            return None;
        }
        let at = self.physical(logical);
        self.slots[at].as_mut()
    }

    pub(crate) fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub(crate) fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    fn grown_capacity(&self) -> usize {
        (self.slots.len() * 2).max(MIN_CAPACITY)
    }

    /// Move the live elements into `slots`, in logical order from index 0.
    fn relocate(&mut self, mut slots: Vec<Option<T>>) {
        let capacity = slots.capacity();
        for logical in 0..self.len {
            let at = self.physical(logical);
            slots.push(self.slots[at].take());
        }
        slots.resize_with(capacity, || None);
        self.slots = slots;
        self.head = 0;
    }

    fn reserve_one(&mut self) {
        if self.len == self.slots.len() {
            let slots = Vec::with_capacity(self.grown_capacity());
            self.relocate(slots);
        }
    }

    /// Make room for one more element, or leave the ring untouched.
    pub(crate) fn try_reserve_one(&mut self) -> Result<()> {
        if self.len == self.slots.len() {
            let mut slots = Vec::new();
            slots.try_reserve_exact(self.grown_capacity())?;
            self.relocate(slots);
        }
        Ok(())
    }

    pub(crate) fn push_back(&mut self, value: T) {
        self.reserve_one();
        let at = self.physical(self.len);
        self.slots[at] = Some(value);
        self.len += 1;
    }

    pub(crate) fn push_front(&mut self, value: T) {
        self.reserve_one();
        self.head = if self.head == 0 {
            self.slots.len() - 1
        } else {
            self.head - 1
        };
        self.slots[self.head] = Some(value);
        self.len += 1;
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = self.physical(1 % self.slots.len());
        self.len -= 1;
        value
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let at = self.physical(self.len - 1);
        self.len -= 1;
        self.slots[at].take()
    }

    /// Insert so that `value` ends up at `logical`, shifting the shorter side.
    pub(crate) fn insert(&mut self, logical: usize, value: T) {
        debug_assert!(logical <= self.len);
        if logical == 0 {
            self.push_front(value);
            return;
        }
        if logical < self.len / 2 {
            self.reserve_one();
            self.head = if self.head == 0 {
                self.slots.len() - 1
            } else {
                self.head - 1
            };
            self.len += 1;
            for at in 0..logical {
                let (a, b) = (self.physical(at), self.physical(at + 1));
                self.slots.swap(a, b);
            }
            let at = self.physical(logical);
            self.slots[at] = Some(value);
            return;
        }
        self.push_back(value);
        for at in (logical + 1..self.len).rev() {
            let (a, b) = (self.physical(at), self.physical(at - 1));
            self.slots.swap(a, b);
        }
    }

    /// Remove the element at `logical`, shifting the shorter side.
    pub(crate) fn remove(&mut self, logical: usize) -> Option<T> {
        if logical >= self.len {
            return None;
        }
        if logical < self.len / 2 {
            for at in (1..=logical).rev() {
                let (a, b) = (self.physical(at), self.physical(at - 1));
                self.slots.swap(a, b);
            }
            return self.pop_front();
        }
        for at in logical..self.len - 1 {
            let (a, b) = (self.physical(at), self.physical(at + 1));
            self.slots.swap(a, b);
        }
        self.pop_back()
    }

    /// Move the front element to the back.
    pub(crate) fn rotate_forward(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.len == self.slots.len() {
            self.head = self.physical(1 % self.slots.len());
        } else if let Some(value) = self.pop_front() {
            self.push_back(value);
        }
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}
