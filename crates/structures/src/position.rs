//! Position capabilities.
//!
//! Storages expose borrow-free positions through [`Sequence`]; the generic
//! algorithms consume [`ForwardPosition`]s. A [`Cursor`] joins the two: it
//! pairs a storage reference with one of its positions, so an algorithm can
//! `load` and `next` without knowing the layout behind it.

use std::fmt;
use std::mem;
use std::ptr;

use crate::error::{Error, Result, invalid_position};

/// Forward traversal over a storage.
///
/// Positions are plain handles. They stay valid across mutations of other
/// slots for linked storages and are invalidated by index shifts for segment
/// storages.
pub trait Sequence {
    type Position: Copy + Eq + fmt::Debug;
    type Value;

    /// Value at `at`, or `None` for sentinels and dead slots.
    fn get(&self, at: Self::Position) -> Option<&Self::Value>;

    /// Position following `at`.
    ///
    /// Advancing past the last position of an open sequence panics.
    fn next(&self, at: Self::Position) -> Self::Position;

    fn load(&self, at: Self::Position) -> &Self::Value {
        match self.get(at) {
            Some(value) => value,
            None => invalid_position(at),
        }
    }

    fn try_load(&self, at: Self::Position) -> Result<&Self::Value> {
        self.get(at).ok_or(Error::InvalidPosition)
    }

    /// Number of `next` steps from `from` to `to`.
    ///
    /// `to` must be reachable from `from`.
    fn distance(&self, from: Self::Position, to: Self::Position) -> usize {
        walk(self, from, to)
    }

    fn cursor(&self, at: Self::Position) -> Cursor<'_, Self> {
        Cursor::new(self, at)
    }
}

pub trait ReverseSequence: Sequence {
    fn previous(&self, at: Self::Position) -> Self::Position;
}

pub trait IndexedSequence: ReverseSequence {
    /// Position `by` steps away from `at`, in O(1).
    fn advance(&self, at: Self::Position, by: isize) -> Self::Position;
}

pub trait SequenceMut: Sequence {
    fn get_mut(&mut self, at: Self::Position) -> Option<&mut Self::Value>;

    /// Replace the value at `at`, returning the previous one.
    fn store(&mut self, at: Self::Position, value: Self::Value) -> Self::Value {
        match self.get_mut(at) {
            Some(slot) => mem::replace(slot, value),
            None => invalid_position(at),
        }
    }
}

/// Step-by-step distance, the fallback for storages without a shortcut.
pub(crate) fn walk<S: Sequence + ?Sized>(store: &S, mut from: S::Position, to: S::Position) -> usize {
    let mut steps = 0;
    while from != to {
        from = store.next(from);
        steps += 1;
    }
    steps
}

pub trait ForwardPosition: Copy + Eq {
    type Value;

    fn load(&self) -> &Self::Value;

    #[must_use]
    fn next(self) -> Self;

    fn distance_to(self, limit: Self) -> usize {
        let mut at = self;
        let mut steps = 0;
        while at != limit {
            at = at.next();
            steps += 1;
        }
        steps
    }
}

pub trait BidirectionalPosition: ForwardPosition {
    #[must_use]
    fn previous(self) -> Self;
}

pub trait RandomAccessPosition: BidirectionalPosition {
    #[must_use]
    fn advance_by(self, by: isize) -> Self;
}

/// A storage position bound to the storage it came from.
pub struct Cursor<'a, S: Sequence + ?Sized> {
    store: &'a S,
    at: S::Position,
}

impl<'a, S: Sequence + ?Sized> Cursor<'a, S> {
    pub fn new(store: &'a S, at: S::Position) -> Self {
        Self { store, at }
    }

    pub fn position(self) -> S::Position {
        self.at
    }

    pub fn store(self) -> &'a S {
        self.store
    }

    pub fn get(self) -> Option<&'a S::Value> {
        self.store.get(self.at)
    }

    /// Like [`ForwardPosition::load`], but the reference lives as long as the
    /// storage borrow rather than the cursor.
    pub fn value(self) -> &'a S::Value {
        self.store.load(self.at)
    }
}

impl<S: Sequence + ?Sized> Clone for Cursor<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Sequence + ?Sized> Copy for Cursor<'_, S> {}

impl<S: Sequence + ?Sized> PartialEq for Cursor<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.store, other.store) && self.at == other.at
    }
}

impl<S: Sequence + ?Sized> Eq for Cursor<'_, S> {}

impl<S: Sequence + ?Sized> fmt::Debug for Cursor<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.at).finish()
    }
}

impl<S: Sequence + ?Sized> ForwardPosition for Cursor<'_, S> {
    type Value = S::Value;

    #[inline]
    fn load(&self) -> &S::Value {
        self.store.load(self.at)
    }

    #[inline]
    fn next(self) -> Self {
        Self {
            store: self.store,
            at: self.store.next(self.at),
        }
    }

    fn distance_to(self, limit: Self) -> usize {
        debug_assert!(ptr::eq(self.store, limit.store));
        self.store.distance(self.at, limit.at)
    }
}

impl<S: ReverseSequence + ?Sized> BidirectionalPosition for Cursor<'_, S> {
    #[inline]
    fn previous(self) -> Self {
        Self {
            store: self.store,
            at: self.store.previous(self.at),
        }
    }
}

impl<S: IndexedSequence + ?Sized> RandomAccessPosition for Cursor<'_, S> {
    #[inline]
    fn advance_by(self, by: isize) -> Self {
        Self {
            store: self.store,
            at: self.store.advance(self.at, by),
        }
    }
}

/// Values in `[from, limit)`.
pub struct Span<'a, S: Sequence + ?Sized> {
    at: Cursor<'a, S>,
    limit: S::Position,
}

impl<'a, S: Sequence + ?Sized> Span<'a, S> {
    pub fn new(from: Cursor<'a, S>, limit: Cursor<'a, S>) -> Self {
        debug_assert!(ptr::eq(from.store, limit.store));
        Self {
            at: from,
            limit: limit.at,
        }
    }
}

impl<'a, S: Sequence + ?Sized> Iterator for Span<'a, S> {
    type Item = &'a S::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at.at == self.limit {
            return None;
        }
        let value = self.at.value();
        self.at = ForwardPosition::next(self.at);
        Some(value)
    }
}

/// A bounded number of values starting at a cursor.
///
/// Circular storages have no terminal position, so their traversals are
/// bounded by a step count instead of a limit.
pub struct Lap<'a, S: Sequence + ?Sized> {
    at: Cursor<'a, S>,
    remaining: usize,
}

impl<'a, S: Sequence + ?Sized> Lap<'a, S> {
    pub fn new(from: Cursor<'a, S>, steps: usize) -> Self {
        Self {
            at: from,
            remaining: steps,
        }
    }
}

impl<'a, S: Sequence + ?Sized> Iterator for Lap<'a, S> {
    type Item = &'a S::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.at.value();
        self.remaining -= 1;
        if self.remaining != 0 {
            self.at = ForwardPosition::next(self.at);
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Lap<'_, S> {}

impl<T> Sequence for [T] {
    type Position = usize;
    type Value = T;

    #[inline]
    fn get(&self, at: usize) -> Option<&T> {
        <[T]>::get(self, at)
    }

    #[inline]
    fn next(&self, at: usize) -> usize {
        if at >= self.len() {
            invalid_position(at);
        }
        at + 1
    }

    fn distance(&self, from: usize, to: usize) -> usize {
        to.checked_sub(from).unwrap_or_else(|| invalid_position(to))
    }
}

impl<T> ReverseSequence for [T] {
    #[inline]
    fn previous(&self, at: usize) -> usize {
        at.checked_sub(1).unwrap_or_else(|| invalid_position(at))
    }
}

impl<T> IndexedSequence for [T] {
    fn advance(&self, at: usize, by: isize) -> usize {
        match at.checked_add_signed(by) {
            Some(to) if to <= self.len() => to,
            _ => invalid_position(at),
        }
    }
}

impl<T> SequenceMut for [T] {
    #[inline]
    fn get_mut(&mut self, at: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, at)
    }
}
