//! Structural concepts.
//!
//! - [`List`]: open sequence with `before_first`, `first` and `after_last`;
//!   erasure is always "erase after", because a singly linked storage cannot
//!   find a predecessor in O(1).
//! - [`BidirectionalList`]: adds insertion before and erasure at a position.
//! - [`Deck`], [`Stack`], [`Queue`]: end-only access, no positions.
//! - [`Hoop`]: circular sequence with a movable `start` reference.

use crate::algorithm::search;
use crate::error::Result;
use crate::position::{Lap, ReverseSequence, Sequence, Span};

pub trait List: Sequence {
    fn new() -> Self
    where
        Self: Sized;

    /// `count` copies of `value`, built in one pass without regrowth.
    fn filled(value: Self::Value, count: usize) -> Self
    where
        Self: Sized,
        Self::Value: Clone;

    fn before_first(&self) -> Self::Position;

    fn first(&self) -> Self::Position;

    fn after_last(&self) -> Self::Position;

    fn limit(&self) -> Self::Position {
        self.after_last()
    }

    /// Position of the last element, or `before_first` when empty.
    fn last(&self) -> Self::Position {
        let limit = self.after_last();
        let mut at = self.before_first();
        loop {
            let next = self.next(at);
            if next == limit {
                return at;
            }
            at = next;
        }
    }

    /// Insert `value` right after `at`, returning its position.
    ///
    /// `at` may be `before_first` but not `after_last`.
    fn insert_after(&mut self, at: Self::Position, value: Self::Value) -> Self::Position;

    /// Like [`insert_after`](Self::insert_after), but reports an invalid
    /// anchor or an allocation failure. On error the list is unchanged.
    fn try_insert_after(
        &mut self,
        at: Self::Position,
        value: Self::Value,
    ) -> Result<Self::Position>;

    /// Remove the element right after `at`; `None` when there is none.
    fn erase_after(&mut self, at: Self::Position) -> Option<Self::Value>;

    fn insert_first(&mut self, value: Self::Value) -> Self::Position {
        let anchor = self.before_first();
        self.insert_after(anchor, value)
    }

    fn remove_first(&mut self) -> Option<Self::Value> {
        let anchor = self.before_first();
        self.erase_after(anchor)
    }

    fn insert_last(&mut self, value: Self::Value) -> Self::Position {
        let anchor = self.last();
        self.insert_after(anchor, value)
    }

    /// Append every value, locating the last position only once.
    fn extend_last<I: IntoIterator<Item = Self::Value>>(&mut self, values: I)
    where
        Self: Sized,
    {
        let mut at = self.last();
        for value in values {
            at = self.insert_after(at, value);
        }
    }

    fn is_empty(&self) -> bool {
        self.first() == self.after_last()
    }

    fn not_empty(&self) -> bool {
        !self.is_empty()
    }

    fn len(&self) -> usize {
        self.distance(self.first(), self.after_last())
    }

    /// First position holding `value`, or `after_last`.
    fn find(&self, value: &Self::Value) -> Self::Position
    where
        Self::Value: PartialEq,
    {
        let found = search(
            self.cursor(self.first()),
            self.cursor(self.after_last()),
            value,
        );
        found.position()
    }

    fn values(&self) -> Span<'_, Self> {
        Span::new(self.cursor(self.first()), self.cursor(self.after_last()))
    }
}

pub trait BidirectionalList: List + ReverseSequence {
    /// Insert `value` before `at`; `after_last` appends.
    fn insert_at(&mut self, at: Self::Position, value: Self::Value) -> Self::Position;

    /// Remove the element at `at`; `None` for sentinels.
    fn erase_at(&mut self, at: Self::Position) -> Option<Self::Value>;
}

/// Double-ended container. `top` is the front, `bottom` the back.
pub trait Deck {
    type Value;

    fn new() -> Self;

    fn filled(value: Self::Value, count: usize) -> Self
    where
        Self::Value: Clone;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn not_empty(&self) -> bool {
        !self.is_empty()
    }

    fn top(&self) -> Option<&Self::Value>;

    fn bottom(&self) -> Option<&Self::Value>;

    fn insert_top(&mut self, value: Self::Value);

    fn insert_bottom(&mut self, value: Self::Value);

    fn try_insert_top(&mut self, value: Self::Value) -> Result<()>;

    fn try_insert_bottom(&mut self, value: Self::Value) -> Result<()>;

    fn erase_top(&mut self) -> Option<Self::Value>;

    fn erase_bottom(&mut self) -> Option<Self::Value>;
}

/// Last in, first out.
pub trait Stack {
    type Value;

    fn new() -> Self;

    fn filled(value: Self::Value, count: usize) -> Self
    where
        Self::Value: Clone;

    fn is_empty(&self) -> bool;

    fn not_empty(&self) -> bool {
        !self.is_empty()
    }

    fn top(&self) -> Option<&Self::Value>;

    fn insert(&mut self, value: Self::Value);

    fn try_insert(&mut self, value: Self::Value) -> Result<()>;

    fn erase(&mut self) -> Option<Self::Value>;
}

/// First in, first out.
pub trait Queue {
    type Value;

    fn new() -> Self;

    fn filled(value: Self::Value, count: usize) -> Self
    where
        Self::Value: Clone;

    fn is_empty(&self) -> bool;

    fn not_empty(&self) -> bool {
        !self.is_empty()
    }

    fn front(&self) -> Option<&Self::Value>;

    fn insert(&mut self, value: Self::Value);

    fn try_insert(&mut self, value: Self::Value) -> Result<()>;

    fn remove(&mut self) -> Option<Self::Value>;
}

/// Circular sequence.
///
/// `next` never reaches a terminal position: traversals must be bounded by
/// the caller, e.g. with [`Hoop::values`]. An empty hoop's `start` is a
/// placeholder that must not be loaded or advanced.
pub trait Hoop: Sequence {
    fn new() -> Self
    where
        Self: Sized;

    fn filled(value: Self::Value, count: usize) -> Self
    where
        Self: Sized,
        Self::Value: Clone;

    fn is_empty(&self) -> bool;

    fn not_empty(&self) -> bool {
        !self.is_empty()
    }

    fn start(&self) -> Self::Position;

    fn first(&self) -> Self::Position {
        self.start()
    }

    /// Insert `value` before the current start; it becomes the new start.
    fn insert_start(&mut self, value: Self::Value) -> Self::Position;

    fn try_insert_start(&mut self, value: Self::Value) -> Result<Self::Position>;

    /// Insert `value` right after `at`. The start does not move.
    ///
    /// On an empty hoop `at` must be `start()`, and the value forms a new
    /// ring of one.
    fn insert_after(&mut self, at: Self::Position, value: Self::Value) -> Self::Position;

    /// Remove the start element; its successor becomes the start.
    fn remove_first(&mut self) -> Option<Self::Value>;

    /// Remove the element after `at`. In a ring of one that is `at` itself.
    fn remove_after(&mut self, at: Self::Position) -> Option<Self::Value>;

    /// Advance the start reference by one element.
    fn rotate(&mut self);

    /// Number of elements, counted over one lap.
    fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let start = self.start();
        1 + self.distance(self.next(start), start)
    }

    /// One lap of values from the start.
    fn values(&self) -> Lap<'_, Self> {
        Lap::new(self.cursor(self.start()), self.len())
    }
}
