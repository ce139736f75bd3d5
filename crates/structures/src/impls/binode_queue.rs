use crate::error::Result;
use crate::impls::binode_deck::BinodeDeck;
use crate::traits::{Deck, Queue};

/// Queue over a [`BinodeDeck`]: values enter at the bottom and leave from
/// the top.
pub struct BinodeQueue<T> {
    deck: BinodeDeck<T>,
}

impl<T> BinodeQueue<T> {
    pub const fn new() -> Self {
        Self {
            deck: BinodeDeck::new(),
        }
    }
}

impl<T> Default for BinodeQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue for BinodeQueue<T> {
    type Value = T;

    fn new() -> Self {
        Self::new()
    }

    fn filled(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Self {
            deck: BinodeDeck::filled(value, count),
        }
    }

    fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    fn front(&self) -> Option<&T> {
        self.deck.top()
    }

    fn insert(&mut self, value: T) {
        self.deck.insert_bottom(value);
    }

    fn try_insert(&mut self, value: T) -> Result<()> {
        self.deck.try_insert_bottom(value)
    }

    fn remove(&mut self) -> Option<T> {
        self.deck.erase_top()
    }
}
