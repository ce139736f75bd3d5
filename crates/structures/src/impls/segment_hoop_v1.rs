use crate::error::{Result, invalid_position};
use crate::position::{IndexedSequence, ReverseSequence, Sequence, SequenceMut};
use crate::ring::Ring;
use crate::traits::Hoop;

/// Circular sequence on a ring buffer.
///
/// Positions are offsets from the current start, so `start()` is always `0`
/// and inserting at the start or rotating renumbers every position.
pub struct SegmentHoopV1<T> {
    ring: Ring<T>,
}

impl<T> SegmentHoopV1<T> {
    pub const fn new() -> Self {
        Self { ring: Ring::new() }
    }

    #[inline]
    fn live(&self, at: usize) -> usize {
        if at >= self.ring.len() {
            invalid_position(at);
        }
        at
    }
}

impl<T> Default for SegmentHoopV1<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for SegmentHoopV1<T> {
    type Position = usize;
    type Value = T;

    #[inline]
    fn get(&self, at: usize) -> Option<&T> {
        self.ring.get(at)
    }

    #[inline]
    fn next(&self, at: usize) -> usize {
        let at = self.live(at) + 1;
        if at == self.ring.len() { 0 } else { at }
    }

    fn distance(&self, from: usize, to: usize) -> usize {
        let len = self.ring.len();
        (self.live(to) + len - self.live(from)) % len
    }
}

impl<T> ReverseSequence for SegmentHoopV1<T> {
    #[inline]
    fn previous(&self, at: usize) -> usize {
        match self.live(at) {
            0 => self.ring.len() - 1,
            at => at - 1,
        }
    }
}

impl<T> IndexedSequence for SegmentHoopV1<T> {
    fn advance(&self, at: usize, by: isize) -> usize {
        let len = self.ring.len() as isize;
        (self.live(at) as isize + by).rem_euclid(len) as usize
    }
}

impl<T> SequenceMut for SegmentHoopV1<T> {
    fn get_mut(&mut self, at: usize) -> Option<&mut T> {
        self.ring.get_mut(at)
    }
}

impl<T> Hoop for SegmentHoopV1<T> {
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

    fn start(&self) -> usize {
        0
    }

    fn insert_start(&mut self, value: T) -> usize {
        self.ring.push_front(value);
        0
    }

    fn try_insert_start(&mut self, value: T) -> Result<usize> {
        self.ring.try_reserve_one()?;
        self.ring.push_front(value);
        Ok(0)
    }

    fn insert_after(&mut self, at: usize, value: T) -> usize {
        if self.ring.is_empty() {
            if at != 0 {
                invalid_position(at);
            }
            self.ring.push_back(value);
            return 0;
        }
        let at = self.live(at) + 1;
        self.ring.insert(at, value);
        at
    }

    fn remove_first(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    fn remove_after(&mut self, at: usize) -> Option<T> {
        if at >= self.ring.len() {
            return None;
        }
        let victim = self.next(at);
        self.ring.remove(victim)
    }

    fn rotate(&mut self) {
        self.ring.rotate_forward();
    }

    fn len(&self) -> usize {
        self.ring.len()
    }
}

#[cfg(test)]
mod tests {
    use super::SegmentHoopV1;
    use crate::position::{IndexedSequence, ReverseSequence, Sequence};
    use crate::traits::Hoop;

    #[test]
    fn offsets_wrap_around() {
        let mut hoop = SegmentHoopV1::new();
        for value in [1, 2, 3] {
            let last = if hoop.is_empty() { 0 } else { hoop.len() - 1 };
            hoop.insert_after(last, value);
        }
        assert_eq!(hoop.next(2), 0);
        assert_eq!(hoop.previous(0), 2);
        assert_eq!(hoop.advance(1, -5), 2);
        assert_eq!(hoop.distance(2, 1), 2);
        assert_eq!(hoop.values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn removing_after_the_last_moves_the_start() {
        let mut hoop = SegmentHoopV1::filled('a', 2);
        hoop.insert_start('s');
        assert_eq!(hoop.remove_after(2), Some('s'));
        assert_eq!(hoop.len(), 2);
        hoop.rotate();
        hoop.insert_after(0, 'b');
        assert_eq!(hoop.values().copied().collect::<Vec<_>>(), vec!['a', 'b', 'a']);
    }

    #[test]
    fn edits_after_the_start_on_a_long_hoop() {
        let mut hoop = SegmentHoopV1::filled(0_u32, 1_000);
        for value in 1..=50 {
            assert_eq!(hoop.insert_after(hoop.start(), value), 1);
        }
        let head: Vec<u32> = hoop.values().copied().take(4).collect();
        assert_eq!(head, vec![0, 50, 49, 48]);
        for value in (1..=50).rev() {
            assert_eq!(hoop.remove_after(hoop.start()), Some(value));
        }
        assert_eq!(hoop.len(), 1_000);
        assert!(hoop.values().all(|&v| v == 0));
    }

    #[test]
    fn ring_of_one_is_self_referential() {
        let mut hoop = SegmentHoopV1::filled(7, 1);
        assert_eq!(hoop.next(hoop.first()), hoop.first());
        assert_eq!(hoop.previous(hoop.first()), hoop.first());
        assert_eq!(hoop.remove_after(0), Some(7));
        assert!(hoop.is_empty());
        hoop.insert_start(8);
        assert_eq!(hoop.next(0), 0);
    }
}
