//! Algorithms over any [`ForwardPosition`].
//!
//! Every function here walks `[from, to)` at most once and never mutates the
//! storage; `to` must be reachable from `from`.

use crate::position::ForwardPosition;

/// Number of `next` steps from `from` to `to`.
pub fn distance<P: ForwardPosition>(from: P, to: P) -> usize {
    from.distance_to(to)
}

/// Apply `f` to each value in `[from, to)`, in traversal order.
pub fn visit<P, F>(mut from: P, to: P, mut f: F)
where
    P: ForwardPosition,
    F: FnMut(&P::Value),
{
    while from != to {
        f(from.load());
        from = from.next();
    }
}

pub fn count<P>(from: P, to: P, value: &P::Value) -> usize
where
    P: ForwardPosition,
    P::Value: PartialEq,
{
    count_if(from, to, |candidate| candidate == value)
}

pub fn count_if<P, F>(mut from: P, to: P, mut pred: F) -> usize
where
    P: ForwardPosition,
    F: FnMut(&P::Value) -> bool,
{
    let mut matches = 0;
    while from != to {
        if pred(from.load()) {
            matches += 1;
        }
        from = from.next();
    }
    matches
}

/// First position in `[from, to)` holding `value`, or `to`.
pub fn search<P>(from: P, to: P, value: &P::Value) -> P
where
    P: ForwardPosition,
    P::Value: PartialEq,
{
    search_if(from, to, |candidate| candidate == value)
}

/// First position in `[from, to)` whose value satisfies `pred`, or `to`.
pub fn search_if<P, F>(mut from: P, to: P, mut pred: F) -> P
where
    P: ForwardPosition,
    F: FnMut(&P::Value) -> bool,
{
    while from != to {
        if pred(from.load()) {
            return from;
        }
        from = from.next();
    }
    to
}

pub fn find<P>(from: P, to: P, value: &P::Value) -> P
where
    P: ForwardPosition,
    P::Value: PartialEq,
{
    search(from, to, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Sequence;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
    enum Thing {
        Zero,
        One,
        Two,
        Three,
    }

    const THINGS: [Thing; 4] = [Thing::Zero, Thing::One, Thing::Two, Thing::Three];

    #[test]
    fn distance_over_array() {
        let things: &[Thing] = &THINGS;
        assert_eq!(distance(things.cursor(0), things.cursor(0)), 0);
        assert_eq!(distance(things.cursor(0), things.cursor(4)), 4);
    }

    #[test]
    fn visit_in_order() {
        let things: &[Thing] = &THINGS;
        let mut seen = Vec::new();
        visit(things.cursor(0), things.cursor(4), |&value| seen.push(value));
        assert_eq!(seen, THINGS);
    }

    #[test]
    fn count_and_count_if() {
        let things: &[Thing] = &THINGS;
        assert_eq!(count(things.cursor(0), things.cursor(4), &Thing::Two), 1);
        assert_eq!(
            count_if(things.cursor(0), things.cursor(4), |&value| value < Thing::Three),
            3
        );
        assert_eq!(count(things.cursor(4), things.cursor(4), &Thing::Two), 0);
    }

    #[test]
    fn search_and_search_if() {
        let things: &[Thing] = &THINGS;
        let (first, limit) = (things.cursor(0), things.cursor(4));
        assert_eq!(search(first, limit, &Thing::Two), things.cursor(2));
        assert_eq!(
            search_if(first, limit, |&value| value == Thing::Two),
            things.cursor(2)
        );
        assert_eq!(find(first, things.cursor(2), &Thing::Three), things.cursor(2));
        assert_eq!(search_if(first, limit, |_| false), limit);
    }
}
