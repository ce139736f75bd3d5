use std::collections::{LinkedList, VecDeque};
use std::hint::black_box;

use bench::{SEQUENCE_SIZES, apply_runtime_config_for, random_values, workload_rng};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId};

use structures::algorithm::{count, distance};
use structures::{
    BinodeDeck, BinodeListV1, BinodeListV2, BinodeListV3, Deck, List, SegmentDeck, SegmentListV1,
    SegmentListV2, UninodeListV1, UninodeListV2, UninodeListV3,
};

const VALUE_BOUND: u32 = 1 << 16;
const ABSENT: u32 = VALUE_BOUND;

/// The same workloads on the standard containers, as baselines.
trait StdSequence: Default {
    fn push_first(&mut self, value: u32);

    fn push_last(&mut self, value: u32);

    fn filled(value: u32, count: usize) -> Self;

    fn count_of(&self, value: u32) -> usize;
}

impl StdSequence for Vec<u32> {
    fn push_first(&mut self, value: u32) {
        self.insert(0, value);
    }

    fn push_last(&mut self, value: u32) {
        self.push(value);
    }

    fn filled(value: u32, count: usize) -> Self {
        vec![value; count]
    }

    fn count_of(&self, value: u32) -> usize {
        self.iter().filter(|&&v| v == value).count()
    }
}

impl StdSequence for VecDeque<u32> {
    fn push_first(&mut self, value: u32) {
        self.push_front(value);
    }

    fn push_last(&mut self, value: u32) {
        self.push_back(value);
    }

    fn filled(value: u32, count: usize) -> Self {
        std::iter::repeat_n(value, count).collect()
    }

    fn count_of(&self, value: u32) -> usize {
        self.iter().filter(|&&v| v == value).count()
    }
}

impl StdSequence for LinkedList<u32> {
    fn push_first(&mut self, value: u32) {
        self.push_front(value);
    }

    fn push_last(&mut self, value: u32) {
        self.push_back(value);
    }

    fn filled(value: u32, count: usize) -> Self {
        std::iter::repeat_n(value, count).collect()
    }

    fn count_of(&self, value: u32) -> usize {
        self.iter().filter(|&&v| v == value).count()
    }
}

pub fn bench_insert_first<L, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement,
    L: List<Value = u32>,
{
    for &size in &SEQUENCE_SIZES {
        apply_runtime_config_for(group, size);
        let values = random_values(&mut workload_rng(1, size), size, VALUE_BOUND);
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                let mut list = L::new();
                for &value in &values {
                    black_box(list.insert_first(value));
                }
                list
            })
        });
    }
}

/// Append by inserting after the position the previous insert returned.
pub fn bench_insert_after<L, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement,
    L: List<Value = u32>,
{
    for &size in &SEQUENCE_SIZES {
        apply_runtime_config_for(group, size);
        let values = random_values(&mut workload_rng(2, size), size, VALUE_BOUND);
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                let mut list = L::new();
                let mut at = list.before_first();
                for &value in &values {
                    at = list.insert_after(at, value);
                }
                list
            })
        });
    }
}

pub fn bench_filled<L, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement,
    L: List<Value = u32>,
{
    for &size in &SEQUENCE_SIZES {
        apply_runtime_config_for(group, size);
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| L::filled(black_box(7), size))
        });
    }
}

/// Full traversals: `distance` to the end, then a `count` of an absent value.
pub fn bench_traversal<L, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement,
    L: List<Value = u32>,
{
    for &size in &SEQUENCE_SIZES {
        apply_runtime_config_for(group, size);
        let mut list = L::new();
        list.extend_last(random_values(&mut workload_rng(3, size), size, VALUE_BOUND));
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                let first = list.cursor(list.first());
                let limit = list.cursor(list.after_last());
                black_box(distance(first, limit));
                black_box(count(first, limit, &ABSENT))
            })
        });
    }
}

fn bench_std_insert_first<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement,
    S: StdSequence,
{
    for &size in &SEQUENCE_SIZES {
        apply_runtime_config_for(group, size);
        let values = random_values(&mut workload_rng(1, size), size, VALUE_BOUND);
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                let mut seq = S::default();
                for &value in &values {
                    seq.push_first(value);
                }
                seq
            })
        });
    }
}

fn bench_std_insert_after<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement,
    S: StdSequence,
{
    for &size in &SEQUENCE_SIZES {
        apply_runtime_config_for(group, size);
        let values = random_values(&mut workload_rng(2, size), size, VALUE_BOUND);
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                let mut seq = S::default();
                for &value in &values {
                    seq.push_last(value);
                }
                seq
            })
        });
    }
}

fn bench_std_filled<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement,
    S: StdSequence,
{
    for &size in &SEQUENCE_SIZES {
        apply_runtime_config_for(group, size);
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| S::filled(black_box(7), size))
        });
    }
}

fn bench_std_traversal<S, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement,
    S: StdSequence,
{
    for &size in &SEQUENCE_SIZES {
        apply_runtime_config_for(group, size);
        let mut seq = S::default();
        for value in random_values(&mut workload_rng(3, size), size, VALUE_BOUND) {
            seq.push_last(value);
        }
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| black_box(seq.count_of(ABSENT)))
        });
    }
}

/// Alternating pushes at both ends followed by draining from the top.
pub fn bench_deck<D, T>(group: &mut BenchmarkGroup<'_, T>, label: &str)
where
    T: Measurement,
    D: Deck<Value = u32>,
{
    for &size in &SEQUENCE_SIZES {
        apply_runtime_config_for(group, size);
        let values = random_values(&mut workload_rng(4, size), size, VALUE_BOUND);
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                let mut deck = D::new();
                for (i, &value) in values.iter().enumerate() {
                    if i % 2 == 0 {
                        deck.insert_top(value);
                    } else {
                        deck.insert_bottom(value);
                    }
                }
                while let Some(value) = deck.erase_top() {
                    black_box(value);
                }
            })
        });
    }
}

fn bench_std_deck<T: Measurement>(group: &mut BenchmarkGroup<'_, T>, label: &str) {
    for &size in &SEQUENCE_SIZES {
        apply_runtime_config_for(group, size);
        let values = random_values(&mut workload_rng(4, size), size, VALUE_BOUND);
        group.bench_function(BenchmarkId::new(label, size), |bencher| {
            bencher.iter(|| {
                let mut deck = VecDeque::new();
                for (i, &value) in values.iter().enumerate() {
                    if i % 2 == 0 {
                        deck.push_front(value);
                    } else {
                        deck.push_back(value);
                    }
                }
                while let Some(value) = deck.pop_front() {
                    black_box(value);
                }
            })
        });
    }
}

pub fn bench_all_insert_first<T: Measurement>(group: &mut BenchmarkGroup<'_, T>) {
    bench_insert_first::<UninodeListV1<u32>, _>(group, "uninode_v1");
    bench_insert_first::<UninodeListV2<u32>, _>(group, "uninode_v2");
    bench_insert_first::<UninodeListV3<u32>, _>(group, "uninode_v3");
    bench_insert_first::<BinodeListV1<u32>, _>(group, "binode_v1");
    bench_insert_first::<BinodeListV2<u32>, _>(group, "binode_v2");
    bench_insert_first::<BinodeListV3<u32>, _>(group, "binode_v3");
    bench_insert_first::<SegmentListV1<u32>, _>(group, "segment_v1");
    bench_insert_first::<SegmentListV2<u32>, _>(group, "segment_v2");
    bench_std_insert_first::<Vec<u32>, _>(group, "std_vec");
    bench_std_insert_first::<VecDeque<u32>, _>(group, "std_vec_deque");
    bench_std_insert_first::<LinkedList<u32>, _>(group, "std_linked_list");
}

pub fn bench_all_insert_after<T: Measurement>(group: &mut BenchmarkGroup<'_, T>) {
    bench_insert_after::<UninodeListV1<u32>, _>(group, "uninode_v1");
    bench_insert_after::<UninodeListV2<u32>, _>(group, "uninode_v2");
    bench_insert_after::<UninodeListV3<u32>, _>(group, "uninode_v3");
    bench_insert_after::<BinodeListV1<u32>, _>(group, "binode_v1");
    bench_insert_after::<BinodeListV2<u32>, _>(group, "binode_v2");
    bench_insert_after::<BinodeListV3<u32>, _>(group, "binode_v3");
    bench_insert_after::<SegmentListV1<u32>, _>(group, "segment_v1");
    bench_insert_after::<SegmentListV2<u32>, _>(group, "segment_v2");
    bench_std_insert_after::<Vec<u32>, _>(group, "std_vec");
    bench_std_insert_after::<VecDeque<u32>, _>(group, "std_vec_deque");
    bench_std_insert_after::<LinkedList<u32>, _>(group, "std_linked_list");
}

pub fn bench_all_filled<T: Measurement>(group: &mut BenchmarkGroup<'_, T>) {
    bench_filled::<UninodeListV1<u32>, _>(group, "uninode_v1");
    bench_filled::<UninodeListV2<u32>, _>(group, "uninode_v2");
    bench_filled::<UninodeListV3<u32>, _>(group, "uninode_v3");
    bench_filled::<BinodeListV1<u32>, _>(group, "binode_v1");
    bench_filled::<BinodeListV2<u32>, _>(group, "binode_v2");
    bench_filled::<BinodeListV3<u32>, _>(group, "binode_v3");
    bench_filled::<SegmentListV1<u32>, _>(group, "segment_v1");
    bench_filled::<SegmentListV2<u32>, _>(group, "segment_v2");
    bench_std_filled::<Vec<u32>, _>(group, "std_vec");
    bench_std_filled::<VecDeque<u32>, _>(group, "std_vec_deque");
    bench_std_filled::<LinkedList<u32>, _>(group, "std_linked_list");
}

pub fn bench_all_traversal<T: Measurement>(group: &mut BenchmarkGroup<'_, T>) {
    bench_traversal::<UninodeListV1<u32>, _>(group, "uninode_v1");
    bench_traversal::<UninodeListV2<u32>, _>(group, "uninode_v2");
    bench_traversal::<UninodeListV3<u32>, _>(group, "uninode_v3");
    bench_traversal::<BinodeListV1<u32>, _>(group, "binode_v1");
    bench_traversal::<BinodeListV2<u32>, _>(group, "binode_v2");
    bench_traversal::<BinodeListV3<u32>, _>(group, "binode_v3");
    bench_traversal::<SegmentListV1<u32>, _>(group, "segment_v1");
    bench_traversal::<SegmentListV2<u32>, _>(group, "segment_v2");
    bench_std_traversal::<Vec<u32>, _>(group, "std_vec");
    bench_std_traversal::<VecDeque<u32>, _>(group, "std_vec_deque");
    bench_std_traversal::<LinkedList<u32>, _>(group, "std_linked_list");
}

pub fn bench_all_decks<T: Measurement>(group: &mut BenchmarkGroup<'_, T>) {
    bench_deck::<BinodeDeck<u32>, _>(group, "binode");
    bench_deck::<SegmentDeck<u32>, _>(group, "segment");
    bench_std_deck(group, "std_vec_deque");
}
