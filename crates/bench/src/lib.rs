use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Container sizes for the sequence benchmarks, one decade apart.
pub const SEQUENCE_SIZES: [usize; 5] = [1, 10, 100, 1_000, 10_000];

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Pick the runtime preset by container size, so the largest sizes get
/// enough measurement time for a stable estimate.
pub fn apply_runtime_config_for<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    match size {
        0..=100 => apply_small_runtime_config(group),
        101..=1_000 => apply_medium_runtime_config(group),
        _ => apply_large_runtime_config(group),
    }
}

/// Deterministic rng for one `(workload, size)` pair.
pub fn workload_rng(workload: u64, size: usize) -> StdRng {
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ (workload << 48) ^ (size as u64)))
}

/// `len` values below `bound`, drawn from `rng`.
pub fn random_values<R: Rng + ?Sized>(rng: &mut R, len: usize, bound: u32) -> Vec<u32> {
    (0..len).map(|_| rng.random_range(0..bound)).collect()
}

fn mix_seed(mut z: u64) -> u64 {
    z = z.wrapping_add(SEED_MIX);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workloads_are_reproducible() {
        let a = random_values(&mut workload_rng(1, 100), 32, 10);
        let b = random_values(&mut workload_rng(1, 100), 32, 10);
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| v < 10));
        let c = random_values(&mut workload_rng(2, 100), 32, 1 << 20);
        let d = random_values(&mut workload_rng(1, 100), 32, 1 << 20);
        assert_ne!(c, d);
    }
}
