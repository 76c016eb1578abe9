//! Input patterns for testing and benchmarking partition based sorting and selection. Every
//! random pattern draws from an RNG seeded with [`random_init_seed`].

use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;
use zipf::ZipfDistribution;

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_seeded_rng();

    // Abstracting over ranges in Rust :(
    let dist: Uniform<i32> = range.into();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();

    let dist = ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 || saw_count == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let chunk_len = len.div_ceil(saw_count);

    for (i, chunk) in v.chunks_mut(chunk_len).enumerate() {
        if i % 2 == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);

    let first_half = &mut v[0..(len / 2)];
    first_half.sort_unstable();

    let second_half = &mut v[(len / 2)..len];
    second_half.sort_unstable_by(|a, b| b.cmp(a));

    v
}

static SEED: OnceCell<u64> = OnceCell::new();

/// Returns the seed used by all random patterns.
///
/// Set the `OVERRIDE_SEED` environment variable to reproduce a failing run.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a valid u64"))
            .unwrap_or_else(|| thread_rng().gen())
    })
}

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
