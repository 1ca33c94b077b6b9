//! Uniform shuffle for study order.

use rand::Rng;

/// Fisher-Yates in-place permutation.
///
/// `j` is drawn from the inclusive range `[0, i]` so that every one
/// of the `n!` orderings is equally likely; a half-open upper bound
/// here would bias the result.
pub fn shuffle_with<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle with the thread-local generator.
pub fn shuffle<T>(items: &mut [T]) {
    shuffle_with(items, &mut rand::thread_rng());
}
