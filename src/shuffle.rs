//! In-place Fisher–Yates shuffling over a caller-supplied generator.

use rand::Rng;

/// Shuffle `items` uniformly in place.
///
/// The generator is constructed and owned by the caller, so deterministic
/// permutations are a matter of passing a seeded `StdRng`. Slices shorter
/// than two elements are left untouched.
pub fn fisher_yates<T, R: Rng>(items: &mut [T], rng: &mut R) {
    if items.len() < 2 {
        return;
    }
    // Walk from the tail, swapping each position with a uniformly chosen
    // index at or below it.
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
