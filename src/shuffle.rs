//! Randomized transposition shuffle.
//!
//! Each round picks two distinct positions uniformly at random and swaps
//! them. The resulting permutation is not proven uniform: with few rounds
//! relative to the number of cards, some cards may never move. Use a larger
//! repeat count for better mixing.

use rand::Rng;

use crate::card::Card;

/// Default number of swaps per shuffle.
pub const DEFAULT_REPEATS: u32 = 1000;

/// Swaps `repeats` random pairs of distinct positions in `cards`.
///
/// Slices with fewer than two cards are left untouched.
pub fn transpose<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R, repeats: u32) {
    let len = cards.len();
    if len < 2 {
        return;
    }

    for _ in 0..repeats {
        let a = rng.random_range(0..len);
        // Uniform over every position except `a`.
        let mut b = rng.random_range(0..len - 1);
        if b >= a {
            b += 1;
        }
        cards.swap(a, b);
    }
}
