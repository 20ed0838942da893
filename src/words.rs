//! The word pool a round draws from.

use alloc::collections::VecDeque;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Number of words in the canonical list.
pub const WORD_COUNT: usize = 21;

/// The fixed set of words every pool is refilled from.
pub const CANONICAL_WORDS: [&str; WORD_COUNT] = [
    "queen",
    "hospital",
    "basketball",
    "cat",
    "change",
    "snail",
    "soup",
    "calendar",
    "sad",
    "desk",
    "guitar",
    "home",
    "railway",
    "zebra",
    "jelly",
    "car",
    "crow",
    "trade",
    "bag",
    "roll",
    "bubble",
];

/// An ordered deck of words, drawn from the front.
///
/// The pool starts empty and refills itself with a freshly shuffled copy of
/// [`CANONICAL_WORDS`] whenever a draw finds it exhausted, so every window of
/// [`WORD_COUNT`] consecutive draws aligned to a refill yields each word once.
#[derive(Debug, Clone)]
pub struct WordPool {
    words: VecDeque<&'static str>,
    rng: ChaCha8Rng,
    refills: usize,
}

impl WordPool {
    /// Creates an empty pool whose shuffles are driven by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            words: VecDeque::with_capacity(WORD_COUNT),
            rng: ChaCha8Rng::seed_from_u64(seed),
            refills: 0,
        }
    }

    fn refill(&mut self) {
        let mut words = CANONICAL_WORDS;
        words.shuffle(&mut self.rng);
        self.words.extend(words);
        self.refills += 1;
        tracing::debug!(refills = self.refills, "word pool refilled");
    }

    /// Removes and returns the word at the front of the pool.
    ///
    /// An empty pool is refilled before drawing, so this never fails.
    pub fn draw(&mut self) -> &'static str {
        loop {
            if let Some(word) = self.words.pop_front() {
                return word;
            }
            self.refill();
        }
    }

    /// Returns the number of words left before the next refill.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.words.len()
    }

    /// Returns how many times the pool has been refilled.
    #[must_use]
    pub const fn refills(&self) -> usize {
        self.refills
    }
}
