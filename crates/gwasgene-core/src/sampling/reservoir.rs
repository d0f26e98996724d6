//! Seeded reservoir sampling (Algorithm R).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default number of rows kept when sampling a sumstat file.
pub const DEFAULT_SAMPLE_ROWS: usize = 1000;

/// Default RNG seed, so repeated runs select the same rows.
pub const DEFAULT_SEED: u64 = 42;

/// A fixed-capacity uniform sample over a stream of unknown length.
pub struct Reservoir<T> {
    capacity: usize,
    seen: usize,
    items: Vec<T>,
    rng: StdRng,
}

impl<T> Reservoir<T> {
    /// Create an empty reservoir holding at most `capacity` items.
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self {
            capacity,
            seen: 0,
            items: Vec::with_capacity(capacity.min(DEFAULT_SAMPLE_ROWS)),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Offer the next item of the stream.
    pub fn push(&mut self, item: T) {
        if self.items.len() < self.capacity {
            self.items.push(item);
        } else if self.capacity > 0 {
            let slot = self.rng.gen_range(0..=self.seen);
            if slot < self.capacity {
                self.items[slot] = item;
            }
        }
        self.seen += 1;
    }

    /// Number of items offered so far.
    pub const fn seen(&self) -> usize {
        self.seen
    }

    /// Consume the reservoir, returning the sample.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

/// Sample at most `k` items from `items`, reproducibly for a given seed.
pub fn reservoir_sample<T, I>(items: I, k: usize, seed: u64) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    let mut reservoir = Reservoir::new(k, seed);
    for item in items {
        reservoir.push(item);
    }
    reservoir.into_inner()
}
