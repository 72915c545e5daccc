//! Randomness sources for dice.
//!
//! ## Key Features
//!
//! - **Injectable**: every `Die` draws through a `RandomSource` handed to it
//!   at construction, never through a hidden global
//! - **Deterministic**: `DiceRng` with the same seed produces the same rolls
//! - **Replayable**: `FixedSequence` returns scripted values for scenarios
//!
//! ## Usage
//!
//! ```
//! use dice_engine::core::{DiceRng, RandomSource};
//!
//! let mut rng = DiceRng::new(42);
//! let face = rng.next_in_range(1, 6);
//! assert!((1..=6).contains(&face));
//!
//! // Same seed, same rolls
//! let mut a = DiceRng::new(7);
//! let mut b = DiceRng::new(7);
//! assert_eq!(a.next_in_range(1, 20), b.next_in_range(1, 20));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Anything that can produce uniformly distributed integers.
pub trait RandomSource {
    /// Next integer in `low..=high`. Callers guarantee `low <= high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;
}

/// Seeded ChaCha8 generator.
///
/// Uses ChaCha8 for speed while keeping statistically uniform output.
/// The seed is kept so a run can be reported and replayed.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DiceRng {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }
}

/// Replays a scripted list of values, cycling when exhausted.
///
/// A value outside the requested range is wrapped into it, so a script
/// written for d6 still yields legal faces on a d4.
#[derive(Clone, Debug)]
pub struct FixedSequence {
    values: Vec<u32>,
    cursor: usize,
}

impl FixedSequence {
    /// Create a sequence. An empty script always yields the range minimum.
    #[must_use]
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for FixedSequence {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;

        if (low..=high).contains(&value) {
            value
        } else {
            let span = u64::from(high - low) + 1;
            // span fits in u32 range after the modulo
            low + (u64::from(value) % span) as u32
        }
    }
}

thread_local! {
    static PROCESS_RNG: RngHandle = RngHandle::new(DiceRng::from_entropy());
}

/// Shared handle to a randomness source.
///
/// Cloning is cheap and every clone draws from the same underlying source,
/// so a whole `Dice` collection advances one stream. Single-threaded: callers
/// embedding the engine in a multi-client service serialize access per session.
#[derive(Clone)]
pub struct RngHandle(Rc<RefCell<dyn RandomSource>>);

impl RngHandle {
    /// Wrap any source.
    pub fn new(source: impl RandomSource + 'static) -> Self {
        Self(Rc::new(RefCell::new(source)))
    }

    /// Handle over a seeded `DiceRng`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(DiceRng::new(seed))
    }

    /// Handle over a scripted `FixedSequence`.
    #[must_use]
    pub fn fixed(values: impl Into<Vec<u32>>) -> Self {
        Self::new(FixedSequence::new(values))
    }

    /// Draw the next integer in `low..=high`.
    pub fn next_in_range(&self, low: u32, high: u32) -> u32 {
        self.0.borrow_mut().next_in_range(low, high)
    }

    /// True when both handles draw from the same source.
    #[must_use]
    pub fn shares_source(&self, other: &RngHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for RngHandle {
    /// The thread's process-seeded source.
    fn default() -> Self {
        PROCESS_RNG.with(Clone::clone)
    }
}

impl fmt::Debug for RngHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RngHandle(..)")
    }
}
