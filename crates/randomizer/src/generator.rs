//! Seedable pseudo-random number generator (linear congruential).
//! Deterministic, fast, single-threaded by design.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::RandomizerError;

/// The modulus of the recurrence. Constants from "Numerical Recipes in C".
pub const MODULUS: i64 = 233_280;
/// The multiplier of the recurrence.
pub const MULTIPLIER: i64 = 9_301;
/// The increment of the recurrence.
pub const INCREMENT: i64 = 49_297;

/// Seedable pseudo-random number generator using the linear congruential
/// recurrence `state = (state * MULTIPLIER + INCREMENT) % MODULUS`.
///
/// Not cryptographic and not statistically strong; use it where a tiny,
/// reproducible sequence is enough (demos, tests, procedural content).
/// One instance per logical thread of control; there is no internal locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Randomizer {
    /// Current state, always in `[0, MODULUS)`.
    state: i64,
}

impl Randomizer {
    /// Create a generator from an arbitrary seed.
    ///
    /// Any `i64` is accepted; the seed is reduced into `[0, MODULUS)` with
    /// `rem_euclid`, so `new(0)` and `new(233280)` build identical generators
    /// and negative seeds are well-defined.
    pub fn new(seed: i64) -> Self {
        Randomizer {
            state: seed.rem_euclid(MODULUS),
        }
    }

    /// Create a generator seeded from the system clock (milliseconds since
    /// the Unix epoch). Falls back to seed 1 if the clock reads before the
    /// epoch.
    pub fn from_clock() -> Self {
        let seed = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as i64,
            Err(_) => {
                log::warn!("system clock is before the Unix epoch, seeding with 1");
                1
            }
        };
        Randomizer::new(seed)
    }

    /// Advance the state once and return it as a fraction in `[0, 1)`.
    ///
    /// The intermediate product is at most `233279 * 9301`, well inside
    /// `i64` range, so the arithmetic cannot overflow.
    pub fn next_fraction(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Generate a random integer in `[0, max]`.
    ///
    /// Uses `f64::round` (half away from zero) on `max * next_fraction()`,
    /// which for these non-negative products matches `floor(x + 0.5)`. The
    /// endpoints 0 and `max` map to half-width intervals of the fraction, so
    /// they appear roughly half as often as interior values; that bias is
    /// inherent to the method.
    ///
    /// Returns `RandomizerError::InvalidMax` when `max` is negative; a failed
    /// call does not advance the state.
    pub fn next_int(&mut self, max: i64) -> Result<i64, RandomizerError> {
        if max < 0 {
            return Err(RandomizerError::InvalidMax(max));
        }
        Ok((max as f64 * self.next_fraction()).round() as i64)
    }

    /// The current internal state, in `[0, MODULUS)`.
    pub fn state(&self) -> i64 {
        self.state
    }

    /// Clamp a deserialized or hand-edited state back into `[0, MODULUS)`.
    pub(crate) fn normalize(&mut self) {
        self.state = self.state.rem_euclid(MODULUS);
    }
}
