//! Deterministic number stream
//!
//! A linear congruential generator with fixed, documented constants:
//!
//! ```text
//! state = (state * 9301 + 49297) mod 233280
//! value = state / 233280            // in [0, 1)
//! ```
//!
//! The stream owns a single integer cursor and nothing else. Two streams
//! created from the same seed produce the same sequence independently.

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::consts::{LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER};
use crate::error::{LayoutError, Result};
use crate::seed::Seed;

/// Seedable pseudo-random number stream.
///
/// A stream is a value: clone it to hand a copy to another owner. Calling
/// `next_f64`/`between` on one instance from several threads requires
/// external synchronisation, which is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredStream")]
pub struct Stream {
    state: u64,
}

/// Unchecked wire form of a saved cursor
#[derive(Deserialize)]
struct StoredStream {
    state: u64,
}

impl TryFrom<StoredStream> for Stream {
    type Error = LayoutError;

    /// Restored cursors must already be reduced below `M`
    fn try_from(stored: StoredStream) -> Result<Self> {
        if stored.state >= LCG_MODULUS {
            return Err(LayoutError::InvalidSeed(format!(
                "stream state {} is not below {}",
                stored.state, LCG_MODULUS
            )));
        }
        Ok(Self {
            state: stored.state,
        })
    }
}

impl Stream {
    /// Create a stream with `state = seed mod M` (Euclidean, so negative
    /// seeds land in `[0, M)`)
    pub fn new(seed: impl Into<Seed>) -> Self {
        let seed = seed.into().value();
        Self {
            state: seed.rem_euclid(LCG_MODULUS as i64) as u64,
        }
    }

    /// Create a stream from a host floating point seed
    pub fn from_f64(seed: f64) -> Result<Self> {
        Ok(Self::new(Seed::try_from(seed)?))
    }

    /// Current cursor value (always `< M`)
    pub fn state(&self) -> u64 {
        self.state
    }

    #[inline]
    fn advance(&mut self) -> u64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state
    }

    /// Advance and return a value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.advance() as f64 / LCG_MODULUS as f64
    }

    /// Advance and return an integer in `[lo, hi]` (inclusive on both ends)
    pub fn between(&mut self, lo: i64, hi: i64) -> Result<i64> {
        if hi < lo {
            return Err(LayoutError::InvalidRange { lo, hi });
        }
        let span = (hi as f64) - (lo as f64) + 1.0;
        let offset = (self.next_f64() * span).floor() as i64;
        // f64 rounding can only bite for spans far beyond 2^32
        Ok(lo.saturating_add(offset).min(hi))
    }

    /// Discard `n` draws
    pub fn skip(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }
}

impl RngCore for Stream {
    /// One draw scaled onto the full `u32` range
    fn next_u32(&mut self) -> u32 {
        ((self.advance() << 32) / LCG_MODULUS) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Stream {
    /// Little-endian `i64` seed
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as i64)
    }
}
