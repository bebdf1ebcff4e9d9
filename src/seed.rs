//! Seed values
//!
//! A seed is a plain `i64`. Hosts that only have floating point numbers
//! (browser timestamps, JSON numbers) go through `TryFrom<f64>`, which refuses
//! anything that is not an exact integer. Hosts that seed from a list of
//! strings get a stable 32-bit hash of the parts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Initial value that fully determines a number stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub i64);

impl Seed {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Hash an ordered sequence of string parts into a seed.
    ///
    /// Each part's characters are folded with the same `h * 31 + c` rolling
    /// hash used for fingerprints, followed by the part length, so
    /// `["ab", "c"]` and `["a", "bc"]` give different seeds.
    pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Self {
        let mut hash: u32 = 0;
        for part in parts {
            let part = part.as_ref();
            for c in part.chars() {
                hash = hash.wrapping_mul(31).wrapping_add(c as u32);
            }
            hash = hash.wrapping_mul(31).wrapping_add(part.chars().count() as u32);
        }
        Self(i64::from(hash))
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self(i64::from(value))
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl TryFrom<f64> for Seed {
    type Error = LayoutError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // 2^63 is exactly representable; i64::MAX is not
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;

        if !value.is_finite() {
            return Err(LayoutError::InvalidSeed(format!("{value} is not finite")));
        }
        if value.fract() != 0.0 {
            return Err(LayoutError::InvalidSeed(format!("{value} is not an integer")));
        }
        if !(-LIMIT..LIMIT).contains(&value) {
            return Err(LayoutError::InvalidSeed(format!("{value} is out of range")));
        }
        Ok(Self(value as i64))
    }
}

impl FromStr for Seed {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| LayoutError::InvalidSeed(format!("{s:?}: {e}")))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_from_float() {
        assert_eq!(Seed::try_from(12345.0), Ok(Seed(12345)));
        assert_eq!(Seed::try_from(-7.0), Ok(Seed(-7)));
        assert!(matches!(Seed::try_from(f64::NAN), Err(LayoutError::InvalidSeed(_))));
        assert!(matches!(Seed::try_from(f64::INFINITY), Err(LayoutError::InvalidSeed(_))));
        assert!(matches!(Seed::try_from(1.5), Err(LayoutError::InvalidSeed(_))));
        assert!(matches!(Seed::try_from(1e300), Err(LayoutError::InvalidSeed(_))));
    }

    #[test]
    fn test_seed_from_str() {
        assert_eq!("42".parse::<Seed>(), Ok(Seed(42)));
        assert_eq!(" -3 ".parse::<Seed>(), Ok(Seed(-3)));
        assert!(matches!("abc".parse::<Seed>(), Err(LayoutError::InvalidSeed(_))));
    }

    #[test]
    fn test_seed_from_parts() {
        let parts = ["phaser3", "deterministic", "layout", "2024"];
        assert_eq!(Seed::from_parts(&parts), Seed::from_parts(&parts));
        assert_ne!(Seed::from_parts(&["ab", "c"]), Seed::from_parts(&["a", "bc"]));
        assert_eq!(Seed::from_parts::<&str>(&[]), Seed(0));
        assert!(Seed::from_parts(&parts).value() >= 0);
    }
}
