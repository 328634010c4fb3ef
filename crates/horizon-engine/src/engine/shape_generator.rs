use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ParseSeedError, ShapeKind};

/// Draws shapes uniformly at random, one at a time.
///
/// Every draw is independent: there is no bag, so droughts and repeats are possible.
///
/// # Example
///
/// ```
/// use horizon_engine::{ShapeGenerator, ShapeSeed};
///
/// let seed: ShapeSeed = "0123456789abcdef0123456789abcdef".parse().unwrap();
/// let mut a = ShapeGenerator::with_seed(seed);
/// let mut b = ShapeGenerator::with_seed(seed);
/// assert_eq!(a.next_shape(), b.next_shape());
/// ```
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    seed: ShapeSeed,
    rng: Pcg32,
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeGenerator {
    /// Creates a generator seeded from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but reproducible.
    #[must_use]
    pub fn with_seed(seed: ShapeSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> ShapeSeed {
        self.seed
    }

    pub fn next_shape(&mut self) -> ShapeKind {
        self.rng.random()
    }
}

/// 128-bit seed for [`ShapeGenerator`].
///
/// Written and parsed as 32 hex digits, both through `serde` and [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSeed([u8; 16]);

impl ShapeSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ShapeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for ShapeSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::InvalidLength(s.len()));
        }
        // `from_str_radix` alone would also take a leading sign.
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidHex(s.to_owned()));
        }
        let num =
            u128::from_str_radix(s, 16).map_err(|_| ParseSeedError::InvalidHex(s.to_owned()))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for ShapeSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShapeSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<ShapeSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        ShapeSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_known_value() {
        let seed = ShapeSeed::from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        let serialized = serde_json::to_string(&seed).unwrap();
        assert_eq!(serialized, "\"0123456789abcdeffedcba9876543210\"");

        let parsed: ShapeSeed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, seed);
    }

    #[test]
    fn test_seed_parse_errors() {
        assert_eq!(
            "0123".parse::<ShapeSeed>(),
            Err(ParseSeedError::InvalidLength(4))
        );
        assert!(matches!(
            "ghijklmnopqrstuvwxyzghijklmnopqr".parse::<ShapeSeed>(),
            Err(ParseSeedError::InvalidHex(_))
        ));
        assert!(matches!(
            "+123456789abcdef0123456789abcdef".parse::<ShapeSeed>(),
            Err(ParseSeedError::InvalidHex(_))
        ));
        assert!(serde_json::from_str::<ShapeSeed>("\"\"").is_err());
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        let seed: ShapeSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let seed: ShapeSeed = rand::rng().random();
        let mut a = ShapeGenerator::with_seed(seed);
        let mut b = ShapeGenerator::with_seed(seed);
        for _ in 0..50 {
            assert_eq!(a.next_shape(), b.next_shape());
        }
        assert_eq!(a.seed(), seed);
    }

    #[test]
    fn test_every_shape_eventually_drawn() {
        let mut generator = ShapeGenerator::with_seed(ShapeSeed::from_bytes([7; 16]));
        let drawn: HashSet<_> = (0..500).map(|_| generator.next_shape()).collect();
        assert_eq!(drawn.len(), ShapeKind::LEN);
    }
}
