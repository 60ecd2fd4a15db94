//! Plausible stand-in datasets for when a live provider is unavailable.
//!
//! Generators are generic over the random source so tests can seed them.
//! Production synthesis draws from [`RandomSource`].

pub mod keywords;
pub mod serp;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// How the orchestrator seeds each synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomSource {
    /// Fresh OS entropy per call.
    #[default]
    Entropy,
    /// The same seed on every call, so identical queries synthesize identical data.
    Seeded(u64),
}

impl RandomSource {
    pub fn rng(&self) -> StdRng {
        match self {
            RandomSource::Entropy => StdRng::from_entropy(),
            RandomSource::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}

/// Round to cents.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Capitalise the first letter of every word.
pub(crate) fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_source_repeats() {
        let a: u64 = RandomSource::Seeded(7).rng().gen();
        let b: u64 = RandomSource::Seeded(7).rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("pool service miami"), "Pool Service Miami");
        assert_eq!(title_case("HVAC  denver"), "Hvac Denver");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.345_6), 12.35);
        assert_eq!(round2(0.0), 0.0);
    }
}
