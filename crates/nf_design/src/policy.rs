//! Weighted pairing policies.
//!
//! A policy is a distribution over complementary (5', 3') base pairs.
//! The default reproduces the classic GC-biased rule: 70% of pairs are
//! GC-type (uniform over (G,C) and (C,G)), 30% are AU-type (uniform over
//! (A,U) and (U,A)).

use rand::Rng;

use crate::Base;

/// A named, weighted distribution over complementary base pairs.
///
/// Weights are relative; they do not need to sum to one. The entry set
/// must be non-empty with strictly positive weights (debug-checked).
#[derive(Debug, Clone, PartialEq)]
pub struct PairingPolicy {
    name: String,
    entries: Vec<(f64, (Base, Base))>,
}

impl PairingPolicy {
    pub fn new(name: impl Into<String>, entries: Vec<(f64, (Base, Base))>) -> Self {
        debug_assert!(!entries.is_empty());
        debug_assert!(entries.iter().all(|&(w, _)| w > 0.0));
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared (weight, pair) entries.
    pub fn entries(&self) -> &[(f64, (Base, Base))] {
        &self.entries
    }

    /// Check whether (five, three) is one of the declared pairs, in this
    /// orientation.
    pub fn contains(&self, five: Base, three: Base) -> bool {
        self.entries.iter().any(|&(_, p)| p == (five, three))
    }

    /// Draw one (5', 3') pair according to the weights.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (Base, Base) {
        let total: f64 = self.entries.iter().map(|&(w, _)| w).sum();
        let mut x = rng.random::<f64>() * total;
        for &(w, pair) in &self.entries {
            if x < w {
                return pair;
            }
            x -= w;
        }
        // Floating-point edge: x landed exactly on the total.
        self.entries[self.entries.len() - 1].1
    }
}

impl Default for PairingPolicy {
    /// The GC-biased default: 0.7 GC-type vs 0.3 AU-type, each split
    /// uniformly over both orientations.
    fn default() -> Self {
        use Base::*;
        PairingPolicy::new("gc-rich", vec![
            (0.35, (G, C)),
            (0.35, (C, G)),
            (0.15, (A, U)),
            (0.15, (U, A)),
        ])
    }
}
