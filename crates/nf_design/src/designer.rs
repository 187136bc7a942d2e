//! The sequence designer.
//!
//! Fills every paired position of a validated structure with a pair drawn
//! from the policy, then every unpaired position uniformly from the
//! alphabet. Each position is written exactly once; paired and unpaired
//! index sets are disjoint by construction of the validator.

use log::debug;
use rand::Rng;
use serde::Serialize;
use std::fmt;

use nf_structure::PairSet;
use nf_structure::StructureError;
use nf_structure::validate;

use crate::ALPHABET;
use crate::Base;
use crate::PairingPolicy;

/// A designed nucleotide sequence and its design metadata.
///
/// Immutable once produced. Keeps no reference to the source notation
/// beyond the paired-position count and the policy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignedSequence {
    bases: Vec<Base>,
    paired_positions: usize,
    policy: String,
}

impl DesignedSequence {
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    /// Number of positions that sit inside a pair (2 × number of pairs).
    pub fn paired_positions(&self) -> usize {
        self.paired_positions
    }

    /// Name of the pairing policy used for the design.
    pub fn policy(&self) -> &str {
        &self.policy
    }

    /// Fraction of G/C positions; 0.0 for the empty sequence.
    pub fn gc_content(&self) -> f64 {
        if self.bases.is_empty() {
            return 0.0;
        }
        let gc = self.bases.iter().filter(|b| b.is_gc()).count();
        gc as f64 / self.bases.len() as f64
    }

    /// Summary record for reporting and serialization.
    pub fn info(&self) -> DesignInfo {
        DesignInfo {
            sequence: self.to_string(),
            length: self.len(),
            gc_content: self.gc_content(),
            paired_positions: self.paired_positions,
            policy: self.policy.clone(),
        }
    }
}

impl fmt::Display for DesignedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bases {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

/// Serializable summary of one design call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignInfo {
    pub sequence: String,
    pub length: usize,
    pub gc_content: f64,
    pub paired_positions: usize,
    pub policy: String,
}

/// Design a sequence for a validated pair set.
///
/// Precondition: `pairs` comes from [`validate`] and `length` equals the
/// originating notation's length; neither is re-checked here.
///
/// Pairs are filled first, in sorted order so that a seeded generator
/// reproduces the same sequence; the remaining positions are then drawn
/// uniformly from the alphabet, left to right.
pub fn design<R: Rng + ?Sized>(
    pairs: &PairSet,
    length: usize,
    policy: &PairingPolicy,
    rng: &mut R,
) -> DesignedSequence {
    debug_assert_eq!(pairs.length(), length);
    let mut slots: Vec<Option<Base>> = vec![None; length];

    for pair in pairs.to_vec() {
        let (five, three) = policy.sample(rng);
        debug_assert!(slots[pair.i() as usize].is_none());
        debug_assert!(slots[pair.j() as usize].is_none());
        slots[pair.i() as usize] = Some(five);
        slots[pair.j() as usize] = Some(three);
    }

    let bases: Vec<Base> = slots
        .into_iter()
        .map(|slot| match slot {
            Some(b) => b,
            None => ALPHABET[rng.random_range(0..ALPHABET.len())],
        })
        .collect();

    let designed = DesignedSequence {
        bases,
        paired_positions: pairs.paired_positions(),
        policy: policy.name().to_string(),
    };
    debug!(
        "designed {}-nt sequence, gc {:.3}, {} paired positions",
        designed.len(),
        designed.gc_content(),
        designed.paired_positions()
    );
    designed
}

/// Validate a notation and design a sequence for it.
///
/// With `length: Some(n)`, the declared length is checked against the
/// notation first and a [`StructureError::LengthMismatch`] is returned
/// before any validation or random draw. Validator errors propagate
/// unchanged.
pub fn design_from_notation<R: Rng + ?Sized>(
    raw: &str,
    length: Option<usize>,
    policy: &PairingPolicy,
    rng: &mut R,
) -> Result<DesignedSequence, StructureError> {
    let actual = raw.chars().count();
    if let Some(expected) = length {
        if expected != actual {
            return Err(StructureError::LengthMismatch { expected, actual });
        }
    }
    let pairs = validate(raw)?;
    Ok(design(&pairs, actual, policy, rng))
}
