//! Pair and PairSet definitions.
//!
//! Compact integer-based representation of matched positions. A `Pair`
//! is defined by two 16-bit indices (`NAIDX`) packed into a 32-bit
//! integer key (`P1KEY`) for efficient set storage.
//!
//! A `PairSet` is produced by the validator and is immutable from the
//! caller's point of view afterwards: the analyzer and the designer both
//! treat it as a read-only view of the matching. Pairs coming out of the
//! single-stack scan are properly nested by construction, so no crossing
//! checks are repeated here.
//!

use std::fmt;
use nohash_hasher::IntSet;

use crate::NAIDX;
use crate::P1KEY;


/// A matched pair of positions (i, j) with i < j.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    i: NAIDX,
    j: NAIDX,
}

impl Pair {
    /// Create a new pair (i, j). Panics in debug if i >= j.
    pub fn new(i: NAIDX, j: NAIDX) -> Self {
        debug_assert!(i < j);
        debug_assert!(j < NAIDX::MAX);
        Pair { i, j }
    }

    /// Return the 5'-side index.
    pub fn i(&self) -> NAIDX {
        self.i
    }

    /// Return the 3'-side index.
    pub fn j(&self) -> NAIDX {
        self.j
    }

    /// Compact 32-bit key encoding both indices.
    pub fn key(&self) -> P1KEY {
        ((self.i as P1KEY) << 16) | (self.j as P1KEY)
    }

    /// Decode a key back into a `Pair`.
    pub fn from_key(key: P1KEY) -> Self {
        let i = (key >> 16) as NAIDX;
        let j = (key & 0xFFFF) as NAIDX;
        debug_assert!(i < j);
        Pair { i, j }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.i, self.j)
    }
}

/// The set of matched pairs of one validated notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSet {
    length: usize,
    pairs: IntSet<P1KEY>,
}

impl PairSet {
    /// Create an empty pair set for a given notation length.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            pairs: IntSet::default(),
        }
    }

    /// Number of pairs contained in the set.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Insert a new pair; returns true if it was newly inserted.
    pub fn insert(&mut self, pair: Pair) -> bool {
        debug_assert!((pair.j() as usize) < self.length);
        self.pairs.insert(pair.key())
    }

    /// Check if a pair exists in the set.
    pub fn contains(&self, pair: &Pair) -> bool {
        self.pairs.contains(&pair.key())
    }

    /// Iterator over all pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Pair> + '_ {
        self.pairs.iter().map(|&k| Pair::from_key(k))
    }

    /// Iterator over the raw pair keys in arbitrary order.
    pub fn iter_keys(&self) -> impl Iterator<Item = &P1KEY> {
        self.pairs.iter()
    }

    /// Return all pairs as a Vec, sorted by 5'-side index (the natural
    /// scan order used for stem grouping and deterministic inspection).
    pub fn to_vec(&self) -> Vec<Pair> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_unstable_by_key(|p| (p.i(), p.j()));
        v
    }

    /// Length of the notation this set was derived from.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of positions covered by a pair (2 × number of pairs).
    pub fn paired_positions(&self) -> usize {
        2 * self.pairs.len()
    }
}

impl fmt::Display for PairSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for pair in self.to_vec() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{pair}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_roundtrip() {
        let p = Pair::new(1, 42);
        let k = p.key();
        let q = Pair::from_key(k);
        assert_eq!(p, q);
    }

    #[test]
    fn test_pair_set_insert_contains() {
        let mut ps = PairSet::new(6);
        assert!(ps.is_empty());
        assert!(ps.insert(Pair::new(0, 5)));
        assert!(!ps.insert(Pair::new(0, 5)));
        assert!(ps.insert(Pair::new(1, 4)));

        assert_eq!(ps.len(), 2);
        assert_eq!(ps.paired_positions(), 4);
        assert!(ps.contains(&Pair::new(1, 4)));
        assert!(!ps.contains(&Pair::new(0, 4)));
        assert_eq!(ps.to_vec(), vec![Pair::new(0, 5), Pair::new(1, 4)]);
    }

    #[test]
    fn test_display() {
        let mut ps = PairSet::new(6);
        ps.insert(Pair::new(1, 4));
        ps.insert(Pair::new(0, 5));
        let s = format!("{}", ps);
        assert_eq!(s, "(0,5),(1,4)");
    }
}
