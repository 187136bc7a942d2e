//! Notation validation.
//!
//! Two entry points over the same single-stack scan:
//!
//!  - [`validate`] stops at the first structural error and returns the
//!    matched [`PairSet`] on success. This is the single point of truth
//!    for well-formedness; everything downstream trusts its output.
//!  - [`diagnose`] never stops early. It reports every issue it can find
//!    in one pass, for callers that want a full defect list rather than
//!    a usable pair set.
//!
//! Positions are character indices. Notations longer than `NAIDX::MAX`
//! positions are unsupported (debug-checked in [`Pair::new`]).

use std::fmt;

use crate::DotBracket;
use crate::NAIDX;
use crate::Pair;
use crate::PairSet;
use crate::StructureError;

/// Validate a dot-bracket notation, returning the matched pairs.
///
/// The scan keeps an explicit stack of open-bracket positions: '(' pushes,
/// ')' pops and records a pair, '.' is skipped. Fails on the first
/// violation. The empty notation is valid and yields an empty set.
///
/// Pairs recorded by a LIFO matching can never cross, so the result is
/// properly nested by construction and each position occurs in at most
/// one pair.
pub fn validate(raw: &str) -> Result<PairSet, StructureError> {
    let length = raw.chars().count();
    let mut pairs = PairSet::new(length);
    let mut stack: Vec<usize> = Vec::new();

    for (at, c) in raw.chars().enumerate() {
        match DotBracket::from_char(c) {
            Some(DotBracket::Unpaired) => {}
            Some(DotBracket::Open) => stack.push(at),
            Some(DotBracket::Close) => {
                let opened = stack
                    .pop()
                    .ok_or(StructureError::UnmatchedClose { at })?;
                pairs.insert(Pair::new(opened as NAIDX, at as NAIDX));
            }
            None => return Err(StructureError::InvalidSymbol { at, symbol: c }),
        }
    }

    if !stack.is_empty() {
        return Err(StructureError::UnmatchedOpen { positions: stack });
    }
    Ok(pairs)
}

impl TryFrom<&str> for PairSet {
    type Error = StructureError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        validate(raw)
    }
}

/// One defect found by [`diagnose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A character outside the notation alphabet.
    InvalidSymbol { at: usize, symbol: char },

    /// A closing bracket with nothing left to match.
    UnmatchedClose { at: usize },

    /// Opening brackets never closed by end of input.
    UnmatchedOpen { positions: Vec<usize> },

    /// Summary count mismatch between opening and closing brackets.
    UnbalancedBrackets { opening: usize, closing: usize },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::InvalidSymbol { at, symbol } => {
                write!(f, "Invalid character '{symbol}' found at position {at}")
            }
            Issue::UnmatchedClose { at } => {
                write!(f, "Unmatched closing bracket at position {at}")
            }
            Issue::UnmatchedOpen { positions } => {
                write!(f, "Unmatched opening brackets at positions: {positions:?}")
            }
            Issue::UnbalancedBrackets { opening, closing } => {
                write!(f, "Unbalanced brackets: {opening} opening vs {closing} closing")
            }
        }
    }
}

/// The result of a full diagnostic scan.
///
/// Counts cover every position, including defective ones; `matched` holds
/// the pairs that did match, even when the notation as a whole is broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    pub length: usize,
    pub unpaired: usize,
    pub opening: usize,
    pub closing: usize,
    pub matched: Vec<(usize, usize)>,
    pub issues: Vec<Issue>,
}

impl Diagnostics {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Scan a notation and collect every distinct issue instead of stopping
/// at the first one.
///
/// Unlike [`validate`] this accepts arbitrary strings of any length and
/// keeps going past defects: invalid symbols and unmatched closers are
/// reported per position in scan order, unmatched openers once with all
/// their positions, and a bracket-count imbalance once as a summary.
pub fn diagnose(raw: &str) -> Diagnostics {
    let mut diag = Diagnostics {
        length: 0,
        unpaired: 0,
        opening: 0,
        closing: 0,
        matched: Vec::new(),
        issues: Vec::new(),
    };
    let mut stack: Vec<usize> = Vec::new();

    for (at, c) in raw.chars().enumerate() {
        diag.length += 1;
        match DotBracket::from_char(c) {
            Some(DotBracket::Unpaired) => diag.unpaired += 1,
            Some(DotBracket::Open) => {
                diag.opening += 1;
                stack.push(at);
            }
            Some(DotBracket::Close) => {
                diag.closing += 1;
                match stack.pop() {
                    Some(opened) => diag.matched.push((opened, at)),
                    None => diag.issues.push(Issue::UnmatchedClose { at }),
                }
            }
            None => diag.issues.push(Issue::InvalidSymbol { at, symbol: c }),
        }
    }

    if !stack.is_empty() {
        diag.issues.push(Issue::UnmatchedOpen { positions: stack });
    }
    if diag.opening != diag.closing {
        diag.issues.push(Issue::UnbalancedBrackets {
            opening: diag.opening,
            closing: diag.closing,
        });
    }
    diag
}

#[cfg(test)]
mod tests {
    use super::*;

    // 101-nt structure used by the upstream console check.
    const REFERENCE: &str = ".....(((.(..(.(((((.((((.((...)))).))))((((((...)).))))..(((...)))...))).)..).)))....................";

    #[test]
    fn test_validate_simple() {
        let ps = validate("((..))").unwrap();
        assert_eq!(ps.length(), 6);
        assert_eq!(ps.to_vec(), vec![Pair::new(0, 5), Pair::new(1, 4)]);
    }

    #[test]
    fn test_validate_empty() {
        let ps = validate("").unwrap();
        assert_eq!(ps.length(), 0);
        assert!(ps.is_empty());
    }

    #[test]
    fn test_validate_unmatched_open() {
        let err = validate("(").unwrap_err();
        assert_eq!(err, StructureError::UnmatchedOpen { positions: vec![0] });

        let err = validate("((.)").unwrap_err();
        assert_eq!(err, StructureError::UnmatchedOpen { positions: vec![0] });
    }

    #[test]
    fn test_validate_unmatched_close() {
        let err = validate(")").unwrap_err();
        assert_eq!(err, StructureError::UnmatchedClose { at: 0 });

        let err = validate("()).").unwrap_err();
        assert_eq!(err, StructureError::UnmatchedClose { at: 2 });
    }

    #[test]
    fn test_validate_invalid_symbol() {
        let err = validate("(x)").unwrap_err();
        assert_eq!(err, StructureError::InvalidSymbol { at: 1, symbol: 'x' });
    }

    #[test]
    fn test_try_from() {
        let ps = PairSet::try_from(".(.).").unwrap();
        assert_eq!(ps.to_vec(), vec![Pair::new(1, 3)]);
    }

    #[test]
    fn test_validate_reference_structure() {
        let ps = validate(REFERENCE).unwrap();
        assert_eq!(ps.length(), 101);
        assert_eq!(ps.len(), 25);

        // Every position in at most one pair, i < j throughout, no crossing.
        let v = ps.to_vec();
        let mut seen = vec![false; ps.length()];
        for p in &v {
            assert!(p.i() < p.j());
            for idx in [p.i() as usize, p.j() as usize] {
                assert!(!seen[idx]);
                seen[idx] = true;
            }
        }
        for a in &v {
            for b in &v {
                let crossing = a.i() < b.i() && b.i() < a.j() && a.j() < b.j();
                assert!(!crossing, "{a} crosses {b}");
            }
        }
    }

    #[test]
    fn test_diagnose_valid() {
        let diag = diagnose("((..))");
        assert!(diag.is_valid());
        assert_eq!(diag.length, 6);
        assert_eq!(diag.unpaired, 2);
        assert_eq!(diag.opening, 2);
        assert_eq!(diag.closing, 2);
        assert_eq!(diag.matched, vec![(1, 4), (0, 5)]);
    }

    #[test]
    fn test_diagnose_collects_everything() {
        let diag = diagnose(")x)((");
        assert!(!diag.is_valid());
        assert_eq!(diag.issues, vec![
            Issue::UnmatchedClose { at: 0 },
            Issue::InvalidSymbol { at: 1, symbol: 'x' },
            Issue::UnmatchedClose { at: 2 },
            Issue::UnmatchedOpen { positions: vec![3, 4] },
        ]);
        // 2 opening vs 2 closing: counts balance even though nothing matches.
        assert_eq!(diag.opening, 2);
        assert_eq!(diag.closing, 2);
    }

    #[test]
    fn test_diagnose_unbalanced_summary() {
        let diag = diagnose("(()");
        assert_eq!(diag.issues, vec![
            Issue::UnmatchedOpen { positions: vec![0] },
            Issue::UnbalancedBrackets { opening: 2, closing: 1 },
        ]);
    }
}
