//! Structural feature analysis.
//!
//! Decomposes a validated notation into stems and loop regions and
//! reports summary counts. The classifier is deliberately shallow: a
//! stem's interior either holds no further brackets (hairpin loop) or it
//! does (internal loop) — nested branching is not separated out, and
//! `multiloops` is always reported as zero. Known limitation, kept.

use serde::Serialize;

use crate::Pair;
use crate::PairSet;

/// Unpaired gaps between consecutive stems up to this length count as
/// bulges; anything longer counts as an internal loop. Inherited
/// threshold, no biological justification implied.
pub const BULGE_MAX_GAP: usize = 3;

/// A maximal run of consecutively nested pairs:
/// (a,b), (a+1,b-1), ..., strictly one position inward per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stem {
    outer: Pair,
    inner: Pair,
}

impl Stem {
    /// Outermost pair of the run.
    pub fn outer(&self) -> Pair {
        self.outer
    }

    /// Innermost pair of the run.
    pub fn inner(&self) -> Pair {
        self.inner
    }

    /// Number of stacked pairs in the run.
    pub fn pairs(&self) -> usize {
        (self.inner.i() - self.outer.i()) as usize + 1
    }
}

/// Fixed-shape feature summary of one analyzed notation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureReport {
    pub total_length: usize,
    pub paired_bases: usize,
    pub unpaired_bases: usize,
    pub stems: usize,
    pub hairpin_loops: usize,
    pub internal_loops: usize,
    pub bulges: usize,
    /// Multiloop detection is not implemented; always zero.
    pub multiloops: usize,
    pub external_loops: usize,
}

/// Group pairs into stems.
///
/// Pairs are walked sorted by 5'-side index; pair *k* extends the current
/// run iff `i(k) == i(k-1) + 1` and `j(k) == j(k-1) - 1`. Any break
/// starts a new stem. Zero pairs means zero stems.
pub fn stems(pairs: &PairSet) -> Vec<Stem> {
    let sorted = pairs.to_vec();
    let mut runs = Vec::new();

    let mut it = sorted.into_iter();
    let Some(first) = it.next() else {
        return runs;
    };
    let mut outer = first;
    let mut inner = first;
    for p in it {
        if p.i() == inner.i() + 1 && p.j() + 1 == inner.j() {
            inner = p;
        } else {
            runs.push(Stem { outer, inner });
            outer = p;
            inner = p;
        }
    }
    runs.push(Stem { outer, inner });
    runs
}

/// Analyze a validated notation into a [`FeatureReport`].
///
/// Precondition: `pairs` must be the output of `validate` for this
/// exact `raw`. The analyzer does not re-validate; results for a
/// hand-built or mismatched pair set are unspecified.
///
/// Runs in time linear in notation length plus pair count.
pub fn analyze(raw: &str, pairs: &PairSet) -> FeatureReport {
    debug_assert_eq!(raw.len(), pairs.length());
    let bytes = raw.as_bytes();

    let mut report = FeatureReport {
        total_length: pairs.length(),
        paired_bases: pairs.paired_positions(),
        unpaired_bases: pairs.length() - pairs.paired_positions(),
        ..FeatureReport::default()
    };

    let runs = stems(pairs);
    report.stems = runs.len();

    // Loop region strictly inside each stem's innermost pair. An empty
    // interior (as in "()") counts no loop at all.
    for stem in &runs {
        let start = stem.inner().i() as usize + 1;
        let end = stem.inner().j() as usize; // exclusive
        if start < end {
            let nested = bytes[start..end].iter().any(|&b| b == b'(' || b == b')');
            if nested {
                report.internal_loops += 1;
            } else {
                report.hairpin_loops += 1;
            }
        }
    }

    // Gap window between consecutive stems: from one stem's innermost
    // 5'-side position + 1 up to the next stem's outermost 5'-side
    // position - 1.
    for w in runs.windows(2) {
        let gap_start = w[0].inner().i() as usize + 1;
        let gap_end = w[1].outer().i() as usize; // exclusive
        if gap_start < gap_end {
            let gap_len = gap_end - gap_start;
            if gap_len <= BULGE_MAX_GAP {
                report.bulges += 1;
            } else {
                report.internal_loops += 1;
            }
        }
    }

    // External loop: unpaired positions outside the outermost pair, or
    // the whole notation when nothing pairs.
    if runs.is_empty() {
        report.external_loops = 1;
    } else {
        let first_open = bytes.iter().position(|&b| b == b'(');
        let last_close = bytes.iter().rposition(|&b| b == b')');
        if let (Some(first), Some(last)) = (first_open, last_close) {
            if first > 0 || last + 1 < bytes.len() {
                report.external_loops = 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;

    const REFERENCE: &str = ".....(((.(..(.(((((.((((.((...)))).))))((((((...)).))))..(((...)))...))).)..).)))....................";

    fn report(raw: &str) -> FeatureReport {
        let pairs = validate(raw).unwrap();
        analyze(raw, &pairs)
    }

    #[test]
    fn test_stem_grouping() {
        let pairs = validate("((.((...))))").unwrap();
        let runs = stems(&pairs);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].outer(), Pair::new(0, 11));
        assert_eq!(runs[0].inner(), Pair::new(1, 10));
        assert_eq!(runs[0].pairs(), 2);
        assert_eq!(runs[1].outer(), Pair::new(3, 9));
        assert_eq!(runs[1].inner(), Pair::new(4, 8));
    }

    #[test]
    fn test_no_pairs_no_stems() {
        let pairs = validate("....").unwrap();
        assert!(stems(&pairs).is_empty());
    }

    #[test]
    fn test_single_hairpin() {
        let r = report("((..))");
        assert_eq!(r.total_length, 6);
        assert_eq!(r.paired_bases, 4);
        assert_eq!(r.unpaired_bases, 2);
        assert_eq!(r.stems, 1);
        assert_eq!(r.hairpin_loops, 1);
        assert_eq!(r.internal_loops, 0);
        assert_eq!(r.bulges, 0);
        assert_eq!(r.multiloops, 0);
        assert_eq!(r.external_loops, 0);
    }

    #[test]
    fn test_all_unpaired() {
        let r = report(".....");
        assert_eq!(r.total_length, 5);
        assert_eq!(r.paired_bases, 0);
        assert_eq!(r.unpaired_bases, 5);
        assert_eq!(r.stems, 0);
        assert_eq!(r.hairpin_loops, 0);
        assert_eq!(r.external_loops, 1);
    }

    #[test]
    fn test_empty_notation() {
        let r = report("");
        assert_eq!(r.total_length, 0);
        assert_eq!(r.external_loops, 1);
    }

    #[test]
    fn test_bulge_between_stems() {
        // One unpaired position between the outer and inner stem.
        let r = report("((.((...))))");
        assert_eq!(r.stems, 2);
        assert_eq!(r.hairpin_loops, 1);
        assert_eq!(r.internal_loops, 1);
        assert_eq!(r.bulges, 1);
        assert_eq!(r.external_loops, 0);
    }

    #[test]
    fn test_adjacent_pair_no_loop() {
        // Empty interior: neither hairpin nor internal loop.
        let r = report("(())");
        assert_eq!(r.stems, 1);
        assert_eq!(r.hairpin_loops, 0);
        assert_eq!(r.internal_loops, 0);
    }

    #[test]
    fn test_sibling_stems() {
        // The gap window between sibling stems spans the first hairpin
        // region, so it registers an internal loop as well.
        let r = report("((..))((..))");
        assert_eq!(r.stems, 2);
        assert_eq!(r.hairpin_loops, 2);
        assert_eq!(r.internal_loops, 1);
        assert_eq!(r.bulges, 0);
        assert_eq!(r.external_loops, 0);
    }

    #[test]
    fn test_dangling_ends_external() {
        let r = report("..((..))");
        assert_eq!(r.external_loops, 1);

        let r = report("(((...)))...((...))");
        assert_eq!(r.stems, 2);
        assert_eq!(r.hairpin_loops, 2);
        assert_eq!(r.internal_loops, 1);
        assert_eq!(r.external_loops, 0);
    }

    #[test]
    fn test_reference_structure() {
        let r = report(REFERENCE);
        assert_eq!(r.total_length, 101);
        assert_eq!(r.paired_bases, 50);
        assert_eq!(r.unpaired_bases, 51);
        assert_eq!(r.stems, 11);
        assert_eq!(r.hairpin_loops, 3);
        assert_eq!(r.internal_loops, 10);
        assert_eq!(r.bulges, 5);
        assert_eq!(r.multiloops, 0);
        assert_eq!(r.external_loops, 1);
    }
}
