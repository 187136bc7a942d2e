//! The nf_structure crate.
//!
//! Provides representations of nested RNA secondary structures:
//!  - DotBracket / DotBracketVec notation types
//!  - Pair / PairSet (compact integer-keyed pair storage)
//!
//! Provides validation and analysis over those representations.
//!  - strict validation (notation -> PairSet, or first error).
//!  - diagnostic validation (collect every issue in one scan).
//!  - structural feature analysis (stems, loops, bulges).
//!

mod error;
mod dotbracket;
mod pair_set;
mod validate;
mod features;

pub use error::*;
pub use dotbracket::*;
pub use pair_set::*;
pub use validate::*;
pub use features::*;


/// Nucleic Acid INdeX: we use `u16` (0 to 65k), which is plenty for nucleic acids.
/// Should you ever want to validate longer notations, beware that `P1KEY` needs to
/// be *twice as large* (in bits) as `NAIDX`, since pairs `(NAIDX, NAIDX)` are
/// compacted into one `P1KEY`.
pub type NAIDX = u16;

/// Pair key. Must be >= 2×`NAIDX` in bit width so we can safely pack two indices.
pub type P1KEY = u32;

/// Compile-time sanity check: 2×NAIDX bits must fit into P1KEY.
const _: () = {
    debug_assert!(2 * NAIDX::BITS <= P1KEY::BITS);
};
