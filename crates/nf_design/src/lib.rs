//! The nf_design crate.
//!
//! Fills a validated dot-bracket structure with concrete nucleotides:
//!  - Base: the A/C/G/U alphabet.
//!  - PairingPolicy: weighted distribution over complementary pairs.
//!  - design / design_from_notation: the sequence designer.
//!
//! All randomness flows through a caller-provided `rand::Rng`, so designs
//! are reproducible under a seeded generator and concurrent callers never
//! share random state.

mod bases;
mod policy;
mod designer;

pub use bases::*;
pub use policy::*;
pub use designer::*;
