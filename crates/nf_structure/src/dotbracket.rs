//! Dot-bracket notation symbols.
//!
//! A notation is an ordered sequence of symbols over `{'.', '(', ')'}`:
//! '.' marks an unpaired position, matching '(' / ')' mark a pair.
//! The types here are purely syntactic; whether the brackets actually
//! balance is the validator's business.

use std::fmt;
use std::ops::Deref;

use crate::NAIDX;
use crate::PairSet;
use crate::StructureError;

/// One position of a dot-bracket notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotBracket {
    Unpaired,
    Open,
    Close,
}

impl DotBracket {
    /// Decode a notation character, `None` for anything outside the alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(DotBracket::Unpaired),
            '(' => Some(DotBracket::Open),
            ')' => Some(DotBracket::Close),
            _ => None,
        }
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> Self {
        match db {
            DotBracket::Unpaired => '.',
            DotBracket::Open => '(',
            DotBracket::Close => ')',
        }
    }
}

/// A full notation as a vector of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl DotBracketVec {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for DotBracketVec {
    type Target = [DotBracket];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    /// Syntactic decoding only; see `validate` for matching brackets.
    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        raw.chars()
            .enumerate()
            .map(|(at, c)| {
                DotBracket::from_char(c)
                    .ok_or(StructureError::InvalidSymbol { at, symbol: c })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(DotBracketVec)
    }
}

impl From<&PairSet> for DotBracketVec {
    /// Render a pair set back into notation. All positions not covered by
    /// a pair come out unpaired.
    fn from(pairs: &PairSet) -> Self {
        let mut dbv = vec![DotBracket::Unpaired; pairs.length()];
        for pair in pairs.iter() {
            dbv[pair.i() as usize] = DotBracket::Open;
            dbv[pair.j() as usize] = DotBracket::Close;
        }
        DotBracketVec(dbv)
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &db in self.iter() {
            write!(f, "{}", char::from(db))?;
        }
        Ok(())
    }
}

/// Render a 0-based pair collection of known length as a notation string.
pub fn notation_from_pairs(length: usize, pairs: &[(NAIDX, NAIDX)]) -> String {
    let mut dbv = vec![DotBracket::Unpaired; length];
    for &(i, j) in pairs {
        debug_assert!(i < j && (j as usize) < length);
        dbv[i as usize] = DotBracket::Open;
        dbv[j as usize] = DotBracket::Close;
    }
    DotBracketVec(dbv).to_string()
}
