//! This module contains the substitution-table cost model with affine gap
//! constants.

use serde::{Deserialize, Serialize};

use crate::{AlignError, Cost, Seq};

/// Symbols are 7-bit character codes.
pub const ASCII_ALPHABET: usize = 128;

pub const DEFAULT_MATCH: Cost = 0.0;
pub const DEFAULT_MISMATCH: Cost = 1.0;
/// Gap open penalty (G).
pub const DEFAULT_GAP_OPEN: Cost = 2.0;
/// Gap extend penalty (H).
pub const DEFAULT_GAP_EXTEND: Cost = 0.5;

/// An affine-gap cost model: substituting `a` for `b` costs `sub_cost(a, b)`,
/// and a gap of length `k` costs `open + k * extend`.
///
/// The substitution table is built once at construction and never mutated
/// afterwards, so a single model can be shared (also across threads) by any
/// number of concurrent alignment calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Row-major `alphabet * alphabet` substitution table.
    sub: Vec<Cost>,
    alphabet: usize,
    /// Cost of opening a gap (G).
    pub open: Cost,
    /// Cost of each gapped symbol (H).
    pub extend: Cost,
}

impl CostModel {
    /// A table where every diagonal pair costs `match_cost` and every
    /// off-diagonal pair costs `mismatch_cost`.
    pub fn uniform(
        alphabet: usize,
        match_cost: Cost,
        mismatch_cost: Cost,
        open: Cost,
        extend: Cost,
    ) -> Self {
        let mut sub = vec![mismatch_cost; alphabet * alphabet];
        for s in 0..alphabet {
            sub[s * alphabet + s] = match_cost;
        }
        Self {
            sub,
            alphabet,
            open,
            extend,
        }
    }

    /// The classic edit model over 7-bit symbols: match 0, mismatch 1.
    pub fn edit(open: Cost, extend: Cost) -> Self {
        Self::uniform(
            ASCII_ALPHABET,
            DEFAULT_MATCH,
            DEFAULT_MISMATCH,
            open,
            extend,
        )
    }

    pub fn alphabet(&self) -> usize {
        self.alphabet
    }

    /// Substitution cost for a symbol pair. Both symbols must be inside the
    /// alphabet; run [`CostModel::validate`] on untrusted input first.
    #[inline]
    pub fn sub_cost(&self, a: u8, b: u8) -> Cost {
        debug_assert!((a as usize) < self.alphabet && (b as usize) < self.alphabet);
        self.sub[a as usize * self.alphabet + b as usize]
    }

    /// Check every symbol of `seq` against the alphabet, reporting the first
    /// violation. `name` identifies the offending input in the error.
    pub fn validate(&self, name: char, seq: Seq) -> Result<(), AlignError> {
        if let Some(pos) = seq.iter().position(|&s| s as usize >= self.alphabet) {
            return Err(AlignError::SymbolOutsideAlphabet {
                seq: name,
                pos,
                symbol: seq[pos],
                alphabet: self.alphabet,
            });
        }
        Ok(())
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::edit(DEFAULT_GAP_OPEN, DEFAULT_GAP_EXTEND)
    }
}
