//! Shared types for the `gotoh` aligners: sequences, costs, the affine
//! cost model, and the error taxonomy.

pub mod cost_model;

// Re-export for convenience of `use gotoh_types::*;`.
pub use cost_model::*;

use thiserror::Error;

/// A single alignment cost. Real-valued, since gap extension steps may be
/// fractional.
pub type Cost = f64;

/// A sequence borrowed for the duration of one alignment call.
pub type Seq<'a> = &'a [u8];

/// An owned sequence.
pub type Sequence = Vec<u8>;

pub fn seq_to_string(seq: Seq) -> String {
    String::from_utf8_lossy(seq).into_owned()
}

/// Errors reported by the aligners. Every variant is terminal for the
/// current alignment call; there are no retries and no partial results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// A symbol's code is not covered by the cost model's substitution
    /// table. Detected by up-front validation, never by indexing out of
    /// bounds mid-recurrence.
    #[error(
        "sequence {seq}: symbol {symbol:#04x} at position {pos} is outside the alphabet (size {alphabet})"
    )]
    SymbolOutsideAlphabet {
        seq: char,
        pos: usize,
        symbol: u8,
        alphabet: usize,
    },
}

/// A cost-only global aligner.
///
/// The test harness is generic over this seam so algorithmically distinct
/// implementations can be cross-checked on the same inputs.
pub trait Aligner {
    fn cost(&mut self, a: Seq, b: Seq) -> Result<Cost, AlignError>;
}
