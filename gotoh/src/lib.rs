//!
//! # Gotoh affine-gap alignment
//!
//! Minimum-cost global alignment of two symbol sequences under an affine gap
//! penalty: a gap of length `k` costs `open + k * extend`, which models long
//! insertions/deletions better than a flat per-symbol penalty.
//!
//! The same recurrence is implemented in two algorithmically distinct forms:
//! - [`FullMatrix`] materializes the complete `C`/`D`/`I` score matrices,
//!   which can be rendered or inspected after the fact.
//! - [`LinearSpace`] keeps only two rolling row buffers and a handful of
//!   scalars, the space reduction underlying divide-and-conquer traceback
//!   (Hirschberg, Myers–Miller).
//!
//! Both forms perform the identical floating-point operations in the same
//! order within each row, so their costs are equal bit-for-bit, not merely
//! approximately. Neither reconstructs an alignment path; only the optimal
//! cost is produced.

pub mod cli;
pub mod full;
pub mod linear;
pub mod matrix;

#[cfg(test)]
mod tests;

pub use full::FullMatrix;
pub use linear::LinearSpace;
pub use matrix::{Matrices, Matrix};
