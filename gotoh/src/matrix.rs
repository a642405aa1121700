//! Dense score matrices for the full-matrix aligner.

use std::fmt;
use std::ops::{Index, IndexMut};

use gotoh_types::Cost;

/// A `(rows × cols)` score matrix with an explicit per-cell undefined state.
///
/// Cells start out undefined and are committed exactly once during the
/// forward pass; a successful alignment leaves no cell undefined. The
/// undefined state exists for diagnostic rendering only and is never read
/// back by the recurrence.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    cells: Vec<Option<Cost>>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// A matrix with every cell undefined.
    pub fn undefined(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![None; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The value of a cell that is known to be computed.
    ///
    /// Panics on a cell that is still undefined; the fill order of the
    /// recurrence guarantees this never happens for cells it reads.
    #[inline]
    pub fn value(&self, i: usize, j: usize) -> Cost {
        self[(i, j)].expect("read of an undefined matrix cell")
    }

    /// True once no undefined cell remains.
    pub fn is_fully_defined(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Option<Cost>;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[i * self.cols + j]
    }
}

/// Row-major rendering: one row per line, cells tab-separated within a row,
/// defined cells formatted to two decimals, undefined cells as `undef`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    f.write_str("\t")?;
                }
                match self[(i, j)] {
                    Some(cost) => write!(f, "{cost:.2}")?,
                    None => f.write_str("undef")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// The three matrices of one full-matrix alignment.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrices {
    /// Best cost ending in a (mis)match, or the base case.
    pub c: Matrix,
    /// Best cost ending in a gap that consumes a symbol of `a`.
    pub d: Matrix,
    /// Best cost ending in a gap that consumes a symbol of `b`.
    pub i: Matrix,
}
