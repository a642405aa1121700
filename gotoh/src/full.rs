//! The full-matrix form of the recurrence.
//!
//! Fills all three `(M+1)×(N+1)` score matrices in a single row-major pass
//! and returns them together with the optimal cost. Quadratic memory, but
//! the matrices can afterwards be rendered or fed to tooling that needs the
//! whole score landscape.

use gotoh_types::{AlignError, Aligner, Cost, CostModel, Seq};

use crate::matrix::{Matrices, Matrix};

/// Affine-gap global aligner that materializes the complete score matrices.
///
/// `C[i][j]` is the best cost of aligning `a[..i]` to `b[..j]` ending in a
/// (mis)match or the base case, `D[i][j]` ending in a gap that consumes a
/// symbol of `a`, and `I[i][j]` ending in a gap that consumes a symbol of
/// `b`.
#[derive(Clone, Debug, Default)]
pub struct FullMatrix {
    pub cm: CostModel,
}

impl FullMatrix {
    pub fn new(cm: CostModel) -> Self {
        Self { cm }
    }

    /// Optimal cost of globally aligning `a` to `b`, plus the fully
    /// populated matrices.
    pub fn align(&self, a: Seq, b: Seq) -> Result<(Cost, Matrices), AlignError> {
        self.cm.validate('a', a)?;
        self.cm.validate('b', b)?;

        let (m, n) = (a.len(), b.len());
        let (open, extend) = (self.cm.open, self.cm.extend);

        let mut c = Matrix::undefined(m + 1, n + 1);
        let mut d = Matrix::undefined(m + 1, n + 1);
        let mut ins = Matrix::undefined(m + 1, n + 1);

        c[(0, 0)] = Some(0.0);
        d[(0, 0)] = Some(open);
        ins[(0, 0)] = Some(open);

        // Leading gap along b, accumulated step by step: the boundary costs
        // are the exact floating-point values the recurrence builds on.
        // I is never read on this row; it gets the same gap-open convention
        // so the matrices render complete.
        let mut t = open;
        for j in 1..=n {
            t += extend;
            c[(0, j)] = Some(t);
            d[(0, j)] = Some(t + open);
            ins[(0, j)] = Some(t + open);
        }

        // Leading gap along a, with an independently re-seeded accumulator.
        // D is never read in this column; same display convention.
        let mut t = open;
        for i in 1..=m {
            t += extend;
            c[(i, 0)] = Some(t);
            ins[(i, 0)] = Some(t + open);
            d[(i, 0)] = Some(t + open);
        }

        // Row-major fill: each cell depends on the cell above, the cell to
        // the left, and the diagonal.
        for i in 1..=m {
            for j in 1..=n {
                let ins_ij = ins.value(i, j - 1).min(c.value(i, j - 1) + open) + extend;
                ins[(i, j)] = Some(ins_ij);

                let d_ij = d.value(i - 1, j).min(c.value(i - 1, j) + open) + extend;
                d[(i, j)] = Some(d_ij);

                let diag = c.value(i - 1, j - 1) + self.cm.sub_cost(a[i - 1], b[j - 1]);
                c[(i, j)] = Some(d_ij.min(ins_ij).min(diag));
            }
        }

        let cost = c.value(m, n);
        Ok((cost, Matrices { c, d, i: ins }))
    }
}

impl Aligner for FullMatrix {
    fn cost(&mut self, a: Seq, b: Seq) -> Result<Cost, AlignError> {
        self.align(a, b).map(|(cost, _)| cost)
    }
}
