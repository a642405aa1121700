//! The linear-space form of the recurrence.
//!
//! Computes the same optimal cost as the full-matrix form with two rolling
//! row buffers and a handful of scalars, O(N) memory in total. This is the
//! space reduction that divide-and-conquer traceback (Hirschberg,
//! Myers–Miller) is built on, although no traceback happens here.
//!
//! Correctness hinges on the order of reads and writes inside the inner
//! loop: `dd[j]` and `cc[j]` must be read while they still hold row `i-1`,
//! and the diagonal predecessor must be saved in `s` before `cc[j]` is
//! overwritten. The row update is therefore written as a scalar pipeline
//! (`s`, `c`, `e`) flowing left to right, with the buffer commit last.

use itertools::Itertools;

use gotoh_types::{AlignError, Aligner, Cost, CostModel, Seq};

/// Affine-gap global aligner returning the optimal cost only.
#[derive(Clone, Debug, Default)]
pub struct LinearSpace {
    pub cm: CostModel,
}

impl LinearSpace {
    pub fn new(cm: CostModel) -> Self {
        Self { cm }
    }

    /// Optimal cost of globally aligning `a` to `b`.
    ///
    /// Bit-identical to [`crate::FullMatrix::align`]'s cost for the same
    /// inputs: both forms perform the same floating-point operations in the
    /// same order within each row.
    pub fn cost(&self, a: Seq, b: Seq) -> Result<Cost, AlignError> {
        self.cm.validate('a', a)?;
        self.cm.validate('b', b)?;

        let (m, n) = (a.len(), b.len());
        let (open, extend) = (self.cm.open, self.cm.extend);

        // After row i is processed, cc[j] holds C[i][j] and dd[j] holds
        // D[i][j]; the I dimension only flows left to right and lives in
        // the scalar e.
        let mut cc = vec![0.0; n + 1];
        let mut dd = vec![0.0; n + 1];

        // Row 0: identical leading-gap accumulator to the full form.
        let mut t = open;
        for j in 1..=n {
            t += extend;
            cc[j] = t;
            dd[j] = t + open;
        }

        t = open;
        for i in 1..=m {
            // C[i-1][0], saved before cc[0] is overwritten below.
            let mut s = cc[0];
            t += extend;
            // c tracks C[i][j-1] as j advances.
            let mut c = t;
            cc[0] = c;
            // I[i][0]; not stored beyond this row.
            let mut e = t + open;

            for j in 1..=n {
                // I[i][j]: extend the running gap or open a new one.
                e = e.min(c + open) + extend;
                // D[i][j]: dd[j] and cc[j] still hold row i-1 here.
                dd[j] = dd[j].min(cc[j] + open) + extend;
                c = dd[j].min(e).min(s + self.cm.sub_cost(a[i - 1], b[j - 1]));
                // Save the diagonal predecessor for column j+1, then commit.
                s = cc[j];
                cc[j] = c;
            }
        }

        if log::log_enabled!(log::Level::Debug) {
            log::debug!("CC {}", cc.iter().map(|v| format!("{v:.2}")).join(" "));
            log::debug!("DD {}", dd.iter().map(|v| format!("{v:.2}")).join(" "));
        }

        Ok(cc[n])
    }
}

impl Aligner for LinearSpace {
    fn cost(&mut self, a: Seq, b: Seq) -> Result<Cost, AlignError> {
        LinearSpace::cost(self, a, b)
    }
}
