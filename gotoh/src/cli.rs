//! Command-line parameters from which an aligner is instantiated.

use clap::Args;
use serde::{Deserialize, Serialize};

use gotoh_types::{
    Aligner, Cost, CostModel, ASCII_ALPHABET, DEFAULT_GAP_EXTEND, DEFAULT_GAP_OPEN, DEFAULT_MATCH,
    DEFAULT_MISMATCH,
};

use crate::{FullMatrix, LinearSpace};

/// Algorithm selection and cost constants.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[clap(next_help_heading = "Algorithm")]
pub struct AlignParams {
    /// Use the linear-space form: optimal cost only, no matrices.
    #[clap(long)]
    pub linear: bool,

    /// Cost of aligning two equal symbols.
    #[clap(long, default_value_t = DEFAULT_MATCH, hide_short_help = true)]
    pub match_cost: Cost,

    /// Cost of aligning two distinct symbols.
    #[clap(long, default_value_t = DEFAULT_MISMATCH, hide_short_help = true)]
    pub mismatch_cost: Cost,

    /// Cost of opening a gap (G).
    #[clap(long, default_value_t = DEFAULT_GAP_OPEN, hide_short_help = true)]
    pub gap_open: Cost,

    /// Cost of each gapped symbol (H).
    #[clap(long, default_value_t = DEFAULT_GAP_EXTEND, hide_short_help = true)]
    pub gap_extend: Cost,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            linear: false,
            match_cost: DEFAULT_MATCH,
            mismatch_cost: DEFAULT_MISMATCH,
            gap_open: DEFAULT_GAP_OPEN,
            gap_extend: DEFAULT_GAP_EXTEND,
        }
    }
}

impl AlignParams {
    /// The cost model these parameters describe. Built once; the table is
    /// immutable afterwards.
    pub fn model(&self) -> CostModel {
        CostModel::uniform(
            ASCII_ALPHABET,
            self.match_cost,
            self.mismatch_cost,
            self.gap_open,
            self.gap_extend,
        )
    }

    /// Build a type-erased aligner from the parameters.
    pub fn make_aligner(&self) -> Box<dyn Aligner> {
        if self.linear {
            Box::new(LinearSpace::new(self.model()))
        } else {
            Box::new(FullMatrix::new(self.model()))
        }
    }
}
