use std::path::PathBuf;

use clap::{value_parser, Parser};

use gotoh::cli::AlignParams;

/// Optimal global alignment cost of two sequences under affine gap costs.
#[derive(Parser, Debug)]
#[clap(author, about, disable_version_flag(true))]
pub struct Cli {
    /// First sequence.
    #[clap(value_name = "SEQUENCE1")]
    pub seq_a: String,

    /// Second sequence.
    #[clap(value_name = "SEQUENCE2")]
    pub seq_b: String,

    /// Write a JSON report of `{cost, params}`.
    #[clap(short, long, value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    #[clap(flatten)]
    pub params: AlignParams,
}
