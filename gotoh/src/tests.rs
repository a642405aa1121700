use gotoh_test::{test_aligner_against, test_costs_match_levenshtein, test_sequences};
use gotoh_types::{AlignError, Aligner, CostModel, ASCII_ALPHABET};

use crate::cli::AlignParams;
use crate::{FullMatrix, LinearSpace, Matrix};

/// Cross-check the linear-space form against the full-matrix form: costs
/// must compare exactly, not approximately.
fn cross(cm: CostModel) {
    test_aligner_against(LinearSpace::new(cm.clone()), FullMatrix::new(cm));
}

#[test]
fn classic_costs() {
    cross(CostModel::default());
}

#[test]
fn integral_affine_costs() {
    cross(CostModel::edit(3.0, 1.0));
}

#[test]
fn fractional_affine_costs() {
    cross(CostModel::edit(1.5, 0.25));
}

#[test]
fn unit_costs() {
    cross(CostModel::edit(0.0, 1.0));
}

#[test]
fn weighted_mismatch_costs() {
    cross(CostModel::uniform(ASCII_ALPHABET, 0.0, 2.5, 2.0, 0.5));
}

#[test]
fn unit_costs_match_levenshtein() {
    test_costs_match_levenshtein(&mut FullMatrix::new(CostModel::edit(0.0, 1.0)));
    test_costs_match_levenshtein(&mut LinearSpace::new(CostModel::edit(0.0, 1.0)));
}

#[test]
fn aligning_a_sequence_with_itself_is_free() {
    let mut full = FullMatrix::default();
    let mut linear = LinearSpace::default();
    for (a, _) in test_sequences() {
        assert_eq!(full.cost(&a, &a).unwrap(), 0.0);
        assert_eq!(linear.cost(&a, &a).unwrap(), 0.0);
    }
}

#[test]
fn cost_is_symmetric_for_this_model() {
    let mut full = FullMatrix::default();
    for (a, b) in test_sequences() {
        assert_eq!(full.cost(&a, &b).unwrap(), full.cost(&b, &a).unwrap());
    }
}

#[test]
fn leading_gap_boundary() {
    let mut full = FullMatrix::default();
    let mut linear = LinearSpace::default();
    // The boundary row is an accumulator: G + k*H with G=2, H=0.5.
    assert_eq!(full.cost(b"", b"A").unwrap(), 2.5);
    assert_eq!(linear.cost(b"", b"A").unwrap(), 2.5);
    assert_eq!(full.cost(b"", b"AAA").unwrap(), 3.5);
    assert_eq!(linear.cost(b"", b"AAA").unwrap(), 3.5);
    assert_eq!(full.cost(b"ACGT", b"").unwrap(), 4.0);
    assert_eq!(linear.cost(b"ACGT", b"").unwrap(), 4.0);
    assert_eq!(full.cost(b"", b"").unwrap(), 0.0);
    assert_eq!(linear.cost(b"", b"").unwrap(), 0.0);
}

#[test]
fn concrete_costs() {
    let mut full = FullMatrix::default();
    assert_eq!(full.cost(b"AGT", b"AGT").unwrap(), 0.0);
    // One trailing deletion: open 2 + extend 0.5.
    assert_eq!(full.cost(b"AGT", b"AG").unwrap(), 2.5);
}

#[test]
fn appending_mismatches_never_improves_the_cost() {
    let mut full = FullMatrix::default();
    let a = b"ACGTACGT";
    let mut b = b"ACTACG".to_vec();
    let mut last = full.cost(a, &b).unwrap();
    for _ in 0..6 {
        // '#' matches nothing in a.
        b.push(b'#');
        let cost = full.cost(a, &b).unwrap();
        assert!(cost >= last, "cost {cost} < {last} after appending to b");
        last = cost;
    }
}

#[test]
fn matrices_are_fully_populated() {
    let (cost, matrices) = FullMatrix::default().align(b"AGT", b"AG").unwrap();
    assert_eq!(cost, 2.5);
    for m in [&matrices.c, &matrices.d, &matrices.i] {
        assert_eq!(m.rows(), 4);
        assert_eq!(m.cols(), 3);
        assert!(m.is_fully_defined());
    }
    // Row 0 of C holds the accumulated leading-gap costs.
    assert_eq!(matrices.c[(0, 0)], Some(0.0));
    assert_eq!(matrices.c[(0, 1)], Some(2.5));
    assert_eq!(matrices.c[(0, 2)], Some(3.0));
    // Boundary gap layers sit one gap-open above the C boundary.
    assert_eq!(matrices.d[(0, 2)], Some(5.0));
    assert_eq!(matrices.i[(1, 0)], Some(4.5));
    assert_eq!(matrices.c[(3, 2)], Some(2.5));
}

#[test]
fn matrix_rendering() {
    let mut m = Matrix::undefined(2, 2);
    m[(0, 0)] = Some(0.0);
    m[(0, 1)] = Some(2.5);
    m[(1, 1)] = Some(1.0);
    assert_eq!(m.to_string(), "0.00\t2.50\nundef\t1.00\n");
}

#[test]
fn symbols_outside_the_alphabet_are_rejected() {
    let cm = CostModel::uniform(4, 0.0, 1.0, 2.0, 0.5);
    let mut full = FullMatrix::new(cm.clone());
    let mut linear = LinearSpace::new(cm);
    let err = AlignError::SymbolOutsideAlphabet {
        seq: 'b',
        pos: 1,
        symbol: 7,
        alphabet: 4,
    };
    assert_eq!(full.cost(&[0, 1], &[2, 7]), Err(err.clone()));
    assert_eq!(linear.cost(&[0, 1], &[2, 7]), Err(err));
}

#[test]
fn params_build_working_aligners() {
    let mut params = AlignParams::default();
    assert_eq!(params.make_aligner().cost(b"AGT", b"AG").unwrap(), 2.5);
    params.linear = true;
    assert_eq!(params.make_aligner().cost(b"AGT", b"AG").unwrap(), 2.5);
    // open=0, extend=1 degenerates to plain edit distance.
    params.gap_open = 0.0;
    params.gap_extend = 1.0;
    assert_eq!(params.make_aligner().cost(b"AGT", b"AG").unwrap(), 1.0);
}
