//! Shared test harness for the gotoh aligners.
//!
//! Provides a fixed set of hardcoded sequence pairs, a deterministic
//! generator of mutated pairs, and assertion helpers that cross-check one
//! aligner against another (or against an independent edit-distance oracle
//! for the degenerate cost model).

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use gotoh_types::{seq_to_string, Aligner, Cost, Seq, Sequence};

const NUCLEOTIDES: [u8; 4] = *b"ACGT";

/// Hand-picked pairs covering empty inputs, pure gaps, repeats, and a mix
/// of substitutions and indels.
pub fn test_sequences() -> Vec<(Sequence, Sequence)> {
    let pairs: Vec<(Seq, Seq)> = vec![
        (b"", b""),
        (b"", b"A"),
        (b"ACGT", b""),
        (b"AGT", b"AGT"),
        (b"AGT", b"AG"),
        (b"ACTGACCAGT", b"CCGACAGGA"),
        (b"AGTTTTAT", b"ACCGATTTTTA"),
        (b"CTCTCTTCTCTCTCTA", b"CCTCTCTCTCTCCTCTC"),
        (b"AGTGGGTTGCCTTCATTCCG", b"AGTGGTGTCTTCAGGCCTTCATTCCG"),
        (b"GCACGTCGCCCCCCGCCCGCG", b"GCCCGCCCGCCCGCCCCCGCCCCC"),
    ];
    pairs
        .into_iter()
        .map(|(a, b)| (a.to_vec(), b.to_vec()))
        .collect()
}

fn random_seq(n: usize, rng: &mut ChaCha8Rng) -> Sequence {
    (0..n).map(|_| NUCLEOTIDES[rng.gen_range(0..4)]).collect()
}

/// A copy of `a` with substitutions, insertions, and deletions applied
/// uniformly at rate `e`.
fn mutate(a: &[u8], e: f32, rng: &mut ChaCha8Rng) -> Sequence {
    let mut b = Vec::with_capacity(a.len() + 8);
    for &ch in a {
        if rng.gen::<f32>() < e {
            match rng.gen_range(0..3) {
                0 => b.push(NUCLEOTIDES[rng.gen_range(0..4)]),
                1 => {
                    b.push(NUCLEOTIDES[rng.gen_range(0..4)]);
                    b.push(ch);
                }
                _ => {}
            }
        } else {
            b.push(ch);
        }
    }
    b
}

/// Deterministic generated pairs: a grid of lengths and error rates, each
/// expanded from a fixed seed so failures reproduce exactly.
pub fn gen_seqs() -> impl Iterator<Item = ((Sequence, Sequence), (usize, f32, u64))> {
    let ns = vec![0usize, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89];
    let es = vec![0.0f32, 0.05, 0.2, 0.5, 1.0];
    let seeds = [31415u64];
    ns.into_iter()
        .cartesian_product(es)
        .cartesian_product(seeds)
        .map(|((n, e), seed)| {
            let rng = &mut ChaCha8Rng::seed_from_u64(seed ^ n as u64);
            let a = random_seq(n, rng);
            let b = mutate(&a, e, rng);
            ((a, b), (n, e, seed))
        })
}

/// Assert that `aligner` and `reference` report the same cost on one input.
pub fn test_aligner_on_input(
    a: Seq,
    b: Seq,
    aligner: &mut dyn Aligner,
    reference: &mut dyn Aligner,
    params: &str,
) {
    let expected = reference.cost(a, b).unwrap();
    let cost = aligner.cost(a, b).unwrap();
    // Exact comparison on purpose: both forms share their floating-point
    // operation order.
    assert_eq!(
        expected,
        cost,
        "\n{params}\nlet a = \"{}\";\nlet b = \"{}\";",
        seq_to_string(a),
        seq_to_string(b),
    );
}

/// Cross-check `aligner` against `reference` on the hardcoded pairs and the
/// generated grid.
pub fn test_aligner_against(mut aligner: impl Aligner, mut reference: impl Aligner) {
    for (a, b) in test_sequences() {
        test_aligner_on_input(&a, &b, &mut aligner, &mut reference, "hardcoded pair");
    }
    for ((a, b), (n, e, seed)) in gen_seqs() {
        test_aligner_on_input(
            &a,
            &b,
            &mut aligner,
            &mut reference,
            &format!("seed {seed:>6} n {n:>4} e {e:>.2}"),
        );
    }
}

/// For a model where a gap of length `k` costs exactly `k` and a mismatch
/// costs 1, the optimal cost equals plain edit distance. Check against an
/// independent implementation.
pub fn test_costs_match_levenshtein(aligner: &mut dyn Aligner) {
    fn check(a: Seq, b: Seq, aligner: &mut dyn Aligner, params: &str) {
        let expected = triple_accel::levenshtein_exp(a, b) as Cost;
        let cost = aligner.cost(a, b).unwrap();
        assert_eq!(
            expected,
            cost,
            "\n{params}\nlet a = \"{}\";\nlet b = \"{}\";",
            seq_to_string(a),
            seq_to_string(b),
        );
    }
    for (a, b) in test_sequences() {
        check(&a, &b, aligner, "hardcoded pair");
    }
    for ((a, b), (n, e, seed)) in gen_seqs() {
        check(&a, &b, aligner, &format!("seed {seed:>6} n {n:>4} e {e:>.2}"));
    }
}
