//! Common test utilities
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reordr::matrix::SquareMatrix;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Adjacency matrix of the path graph 0-1-...-(n-1)
pub fn path_graph(n: usize) -> SquareMatrix<u8> {
    let mut data = vec![0u8; n * n];
    for i in 1..n {
        data[i * n + i - 1] = 1;
        data[(i - 1) * n + i] = 1;
    }
    SquareMatrix::from_vec(data, n).unwrap()
}

/// Random symmetric 0/1 matrix with zero diagonal, reproducible from `seed`
pub fn random_symmetric(n: usize, density: f64, seed: u64) -> SquareMatrix<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(density) {
                data[i * n + j] = 1;
                data[j * n + i] = 1;
            }
        }
    }
    SquareMatrix::from_vec(data, n).unwrap()
}

/// Random symmetric matrix of nonnegative weights in [0, 1)
pub fn random_weighted(n: usize, seed: u64) -> SquareMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let w: f64 = rng.random();
            data[i * n + j] = w;
            data[j * n + i] = w;
        }
    }
    SquareMatrix::from_vec(data, n).unwrap()
}

/// Sorted copy of every entry, for multiset comparisons
pub fn sorted_entries(m: &SquareMatrix<f64>) -> Vec<f64> {
    let mut v = m.as_slice().to_vec();
    v.sort_by(f64::total_cmp);
    v
}

/// Labels "n0".."n{n-1}"
pub fn node_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("n{i}")).collect()
}
