//! Integration tests for the ordering algorithms
//!
//! Tests verify:
//! - Every ordering is a bijection over 0..n, including n = 0 and n = 1
//! - Degree ordering stability, RCM bandwidth behavior and component
//!   coverage, hierarchical determinism
//! - Optimal leaf ordering never increases the adjacent-leaf distance sum

mod common;

use common::{path_graph, random_symmetric, random_weighted};
use reordr::algorithm::ordering::hierarchy::adjacent_leaf_cost;
use reordr::algorithm::ordering::{
    HierarchyOptions, LinkageMethod, RcmOptions, count_ordering, hierarchical_ordering,
    leaves_list, linkage, nearest_neighbor_ordering, optimal_leaf_ordering, rcm, rcm_ordering,
    rcm_permutation,
};
use reordr::algorithm::{pdist_euclidean, squareform};
use reordr::error::ErrorKind;
use reordr::matrix::{Permutation, SquareMatrix, reorder, validate_permutation};

fn assert_bijection(p: &Permutation, n: usize) {
    assert!(validate_permutation(p.as_slice(), n).is_ok(), "{p:?}");
}

// ============================================================================
// Path graph 0-1-2-3
// ============================================================================

#[test]
fn test_path_graph_count_ordering() {
    assert_eq!(count_ordering(&path_graph(4)).as_slice(), &[0, 3, 1, 2]);
}

#[test]
fn test_path_graph_rcm_tridiagonal() {
    let m = path_graph(4);
    let out = rcm_permutation(&m).unwrap();
    assert_eq!(out.bandwidth(), 1);
    assert!(out.is_symmetric());
}

// ============================================================================
// Bijection on random inputs
// ============================================================================

#[test]
fn test_orderings_are_bijections() {
    for (n, seed) in [(0, 1), (1, 2), (2, 3), (7, 4), (20, 5)] {
        let m = random_symmetric(n, 0.25, seed);
        assert_bijection(&count_ordering(&m), n);
        assert_bijection(&nearest_neighbor_ordering(&m), n);
        assert_bijection(&rcm_ordering(&m).unwrap(), n);
        assert_bijection(
            &hierarchical_ordering(&m, &HierarchyOptions::default()).unwrap(),
            n,
        );
    }
}

#[test]
fn test_trivial_sizes_unchanged() {
    let empty = SquareMatrix::<u8>::zeros(0).unwrap();
    let single = SquareMatrix::from_rows(&[[0u8]]).unwrap();
    for m in [&empty, &single] {
        assert!(nearest_neighbor_ordering(m).is_identity());
        assert!(rcm_ordering(m).unwrap().is_identity());
        assert!(
            hierarchical_ordering(m, &HierarchyOptions::default())
                .unwrap()
                .is_identity()
        );
    }
}

// ============================================================================
// Degree
// ============================================================================

#[test]
fn test_count_ordering_stable_on_regular_graph() {
    // Cycle: every node has degree 2, so the order is unchanged.
    let n = 6;
    let mut data = vec![0u8; n * n];
    for i in 0..n {
        let j = (i + 1) % n;
        data[i * n + j] = 1;
        data[j * n + i] = 1;
    }
    let m = SquareMatrix::from_vec(data, n).unwrap();
    assert!(count_ordering(&m).is_identity());
}

// ============================================================================
// RCM
// ============================================================================

#[test]
fn test_rcm_recovers_scrambled_band() {
    // Square of a path: i ~ i+1 and i ~ i+2, bandwidth 2.
    let n = 30;
    let mut data = vec![0u8; n * n];
    for i in 0..n {
        for j in [i + 1, i + 2] {
            if j < n {
                data[i * n + j] = 1;
                data[j * n + i] = 1;
            }
        }
    }
    let band = SquareMatrix::from_vec(data, n).unwrap();

    for step in [7, 11, 13, 17, 19, 23] {
        let scramble = Permutation::new((0..n).map(|i| (i * step) % n).collect()).unwrap();
        let scrambled = reorder(&band, &scramble).unwrap();
        assert!(scrambled.bandwidth() > 3);

        // BFS levels are consecutive pairs, so neighbors end up at most
        // three positions apart.
        let out = rcm_permutation(&scrambled).unwrap();
        assert!(out.bandwidth() <= 3, "step {step}: {}", out.bandwidth());
        assert!(out.is_symmetric());
    }
}

#[test]
fn test_rcm_disconnected_covers_all_nodes() {
    // Block diagonal: a triangle {0, 2, 4}, an edge {1, 5}, isolated 3.
    let n = 6;
    let mut data = vec![0u8; n * n];
    for (i, j) in [(0, 2), (2, 4), (0, 4), (1, 5)] {
        data[i * n + j] = 1;
        data[j * n + i] = 1;
    }
    let m = SquareMatrix::from_vec(data, n).unwrap();
    let pattern = m.pattern();

    let (row_ptrs, col_indices) = (pattern.row_ptrs(), pattern.col_indices());
    let (perm, stats) = rcm(n, row_ptrs, col_indices, &RcmOptions::default()).unwrap();
    assert_eq!(stats.n_components, 3);
    let mut sorted = perm.clone();
    sorted.sort();
    assert_eq!(sorted, (0..n).collect::<Vec<_>>());

    let out = reorder(&m, &Permutation::new(perm).unwrap()).unwrap();
    assert!(out.bandwidth() <= 2);
}

#[test]
fn test_rcm_rejects_asymmetric() {
    let mut m = random_symmetric(8, 0.4, 7).into_vec();
    m[1] = 1;
    m[8] = 0;
    let m = SquareMatrix::from_vec(m, 8).unwrap();
    let err = rcm_ordering(&m).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

// ============================================================================
// Hierarchical clustering
// ============================================================================

#[test]
fn test_hierarchical_complete_deterministic() {
    let m = random_weighted(15, 21);
    let opts = HierarchyOptions::default();
    let runs: Vec<Permutation> = (0..3)
        .map(|_| hierarchical_ordering(&m, &opts).unwrap())
        .collect();
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
    assert_eq!(runs[0].len(), 15);
}

#[test]
fn test_optimal_leaf_ordering_never_worse() {
    for seed in 0..6 {
        let m = random_weighted(12, 100 + seed);
        let condensed = pdist_euclidean(&m);
        let dense = squareform(&condensed, 12).unwrap().into_vec();

        for method in LinkageMethod::ALL {
            let z = linkage(&condensed, 12, method).unwrap();
            let ordered = optimal_leaf_ordering(&z, &condensed).unwrap();
            let before = adjacent_leaf_cost(&leaves_list(&z), &dense, 12);
            let after = adjacent_leaf_cost(&leaves_list(&ordered), &dense, 12);
            assert!(
                after <= before + 1e-9,
                "seed {seed}, {method}: {after} > {before}"
            );
        }
    }
}

#[test]
fn test_optimal_leaf_ordering_matches_brute_force() {
    // Exhaustive search over all 2^(n-1) child flips on a small tree.
    let m = random_weighted(7, 42);
    let condensed = pdist_euclidean(&m);
    let dense = squareform(&condensed, 7).unwrap().into_vec();
    let z = linkage(&condensed, 7, LinkageMethod::Average).unwrap();

    let mut best = f64::INFINITY;
    for mask in 0u32..(1 << 6) {
        let rows: Vec<[f64; 4]> = z
            .rows()
            .iter()
            .enumerate()
            .map(|(s, row)| {
                if mask & (1 << s) != 0 {
                    [row[1], row[0], row[2], row[3]]
                } else {
                    *row
                }
            })
            .collect();
        let flipped = reordr::algorithm::ordering::LinkageMatrix::new(rows, 7).unwrap();
        best = best.min(adjacent_leaf_cost(&leaves_list(&flipped), &dense, 7));
    }

    let ordered = optimal_leaf_ordering(&z, &condensed).unwrap();
    let cost = adjacent_leaf_cost(&leaves_list(&ordered), &dense, 7);
    assert!((cost - best).abs() < 1e-9, "{cost} vs brute force {best}");
}

#[test]
fn test_hierarchical_groups_identical_rows() {
    // Rows 0, 2, 4 are identical, as are rows 1, 3, 5.
    let n = 6;
    let mut data = vec![0u8; n * n];
    for i in 0..n {
        for j in 0..n {
            if (i + j) % 2 == 1 {
                data[i * n + j] = 1;
            }
        }
    }
    let m = SquareMatrix::from_vec(data, n).unwrap();
    let p = hierarchical_ordering(&m, &HierarchyOptions::with_method(LinkageMethod::Single))
        .unwrap();

    let parity: Vec<usize> = p.as_slice().iter().map(|i| i % 2).collect();
    let switches = parity.windows(2).filter(|w| w[0] != w[1]).count();
    assert_eq!(switches, 1, "{:?}", p.as_slice());
}
