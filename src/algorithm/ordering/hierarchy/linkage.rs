//! Agglomerative linkage over a condensed distance vector.

use std::fmt;
use std::str::FromStr;

use crate::algorithm::distance::condensed_index;
use crate::error::{Error, Result};

/// Linkage method for hierarchical clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LinkageMethod {
    /// Minimum distance between clusters.
    Single,
    /// Maximum distance between clusters.
    #[default]
    Complete,
    /// Average distance between all pairs (UPGMA).
    Average,
    /// Weighted average (WPGMA).
    Weighted,
    /// Distance between centroids (UPGMC).
    Centroid,
    /// Weighted centroid (WPGMC).
    Median,
    /// Minimize within-cluster variance.
    Ward,
}

impl LinkageMethod {
    /// Every method, in declaration order
    pub const ALL: [LinkageMethod; 7] = [
        LinkageMethod::Single,
        LinkageMethod::Complete,
        LinkageMethod::Average,
        LinkageMethod::Weighted,
        LinkageMethod::Centroid,
        LinkageMethod::Median,
        LinkageMethod::Ward,
    ];

    /// Lowercase method name (`"single"`, `"ward"`, ...)
    pub const fn name(self) -> &'static str {
        match self {
            LinkageMethod::Single => "single",
            LinkageMethod::Complete => "complete",
            LinkageMethod::Average => "average",
            LinkageMethod::Weighted => "weighted",
            LinkageMethod::Centroid => "centroid",
            LinkageMethod::Median => "median",
            LinkageMethod::Ward => "ward",
        }
    }

    /// Lance-Williams update: distance from cluster `k` to the union of
    /// clusters `i` and `j`.
    ///
    /// `d_ki`, `d_kj`, `d_ij` are the current pairwise cluster distances and
    /// `n_i`, `n_j`, `n_k` the cluster sizes.
    fn update(self, d_ki: f64, d_kj: f64, d_ij: f64, n_i: f64, n_j: f64, n_k: f64) -> f64 {
        match self {
            LinkageMethod::Single => d_ki.min(d_kj),
            LinkageMethod::Complete => d_ki.max(d_kj),
            LinkageMethod::Average => (n_i * d_ki + n_j * d_kj) / (n_i + n_j),
            LinkageMethod::Weighted => (d_ki + d_kj) / 2.0,
            LinkageMethod::Centroid => {
                let n_ij = n_i + n_j;
                let sq = (n_i * d_ki * d_ki + n_j * d_kj * d_kj) / n_ij
                    - n_i * n_j * d_ij * d_ij / (n_ij * n_ij);
                sq.max(0.0).sqrt()
            }
            LinkageMethod::Median => {
                let sq = d_ki * d_ki / 2.0 + d_kj * d_kj / 2.0 - d_ij * d_ij / 4.0;
                sq.max(0.0).sqrt()
            }
            LinkageMethod::Ward => {
                let total = n_i + n_j + n_k;
                let sq = ((n_i + n_k) * d_ki * d_ki + (n_j + n_k) * d_kj * d_kj
                    - n_k * d_ij * d_ij)
                    / total;
                sq.max(0.0).sqrt()
            }
        }
    }
}

impl fmt::Display for LinkageMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LinkageMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LinkageMethod::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::invalid_argument("method", format!("unknown linkage method '{s}'"))
            })
    }
}

/// Linkage matrix [n-1, 4]: each row is [id1, id2, distance, count].
///
/// Ids below `n` are leaves (original rows); the cluster formed by row `s`
/// gets id `n + s`. `count` is the number of leaves under the new cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkageMatrix {
    rows: Vec<[f64; 4]>,
    n: usize,
}

impl LinkageMatrix {
    /// Validate and wrap a linkage matrix over `n` leaves
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the row count is not `n - 1` (no rows when `n <= 1`)
    /// - a child id is not an integer below `n + s` or is merged twice
    /// - a distance is NaN or a count is not the sum of its children's
    pub fn new(rows: Vec<[f64; 4]>, n: usize) -> Result<Self> {
        let expected = n.saturating_sub(1);
        if rows.len() != expected {
            return Err(Error::shape_mismatch(&[expected, 4], &[rows.len(), 4]));
        }

        let mut counts = vec![1usize; n];
        let mut merged = vec![false; n + expected];
        for (s, row) in rows.iter().enumerate() {
            let mut count = 0;
            for &id in &row[..2] {
                if id.fract() != 0.0 || id < 0.0 || id >= (n + s) as f64 {
                    return Err(Error::invalid_argument(
                        "linkage",
                        format!("row {s}: invalid cluster id {id}"),
                    ));
                }
                let id = id as usize;
                if merged[id] {
                    return Err(Error::invalid_argument(
                        "linkage",
                        format!("row {s}: cluster {id} merged twice"),
                    ));
                }
                merged[id] = true;
                count += counts[id];
            }
            if row[2].is_nan() {
                return Err(Error::invalid_argument("linkage", format!("row {s}: NaN distance")));
            }
            if row[3] != count as f64 {
                return Err(Error::invalid_argument(
                    "linkage",
                    format!("row {s}: count {} does not match {count} leaves", row[3]),
                ));
            }
            counts.push(count);
        }

        Ok(Self { rows, n })
    }

    /// Number of leaves (original observations)
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.n
    }

    /// Merge rows in creation order
    #[inline]
    pub fn rows(&self) -> &[[f64; 4]] {
        &self.rows
    }

    /// Child ids of merge `s`
    #[inline]
    pub(crate) fn children(&self, s: usize) -> (usize, usize) {
        (self.rows[s][0] as usize, self.rows[s][1] as usize)
    }

    /// Swap the two children of merge `s`
    pub(crate) fn swap_children(&mut self, s: usize) {
        self.rows[s].swap(0, 1);
    }
}

/// Compute linkage from a condensed distance vector.
///
/// Naive agglomeration: each step merges the closest pair of active
/// clusters and updates distances with the Lance-Williams formula of
/// `method`. The pair search scans `(i, j)` ascending with strict `<`, so
/// the lowest pair wins ties. The merged cluster takes the lower slot.
///
/// # Arguments
///
/// * `condensed` - Upper-triangle distances, length `n * (n - 1) / 2`
/// * `n` - Number of observations
/// * `method` - Linkage criterion
///
/// # Errors
///
/// - [`Error::ShapeMismatch`] if the condensed length does not match `n`
/// - [`Error::InvalidArgument`] if a distance is not finite
pub fn linkage(condensed: &[f64], n: usize, method: LinkageMethod) -> Result<LinkageMatrix> {
    let expected = n * n.saturating_sub(1) / 2;
    if condensed.len() != expected {
        return Err(Error::shape_mismatch(&[expected], &[condensed.len()]));
    }
    if let Some(pos) = condensed.iter().position(|d| !d.is_finite()) {
        return Err(Error::invalid_argument(
            "condensed",
            format!("distance at position {pos} is not finite"),
        ));
    }

    let mut dist = vec![0.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = condensed[condensed_index(n, i, j)];
            dist[i * n + j] = d;
            dist[j * n + i] = d;
        }
    }

    let mut active = vec![true; n];
    let mut size = vec![1usize; n];
    let mut cluster_id: Vec<usize> = (0..n).collect();
    let mut rows = Vec::with_capacity(n.saturating_sub(1));

    for step in 0..n.saturating_sub(1) {
        // Closest active pair
        let mut best: Option<(usize, usize, f64)> = None;
        for i in (0..n).filter(|&i| active[i]) {
            for j in ((i + 1)..n).filter(|&j| active[j]) {
                let d = dist[i * n + j];
                match best {
                    Some((_, _, bd)) if d >= bd => {}
                    _ => best = Some((i, j, d)),
                }
            }
        }
        let Some((i, j, d_ij)) = best else {
            break;
        };

        let (n_i, n_j) = (size[i] as f64, size[j] as f64);
        for k in (0..n).filter(|&k| active[k] && k != i && k != j) {
            let d = method.update(
                dist[k * n + i],
                dist[k * n + j],
                d_ij,
                n_i,
                n_j,
                size[k] as f64,
            );
            dist[i * n + k] = d;
            dist[k * n + i] = d;
        }

        let (a, b) = (cluster_id[i], cluster_id[j]);
        rows.push([
            a.min(b) as f64,
            a.max(b) as f64,
            d_ij,
            (size[i] + size[j]) as f64,
        ]);

        active[j] = false;
        size[i] += size[j];
        cluster_id[i] = n + step;
    }

    Ok(LinkageMatrix { rows, n })
}

/// Return leaves in dendrogram order.
///
/// Left-to-right traversal: the first child of every merge row is visited
/// before the second.
pub fn leaves_list(z: &LinkageMatrix) -> Vec<usize> {
    let n = z.n_leaves();
    if n <= 1 {
        return (0..n).collect();
    }

    let mut order = Vec::with_capacity(n);
    let mut stack = vec![2 * n - 2];
    while let Some(node) = stack.pop() {
        if node < n {
            order.push(node);
        } else {
            let (left, right) = z.children(node - n);
            stack.push(right);
            stack.push(left);
        }
    }
    order
}
