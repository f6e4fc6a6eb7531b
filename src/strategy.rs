//! Named reordering strategies
//!
//! [`Strategy::REGISTRY`] is the fixed, ordered list of choices offered to
//! users, each under its display label. Every strategy shares one contract:
//! it takes a labelled square matrix and returns the matrix permuted on both
//! axes together with the permutation used.

use std::fmt;
use std::str::FromStr;

use crate::algorithm::ordering::{
    DegreeOrdering, HierarchicalOrdering, HierarchyOptions, IdentityOrdering, LinkageMethod,
    MatrixOrdering, NearestNeighborOrdering, Reordering, ReverseCuthillMckee,
};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::matrix::{Permutation, SquareMatrix};

/// A reordering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Keep the input order
    #[default]
    Identity,
    /// Ascending nonzero count per row
    DegreeCount,
    /// Greedy nearest-neighbor path over cosine similarity
    NearestNeighbor,
    /// Reverse Cuthill-McKee (requires a symmetric matrix)
    ReverseCuthillMckee,
    /// Dendrogram leaf order with optimal leaf ordering
    HierarchicalClustering(LinkageMethod),
}

impl Strategy {
    /// Every strategy under its display label, in presentation order
    pub const REGISTRY: [(&'static str, Strategy); 5] = [
        ("Raw data", Strategy::Identity),
        ("Count based (naive)", Strategy::DegreeCount),
        ("Similarity based", Strategy::NearestNeighbor),
        ("Reverse Cuthill-McKee", Strategy::ReverseCuthillMckee),
        (
            "Hierarchical Clustering",
            Strategy::HierarchicalClustering(LinkageMethod::Complete),
        ),
    ];

    /// Display label of this strategy's registry entry
    pub const fn label(&self) -> &'static str {
        match self {
            Strategy::Identity => Self::REGISTRY[0].0,
            Strategy::DegreeCount => Self::REGISTRY[1].0,
            Strategy::NearestNeighbor => Self::REGISTRY[2].0,
            Strategy::ReverseCuthillMckee => Self::REGISTRY[3].0,
            Strategy::HierarchicalClustering(_) => Self::REGISTRY[4].0,
        }
    }

    /// Look up a registry entry by exact label
    pub fn from_label(label: &str) -> Option<Strategy> {
        Self::REGISTRY
            .iter()
            .find(|(l, _)| *l == label)
            .map(|&(_, s)| s)
    }

    /// Compute the permutation this strategy assigns to `matrix`
    pub fn ordering<T: Element>(&self, matrix: &SquareMatrix<T>) -> Result<Permutation> {
        match *self {
            Strategy::Identity => IdentityOrdering.ordering(matrix),
            Strategy::DegreeCount => DegreeOrdering.ordering(matrix),
            Strategy::NearestNeighbor => NearestNeighborOrdering.ordering(matrix),
            Strategy::ReverseCuthillMckee => ReverseCuthillMckee::default().ordering(matrix),
            Strategy::HierarchicalClustering(method) => HierarchicalOrdering {
                options: HierarchyOptions::with_method(method),
            }
            .ordering(matrix),
        }
    }

    /// Reorder `matrix` with this strategy
    ///
    /// The returned matrix carries the permuted labels; apply
    /// `Reordering::permutation` to any other per-node data.
    ///
    /// # Errors
    ///
    /// [`Error::NotSymmetric`] for [`Strategy::ReverseCuthillMckee`] on an
    /// asymmetric matrix; [`Error::InvalidArgument`] for
    /// [`Strategy::HierarchicalClustering`] on non-finite entries.
    pub fn apply<T: Element>(&self, matrix: &SquareMatrix<T>) -> Result<Reordering<T>> {
        log::debug!(
            "{self}: reordering {n}x{n} {dtype} matrix",
            n = matrix.n(),
            dtype = T::DTYPE
        );
        let result = match *self {
            Strategy::Identity => IdentityOrdering.reorder(matrix),
            Strategy::DegreeCount => DegreeOrdering.reorder(matrix),
            Strategy::NearestNeighbor => NearestNeighborOrdering.reorder(matrix),
            Strategy::ReverseCuthillMckee => ReverseCuthillMckee::default().reorder(matrix),
            Strategy::HierarchicalClustering(method) => HierarchicalOrdering {
                options: HierarchyOptions::with_method(method),
            }
            .reorder(matrix),
        };

        match &result {
            Ok(r) => log::debug!(
                "{self}: done, bandwidth {} -> {}",
                matrix.bandwidth(),
                r.matrix.bandwidth()
            ),
            Err(e) => log::debug!("{self}: failed: {e}"),
        }
        result
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::HierarchicalClustering(method) if *method != LinkageMethod::Complete => {
                write!(f, "{} ({method})", self.label())
            }
            _ => f.write_str(self.label()),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Parse a registry label, or `"Hierarchical Clustering (<method>)"`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(strategy) = Self::from_label(s) {
            return Ok(strategy);
        }

        let hierarchical = Self::REGISTRY[4].0;
        if let Some(method) = s
            .strip_prefix(hierarchical)
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Ok(Strategy::HierarchicalClustering(method.parse()?));
        }

        Err(Error::invalid_argument("strategy", format!("unknown strategy '{s}'")))
    }
}
