//! Permutation of node indices

use crate::error::{Error, Result};

/// A bijection over `0..n`
///
/// `perm[i]` is the original index placed at new position `i`, the
/// convention used by every ordering in [`crate::algorithm::ordering`].
/// A value of this type is always valid; construction checks bijectivity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    indices: Vec<usize>,
}

/// Validate that `indices` is a bijection over `0..n`
///
/// # Errors
///
/// - [`Error::ShapeMismatch`] if `indices.len() != n`
/// - [`Error::InvalidPermutation`] on an out-of-range or repeated index
pub fn validate_permutation(indices: &[usize], n: usize) -> Result<()> {
    if indices.len() != n {
        return Err(Error::shape_mismatch(&[n], &[indices.len()]));
    }
    let mut seen = vec![false; n];
    for (pos, &idx) in indices.iter().enumerate() {
        if idx >= n {
            return Err(Error::invalid_permutation(format!(
                "index {idx} at position {pos} is out of range for n = {n}"
            )));
        }
        if seen[idx] {
            return Err(Error::invalid_permutation(format!(
                "index {idx} appears more than once (again at position {pos})"
            )));
        }
        seen[idx] = true;
    }
    Ok(())
}

impl Permutation {
    /// Create a permutation, validating that it is a bijection over `0..len`
    pub fn new(indices: Vec<usize>) -> Result<Self> {
        validate_permutation(&indices, indices.len())?;
        Ok(Self { indices })
    }

    /// Identity permutation of length `n`
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
        }
    }

    /// Wrap indices produced by an ordering algorithm that guarantees bijectivity.
    pub(crate) fn from_vec_unchecked(indices: Vec<usize>) -> Self {
        debug_assert!(validate_permutation(&indices, indices.len()).is_ok());
        Self { indices }
    }

    /// Number of indices
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True for the empty permutation
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Indices as a slice
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Consume, returning the index vector
    pub fn into_vec(self) -> Vec<usize> {
        self.indices
    }

    /// True if every index maps to itself
    pub fn is_identity(&self) -> bool {
        self.indices.iter().enumerate().all(|(i, &p)| i == p)
    }

    /// Inverse permutation: `inv[perm[i]] = i`
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0; self.indices.len()];
        for (i, &p) in self.indices.iter().enumerate() {
            inv[p] = i;
        }
        Self { indices: inv }
    }

    /// Permutation equivalent to reordering by `self`, then by `next`
    ///
    /// `reorder(reorder(m, a), b) == reorder(m, a.then(b))`
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the lengths differ.
    pub fn then(&self, next: &Permutation) -> Result<Self> {
        if next.len() != self.len() {
            return Err(Error::shape_mismatch(&[self.len()], &[next.len()]));
        }
        Ok(Self {
            indices: next.indices.iter().map(|&i| self.indices[i]).collect(),
        })
    }

    /// Reorder per-node side-channel data (types, colors, ...) consistently
    /// with a matrix reordered by this permutation
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `items.len()` differs from the
    /// permutation length.
    pub fn apply<M: Clone>(&self, items: &[M]) -> Result<Vec<M>> {
        if items.len() != self.len() {
            return Err(Error::shape_mismatch(&[self.len()], &[items.len()]));
        }
        Ok(self.indices.iter().map(|&i| items[i].clone()).collect())
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize] {
        &self.indices
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = Error;

    fn try_from(indices: Vec<usize>) -> Result<Self> {
        Self::new(indices)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(perm: Permutation) -> Self {
        perm.indices
    }
}
