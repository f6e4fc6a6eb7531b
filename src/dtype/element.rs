//! Element trait for mapping Rust types to DType

use super::DType;
use num_traits::{ToPrimitive, Zero};
use std::fmt::Debug;

/// Trait for types that can be entries of a [`SquareMatrix`](crate::matrix::SquareMatrix)
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - matrices are plain values
/// - `Zero` - nonzero detection for degree counts and sparsity patterns
/// - `ToPrimitive` - conversion to `f64` for the similarity and distance
///   kernels
/// - `PartialEq` - symmetry checks compare entries exactly
pub trait Element:
    Copy + Send + Sync + Debug + PartialEq + PartialOrd + Zero + ToPrimitive + 'static
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for similarity and distance kernels
    ///
    /// Values that cannot be converted map to NaN, which the kernels
    /// normalize away.
    #[inline]
    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    /// True if the entry counts as an edge
    #[inline]
    fn is_nonzero(&self) -> bool {
        !self.is_zero()
    }
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: DType = DType::$dtype;
            }
        )*
    };
}

impl_element!(
    f64 => F64,
    f32 => F32,
    i64 => I64,
    i32 => I32,
    u32 => U32,
    u8 => U8,
);
