//! Element types accepted by reordr matrices
//!
//! Adjacency matrices are binary in practice, but the similarity and
//! clustering strategies operate on real-valued data, so every strategy is
//! generic over [`Element`]. The `DType` tag exists for diagnostics.

mod element;

pub use element::Element;

use std::fmt;

/// Runtime tag for the element type of a matrix
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 64-bit floating point
    F64,
    /// 32-bit floating point
    F32,
    /// 64-bit signed integer
    I64,
    /// 32-bit signed integer
    I32,
    /// 32-bit unsigned integer
    U32,
    /// 8-bit unsigned integer
    U8,
}

impl DType {
    /// Short name for display (e.g., "f32", "i64")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::U8 => "u8",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
