//! CBLAS layout and transpose settings.
//!
//! The enum discriminants are the CBLAS integer codes, so raw codes coming
//! from a C-style caller are validated with `TryFrom<i32>`.

use crate::GemvError;

/// Storage order of the matrix argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Layout {
    /// Row-major (C-style): elements of a row are contiguous.
    RowMajor = 101,
    /// Column-major (Fortran-style): elements of a column are contiguous.
    ColMajor = 102,
}

/// Operator applied to the matrix before the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Transpose {
    /// `op(A) = A`
    NoTrans = 111,
    /// `op(A) = A^T`
    Trans = 112,
    /// `op(A) = A^H` (transpose and element-wise conjugate)
    ConjTrans = 113,
}

impl Layout {
    /// The CBLAS integer code.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    #[inline]
    pub fn is_row_major(self) -> bool {
        self == Layout::RowMajor
    }

    /// Minimum leading dimension of an `m x n` matrix in this layout.
    #[inline]
    pub fn min_leading_dim(self, m: usize, n: usize) -> usize {
        match self {
            Layout::RowMajor => n.max(1),
            Layout::ColMajor => m.max(1),
        }
    }
}

impl Transpose {
    /// The CBLAS integer code.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Lengths of `(x, y)` for an `m x n` matrix under this operator.
    #[inline]
    pub fn vector_lens(self, m: usize, n: usize) -> (usize, usize) {
        match self {
            Transpose::NoTrans => (n, m),
            Transpose::Trans | Transpose::ConjTrans => (m, n),
        }
    }
}

impl TryFrom<i32> for Layout {
    type Error = GemvError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            101 => Ok(Layout::RowMajor),
            102 => Ok(Layout::ColMajor),
            other => Err(GemvError::InvalidLayout(other)),
        }
    }
}

impl TryFrom<i32> for Transpose {
    type Error = GemvError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            111 => Ok(Transpose::NoTrans),
            112 => Ok(Transpose::Trans),
            113 => Ok(Transpose::ConjTrans),
            other => Err(GemvError::InvalidTransposeOp(other)),
        }
    }
}
