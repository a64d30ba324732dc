//! Column-major complex matrix-vector engines.
//!
//! This crate provides the engines that `zgemv-rs` dispatches to after it has
//! rewritten a call into column-major form. Every engine implements
//! [`ColMajorGemv`], which computes
//!
//! ```text
//! y := alpha * op(A) * x + beta * y
//! ```
//!
//! for a column-major `m x n` matrix `A` with leading dimension `lda`, where
//! `op` is one of [`KernelOp::NoTrans`], [`KernelOp::Trans`] or
//! [`KernelOp::ConjTrans`].
//!
//! # Engines
//!
//! - [`NaiveBackend`]: pure-Rust loops with reference BLAS semantics
//! - [`BlasBackend`] (feature `blas`): `cblas_zgemv` from a system CBLAS
//!
//! [`ActiveBackend`] names the engine selected by Cargo features.
//!
//! # Example
//!
//! ```
//! use num_complex::Complex64;
//! use zgemv_kernel::{ColMajorGemv, KernelOp, NaiveBackend};
//!
//! // A = [[1, 2], [3, 4]] stored column-major
//! let a = [1.0, 3.0, 2.0, 4.0].map(|v| Complex64::new(v, 0.0));
//! let x = [Complex64::new(1.0, 0.0); 2];
//! let mut y = [Complex64::new(0.0, 0.0); 2];
//!
//! let one = Complex64::new(1.0, 0.0);
//! let zero = Complex64::new(0.0, 0.0);
//! NaiveBackend
//!     .gemv(KernelOp::NoTrans, 2, 2, one, &a, 2, &x, 1, zero, &mut y, 1)
//!     .unwrap();
//! assert_eq!(y[0], Complex64::new(3.0, 0.0));
//! assert_eq!(y[1], Complex64::new(7.0, 0.0));
//! ```

#![allow(clippy::too_many_arguments)]

#[cfg(feature = "blas")]
pub mod blas;
pub mod naive;
pub mod stride;

use num_complex::Complex64;

#[cfg(feature = "blas")]
pub use blas::BlasBackend;
pub use naive::NaiveBackend;
pub use stride::{required_len, StridedIndex};

/// Parameter positions of the Fortran `ZGEMV` interface.
///
/// Engine errors carry these positions; callers with a different parameter
/// list renumber them.
pub mod position {
    pub const TRANS: usize = 1;
    pub const M: usize = 2;
    pub const N: usize = 3;
    pub const ALPHA: usize = 4;
    pub const A: usize = 5;
    pub const LDA: usize = 6;
    pub const X: usize = 7;
    pub const INCX: usize = 8;
    pub const BETA: usize = 9;
    pub const Y: usize = 10;
    pub const INCY: usize = 11;
}

/// Operator applied to the column-major matrix by an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelOp {
    /// `op(A) = A`
    NoTrans,
    /// `op(A) = A^T`
    Trans,
    /// `op(A) = A^H`
    ConjTrans,
}

impl KernelOp {
    /// The BLAS character code (`'N'`, `'T'` or `'C'`).
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            KernelOp::NoTrans => 'N',
            KernelOp::Trans => 'T',
            KernelOp::ConjTrans => 'C',
        }
    }

    /// Lengths of `(x, y)` for an `m x n` matrix under this operator.
    #[inline]
    pub fn vector_lens(self, m: usize, n: usize) -> (usize, usize) {
        match self {
            KernelOp::NoTrans => (n, m),
            KernelOp::Trans | KernelOp::ConjTrans => (m, n),
        }
    }
}

/// Errors reported by an engine for arguments it cannot execute.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KernelError {
    /// `lda` is smaller than `max(1, m)`.
    #[error("lda must be at least {min}, got {lda}")]
    LeadingDimension { lda: usize, min: usize },

    /// A vector increment is zero.
    #[error("{name} must be non-zero")]
    ZeroIncrement { name: &'static str, position: usize },

    /// A buffer is shorter than the elements the call reads or writes.
    #[error("{name} holds {actual} elements but the call needs {required}")]
    BufferTooShort {
        name: &'static str,
        position: usize,
        required: usize,
        actual: usize,
    },

    /// A dimension or increment does not fit the engine's integer type.
    #[error("{name} = {value} does not fit the engine's index type")]
    IndexOverflow {
        name: &'static str,
        position: usize,
        value: i128,
    },
}

impl KernelError {
    /// Fortran `ZGEMV` position of the offending parameter.
    pub fn position(&self) -> usize {
        match self {
            KernelError::LeadingDimension { .. } => position::LDA,
            KernelError::ZeroIncrement { position, .. }
            | KernelError::BufferTooShort { position, .. }
            | KernelError::IndexOverflow { position, .. } => *position,
        }
    }
}

/// Column-major `y := alpha * op(A) * x + beta * y`.
///
/// Vectors follow BLAS stride conventions: a negative increment means the
/// first logical element is stored at the high end of the buffer (see
/// [`StridedIndex`]). Implementations must not touch `y` when `m == 0` or
/// `n == 0`, and must reject invalid arguments before writing anything.
pub trait ColMajorGemv {
    fn gemv(
        &self,
        op: KernelOp,
        m: usize,
        n: usize,
        alpha: Complex64,
        a: &[Complex64],
        lda: usize,
        x: &[Complex64],
        incx: isize,
        beta: Complex64,
        y: &mut [Complex64],
        incy: isize,
    ) -> Result<(), KernelError>;
}

impl<E: ColMajorGemv + ?Sized> ColMajorGemv for &E {
    fn gemv(
        &self,
        op: KernelOp,
        m: usize,
        n: usize,
        alpha: Complex64,
        a: &[Complex64],
        lda: usize,
        x: &[Complex64],
        incx: isize,
        beta: Complex64,
        y: &mut [Complex64],
        incy: isize,
    ) -> Result<(), KernelError> {
        (**self).gemv(op, m, n, alpha, a, lda, x, incx, beta, y, incy)
    }
}

/// Argument checks of reference `ZGEMV`, plus buffer-length checks.
///
/// Checks run in the reference order (`lda`, `incx`, `incy`) before the
/// buffer lengths. Buffers are not inspected when `m == 0` or `n == 0`
/// because the call reads nothing.
pub fn check_args(
    op: KernelOp,
    m: usize,
    n: usize,
    a_len: usize,
    lda: usize,
    x_len: usize,
    incx: isize,
    y_len: usize,
    incy: isize,
) -> Result<(), KernelError> {
    let min_lda = m.max(1);
    if lda < min_lda {
        return Err(KernelError::LeadingDimension { lda, min: min_lda });
    }
    if incx == 0 {
        return Err(KernelError::ZeroIncrement {
            name: "incx",
            position: position::INCX,
        });
    }
    if incy == 0 {
        return Err(KernelError::ZeroIncrement {
            name: "incy",
            position: position::INCY,
        });
    }
    if m == 0 || n == 0 {
        return Ok(());
    }

    let a_required = lda.saturating_mul(n - 1).saturating_add(m);
    check_len("a", position::A, a_required, a_len)?;

    let (lenx, leny) = op.vector_lens(m, n);
    check_len("x", position::X, required_len(lenx, incx), x_len)?;
    check_len("y", position::Y, required_len(leny, incy), y_len)
}

#[inline]
fn check_len(
    name: &'static str,
    position: usize,
    required: usize,
    actual: usize,
) -> Result<(), KernelError> {
    if actual < required {
        return Err(KernelError::BufferTooShort {
            name,
            position,
            required,
            actual,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// ActiveBackend type alias -- the single point of engine selection
// ---------------------------------------------------------------------------

/// The engine selected by Cargo features.
///
/// - `blas` -> [`BlasBackend`]
/// - otherwise -> [`NaiveBackend`]
#[cfg(feature = "blas")]
pub type ActiveBackend = BlasBackend;

#[cfg(not(feature = "blas"))]
pub type ActiveBackend = NaiveBackend;
