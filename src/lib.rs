//! Row- and column-major complex matrix-vector multiply on a column-major engine.
//!
//! This crate computes
//!
//! ```text
//! y := alpha * op(A) * x + beta * y,    op(A) ∈ { A, A^T, A^H }
//! ```
//!
//! for `Complex64` operands stored in either row-major or column-major order,
//! while the engine doing the arithmetic (see [`zgemv_kernel`]) only knows
//! column-major storage.
//!
//! # How calls are adapted
//!
//! - Column-major calls are passed through unchanged.
//! - Row-major calls reinterpret the `m x n` matrix as its column-major
//!   `n x m` transpose and flip `NoTrans` <-> `Trans`.
//! - Row-major `ConjTrans` is computed without conjugating the matrix: `x`
//!   is copied conjugated, `alpha`/`beta` are conjugated, and `y` is
//!   conjugated in place before and after a `NoTrans` engine call. This costs
//!   `O(m + n)` extra work instead of the `O(m * n)` of a conjugated matrix.
//!
//! # Entry points
//!
//! - [`zgemv`]: typed layout/operator, feature-selected engine
//! - [`zgemv_with`]: explicit engine ([`ColMajorGemv`]) and [`ErrorSink`]
//! - [`zgemv_raw`], [`zgemv_raw_with`]: CBLAS integer codes, validated per call
//! - [`zgemv_interleaved`]: buffers of interleaved `(re, im)` `f64` pairs
//!
//! # Errors
//!
//! Invalid arguments are reported to the [`ErrorSink`] with their parameter
//! position in `zgemv(layout, trans, m, n, alpha, a, lda, x, incx, beta, y, incy)`
//! and returned as [`GemvError`]. A rejected call never modifies `y`.
//!
//! # Features
//!
//! - `blas`: dispatch to `cblas_zgemv` from a system CBLAS (OpenBLAS by
//!   default; set `OPENBLAS_LIB_DIR` to point at it)

#![allow(clippy::too_many_arguments)]

mod adapter;
mod conj;
pub mod context;
mod interleaved;
pub mod layout;
pub mod mapping;

pub use adapter::{zgemv, zgemv_raw, zgemv_raw_with, zgemv_with, ROUTINE};
pub use context::{CallContext, ErrorSink, SilentSink, TracingSink};
pub use interleaved::zgemv_interleaved;
pub use layout::{Layout, Transpose};
pub use mapping::{map_operator, KernelCall};

pub use zgemv_kernel::{
    self, ActiveBackend, ColMajorGemv, KernelError, KernelOp, NaiveBackend, StridedIndex,
};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during a `zgemv` call.
#[derive(Debug, thiserror::Error)]
pub enum GemvError {
    /// The layout code is neither row-major nor column-major.
    #[error("Illegal layout setting, {0}")]
    InvalidLayout(i32),

    /// The operator code is not `NoTrans`, `Trans` or `ConjTrans`.
    #[error("Illegal TransA setting, {0}")]
    InvalidTransposeOp(i32),

    /// The conjugated copy of `x` could not be allocated.
    #[error("failed to allocate {len} elements for the conjugated copy of x")]
    AllocationFailure { len: usize },

    /// The engine rejected an argument; `position` is in the caller's
    /// parameter list.
    #[error("{source}")]
    IllegalArgument {
        position: usize,
        #[source]
        source: KernelError,
    },

    /// An interleaved buffer does not hold a whole number of complex values.
    #[error("{name} holds {len} f64 values, which is not a whole number of complex pairs")]
    InterleavedLength { name: &'static str, len: usize },
}

impl GemvError {
    /// Wrap an engine error, renumbering its position for the caller.
    pub fn from_kernel(err: KernelError, ctx: &CallContext) -> Self {
        GemvError::IllegalArgument {
            position: ctx.caller_position(&err),
            source: err,
        }
    }

    /// Parameter position of the offending argument, if the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            GemvError::InvalidLayout(_) => Some(context::arg::LAYOUT),
            GemvError::InvalidTransposeOp(_) => Some(context::arg::TRANS),
            GemvError::IllegalArgument { position, .. } => Some(*position),
            GemvError::AllocationFailure { .. } | GemvError::InterleavedLength { .. } => None,
        }
    }
}

/// Result type for `zgemv` calls.
pub type Result<T> = std::result::Result<T, GemvError>;
