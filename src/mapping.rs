//! Mapping of `(layout, trans)` onto a column-major engine call.
//!
//! A row-major `m x n` matrix occupies exactly the storage of its column-major
//! `n x m` transpose, so row-major calls swap the dimensions and flip
//! `NoTrans`/`Trans`. Conjugation has no storage equivalent: a row-major
//! `ConjTrans` becomes `NoTrans` on the swapped matrix and the conjugation is
//! carried by the vectors and scalars instead.

use crate::layout::{Layout, Transpose};
use zgemv_kernel::KernelOp;

/// The engine-side shape of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelCall {
    /// Operator handed to the engine.
    pub op: KernelOp,
    /// Rows of the column-major matrix seen by the engine.
    pub rows: usize,
    /// Columns of the column-major matrix seen by the engine.
    pub cols: usize,
    /// Whether `x`, `y`, `alpha` and `beta` must be conjugated around the call.
    pub conjugate_vectors: bool,
}

/// Map a caller's `(layout, trans, m, n)` to the equivalent engine call.
pub fn map_operator(layout: Layout, trans: Transpose, m: usize, n: usize) -> KernelCall {
    match layout {
        Layout::ColMajor => {
            let op = match trans {
                Transpose::NoTrans => KernelOp::NoTrans,
                Transpose::Trans => KernelOp::Trans,
                Transpose::ConjTrans => KernelOp::ConjTrans,
            };
            KernelCall {
                op,
                rows: m,
                cols: n,
                conjugate_vectors: false,
            }
        }
        Layout::RowMajor => {
            let op = match trans {
                Transpose::NoTrans => KernelOp::Trans,
                Transpose::Trans | Transpose::ConjTrans => KernelOp::NoTrans,
            };
            KernelCall {
                op,
                rows: n,
                cols: m,
                conjugate_vectors: trans == Transpose::ConjTrans,
            }
        }
    }
}
