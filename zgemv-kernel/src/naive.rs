//! Pure-Rust column-major engine with reference BLAS semantics.

use crate::stride::StridedIndex;
use crate::{check_args, ColMajorGemv, KernelError, KernelOp};
use num_complex::Complex64;
use num_traits::{One, Zero};

/// Fallback engine using explicit loops (no external library).
///
/// Follows the loop structure of reference `ZGEMV`: `y` is first scaled by
/// `beta` (set to zero when `beta == 0`), then `NoTrans` accumulates one
/// column axpy per element of `x` and `Trans`/`ConjTrans` form one dot
/// product per element of `y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveBackend;

impl ColMajorGemv for NaiveBackend {
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
        check_args(op, m, n, a.len(), lda, x.len(), incx, y.len(), incy)?;

        if m == 0 || n == 0 || (alpha.is_zero() && beta.is_one()) {
            return Ok(());
        }

        let (_, leny) = op.vector_lens(m, n);
        scale_y(beta, y, leny, incy);

        if alpha.is_zero() {
            return Ok(());
        }

        match op {
            KernelOp::NoTrans => {
                for (j, px) in StridedIndex::new(n, incx).enumerate() {
                    let temp = alpha * x[px];
                    let col = &a[j * lda..j * lda + m];
                    for (aij, py) in col.iter().zip(StridedIndex::new(m, incy)) {
                        y[py] += temp * aij;
                    }
                }
            }
            KernelOp::Trans | KernelOp::ConjTrans => {
                let conj = op == KernelOp::ConjTrans;
                for (j, py) in StridedIndex::new(n, incy).enumerate() {
                    let col = &a[j * lda..j * lda + m];
                    let mut temp = Complex64::zero();
                    for (aij, px) in col.iter().zip(StridedIndex::new(m, incx)) {
                        let aij = if conj { aij.conj() } else { *aij };
                        temp += aij * x[px];
                    }
                    y[py] += alpha * temp;
                }
            }
        }

        Ok(())
    }
}

/// `y := beta * y`, writing exact zeros when `beta == 0`.
fn scale_y(beta: Complex64, y: &mut [Complex64], leny: usize, incy: isize) {
    if beta.is_one() {
        return;
    }
    if beta.is_zero() {
        for py in StridedIndex::new(leny, incy) {
            y[py] = Complex64::zero();
        }
    } else {
        for py in StridedIndex::new(leny, incy) {
            y[py] = beta * y[py];
        }
    }
}
