//! Row-major conjugate-transpose through vector conjugation.
//!
//! A row-major `m x n` matrix `A` is, in storage terms, the column-major
//! `n x m` matrix `A^T`. The engine can form `A^T v` for free, but
//! `conj(A)^T x` would need a conjugated copy of the whole matrix. Instead
//! the identity
//!
//! ```text
//! conj(A)^T x = conj(A^T conj(x))
//! ```
//!
//! is applied to the full update. Conjugating
//! `y := alpha * conj(A)^T x + beta * y` gives
//!
//! ```text
//! conj(y) := conj(alpha) * A^T conj(x) + conj(beta) * conj(y)
//! ```
//!
//! so the engine runs `NoTrans` on the swapped matrix with a conjugated copy
//! of `x`, conjugated scalars, and `y` conjugated in place beforehand. A final
//! in-place conjugation of `y` yields the result. The matrix is never touched.
//!
//! Everything here indexes `x` and `y` directly and relies on
//! [`check_args`] having accepted the call.

use crate::context::CallContext;
use crate::mapping::KernelCall;
use crate::{GemvError, Result};
use num_complex::Complex64;
use std::borrow::Cow;
use zgemv_kernel::{check_args, ColMajorGemv, StridedIndex};

/// Negate the imaginary part of `count` strided elements in place.
///
/// Applying this twice with the same `count` and `inc` restores the buffer
/// bit for bit.
fn conj_strided(v: &mut [Complex64], count: usize, inc: isize) {
    for pos in StridedIndex::new(count, inc) {
        v[pos].im = -v[pos].im;
    }
}

/// Conjugated copy of the `count` logical elements of `x`.
///
/// The copy is contiguous and stored in logical order, so it is read with
/// increment `1` whatever the sign of `incx`. Returns `x` itself with its
/// increment when `count == 0`.
pub(crate) fn conjugated_x(
    x: &[Complex64],
    count: usize,
    incx: isize,
) -> Result<(Cow<'_, [Complex64]>, isize)> {
    if count == 0 {
        return Ok((Cow::Borrowed(x), incx));
    }

    let mut buf = Vec::new();
    buf.try_reserve_exact(count)
        .map_err(|_| GemvError::AllocationFailure { len: count })?;
    buf.extend(StridedIndex::new(count, incx).map(|p| x[p].conj()));
    tracing::trace!(len = count, incx, "built conjugated copy of x");
    Ok((Cow::Owned(buf), 1))
}

/// `y` with the imaginary parts of its strided elements negated.
///
/// Dropping the guard negates the same elements again, so `y` is restored on
/// every exit path.
pub(crate) struct ConjugatedY<'y> {
    y: &'y mut [Complex64],
    count: usize,
    inc: isize,
}

impl<'y> ConjugatedY<'y> {
    pub(crate) fn new(y: &'y mut [Complex64], count: usize, inc: isize) -> Self {
        conj_strided(y, count, inc);
        Self { y, count, inc }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Complex64] {
        self.y
    }
}

impl Drop for ConjugatedY<'_> {
    fn drop(&mut self) {
        conj_strided(self.y, self.count, self.inc);
    }
}

/// Run a row-major `ConjTrans` call that has been mapped to `call`.
///
/// `call.rows` is the caller's `n` (length of `y`) and `call.cols` the
/// caller's `m` (length of `x`).
pub(crate) fn conj_trans_row_major<E: ColMajorGemv + ?Sized>(
    engine: &E,
    ctx: &CallContext,
    call: &KernelCall,
    alpha: Complex64,
    a: &[Complex64],
    lda: usize,
    x: &[Complex64],
    incx: isize,
    beta: Complex64,
    y: &mut [Complex64],
    incy: isize,
) -> Result<()> {
    debug_assert!(call.conjugate_vectors);
    let KernelCall { op, rows, cols, .. } = *call;

    // Reject before y is conjugated so a failed call leaves y as it was.
    check_args(op, rows, cols, a.len(), lda, x.len(), incx, y.len(), incy)
        .map_err(|err| GemvError::from_kernel(err, ctx))?;

    let alpha_conj = alpha.conj();
    let beta_conj = beta.conj();

    if rows == 0 || cols == 0 {
        // The engine quick-returns without reading x or touching y.
        return engine
            .gemv(
                op,
                rows,
                cols,
                alpha_conj,
                a,
                lda,
                x,
                incx,
                beta_conj,
                y,
                incy,
            )
            .map_err(|err| GemvError::from_kernel(err, ctx));
    }

    let (x_conj, incx_conj) = conjugated_x(x, cols, incx)?;
    let mut y_conj = ConjugatedY::new(y, rows, incy);
    tracing::trace!(rows, incy, "conjugated y before dispatch");

    engine
        .gemv(
            op,
            rows,
            cols,
            alpha_conj,
            a,
            lda,
            &x_conj,
            incx_conj,
            beta_conj,
            y_conj.as_mut_slice(),
            incy,
        )
        .map_err(|err| GemvError::from_kernel(err, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zgemv_kernel::required_len;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_conj_strided_touches_only_strided_elements() {
        let mut v: Vec<Complex64> = (0..7).map(|i| c(i as f64, i as f64 + 0.5)).collect();
        conj_strided(&mut v, 3, -3);
        for (i, z) in v.iter().enumerate() {
            let expected_im = if i % 3 == 0 {
                -(i as f64 + 0.5)
            } else {
                i as f64 + 0.5
            };
            assert_eq!(z.re, i as f64);
            assert_eq!(z.im, expected_im);
        }
    }

    #[test]
    fn test_conj_strided_is_involution() {
        let original = vec![
            c(1.0, 0.0),
            c(-2.5, -0.0),
            c(3.0, f64::MIN_POSITIVE),
            c(0.1, 1e300),
            c(f64::NAN, -7.25),
        ];
        for inc in [-2isize, -1, 1, 2] {
            let count = if inc.abs() == 2 { 3 } else { 5 };
            let mut v = original.clone();
            conj_strided(&mut v, count, inc);
            conj_strided(&mut v, count, inc);
            for (got, want) in v.iter().zip(&original) {
                assert_eq!(got.re.to_bits(), want.re.to_bits());
                assert_eq!(got.im.to_bits(), want.im.to_bits());
            }
        }
    }

    #[test]
    fn test_conjugated_x_positive_stride() {
        let x = [
            c(1.0, 1.0),
            c(9.0, 9.0),
            c(2.0, -2.0),
            c(9.0, 9.0),
            c(3.0, 0.5),
        ];
        let (buf, inc) = conjugated_x(&x, 3, 2).unwrap();
        assert!(matches!(buf, Cow::Owned(_)));
        assert_eq!(inc, 1);
        assert_eq!(&*buf, &[c(1.0, -1.0), c(2.0, 2.0), c(3.0, -0.5)]);
    }

    #[test]
    fn test_conjugated_x_negative_stride_keeps_logical_order() {
        // With incx = -2 logical element 0 is stored last.
        let x = [
            c(3.0, 0.5),
            c(9.0, 9.0),
            c(2.0, -2.0),
            c(9.0, 9.0),
            c(1.0, 1.0),
        ];
        let (buf, inc) = conjugated_x(&x, 3, -2).unwrap();
        assert_eq!(inc, 1);
        assert_eq!(&*buf, &[c(1.0, -1.0), c(2.0, 2.0), c(3.0, -0.5)]);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_conjugated_x_empty_borrows() {
        let x = [c(1.0, 1.0)];
        let (buf, inc) = conjugated_x(&x, 0, -4).unwrap();
        assert!(matches!(buf, Cow::Borrowed(_)));
        assert_eq!(inc, -4);
    }

    #[test]
    fn test_conjugated_x_allocation_failure() {
        // The reservation fails before x is read.
        let x = [c(1.0, 1.0)];
        let err = conjugated_x(&x, usize::MAX, 1).unwrap_err();
        assert!(matches!(err, GemvError::AllocationFailure { len: usize::MAX }));
        assert_eq!(err.position(), None);
        assert_eq!(
            err.to_string(),
            format!(
                "failed to allocate {} elements for the conjugated copy of x",
                usize::MAX
            )
        );
    }

    #[test]
    fn test_conjugated_y_restores_on_drop() {
        let original: Vec<Complex64> = (0..7)
            .map(|i| c(i as f64, if i % 2 == 0 { -0.0 } else { i as f64 * 0.1 }))
            .collect();
        let mut y = original.clone();
        for inc in [-3isize, -1, 1, 3] {
            let count = if inc.abs() == 3 { 3 } else { 7 };
            assert!(required_len(count, inc) <= y.len());
            {
                let mut guard = ConjugatedY::new(&mut y, count, inc);
                let touched: Vec<usize> = StridedIndex::new(count, inc).collect();
                for (p, v) in guard.as_mut_slice().iter().enumerate() {
                    let want = if touched.contains(&p) {
                        -original[p].im
                    } else {
                        original[p].im
                    };
                    assert_eq!(v.im.to_bits(), want.to_bits());
                }
            }
            for (got, want) in y.iter().zip(&original) {
                assert_eq!(got.re.to_bits(), want.re.to_bits());
                assert_eq!(got.im.to_bits(), want.im.to_bits());
            }
        }
    }
}
