//! CBLAS-backed column-major engine.
//!
//! Uses `cblas_zgemv` with `CblasColMajor`. Arguments are checked with
//! [`check_args`] first so that a system BLAS never sees a call it would
//! reject through its own `xerbla`.

use crate::{check_args, position, ColMajorGemv, KernelError, KernelOp};
use num_complex::Complex64;

/// Column-major engine calling `cblas_zgemv` from a system CBLAS.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlasBackend;

#[inline]
fn cblas_trans(op: KernelOp) -> cblas_sys::CBLAS_TRANSPOSE {
    match op {
        KernelOp::NoTrans => cblas_sys::CBLAS_TRANSPOSE::CblasNoTrans,
        KernelOp::Trans => cblas_sys::CBLAS_TRANSPOSE::CblasTrans,
        KernelOp::ConjTrans => cblas_sys::CBLAS_TRANSPOSE::CblasConjTrans,
    }
}

fn to_blas_int<V>(name: &'static str, position: usize, value: V) -> Result<i32, KernelError>
where
    V: Copy + TryInto<i32> + Into<i128>,
{
    value.try_into().map_err(|_| KernelError::IndexOverflow {
        name,
        position,
        value: value.into(),
    })
}

impl ColMajorGemv for BlasBackend {
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
        if m == 0 || n == 0 {
            return Ok(());
        }

        let m_i32 = to_blas_int("m", position::M, m as u64)?;
        let n_i32 = to_blas_int("n", position::N, n as u64)?;
        let lda_i32 = to_blas_int("lda", position::LDA, lda as u64)?;
        let incx_i32 = to_blas_int("incx", position::INCX, incx as i64)?;
        let incy_i32 = to_blas_int("incy", position::INCY, incy as i64)?;

        unsafe {
            cblas_sys::cblas_zgemv(
                cblas_sys::CBLAS_LAYOUT::CblasColMajor,
                cblas_trans(op),
                m_i32,
                n_i32,
                (&alpha) as *const _ as *const _,
                a.as_ptr() as *const _,
                lda_i32,
                x.as_ptr() as *const _,
                incx_i32,
                (&beta) as *const _ as *const _,
                y.as_mut_ptr() as *mut _,
                incy_i32,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NaiveBackend;
    use approx::assert_relative_eq;

    #[test]
    fn test_blas_matches_naive() {
        let a: Vec<Complex64> = (0..12)
            .map(|i| Complex64::new(i as f64, 0.5 * i as f64 - 1.0))
            .collect();
        let x: Vec<Complex64> = (0..4).map(|i| Complex64::new(1.0, -(i as f64))).collect();
        let alpha = Complex64::new(0.5, 2.0);
        let beta = Complex64::new(-1.0, 0.25);

        for op in [KernelOp::NoTrans, KernelOp::Trans, KernelOp::ConjTrans] {
            let (lenx, leny) = op.vector_lens(3, 4);
            let mut y_blas = vec![Complex64::new(1.0, 1.0); leny];
            let mut y_naive = y_blas.clone();
            BlasBackend
                .gemv(op, 3, 4, alpha, &a, 3, &x[..lenx], -1, beta, &mut y_blas, 1)
                .unwrap();
            NaiveBackend
                .gemv(
                    op,
                    3,
                    4,
                    alpha,
                    &a,
                    3,
                    &x[..lenx],
                    -1,
                    beta,
                    &mut y_naive,
                    1,
                )
                .unwrap();
            for (b, n) in y_blas.iter().zip(&y_naive) {
                assert_relative_eq!(b.re, n.re, epsilon = 1e-12);
                assert_relative_eq!(b.im, n.im, epsilon = 1e-12);
            }
        }
    }
}
