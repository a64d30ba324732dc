//! Entry point for buffers of interleaved `(re, im)` pairs.
//!
//! C callers hand complex data over as `double` arrays with real and
//! imaginary parts interleaved. `Complex64` is `repr(C)` with the same
//! layout, so the buffers are reinterpreted in place with `bytemuck`.

use crate::adapter::{zgemv, ROUTINE};
use crate::layout::{Layout, Transpose};
use crate::{GemvError, Result};
use num_complex::Complex64;

fn length_error(name: &'static str, len: usize) -> GemvError {
    let err = GemvError::InterleavedLength { name, len };
    tracing::error!(routine = ROUTINE, "{err}");
    err
}

fn as_complex<'a>(name: &'static str, data: &'a [f64]) -> Result<&'a [Complex64]> {
    bytemuck::try_cast_slice(data)
        .map_err(|_| length_error(name, data.len()))
}

fn as_complex_mut<'a>(name: &'static str, data: &'a mut [f64]) -> Result<&'a mut [Complex64]> {
    let len = data.len();
    bytemuck::try_cast_slice_mut(data)
        .map_err(|_| length_error(name, len))
}

/// [`zgemv`] on interleaved `f64` buffers.
///
/// `lda`, `incx` and `incy` count complex elements, not `f64` values.
pub fn zgemv_interleaved(
    layout: Layout,
    trans: Transpose,
    m: usize,
    n: usize,
    alpha: [f64; 2],
    a: &[f64],
    lda: usize,
    x: &[f64],
    incx: isize,
    beta: [f64; 2],
    y: &mut [f64],
    incy: isize,
) -> Result<()> {
    let a = as_complex("a", a)?;
    let x = as_complex("x", x)?;
    let y = as_complex_mut("y", y)?;
    zgemv(
        layout,
        trans,
        m,
        n,
        Complex64::new(alpha[0], alpha[1]),
        a,
        lda,
        x,
        incx,
        Complex64::new(beta[0], beta[1]),
        y,
        incy,
    )
}
