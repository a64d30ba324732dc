//! The `zgemv` entry points.
//!
//! Every call runs the same pipeline: validate the layout and operator codes,
//! map them onto a column-major engine call, conjugate the vectors when a
//! row-major `ConjTrans` was requested, dispatch, and restore `y`.

use crate::conj::conj_trans_row_major;
use crate::context::{CallContext, ErrorSink, TracingSink};
use crate::layout::{Layout, Transpose};
use crate::mapping::map_operator;
use crate::{GemvError, Result};
use num_complex::Complex64;
use tracing::instrument;
use zgemv_kernel::{ActiveBackend, ColMajorGemv};

/// Routine name handed to the error sink.
pub const ROUTINE: &str = "cblas_zgemv";

/// `y := alpha * op(A) * x + beta * y` for a row- or column-major `m x n` matrix.
///
/// Uses the engine selected by Cargo features ([`ActiveBackend`]) and reports
/// argument errors through [`TracingSink`].
///
/// - `a`: the matrix, `lda >= n` for row-major and `lda >= m` for column-major
/// - `x`: `n` elements for `NoTrans`, `m` otherwise, increment `incx`
/// - `y`: `m` elements for `NoTrans`, `n` otherwise, increment `incy`
///
/// Negative increments follow the BLAS convention: the first logical element
/// is stored at the high end of the buffer.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use zgemv_rs::{zgemv, Layout, Transpose};
///
/// // A = [[1, i], [-i, 2]] stored row-major
/// let a = [
///     Complex64::new(1.0, 0.0), Complex64::new(0.0, 1.0),
///     Complex64::new(0.0, -1.0), Complex64::new(2.0, 0.0),
/// ];
/// let x = [Complex64::new(1.0, 0.0); 2];
/// let mut y = [Complex64::new(0.0, 0.0); 2];
///
/// zgemv(
///     Layout::RowMajor, Transpose::ConjTrans, 2, 2,
///     Complex64::new(1.0, 0.0), &a, 2, &x, 1,
///     Complex64::new(0.0, 0.0), &mut y, 1,
/// ).unwrap();
///
/// assert_eq!(y, [Complex64::new(1.0, 1.0), Complex64::new(2.0, -1.0)]);
/// ```
pub fn zgemv(
    layout: Layout,
    trans: Transpose,
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
) -> Result<()> {
    zgemv_with(
        &ActiveBackend::default(),
        &TracingSink,
        layout,
        trans,
        m,
        n,
        alpha,
        a,
        lda,
        x,
        incx,
        beta,
        y,
        incy,
    )
}

/// [`zgemv`] with an explicit engine and error sink.
#[instrument(level = "debug", skip_all, fields(?layout, ?trans, m, n, incx, incy))]
pub fn zgemv_with<E, S>(
    engine: &E,
    sink: &S,
    layout: Layout,
    trans: Transpose,
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
) -> Result<()>
where
    E: ColMajorGemv + ?Sized,
    S: ErrorSink + ?Sized,
{
    let ctx = CallContext::new(ROUTINE).with_layout(layout);
    let call = map_operator(layout, trans, m, n);
    tracing::debug!(
        op = %call.op.as_char(),
        rows = call.rows,
        cols = call.cols,
        min_lda = layout.min_leading_dim(m, n),
        "mapped call"
    );

    let result = if call.conjugate_vectors {
        conj_trans_row_major(
            engine,
            &ctx,
            &call,
            alpha,
            a,
            lda,
            x,
            incx,
            beta,
            y,
            incy,
        )
    } else {
        engine
            .gemv(
                call.op,
                call.rows,
                call.cols,
                alpha,
                a,
                lda,
                x,
                incx,
                beta,
                y,
                incy,
            )
            .map_err(|err| GemvError::from_kernel(err, &ctx))
    };
    result.inspect_err(|err| report(sink, &ctx, err))
}

/// [`zgemv`] taking CBLAS integer codes for `layout` and `trans`.
///
/// Out-of-domain codes are reported to the sink (positions 1 and 2) and
/// returned as [`GemvError::InvalidLayout`] / [`GemvError::InvalidTransposeOp`]
/// without touching `y`.
pub fn zgemv_raw(
    layout: i32,
    trans: i32,
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
) -> Result<()> {
    zgemv_raw_with(
        &ActiveBackend::default(),
        &TracingSink,
        layout,
        trans,
        m,
        n,
        alpha,
        a,
        lda,
        x,
        incx,
        beta,
        y,
        incy,
    )
}

/// [`zgemv_raw`] with an explicit engine and error sink.
pub fn zgemv_raw_with<E, S>(
    engine: &E,
    sink: &S,
    layout: i32,
    trans: i32,
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
) -> Result<()>
where
    E: ColMajorGemv + ?Sized,
    S: ErrorSink + ?Sized,
{
    let ctx = CallContext::new(ROUTINE);
    let layout = Layout::try_from(layout)
        .inspect_err(|err| report(sink, &ctx, err))?;

    let ctx = ctx.with_layout(layout);
    let trans = Transpose::try_from(trans)
        .inspect_err(|err| report(sink, &ctx, err))?;

    zgemv_with(
        engine,
        sink,
        layout,
        trans,
        m,
        n,
        alpha,
        a,
        lda,
        x,
        incx,
        beta,
        y,
        incy,
    )
}

fn report<S: ErrorSink + ?Sized>(sink: &S, ctx: &CallContext, err: &GemvError) {
    match err.position() {
        Some(position) => sink.report(ctx, position, &err.to_string()),
        None => tracing::error!(routine = ctx.routine, "{err}"),
    }
}
