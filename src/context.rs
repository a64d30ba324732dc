//! Call-scoped context and the error sink.
//!
//! A [`CallContext`] is built once per call and handed to the [`ErrorSink`]
//! together with the parameter position of the offending argument. The sink
//! decides how to surface the report; the default [`TracingSink`] emits a
//! `tracing` error event.

use crate::layout::Layout;
use zgemv_kernel::{position, KernelError};

/// Parameter positions of the C interface:
/// `zgemv(layout, trans, m, n, alpha, a, lda, x, incx, beta, y, incy)`.
pub mod arg {
    pub const LAYOUT: usize = 1;
    pub const TRANS: usize = 2;
    pub const M: usize = 3;
    pub const N: usize = 4;
}

/// Facts about the current call that shape how errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    /// Name of the routine being executed.
    pub routine: &'static str,
    /// The engine was entered through this adapter rather than directly.
    pub from_adapter: bool,
    /// The caller's matrix is row-major, so engine `m`/`n` are swapped.
    pub row_major: bool,
}

impl CallContext {
    /// Context for a call whose layout is not yet known.
    pub fn new(routine: &'static str) -> Self {
        Self {
            routine,
            from_adapter: true,
            row_major: false,
        }
    }

    /// The same context once the layout has been validated.
    pub fn with_layout(self, layout: Layout) -> Self {
        Self {
            row_major: layout.is_row_major(),
            ..self
        }
    }

    /// Translate an engine error position into the caller's parameter list.
    ///
    /// The C interface has the extra `layout` parameter in front. For a
    /// row-major caller the engine's `m` is the caller's `n` and vice versa.
    pub fn caller_position(&self, err: &KernelError) -> usize {
        let engine_position = err.position();
        if !self.from_adapter {
            return engine_position;
        }
        match engine_position {
            position::M if self.row_major => arg::N,
            position::N if self.row_major => arg::M,
            p => p + 1,
        }
    }
}

/// Receiver of argument errors detected during a call.
pub trait ErrorSink {
    /// Report that parameter `position` of `ctx.routine` was incorrect.
    fn report(&self, ctx: &CallContext, position: usize, message: &str);
}

impl<S: ErrorSink + ?Sized> ErrorSink for &S {
    fn report(&self, ctx: &CallContext, position: usize, message: &str) {
        (**self).report(ctx, position, message)
    }
}

/// Error sink emitting a `tracing` error event per report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, ctx: &CallContext, position: usize, message: &str) {
        tracing::error!(
            routine = ctx.routine,
            position,
            row_major = ctx.row_major,
            "Parameter {} to routine {} was incorrect: {}",
            position,
            ctx.routine,
            message
        );
    }
}

/// Error sink that drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl ErrorSink for SilentSink {
    fn report(&self, _ctx: &CallContext, _position: usize, _message: &str) {}
}
