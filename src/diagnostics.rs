//! Reporting of non-fatal findings.
//!
//! Checks never log through global state. They take a [`Diagnostics`] value from the caller,
//! which decides where advisory findings go.

use super::*;

/// Sink for advisory findings.
pub trait Diagnostics {
  /// Reports a condition that does not fail the operation.
  fn warn(&self, error: &ConstraintSystemError);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
  fn warn(&self, error: &ConstraintSystemError) { (**self).warn(error) }
}

/// Forwards findings to [`tracing`] at `WARN` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
  fn warn(&self, error: &ConstraintSystemError) {
    tracing::warn!(%error, "constraint system check");
  }
}
