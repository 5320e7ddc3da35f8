//! Optional annotations attached to constraints.

use super::*;

/// Where a constraint came from, for error reporting.
///
/// Only stored when explicitly passed to
/// [`add_constraint`](crate::system::ConstraintSystem::add_constraint), so large circuits do not
/// pay for it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugInfo {
  /// What the constraint asserts
  pub message: String,
  /// Call sites that created it, innermost first
  pub stack:   Vec<String>,
}

impl DebugInfo {
  /// Creates an annotation without call sites.
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into(), stack: Vec::new() }
  }

  /// Appends a call site.
  pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
    self.stack.push(frame.into());
    self
  }
}

impl Display for DebugInfo {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message)?;
    for frame in &self.stack {
      write!(f, "\n\t{frame}")?;
    }
    Ok(())
  }
}
