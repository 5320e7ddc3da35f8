//! Constraint system configuration.

/// What the unconstrained-wire check does with hint outputs that no constraint reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HintPolicy {
  /// Report them through the injected diagnostics and succeed.
  #[default]
  Warn,
  /// Fail the check.
  Deny,
}

/// Settings fixed when a constraint system is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
  /// Handling of unconstrained hint outputs
  pub hint_policy: HintPolicy,
}

impl Config {
  /// Configuration rejecting unconstrained hint outputs.
  pub const fn strict() -> Self { Self { hint_policy: HintPolicy::Deny } }
}
