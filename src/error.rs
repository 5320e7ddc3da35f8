//! Error definitions for the constraint system.

use super::*;

/// Result alias used throughout the crate.
pub type Result<T, E = ConstraintSystemError> = std::result::Result<T, E>;

/// Constraint system related error.
#[allow(missing_docs)] // errors are self-documenting
#[derive(Debug, thiserror::Error)]
pub enum ConstraintSystemError {
  #[error("invalid constraint system: no input defined")]
  NoInputs,
  #[error("{} unconstrained input(s):\n{}\n", .names.len(), .names.join("\n"))]
  UnconstrainedInputs { names: Vec<String> },
  #[error(
    "{count} unconstrained hints; i.e. wire created through a hint but doesn't appear in the constraint system"
  )]
  UnconstrainedHints { count: usize },
  #[error("wire {wire} is out of range, the system declares {nb_wires} wires")]
  WireOutOfRange { wire: Wire, nb_wires: usize },
  #[error("constraint #{cid} does not exist, the system holds {nb_constraints} constraints")]
  UnknownConstraint { cid: usize, nb_constraints: usize },
  #[error("levels must be assigned in append order: expected constraint #{expected}, got #{got}")]
  LevelOutOfOrder { expected: usize, got: usize },
  #[error("coefficient {coeff} is not in the coefficient table")]
  UnknownCoeff { coeff: CoeffId },
  #[error("hint output {wire} is an input wire")]
  HintWireNotInternal { wire: Wire },
  #[error("hint output {wire} is already produced by another hint")]
  HintWireAlreadyRegistered { wire: Wire },
  #[error("public input {name:?} declared after a secret input")]
  PublicAfterSecret { name: String },
  #[error("input {name:?} declared after an internal wire")]
  InputAfterInternal { name: String },
  #[error("witness holds {actual} values, expected {expected}")]
  WitnessLength { expected: usize, actual: usize },
  #[error("witness value for the constant-one wire is not 1")]
  InvalidOneWire,
  #[error("constraint #{cid} is not satisfied: {constraint}")]
  Unsatisfied { cid: usize, constraint: String, debug: Option<DebugInfo> },
}
