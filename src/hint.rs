//! Descriptors for wires computed outside the constraint system.

use super::*;

/// Identifier of the external procedure computing a hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HintId(pub u32);

/// A hint call: an external function of `inputs` whose results are written to `outputs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hint {
  /// Procedure to call
  pub id:      HintId,
  /// Arguments, as linear expressions over already declared wires
  pub inputs:  Vec<LinearExpression>,
  /// Internal wires receiving the results
  pub outputs: Vec<Wire>,
}

impl Hint {
  /// Creates a hint descriptor.
  pub fn new(id: HintId, inputs: Vec<LinearExpression>, outputs: Vec<Wire>) -> Self {
    Self { id, inputs, outputs }
  }

  /// Wires read by the arguments, skipping zero terms.
  pub fn input_wires(&self) -> impl Iterator<Item = Wire> + '_ {
    self
      .inputs
      .iter()
      .flat_map(LinearExpression::iter)
      .filter(|t| !t.is_zero())
      .map(|t| t.wire_id())
  }
}
