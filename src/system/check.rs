//! Post-compilation check that inputs and hint outputs are actually constrained.

use super::*;

impl<F: Field> ConstraintSystem<F> {
  /// Checks that every declared input and every hint output appears in some constraint with a
  /// non-zero coefficient.
  ///
  /// Runs once, after the last constraint is appended. Unconstrained inputs are always an error.
  /// Unconstrained hint outputs follow [`Config::hint_policy`]: with [`HintPolicy::Warn`] they
  /// are reported to `log` and the check passes.
  pub fn check_unconstrained_wires<D: Diagnostics + ?Sized>(&self, log: &D) -> Result<()> {
    // The constant-one wire needs no constraint
    let mut input_constrained = vec![false; self.wires.nb_inputs()];
    input_constrained[0] = true;
    let mut remaining_inputs = input_constrained.len() - 1;
    if remaining_inputs == 0 {
      return Err(ConstraintSystemError::NoInputs);
    }

    let mut hint_constrained = HashSet::with_capacity(self.hint_wires.len());
    let mut remaining_hints = self.hint_wires.len();

    for r1c in &self.constraints {
      for expr in r1c.linear_expressions() {
        // A zero coefficient does not constrain its wire
        for term in expr.iter().filter(|t| !t.is_zero()) {
          let wire = term.wire_id();
          self.wires.check(wire)?;
          if let Some(seen) = input_constrained.get_mut(wire.index()) {
            if !*seen {
              *seen = true;
              remaining_inputs -= 1;
            }
          } else if self.hint_wires.contains_key(&wire) && hint_constrained.insert(wire) {
            remaining_hints -= 1;
          }
        }
      }
      if remaining_inputs == 0 && remaining_hints == 0 {
        break;
      }
    }

    if remaining_inputs > 0 {
      let names = input_constrained
        .iter()
        .enumerate()
        .filter(|(_, &seen)| !seen)
        .filter_map(|(i, _)| self.wires.name(Wire(i)))
        .map(str::to_owned)
        .collect();
      return Err(ConstraintSystemError::UnconstrainedInputs { names });
    }

    if remaining_hints > 0 {
      let error = ConstraintSystemError::UnconstrainedHints { count: remaining_hints };
      match self.config.hint_policy {
        HintPolicy::Warn => log.warn(&error),
        HintPolicy::Deny => return Err(error),
      }
    }
    Ok(())
  }
}
