//! Rendering constraints as `L ⋅ R == O`.
//!
//! A [`Resolver`] turns ids back into names. [`ConstraintSystem`] is one, built from the declared
//! input names and its coefficient table.

use super::*;

/// Maps ids to display strings.
pub trait Resolver {
  /// Renders an interned coefficient.
  fn coeff_to_string(&self, coeff: CoeffId) -> String;

  /// Renders a wire.
  fn variable_to_string(&self, wire: Wire) -> String;
}

/// [`Display`] adapter returned by [`R1C::display`].
pub struct Rendered<'a, R: ?Sized> {
  /// Constraint to render
  constraint: &'a R1C,
  /// Name lookup
  resolver:   &'a R,
}

impl R1C {
  /// Renders the constraint with names from `resolver`.
  pub fn display<'a, R: Resolver + ?Sized>(&'a self, resolver: &'a R) -> Rendered<'a, R> {
    Rendered { constraint: self, resolver }
  }
}

impl<R: Resolver + ?Sized> Display for Rendered<'_, R> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write_linear_expression(f, self.resolver, &self.constraint.l)?;
    write!(f, " ⋅ ")?;
    write_linear_expression(f, self.resolver, &self.constraint.r)?;
    write!(f, " == ")?;
    write_linear_expression(f, self.resolver, &self.constraint.o)
  }
}

/// Writes `t0 + t1 + ...`, or `0` for the empty sum.
fn write_linear_expression<R: Resolver + ?Sized>(
  f: &mut Formatter<'_>,
  resolver: &R,
  expr: &LinearExpression,
) -> fmt::Result {
  if expr.is_empty() {
    return write!(f, "0");
  }
  for (i, term) in expr.iter().enumerate() {
    if i > 0 {
      write!(f, " + ")?;
    }
    write_term(f, resolver, *term)?;
  }
  Ok(())
}

/// Writes a single term, eliding unit coefficients.
fn write_term<R: Resolver + ?Sized>(
  f: &mut Formatter<'_>,
  resolver: &R,
  term: Term,
) -> fmt::Result {
  let name = resolver.variable_to_string(term.wire_id());
  match term.coeff_id() {
    CoeffId::ZERO => write!(f, "0"),
    CoeffId::ONE => write!(f, "{name}"),
    CoeffId::MINUS_ONE => write!(f, "-{name}"),
    coeff => write!(f, "{}⋅{name}", resolver.coeff_to_string(coeff)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Names;

  impl Resolver for Names {
    fn coeff_to_string(&self, coeff: CoeffId) -> String { format!("k{}", coeff.index()) }

    fn variable_to_string(&self, wire: Wire) -> String { format!("v{}", wire.index()) }
  }

  #[test]
  #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
  fn test_render() {
    let r1c = R1C::new(
      vec![Term::new(CoeffId(7), Wire(1)), Term::new(CoeffId::MINUS_ONE, Wire(2))].into(),
      vec![Term::new(CoeffId::ONE, Wire(0))].into(),
      LinearExpression::new(),
    );
    assert_eq!(r1c.display(&Names).to_string(), "k7⋅v1 + -v2 ⋅ v0 == 0");
  }
}
