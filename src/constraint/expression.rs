use super::*;

/// A single `coefficient ⋅ wire` summand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Term {
  /// Interned coefficient
  pub coeff: CoeffId,
  /// Wire the coefficient applies to
  pub wire:  Wire,
}

impl Term {
  /// Creates the term `coeff ⋅ wire`.
  pub const fn new(coeff: CoeffId, wire: Wire) -> Self { Self { coeff, wire } }

  /// The wire this term reads.
  pub const fn wire_id(self) -> Wire { self.wire }

  /// The interned coefficient of this term.
  pub const fn coeff_id(self) -> CoeffId { self.coeff }

  /// Whether the coefficient is the reserved zero, in which case the term constrains nothing.
  pub fn is_zero(self) -> bool { self.coeff == CoeffId::ZERO }
}

/// An ordered weighted sum of wires.
///
/// Terms are kept exactly in insertion order: duplicates are not merged and zero terms are not
/// dropped, so traversal and rendering are deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LinearExpression(Vec<Term>);

impl LinearExpression {
  /// Creates the empty expression, which evaluates to zero.
  pub const fn new() -> Self { Self(Vec::new()) }

  /// Appends a term.
  pub fn push(&mut self, term: Term) { self.0.push(term) }

  /// The terms, in order.
  pub fn terms(&self) -> &[Term] { &self.0 }

  /// Iterates over the terms, in order.
  pub fn iter(&self) -> std::slice::Iter<'_, Term> { self.0.iter() }

  /// Number of terms.
  pub fn len(&self) -> usize { self.0.len() }

  /// Whether there are no terms.
  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// Evaluates the sum against a witness indexed by wire.
  pub fn evaluate<F: Field>(&self, coeffs: &CoeffTable<F>, witness: &[F]) -> Result<F> {
    self.iter().try_fold(F::ZERO, |acc, term| {
      let c =
        coeffs.get(term.coeff).ok_or(ConstraintSystemError::UnknownCoeff { coeff: term.coeff })?;
      let v = witness
        .get(term.wire.index())
        .ok_or(ConstraintSystemError::WireOutOfRange { wire: term.wire, nb_wires: witness.len() })?;
      Ok(acc + *c * *v)
    })
  }
}

impl From<Vec<Term>> for LinearExpression {
  fn from(terms: Vec<Term>) -> Self { Self(terms) }
}

impl FromIterator<Term> for LinearExpression {
  fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self { Self(iter.into_iter().collect()) }
}

impl<'a> IntoIterator for &'a LinearExpression {
  type IntoIter = std::slice::Iter<'a, Term>;
  type Item = &'a Term;

  fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl std::ops::Add for LinearExpression {
  type Output = Self;

  /// Concatenates the terms of both sides.
  fn add(mut self, rhs: Self) -> Self::Output {
    self.0.extend(rhs.0);
    self
  }
}
