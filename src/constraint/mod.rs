//! Rank-1 constraints and traversal of the wires they read.
//!
//! An [`R1C`] is a triple of linear expressions `(L, R, O)` standing for `L ⋅ R == O`. Its wires
//! are visited through a [`WireIterator`], a plain cursor over the three segments, so every
//! traversal is independent and restarting one just means asking for a new iterator.

use std::iter::FusedIterator;

use super::*;

pub mod expression;

use self::expression::*;

/// A rank-1 constraint `L ⋅ R == O`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct R1C {
  /// Left factor
  pub l: LinearExpression,
  /// Right factor
  pub r: LinearExpression,
  /// Product
  pub o: LinearExpression,
}

impl R1C {
  /// Creates the constraint `l ⋅ r == o`.
  pub const fn new(l: LinearExpression, r: LinearExpression, o: LinearExpression) -> Self {
    Self { l, r, o }
  }

  /// The three linear expressions in `L, R, O` order.
  pub const fn linear_expressions(&self) -> [&LinearExpression; 3] { [&self.l, &self.r, &self.o] }

  /// Evaluates both sides against `witness` and compares them.
  pub fn is_satisfied<F: Field>(&self, coeffs: &CoeffTable<F>, witness: &[F]) -> Result<bool> {
    let l = self.l.evaluate(coeffs, witness)?;
    let r = self.r.evaluate(coeffs, witness)?;
    let o = self.o.evaluate(coeffs, witness)?;
    Ok(l * r == o)
  }
}

/// Something whose wires can be traversed.
pub trait Iterable {
  /// Iterator over the wire ids, duplicates included.
  type Wires<'a>: Iterator<Item = Wire>
  where Self: 'a;

  /// Starts a fresh traversal.
  fn wire_iter(&self) -> Self::Wires<'_>;
}

impl Iterable for R1C {
  type Wires<'a> = WireIterator<'a>;

  fn wire_iter(&self) -> WireIterator<'_> { WireIterator::new(self) }
}

impl<'a> IntoIterator for &'a R1C {
  type IntoIter = WireIterator<'a>;
  type Item = Wire;

  fn into_iter(self) -> Self::IntoIter { WireIterator::new(self) }
}

/// Cursor over the wires of an [`R1C`]: every term of `L`, then `R`, then `O`.
///
/// `None` marks the end of the traversal. Cloning yields an independent cursor at the same
/// position.
#[derive(Clone, Debug)]
pub struct WireIterator<'a> {
  /// Constraint being traversed
  constraint: &'a R1C,
  /// Position over the concatenation `L ++ R ++ O`
  curr:       usize,
  /// End of the `L` segment
  end_l:      usize,
  /// End of the `R` segment
  end_r:      usize,
  /// End of the `O` segment
  end_o:      usize,
}

impl<'a> WireIterator<'a> {
  /// Creates a cursor positioned before the first term of `L`.
  pub fn new(constraint: &'a R1C) -> Self {
    let end_l = constraint.l.len();
    let end_r = end_l + constraint.r.len();
    let end_o = end_r + constraint.o.len();
    Self { constraint, curr: 0, end_l, end_r, end_o }
  }
}

impl Iterator for WireIterator<'_> {
  type Item = Wire;

  fn next(&mut self) -> Option<Wire> {
    let curr = self.curr;
    let term = if curr < self.end_l {
      self.constraint.l.terms()[curr]
    } else if curr < self.end_r {
      self.constraint.r.terms()[curr - self.end_l]
    } else if curr < self.end_o {
      self.constraint.o.terms()[curr - self.end_r]
    } else {
      return None;
    };
    self.curr += 1;
    Some(term.wire_id())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.end_o - self.curr.min(self.end_o);
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for WireIterator<'_> {}

impl FusedIterator for WireIterator<'_> {}
