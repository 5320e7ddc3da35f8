//! Interning of the field constants used as term coefficients.
//!
//! Constraints never carry field elements directly. Each coefficient is stored once in a
//! [`CoeffTable`] and terms refer to it through a small [`CoeffId`]. The first four ids are
//! reserved so that the most common coefficients can be recognised without a table lookup.

use super::*;

/// Identifier of a coefficient interned in a [`CoeffTable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoeffId(pub usize);

impl CoeffId {
  /// The coefficient `0`. A term carrying it never constrains its wire.
  pub const ZERO: Self = Self(0);
  /// The coefficient `1`.
  pub const ONE: Self = Self(1);
  /// The coefficient `2`.
  pub const TWO: Self = Self(2);
  /// The coefficient `-1`.
  pub const MINUS_ONE: Self = Self(3);

  /// Position of the coefficient in its table.
  pub const fn index(self) -> usize { self.0 }
}

impl Display for CoeffId {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "c{}", self.0) }
}

/// Table of interned field constants.
#[derive(Clone, Debug)]
pub struct CoeffTable<F: Field> {
  /// Coefficient values, indexed by id
  coefficients: Vec<F>,
  /// Reverse lookup used for interning
  lookup:       HashMap<F, CoeffId>,
}

impl<F: Field> CoeffTable<F> {
  /// Creates a table holding only the reserved coefficients `0, 1, 2, -1`.
  pub fn new() -> Self {
    let reserved = [F::ZERO, F::ONE, F::ONE + F::ONE, -F::ONE];
    let mut lookup = HashMap::with_capacity(reserved.len());
    // In small characteristic some of these coincide; the lowest id wins the lookup but every
    // reserved slot still exists.
    for (i, c) in reserved.iter().enumerate() {
      lookup.entry(*c).or_insert(CoeffId(i));
    }
    Self { coefficients: reserved.to_vec(), lookup }
  }

  /// Interns `c` and returns its id. Equal values always share an id.
  pub fn add_coeff(&mut self, c: F) -> CoeffId {
    if let Some(&id) = self.lookup.get(&c) {
      return id;
    }
    let id = CoeffId(self.coefficients.len());
    self.coefficients.push(c);
    self.lookup.insert(c, id);
    id
  }

  /// Returns the value behind `id`, if it was interned here.
  pub fn get(&self, id: CoeffId) -> Option<&F> { self.coefficients.get(id.index()) }

  /// Number of interned coefficients, reserved ones included.
  pub fn len(&self) -> usize { self.coefficients.len() }

  /// Always `false`: the reserved coefficients are present from construction.
  pub fn is_empty(&self) -> bool { self.coefficients.is_empty() }
}

impl<F: Field> Default for CoeffTable<F> {
  fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
  use ark_ff::AdditiveGroup;

  use super::*;

  #[test]
  #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
  fn test_reserved_coefficients() {
    let table = CoeffTable::<F17>::new();
    assert_eq!(table.len(), 4);
    assert_eq!(table.get(CoeffId::ZERO), Some(&F17::ZERO));
    assert_eq!(table.get(CoeffId::ONE), Some(&F17::ONE));
    assert_eq!(table.get(CoeffId::TWO), Some(&F17::from(2)));
    assert_eq!(table.get(CoeffId::MINUS_ONE), Some(&F17::from(-1)));
  }

  #[test]
  #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
  fn test_interning_is_stable() {
    let mut table = CoeffTable::<F17>::new();

    // Already reserved values resolve to the reserved ids
    assert_eq!(table.add_coeff(F17::ZERO), CoeffId::ZERO);
    assert_eq!(table.add_coeff(F17::from(16)), CoeffId::MINUS_ONE);

    let five = table.add_coeff(F17::from(5));
    let seven = table.add_coeff(F17::from(7));
    assert_eq!(five, CoeffId(4));
    assert_eq!(seven, CoeffId(5));

    // 22 = 5 mod 17
    assert_eq!(table.add_coeff(F17::from(22)), five);
    assert_eq!(table.len(), 6);
    assert_eq!(table.get(CoeffId(6)), None);
  }
}
