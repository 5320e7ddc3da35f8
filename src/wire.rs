//! Wire identifiers and the layout of the wire space.
//!
//! Wires are dense indices laid out as:
//!
//! ```text
//! [ 1 | public inputs | secret inputs | internal wires (hint outputs included) ]
//!   0   1 ..                                                      nb_wires - 1
//! ```
//!
//! The front-end decides when wires are declared; [`WireSpace`] only records the counts and the
//! input names, and refuses declarations that would break the layout.

use super::*;

/// Name given to the constant-one wire.
pub const ONE_WIRE_NAME: &str = "1";

/// An opaque wire index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wire(pub usize);

impl Wire {
  /// The constant-one wire. Its value is fixed to `1` in every witness.
  pub const ONE: Self = Self(0);

  /// Position of the wire in a witness vector.
  pub const fn index(self) -> usize { self.0 }
}

impl Display for Wire {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "v{}", self.0) }
}

/// Declared wires of a constraint system.
#[derive(Clone, Debug)]
pub struct WireSpace {
  /// Public input names, the constant-one wire first
  public:      Vec<String>,
  /// Secret input names
  secret:      Vec<String>,
  /// Number of internal wires
  nb_internal: usize,
}

impl WireSpace {
  /// Creates a wire space holding only the constant-one wire at index 0.
  pub fn new() -> Self {
    Self { public: vec![ONE_WIRE_NAME.to_owned()], secret: Vec::new(), nb_internal: 0 }
  }

  /// Declares the next public input.
  pub fn add_public_variable(&mut self, name: impl Into<String>) -> Result<Wire> {
    let name = name.into();
    if !self.secret.is_empty() {
      return Err(ConstraintSystemError::PublicAfterSecret { name });
    }
    if self.nb_internal > 0 {
      return Err(ConstraintSystemError::InputAfterInternal { name });
    }
    self.public.push(name);
    Ok(Wire(self.public.len() - 1))
  }

  /// Declares the next secret input.
  pub fn add_secret_variable(&mut self, name: impl Into<String>) -> Result<Wire> {
    let name = name.into();
    if self.nb_internal > 0 {
      return Err(ConstraintSystemError::InputAfterInternal { name });
    }
    self.secret.push(name);
    Ok(Wire(self.nb_inputs() - 1))
  }

  /// Declares the next internal wire.
  pub fn add_internal_variable(&mut self) -> Wire {
    let wire = Wire(self.nb_wires());
    self.nb_internal += 1;
    wire
  }

  /// Number of public wires, the constant-one wire included.
  pub fn nb_public(&self) -> usize { self.public.len() }

  /// Number of secret input wires.
  pub fn nb_secret(&self) -> usize { self.secret.len() }

  /// Number of internal wires.
  pub fn nb_internal(&self) -> usize { self.nb_internal }

  /// Number of public and secret wires; these occupy indices `0..nb_inputs()`.
  pub fn nb_inputs(&self) -> usize { self.public.len() + self.secret.len() }

  /// Total number of wires.
  pub fn nb_wires(&self) -> usize { self.nb_inputs() + self.nb_internal }

  /// Whether `wire` is the constant-one wire or a declared input.
  pub fn is_input(&self, wire: Wire) -> bool { wire.index() < self.nb_inputs() }

  /// Public names, the constant-one wire first.
  pub fn public_names(&self) -> &[String] { &self.public }

  /// Secret names.
  pub fn secret_names(&self) -> &[String] { &self.secret }

  /// Declared name of an input wire. Internal wires have none.
  pub fn name(&self, wire: Wire) -> Option<&str> {
    let i = wire.index();
    let name = match i.checked_sub(self.public.len()) {
      None => self.public.get(i),
      Some(j) => self.secret.get(j),
    };
    name.map(String::as_str)
  }

  /// Fails if `wire` was never declared.
  pub fn check(&self, wire: Wire) -> Result<()> {
    if wire.index() < self.nb_wires() {
      Ok(())
    } else {
      Err(ConstraintSystemError::WireOutOfRange { wire, nb_wires: self.nb_wires() })
    }
  }
}

impl Default for WireSpace {
  fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
  fn test_layout() {
    let mut wires = WireSpace::new();
    assert_eq!(wires.nb_wires(), 1);
    assert_eq!(wires.name(Wire::ONE), Some(ONE_WIRE_NAME));

    let x = wires.add_public_variable("x").unwrap();
    let y = wires.add_public_variable("y").unwrap();
    let s = wires.add_secret_variable("s").unwrap();
    let v = wires.add_internal_variable();

    assert_eq!((x, y, s, v), (Wire(1), Wire(2), Wire(3), Wire(4)));
    assert_eq!(wires.nb_public(), 3);
    assert_eq!(wires.nb_secret(), 1);
    assert_eq!(wires.nb_inputs(), 4);
    assert_eq!(wires.nb_wires(), 5);

    assert!(wires.is_input(s));
    assert!(!wires.is_input(v));
    assert_eq!(wires.name(y), Some("y"));
    assert_eq!(wires.name(s), Some("s"));
    assert_eq!(wires.name(v), None);
  }

  #[test]
  #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
  fn test_inputs_must_be_a_prefix() {
    let mut wires = WireSpace::new();
    wires.add_secret_variable("s").unwrap();
    assert!(matches!(
      wires.add_public_variable("x"),
      Err(ConstraintSystemError::PublicAfterSecret { name }) if name == "x"
    ));

    wires.add_internal_variable();
    assert!(matches!(
      wires.add_secret_variable("t"),
      Err(ConstraintSystemError::InputAfterInternal { .. })
    ));
  }

  #[test]
  #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
  fn test_check_bounds() {
    let mut wires = WireSpace::new();
    wires.add_internal_variable();
    assert!(wires.check(Wire(1)).is_ok());
    assert!(matches!(
      wires.check(Wire(2)),
      Err(ConstraintSystemError::WireOutOfRange { wire: Wire(2), nb_wires: 2 })
    ));
  }
}
