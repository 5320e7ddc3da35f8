//! The append-only rank-1 constraint system.
//!
//! A front-end builds a [`ConstraintSystem`] in three interleaved kinds of calls:
//! 1. Declaring wires and hints: [`add_public_variable`](ConstraintSystem::add_public_variable),
//!    [`add_internal_variable`](ConstraintSystem::add_internal_variable),
//!    [`add_hint`](ConstraintSystem::add_hint)
//! 2. Appending a constraint: [`add_constraint`](ConstraintSystem::add_constraint)
//! 3. Leveling it right away: [`update_level`](ConstraintSystem::update_level)
//!
//! Once compilation is over,
//! [`check_unconstrained_wires`](ConstraintSystem::check_unconstrained_wires) runs once before the system is handed to a solver or prover.

use super::*;

pub mod check;
pub mod level;

use self::level::LevelGraph;

/// A rank-1 constraint system over the field `F`.
#[derive(Clone, Debug)]
pub struct ConstraintSystem<F: Field> {
  /// Declared wires
  wires:       WireSpace,
  /// Interned coefficients
  coeffs:      CoeffTable<F>,
  /// Constraints, indexed by constraint id
  constraints: Vec<R1C>,
  /// Registered hints
  hints:       Vec<Hint>,
  /// Hint output wire to its index in `hints`
  hint_wires:  HashMap<Wire, usize>,
  /// Annotations that were supplied
  debug_info:  Vec<DebugInfo>,
  /// Constraint id to its index in `debug_info`
  debug_index: HashMap<usize, usize>,
  /// Scheduling levels
  levels:      LevelGraph,
  /// Settings
  config:      Config,
}

impl<F: Field> ConstraintSystem<F> {
  /// Creates an empty system with the default configuration.
  pub fn new() -> Self { Self::with_config(Config::default()) }

  /// Creates an empty system.
  pub fn with_config(config: Config) -> Self {
    Self {
      wires: WireSpace::new(),
      coeffs: CoeffTable::new(),
      constraints: Vec::new(),
      hints: Vec::new(),
      hint_wires: HashMap::new(),
      debug_info: Vec::new(),
      debug_index: HashMap::new(),
      levels: LevelGraph::default(),
      config,
    }
  }

  /// Settings this system was created with.
  pub const fn config(&self) -> &Config { &self.config }

  /// Declared wires.
  pub const fn wires(&self) -> &WireSpace { &self.wires }

  /// Interned coefficients.
  pub const fn coeffs(&self) -> &CoeffTable<F> { &self.coeffs }

  /// Declares the next public input. See [`WireSpace::add_public_variable`].
  pub fn add_public_variable(&mut self, name: impl Into<String>) -> Result<Wire> {
    self.wires.add_public_variable(name)
  }

  /// Declares the next secret input. See [`WireSpace::add_secret_variable`].
  pub fn add_secret_variable(&mut self, name: impl Into<String>) -> Result<Wire> {
    self.wires.add_secret_variable(name)
  }

  /// Declares the next internal wire.
  pub fn add_internal_variable(&mut self) -> Wire { self.wires.add_internal_variable() }

  /// Interns a coefficient.
  pub fn add_coeff(&mut self, c: F) -> CoeffId { self.coeffs.add_coeff(c) }

  /// Builds the term `c ⋅ wire`, interning `c`.
  pub fn make_term(&mut self, c: F, wire: Wire) -> Term { Term::new(self.add_coeff(c), wire) }

  /// Registers a hint and returns its index.
  ///
  /// Every output must be a declared internal wire not yet produced by another hint, and every
  /// input wire must be declared.
  pub fn add_hint(&mut self, hint: Hint) -> Result<usize> {
    for wire in hint.input_wires() {
      self.wires.check(wire)?;
    }
    for (i, &wire) in hint.outputs.iter().enumerate() {
      self.wires.check(wire)?;
      if self.wires.is_input(wire) {
        return Err(ConstraintSystemError::HintWireNotInternal { wire });
      }
      if self.hint_wires.contains_key(&wire) || hint.outputs[..i].contains(&wire) {
        return Err(ConstraintSystemError::HintWireAlreadyRegistered { wire });
      }
    }

    let index = self.hints.len();
    self.hint_wires.extend(hint.outputs.iter().map(|&wire| (wire, index)));
    self.hints.push(hint);
    Ok(index)
  }

  /// Hint producing `wire`, if any.
  pub fn hint(&self, wire: Wire) -> Option<&Hint> {
    self.hint_wires.get(&wire).and_then(|&i| self.hints.get(i))
  }

  /// Registered hints, in registration order.
  pub fn hints(&self) -> &[Hint] { &self.hints }

  /// Number of wires produced by hints.
  pub fn nb_hints(&self) -> usize { self.hint_wires.len() }

  /// Appends a constraint and returns its id.
  ///
  /// Ids start at 0 and grow by one per call. The constraint is not checked here; callers must
  /// follow up with [`update_level`](Self::update_level) for the returned id. A supplied
  /// annotation is stored under the same id.
  pub fn add_constraint(&mut self, r1c: R1C, debug: Option<DebugInfo>) -> usize {
    let cid = self.constraints.len();
    self.constraints.push(r1c);
    if let Some(info) = debug {
      self.debug_index.insert(cid, self.debug_info.len());
      self.debug_info.push(info);
    }
    cid
  }

  /// Appends a constraint and levels it over its own wires.
  ///
  /// Nothing is appended if a wire is undeclared, so a rejected constraint leaves the system
  /// usable.
  pub fn add_constraint_with_level(&mut self, r1c: R1C, debug: Option<DebugInfo>) -> Result<usize> {
    let wires: Vec<_> = r1c.wire_iter().collect();
    for &wire in &wires {
      self.wires.check(wire)?;
    }
    let cid = self.add_constraint(r1c, debug);
    self.update_level(cid, wires)?;
    Ok(cid)
  }

  /// All constraints in id order, with a resolver for rendering them.
  ///
  /// Experimental: the representation may change.
  pub fn get_constraints(&self) -> (&[R1C], &Self) { (&self.constraints, self) }

  /// Number of constraints.
  pub fn get_nb_constraints(&self) -> usize { self.constraints.len() }

  /// Constraint with id `cid`.
  pub fn constraint(&self, cid: usize) -> Option<&R1C> { self.constraints.get(cid) }

  /// Annotation supplied for constraint `cid`.
  pub fn debug_info(&self, cid: usize) -> Option<&DebugInfo> {
    self.debug_index.get(&cid).and_then(|&i| self.debug_info.get(i))
  }

  /// Checks a full assignment, indexed by wire, against every constraint.
  ///
  /// Reports the first violated constraint along with its annotation.
  pub fn is_satisfied(&self, witness: &[F]) -> Result<()> {
    let expected = self.wires.nb_wires();
    if witness.len() != expected {
      return Err(ConstraintSystemError::WitnessLength { expected, actual: witness.len() });
    }
    if witness.first() != Some(&F::ONE) {
      return Err(ConstraintSystemError::InvalidOneWire);
    }

    for (cid, r1c) in self.constraints.iter().enumerate() {
      if !r1c.is_satisfied(&self.coeffs, witness)? {
        return Err(ConstraintSystemError::Unsatisfied {
          cid,
          constraint: r1c.display(self).to_string(),
          debug: self.debug_info(cid).cloned(),
        });
      }
    }
    Ok(())
  }
}

impl<F: Field> Default for ConstraintSystem<F> {
  fn default() -> Self { Self::new() }
}

impl<F: Field> Resolver for ConstraintSystem<F> {
  fn coeff_to_string(&self, coeff: CoeffId) -> String {
    self.coeffs.get(coeff).map_or_else(|| coeff.to_string(), ToString::to_string)
  }

  fn variable_to_string(&self, wire: Wire) -> String {
    self.wires.name(wire).map_or_else(|| wire.to_string(), str::to_owned)
  }
}
