//! Level/dependency graph used to schedule witness solving.
//!
//! Each constraint gets a level one above the highest level of the constraints producing the
//! wires it reads. All constraints of a level are data-independent, so a solver can run a level
//! in parallel and put a barrier between consecutive levels.
//!
//! Which wires a constraint *produces* is decided while leveling it:
//! - inputs (the constant-one wire included) are known before solving and produce nothing
//! - a wire that already has a producing level is a dependency
//! - an unsolved hint output pulls in the hint's arguments as dependencies, and every output of
//!   that hint becomes produced by this constraint
//! - any other unsolved wire is produced by this constraint

use super::*;

/// Constraint levels and the producing level of every solved wire.
#[derive(Clone, Debug, Default)]
pub struct LevelGraph {
  /// Constraint ids grouped by level, ascending inside a level
  levels:            Vec<Vec<usize>>,
  /// Level of each leveled constraint, indexed by constraint id
  constraint_levels: Vec<usize>,
  /// Producing level of each wire, indexed by wire
  wire_levels:       Vec<Option<usize>>,
}

impl LevelGraph {
  /// Constraint ids grouped by level.
  pub fn levels(&self) -> &[Vec<usize>] { &self.levels }

  /// Number of distinct levels.
  pub fn nb_levels(&self) -> usize { self.levels.len() }

  /// Level of constraint `cid`, once leveled.
  pub fn level(&self, cid: usize) -> Option<usize> { self.constraint_levels.get(cid).copied() }

  /// Level of the constraint producing `wire`, once produced.
  pub fn wire_level(&self, wire: Wire) -> Option<usize> {
    self.wire_levels.get(wire.index()).copied().flatten()
  }

  /// Number of constraints leveled so far.
  pub fn nb_leveled(&self) -> usize { self.constraint_levels.len() }

  /// Records `cid` at `level` as the producer of `outputs`.
  fn record(&mut self, cid: usize, level: usize, outputs: &[Wire]) {
    for wire in outputs {
      if wire.index() >= self.wire_levels.len() {
        self.wire_levels.resize(wire.index() + 1, None);
      }
      self.wire_levels[wire.index()] = Some(level);
    }
    self.constraint_levels.push(level);
    // A level is at most one above an existing one, so levels are never skipped
    match self.levels.get_mut(level) {
      Some(ids) => ids.push(cid),
      None => self.levels.push(vec![cid]),
    }
  }
}

impl<F: Field> ConstraintSystem<F> {
  /// Assigns a level to constraint `cid` given every wire it reads, and returns it.
  ///
  /// Must be called once per constraint, right after
  /// [`add_constraint`](Self::add_constraint), in append order.
  pub fn update_level<I>(&mut self, cid: usize, wires: I) -> Result<usize>
  where I: IntoIterator<Item = Wire> {
    let expected = self.levels.nb_leveled();
    if cid != expected {
      return Err(ConstraintSystemError::LevelOutOfOrder { expected, got: cid });
    }
    if cid >= self.constraints.len() {
      return Err(ConstraintSystemError::UnknownConstraint {
        cid,
        nb_constraints: self.constraints.len(),
      });
    }

    let (max_dependency, outputs) = self.dependencies(wires)?;
    let level = max_dependency.map_or(0, |l| l + 1);
    tracing::trace!(cid, level, outputs = outputs.len(), "leveled constraint");
    self.levels.record(cid, level, &outputs);
    Ok(level)
  }

  /// Highest producing level among the wires read, and the wires left for this constraint to
  /// produce.
  fn dependencies<I>(&self, wires: I) -> Result<(Option<usize>, Vec<Wire>)>
  where I: IntoIterator<Item = Wire> {
    let mut pending: Vec<Wire> = wires.into_iter().collect();
    let mut expanded_hints = HashSet::new();
    let mut max_dependency = None;
    let mut outputs = Vec::new();

    while let Some(wire) = pending.pop() {
      self.wires.check(wire)?;
      if self.wires.is_input(wire) {
        continue;
      }
      if let Some(level) = self.levels.wire_level(wire) {
        max_dependency = max_dependency.max(Some(level));
        continue;
      }
      if let Some(&index) = self.hint_wires.get(&wire) {
        if expanded_hints.insert(index) {
          let hint = &self.hints[index];
          pending.extend(hint.input_wires());
          for &output in &hint.outputs {
            if !outputs.contains(&output) {
              outputs.push(output);
            }
          }
        }
        continue;
      }
      if !outputs.contains(&wire) {
        outputs.push(wire);
      }
    }

    Ok((max_dependency, outputs))
  }

  /// Scheduling levels computed so far.
  pub const fn level_graph(&self) -> &LevelGraph { &self.levels }

  /// Level of constraint `cid`, once leveled.
  pub fn level(&self, cid: usize) -> Option<usize> { self.levels.level(cid) }

  /// Constraint ids grouped by level.
  pub fn levels(&self) -> &[Vec<usize>] { self.levels.levels() }
}
