#![doc = include_str!("../README.md")]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! R1CS core provides the rank-1 constraint system a circuit compiler lowers into.
//!
//! This crate provides tools for:
//! - Interning field coefficients and recording the wire layout of a circuit
//! - Appending `L ⋅ R == O` constraints while maintaining a level/dependency graph
//! - Checking, once compilation is done, that every input and hint wire is constrained
//! - Checking a witness against the system and rendering constraints for diagnostics
//!
//! The core components are:
//! - [`ConstraintSystem`](system::ConstraintSystem): construction, enumeration and checks
//! - [`R1C`](constraint::R1C): a single rank-1 constraint and its wire traversal
//! - [`LevelGraph`](system::level::LevelGraph): scheduling levels for parallel witness solving

use std::{
  collections::{HashMap, HashSet},
  fmt::{self, Display, Formatter},
};

use ark_ff::Field;
#[cfg(test)] use mock::F17;
#[cfg(all(target_arch = "wasm32", test))]
use wasm_bindgen_test::wasm_bindgen_test;

pub mod coeff;
pub mod config;
pub mod constraint;
pub mod debug;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod hint;
pub mod system;
pub mod wire;

pub use crate::{
  coeff::{CoeffId, CoeffTable},
  config::{Config, HintPolicy},
  constraint::{
    expression::{LinearExpression, Term},
    Iterable, WireIterator, R1C,
  },
  debug::DebugInfo,
  diagnostics::{Diagnostics, TracingDiagnostics},
  error::{ConstraintSystemError, Result},
  format::Resolver,
  hint::{Hint, HintId},
  system::ConstraintSystem,
  wire::{Wire, WireSpace},
};

#[cfg(test)]
mod mock {
  //! Test utilities including a simple finite field implementation.
  use std::cell::RefCell;

  use ark_ff::{Fp, MontBackend, MontConfig};

  use crate::{ConstraintSystemError, Diagnostics};

  #[allow(unexpected_cfgs)]
  #[derive(MontConfig)]
  #[modulus = "17"]
  #[generator = "3"]
  pub struct F17Config;
  /// A finite field of order 17 used for testing.
  pub type F17 = Fp<MontBackend<F17Config, 1>, 1>;

  /// Collects warnings instead of emitting them.
  #[derive(Debug, Default)]
  pub struct RecordingDiagnostics {
    /// Rendered warnings, in emission order.
    pub warnings: RefCell<Vec<String>>,
  }

  impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, error: &ConstraintSystemError) {
      self.warnings.borrow_mut().push(error.to_string());
    }
  }
}
