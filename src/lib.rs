//! Two-dimensional stable fluids on a fixed square grid.
//!
//! A [`SimState`] owns density and velocity fields with a ghost-cell border.
//! Callers queue sources, call [`SimState::step`], then read cells back.

pub mod config;
pub mod error;
pub mod field;
pub mod solver;
pub mod state;

pub use error::{FluidError, Result};
pub use field::Field;
pub use solver::{diagnostics, FieldType, SolverParams};
pub use state::SimState;
