//! Solve three linear equations in x, y and z with Cramer's rule and explain every step
//! of the derivation.

pub mod config;
pub mod determinant;
pub mod error;
pub mod format;
pub mod matrix;
pub mod parser;
pub mod prelude;
pub mod scalar;
pub mod solver;
pub mod ui;

pub use config::{Arithmetic, InputConfig, RenderConfig, Settings, SolverConfig};
pub use determinant::{determinant, determinant_of, expand, Diagonal, SarrusExpansion};
pub use error::{CramerError, MalformedReason, Result};
pub use format::{Explain, RenderStyle, StepByStep, Summary};
pub use matrix::{Matrix3x3, Vector3};
pub use parser::{parse_equation, Coefficients, ParsedEquation, Variable};
pub use scalar::{Rational, Scalar};
pub use solver::{solve, solve_rows, verify, Solution};
