//! String-based boundary: raw equation text in, derivation text or an error message out.

use crate::config::{Arithmetic, InputConfig, RenderConfig, Settings};
use crate::error::{CramerError, Result};
use crate::matrix::{Matrix3x3, Vector3};
use crate::parser::{parse_equation, ParsedEquation};
use crate::scalar::{Rational, Scalar};
use crate::solver::{solve, Solution};

pub fn parse<T: Scalar>(input: &str) -> Result<ParsedEquation<T>> {
    parse_equation(input)
}

/// Parse all three equations before anything is solved; the first failure wins.
pub fn build_system<T: Scalar>(equations: &[&str]) -> Result<(Matrix3x3<T>, Vector3<T>)> {
    let [first, second, third] = equations else {
        return Err(CramerError::InvalidDimension {
            expected: "3 equations",
            found: equations.len().to_string(),
        });
    };
    let [p1, p2, p3] = [first, second, third].map(|eq| parse_equation::<T>(eq));
    let rows = [p1?, p2?, p3?];

    let a = Matrix3x3::new(rows.clone().map(|eq| eq.coefficients.to_row()));
    let b = Vector3::new(rows.map(|eq| eq.constant));
    Ok((a, b))
}

pub fn solve_eqs<T: Scalar>(equations: &[&str]) -> Result<Solution<T>> {
    let (a, b) = build_system::<T>(equations)?;
    solve(&a, &b)
}

/// Trim every equation and, when configured, reject any whitespace left inside.
pub fn validate(equations: &[&str], input: &InputConfig) -> Result<Vec<String>> {
    equations
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let trimmed = raw.trim();
            if input.reject_whitespace && trimmed.chars().any(char::is_whitespace) {
                return Err(CramerError::EmbeddedWhitespace {
                    index: i + 1,
                    equation: trimmed.to_string(),
                });
            }
            Ok(trimmed.to_string())
        })
        .collect()
}

/// Validate, parse, solve and render according to `settings`.
pub fn explain_eqs(equations: &[&str], settings: &Settings) -> Result<Vec<String>> {
    let cleaned = validate(equations, &settings.input)?;
    let cleaned: Vec<&str> = cleaned.iter().map(String::as_str).collect();
    tracing::debug!(
        arithmetic = %settings.solver.arithmetic,
        style = %settings.render.style,
        "explaining system"
    );
    match settings.solver.arithmetic {
        Arithmetic::Float => explain_with::<f64>(&cleaned, &settings.render),
        Arithmetic::Exact => explain_with::<Rational>(&cleaned, &settings.render),
    }
}

/// Single display payload: the derivation, or the error message on failure.
pub fn respond(equations: &[&str], settings: &Settings) -> String {
    match explain_eqs(equations, settings) {
        Ok(lines) => lines.join("\n"),
        Err(err) => err.to_string(),
    }
}

fn explain_with<T: Scalar>(equations: &[&str], render: &RenderConfig) -> Result<Vec<String>> {
    let (a, b) = build_system::<T>(equations)?;
    let solution = solve(&a, &b)?;
    Ok(render.style.render(&a, &b, &solution, render.precision))
}
