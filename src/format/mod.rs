//! Renderers turning a solved system into human-readable lines.

pub mod steps;
pub mod summary;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::matrix::{Matrix3x3, Vector3};
use crate::parser::Variable;
use crate::scalar::Scalar;
use crate::solver::Solution;

pub use steps::StepByStep;
pub use summary::Summary;

/// Anything that can explain a solution of `A·[x, y, z] = B`.
pub trait Explain {
    fn explain<T: Scalar>(
        &self,
        coefficients: &Matrix3x3<T>,
        constants: &Vector3<T>,
        solution: &Solution<T>,
    ) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    #[default]
    Steps,
    Summary,
}

impl RenderStyle {
    pub fn render<T: Scalar>(
        self,
        coefficients: &Matrix3x3<T>,
        constants: &Vector3<T>,
        solution: &Solution<T>,
        precision: Option<usize>,
    ) -> Vec<String> {
        match self {
            RenderStyle::Steps => {
                StepByStep { precision }.explain(coefficients, constants, solution)
            }
            RenderStyle::Summary => {
                Summary { precision }.explain(coefficients, constants, solution)
            }
        }
    }
}

impl FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steps" => Ok(RenderStyle::Steps),
            "summary" => Ok(RenderStyle::Summary),
            other => Err(format!("unknown render style `{other}` (expected steps or summary)")),
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Steps => write!(f, "steps"),
            RenderStyle::Summary => write!(f, "summary"),
        }
    }
}

/// Value as a product factor: negatives are parenthesized.
pub(crate) fn factor<T: Scalar>(value: &T, precision: Option<usize>) -> String {
    let text = value.render(precision);
    if value.is_negative() && !value.is_zero() {
        format!("({text})")
    } else {
        text
    }
}

/// `a * b * c` with negative factors parenthesized.
pub(crate) fn product<T: Scalar>(factors: &[T], precision: Option<usize>) -> String {
    factors
        .iter()
        .map(|f| factor(f, precision))
        .collect::<Vec<_>>()
        .join(" * ")
}

/// `2x - y + (1/2)z = 3`; zero terms are left out.
pub(crate) fn equation_line<T: Scalar>(
    row: &[T; 3],
    constant: &T,
    precision: Option<usize>,
) -> String {
    let mut lhs = String::new();
    for (coeff, var) in row.iter().zip(Variable::ALL) {
        if coeff.is_zero() {
            continue;
        }
        let magnitude = coeff.abs();
        let body = if magnitude.is_one() {
            var.symbol().to_string()
        } else {
            let text = magnitude.render(precision);
            if text.contains('/') {
                format!("({text}){}", var.symbol())
            } else {
                format!("{text}{}", var.symbol())
            }
        };
        match (lhs.is_empty(), coeff.is_negative()) {
            (true, true) => lhs.push('-'),
            (true, false) => {}
            (false, true) => lhs.push_str(" - "),
            (false, false) => lhs.push_str(" + "),
        }
        lhs.push_str(&body);
    }
    if lhs.is_empty() {
        lhs.push('0');
    }
    format!("{lhs} = {}", constant.render(precision))
}

/// Rows of a determinant with right-aligned columns, e.g. `| 1 -1  2 |`.
pub(crate) fn matrix_lines<T: Scalar>(
    matrix: &Matrix3x3<T>,
    precision: Option<usize>,
) -> Vec<String> {
    let cells: Vec<Vec<String>> = matrix
        .rows()
        .iter()
        .map(|row| row.iter().map(|v| v.render(precision)).collect())
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(1);
    cells
        .iter()
        .map(|row| {
            let body = row
                .iter()
                .map(|cell| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!("| {body} |")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Rational;

    #[test]
    fn equation_line_skips_zero_and_unit_coefficients() {
        assert_eq!(equation_line(&[2.0, -1.0, 1.0], &3.0, None), "2x - y + z = 3");
        assert_eq!(equation_line(&[-1.0, 0.0, 0.5], &0.0, None), "-x + 0.5z = 0");
        assert_eq!(equation_line(&[0.0, 0.0, 0.0], &4.0, None), "0 = 4");
    }

    #[test]
    fn equation_line_wraps_fractions() {
        let half = Rational::new(1.into(), 2.into());
        let row = [Rational::from_integer(1.into()), -half.clone(), half];
        let constant = Rational::from_integer(2.into());
        assert_eq!(equation_line(&row, &constant, None), "x - (1/2)y + (1/2)z = 2");
    }

    #[test]
    fn matrix_lines_are_aligned() {
        let m = Matrix3x3::new([[1.0, 1.0, 1.0], [2.0, -1.0, 1.0], [1.0, 2.0, -10.0]]);
        assert_eq!(
            matrix_lines(&m, None),
            vec!["|   1   1   1 |", "|   2  -1   1 |", "|   1   2 -10 |"]
        );
    }

    #[test]
    fn products_parenthesize_negatives() {
        assert_eq!(product(&[1.0, -1.0, -1.0], None), "1 * (-1) * (-1)");
    }

    #[test]
    fn style_round_trips_through_text() {
        assert_eq!("summary".parse::<RenderStyle>(), Ok(RenderStyle::Summary));
        assert_eq!(RenderStyle::Steps.to_string(), "steps");
        assert!("verbose".parse::<RenderStyle>().is_err());
    }
}
