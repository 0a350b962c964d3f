use crate::determinant::{expand, Diagonal, SarrusExpansion};
use crate::matrix::{Matrix3x3, Vector3};
use crate::parser::Variable;
use crate::scalar::Scalar;
use crate::solver::{verify, Solution};

use super::{equation_line, factor, matrix_lines, product, Explain};

/// Full derivation: every diagonal product, partial sum and quotient, then a check.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepByStep {
    pub precision: Option<usize>,
}

impl Explain for StepByStep {
    fn explain<T: Scalar>(
        &self,
        coefficients: &Matrix3x3<T>,
        constants: &Vector3<T>,
        solution: &Solution<T>,
    ) -> Vec<String> {
        let p = self.precision;
        let mut lines = vec!["System of equations:".to_string()];
        for (row, constant) in coefficients.rows().iter().zip(constants.values()) {
            lines.push(format!("  {}", equation_line(row, constant, p)));
        }
        lines.push(String::new());
        lines.push("Cramer's rule: each unknown is the ratio of two determinants.".to_string());

        lines.push(String::new());
        lines.push("Determinant of the system (D):".to_string());
        push_expansion(&mut lines, "D", coefficients, p);

        let values = solution.values();
        let column_dets = solution.column_determinants();
        for var in Variable::ALL {
            let name = format!("D{}", var.symbol());
            let substituted = coefficients.with_column(var.index(), constants);
            lines.push(String::new());
            lines.push(format!(
                "Determinant for {} ({name}), column {} replaced by the constants:",
                var.symbol(),
                var.index() + 1
            ));
            push_expansion(&mut lines, &name, &substituted, p);
            lines.push(format!(
                "  {} = {name} / D = {} / {} = {}",
                var.symbol(),
                column_dets[var.index()].render(p),
                solution.det.render(p),
                values[var.index()].render(p)
            ));
        }

        lines.push(String::new());
        lines.push("Solution:".to_string());
        for (var, value) in Variable::ALL.iter().zip(values.iter()) {
            lines.push(format!("  {} = {}", var.symbol(), value.render(p)));
        }

        lines.push(String::new());
        lines.push("Verification (substituting x, y, z back):".to_string());
        let substituted = verify(coefficients, solution);
        for (i, row) in coefficients.rows().iter().enumerate() {
            let terms = row
                .iter()
                .zip(values.iter())
                .map(|(a, v)| format!("{} * {}", factor(a, p), factor(v, p)))
                .collect::<Vec<_>>()
                .join(" + ");
            lines.push(format!(
                "  equation {}: {terms} = {} (expected {})",
                i + 1,
                substituted.get(i).render(p),
                constants.get(i).render(p)
            ));
        }
        lines
    }
}

fn push_expansion<T: Scalar>(
    lines: &mut Vec<String>,
    name: &str,
    matrix: &Matrix3x3<T>,
    p: Option<usize>,
) {
    let SarrusExpansion {
        principal,
        secondary,
        principal_sum,
        secondary_sum,
        value,
    } = expand(matrix);

    lines.extend(matrix_lines(matrix, p).into_iter().map(|l| format!("  {l}")));
    lines.push("  Principal diagonals:".to_string());
    push_diagonals(lines, &principal, &principal_sum, p);
    lines.push("  Secondary diagonals:".to_string());
    push_diagonals(lines, &secondary, &secondary_sum, p);
    lines.push(format!(
        "  {name} = {} - {} = {}",
        principal_sum.render(p),
        factor(&secondary_sum, p),
        value.render(p)
    ));
}

fn push_diagonals<T: Scalar>(
    lines: &mut Vec<String>,
    diagonals: &[Diagonal<T>; 3],
    sum: &T,
    p: Option<usize>,
) {
    for d in diagonals {
        lines.push(format!(
            "    {} = {}",
            product(&d.factors, p),
            d.product.render(p)
        ));
    }
    let terms = diagonals
        .iter()
        .map(|d| factor(&d.product, p))
        .collect::<Vec<_>>()
        .join(" + ");
    lines.push(format!("    sum = {terms} = {}", sum.render(p)));
}
