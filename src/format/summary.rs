use crate::matrix::{Matrix3x3, Vector3};
use crate::parser::Variable;
use crate::scalar::Scalar;
use crate::solver::{verify, Solution};

use super::{factor, Explain};

/// Determinants, quotients and the check, without the diagonal products.
#[derive(Debug, Clone, Copy, Default)]
pub struct Summary {
    pub precision: Option<usize>,
}

impl Explain for Summary {
    fn explain<T: Scalar>(
        &self,
        coefficients: &Matrix3x3<T>,
        constants: &Vector3<T>,
        solution: &Solution<T>,
    ) -> Vec<String> {
        let p = self.precision;
        let mut lines = vec![format!("D = {}", solution.det.render(p))];
        for (var, det) in Variable::ALL.iter().zip(solution.column_determinants()) {
            lines.push(format!("D{} = {}", var.symbol(), det.render(p)));
        }
        for (var, value) in Variable::ALL.iter().zip(solution.values()) {
            lines.push(format!(
                "{0} = D{0} / D = {1}",
                var.symbol(),
                value.render(p)
            ));
        }

        lines.push("Check:".to_string());
        let substituted = verify(coefficients, solution);
        let values = solution.values();
        for (i, row) in coefficients.rows().iter().enumerate() {
            let terms = row
                .iter()
                .zip(values.iter())
                .map(|(a, v)| format!("{}*{}", factor(a, p), factor(v, p)))
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
