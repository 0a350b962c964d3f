use crate::determinant::determinant;
use crate::error::{CramerError, Result};
use crate::matrix::{Matrix3x3, Vector3};
use crate::scalar::Scalar;

/// Unique solution of a 3x3 system together with the four determinants it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
    /// det(A).
    pub det: T,
    /// det(A) with column 0 replaced by B.
    pub det_x: T,
    /// det(A) with column 1 replaced by B.
    pub det_y: T,
    /// det(A) with column 2 replaced by B.
    pub det_z: T,
}

impl<T: Scalar> Solution<T> {
    pub fn values(&self) -> [T; 3] {
        [self.x.clone(), self.y.clone(), self.z.clone()]
    }

    /// Substituted determinants in column order: Dx, Dy, Dz.
    pub fn column_determinants(&self) -> [&T; 3] {
        [&self.det_x, &self.det_y, &self.det_z]
    }
}

/// Solve `A·[x, y, z] = B` with Cramer's rule.
///
/// Fails with [`CramerError::SingularSystem`] when det(A) is exactly zero; inconsistent
/// and underdetermined systems are not told apart. Fails with [`CramerError::Overflow`]
/// when a floating-point determinant or quotient leaves the representable range.
pub fn solve<T: Scalar>(a: &Matrix3x3<T>, b: &Vector3<T>) -> Result<Solution<T>> {
    let det = determinant(a);
    tracing::debug!(det = %det, "main determinant");
    ensure_finite("D", &det)?;
    if det.is_zero() {
        tracing::debug!("singular system");
        return Err(CramerError::SingularSystem);
    }

    let [det_x, det_y, det_z] = [0, 1, 2].map(|col| determinant(&a.with_column(col, b)));
    tracing::debug!(det_x = %det_x, det_y = %det_y, det_z = %det_z, "column determinants");
    ensure_finite("Dx", &det_x)?;
    ensure_finite("Dy", &det_y)?;
    ensure_finite("Dz", &det_z)?;

    let [x, y, z] = [&det_x, &det_y, &det_z].map(|d| d.clone() / det.clone());
    ensure_finite("x", &x)?;
    ensure_finite("y", &y)?;
    ensure_finite("z", &z)?;

    Ok(Solution {
        x,
        y,
        z,
        det,
        det_x,
        det_y,
        det_z,
    })
}

fn ensure_finite<T: Scalar>(name: &'static str, value: &T) -> Result<()> {
    if value.is_finite() {
        return Ok(());
    }
    tracing::debug!(name, value = %value, "non-finite value");
    Err(CramerError::Overflow {
        name,
        value: value.to_string(),
    })
}

/// Same as [`solve`] for dynamically shaped input.
pub fn solve_rows<T: Scalar>(a: &[Vec<T>], b: &[T]) -> Result<Solution<T>> {
    let a = Matrix3x3::from_rows(a)?;
    let b = Vector3::from_slice(b)?;
    solve(&a, &b)
}

/// Substitute the solution back into every row of `a`.
pub fn verify<T: Scalar>(a: &Matrix3x3<T>, solution: &Solution<T>) -> Vector3<T> {
    a.apply(&solution.values())
}
