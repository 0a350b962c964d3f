//! Fixed-size containers for the coefficient matrix and the right-hand side.

use std::array;

use crate::error::{CramerError, Result};
use crate::scalar::Scalar;

/// Three rows of three coefficients, one row per equation.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix3x3<T = f64> {
    rows: [[T; 3]; 3],
}

/// Right-hand sides, aligned by index with the rows of a [`Matrix3x3`].
#[derive(Clone, Debug, PartialEq)]
pub struct Vector3<T = f64>([T; 3]);

impl<T: Scalar> Matrix3x3<T> {
    pub fn new(rows: [[T; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Build from dynamically sized rows, rejecting anything that is not 3x3.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        if rows.len() != 3 || rows.iter().any(|row| row.len() != 3) {
            return Err(CramerError::InvalidDimension {
                expected: "3x3",
                found: describe_shape(rows),
            });
        }
        Ok(Self {
            rows: array::from_fn(|r| array::from_fn(|c| rows[r][c].clone())),
        })
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.rows[row][col]
    }

    pub fn rows(&self) -> &[[T; 3]; 3] {
        &self.rows
    }

    /// Copy of `self` with column `col` replaced by `column`, row by row.
    pub fn with_column(&self, col: usize, column: &Vector3<T>) -> Self {
        let mut rows = self.rows.clone();
        for (row, value) in rows.iter_mut().zip(column.values()) {
            row[col] = value.clone();
        }
        Self { rows }
    }

    /// Matrix-vector product `A·v`.
    pub fn apply(&self, v: &[T; 3]) -> Vector3<T> {
        Vector3(array::from_fn(|r| {
            self.rows[r]
                .iter()
                .zip(v.iter())
                .fold(T::zero(), |acc, (a, x)| acc + a.clone() * x.clone())
        }))
    }
}

impl<T: Scalar> Vector3<T> {
    pub fn new(values: [T; 3]) -> Self {
        Self(values)
    }

    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() != 3 {
            return Err(CramerError::InvalidDimension {
                expected: "3",
                found: values.len().to_string(),
            });
        }
        Ok(Self(array::from_fn(|i| values[i].clone())))
    }

    pub fn values(&self) -> &[T; 3] {
        &self.0
    }

    pub fn get(&self, index: usize) -> &T {
        &self.0[index]
    }
}

fn describe_shape<T>(rows: &[Vec<T>]) -> String {
    let lengths: Vec<usize> = rows.iter().map(Vec::len).collect();
    match lengths.first() {
        Some(&cols) if lengths.iter().all(|&len| len == cols) => {
            format!("{}x{}", rows.len(), cols)
        }
        Some(_) => format!("{} rows of lengths {:?}", rows.len(), lengths),
        None => "0x0".to_string(),
    }
}
