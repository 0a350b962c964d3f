//! Closed-form 3x3 determinant (rule of Sarrus) with its intermediate products.

use crate::error::Result;
use crate::matrix::Matrix3x3;
use crate::scalar::Scalar;

/// Cells of `a11·a22·a33`, `a12·a23·a31`, `a13·a21·a32`.
const PRINCIPAL: [[(usize, usize); 3]; 3] = [
    [(0, 0), (1, 1), (2, 2)],
    [(0, 1), (1, 2), (2, 0)],
    [(0, 2), (1, 0), (2, 1)],
];

/// Cells of `a13·a22·a31`, `a11·a23·a32`, `a12·a21·a33`.
const SECONDARY: [[(usize, usize); 3]; 3] = [
    [(0, 2), (1, 1), (2, 0)],
    [(0, 0), (1, 2), (2, 1)],
    [(0, 1), (1, 0), (2, 2)],
];

#[derive(Clone, Debug, PartialEq)]
pub struct Diagonal<T> {
    pub factors: [T; 3],
    pub product: T,
}

/// Every term of the six-term expansion, kept for explanatory output.
#[derive(Clone, Debug, PartialEq)]
pub struct SarrusExpansion<T> {
    pub principal: [Diagonal<T>; 3],
    pub secondary: [Diagonal<T>; 3],
    pub principal_sum: T,
    pub secondary_sum: T,
    /// `principal_sum - secondary_sum`.
    pub value: T,
}

pub fn expand<T: Scalar>(matrix: &Matrix3x3<T>) -> SarrusExpansion<T> {
    let diagonal = |cells: [(usize, usize); 3]| {
        let factors = cells.map(|(r, c)| matrix.get(r, c).clone());
        let product = factors[0].clone() * factors[1].clone() * factors[2].clone();
        Diagonal { factors, product }
    };
    let principal = PRINCIPAL.map(diagonal);
    let secondary = SECONDARY.map(diagonal);
    let principal_sum = sum_products(&principal);
    let secondary_sum = sum_products(&secondary);
    let value = principal_sum.clone() - secondary_sum.clone();

    SarrusExpansion {
        principal,
        secondary,
        principal_sum,
        secondary_sum,
        value,
    }
}

pub fn determinant<T: Scalar>(matrix: &Matrix3x3<T>) -> T {
    expand(matrix).value
}

/// Determinant of dynamically shaped rows; anything but 3x3 is rejected.
pub fn determinant_of<T: Scalar>(rows: &[Vec<T>]) -> Result<T> {
    Ok(determinant(&Matrix3x3::from_rows(rows)?))
}

fn sum_products<T: Scalar>(diagonals: &[Diagonal<T>; 3]) -> T {
    diagonals
        .iter()
        .fold(T::zero(), |acc, d| acc + d.product.clone())
}
