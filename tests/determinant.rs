use approx::assert_relative_eq;
use rcramer::{determinant, determinant_of, expand, CramerError, Matrix3x3, Rational};

fn m(rows: [[f64; 3]; 3]) -> Matrix3x3 {
    Matrix3x3::new(rows)
}

#[test]
fn identity_is_one() {
    let identity = m([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    assert_eq!(determinant(&identity), 1.0);
}

#[test]
fn known_values() {
    assert_eq!(determinant(&m([[1.0, 1.0, 1.0], [2.0, -1.0, 1.0], [1.0, 2.0, -1.0]])), 7.0);
    assert_eq!(determinant(&m([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]])), 6.0);
    assert_eq!(determinant(&m([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]])), 0.0);
}

#[test]
fn matches_cofactor_expansion() {
    let rows = [[0.5, -1.25, 3.0], [2.0, 0.75, -4.5], [1.5, 2.25, 0.125]];
    let cofactor = rows[0][0] * (rows[1][1] * rows[2][2] - rows[1][2] * rows[2][1])
        - rows[0][1] * (rows[1][0] * rows[2][2] - rows[1][2] * rows[2][0])
        + rows[0][2] * (rows[1][0] * rows[2][1] - rows[1][1] * rows[2][0]);
    assert_relative_eq!(determinant(&m(rows)), cofactor, epsilon = 1e-12);
}

#[test]
fn expansion_keeps_every_diagonal() {
    let expansion = expand(&m([[1.0, 1.0, 1.0], [2.0, -1.0, 1.0], [1.0, 2.0, -1.0]]));

    let principal: Vec<f64> = expansion.principal.iter().map(|d| d.product).collect();
    let secondary: Vec<f64> = expansion.secondary.iter().map(|d| d.product).collect();
    assert_eq!(principal, vec![1.0, 1.0, 4.0]);
    assert_eq!(secondary, vec![-1.0, 2.0, -2.0]);
    assert_eq!(expansion.principal[0].factors, [1.0, -1.0, -1.0]);
    assert_eq!(expansion.secondary[2].factors, [1.0, 2.0, -1.0]);
    assert_eq!(expansion.principal_sum, 6.0);
    assert_eq!(expansion.secondary_sum, -1.0);
    assert_eq!(expansion.value, 7.0);
}

#[test]
fn exact_determinant() {
    let r = |n: i64, d: i64| Rational::new(n.into(), d.into());
    let matrix = Matrix3x3::new([
        [r(1, 2), r(1, 3), r(0, 1)],
        [r(0, 1), r(1, 1), r(1, 4)],
        [r(1, 1), r(0, 1), r(2, 1)],
    ]);
    // every secondary diagonal crosses a zero
    assert_eq!(determinant(&matrix), r(13, 12));
}

#[test]
fn dynamic_rows_must_be_square() {
    let ok = determinant_of(&[vec![1.0, 0.0, 0.0], vec![0.0, 2.0, 0.0], vec![0.0, 0.0, 3.0]]);
    assert_eq!(ok.unwrap(), 6.0);

    let err = determinant_of(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap_err();
    assert!(matches!(err, CramerError::InvalidDimension { .. }));
    assert_eq!(
        err.to_string(),
        "matrix dimension invalid: expected 3x3, found 2x2"
    );

    let ragged = determinant_of(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![6.0, 7.0, 8.0]]);
    assert!(matches!(
        ragged,
        Err(CramerError::InvalidDimension { found, .. }) if found == "3 rows of lengths [3, 2, 3]"
    ));
}
