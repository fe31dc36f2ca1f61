use korszam::{Matrix, MatrixError, SquareMatrix};

#[test]
fn worked_examples() -> Result<(), MatrixError> {
    let a = Matrix::from_data(2, vec![1., 2., 3., 4.])?;

    let sum = a.add(&Matrix::from_data(2, vec![4., 3., 2., 1.])?)?;
    assert!(sum.compare(&Matrix::new(5., 2)));

    let prod = a.multiply(&Matrix::from_data(2, vec![2., 0., 1., 2.])?)?;
    assert!(prod.compare(&Matrix::from_data(2, vec![4., 4., 10., 8.])?));

    assert!(a
        .transpose()
        .compare(&Matrix::from_data(2, vec![1., 3., 2., 4.])?));

    let b = Matrix::from_data(3, vec![6., 1., 1., 4., -2., 5., 2., 8., 7.])?;
    assert!((b.determinant() + 306.).abs() < 1e-3);

    Ok(())
}

#[test]
fn reported_errors() {
    assert!(matches!(
        Matrix::from_data(3, vec![0.; 8]),
        Err(MatrixError::ConstructionSizeMismatch { .. })
    ));

    let a = Matrix::new(1., 3);
    let b = Matrix::new(1., 2);
    assert!(matches!(a.add(&b), Err(MatrixError::SizeMismatch { .. })));
}

#[test]
fn kronecker_size() {
    let a = SquareMatrix::<i64>::identity(3);
    let b = SquareMatrix::<i64>::new(2, 4);
    assert_eq!(a.tensor(&b).size(), a.size() * b.size());
}
