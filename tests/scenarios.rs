//! End-to-end checks through the facade crate.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use num_complex::Complex64;
use strided_linalg::*;

#[test]
fn solve_four_by_four_system() {
    let a = Matrix::from_rows(&[
        [0.55595, 0.27469, 0.540605, 0.798938],
        [0.108929, 0.830123, 0.891726, 0.895283],
        [0.948014, 0.973234, 0.216504, 0.883152],
        [0.023787, 0.675382, 0.231751, 0.450332],
    ]);
    let b = Vector::from_vec(vec![2.0, 3.0, 1.0, 0.5]);
    let mut x = Vector::zeros(4);
    assert_eq!(lu_solve(&a, &b, &mut x).unwrap().code(), 0);
    let expected = Vector::from_vec(vec![1.339863, 0.198970, 4.699314, -1.677257]);
    for k in 0..4 {
        assert_abs_diff_eq!(x[k], expected[k], epsilon = 1e-5);
    }
    // residual
    let ax = prod_vec(&a, &x).unwrap();
    let r = sub(&ax, &b).unwrap();
    assert!(norm_frobenius(&r) < 1e-12);
}

#[test]
fn invert_rotated_identity() {
    let a = rot90(scalar_mul(2.0f64, eye::<f64>(2)), 1);
    assert!(equals(&a, &Matrix::from_rows(&[[0.0, 2.0], [2.0, 0.0]])));
    let (x, outcome) = inv_checked(&a).unwrap();
    assert_eq!(outcome, InvOutcome::Success);
    assert!(equals(&x, &Matrix::from_rows(&[[0.0, 0.5], [0.5, 0.0]])));
    assert!(!illcond(&a).unwrap());
}

#[test]
fn tile_identity() {
    let r = rep(eye::<f64>(2), 3, 4);
    assert_eq!((num_rows(&r), num_columns(&r)), (6, 8));
    assert_eq!(trace(&r), 6.0);
    assert_eq!(sum(&r), 12.0);
    assert!(equals(&r.subrange(2..4, 4..6).unwrap(), &eye::<f64>(2)));
}

#[test]
fn strided_sequences() {
    let up = seq_stride(4.0f64, 2.0, 9);
    let down = seq_stride(4.0f64, -2.0, 9);
    assert_eq!(up.to_vector().as_slice(), &[4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0]);
    assert_eq!(
        down.to_vector().as_slice(),
        &[4.0, 2.0, 0.0, -2.0, -4.0, -6.0, -8.0, -10.0, -12.0]
    );
    assert_eq!(sum(&up), 108.0);
    assert_eq!(max(&down).unwrap(), 4.0);
}

#[test]
fn vector_equality() {
    let ones = scalar_vector(4, 1.0f64);
    assert!(ones == scalar_vector(4, 1.0f64));
    assert!(!equals(&ones, &scalar_mul(2.0f64, scalar_vector(4, 1.0f64))));
    assert!(!equals(&ones, &scalar_vector(3, 1.0f64)));
}

#[test]
fn boundary_behaviour() {
    assert_eq!(linspace(0.0f64, 7.0, 1).unwrap().as_slice(), &[7.0]);
    assert_relative_eq!(logspace(0.0f64, 3.0, 1, 2.0).unwrap()[0], 8.0);
    assert_eq!(linspace(0.0f64, 1.0, 0).unwrap_err().tag(), "bad_argument");

    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    for k in [-1, 3, 7] {
        assert_eq!(rot90(&m, k), rot90(&m, 3));
    }
    assert_eq!(rot90(&m, 4), m);
    assert_eq!(rot90(&m, 8), rot90(&m, 0));

    let v = Vector::from_vec(vec![0.5, -0.5, 2.5, 0.0, -0.0]);
    let rounded = round(&v).to_vector();
    assert_eq!(&rounded.as_slice()[..3], &[1.0, -1.0, 3.0]);
    let s = sign(&v).to_vector();
    assert_eq!(s[3], 1.0);
    assert_eq!(s[4], -1.0);

    let singular = Matrix::from_rows(&[[2.0, 4.0], [1.0, 2.0]]);
    assert_eq!(rcond(&singular).unwrap(), 0.0);
    assert!(illcond(&singular).unwrap());
}

#[test]
fn complex_pipeline() {
    let i = Complex64::new(0.0, 1.0);
    let one = Complex64::new(1.0, 0.0);
    let a = Matrix::from_rows(&[[2.0 * one, i], [-i, 3.0 * one]]);
    let x = pow(&a, -1).unwrap();
    let id = prod(&x, &a).unwrap();
    for r in 0..2 {
        for c in 0..2 {
            let want = if r == c { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(id.get(r, c).re, want, epsilon = 1e-12);
            assert_abs_diff_eq!(id.get(r, c).im, 0.0, epsilon = 1e-12);
        }
    }
    // Hermitian with eigenvalues (5 ± sqrt(5)) / 2
    let s = svd_values(&a);
    assert_relative_eq!(s[0], (5.0 + 5.0f64.sqrt()) / 2.0, epsilon = 1e-12);
    assert_eq!(rank_default(&a), 2);
    assert_relative_eq!(abs(&a).to_matrix().get(0, 1), 1.0);
}
