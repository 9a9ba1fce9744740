use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strided_expr::{eye, prod, rot90, scalar_mul};
use strided_lapack::*;
use strided_view::{Layout, Matrix, Vector};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Random matrix with a dominant diagonal, so it is safely invertible.
fn well_conditioned(rng: &mut StdRng, n: usize, layout: Layout) -> Matrix<f64> {
    Matrix::from_fn_with_layout(n, n, layout, |r, c| {
        let x: f64 = rng.gen_range(-1.0..1.0);
        if r == c {
            x + n as f64
        } else {
            x
        }
    })
}

fn assert_matrix_eq(a: &Matrix<f64>, b: &Matrix<f64>, eps: f64) {
    assert_eq!(a.shape(), b.shape());
    for r in 0..a.nrows() {
        for c in 0..a.ncols() {
            assert_relative_eq!(a.get(r, c), b.get(r, c), epsilon = eps, max_relative = eps);
        }
    }
}

#[test]
fn lu_solve_four_by_four() {
    init_logger();
    let a = Matrix::from_rows(&[
        [0.55595, 0.27469, 0.540605, 0.798938],
        [0.108929, 0.830123, 0.891726, 0.895283],
        [0.948014, 0.973234, 0.216504, 0.883152],
        [0.023787, 0.675382, 0.231751, 0.450332],
    ]);
    let b = Vector::from_vec(vec![2.0, 3.0, 1.0, 0.5]);
    let mut x = Vector::zeros(0);
    let status = lu_solve(&a, &b, &mut x).unwrap();
    assert_eq!(status.code(), 0);
    let expected = [1.339863, 0.198970, 4.699314, -1.677257];
    for (k, e) in expected.iter().enumerate() {
        assert_relative_eq!(x[k], *e, epsilon = 1e-5);
    }

    let mut inplace = b.clone();
    assert!(lu_solve_inplace(&a, &mut inplace).unwrap().is_success());
    for k in 0..4 {
        assert_relative_eq!(inplace[k], x[k], epsilon = 1e-14);
    }
    let y = mldivide(&a, &b).unwrap();
    for k in 0..4 {
        assert_relative_eq!(y[k], x[k], epsilon = 1e-14);
    }
}

#[test]
fn inverse_of_rotated_diagonal() {
    init_logger();
    let a = rot90(scalar_mul(2.0f64, eye::<f64>(2)), 1);
    assert_eq!(a.get(0, 1), 2.0);
    assert_eq!(a.get(1, 0), 2.0);
    let x = inv(&a).unwrap();
    assert_matrix_eq(&x, &Matrix::from_rows(&[[0.0, 0.5], [0.5, 0.0]]), 1e-15);
    assert!(!illcond(&a).unwrap());
}

#[test]
fn singular_matrix_everywhere() {
    init_logger();
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let s = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]);
    assert_eq!(rcond(&s).unwrap(), 0.0);
    assert!(illcond(&s).unwrap());
    assert!(inv(&s).unwrap().as_slice().iter().all(|v: &f64| v.is_infinite() && *v > 0.0));
    let mut t = s.clone();
    assert!(!inv_inplace(&mut t).unwrap());

    assert!(illcond(&a).unwrap());
    assert_eq!(rank(&a, 1e-8).unwrap(), 2);
}

#[test]
fn inverse_times_matrix_is_identity() {
    let mut rng = StdRng::seed_from_u64(42);
    let cases = [
        (1, Layout::RowMajor),
        (3, Layout::ColMajor),
        (6, Layout::RowMajor),
        (10, Layout::ColMajor),
    ];
    for (n, layout) in cases {
        let a = well_conditioned(&mut rng, n, layout);
        let x = inv(&a).unwrap();
        assert_eq!(x.layout(), layout);
        let id = prod(&x, &a).unwrap();
        let expected = Matrix::from_fn(n, n, |r, c| if r == c { 1.0 } else { 0.0 });
        assert_matrix_eq(&id, &expected, 1e-12);
    }
}

#[test]
fn power_exponents_add() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = Matrix::from_fn(4, 4, |r, c| {
        let x: f64 = rng.gen_range(-0.5..0.5);
        if r == c {
            x + 1.0
        } else {
            x / 4.0
        }
    });
    for (p, q) in [(1, 1), (2, 3), (0, 4), (-1, -2), (-3, 0)] {
        let lhs = pow(&a, p + q).unwrap();
        let rhs = prod(&pow(&a, p).unwrap(), &pow(&a, q).unwrap()).unwrap();
        assert_matrix_eq(&lhs, &rhs, 1e-10);
    }
    let back = prod(&pow(&a, -2).unwrap(), &pow(&a, 2).unwrap()).unwrap();
    assert_matrix_eq(&back, &Matrix::from_fn(4, 4, |r, c| if r == c { 1.0 } else { 0.0 }), 1e-10);
}

#[test]
fn matrix_right_hand_sides() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = well_conditioned(&mut rng, 5, Layout::RowMajor);
    let b = Matrix::from_fn_with_layout(5, 3, Layout::ColMajor, |r, c| (r + 2 * c) as f64);
    let x = mldivide(&a, &b).unwrap();
    assert_eq!(x.shape(), (5, 3));
    assert_eq!(x.layout(), Layout::ColMajor);
    assert_matrix_eq(&prod(&a, &x).unwrap(), &b.to_layout(Layout::RowMajor), 1e-12);

    let f = lu(&a).unwrap();
    assert_matrix_eq(&f.solve(&b).unwrap(), &x, 1e-14);
}

#[test]
fn singular_values_match_frobenius_norm() {
    let mut rng = StdRng::seed_from_u64(9);
    for (r, c) in [(4, 4), (6, 3), (3, 7)] {
        let a = Matrix::from_fn(r, c, |_, _| rng.gen_range(-1.0..1.0));
        let s = svd_values(&a);
        assert_eq!(s.len(), r.min(c));
        assert!(s.as_slice().windows(2).all(|w| w[0] >= w[1]));
        let fro2: f64 = a.as_slice().iter().map(|x| x * x).sum();
        let s2: f64 = s.iter().map(|x| x * x).sum();
        assert_relative_eq!(fro2, s2, max_relative = 1e-12);
        assert_eq!(rank_default(&a), r.min(c));
    }
}
