use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strided_expr::*;
use strided_view::{Layout, Matrix, Vector};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, layout: Layout) -> Matrix<f64> {
    Matrix::from_fn_with_layout(rows, cols, layout, |_, _| rng.gen_range(-2.0..2.0))
}

fn random_vector(rng: &mut StdRng, n: usize) -> Vector<f64> {
    Vector::from_fn(n, |_| rng.gen_range(-2.0..2.0))
}

#[test]
fn transpose_swaps_dimensions() {
    let mut rng = StdRng::seed_from_u64(42);
    for (r, c) in [(1, 4), (3, 2), (5, 5), (0, 3)] {
        let m = random_matrix(&mut rng, r, c, Layout::RowMajor);
        let t = trans(&m);
        assert_eq!(num_rows(&t), num_columns(&m));
        assert_eq!(num_columns(&t), num_rows(&m));
    }
}

#[test]
fn all_is_not_any_of_negation() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [0, 1, 5, 20] {
        let v = random_vector(&mut rng, n);
        for threshold in [-3.0, -0.5, 0.0, 1.0, 3.0] {
            let p = |x: f64| x > threshold;
            assert_eq!(all(&v, p), !any(&v, |x| !p(x)));
        }
    }
}

#[test]
fn find_and_which_line_up() {
    let mut rng = StdRng::seed_from_u64(3);
    let v = random_vector(&mut rng, 50);
    let p = |x: f64| x.abs() < 1.0;
    let found = find(&v, p);
    let idx = which(&v, p);
    assert_eq!(found.len(), idx.len());
    for i in 0..idx.len() {
        assert_eq!(v[idx[i]], found[i]);
    }
}

#[test]
fn empty_iff_some_dimension_is_zero() {
    for (r, c) in [(0, 0), (0, 3), (3, 0), (1, 1), (2, 5)] {
        let m = Matrix::<f64>::zeros(r, c);
        assert_eq!(empty(&m), r == 0 || c == 0);
    }
    assert!(empty(&Vector::<f64>::zeros(0)));
    assert!(!empty(&scalar_vector(1, 0.0)));
}

#[test]
fn elementwise_ops_apply_per_element() {
    let mut rng = StdRng::seed_from_u64(11);
    let m = random_matrix(&mut rng, 4, 3, Layout::ColMajor);
    let a = abs(&m);
    let s = sqr(&m);
    let t = tanh(&m);
    let fused = sqrt(abs(&m));
    for r in 0..4 {
        for c in 0..3 {
            let x = m.get(r, c);
            assert_eq!(a.at(r, c), x.abs());
            assert_eq!(s.at(r, c), x * x);
            assert_relative_eq!(t.at(r, c), x.tanh(), epsilon = 1e-15);
            assert_relative_eq!(fused.at(r, c), x.abs().sqrt(), epsilon = 1e-15);
        }
    }
}

#[test]
fn four_quarter_turns_are_identity() {
    let mut rng = StdRng::seed_from_u64(5);
    for (r, c) in [(1, 1), (2, 5), (4, 3)] {
        let m = random_matrix(&mut rng, r, c, Layout::RowMajor);
        let back = rot90(rot90(rot90(rot90(&m, 1), 1), 1), 1);
        assert_eq!(back, m);
        for k in [0, 1, 2, 3, -1, 4, 8] {
            assert_eq!(rot90(&m, k), rot90(&m, k.rem_euclid(4)));
        }
    }
}

#[test]
fn triangles_split_a_square_matrix() {
    let mut rng = StdRng::seed_from_u64(9);
    let a = random_matrix(&mut rng, 4, 4, Layout::RowMajor);
    let lower = tril(&a, 0);
    let upper = triu(&a, 1);
    assert_eq!(add(&lower, &upper).unwrap().to_matrix(), a);

    let both = cat_rows(&lower, &upper);
    assert_eq!(both.shape(), (4, 8));
    assert_eq!(both.subrange(0..4, 0..4).unwrap().to_matrix(), lower);
    assert_eq!(both.subrange(0..4, 4..8).unwrap().to_matrix(), upper);
}

#[test]
fn trace_sums_the_main_diagonal() {
    let mut rng = StdRng::seed_from_u64(13);
    for (r, c) in [(3, 3), (2, 5), (5, 2)] {
        let m = random_matrix(&mut rng, r, c, Layout::ColMajor);
        let expected: f64 = (0..r.min(c)).map(|i| m.get(i, i)).sum();
        assert_relative_eq!(trace(&m), expected, epsilon = 1e-14);
        assert_relative_eq!(trace(&m), sum(m.diagonal(0)), epsilon = 1e-14);
    }
}

#[test]
fn idempotent_constructors() {
    let mut rng = StdRng::seed_from_u64(17);
    let a = random_matrix(&mut rng, 3, 4, Layout::ColMajor);
    assert_eq!(tril(tril(&a, 0), 0), tril(&a, 0));
    assert_eq!(triu(triu(&a, -1), -1), triu(&a, -1));
    assert_eq!(rep(&a, 1, 1), a);
    let i4: Matrix<f64> = eye(4).to_matrix();
    assert!(equals(&i4, &eye::<f32>(4)));
}

#[test]
fn scenario_rep_identity() {
    let r = rep(eye::<f64>(2), 3, 4);
    assert_eq!(r.shape(), (6, 8));
    for i in 0..6 {
        for j in 0..8 {
            assert_eq!(r.get(i, j), if i % 2 == j % 2 { 1.0 } else { 0.0 });
        }
    }
}

#[test]
fn scenario_sequences() {
    assert_eq!(
        seq_stride(4.0f64, 2.0, 9).to_vector().into_vec(),
        vec![4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0]
    );
    assert_eq!(
        seq_stride(4.0f64, -2.0, 9).to_vector().into_vec(),
        vec![4.0, 2.0, 0.0, -2.0, -4.0, -6.0, -8.0, -10.0, -12.0]
    );
}

#[test]
fn scenario_equality() {
    assert!(scalar_vector(4, 1.0f64) == scalar_vector(4, 1.0f64));
    assert!(!(scalar_vector(4, 1.0f64) == scalar_mul(2.0f64, scalar_vector(4, 1.0f64))));
}
