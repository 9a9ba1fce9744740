//! Dense constructors and reshaping operations.
//!
//! These materialise their result. Matrix results follow the storage order
//! of the first matrix operand.

use crate::expr::{MatrixExpr, VectorExpr};
use num_traits::Zero;
use strided_traits::{RealScalar, Scalar};
use strided_view::{Matrix, Result, StridedError, Vector};

/// Hilbert matrix, `H(i, j) = 1 / (i + j + 1)`.
pub fn hilb<T: Scalar>(n: usize) -> Matrix<T> {
    Matrix::from_fn(n, n, |i, j| T::one() / T::from_usize(i + j + 1))
}

/// `n` equally spaced points from `a` to `b` inclusive; `n == 1` gives `[b]`.
pub fn linspace<T: Scalar>(a: T, b: T, n: usize) -> Result<Vector<T>> {
    if n == 0 {
        return Err(StridedError::BadArgument(
            "linspace needs at least one point".into(),
        ));
    }
    if n == 1 {
        return Ok(Vector::from_vec(vec![b]));
    }
    let step = (b - a) / T::from_usize(n - 1);
    Ok(Vector::from_fn(n, |i| {
        if i == n - 1 {
            b
        } else {
            a + T::from_usize(i) * step
        }
    }))
}

/// `base^linspace(a, b, n)`; `base` must be positive.
pub fn logspace<T: RealScalar>(a: T, b: T, n: usize, base: T) -> Result<Vector<T>> {
    if !(base > T::zero()) {
        return Err(StridedError::BadArgument(format!(
            "logspace base must be positive, got {base:?}"
        )));
    }
    let exps = linspace(a, b, n)?;
    Ok(exps.iter().map(|&e| base.powf(e)).collect())
}

/// Tile `m` into an `(R*nr) x (C*nc)` matrix.
pub fn rep<E: MatrixExpr>(m: E, nr: usize, nc: usize) -> Matrix<E::Elem> {
    let (rows, cols) = (m.nrows(), m.ncols());
    Matrix::from_fn_with_layout(rows * nr, cols * nc, m.layout(), |r, c| {
        m.at(r % rows, c % cols)
    })
}

/// Stack `nr` copies of `v` vertically and `nc` copies side by side,
/// giving an `(n*nr) x nc` matrix.
pub fn rep_vector<E: VectorExpr>(v: E, nr: usize, nc: usize) -> Matrix<E::Elem> {
    let n = v.size();
    Matrix::from_fn(n * nr, nc, |r, _| v.at(r % n))
}

/// Rotate counterclockwise by `90 * k` degrees; any `k` is reduced mod 4.
pub fn rot90<E: MatrixExpr>(m: E, k: i32) -> Matrix<E::Elem> {
    let (rows, cols) = (m.nrows(), m.ncols());
    let layout = m.layout();
    match k.rem_euclid(4) {
        0 => Matrix::from_fn_with_layout(rows, cols, layout, |r, c| m.at(r, c)),
        1 => Matrix::from_fn_with_layout(cols, rows, layout, |i, j| m.at(j, cols - 1 - i)),
        2 => Matrix::from_fn_with_layout(rows, cols, layout, |i, j| {
            m.at(rows - 1 - i, cols - 1 - j)
        }),
        _ => Matrix::from_fn_with_layout(cols, rows, layout, |i, j| m.at(rows - 1 - j, i)),
    }
}

/// Vectors have a single axis: `k = 0, 1` copy, `k = 2, 3` reverse.
pub fn rot90_vector<E: VectorExpr>(v: E, k: i32) -> Vector<E::Elem> {
    let n = v.size();
    match k.rem_euclid(4) {
        0 | 1 => Vector::from_fn(n, |i| v.at(i)),
        _ => Vector::from_fn(n, |i| v.at(n - 1 - i)),
    }
}

/// Keep elements with `col <= row + k`, zero the rest.
pub fn tril<E>(a: E, k: isize) -> Matrix<E::Elem>
where
    E: MatrixExpr,
    E::Elem: Zero,
{
    Matrix::from_fn_with_layout(a.nrows(), a.ncols(), a.layout(), |r, c| {
        if (c as isize) <= r as isize + k {
            a.at(r, c)
        } else {
            E::Elem::zero()
        }
    })
}

/// Keep elements with `col >= row + k`, zero the rest.
pub fn triu<E>(a: E, k: isize) -> Matrix<E::Elem>
where
    E: MatrixExpr,
    E::Elem: Zero,
{
    Matrix::from_fn_with_layout(a.nrows(), a.ncols(), a.layout(), |r, c| {
        if (c as isize) >= r as isize + k {
            a.at(r, c)
        } else {
            E::Elem::zero()
        }
    })
}

/// Side by side: `max(RA, RB) x (CA + CB)`, short operands zero-padded below.
pub fn cat_rows<A, B>(a: A, b: B) -> Matrix<A::Elem>
where
    A: MatrixExpr,
    B: MatrixExpr<Elem = A::Elem>,
    A::Elem: Zero,
{
    let (ra, ca) = (a.nrows(), a.ncols());
    let rb = b.nrows();
    let cols = ca + b.ncols();
    Matrix::from_fn_with_layout(ra.max(rb), cols, a.layout(), |r, c| {
        if c < ca {
            if r < ra {
                a.at(r, c)
            } else {
                A::Elem::zero()
            }
        } else if r < rb {
            b.at(r, c - ca)
        } else {
            A::Elem::zero()
        }
    })
}

/// Stacked vertically: `(RA + RB) x max(CA, CB)`, narrow operands
/// zero-padded on the right.
pub fn cat_columns<A, B>(a: A, b: B) -> Matrix<A::Elem>
where
    A: MatrixExpr,
    B: MatrixExpr<Elem = A::Elem>,
    A::Elem: Zero,
{
    let (ra, ca) = (a.nrows(), a.ncols());
    let cb = b.ncols();
    let rows = ra + b.nrows();
    Matrix::from_fn_with_layout(rows, ca.max(cb), a.layout(), |r, c| {
        if r < ra {
            if c < ca {
                a.at(r, c)
            } else {
                A::Elem::zero()
            }
        } else if c < cb {
            b.at(r - ra, c)
        } else {
            A::Elem::zero()
        }
    })
}

/// Reinterpret as `rows x cols`, reading and writing elements in
/// column-major order. The element count must be unchanged.
pub fn reshape<E: MatrixExpr>(m: E, rows: usize, cols: usize) -> Result<Matrix<E::Elem>> {
    let (r0, c0) = (m.nrows(), m.ncols());
    if rows * cols != r0 * c0 {
        return Err(StridedError::ShapeMismatch(vec![r0, c0], vec![rows, cols]));
    }
    Ok(Matrix::from_fn_with_layout(rows, cols, m.layout(), |r, c| {
        let k = c * rows + r;
        m.at(k % r0, k / r0)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::eye;
    use approx::assert_relative_eq;
    use strided_traits::Layout;

    #[test]
    fn test_hilb() {
        let h = hilb::<f64>(3);
        assert_eq!(h.get(0, 0), 1.0);
        assert_relative_eq!(h.get(1, 2), 0.25, epsilon = 1e-15);
        assert_relative_eq!(h.get(2, 2), 0.2, epsilon = 1e-15);
    }

    #[test]
    fn test_linspace_and_logspace() {
        let v = linspace(0.0f64, 1.0, 5).unwrap();
        assert_eq!(v.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(3.0f64, 7.0, 1).unwrap().as_slice(), &[7.0]);
        assert!(linspace(0.0f64, 1.0, 0).is_err());
        let l = logspace(0.0f64, 2.0, 3, 10.0).unwrap();
        assert_relative_eq!(l[1], 10.0, epsilon = 1e-12);
        assert_relative_eq!(l[2], 100.0, epsilon = 1e-12);
        assert_eq!(logspace(0.0f64, 3.0, 1, 2.0).unwrap().as_slice(), &[8.0]);
        assert!(logspace(0.0f64, 1.0, 3, 0.0).is_err());
        assert!(logspace(0.0f64, 1.0, 0, 10.0).is_err());
    }

    #[test]
    fn test_rep_identity() {
        let i2 = eye::<f64>(2);
        let r = rep(&i2, 3, 4);
        assert_eq!(r.shape(), (6, 8));
        for i in 0..6 {
            for j in 0..8 {
                let expected = if i % 2 == j % 2 { 1.0 } else { 0.0 };
                assert_eq!(r.get(i, j), expected);
            }
        }
        let m = Matrix::from_rows(&[[1, 2], [3, 4]]);
        assert_eq!(rep(&m, 1, 1), m);
    }

    #[test]
    fn test_rep_vector() {
        let v = Vector::from_vec(vec![1.0, 2.0]);
        let r = rep_vector(&v, 2, 3);
        assert_eq!(r.shape(), (4, 3));
        assert_eq!(r.column(2).to_vec(), vec![1.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_rot90_quarter_turns() {
        let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]);
        let r1 = rot90(&m, 1);
        assert_eq!(r1, Matrix::from_rows(&[[3, 6], [2, 5], [1, 4]]));
        let r2 = rot90(&m, 2);
        assert_eq!(r2, Matrix::from_rows(&[[6, 5, 4], [3, 2, 1]]));
        let r3 = rot90(&m, 3);
        assert_eq!(r3, Matrix::from_rows(&[[4, 1], [5, 2], [6, 3]]));
        assert_eq!(rot90(&m, -1), r3);
        assert_eq!(rot90(&m, 4), m);
        assert_eq!(rot90(&m, 8), m);
    }

    #[test]
    fn test_rot90_vector() {
        let v = Vector::from_vec(vec![1, 2, 3]);
        assert_eq!(rot90_vector(&v, 1).into_vec(), vec![1, 2, 3]);
        assert_eq!(rot90_vector(&v, 3).into_vec(), vec![3, 2, 1]);
        assert_eq!(rot90_vector(&v, -2).into_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_triangles() {
        let a = Matrix::from_fn_with_layout(3, 3, Layout::ColMajor, |r, c| (r * 3 + c + 1) as f64);
        let l = tril(&a, 0);
        assert_eq!(l, Matrix::from_rows(&[[1.0, 0.0, 0.0], [4.0, 5.0, 0.0], [7.0, 8.0, 9.0]]));
        assert_eq!(l.layout(), Layout::ColMajor);
        let u = triu(&a, 1);
        assert_eq!(u, Matrix::from_rows(&[[0.0, 2.0, 3.0], [0.0, 0.0, 6.0], [0.0, 0.0, 0.0]]));
        assert_eq!(tril(&l, 0), l);
        assert_eq!(triu(&triu(&a, 0), 0), triu(&a, 0));
        assert_eq!(tril(&a, -1).get(1, 1), 0.0);
    }

    #[test]
    fn test_cat() {
        let a = Matrix::from_rows(&[[1, 2], [3, 4]]);
        let b = Matrix::from_rows(&[[5]]);
        let h = cat_rows(&a, &b);
        assert_eq!(h, Matrix::from_rows(&[[1, 2, 5], [3, 4, 0]]));
        let v = cat_columns(&a, &b);
        assert_eq!(v, Matrix::from_rows(&[[1, 2], [3, 4], [5, 0]]));
    }

    #[test]
    fn test_reshape_column_order() {
        let m = Matrix::from_rows(&[[1, 3, 5], [2, 4, 6]]);
        let r = reshape(&m, 3, 2).unwrap();
        assert_eq!(r, Matrix::from_rows(&[[1, 4], [2, 5], [3, 6]]));
        assert!(reshape(&m, 4, 2).is_err());
    }
}
