//! Singular values and numerical rank.
//!
//! The values come from a one-sided Jacobi iteration on the columns of `A`
//! (or of `Aᴴ` when `A` is wide). Pairs of columns are rotated until they
//! are mutually orthogonal; the column norms are then the singular values.
//! Complex columns are first brought to a real inner product by a phase
//! factor, which leaves the singular values unchanged.

use num_traits::{One, Zero};
use strided_expr::MatrixExpr;
use strided_traits::{debug_trace, RealScalar, Scalar};
use strided_view::{Result, StridedError, Vector};

/// Sweeps over all column pairs before giving up on convergence.
const MAX_SWEEPS: usize = 100;

fn squared_norm<T: Scalar>(col: &[T]) -> T::Real {
    col.iter()
        .fold(T::Real::zero(), |acc, &x| acc + (x.conj() * x).re())
}

/// Rotate columns `p` and `q` towards orthogonality. Returns `false` when
/// they already are, to within `tol`.
fn rotate_pair<T: Scalar>(cols: &mut [Vec<T>], p: usize, q: usize, tol: T::Real) -> bool {
    let app = squared_norm(&cols[p]);
    let aqq = squared_norm(&cols[q]);
    let apq = cols[p]
        .iter()
        .zip(&cols[q])
        .fold(T::zero(), |acc, (&x, &y)| acc + x.conj() * y);
    let g = apq.abs();
    if g <= tol * (app * aqq).sqrt() {
        return false;
    }

    // conj(phase) makes <p, q> real and positive.
    let phase_conj = (apq / T::from_real(g)).conj();
    let one = T::Real::one();
    let two = one + one;
    let tau = (aqq - app) / (two * g);
    let t = if tau >= T::Real::zero() {
        one / (tau + (one + tau * tau).sqrt())
    } else {
        -one / (-tau + (one + tau * tau).sqrt())
    };
    let c = one / (one + t * t).sqrt();
    let s = t * c;
    let (c, s) = (T::from_real(c), T::from_real(s));

    let (head, tail) = cols.split_at_mut(q);
    for (x, y) in head[p].iter_mut().zip(tail[0].iter_mut()) {
        let yp = *y * phase_conj;
        let xp = *x;
        *x = c * xp - s * yp;
        *y = s * xp + c * yp;
    }
    true
}

/// Singular values of `a`, largest first. An empty matrix has none.
pub fn svd_values<E, T>(a: E) -> Vector<T::Real>
where
    E: MatrixExpr<Elem = T>,
    T: Scalar,
{
    let (m, n) = (a.nrows(), a.ncols());
    if m == 0 || n == 0 {
        return Vector::new();
    }
    let mut cols: Vec<Vec<T>> = if m >= n {
        (0..n).map(|c| (0..m).map(|r| a.at(r, c)).collect()).collect()
    } else {
        (0..m).map(|r| (0..n).map(|c| a.at(r, c).conj()).collect()).collect()
    };

    let tol = T::Real::epsilon() * T::Real::from_f64_lossy(100.0);
    let k = cols.len();
    let mut sweeps = 0;
    while sweeps < MAX_SWEEPS {
        sweeps += 1;
        let mut rotated = false;
        for p in 0..k {
            for q in (p + 1)..k {
                rotated |= rotate_pair(&mut cols, p, q, tol);
            }
        }
        if !rotated {
            break;
        }
    }
    debug_trace!("svd_values: {}x{} after {} sweeps", m, n, sweeps);

    let mut values: Vec<T::Real> = cols.iter().map(|col| squared_norm(col).sqrt()).collect();
    values.sort_by(|x, y| y.partial_cmp(x).unwrap_or(std::cmp::Ordering::Equal));
    Vector::from_vec(values)
}

/// Number of singular values strictly greater than `tol`.
pub fn rank<E, T>(a: E, tol: T::Real) -> Result<usize>
where
    E: MatrixExpr<Elem = T>,
    T: Scalar,
{
    if !tol.is_finite() {
        return Err(StridedError::BadArgument(format!(
            "rank tolerance must be finite, got {tol:?}"
        )));
    }
    Ok(svd_values(a).iter().filter(|&&s| s > tol).count())
}

/// [`rank`] with `tol = max(rows, cols) * eps(max singular value)`.
pub fn rank_default<E, T>(a: E) -> usize
where
    E: MatrixExpr<Elem = T>,
    T: Scalar,
{
    let dim = a.nrows().max(a.ncols());
    let values = svd_values(a);
    let Some(&largest) = values.as_slice().first() else {
        return 0;
    };
    let tol = T::Real::from_usize(dim) * largest.eps_of();
    values.iter().filter(|&&s| s > tol).count()
}
