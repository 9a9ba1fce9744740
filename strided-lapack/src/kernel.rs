//! Native LU kernels on column-major buffers.
//!
//! The routines follow the LAPACK calling conventions they stand in for:
//! the matrix is stored column by column with leading dimension `lda`,
//! pivots are 1-based, and the returned status is `0` on success, `-k` when
//! argument `k` is invalid and, for [`getrf`], `k > 0` when `U(k, k)` is
//! exactly zero.

use num_traits::{One, Zero};
use strided_traits::{RealScalar, Scalar};

/// Which system [`getrs`] solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
    /// `A * X = B`
    No,
    /// `A^T * X = B`
    Trans,
    /// `A^H * X = B`
    ConjTrans,
}

impl Transpose {
    /// The character LAPACK expects for this mode.
    pub fn code(self) -> u8 {
        match self {
            Transpose::No => b'N',
            Transpose::Trans => b'T',
            Transpose::ConjTrans => b'C',
        }
    }
}

/// Unblocked LU factorisation `A = P * L * U` with partial pivoting.
///
/// On return the strict lower triangle of `a` holds `L` (unit diagonal
/// implied) and the upper triangle holds `U`. Row `i` was swapped with row
/// `ipiv[i] - 1`. Factorisation continues past a zero pivot so the factors
/// are complete; the first such pivot is reported.
pub fn getrf<T: Scalar>(n: usize, a: &mut [T], lda: usize, ipiv: &mut [i32]) -> i32 {
    if lda < n.max(1) {
        return -4;
    }
    if n > 0 && a.len() < lda * (n - 1) + n {
        return -3;
    }
    if ipiv.len() < n {
        return -5;
    }

    let mut info = 0;
    for k in 0..n {
        let col = k * lda;
        let mut p = k;
        let mut best = a[col + k].abs1();
        for i in k + 1..n {
            let v = a[col + i].abs1();
            if v > best {
                best = v;
                p = i;
            }
        }
        ipiv[k] = (p + 1) as i32;

        if !a[col + p].is_zero() {
            if p != k {
                for j in 0..n {
                    a.swap(j * lda + k, j * lda + p);
                }
            }
            let pivot = a[col + k];
            for i in k + 1..n {
                a[col + i] = a[col + i] / pivot;
            }
        } else if info == 0 {
            info = (k + 1) as i32;
        }

        for j in k + 1..n {
            let akj = a[j * lda + k];
            if akj.is_zero() {
                continue;
            }
            for i in k + 1..n {
                let lik = a[col + i];
                a[j * lda + i] = a[j * lda + i] - lik * akj;
            }
        }
    }
    info
}

/// Solve with the factors from [`getrf`], overwriting the `n x nrhs`
/// right-hand side `b` with the solution.
#[allow(clippy::too_many_arguments)]
pub fn getrs<T: Scalar>(
    trans: Transpose,
    n: usize,
    nrhs: usize,
    a: &[T],
    lda: usize,
    ipiv: &[i32],
    b: &mut [T],
    ldb: usize,
) -> i32 {
    if lda < n.max(1) {
        return -5;
    }
    if ipiv.len() < n {
        return -6;
    }
    if ldb < n.max(1) {
        return -8;
    }
    if n == 0 || nrhs == 0 {
        return 0;
    }
    if a.len() < lda * (n - 1) + n {
        return -4;
    }
    if b.len() < ldb * (nrhs - 1) + n {
        return -7;
    }
    if ipiv[..n].iter().any(|&p| p < 1 || p as usize > n) {
        return -6;
    }

    for j in 0..nrhs {
        let x = &mut b[j * ldb..j * ldb + n];
        match trans {
            Transpose::No => {
                for (i, &p) in ipiv[..n].iter().enumerate() {
                    x.swap(i, p as usize - 1);
                }
                solve_factors(n, a, lda, x, None);
            }
            Transpose::Trans | Transpose::ConjTrans => {
                solve_factors(n, a, lda, x, Some(trans == Transpose::ConjTrans));
                for (i, &p) in ipiv[..n].iter().enumerate().rev() {
                    x.swap(i, p as usize - 1);
                }
            }
        }
    }
    0
}

/// `x <- (L U)^{-1} x` for `transposed == None`, otherwise
/// `x <- (L U)^{-T} x`, conjugating the factors when the flag is set.
/// Pivots are not applied.
fn solve_factors<T: Scalar>(n: usize, a: &[T], lda: usize, x: &mut [T], transposed: Option<bool>) {
    match transposed {
        None => {
            for k in 0..n {
                let xk = x[k];
                if xk.is_zero() {
                    continue;
                }
                for i in k + 1..n {
                    x[i] = x[i] - a[k * lda + i] * xk;
                }
            }
            for k in (0..n).rev() {
                x[k] = x[k] / a[k * lda + k];
                let xk = x[k];
                for i in 0..k {
                    x[i] = x[i] - a[k * lda + i] * xk;
                }
            }
        }
        Some(conjugate) => {
            let op = |v: T| if conjugate { v.conj() } else { v };
            for k in 0..n {
                let mut s = x[k];
                for i in 0..k {
                    s = s - op(a[k * lda + i]) * x[i];
                }
                x[k] = s / op(a[k * lda + k]);
            }
            for k in (0..n).rev() {
                let mut s = x[k];
                for i in k + 1..n {
                    s = s - op(a[k * lda + i]) * x[i];
                }
                x[k] = s;
            }
        }
    }
}

/// Steps of the 1-norm estimator before it settles for the best so far.
const ESTIMATOR_STEPS: usize = 5;

fn norm_1_of<T: Scalar>(x: &[T]) -> T::Real {
    x.iter().fold(T::Real::zero(), |acc, v| acc + v.abs())
}

/// Reciprocal 1-norm condition estimate from the factors of [`getrf`].
///
/// `anorm` is the 1-norm of the original matrix. `‖A^{-1}‖₁` is estimated
/// with Hager's method as refined by Higham, so the result is within a
/// small factor of `1 / (‖A‖₁ ‖A^{-1}‖₁)` and usually exact.
pub fn gecon<T: Scalar>(n: usize, a: &[T], lda: usize, anorm: T::Real) -> (T::Real, i32) {
    if lda < n.max(1) {
        return (T::Real::zero(), -4);
    }
    if anorm < T::Real::zero() {
        return (T::Real::zero(), -5);
    }
    if n == 0 {
        return (T::Real::one(), 0);
    }
    if anorm.is_nan() {
        return (anorm, 0);
    }
    if anorm.is_zero() {
        return (T::Real::zero(), 0);
    }

    let nr = T::Real::from_usize(n);
    let mut x = vec![T::from_real(T::Real::one() / nr); n];
    let mut est = T::Real::zero();
    for step in 0..ESTIMATOR_STEPS {
        let mut y = x.clone();
        solve_factors(n, a, lda, &mut y, None);
        let candidate = norm_1_of(&y);
        if step > 0 && !(candidate > est) {
            break;
        }
        est = candidate;

        let mut z: Vec<T> = y
            .iter()
            .map(|&v| {
                let m = v.abs();
                if m.is_zero() {
                    T::one()
                } else {
                    v / T::from_real(m)
                }
            })
            .collect();
        solve_factors(n, a, lda, &mut z, Some(true));

        let (mut j, mut zmax) = (0, T::Real::zero());
        for (i, v) in z.iter().enumerate() {
            let m = v.abs();
            if m > zmax {
                zmax = m;
                j = i;
            }
        }
        let ztx = z
            .iter()
            .zip(&x)
            .fold(T::Real::zero(), |acc, (&zi, &xi)| acc + (zi.conj() * xi).re());
        if !(zmax > ztx) {
            break;
        }
        x.iter_mut().for_each(|v| *v = T::zero());
        x[j] = T::one();
    }

    // Alternating probe that catches matrices the iteration underestimates.
    let denom = if n > 1 { T::Real::from_usize(n - 1) } else { T::Real::one() };
    let mut alt: Vec<T> = (0..n)
        .map(|i| {
            let mag = T::Real::one() + T::Real::from_usize(i) / denom;
            T::from_real(if i % 2 == 0 { mag } else { -mag })
        })
        .collect();
    solve_factors(n, a, lda, &mut alt, None);
    let two = T::Real::from_usize(2);
    let three_n = T::Real::from_usize(3 * n);
    let alt_est = two * norm_1_of(&alt) / three_n;
    if alt_est > est {
        est = alt_est;
    }

    if !est.is_finite() {
        return (T::Real::zero(), 0);
    }
    if est.is_zero() {
        return (T::Real::zero(), 0);
    }
    ((T::Real::one() / est) / anorm, 0)
}
