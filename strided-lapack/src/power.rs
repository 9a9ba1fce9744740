//! Integer matrix powers.

use crate::adapter::require_square;
use crate::backend::LapackScalar;
use crate::inverse::inv;
use strided_expr::{prod, MatrixExpr};
use strided_traits::debug_trace;
use strided_view::{Matrix, Result, StridedError};

/// `A^p` for an integer `p`, in `a`'s layout.
///
/// `p == 0` gives the identity, `p > 0` multiplies `p` copies of `A` and
/// `p < 0` raises `inv(A)` to `|p|`. A singular `A` with `p < 0` therefore
/// propagates the `+∞` filled inverse.
pub fn pow<E, T>(a: E, p: i32) -> Result<Matrix<T>>
where
    E: MatrixExpr<Elem = T>,
    T: LapackScalar,
{
    let n = require_square(&a, "pow")?;
    let layout = a.layout();
    debug_trace!("pow: {}x{} to the {}", n, n, p);

    let base = if p < 0 {
        inv(&a)?
    } else {
        Matrix::from_fn_with_layout(n, n, layout, |r, c| a.at(r, c))
    };
    let mut result = Matrix::from_fn_with_layout(n, n, layout, |r, c| {
        if r == c {
            T::one()
        } else {
            T::zero()
        }
    });
    for _ in 0..p.unsigned_abs() {
        result = prod(&result, &base)?;
    }
    Ok(result)
}

/// [`pow`] for a floating point exponent, which must be integral.
pub fn powf<E, T>(a: E, p: f64) -> Result<Matrix<T>>
where
    E: MatrixExpr<Elem = T>,
    T: LapackScalar,
{
    if !p.is_finite() || p.fract() != 0.0 || p.abs() > i32::MAX as f64 {
        return Err(StridedError::BadArgument(format!(
            "matrix power needs an integral exponent, got {p}"
        )));
    }
    pow(a, p as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strided_traits::Layout;

    fn assert_close(a: &Matrix<f64>, b: &Matrix<f64>) {
        assert_eq!(a.shape(), b.shape());
        for r in 0..a.nrows() {
            for c in 0..a.ncols() {
                assert_relative_eq!(a.get(r, c), b.get(r, c), epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_positive_and_zero_powers() {
        let a = Matrix::from_rows(&[[1.0, 1.0], [1.0, 0.0]]);
        // Fibonacci: [[F(n+1), F(n)], [F(n), F(n-1)]]
        let a5 = pow(&a, 5).unwrap();
        assert_close(&a5, &Matrix::from_rows(&[[8.0, 5.0], [5.0, 3.0]]));
        let a0 = pow(&a, 0).unwrap();
        assert_close(&a0, &Matrix::from_rows(&[[1.0, 0.0], [0.0, 1.0]]));
    }

    #[test]
    fn test_negative_power_inverts() {
        let a = Matrix::from_fn_with_layout(2, 2, Layout::ColMajor, |r, c| {
            [[2.0, 0.0], [0.0, 4.0]][r][c]
        });
        let m = pow(&a, -2).unwrap();
        assert_eq!(m.layout(), Layout::ColMajor);
        assert_relative_eq!(m.get(0, 0), 0.25, epsilon = 1e-14);
        assert_relative_eq!(m.get(1, 1), 0.0625, epsilon = 1e-14);
        assert_eq!(m.get(0, 1), 0.0);
    }

    #[test]
    fn test_powf_requires_integral_exponent() {
        let a = Matrix::from_rows(&[[2.0, 0.0], [0.0, 3.0]]);
        assert_close(&powf(&a, 2.0).unwrap(), &Matrix::from_rows(&[[4.0, 0.0], [0.0, 9.0]]));
        assert_eq!(powf(&a, 0.5).unwrap_err().tag(), "bad_argument");
        assert!(powf(&a, f64::NAN).is_err());
        assert!(pow(&Matrix::<f64>::zeros(2, 3), 2).is_err());
    }
}
