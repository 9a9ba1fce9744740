//! Reciprocal condition estimate and the ill-conditioning test.

use crate::adapter::{below_unit_resolution, LuFactors};
use crate::backend::LapackScalar;
use strided_expr::{norm_1, MatrixExpr};
use strided_view::Result;

/// Estimate of `1 / (‖A‖₁ ‖A⁻¹‖₁)` in `[0, 1]`.
///
/// A singular matrix has `rcond == 0`.
pub fn rcond<E, T>(a: E) -> Result<T::Real>
where
    E: MatrixExpr<Elem = T>,
    T: LapackScalar,
{
    let anorm = norm_1(&a);
    let factors = LuFactors::factor(&a)?;
    factors.rcond(anorm)
}

/// `true` when `rcond(a) + 1 == 1` or `rcond(a)` is NaN.
pub fn illcond<E, T>(a: E) -> Result<bool>
where
    E: MatrixExpr<Elem = T>,
    T: LapackScalar,
{
    Ok(below_unit_resolution(rcond(a)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use strided_expr::{eye, hilb};
    use strided_view::Matrix;

    #[test]
    fn test_identity_is_perfectly_conditioned() {
        assert_relative_eq!(rcond(eye::<f64>(4)).unwrap(), 1.0, epsilon = 1e-12);
        assert!(!illcond(eye::<f64>(4)).unwrap());
    }

    #[test]
    fn test_singular_and_nearly_singular() {
        let s = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(rcond(&s).unwrap(), 0.0);
        assert!(illcond(&s).unwrap());

        let h = hilb::<f64>(16);
        assert!(illcond(&h).unwrap());
        assert!(!illcond(&hilb::<f64>(3)).unwrap());
    }

    #[test]
    fn test_diagonal_estimate_is_exact() {
        let d = Matrix::from_rows(&[[2.0, 0.0], [0.0, 0.5]]);
        // ‖D‖₁ = 2, ‖D⁻¹‖₁ = 2
        assert_relative_eq!(rcond(&d).unwrap(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_complex_and_errors() {
        let i = Complex64::new(0.0, 1.0);
        let zero = Complex64::new(0.0, 0.0);
        let a = Matrix::from_rows(&[[i, zero], [zero, i]]);
        assert_relative_eq!(rcond(&a).unwrap(), 1.0, epsilon = 1e-12);
        assert!(rcond(&Matrix::<f64>::zeros(2, 3)).is_err());
        assert!(illcond(&Matrix::<f64>::zeros(0, 0)).is_err());
    }
}
