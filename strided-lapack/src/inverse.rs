//! Matrix inverse by solving against the identity.

use crate::adapter::{below_unit_resolution, ColMajor, LuFactors, LuStatus};
use crate::backend::LapackScalar;
use crate::kernel::Transpose;
use strided_expr::{norm_1, MatrixExpr};
use strided_traits::{debug_trace, RealScalar, Scalar};
use strided_view::{Matrix, Result};

/// How an inversion went. Only `Singular` leaves a meaningless result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvOutcome {
    Success,
    /// Zero pivot: every entry of the result is `+∞`.
    Singular,
    /// The inverse was computed but `rcond` is below the resolution of `1`.
    IllConditioned,
}

impl InvOutcome {
    pub fn is_singular(self) -> bool {
        self == InvOutcome::Singular
    }
}

fn positive_infinity<T: Scalar>() -> T {
    T::from_real(<T::Real as RealScalar>::infinity())
}

/// Factor, check and invert `a`. The buffer is `+∞` filled when singular.
fn invert<E, T>(a: &E) -> Result<(ColMajor<T>, InvOutcome)>
where
    E: MatrixExpr<Elem = T>,
    T: LapackScalar,
{
    let anorm = norm_1(a);
    let factors = LuFactors::factor(a)?;
    let n = factors.n();
    let mut x = ColMajor::identity(n);

    if let LuStatus::Singular { pivot } = factors.status() {
        log::warn!(
            target: "strided_lapack",
            "inv: matrix is singular (zero pivot at {}), result filled with +inf",
            pivot
        );
        x.fill(positive_infinity());
        return Ok((x, InvOutcome::Singular));
    }

    let rc = factors.rcond(anorm)?;
    let outcome = if below_unit_resolution(rc) {
        log::warn!(
            target: "strided_lapack",
            "inv: matrix is ill-conditioned (rcond = {:?}), result may be inaccurate",
            rc
        );
        InvOutcome::IllConditioned
    } else {
        InvOutcome::Success
    };
    factors.solve_in_place(Transpose::No, &mut x)?;
    debug_trace!("inv: {}x{} -> {:?}", n, n, outcome);
    Ok((x, outcome))
}

/// Replace `a` with its inverse, keeping `a`'s layout.
///
/// Returns `false` when `a` is singular; `a` is then filled with `+∞`.
/// Conditioning is judged on `a` before it is overwritten.
pub fn inv_inplace<T: LapackScalar>(a: &mut Matrix<T>) -> Result<bool> {
    let (x, outcome) = invert(&*a)?;
    x.write_into(&mut a.view_mut())?;
    Ok(!outcome.is_singular())
}

/// `A⁻¹` in `a`'s layout; `+∞` filled (with a warning) when `a` is singular.
pub fn inv<E, T>(a: E) -> Result<Matrix<T>>
where
    E: MatrixExpr<Elem = T>,
    T: LapackScalar,
{
    inv_checked(a).map(|(m, _)| m)
}

/// [`inv`] together with the outcome it logged.
pub fn inv_checked<E, T>(a: E) -> Result<(Matrix<T>, InvOutcome)>
where
    E: MatrixExpr<Elem = T>,
    T: LapackScalar,
{
    let (x, outcome) = invert(&a)?;
    Ok((x.to_matrix(a.layout()), outcome))
}
