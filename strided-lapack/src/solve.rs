//! Linear solves through LU: `lu_solve`, `lu_solve_inplace` and `mldivide`.

use crate::adapter::{below_unit_resolution, ColMajor, LuFactors, LuStatus};
use crate::backend::LapackScalar;
use crate::kernel::Transpose;
use strided_expr::{norm_1, MatrixExpr};
use strided_traits::{debug_trace, Layout, Scalar};
use strided_view::{Matrix, Result, StridedError, Vector};

/// A right-hand side: a vector (one column) or a matrix (several).
pub trait SolveTarget<T: Scalar>: Sized {
    fn rhs_rows(&self) -> usize;

    fn to_col_major(&self) -> ColMajor<T>;

    /// Layout a solution built from this right-hand side should use.
    fn result_layout(&self) -> Layout;

    fn from_col_major(buf: &ColMajor<T>, layout: Layout) -> Self;
}

impl<T: Scalar> SolveTarget<T> for Vector<T> {
    fn rhs_rows(&self) -> usize {
        self.len()
    }

    fn to_col_major(&self) -> ColMajor<T> {
        ColMajor::from_vector(self)
    }

    fn result_layout(&self) -> Layout {
        Layout::ColMajor
    }

    fn from_col_major(buf: &ColMajor<T>, _layout: Layout) -> Self {
        buf.to_vector()
    }
}

impl<T: Scalar> SolveTarget<T> for Matrix<T> {
    fn rhs_rows(&self) -> usize {
        self.nrows()
    }

    fn to_col_major(&self) -> ColMajor<T> {
        ColMajor::from_matrix(self)
    }

    fn result_layout(&self) -> Layout {
        self.layout()
    }

    fn from_col_major(buf: &ColMajor<T>, layout: Layout) -> Self {
        buf.to_matrix(layout)
    }
}

fn check_rhs<T: Scalar, B: SolveTarget<T>>(n: usize, b: &B) -> Result<()> {
    if b.rhs_rows() != n {
        return Err(StridedError::ShapeMismatch(vec![n, n], vec![b.rhs_rows()]));
    }
    Ok(())
}

/// Factor `a` and solve against `b`. No solution on a zero pivot.
fn factor_and_solve<E, T, B>(a: &E, b: &B, caller: &str) -> Result<(LuStatus, Option<B>)>
where
    E: MatrixExpr<Elem = T>,
    T: LapackScalar,
    B: SolveTarget<T>,
{
    let factors = LuFactors::factor(a)?;
    check_rhs(factors.n(), b)?;
    if factors.status().is_singular() {
        debug_trace!("{}: {:?}", caller, factors.status());
        return Ok((factors.status(), None));
    }
    let mut rhs = b.to_col_major();
    factors.solve_in_place(Transpose::No, &mut rhs)?;
    Ok((LuStatus::Success, Some(B::from_col_major(&rhs, b.result_layout()))))
}

/// Solve `A * X = B` into `x`, which is replaced by the solution.
///
/// A zero pivot is reported as [`LuStatus::Singular`] and leaves `x`
/// untouched. Shape violations and invalid kernel arguments are errors.
pub fn lu_solve<E, T, B>(a: E, b: &B, x: &mut B) -> Result<LuStatus>
where
    E: MatrixExpr<Elem = T>,
    T: LapackScalar,
    B: SolveTarget<T>,
{
    let (status, solution) = factor_and_solve(&a, b, "lu_solve")?;
    if let Some(solution) = solution {
        *x = solution;
    }
    Ok(status)
}

/// [`lu_solve`] overwriting the right-hand side with the solution.
pub fn lu_solve_inplace<E, T, B>(a: E, b: &mut B) -> Result<LuStatus>
where
    E: MatrixExpr<Elem = T>,
    T: LapackScalar,
    B: SolveTarget<T>,
{
    let (status, solution) = factor_and_solve(&a, &*b, "lu_solve_inplace")?;
    if let Some(solution) = solution {
        *b = solution;
    }
    Ok(status)
}

/// `A \ B`: the solution of `A * X = B`, shaped like `B`.
///
/// Fails with [`StridedError::Singular`] on a zero pivot. An
/// ill-conditioned `A` is reported through `log::warn!` and solved anyway.
pub fn mldivide<E, T, B>(a: E, b: &B) -> Result<B>
where
    E: MatrixExpr<Elem = T>,
    T: LapackScalar,
    B: SolveTarget<T>,
{
    let anorm = norm_1(&a);
    let factors = LuFactors::factor(&a)?;
    check_rhs(factors.n(), b)?;
    if let LuStatus::Singular { pivot } = factors.status() {
        return Err(StridedError::Singular { pivot });
    }
    let rc = factors.rcond(anorm)?;
    if below_unit_resolution(rc) {
        log::warn!(
            target: "strided_lapack",
            "mldivide: matrix is ill-conditioned (rcond = {:?}), result may be inaccurate",
            rc
        );
    }
    let mut rhs = b.to_col_major();
    factors.solve_in_place(Transpose::No, &mut rhs)?;
    Ok(B::from_col_major(&rhs, b.result_layout()))
}
