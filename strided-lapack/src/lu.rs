//! Explicit LU decomposition `P * A = L * U`.

use crate::adapter::{LuFactors, LuStatus};
use crate::backend::LapackScalar;
use crate::kernel::Transpose;
use crate::solve::SolveTarget;
use strided_expr::MatrixExpr;
use strided_traits::Layout;
use strided_view::{Matrix, Result, StridedError};

/// LU decomposition of a square matrix, with results laid out like the
/// input.
#[derive(Debug, Clone)]
pub struct Lu<T> {
    factors: LuFactors<T>,
    layout: Layout,
}

/// Factor `a` with partial pivoting.
///
/// A singular matrix still factors; check [`Lu::status`] before solving.
pub fn lu<E, T>(a: E) -> Result<Lu<T>>
where
    E: MatrixExpr<Elem = T>,
    T: LapackScalar,
{
    let factors = LuFactors::factor(&a)?;
    Ok(Lu {
        factors,
        layout: a.layout(),
    })
}

impl<T: LapackScalar> Lu<T> {
    pub fn n(&self) -> usize {
        self.factors.n()
    }

    pub fn status(&self) -> LuStatus {
        self.factors.status()
    }

    /// 1-based LAPACK pivot rows.
    pub fn pivots(&self) -> &[i32] {
        self.factors.pivots()
    }

    /// Unit lower triangular factor.
    pub fn l(&self) -> Matrix<T> {
        let packed = self.factors.packed();
        Matrix::from_fn_with_layout(self.n(), self.n(), self.layout, |r, c| {
            if r == c {
                T::one()
            } else if r > c {
                packed.get(r, c)
            } else {
                T::zero()
            }
        })
    }

    /// Upper triangular factor.
    pub fn u(&self) -> Matrix<T> {
        let packed = self.factors.packed();
        Matrix::from_fn_with_layout(self.n(), self.n(), self.layout, |r, c| {
            if r <= c {
                packed.get(r, c)
            } else {
                T::zero()
            }
        })
    }

    /// Row permutation with `P * A = L * U`.
    pub fn p(&self) -> Matrix<T> {
        let n = self.n();
        let mut perm: Vec<usize> = (0..n).collect();
        for (i, &p) in self.pivots().iter().enumerate() {
            perm.swap(i, p as usize - 1);
        }
        let mut p = Matrix::zeros_with_layout(n, n, self.layout);
        for (i, &src) in perm.iter().enumerate() {
            p.set(i, src, T::one());
        }
        p
    }

    pub fn det(&self) -> T {
        self.factors.det()
    }

    /// Solve `A * x = b` for a vector or matrix right-hand side.
    pub fn solve<B: SolveTarget<T>>(&self, b: &B) -> Result<B> {
        if let LuStatus::Singular { pivot } = self.status() {
            return Err(StridedError::Singular { pivot });
        }
        let mut rhs = b.to_col_major();
        self.factors.solve_in_place(Transpose::No, &mut rhs)?;
        Ok(B::from_col_major(&rhs, b.result_layout()))
    }
}
