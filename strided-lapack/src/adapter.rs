//! Column-major buffers and typed LAPACK status codes.
//!
//! Every solver materialises its operands into a [`ColMajor`] buffer, runs
//! the active backend on it and copies the result back in the caller's
//! layout. This is the only module that talks to a backend.

use crate::backend::{routine_name, LapackBackend, LapackScalar, Routine};
use crate::kernel::Transpose;
use num_traits::{One, Zero};
use strided_expr::{MatrixExpr, VectorExpr};
use strided_traits::{debug_trace, Layout, RealScalar, Scalar};
use strided_view::{Matrix, MatrixViewMut, Result, StridedError, Vector};

/// Buffers handed to a backend never have zero length.
pub const MIN_ARRAY_SIZE: usize = 1;

/// Dense column-major buffer with leading dimension `max(1, rows)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColMajor<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
    ld: usize,
}

impl<T: Scalar> ColMajor<T> {
    fn with_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let ld = rows.max(1);
        let mut data = vec![T::zero(); (ld * cols).max(MIN_ARRAY_SIZE)];
        for c in 0..cols {
            for r in 0..rows {
                data[c * ld + r] = f(r, c);
            }
        }
        Self { data, rows, cols, ld }
    }

    pub fn from_matrix<E: MatrixExpr<Elem = T>>(m: &E) -> Self {
        Self::with_fn(m.nrows(), m.ncols(), |r, c| m.at(r, c))
    }

    /// A vector as a single column.
    pub fn from_vector<E: VectorExpr<Elem = T>>(v: &E) -> Self {
        Self::with_fn(v.size(), 1, |r, _| v.at(r))
    }

    pub fn identity(n: usize) -> Self {
        Self::with_fn(n, n, |r, c| if r == c { T::one() } else { T::zero() })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn ld(&self) -> usize {
        self.ld
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        assert!(r < self.rows && c < self.cols, "index ({r}, {c}) out of range");
        self.data[c * self.ld + r]
    }

    /// Copy out in the requested storage order.
    pub fn to_matrix(&self, layout: Layout) -> Matrix<T> {
        Matrix::from_fn_with_layout(self.rows, self.cols, layout, |r, c| self.get(r, c))
    }

    /// First column as a vector.
    pub fn to_vector(&self) -> Vector<T> {
        Vector::from_fn(self.rows, |r| self.get(r, 0))
    }

    /// Overwrite a same-shaped view.
    pub fn write_into(&self, dst: &mut MatrixViewMut<'_, T>) -> Result<()> {
        if dst.shape() != (self.rows, self.cols) {
            let (r, c) = dst.shape();
            return Err(StridedError::ShapeMismatch(vec![r, c], vec![self.rows, self.cols]));
        }
        dst.for_each_indexed(|r, c, x| *x = self.get(r, c));
        Ok(())
    }

    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|x| *x = value);
    }

    /// Maximum absolute column sum.
    pub fn norm_1(&self) -> T::Real {
        (0..self.cols).fold(T::Real::zero(), |best, c| {
            let col = &self.data[c * self.ld..c * self.ld + self.rows];
            let s = col.iter().fold(T::Real::zero(), |acc, x| acc + x.abs());
            best.max_of(s)
        })
    }
}

// ============================================================================
// Status codes
// ============================================================================

/// Outcome of a factorisation or a status-returning solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuStatus {
    Success,
    /// `U(pivot, pivot)` is exactly zero (1-based, as LAPACK reports it).
    Singular { pivot: usize },
}

impl LuStatus {
    /// `0` on success, the 1-based zero pivot otherwise.
    pub fn code(self) -> i32 {
        match self {
            LuStatus::Success => 0,
            LuStatus::Singular { pivot } => pivot as i32,
        }
    }

    pub fn is_success(self) -> bool {
        self == LuStatus::Success
    }

    pub fn is_singular(self) -> bool {
        !self.is_success()
    }
}

/// Map a LAPACK `info` code: negative values become errors, the rest a
/// status.
pub(crate) fn check_info<T: Scalar>(routine: Routine, info: i32) -> Result<LuStatus> {
    if info < 0 {
        return Err(StridedError::Lapack {
            routine: routine_name::<T>(routine),
            arg: -info,
        });
    }
    Ok(if info == 0 {
        LuStatus::Success
    } else {
        LuStatus::Singular {
            pivot: info as usize,
        }
    })
}

/// Side length of a square, non-empty operand.
pub(crate) fn require_square<E: MatrixExpr>(a: &E, what: &'static str) -> Result<usize> {
    let (rows, cols) = (a.nrows(), a.ncols());
    if rows == 0 || cols == 0 {
        return Err(StridedError::Empty(what));
    }
    if rows != cols {
        return Err(StridedError::NonSquare { rows, cols });
    }
    Ok(rows)
}

// ============================================================================
// LU factors
// ============================================================================

/// `P * L * U` factors of a square matrix, packed as LAPACK leaves them.
#[derive(Debug, Clone)]
pub struct LuFactors<T> {
    lu: ColMajor<T>,
    ipiv: Vec<i32>,
    status: LuStatus,
}

impl<T: LapackScalar> LuFactors<T> {
    /// Factor a square, non-empty matrix. A zero pivot is not an error; it
    /// shows up in [`status`](LuFactors::status).
    pub fn factor<E: MatrixExpr<Elem = T>>(a: &E) -> Result<Self> {
        let n = require_square(a, "lu")?;
        let mut lu = ColMajor::from_matrix(a);
        let mut ipiv = vec![0i32; n.max(MIN_ARRAY_SIZE)];
        let ld = lu.ld();
        let info = T::Backend::getrf(n, lu.as_mut_slice(), ld, &mut ipiv);
        debug_trace!(
            "{}: {}x{} on {} backend, info = {}",
            routine_name::<T>(Routine::Getrf),
            n,
            n,
            <T::Backend as LapackBackend<T>>::NAME,
            info
        );
        let status = check_info::<T>(Routine::Getrf, info)?;
        ipiv.truncate(n);
        Ok(Self { lu, ipiv, status })
    }

    pub fn n(&self) -> usize {
        self.lu.nrows()
    }

    pub fn status(&self) -> LuStatus {
        self.status
    }

    /// 1-based pivot rows: row `i` was swapped with row `pivots()[i] - 1`.
    pub fn pivots(&self) -> &[i32] {
        &self.ipiv
    }

    /// The packed factors.
    pub fn packed(&self) -> &ColMajor<T> {
        &self.lu
    }

    /// Overwrite `b` (`n x nrhs`) with `op(A)^{-1} b`. The factors must be
    /// non-singular for the result to be meaningful.
    pub fn solve_in_place(&self, trans: Transpose, b: &mut ColMajor<T>) -> Result<()> {
        let n = self.n();
        if b.nrows() != n {
            return Err(StridedError::ShapeMismatch(
                vec![n, n],
                vec![b.nrows(), b.ncols()],
            ));
        }
        let (nrhs, ldb) = (b.ncols(), b.ld());
        let info = T::Backend::getrs(
            trans,
            n,
            nrhs,
            self.lu.as_slice(),
            self.lu.ld(),
            &self.ipiv,
            b.as_mut_slice(),
            ldb,
        );
        debug_trace!(
            "{}: n = {}, nrhs = {}, info = {}",
            routine_name::<T>(Routine::Getrs),
            n,
            nrhs,
            info
        );
        check_info::<T>(Routine::Getrs, info).map(|_| ())
    }

    /// Reciprocal 1-norm condition number given `anorm = norm_1(A)`; zero
    /// for singular factors.
    pub fn rcond(&self, anorm: T::Real) -> Result<T::Real> {
        if self.status.is_singular() {
            return Ok(T::Real::zero());
        }
        let n = self.n();
        let (rc, info) = T::Backend::gecon(n, self.lu.as_slice(), self.lu.ld(), anorm);
        debug_trace!(
            "{}: n = {}, anorm = {:?}, rcond = {:?}",
            routine_name::<T>(Routine::Gecon),
            n,
            anorm,
            rc
        );
        check_info::<T>(Routine::Gecon, info)?;
        Ok(rc)
    }

    /// `det(A)`: the product of `U`'s diagonal with the permutation sign.
    pub fn det(&self) -> T {
        let mut det = T::one();
        for (i, &p) in self.ipiv.iter().enumerate() {
            det = det * self.lu.get(i, i);
            if p as usize != i + 1 {
                det = -det;
            }
        }
        det
    }
}

/// `true` when `rc` is below the resolution of `1.0`, or NaN.
pub(crate) fn below_unit_resolution<R: RealScalar>(rc: R) -> bool {
    let one = R::one();
    let probe = std::hint::black_box(rc + one);
    probe == one || rc.is_nan()
}
