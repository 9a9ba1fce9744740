//! Storage-free containers: identity, constant and sequence generators.

use crate::expr::{Dims, Expr, MatrixExpr, VectorExpr};
use crate::node::impl_expr_eq;
use std::marker::PhantomData;
use std::ops::Range;
use strided_traits::{RealScalar, Scalar};
use strided_view::{Result, Slice, StridedError};

/// `1` on the main diagonal, `0` elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct IdentityMatrix<T> {
    rows: usize,
    cols: usize,
    _marker: PhantomData<T>,
}

impl<T: Scalar> Expr for IdentityMatrix<T> {
    type Elem = T;

    #[inline]
    fn dims(&self) -> Dims {
        Dims::Matrix(self.rows, self.cols)
    }

    #[inline]
    fn at_flat(&self, k: usize) -> T {
        let (r, c) = (k / self.cols, k % self.cols);
        self.at(r, c)
    }
}

impl<T: Scalar> MatrixExpr for IdentityMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> T {
        if r == c {
            T::one()
        } else {
            T::zero()
        }
    }
}

/// Every element equals the same value.
#[derive(Debug, Clone, Copy)]
pub struct ScalarMatrix<T> {
    rows: usize,
    cols: usize,
    value: T,
}

impl<T: Copy> Expr for ScalarMatrix<T> {
    type Elem = T;

    #[inline]
    fn dims(&self) -> Dims {
        Dims::Matrix(self.rows, self.cols)
    }

    #[inline]
    fn at_flat(&self, _k: usize) -> T {
        self.value
    }
}

impl<T: Copy> MatrixExpr for ScalarMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn at(&self, _r: usize, _c: usize) -> T {
        self.value
    }
}

/// Vector whose elements all equal the same value.
#[derive(Debug, Clone, Copy)]
pub struct ScalarVector<T> {
    len: usize,
    value: T,
}

impl<T: Copy> Expr for ScalarVector<T> {
    type Elem = T;

    #[inline]
    fn dims(&self) -> Dims {
        Dims::Vector(self.len)
    }

    #[inline]
    fn at_flat(&self, _k: usize) -> T {
        self.value
    }
}

impl<T: Copy> VectorExpr for ScalarVector<T> {
    #[inline]
    fn at(&self, _i: usize) -> T {
        self.value
    }
}

/// Arithmetic progression `start + i * stride`, `i < len`.
#[derive(Debug, Clone, Copy)]
pub struct SeqVector<T> {
    start: T,
    stride: T,
    len: usize,
}

impl<T: Scalar> Expr for SeqVector<T> {
    type Elem = T;

    #[inline]
    fn dims(&self) -> Dims {
        Dims::Vector(self.len)
    }

    #[inline]
    fn at_flat(&self, k: usize) -> T {
        self.at(k)
    }
}

impl<T: Scalar> VectorExpr for SeqVector<T> {
    #[inline]
    fn at(&self, i: usize) -> T {
        self.start + T::from_usize(i) * self.stride
    }
}

impl_expr_eq! {
    [T] IdentityMatrix<T>;
    [T] ScalarMatrix<T>;
    [T] ScalarVector<T>;
    [T] SeqVector<T>;
}

// ============================================================================
// Constructors
// ============================================================================

/// `n x n` identity.
pub fn eye<T: Scalar>(n: usize) -> IdentityMatrix<T> {
    eye_rect(n, n)
}

/// `rows x cols` matrix with ones on the main diagonal.
pub fn eye_rect<T: Scalar>(rows: usize, cols: usize) -> IdentityMatrix<T> {
    IdentityMatrix {
        rows,
        cols,
        _marker: PhantomData,
    }
}

pub fn scalar_matrix<T: Copy>(rows: usize, cols: usize, value: T) -> ScalarMatrix<T> {
    ScalarMatrix { rows, cols, value }
}

pub fn zero_matrix<T: Scalar>(rows: usize, cols: usize) -> ScalarMatrix<T> {
    scalar_matrix(rows, cols, T::zero())
}

pub fn scalar_vector<T: Copy>(len: usize, value: T) -> ScalarVector<T> {
    ScalarVector { len, value }
}

pub fn zero_vector<T: Scalar>(len: usize) -> ScalarVector<T> {
    scalar_vector(len, T::zero())
}

/// `start, start+1, ...` with `size` entries.
pub fn seq<T: Scalar>(start: T, size: usize) -> SeqVector<T> {
    seq_stride(start, T::one(), size)
}

/// `start, start+stride, ...` with `size` entries.
pub fn seq_stride<T: Scalar>(start: T, stride: T, size: usize) -> SeqVector<T> {
    SeqVector {
        start,
        stride,
        len: size,
    }
}

/// The indices of a half-open range as a sequence.
pub fn seq_range<T: Scalar>(range: Range<usize>) -> SeqVector<T> {
    let size = range.end.saturating_sub(range.start);
    seq_stride(T::from_usize(range.start), T::one(), size)
}

/// The indices selected by a [`Slice`] as a sequence.
pub fn seq_slice<T: Scalar>(s: Slice) -> SeqVector<T> {
    seq_stride(
        T::from_usize(s.start),
        T::from_f64(s.stride as f64),
        s.size,
    )
}

/// Inclusive progression `start:stride:stop` with
/// `floor((stop - start) / stride) + 1` entries (none when that is negative).
pub fn colon<T: RealScalar>(start: T, stride: T, stop: T) -> Result<SeqVector<T>> {
    if stride == T::zero() || !stride.is_finite() || !start.is_finite() || !stop.is_finite() {
        return Err(StridedError::BadArgument(format!(
            "colon({start:?}, {stride:?}, {stop:?}) needs a finite non-zero stride"
        )));
    }
    let steps = ((stop - start) / stride).floor();
    if steps < T::zero() {
        return Ok(seq_stride(start, stride, 0));
    }
    let steps = steps.to_f64_lossy();
    if !steps.is_finite() || steps >= usize::MAX as f64 {
        return Err(StridedError::BadArgument(format!(
            "colon({start:?}, {stride:?}, {stop:?}) has too many entries"
        )));
    }
    let size = steps as usize + 1;
    Ok(seq_stride(start, stride, size))
}
