//! Lazy expression nodes.
//!
//! Nodes hold their operands by value; pass `&x` to reference a container
//! without moving it. A node only reads its operands when an element is
//! requested, so nested nodes evaluate in a single pass.

use crate::expr::{flat_to_rc, Dims, Expr, MatrixExpr, VectorExpr};
use crate::functor::{BinaryFn, UnaryFn};
use strided_traits::Layout;
use strided_view::{Result, StridedError};

// ============================================================================
// Map: f(E)
// ============================================================================

/// Applies a unary functor to every element of an expression.
#[derive(Debug, Clone, Copy)]
pub struct Map<E, F> {
    expr: E,
    f: F,
}

impl<E, F> Map<E, F> {
    pub fn new(expr: E, f: F) -> Self {
        Self { expr, f }
    }

    pub fn inner(&self) -> &E {
        &self.expr
    }
}

impl<E: Expr, F: UnaryFn<E::Elem>> Expr for Map<E, F> {
    type Elem = F::Output;

    #[inline]
    fn dims(&self) -> Dims {
        self.expr.dims()
    }

    #[inline]
    fn at_flat(&self, k: usize) -> F::Output {
        self.f.call(self.expr.at_flat(k))
    }
}

impl<E: VectorExpr, F: UnaryFn<E::Elem>> VectorExpr for Map<E, F> {
    #[inline]
    fn at(&self, i: usize) -> F::Output {
        self.f.call(self.expr.at(i))
    }
}

impl<E: MatrixExpr, F: UnaryFn<E::Elem>> MatrixExpr for Map<E, F> {
    #[inline]
    fn nrows(&self) -> usize {
        self.expr.nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.expr.ncols()
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> F::Output {
        self.f.call(self.expr.at(r, c))
    }

    #[inline]
    fn layout(&self) -> Layout {
        self.expr.layout()
    }
}

// ============================================================================
// ZipWith: op(A, B)
// ============================================================================

/// Combines two expressions of identical shape element by element.
#[derive(Debug, Clone, Copy)]
pub struct ZipWith<A, B, Op> {
    lhs: A,
    rhs: B,
    op: Op,
}

impl<A: Expr, B: Expr, Op: BinaryFn<A::Elem, B::Elem>> ZipWith<A, B, Op> {
    /// Fails with a shape mismatch unless both operands have the same dims.
    pub fn new(lhs: A, rhs: B, op: Op) -> Result<Self> {
        let (da, db) = (lhs.dims(), rhs.dims());
        if da != db {
            return Err(StridedError::ShapeMismatch(da.to_vec(), db.to_vec()));
        }
        Ok(Self { lhs, rhs, op })
    }
}

impl<A: Expr, B: Expr, Op: BinaryFn<A::Elem, B::Elem>> Expr for ZipWith<A, B, Op> {
    type Elem = Op::Output;

    #[inline]
    fn dims(&self) -> Dims {
        self.lhs.dims()
    }

    #[inline]
    fn at_flat(&self, k: usize) -> Op::Output {
        self.op.call(self.lhs.at_flat(k), self.rhs.at_flat(k))
    }
}

impl<A: VectorExpr, B: VectorExpr, Op: BinaryFn<A::Elem, B::Elem>> VectorExpr
    for ZipWith<A, B, Op>
{
    #[inline]
    fn at(&self, i: usize) -> Op::Output {
        self.op.call(self.lhs.at(i), self.rhs.at(i))
    }
}

impl<A: MatrixExpr, B: MatrixExpr, Op: BinaryFn<A::Elem, B::Elem>> MatrixExpr
    for ZipWith<A, B, Op>
{
    #[inline]
    fn nrows(&self) -> usize {
        self.lhs.nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.lhs.ncols()
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> Op::Output {
        self.op.call(self.lhs.at(r, c), self.rhs.at(r, c))
    }

    #[inline]
    fn layout(&self) -> Layout {
        self.lhs.layout()
    }
}

// ============================================================================
// ScalarLeft: op(s, E)
// ============================================================================

/// Combines a scalar with every element of an expression: `op(s, x)`.
#[derive(Debug, Clone, Copy)]
pub struct ScalarLeft<S, E, Op> {
    scalar: S,
    expr: E,
    op: Op,
}

impl<S, E, Op> ScalarLeft<S, E, Op> {
    pub fn new(scalar: S, expr: E, op: Op) -> Self {
        Self { scalar, expr, op }
    }
}

impl<S: Copy, E: Expr, Op: BinaryFn<S, E::Elem>> Expr for ScalarLeft<S, E, Op> {
    type Elem = Op::Output;

    #[inline]
    fn dims(&self) -> Dims {
        self.expr.dims()
    }

    #[inline]
    fn at_flat(&self, k: usize) -> Op::Output {
        self.op.call(self.scalar, self.expr.at_flat(k))
    }
}

impl<S: Copy, E: VectorExpr, Op: BinaryFn<S, E::Elem>> VectorExpr for ScalarLeft<S, E, Op> {
    #[inline]
    fn at(&self, i: usize) -> Op::Output {
        self.op.call(self.scalar, self.expr.at(i))
    }
}

impl<S: Copy, E: MatrixExpr, Op: BinaryFn<S, E::Elem>> MatrixExpr for ScalarLeft<S, E, Op> {
    #[inline]
    fn nrows(&self) -> usize {
        self.expr.nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.expr.ncols()
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> Op::Output {
        self.op.call(self.scalar, self.expr.at(r, c))
    }

    #[inline]
    fn layout(&self) -> Layout {
        self.expr.layout()
    }
}

// ============================================================================
// Trans and MatrixDiagonal
// ============================================================================

/// Lazy transpose of a matrix expression.
#[derive(Debug, Clone, Copy)]
pub struct Trans<E> {
    expr: E,
}

impl<E: MatrixExpr> Trans<E> {
    pub fn new(expr: E) -> Self {
        Self { expr }
    }
}

impl<E: MatrixExpr> Expr for Trans<E> {
    type Elem = E::Elem;

    #[inline]
    fn dims(&self) -> Dims {
        Dims::Matrix(self.expr.ncols(), self.expr.nrows())
    }

    #[inline]
    fn at_flat(&self, k: usize) -> E::Elem {
        let (r, c) = flat_to_rc(k, self.expr.nrows());
        self.expr.at(c, r)
    }
}

impl<E: MatrixExpr> MatrixExpr for Trans<E> {
    #[inline]
    fn nrows(&self) -> usize {
        self.expr.ncols()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.expr.nrows()
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> E::Elem {
        self.expr.at(c, r)
    }

    #[inline]
    fn layout(&self) -> Layout {
        self.expr.layout().transposed()
    }
}

/// Read-only diagonal of any matrix expression, shifted by `k`.
///
/// For storage-backed matrices `Matrix::diagonal` and
/// `Matrix::diagonal_mut` give views that share storage instead.
#[derive(Debug, Clone, Copy)]
pub struct MatrixDiagonal<E> {
    expr: E,
    k: isize,
    len: usize,
}

impl<E: MatrixExpr> MatrixDiagonal<E> {
    pub fn new(expr: E, k: isize) -> Self {
        let (rows, cols) = (expr.nrows(), expr.ncols());
        let len = rows.min(cols).saturating_sub(k.unsigned_abs());
        Self { expr, k, len }
    }

    #[inline]
    fn coords(&self, i: usize) -> (usize, usize) {
        let shift = self.k.unsigned_abs();
        if self.k >= 0 {
            (i, i + shift)
        } else {
            (i + shift, i)
        }
    }
}

impl<E: MatrixExpr> Expr for MatrixDiagonal<E> {
    type Elem = E::Elem;

    #[inline]
    fn dims(&self) -> Dims {
        Dims::Vector(self.len)
    }

    #[inline]
    fn at_flat(&self, k: usize) -> E::Elem {
        self.at(k)
    }
}

impl<E: MatrixExpr> VectorExpr for MatrixDiagonal<E> {
    #[inline]
    fn at(&self, i: usize) -> E::Elem {
        assert!(i < self.len, "index {i} out of range for diagonal of length {}", self.len);
        let (r, c) = self.coords(i);
        self.expr.at(r, c)
    }
}

// ============================================================================
// Equality
// ============================================================================

/// `==` for expression types: shapes equal and elements equal after
/// promotion to the common element type.
macro_rules! impl_expr_eq {
    ($([$($gen:tt)*] $ty:ty;)*) => {
        $(
            impl<$($gen)*, Rhs> PartialEq<Rhs> for $ty
            where
                $ty: $crate::expr::Expr,
                Rhs: $crate::expr::Expr,
                <$ty as $crate::expr::Expr>::Elem:
                    ::strided_traits::Promote<<Rhs as $crate::expr::Expr>::Elem>,
                <Rhs as $crate::expr::Expr>::Elem: ::strided_traits::Scalar,
            {
                fn eq(&self, other: &Rhs) -> bool {
                    $crate::expr::equals(self, other)
                }
            }
        )*
    };
}

impl_expr_eq! {
    [E, F] Map<E, F>;
    [A, B, Op] ZipWith<A, B, Op>;
    [S, E, Op] ScalarLeft<S, E, Op>;
    [E] Trans<E>;
    [E] MatrixDiagonal<E>;
}

pub(crate) use impl_expr_eq;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functor::{AddOp, Func, MulOp, Sqr};
    use num_complex::Complex64;
    use strided_view::{Matrix, Vector};

    #[test]
    fn test_map_composes_lazily() {
        let v = Vector::from_vec(vec![1.0, -2.0, 3.0]);
        let e = Map::new(Map::new(&v, Sqr), Func(|x: f64| x + 1.0));
        assert_eq!(e.size(), 3);
        assert_eq!(e.at(1), 5.0);
        assert_eq!(e.to_vector().into_vec(), vec![2.0, 5.0, 10.0]);
    }

    #[test]
    fn test_zip_checks_shapes() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from_rows(&[[1.0, 2.0, 3.0]]);
        assert!(ZipWith::new(&a, &b, AddOp).is_err());
        let s = ZipWith::new(&a, &a, AddOp).unwrap();
        assert_eq!(s.at(1, 0), 6.0);
    }

    #[test]
    fn test_scalar_left_promotes() {
        let v = Vector::from_vec(vec![1.0f32, 2.0]);
        let e = ScalarLeft::new(Complex64::new(0.0, 1.0), &v, MulOp);
        assert_eq!(e.at(1), Complex64::new(0.0, 2.0));
    }

    #[test]
    fn test_trans_and_diagonal() {
        let a = Matrix::from_fn_with_layout(2, 3, Layout::ColMajor, |r, c| (r * 3 + c) as f64);
        let t = Trans::new(&a);
        assert_eq!((t.nrows(), t.ncols()), (3, 2));
        assert_eq!(t.at(2, 1), 5.0);
        assert_eq!(t.layout(), Layout::RowMajor);
        assert_eq!(t.at_flat(1), 3.0);
        let d = MatrixDiagonal::new(&a, 1);
        assert_eq!(d.to_vector().into_vec(), vec![1.0]);
        let d = MatrixDiagonal::new(&a, -1);
        assert_eq!(d.to_vector().into_vec(), vec![3.0]);
        assert_eq!(MatrixDiagonal::new(&a, 2).size(), 0);
        assert_eq!(MatrixDiagonal::new(&a, 5).size(), 0);

        // length is min(rows, cols) - |k| on rectangular shapes
        let wide = Matrix::from_fn(2, 4, |r, c| (r * 4 + c) as f64);
        assert_eq!(MatrixDiagonal::new(&wide, 1).to_vector().into_vec(), vec![1.0]);
        assert_eq!(MatrixDiagonal::new(&wide, 0).to_vector().into_vec(), vec![0.0, 5.0]);
        let tall = Matrix::from_fn(4, 2, |r, c| (r * 2 + c) as f64);
        assert_eq!(MatrixDiagonal::new(&tall, -1).to_vector().into_vec(), vec![2.0]);
        assert_eq!(MatrixDiagonal::new(&tall, -2).size(), 0);
    }

    #[test]
    fn test_node_equality() {
        let v = Vector::from_vec(vec![1.0, 2.0]);
        let doubled = ScalarLeft::new(2.0, &v, MulOp);
        let summed = ZipWith::new(&v, &v, AddOp).unwrap();
        assert!(doubled == summed);
        assert!(Map::new(&v, Sqr) != doubled);
    }
}
