//! Expression traits and the semantic accessors.
//!
//! Every vector or matrix, whether it owns storage, borrows it, or computes
//! its elements on demand, is an [`Expr`]. Elements are addressed in logical
//! row-major order through [`Expr::at_flat`]; [`VectorExpr`] and
//! [`MatrixExpr`] add the natural one- and two-index accessors.

use strided_traits::{Layout, Promote, Scalar};
use strided_view::{Matrix, MatrixView, MatrixViewMut, Vector, VectorView, VectorViewMut};

/// Shape of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dims {
    Vector(usize),
    Matrix(usize, usize),
}

impl Dims {
    #[inline]
    pub fn len(self) -> usize {
        match self {
            Dims::Vector(n) => n,
            Dims::Matrix(r, c) => r * c,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        match self {
            Dims::Vector(n) => n == 0,
            Dims::Matrix(r, c) => r == 0 || c == 0,
        }
    }

    /// Shape as a list, for error reports.
    pub fn to_vec(self) -> Vec<usize> {
        match self {
            Dims::Vector(n) => vec![n],
            Dims::Matrix(r, c) => vec![r, c],
        }
    }
}

/// A vector or matrix whose elements can be read by position.
pub trait Expr {
    type Elem: Copy;

    fn dims(&self) -> Dims;

    /// Element `k` in logical row-major order, `k < self.dims().len()`.
    fn at_flat(&self, k: usize) -> Self::Elem;
}

/// A one-dimensional expression.
pub trait VectorExpr: Expr {
    #[inline]
    fn size(&self) -> usize {
        self.dims().len()
    }

    fn at(&self, i: usize) -> Self::Elem;

    /// Evaluate into an owned vector.
    fn to_vector(&self) -> Vector<Self::Elem> {
        Vector::from_fn(self.size(), |i| self.at(i))
    }
}

/// A two-dimensional expression.
pub trait MatrixExpr: Expr {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn at(&self, r: usize, c: usize) -> Self::Elem;

    /// Storage order results derived from this expression should use.
    #[inline]
    fn layout(&self) -> Layout {
        Layout::RowMajor
    }

    /// Evaluate into an owned matrix in [`layout`](MatrixExpr::layout) order.
    fn to_matrix(&self) -> Matrix<Self::Elem> {
        Matrix::from_fn_with_layout(self.nrows(), self.ncols(), self.layout(), |r, c| {
            self.at(r, c)
        })
    }
}

#[inline]
pub(crate) fn flat_to_rc(k: usize, ncols: usize) -> (usize, usize) {
    (k / ncols, k % ncols)
}

// ============================================================================
// Accessors
// ============================================================================

#[inline]
pub fn num_rows<E: MatrixExpr + ?Sized>(m: &E) -> usize {
    m.nrows()
}

#[inline]
pub fn num_columns<E: MatrixExpr + ?Sized>(m: &E) -> usize {
    m.ncols()
}

/// Number of elements of a vector expression.
#[inline]
pub fn size<E: VectorExpr + ?Sized>(v: &E) -> usize {
    v.size()
}

/// `true` when any dimension is zero.
#[inline]
pub fn empty<E: Expr + ?Sized>(x: &E) -> bool {
    x.dims().is_empty()
}

/// Tolerance-free equality under the promoted element type.
///
/// Shapes must match exactly; a vector never equals a matrix.
pub fn equals<A, B>(a: &A, b: &B) -> bool
where
    A: Expr + ?Sized,
    B: Expr + ?Sized,
    A::Elem: Promote<B::Elem>,
    B::Elem: Scalar,
{
    let dims = a.dims();
    if dims != b.dims() {
        return false;
    }
    (0..dims.len()).all(|k| {
        a.at_flat(k).promote_lhs() == <A::Elem as Promote<B::Elem>>::promote_rhs(b.at_flat(k))
    })
}

// ============================================================================
// Forwarding through references
// ============================================================================

impl<E: Expr + ?Sized> Expr for &E {
    type Elem = E::Elem;

    #[inline]
    fn dims(&self) -> Dims {
        (**self).dims()
    }

    #[inline]
    fn at_flat(&self, k: usize) -> E::Elem {
        (**self).at_flat(k)
    }
}

impl<E: VectorExpr + ?Sized> VectorExpr for &E {
    #[inline]
    fn at(&self, i: usize) -> E::Elem {
        (**self).at(i)
    }
}

impl<E: MatrixExpr + ?Sized> MatrixExpr for &E {
    #[inline]
    fn nrows(&self) -> usize {
        (**self).nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        (**self).ncols()
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> E::Elem {
        (**self).at(r, c)
    }

    #[inline]
    fn layout(&self) -> Layout {
        (**self).layout()
    }
}

// ============================================================================
// Concrete containers and views
// ============================================================================

macro_rules! impl_vector_expr {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Copy> Expr for $ty {
                type Elem = T;

                #[inline]
                fn dims(&self) -> Dims {
                    Dims::Vector(self.len())
                }

                #[inline]
                fn at_flat(&self, k: usize) -> T {
                    self[k]
                }
            }

            impl<T: Copy> VectorExpr for $ty {
                #[inline]
                fn at(&self, i: usize) -> T {
                    self[i]
                }
            }
        )*
    };
}

macro_rules! impl_matrix_expr {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Copy> Expr for $ty {
                type Elem = T;

                #[inline]
                fn dims(&self) -> Dims {
                    Dims::Matrix(self.nrows(), self.ncols())
                }

                #[inline]
                fn at_flat(&self, k: usize) -> T {
                    let (r, c) = flat_to_rc(k, self.ncols());
                    self[(r, c)]
                }
            }

            impl<T: Copy> MatrixExpr for $ty {
                #[inline]
                fn nrows(&self) -> usize {
                    self.shape().0
                }

                #[inline]
                fn ncols(&self) -> usize {
                    self.shape().1
                }

                #[inline]
                fn at(&self, r: usize, c: usize) -> T {
                    self[(r, c)]
                }

                #[inline]
                fn layout(&self) -> Layout {
                    <$ty>::layout(self)
                }
            }
        )*
    };
}

impl_vector_expr!(Vector<T>, VectorView<'_, T>, VectorViewMut<'_, T>);
impl_matrix_expr!(Matrix<T>, MatrixView<'_, T>, MatrixViewMut<'_, T>);

impl<T: Copy> Expr for [T] {
    type Elem = T;

    #[inline]
    fn dims(&self) -> Dims {
        Dims::Vector(self.len())
    }

    #[inline]
    fn at_flat(&self, k: usize) -> T {
        self[k]
    }
}

impl<T: Copy> VectorExpr for [T] {
    #[inline]
    fn at(&self, i: usize) -> T {
        self[i]
    }
}
