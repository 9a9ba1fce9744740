//! Materialising expressions into containers and proxies.
//!
//! Owned containers are resized to the source shape. Views keep their shape
//! and require the source to match it. Because the target is borrowed
//! mutably, a source can never alias it.

use crate::expr::{MatrixExpr, VectorExpr};
use strided_view::{Matrix, MatrixViewMut, Result, StridedError, Vector, VectorViewMut};

/// Overwrite `self` with the elements of `src`.
pub trait Assign<Src> {
    fn assign(&mut self, src: Src) -> Result<()>;
}

impl<E: VectorExpr> Assign<E> for Vector<E::Elem> {
    fn assign(&mut self, src: E) -> Result<()> {
        *self = Vector::from_fn(src.size(), |i| src.at(i));
        Ok(())
    }
}

impl<E: MatrixExpr> Assign<E> for Matrix<E::Elem> {
    /// Resizes to the source shape; the target keeps its own layout and is
    /// filled in that order.
    fn assign(&mut self, src: E) -> Result<()> {
        *self = Matrix::from_fn_with_layout(src.nrows(), src.ncols(), self.layout(), |r, c| {
            src.at(r, c)
        });
        Ok(())
    }
}

impl<E: VectorExpr> Assign<E> for VectorViewMut<'_, E::Elem> {
    fn assign(&mut self, src: E) -> Result<()> {
        if src.size() != self.len() {
            return Err(StridedError::ShapeMismatch(vec![self.len()], vec![src.size()]));
        }
        self.for_each_indexed(|i, x| *x = src.at(i));
        Ok(())
    }
}

impl<E: MatrixExpr> Assign<E> for MatrixViewMut<'_, E::Elem> {
    fn assign(&mut self, src: E) -> Result<()> {
        if (src.nrows(), src.ncols()) != self.shape() {
            let (r, c) = self.shape();
            return Err(StridedError::ShapeMismatch(
                vec![r, c],
                vec![src.nrows(), src.ncols()],
            ));
        }
        self.for_each_indexed(|r, c, x| *x = src.at(r, c));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functor::Sqr;
    use crate::generator::{eye, scalar_vector};
    use crate::node::Map;
    use strided_traits::Layout;

    #[test]
    fn test_container_assign_resizes() {
        let mut v = Vector::<f64>::zeros(1);
        v.assign(scalar_vector(3, 2.0)).unwrap();
        assert_eq!(v.as_slice(), &[2.0, 2.0, 2.0]);

        let mut m = Matrix::<f64>::zeros_with_layout(1, 1, Layout::ColMajor);
        m.assign(eye::<f64>(2)).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.layout(), Layout::ColMajor);
        assert_eq!(m.get(1, 1), 1.0);
    }

    #[test]
    fn test_proxy_assign_writes_parent() {
        let mut m = Matrix::<f64>::zeros(3, 3);
        let src = Vector::from_vec(vec![1.0, 2.0, 3.0]);
        m.diagonal_mut(0).assign(Map::new(&src, Sqr)).unwrap();
        assert_eq!(m.get(2, 2), 9.0);
        assert!(m.diagonal_mut(1).assign(&src).is_err());
        m.subrange_mut(0..2, 1..3).unwrap().assign(eye::<f64>(2)).unwrap();
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(1, 2), 1.0);
        assert_eq!(m.get(0, 2), 0.0);
    }
}
