//! Owned dense matrix with a runtime storage order.

use crate::error::{Result, StridedError};
use crate::iter::Lanes;
use crate::view::{diagonal_geometry, MatrixView, MatrixViewMut, VectorView, VectorViewMut};
use num_traits::Zero;
use std::ops::{Index, IndexMut, Range};
use strided_traits::{Layout, Order};

/// Owned, dense matrix stored in row-major or column-major order.
///
/// Equality is logical: two matrices are equal when they have the same shape
/// and the same elements, whatever their storage orders.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
    layout: Layout,
}

impl<T> Matrix<T> {
    /// Wrap `data` laid out in `layout` order as a `rows x cols` matrix.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>, layout: Layout) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(StridedError::ShapeMismatch(
                vec![rows, cols],
                vec![data.len()],
            ));
        }
        Ok(Self {
            data,
            rows,
            cols,
            layout,
        })
    }

    /// Create a row-major matrix with values produced by `f(r, c)`.
    pub fn from_fn(rows: usize, cols: usize, f: impl FnMut(usize, usize) -> T) -> Self {
        Self::from_fn_with_layout(rows, cols, Layout::RowMajor, f)
    }

    /// Create a matrix in `layout` order; `f` is called in memory order.
    pub fn from_fn_with_layout(
        rows: usize,
        cols: usize,
        layout: Layout,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        match layout {
            Layout::RowMajor => {
                for r in 0..rows {
                    for c in 0..cols {
                        data.push(f(r, c));
                    }
                }
            }
            Layout::ColMajor => {
                for c in 0..cols {
                    for r in 0..rows {
                        data.push(f(r, c));
                    }
                }
            }
        }
        Self {
            data,
            rows,
            cols,
            layout,
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn leading_dimension(&self) -> usize {
        self.layout.leading_dimension(self.rows, self.cols)
    }

    #[inline]
    pub fn strides(&self) -> (isize, isize) {
        self.layout.strides(self.rows, self.cols)
    }

    /// Backing storage in layout order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn position(&self, r: usize, c: usize) -> usize {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.layout.offset(self.rows, self.cols, r, c)
    }

    pub fn view(&self) -> MatrixView<'_, T> {
        let (rs, cs) = self.strides();
        MatrixView::new_unchecked(&self.data, self.rows, self.cols, rs, cs)
    }

    pub fn view_mut(&mut self) -> MatrixViewMut<'_, T> {
        let (rs, cs) = self.strides();
        let (rows, cols) = (self.rows, self.cols);
        MatrixViewMut::new_unchecked(&mut self.data, rows, cols, rs, cs)
    }

    /// Transposed view sharing storage.
    pub fn t(&self) -> MatrixView<'_, T> {
        self.view().t()
    }

    pub fn row(&self, i: usize) -> VectorView<'_, T> {
        self.view().row(i)
    }

    pub fn column(&self, j: usize) -> VectorView<'_, T> {
        self.view().column(j)
    }

    pub fn diagonal(&self, k: isize) -> VectorView<'_, T> {
        self.view().diagonal(k)
    }

    pub fn subrange(&self, rows: Range<usize>, cols: Range<usize>) -> Result<MatrixView<'_, T>> {
        self.view().subrange(rows, cols)
    }

    pub fn lanes(&self, order: Order) -> Lanes<'_, T> {
        self.view().lanes(order)
    }

    pub fn row_mut(&mut self, i: usize) -> VectorViewMut<'_, T> {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        let (_, cs) = self.strides();
        let offset = self.layout.offset(self.rows, self.cols, i, 0) as isize;
        let cols = self.cols;
        VectorViewMut::new_unchecked(&mut self.data, cols, cs, offset)
    }

    pub fn column_mut(&mut self, j: usize) -> VectorViewMut<'_, T> {
        assert!(j < self.cols, "column {j} out of range for {} columns", self.cols);
        let (rs, _) = self.strides();
        let offset = self.layout.offset(self.rows, self.cols, 0, j) as isize;
        let rows = self.rows;
        VectorViewMut::new_unchecked(&mut self.data, rows, rs, offset)
    }

    /// Mutable proxy of the diagonal shifted by `k`.
    pub fn diagonal_mut(&mut self, k: isize) -> VectorViewMut<'_, T> {
        let (rs, cs) = self.strides();
        let (len, offset) = diagonal_geometry(self.rows, self.cols, rs, cs, 0, k);
        VectorViewMut::new_unchecked(&mut self.data, len, rs + cs, offset)
    }

    pub fn subrange_mut(
        &mut self,
        rows: Range<usize>,
        cols: Range<usize>,
    ) -> Result<MatrixViewMut<'_, T>> {
        if rows.start > rows.end || rows.end > self.rows || cols.start > cols.end || cols.end > self.cols
        {
            return Err(StridedError::BadArgument(format!(
                "sub-range {rows:?} x {cols:?} outside {}x{} matrix",
                self.rows, self.cols
            )));
        }
        let (rs, cs) = self.strides();
        let offset = rows.start as isize * rs + cols.start as isize * cs;
        MatrixViewMut::new(
            &mut self.data,
            rows.end - rows.start,
            cols.end - cols.start,
            rs,
            cs,
            offset,
        )
    }

    /// Reinterpret the storage as the transpose; no element moves.
    pub fn into_transposed(self) -> Matrix<T> {
        Matrix {
            data: self.data,
            rows: self.cols,
            cols: self.rows,
            layout: self.layout.transposed(),
        }
    }
}

impl<T: Clone> Matrix<T> {
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        Self::from_elem_with_layout(rows, cols, Layout::RowMajor, value)
    }

    pub fn from_elem_with_layout(rows: usize, cols: usize, layout: Layout, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
            layout,
        }
    }

    /// Copy into `layout` order.
    pub fn to_layout(&self, layout: Layout) -> Matrix<T> {
        if layout == self.layout {
            return self.clone();
        }
        Matrix::from_fn_with_layout(self.rows, self.cols, layout, |r, c| {
            self.data[self.layout.offset(self.rows, self.cols, r, c)].clone()
        })
    }
}

impl<T: Clone + Zero> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, T::zero())
    }

    pub fn zeros_with_layout(rows: usize, cols: usize, layout: Layout) -> Self {
        Self::from_elem_with_layout(rows, cols, layout, T::zero())
    }
}

impl<T: Copy> Matrix<T> {
    /// Row-major matrix from nested rows, e.g. `Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])`.
    pub fn from_rows<const C: usize>(rows: &[[T; C]]) -> Self {
        Self::from_fn(rows.len(), C, |r, c| rows[r][c])
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        self.data[self.position(r, c)]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: T) {
        let p = self.position(r, c);
        self.data[p] = value;
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.data[self.position(r, c)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        let p = self.position(r, c);
        &mut self.data[p]
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        if self.layout == other.layout {
            return self.data == other.data;
        }
        (0..self.rows).all(|r| (0..self.cols).all(|c| self[(r, c)] == other[(r, c)]))
    }
}

impl<T: Copy> MatrixView<'_, T> {
    /// Copy the viewed elements into an owned matrix in the view's order.
    pub fn to_matrix(&self) -> Matrix<T> {
        Matrix::from_fn_with_layout(self.nrows(), self.ncols(), self.layout(), |r, c| {
            self.get(r, c)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_layouts_agree() {
        let a = Matrix::from_fn_with_layout(3, 2, Layout::RowMajor, |r, c| (r * 10 + c) as f64);
        let b = Matrix::from_fn_with_layout(3, 2, Layout::ColMajor, |r, c| (r * 10 + c) as f64);
        assert_eq!(a.as_slice(), &[0.0, 1.0, 10.0, 11.0, 20.0, 21.0]);
        assert_eq!(b.as_slice(), &[0.0, 10.0, 20.0, 1.0, 11.0, 21.0]);
        assert_eq!(a, b);
        assert_eq!(a.to_layout(Layout::ColMajor).as_slice(), b.as_slice());
    }

    #[test]
    fn test_into_transposed_is_free() {
        let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]);
        let t = a.clone().into_transposed();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.layout(), Layout::ColMajor);
        assert_eq!(t.as_slice(), a.as_slice());
        assert_eq!(t[(2, 1)], 6);
        assert_eq!(t.t().to_matrix(), a);
    }

    #[test]
    fn test_mutable_proxies() {
        let mut m = Matrix::<f64>::zeros_with_layout(3, 3, Layout::ColMajor);
        m.diagonal_mut(0).fill(1.0);
        m.diagonal_mut(-1).fill(2.0);
        m.row_mut(0).set(2, 9.0);
        m.column_mut(1).set(2, 4.0);
        let expected = Matrix::from_rows(&[[1.0, 0.0, 9.0], [2.0, 1.0, 0.0], [0.0, 4.0, 1.0]]);
        assert_eq!(m, expected);
        assert_eq!(m.diagonal(1).to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_subrange_mut() {
        let mut m = Matrix::from_elem(4, 4, 0i32);
        m.subrange_mut(1..3, 1..3).unwrap().fill(7);
        assert_eq!(m.get(1, 1), 7);
        assert_eq!(m.get(2, 2), 7);
        assert_eq!(m.get(3, 3), 0);
        assert!(m.subrange_mut(3..5, 0..1).is_err());
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Matrix::from_vec(2, 2, vec![1.0; 3], Layout::RowMajor).is_err());
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0], Layout::ColMajor).unwrap();
        assert_eq!(m.get(0, 1), 3.0);
    }
}
