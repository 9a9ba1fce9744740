//! Strided vector and matrix views.
//!
//! A view borrows a flat buffer and addresses it through an
//! `(offset, strides)` description, so sub-ranges, rows, columns, shifted
//! diagonals and transposes all share storage with their parent. Views
//! validate their extent once, at construction; element access is then
//! plain slice indexing.

use crate::error::{Result, StridedError};
use crate::iter::{Iter, Lanes};
use std::ops::{Index, IndexMut, Range};
use strided_traits::{Layout, Order};

// ============================================================================
// Bounds helpers
// ============================================================================

/// Check that every element addressed by `(dims, strides, offset)` lies in a
/// buffer of length `len`.
pub(crate) fn validate_bounds(
    len: usize,
    dims: &[usize],
    strides: &[isize],
    offset: isize,
) -> Result<()> {
    debug_assert_eq!(dims.len(), strides.len());
    if dims.iter().any(|&d| d == 0) {
        return Ok(());
    }
    let mut min_offset = offset;
    let mut max_offset = offset;
    for (&dim, &stride) in dims.iter().zip(strides.iter()) {
        if dim > 1 {
            let end = stride
                .checked_mul(dim as isize - 1)
                .ok_or(StridedError::OffsetOverflow)?;
            if end >= 0 {
                max_offset = max_offset
                    .checked_add(end)
                    .ok_or(StridedError::OffsetOverflow)?;
            } else {
                min_offset = min_offset
                    .checked_add(end)
                    .ok_or(StridedError::OffsetOverflow)?;
            }
        }
    }
    if min_offset < 0 || max_offset < 0 || max_offset as usize >= len {
        return Err(StridedError::OffsetOverflow);
    }
    Ok(())
}

fn check_range(range: &Range<usize>, extent: usize) -> Result<()> {
    if range.start > range.end || range.end > extent {
        return Err(StridedError::BadArgument(format!(
            "range {}..{} outside extent {extent}",
            range.start, range.end
        )));
    }
    Ok(())
}

/// `(length, start offset)` of the `k`-th diagonal of a strided matrix.
pub(crate) fn diagonal_geometry(
    rows: usize,
    cols: usize,
    row_stride: isize,
    col_stride: isize,
    offset: isize,
    k: isize,
) -> (usize, isize) {
    let shift = k.unsigned_abs();
    let len = rows.min(cols).saturating_sub(shift);
    if len == 0 {
        return (0, offset);
    }
    if k >= 0 {
        (len, offset + k * col_stride)
    } else {
        (len, offset + (shift as isize) * row_stride)
    }
}

/// A strided index set: `start, start+stride, ...` with `size` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: usize,
    pub stride: isize,
    pub size: usize,
}

impl Slice {
    pub fn new(start: usize, stride: isize, size: usize) -> Self {
        Self { start, stride, size }
    }

    /// The `i`-th index of the set. Panics if it would be negative.
    #[inline]
    pub fn index(&self, i: usize) -> usize {
        let pos = self.start as isize + i as isize * self.stride;
        assert!(pos >= 0, "slice index {i} maps to negative position {pos}");
        pos as usize
    }
}

impl From<Range<usize>> for Slice {
    fn from(r: Range<usize>) -> Self {
        Slice::new(r.start, 1, r.end.saturating_sub(r.start))
    }
}

// ============================================================================
// VectorView
// ============================================================================

/// Immutable strided view of a vector.
#[derive(Debug)]
pub struct VectorView<'a, T> {
    data: &'a [T],
    len: usize,
    stride: isize,
    offset: isize,
}

impl<T> Clone for VectorView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VectorView<'_, T> {}

impl<'a, T> VectorView<'a, T> {
    pub fn new(data: &'a [T], len: usize, stride: isize, offset: isize) -> Result<Self> {
        validate_bounds(data.len(), &[len], &[stride], offset)?;
        Ok(Self {
            data,
            len,
            stride,
            offset,
        })
    }

    /// View over a whole contiguous slice (an array reference proxy).
    pub fn from_slice(data: &'a [T]) -> Self {
        Self {
            data,
            len: data.len(),
            stride: 1,
            offset: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    pub fn offset(&self) -> isize {
        self.offset
    }

    #[inline]
    fn position(&self, i: usize) -> usize {
        assert!(
            i < self.len,
            "index {i} out of range for vector of length {}",
            self.len
        );
        (self.offset + i as isize * self.stride) as usize
    }

    #[inline]
    pub fn get_ref(&self, i: usize) -> &'a T {
        &self.data[self.position(i)]
    }

    /// Contiguous sub-range `range` of this view.
    pub fn slice(&self, range: Range<usize>) -> Result<VectorView<'a, T>> {
        check_range(&range, self.len)?;
        VectorView::new(
            self.data,
            range.end - range.start,
            self.stride,
            self.offset + range.start as isize * self.stride,
        )
    }

    /// Strided sub-selection `s` of this view.
    pub fn slice_by(&self, s: Slice) -> Result<VectorView<'a, T>> {
        if s.size > 0 {
            let last = s.start as isize + (s.size as isize - 1) * s.stride;
            if s.start >= self.len || last < 0 || last as usize >= self.len {
                return Err(StridedError::BadArgument(format!(
                    "slice {s:?} outside vector of length {}",
                    self.len
                )));
            }
        }
        VectorView::new(
            self.data,
            s.size,
            self.stride * s.stride,
            self.offset + s.start as isize * self.stride,
        )
    }

    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.data, self.offset, self.stride, self.len)
    }
}

impl<'a, T: Copy> VectorView<'a, T> {
    #[inline]
    pub fn get(&self, i: usize) -> T {
        *self.get_ref(i)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().copied().collect()
    }
}

impl<T> Index<usize> for VectorView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[self.position(i)]
    }
}

// ============================================================================
// VectorViewMut
// ============================================================================

/// Mutable strided view of a vector.
#[derive(Debug)]
pub struct VectorViewMut<'a, T> {
    data: &'a mut [T],
    len: usize,
    stride: isize,
    offset: isize,
}

impl<'a, T> VectorViewMut<'a, T> {
    /// Caller guarantees the extent lies inside `data`.
    pub(crate) fn new_unchecked(data: &'a mut [T], len: usize, stride: isize, offset: isize) -> Self {
        debug_assert!(validate_bounds(data.len(), &[len], &[stride], offset).is_ok());
        Self {
            data,
            len,
            stride,
            offset,
        }
    }

    pub fn new(data: &'a mut [T], len: usize, stride: isize, offset: isize) -> Result<Self> {
        validate_bounds(data.len(), &[len], &[stride], offset)?;
        Ok(Self {
            data,
            len,
            stride,
            offset,
        })
    }

    pub fn from_slice(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self {
            data,
            len,
            stride: 1,
            offset: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    fn position(&self, i: usize) -> usize {
        assert!(
            i < self.len,
            "index {i} out of range for vector of length {}",
            self.len
        );
        (self.offset + i as isize * self.stride) as usize
    }

    pub fn as_view(&self) -> VectorView<'_, T> {
        VectorView {
            data: &*self.data,
            len: self.len,
            stride: self.stride,
            offset: self.offset,
        }
    }

    pub fn reborrow(&mut self) -> VectorViewMut<'_, T> {
        VectorViewMut {
            data: &mut *self.data,
            len: self.len,
            stride: self.stride,
            offset: self.offset,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> &mut T {
        let p = self.position(i);
        &mut self.data[p]
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: T) {
        *self.get_mut(i) = value;
    }

    pub fn slice_mut(&mut self, range: Range<usize>) -> Result<VectorViewMut<'_, T>> {
        check_range(&range, self.len)?;
        VectorViewMut::new(
            &mut *self.data,
            range.end - range.start,
            self.stride,
            self.offset + range.start as isize * self.stride,
        )
    }

    /// Visit every element mutably together with its index.
    pub fn for_each_indexed(&mut self, mut f: impl FnMut(usize, &mut T)) {
        for i in 0..self.len {
            let p = (self.offset + i as isize * self.stride) as usize;
            f(i, &mut self.data[p]);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&*self.data, self.offset, self.stride, self.len)
    }
}

impl<T: Copy> VectorViewMut<'_, T> {
    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.data[self.position(i)]
    }

    pub fn fill(&mut self, value: T) {
        self.for_each_indexed(|_, x| *x = value);
    }

    /// Copy `src` element by element. Lengths must match.
    pub fn copy_from_slice(&mut self, src: &[T]) -> Result<()> {
        if src.len() != self.len {
            return Err(StridedError::ShapeMismatch(vec![self.len], vec![src.len()]));
        }
        self.for_each_indexed(|i, x| *x = src[i]);
        Ok(())
    }
}

impl<T> Index<usize> for VectorViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[self.position(i)]
    }
}

impl<T> IndexMut<usize> for VectorViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        self.get_mut(i)
    }
}

// ============================================================================
// MatrixView
// ============================================================================

/// Immutable strided view of a matrix.
#[derive(Debug)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    row_stride: isize,
    col_stride: isize,
    offset: isize,
}

impl<T> Clone for MatrixView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatrixView<'_, T> {}

impl<'a, T> MatrixView<'a, T> {
    /// Caller guarantees the extent lies inside `data`.
    pub(crate) fn new_unchecked(
        data: &'a [T],
        rows: usize,
        cols: usize,
        row_stride: isize,
        col_stride: isize,
    ) -> Self {
        debug_assert!(
            validate_bounds(data.len(), &[rows, cols], &[row_stride, col_stride], 0).is_ok()
        );
        Self {
            data,
            rows,
            cols,
            row_stride,
            col_stride,
            offset: 0,
        }
    }

    pub fn new(
        data: &'a [T],
        rows: usize,
        cols: usize,
        row_stride: isize,
        col_stride: isize,
        offset: isize,
    ) -> Result<Self> {
        validate_bounds(
            data.len(),
            &[rows, cols],
            &[row_stride, col_stride],
            offset,
        )?;
        Ok(Self {
            data,
            rows,
            cols,
            row_stride,
            col_stride,
            offset,
        })
    }

    /// Dense view of `data` interpreted as `rows x cols` in `layout` order.
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize, layout: Layout) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(StridedError::ShapeMismatch(
                vec![rows, cols],
                vec![data.len()],
            ));
        }
        let (rs, cs) = layout.strides(rows, cols);
        Self::new(data, rows, cols, rs, cs, 0)
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
    pub fn strides(&self) -> (isize, isize) {
        (self.row_stride, self.col_stride)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn layout(&self) -> Layout {
        Layout::from_strides(self.row_stride, self.col_stride)
    }

    #[inline]
    fn position(&self, r: usize, c: usize) -> usize {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        (self.offset + r as isize * self.row_stride + c as isize * self.col_stride) as usize
    }

    #[inline]
    pub fn get_ref(&self, r: usize, c: usize) -> &'a T {
        &self.data[self.position(r, c)]
    }

    /// Transposed view sharing storage.
    pub fn t(&self) -> MatrixView<'a, T> {
        MatrixView {
            data: self.data,
            rows: self.cols,
            cols: self.rows,
            row_stride: self.col_stride,
            col_stride: self.row_stride,
            offset: self.offset,
        }
    }

    /// Row `i` as a vector view.
    pub fn row(&self, i: usize) -> VectorView<'a, T> {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        VectorView {
            data: self.data,
            len: self.cols,
            stride: self.col_stride,
            offset: self.offset + i as isize * self.row_stride,
        }
    }

    /// Column `j` as a vector view.
    pub fn column(&self, j: usize) -> VectorView<'a, T> {
        assert!(j < self.cols, "column {j} out of range for {} columns", self.cols);
        VectorView {
            data: self.data,
            len: self.rows,
            stride: self.row_stride,
            offset: self.offset + j as isize * self.col_stride,
        }
    }

    /// Diagonal shifted by `k` (`k > 0` above the main diagonal, `k < 0`
    /// below). Out-of-range shifts give an empty view.
    pub fn diagonal(&self, k: isize) -> VectorView<'a, T> {
        let (len, offset) = diagonal_geometry(
            self.rows,
            self.cols,
            self.row_stride,
            self.col_stride,
            self.offset,
            k,
        );
        VectorView {
            data: self.data,
            len,
            stride: self.row_stride + self.col_stride,
            offset,
        }
    }

    /// Rectangular sub-range sharing storage.
    pub fn subrange(&self, rows: Range<usize>, cols: Range<usize>) -> Result<MatrixView<'a, T>> {
        check_range(&rows, self.rows)?;
        check_range(&cols, self.cols)?;
        MatrixView::new(
            self.data,
            rows.end - rows.start,
            cols.end - cols.start,
            self.row_stride,
            self.col_stride,
            self.offset + rows.start as isize * self.row_stride + cols.start as isize * self.col_stride,
        )
    }

    /// Iterate over whole rows or columns, chosen relative to storage order.
    pub fn lanes(&self, order: Order) -> Lanes<'a, T> {
        let rows_are_major = self.layout() == Layout::RowMajor;
        let by_rows = match order {
            Order::Major => rows_are_major,
            Order::Minor => !rows_are_major,
        };
        Lanes::new(*self, by_rows)
    }
}

impl<T: Copy> MatrixView<'_, T> {
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        self.data[self.position(r, c)]
    }
}

impl<T> Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.data[self.position(r, c)]
    }
}

// ============================================================================
// MatrixViewMut
// ============================================================================

/// Mutable strided view of a matrix.
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    rows: usize,
    cols: usize,
    row_stride: isize,
    col_stride: isize,
    offset: isize,
}

impl<'a, T> MatrixViewMut<'a, T> {
    /// Caller guarantees the extent lies inside `data`.
    pub(crate) fn new_unchecked(
        data: &'a mut [T],
        rows: usize,
        cols: usize,
        row_stride: isize,
        col_stride: isize,
    ) -> Self {
        debug_assert!(
            validate_bounds(data.len(), &[rows, cols], &[row_stride, col_stride], 0).is_ok()
        );
        Self {
            data,
            rows,
            cols,
            row_stride,
            col_stride,
            offset: 0,
        }
    }

    pub fn new(
        data: &'a mut [T],
        rows: usize,
        cols: usize,
        row_stride: isize,
        col_stride: isize,
        offset: isize,
    ) -> Result<Self> {
        validate_bounds(
            data.len(),
            &[rows, cols],
            &[row_stride, col_stride],
            offset,
        )?;
        Ok(Self {
            data,
            rows,
            cols,
            row_stride,
            col_stride,
            offset,
        })
    }

    pub fn from_slice(
        data: &'a mut [T],
        rows: usize,
        cols: usize,
        layout: Layout,
    ) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(StridedError::ShapeMismatch(
                vec![rows, cols],
                vec![data.len()],
            ));
        }
        let (rs, cs) = layout.strides(rows, cols);
        Self::new(data, rows, cols, rs, cs, 0)
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
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn layout(&self) -> Layout {
        Layout::from_strides(self.row_stride, self.col_stride)
    }

    #[inline]
    fn position(&self, r: usize, c: usize) -> usize {
        assert!(
            r < self.rows && c < self.cols,
            "index ({r}, {c}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        (self.offset + r as isize * self.row_stride + c as isize * self.col_stride) as usize
    }

    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &*self.data,
            rows: self.rows,
            cols: self.cols,
            row_stride: self.row_stride,
            col_stride: self.col_stride,
            offset: self.offset,
        }
    }

    pub fn reborrow(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut {
            data: &mut *self.data,
            rows: self.rows,
            cols: self.cols,
            row_stride: self.row_stride,
            col_stride: self.col_stride,
            offset: self.offset,
        }
    }

    /// Consume into a transposed mutable view.
    pub fn into_t(self) -> MatrixViewMut<'a, T> {
        MatrixViewMut {
            data: self.data,
            rows: self.cols,
            cols: self.rows,
            row_stride: self.col_stride,
            col_stride: self.row_stride,
            offset: self.offset,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, r: usize, c: usize) -> &mut T {
        let p = self.position(r, c);
        &mut self.data[p]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: T) {
        *self.get_mut(r, c) = value;
    }

    pub fn row_mut(&mut self, i: usize) -> VectorViewMut<'_, T> {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        VectorViewMut {
            data: &mut *self.data,
            len: self.cols,
            stride: self.col_stride,
            offset: self.offset + i as isize * self.row_stride,
        }
    }

    pub fn column_mut(&mut self, j: usize) -> VectorViewMut<'_, T> {
        assert!(j < self.cols, "column {j} out of range for {} columns", self.cols);
        VectorViewMut {
            data: &mut *self.data,
            len: self.rows,
            stride: self.row_stride,
            offset: self.offset + j as isize * self.col_stride,
        }
    }

    pub fn diagonal_mut(&mut self, k: isize) -> VectorViewMut<'_, T> {
        let (len, offset) = diagonal_geometry(
            self.rows,
            self.cols,
            self.row_stride,
            self.col_stride,
            self.offset,
            k,
        );
        VectorViewMut {
            data: &mut *self.data,
            len,
            stride: self.row_stride + self.col_stride,
            offset,
        }
    }

    pub fn subrange_mut(
        &mut self,
        rows: Range<usize>,
        cols: Range<usize>,
    ) -> Result<MatrixViewMut<'_, T>> {
        check_range(&rows, self.rows)?;
        check_range(&cols, self.cols)?;
        let offset = self.offset
            + rows.start as isize * self.row_stride
            + cols.start as isize * self.col_stride;
        MatrixViewMut::new(
            &mut *self.data,
            rows.end - rows.start,
            cols.end - cols.start,
            self.row_stride,
            self.col_stride,
            offset,
        )
    }

    /// Visit every element mutably in logical row-major order.
    pub fn for_each_indexed(&mut self, mut f: impl FnMut(usize, usize, &mut T)) {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let p = (self.offset + r as isize * self.row_stride + c as isize * self.col_stride)
                    as usize;
                f(r, c, &mut self.data[p]);
            }
        }
    }
}

impl<T: Copy> MatrixViewMut<'_, T> {
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        self.data[self.position(r, c)]
    }

    pub fn fill(&mut self, value: T) {
        self.for_each_indexed(|_, _, x| *x = value);
    }
}

impl<T> Index<(usize, usize)> for MatrixViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.data[self.position(r, c)]
    }
}

impl<T> IndexMut<(usize, usize)> for MatrixViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        self.get_mut(r, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<f64> {
        (0..12).map(|x| x as f64).collect()
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds(12, &[3, 4], &[4, 1], 0).is_ok());
        assert!(validate_bounds(12, &[3, 4], &[4, 1], 1).is_err());
        assert!(validate_bounds(12, &[4], &[-2], 6).is_ok());
        assert!(validate_bounds(12, &[4], &[-2], 5).is_err());
        assert!(validate_bounds(0, &[0, 3], &[3, 1], 0).is_ok());
    }

    #[test]
    fn test_row_column_transpose() {
        let data = sample();
        let m = MatrixView::from_slice(&data, 3, 4, Layout::RowMajor).unwrap();
        assert_eq!(m.get(1, 2), 6.0);
        assert_eq!(m.row(2).to_vec(), vec![8.0, 9.0, 10.0, 11.0]);
        assert_eq!(m.column(1).to_vec(), vec![1.0, 5.0, 9.0]);
        let t = m.t();
        assert_eq!(t.shape(), (4, 3));
        assert_eq!(t[(2, 1)], 6.0);
        assert_eq!(t.layout(), Layout::ColMajor);
    }

    #[test]
    fn test_diagonals() {
        let data = sample();
        let m = MatrixView::from_slice(&data, 3, 4, Layout::RowMajor).unwrap();
        assert_eq!(m.diagonal(0).to_vec(), vec![0.0, 5.0, 10.0]);
        assert_eq!(m.diagonal(1).to_vec(), vec![1.0, 6.0]);
        assert_eq!(m.diagonal(2).to_vec(), vec![2.0]);
        assert_eq!(m.diagonal(-1).to_vec(), vec![4.0, 9.0]);
        assert_eq!(m.diagonal(-2).to_vec(), vec![8.0]);
        assert!(m.diagonal(3).is_empty());
        assert!(m.diagonal(4).is_empty());
        assert!(m.diagonal(-3).is_empty());
    }

    #[test]
    fn test_subrange_and_slices() {
        let data = sample();
        let m = MatrixView::from_slice(&data, 3, 4, Layout::ColMajor).unwrap();
        let s = m.subrange(1..3, 2..4).unwrap();
        assert_eq!(s.shape(), (2, 2));
        assert_eq!(s.get(0, 0), m.get(1, 2));
        assert_eq!(s.get(1, 1), m.get(2, 3));
        assert!(m.subrange(0..4, 0..1).is_err());

        let v = VectorView::from_slice(&data);
        let odd = v.slice_by(Slice::new(11, -2, 6)).unwrap();
        assert_eq!(odd.to_vec(), vec![11.0, 9.0, 7.0, 5.0, 3.0, 1.0]);
        assert!(v.slice_by(Slice::new(1, -2, 2)).is_err());
        assert_eq!(v.slice(3..5).unwrap().to_vec(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_mutable_proxies_write_through() {
        let mut data = vec![0.0f64; 9];
        {
            let mut m = MatrixViewMut::from_slice(&mut data, 3, 3, Layout::RowMajor).unwrap();
            m.diagonal_mut(0).fill(1.0);
            m.row_mut(0).set(2, 7.0);
            m.column_mut(0).set(2, -1.0);
            m.subrange_mut(1..2, 1..3).unwrap().set(0, 1, 5.0);
        }
        assert_eq!(data, vec![1.0, 0.0, 7.0, 0.0, 1.0, 5.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_lanes_follow_layout() {
        let data = sample();
        let m = MatrixView::from_slice(&data, 3, 4, Layout::ColMajor).unwrap();
        let major: Vec<Vec<f64>> = m.lanes(Order::Major).map(|l| l.to_vec()).collect();
        assert_eq!(major.len(), 4);
        assert_eq!(major[0], vec![0.0, 1.0, 2.0]);
        let minor: Vec<Vec<f64>> = m.lanes(Order::Minor).map(|l| l.to_vec()).collect();
        assert_eq!(minor.len(), 3);
        assert_eq!(minor[0], vec![0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics() {
        let data = sample();
        let v = VectorView::from_slice(&data);
        let _ = v.get(12);
    }
}
