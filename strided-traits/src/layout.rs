//! Storage order and dimension tags.

/// Storage order of a dense matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    #[default]
    RowMajor,
    ColMajor,
}

impl Layout {
    /// `(row_stride, col_stride)` of a dense `rows x cols` matrix.
    #[inline]
    pub fn strides(self, rows: usize, cols: usize) -> (isize, isize) {
        match self {
            Layout::RowMajor => (cols as isize, 1),
            Layout::ColMajor => (1, rows as isize),
        }
    }

    /// Leading dimension of a dense `rows x cols` matrix in this order.
    #[inline]
    pub fn leading_dimension(self, rows: usize, cols: usize) -> usize {
        match self {
            Layout::RowMajor => cols,
            Layout::ColMajor => rows,
        }
    }

    /// Order of the transposed matrix when the storage is reinterpreted.
    #[inline]
    pub fn transposed(self) -> Layout {
        match self {
            Layout::RowMajor => Layout::ColMajor,
            Layout::ColMajor => Layout::RowMajor,
        }
    }

    /// Linear offset of `(r, c)` in a dense `rows x cols` buffer.
    #[inline]
    pub fn offset(self, rows: usize, cols: usize, r: usize, c: usize) -> usize {
        match self {
            Layout::RowMajor => r * cols + c,
            Layout::ColMajor => c * rows + r,
        }
    }

    /// Guess the order from a pair of strides; unit column stride wins ties.
    pub fn from_strides(row_stride: isize, col_stride: isize) -> Layout {
        if col_stride.unsigned_abs() == 1 || row_stride.unsigned_abs() > col_stride.unsigned_abs()
        {
            Layout::RowMajor
        } else {
            Layout::ColMajor
        }
    }
}

/// Which lanes of a matrix to walk, relative to its storage order.
///
/// `Major` lanes are contiguous in memory (rows of a row-major matrix,
/// columns of a column-major one); `Minor` lanes cut across them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    Major,
    Minor,
}

/// Direction of a reduction over a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Run down the rows: one result per column.
    Rows,
    /// Run across the columns: one result per row.
    Columns,
}
