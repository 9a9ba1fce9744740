//! Dense matrix products.
//!
//! Both operands are materialised into contiguous row-major scratch first, so
//! the inner loop runs over unit-stride memory whatever the operand layout.
//! With the `parallel` feature the output rows are split across the rayon
//! pool.

use crate::expr::{MatrixExpr, VectorExpr};
use num_traits::Zero;
use strided_traits::{Layout, Scalar};
use strided_view::{Matrix, Result, StridedError, Vector};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Output rows below which the product stays on the calling thread.
#[cfg(feature = "parallel")]
const MIN_PARALLEL_ROWS: usize = 64;

fn row_major_buffer<E: MatrixExpr>(m: &E) -> Vec<E::Elem> {
    let (rows, cols) = (m.nrows(), m.ncols());
    let mut buf = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            buf.push(m.at(r, c));
        }
    }
    buf
}

/// Fill the row-major `m x n` output from row-major `a` (`m x k`) and `b`.
#[cfg(not(feature = "parallel"))]
fn multiply_rows<T: Scalar>(a: &[T], b: &[T], k: usize, n: usize, out: &mut [T]) {
    for (i, out_row) in out.chunks_mut(n).enumerate() {
        accumulate_row(&a[i * k..(i + 1) * k], b, n, out_row);
    }
}

#[cfg(feature = "parallel")]
fn multiply_rows<T: Scalar>(a: &[T], b: &[T], k: usize, n: usize, out: &mut [T]) {
    let row = |(i, out_row): (usize, &mut [T])| {
        accumulate_row(&a[i * k..(i + 1) * k], b, n, out_row);
    };
    if out.len() / n >= MIN_PARALLEL_ROWS {
        out.par_chunks_mut(n).enumerate().for_each(row);
    } else {
        out.chunks_mut(n).enumerate().for_each(row);
    }
}

/// `out_row += a_row * b` for one output row (i-k-j order).
#[inline]
fn accumulate_row<T: Scalar>(a_row: &[T], b: &[T], n: usize, out_row: &mut [T]) {
    for (l, &a_il) in a_row.iter().enumerate() {
        if a_il.is_zero() {
            continue;
        }
        let b_row = &b[l * n..(l + 1) * n];
        for (o, &b_lj) in out_row.iter_mut().zip(b_row) {
            *o += a_il * b_lj;
        }
    }
}

/// `A * B` for an `m x k` and a `k x n` matrix. The result takes `A`'s layout.
pub fn prod<A, B, T>(a: A, b: B) -> Result<Matrix<T>>
where
    A: MatrixExpr<Elem = T>,
    B: MatrixExpr<Elem = T>,
    T: Scalar,
{
    let (m, k) = (a.nrows(), a.ncols());
    let n = b.ncols();
    if b.nrows() != k {
        return Err(StridedError::ShapeMismatch(vec![m, k], vec![b.nrows(), n]));
    }
    let layout = a.layout();
    let a_buf = row_major_buffer(&a);
    let b_buf = row_major_buffer(&b);
    let mut out = vec![T::zero(); m * n];

    if n > 0 && k > 0 {
        multiply_rows(&a_buf, &b_buf, k, n, &mut out);
    }

    let result = Matrix::from_vec(m, n, out, Layout::RowMajor)?;
    Ok(match layout {
        Layout::RowMajor => result,
        Layout::ColMajor => result.to_layout(Layout::ColMajor),
    })
}

/// `A * x` for an `m x n` matrix and a vector of length `n`.
pub fn prod_vec<A, V, T>(a: A, x: V) -> Result<Vector<T>>
where
    A: MatrixExpr<Elem = T>,
    V: VectorExpr<Elem = T>,
    T: Scalar,
{
    let (m, n) = (a.nrows(), a.ncols());
    if x.size() != n {
        return Err(StridedError::ShapeMismatch(vec![m, n], vec![x.size()]));
    }
    let xs: Vec<T> = (0..n).map(|j| x.at(j)).collect();
    Ok(Vector::from_fn(m, |i| {
        xs.iter()
            .enumerate()
            .fold(T::zero(), |acc, (j, &xj)| acc + a.at(i, j) * xj)
    }))
}
