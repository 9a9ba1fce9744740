//! Dense vectors and matrices with strided views.
//!
//! [`Vector`] and [`Matrix`] own their storage; [`VectorView`],
//! [`MatrixView`] and their mutable counterparts borrow it through an
//! offset and a pair of strides. Rows, columns, sub-ranges and shifted
//! diagonals are all views, so writes through a mutable view land in the
//! parent. The borrow checker rules out two live mutable views of the same
//! parent.
//!
//! # Example
//!
//! ```
//! use strided_view::Matrix;
//!
//! let mut m = Matrix::<f64>::zeros(3, 3);
//! m.diagonal_mut(0).fill(1.0);
//! assert_eq!(m.get(1, 1), 1.0);
//! assert_eq!(m.row(0).to_vec(), vec![1.0, 0.0, 0.0]);
//! ```

pub mod error;
pub mod iter;
pub mod matrix;
pub mod vector;
pub mod view;

pub use error::{Result, StridedError};
pub use iter::{Iter, Lanes};
pub use matrix::Matrix;
pub use vector::Vector;
pub use view::{MatrixView, MatrixViewMut, Slice, VectorView, VectorViewMut};

pub use strided_traits::{Axis, Layout, Order};
