//! MATLAB-style dense linear algebra over strided vectors and matrices.
//!
//! This crate re-exports the workspace members behind one import:
//!
//! - [`strided_traits`]: element types ([`Scalar`], [`RealScalar`]),
//!   type promotion and the storage order tags.
//! - [`strided_view`]: owned [`Vector`] / [`Matrix`] containers and the
//!   strided views over them.
//! - [`strided_expr`]: lazy elementwise expressions, generators such as
//!   [`eye`] and [`seq`], constructors, reductions and the dense product.
//! - [`strided_lapack`]: LU factorisation, solves, inverse, condition
//!   estimate, matrix power and singular values.
//!
//! # Example
//!
//! ```
//! use strided_linalg::*;
//!
//! let a = rot90(scalar_mul(2.0f64, eye::<f64>(2)), 1);
//! let x = inv(&a).unwrap();
//! assert_eq!(x.get(0, 1), 0.5);
//! assert!(!illcond(&a).unwrap());
//!
//! let v = Vector::from_vec(vec![1.0, 4.0, 9.0]);
//! assert_eq!(sum(sqrt(&v)), 6.0);
//! ```
//!
//! # Features
//!
//! - `lapack`: run the LU kernels on the system LAPACK.
//! - `parallel`: split the dense product over rows with rayon.
//! - `debug-trace`: emit `[Debug>>` lines through `log::debug!`.

pub use strided_expr;
pub use strided_lapack;
pub use strided_traits;
pub use strided_view;

// ============================================================================
// Element types and tags
// ============================================================================
pub use strided_traits::{
    eps, eps_one, realmax, realmin, Axis, ElementKind, Layout, Order, Promote, Promoted,
    RealScalar, Scalar, Truthy, Widen,
};

// ============================================================================
// Containers and views
// ============================================================================
pub use strided_view::{
    Matrix, MatrixView, MatrixViewMut, Result, Slice, StridedError, Vector, VectorView,
    VectorViewMut,
};

// ============================================================================
// Expressions, constructors and reductions
// ============================================================================
pub use strided_expr::{
    abs, add, all, all_nonzero, any, any_nonzero, cat_columns, cat_rows, colon, conj, div_elem,
    dot, dot_along, empty, equals, eye, eye_rect, find, find_nonzero, hilb, hold, hold_with,
    imag, is_finite, linspace, log, log10, log2, logspace, map, matrix_diagonal, max, max_along,
    min, min_along, mul_elem, norm_1, norm_frobenius, norm_inf, num_columns, num_rows, pow2,
    prod, prod_vec, real, reduce, rep, rep_vector, reshape, rot90, rot90_vector, round,
    scalar_add, scalar_div, scalar_matrix, scalar_mul, scalar_sub, scalar_vector, seq,
    seq_range, seq_slice, seq_stride, sign, sign3, size, sqr, sqrt, sub, sum, sum_along, tanh,
    trace, trans, tril, triu, which, which_nonzero, zero_matrix, zero_vector, Assign, Expr,
    MatrixExpr, VectorExpr,
};

// ============================================================================
// Solvers
// ============================================================================
pub use strided_lapack::{
    illcond, inv, inv_checked, inv_inplace, lu, lu_solve, lu_solve_inplace, mldivide, pow, powf,
    rank, rank_default, rcond, svd_values, InvOutcome, Lu, LuStatus, SolveTarget,
};
