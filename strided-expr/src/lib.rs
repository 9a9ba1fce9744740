//! Lazy vector and matrix expressions.
//!
//! Containers from `strided-view`, storage-free generators such as [`eye`]
//! and every node built on top of them implement [`Expr`]. Elementwise
//! functions return nodes that read their operands on demand, so
//! `sqrt(abs(&x))` makes one pass over `x` when it is finally assigned or
//! reduced. Constructors, reductions and the dense product materialise
//! their result.
//!
//! # Example
//!
//! ```
//! use strided_expr::{abs, sqrt, sum, Assign};
//! use strided_view::Vector;
//!
//! let x = Vector::from_vec(vec![-4.0, 9.0, -16.0]);
//! let mut y = Vector::<f64>::zeros(0);
//! y.assign(sqrt(abs(&x))).unwrap();
//! assert_eq!(y.as_slice(), &[2.0, 3.0, 4.0]);
//! assert_eq!(sum(&y), 9.0);
//! ```

pub mod assign;
pub mod construct;
pub mod elementwise;
pub mod expr;
pub mod functor;
pub mod generator;
pub mod node;
pub mod product;
pub mod reduce;

pub use assign::Assign;
pub use construct::{
    cat_columns, cat_rows, hilb, linspace, logspace, rep, rep_vector, reshape, rot90,
    rot90_vector, tril, triu,
};
pub use elementwise::{
    abs, add, conj, div_elem, hold, hold_with, imag, is_finite, log, log10, log2, map,
    matrix_diagonal, mul_elem, pow2, real, round, scalar_add, scalar_div, scalar_mul, scalar_sub,
    sign, sign3, sqr, sqrt, sub, tanh, trans,
};
pub use expr::{empty, equals, num_columns, num_rows, size, Dims, Expr, MatrixExpr, VectorExpr};
pub use functor::{BinaryFn, Func, Func2, UnaryFn};
pub use generator::{
    colon, eye, eye_rect, scalar_matrix, scalar_vector, seq, seq_range, seq_slice, seq_stride,
    zero_matrix, zero_vector, IdentityMatrix, ScalarMatrix, ScalarVector, SeqVector,
};
pub use node::{Map, MatrixDiagonal, ScalarLeft, Trans, ZipWith};
pub use product::{prod, prod_vec};
pub use reduce::{
    all, all_nonzero, any, any_nonzero, dot, dot_along, find, find_nonzero, max, max_along, min,
    min_along, norm_1, norm_frobenius, norm_inf, reduce, sum, sum_along, trace, which,
    which_nonzero,
};
