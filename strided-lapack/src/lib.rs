//! LU-based solvers for strided matrices.
//!
//! Operands are materialised into column-major buffers ([`ColMajor`]) and
//! handed to the active [`LapackBackend`]: the kernels in [`kernel`] by
//! default, or the system LAPACK with the `lapack` feature. Results come back
//! in the layout of the input.
//!
//! Status-returning entry points ([`lu_solve`], [`lu_solve_inplace`],
//! [`inv_inplace`]) report a zero pivot as a value. Value-returning ones
//! either fail with [`StridedError::Singular`](strided_view::StridedError)
//! ([`mldivide`], [`Lu::solve`]) or return an `+∞` filled matrix ([`inv`]).
//! Ill-conditioning is never an error; it is logged with `log::warn!` on the
//! `strided_lapack` target.
//!
//! # Example
//!
//! ```
//! use strided_lapack::{illcond, inv, mldivide};
//! use strided_view::{Matrix, Vector};
//!
//! let a = Matrix::from_rows(&[[3.0f64, 1.0], [1.0, 2.0]]);
//! let x = mldivide(&a, &Vector::from_vec(vec![9.0, 8.0])).unwrap();
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! assert!(!illcond(&a).unwrap());
//! assert!((inv(&a).unwrap().get(0, 0) - 0.4).abs() < 1e-12);
//! ```

pub mod adapter;
pub mod backend;
pub mod condition;
pub mod inverse;
pub mod kernel;
pub mod lu;
pub mod power;
pub mod solve;
pub mod svd;

pub use adapter::{ColMajor, LuFactors, LuStatus, MIN_ARRAY_SIZE};
#[cfg(feature = "lapack")]
pub use backend::SystemBackend;
pub use backend::{ActiveBackend, LapackBackend, LapackScalar, NativeBackend};
pub use condition::{illcond, rcond};
pub use inverse::{inv, inv_checked, inv_inplace, InvOutcome};
pub use kernel::Transpose;
pub use lu::{lu, Lu};
pub use power::{pow, powf};
pub use solve::{lu_solve, lu_solve_inplace, mldivide, SolveTarget};
pub use svd::{rank, rank_default, svd_values};
