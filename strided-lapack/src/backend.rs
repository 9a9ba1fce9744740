//! Backend abstraction for the LU kernels.
//!
//! This module defines the [`LapackBackend`] trait, one marker struct per
//! backend, and the [`ActiveBackend`] type alias that serves as the single
//! point of backend selection based on Cargo features. Element types reach
//! their backend through [`LapackScalar::Backend`].

use crate::kernel::{self, Transpose};
use num_complex::{Complex32, Complex64};
use strided_traits::Scalar;

/// The three LAPACK routines the solver core is built from.
///
/// All buffers are column-major, pivots are 1-based and the return values
/// are LAPACK `info` codes.
pub trait LapackBackend<T: Scalar> {
    /// Human-readable backend name for diagnostics.
    const NAME: &'static str;

    /// `?getrf` on a square `n x n` matrix.
    fn getrf(n: usize, a: &mut [T], lda: usize, ipiv: &mut [i32]) -> i32;

    /// `?getrs` with the factors from [`getrf`](LapackBackend::getrf).
    #[allow(clippy::too_many_arguments)]
    fn getrs(
        trans: Transpose,
        n: usize,
        nrhs: usize,
        a: &[T],
        lda: usize,
        ipiv: &[i32],
        b: &mut [T],
        ldb: usize,
    ) -> i32;

    /// `?gecon` in the 1-norm: returns `(rcond, info)`.
    fn gecon(n: usize, a: &[T], lda: usize, anorm: T::Real) -> (T::Real, i32);
}

// ---------------------------------------------------------------------------
// Marker structs
// ---------------------------------------------------------------------------

/// Kernels implemented in this crate, available for every [`Scalar`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

impl<T: Scalar> LapackBackend<T> for NativeBackend {
    const NAME: &'static str = "native";

    fn getrf(n: usize, a: &mut [T], lda: usize, ipiv: &mut [i32]) -> i32 {
        kernel::getrf(n, a, lda, ipiv)
    }

    fn getrs(
        trans: Transpose,
        n: usize,
        nrhs: usize,
        a: &[T],
        lda: usize,
        ipiv: &[i32],
        b: &mut [T],
        ldb: usize,
    ) -> i32 {
        kernel::getrs(trans, n, nrhs, a, lda, ipiv, b, ldb)
    }

    fn gecon(n: usize, a: &[T], lda: usize, anorm: T::Real) -> (T::Real, i32) {
        kernel::gecon(n, a, lda, anorm)
    }
}

/// The system LAPACK, reached through the `lapack` crate.
#[cfg(feature = "lapack")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBackend;

#[cfg(feature = "lapack")]
macro_rules! impl_system_backend {
    ($t:ty, $real:ty, $getrf:ident, $getrs:ident, $gecon:ident, |$n:ident| $work:expr, $rwork:expr) => {
        impl LapackBackend<$t> for SystemBackend {
            const NAME: &'static str = "system";

            fn getrf(n: usize, a: &mut [$t], lda: usize, ipiv: &mut [i32]) -> i32 {
                let mut info = 0;
                unsafe {
                    lapack::$getrf(n as i32, n as i32, a, lda as i32, ipiv, &mut info);
                }
                info
            }

            fn getrs(
                trans: Transpose,
                n: usize,
                nrhs: usize,
                a: &[$t],
                lda: usize,
                ipiv: &[i32],
                b: &mut [$t],
                ldb: usize,
            ) -> i32 {
                let mut info = 0;
                unsafe {
                    lapack::$getrs(
                        trans.code(),
                        n as i32,
                        nrhs as i32,
                        a,
                        lda as i32,
                        ipiv,
                        b,
                        ldb as i32,
                        &mut info,
                    );
                }
                info
            }

            fn gecon(n: usize, a: &[$t], lda: usize, anorm: $real) -> ($real, i32) {
                let $n = n.max(1);
                let mut work = $work;
                let mut aux = $rwork;
                let mut rcond: $real = 0.0;
                let mut info = 0;
                unsafe {
                    lapack::$gecon(
                        b'1',
                        n as i32,
                        a,
                        lda as i32,
                        anorm,
                        &mut rcond,
                        &mut work,
                        &mut aux,
                        &mut info,
                    );
                }
                (rcond, info)
            }
        }
    };
}

#[cfg(feature = "lapack")]
impl_system_backend!(f32, f32, sgetrf, sgetrs, sgecon, |n| vec![0.0f32; 4 * n], vec![0i32; n]);
#[cfg(feature = "lapack")]
impl_system_backend!(f64, f64, dgetrf, dgetrs, dgecon, |n| vec![0.0f64; 4 * n], vec![0i32; n]);
#[cfg(feature = "lapack")]
impl_system_backend!(
    Complex32,
    f32,
    cgetrf,
    cgetrs,
    cgecon,
    |n| vec![Complex32::new(0.0, 0.0); 2 * n],
    vec![0.0f32; 2 * n]
);
#[cfg(feature = "lapack")]
impl_system_backend!(
    Complex64,
    f64,
    zgetrf,
    zgetrs,
    zgecon,
    |n| vec![Complex64::new(0.0, 0.0); 2 * n],
    vec![0.0f64; 2 * n]
);

// ---------------------------------------------------------------------------
// ActiveBackend type alias -- the SINGLE point of backend selection
// ---------------------------------------------------------------------------

/// The active LU backend, selected by Cargo features.
///
/// - `lapack` -> [`SystemBackend`]
/// - no backend feature -> [`NativeBackend`]
#[cfg(feature = "lapack")]
pub type ActiveBackend = SystemBackend;

#[cfg(not(feature = "lapack"))]
pub type ActiveBackend = NativeBackend;

/// Element types the solver core accepts.
pub trait LapackScalar: Scalar {
    type Backend: LapackBackend<Self>;
}

macro_rules! impl_lapack_scalar {
    ($($t:ty),*) => {
        $(
            impl LapackScalar for $t {
                type Backend = ActiveBackend;
            }
        )*
    };
}

impl_lapack_scalar!(f32, f64, Complex32, Complex64);

/// LAPACK routine name for element type `T`, e.g. `dgetrf`.
pub(crate) fn routine_name<T: Scalar>(stem: Routine) -> &'static str {
    use strided_traits::ElementKind::*;
    match (T::KIND, stem) {
        (Single, Routine::Getrf) => "sgetrf",
        (Single, Routine::Getrs) => "sgetrs",
        (Single, Routine::Gecon) => "sgecon",
        (Double, Routine::Getrf) => "dgetrf",
        (Double, Routine::Getrs) => "dgetrs",
        (Double, Routine::Gecon) => "dgecon",
        (ComplexSingle, Routine::Getrf) => "cgetrf",
        (ComplexSingle, Routine::Getrs) => "cgetrs",
        (ComplexSingle, Routine::Gecon) => "cgecon",
        (ComplexDouble, Routine::Getrf) => "zgetrf",
        (ComplexDouble, Routine::Getrs) => "zgetrs",
        (ComplexDouble, Routine::Gecon) => "zgecon",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Routine {
    Getrf,
    Getrs,
    Gecon,
}
