//! Element type promotion for mixed-type operations.
//!
//! The promoted type of two operands is the wider of the two in precision,
//! and complex if either operand is complex:
//!
//! | lhs \ rhs | f32 | f64 | C32 | C64 |
//! |-----------|-----|-----|-----|-----|
//! | f32       | f32 | f64 | C32 | C64 |
//! | f64       | f64 | f64 | C64 | C64 |
//! | C32       | C32 | C64 | C32 | C64 |
//! | C64       | C64 | C64 | C64 | C64 |

use crate::scalar::Scalar;
use num_complex::{Complex32, Complex64};

/// Lossless widening conversion into a promoted type.
pub trait Widen<T> {
    fn widen(self) -> T;
}

macro_rules! impl_widen {
    ($from:ty => $to:ty, |$x:ident| $body:expr) => {
        impl Widen<$to> for $from {
            #[inline(always)]
            fn widen(self) -> $to {
                let $x = self;
                $body
            }
        }
    };
}

impl_widen!(f32 => f32, |x| x);
impl_widen!(f32 => f64, |x| x as f64);
impl_widen!(f32 => Complex32, |x| Complex32::new(x, 0.0));
impl_widen!(f32 => Complex64, |x| Complex64::new(x as f64, 0.0));
impl_widen!(f64 => f64, |x| x);
impl_widen!(f64 => Complex64, |x| Complex64::new(x, 0.0));
impl_widen!(Complex32 => Complex32, |x| x);
impl_widen!(Complex32 => Complex64, |x| Complex64::new(x.re as f64, x.im as f64));
impl_widen!(Complex64 => Complex64, |x| x);

/// Promotion of `Self` with `Rhs`.
pub trait Promote<Rhs: Scalar>: Scalar {
    type Output: Scalar;

    fn promote_lhs(self) -> <Self as Promote<Rhs>>::Output;
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

macro_rules! impl_promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline(always)]
                fn promote_lhs(self) -> $out {
                    Widen::<$out>::widen(self)
                }

                #[inline(always)]
                fn promote_rhs(rhs: $rhs) -> $out {
                    Widen::<$out>::widen(rhs)
                }
            }
        )*
    };
}

impl_promote! {
    f32, f32 => f32;
    f32, f64 => f64;
    f32, Complex32 => Complex32;
    f32, Complex64 => Complex64;
    f64, f32 => f64;
    f64, f64 => f64;
    f64, Complex32 => Complex64;
    f64, Complex64 => Complex64;
    Complex32, f32 => Complex32;
    Complex32, f64 => Complex64;
    Complex32, Complex32 => Complex32;
    Complex32, Complex64 => Complex64;
    Complex64, f32 => Complex64;
    Complex64, f64 => Complex64;
    Complex64, Complex32 => Complex64;
    Complex64, Complex64 => Complex64;
}

/// Shorthand for the promoted type of `A` and `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;
