//! Opt-in diagnostic tracing.
//!
//! With the `debug-trace` feature, [`debug_trace!`](crate::debug_trace)
//! forwards to `log::debug!` with a `[Debug>>` prefix. Without it the macro
//! expands to nothing at runtime but still type-checks its arguments.

#[doc(hidden)]
pub use log as __log;

#[cfg(feature = "debug-trace")]
#[macro_export]
macro_rules! debug_trace {
    ($($arg:tt)+) => {
        $crate::trace::__log::debug!("[Debug>> {}", format_args!($($arg)+))
    };
}

#[cfg(not(feature = "debug-trace"))]
#[macro_export]
macro_rules! debug_trace {
    ($($arg:tt)+) => {
        if false {
            let _ = format_args!($($arg)+);
        }
    };
}
