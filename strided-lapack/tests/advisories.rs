//! Warnings emitted on the `strided_lapack` log target.

use std::cell::RefCell;

use log::{Level, LevelFilter, Log, Metadata, Record};
use strided_expr::hilb;
use strided_lapack::*;
use strided_view::{Matrix, Vector};

/// Keeps records per thread so parallel tests see only their own.
struct Capture;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String, String)>> = RefCell::new(Vec::new());
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| {
            r.borrow_mut().push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ))
        });
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;

fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String, String)>) {
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(LevelFilter::Trace);
    RECORDS.with(|r| r.borrow_mut().clear());
    let out = f();
    (out, RECORDS.with(|r| r.borrow_mut().drain(..).collect()))
}

fn warnings(records: &[(Level, String, String)]) -> Vec<&str> {
    records
        .iter()
        .filter(|(level, target, _)| *level == Level::Warn && target == "strided_lapack")
        .map(|(_, _, msg)| msg.as_str())
        .collect()
}

#[test]
fn singular_inverse_warns() {
    let s = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]);
    let (x, records) = capture(|| inv(&s).unwrap());
    assert!(x.as_slice().iter().all(|v: &f64| v.is_infinite()));
    let warned = warnings(&records);
    assert_eq!(warned.len(), 1);
    assert!(warned[0].contains("singular"));
}

#[test]
fn ill_conditioned_inverse_warns() {
    let h = hilb::<f64>(16);
    let ((_, outcome), records) = capture(|| inv_checked(&h).unwrap());
    assert_eq!(outcome, InvOutcome::IllConditioned);
    let warned = warnings(&records);
    assert_eq!(warned.len(), 1);
    assert!(warned[0].contains("ill-conditioned"));
}

#[test]
fn ill_conditioned_solve_warns() {
    let h = hilb::<f64>(16);
    let b = Vector::from_fn(16, |_| 1.0);
    let (x, records) = capture(|| mldivide(&h, &b).unwrap());
    assert_eq!(x.len(), 16);
    let warned = warnings(&records);
    assert_eq!(warned.len(), 1);
    assert!(warned[0].starts_with("mldivide"));
}

#[test]
fn well_conditioned_is_quiet() {
    let a = Matrix::from_rows(&[[4.0, 1.0], [1.0, 3.0]]);
    let (_, records) = capture(|| {
        inv(&a).unwrap();
        mldivide(&a, &Vector::from_vec(vec![1.0, 2.0])).unwrap()
    });
    assert!(warnings(&records).is_empty());
}

#[cfg(feature = "debug-trace")]
#[test]
fn trace_lines_carry_prefix() {
    let a = Matrix::from_rows(&[[4.0, 1.0], [1.0, 3.0]]);
    let (_, records) = capture(|| inv(&a).unwrap());
    assert!(records
        .iter()
        .any(|(level, _, msg)| *level == Level::Debug && msg.starts_with("[Debug>> inv:")));
}
