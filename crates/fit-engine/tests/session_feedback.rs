//! Feedback-loop behavior of `FitSession`: repeated mutation signals must
//! collapse into a single real pass until the target's size changes.

use crossbeam_channel::unbounded;
use fit_geom::{Rect, Size};
use fit_engine::{
    AnchorBox, FakeLayoutAdapter, FakeOp, FitOptions, FitSession, SessionOutcome,
    counters_snapshot,
};

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fixture() -> FakeLayoutAdapter {
    FakeLayoutAdapter::new(
        Size::new(200.0, 80.0),
        AnchorBox {
            rect: Rect::new(20.0, 20.0, 100.0, 30.0),
            inner: Size::new(100.0, 30.0),
        },
        Rect::new(0.0, 0.0, 800.0, 600.0),
    )
}

fn write_ops(ops: &[FakeOp]) -> usize {
    ops.iter()
        .filter(|op| !matches!(op, FakeOp::Normalize))
        .count()
}

#[test]
fn second_notification_with_unchanged_size_is_a_no_op() {
    init_logging();
    let mut session = FitSession::new(fixture(), FitOptions::default());

    let first = session.notify().unwrap();
    assert!(matches!(first, SessionOutcome::Ran(_)));
    let ops_after_first = session.adapter().operations().len();
    assert_eq!(write_ops(session.adapter().operations()), 2);

    let second = session.notify().unwrap();
    assert_eq!(second, SessionOutcome::Unchanged);
    assert_eq!(session.adapter().operations().len(), ops_after_first);
}

#[test]
fn queued_signals_collapse_into_one_pass_per_size_change() {
    init_logging();
    let (tx, rx) = unbounded();
    let mut session = FitSession::new(fixture(), FitOptions::default()).with_signals(rx);

    // A burst of notifications — including the ones our own style writes
    // would generate — runs exactly one real pass.
    for _ in 0..5 {
        tx.send(()).unwrap();
    }
    assert_eq!(session.pump().unwrap(), 1);
    let ops_after_burst = session.adapter().operations().len();

    // Nothing pending: pump is a no-op.
    assert_eq!(session.pump().unwrap(), 0);
    assert_eq!(session.adapter().operations().len(), ops_after_burst);

    // A genuine size change makes the next signal trigger one more pass.
    session
        .adapter_mut()
        .set_natural_size(Size::new(200.0, 120.0));
    tx.send(()).unwrap();
    tx.send(()).unwrap();
    assert_eq!(session.pump().unwrap(), 1);
    assert!(session.adapter().operations().len() > ops_after_burst);
}

#[test]
fn pump_without_signal_channel_does_nothing() {
    let mut session = FitSession::new(fixture(), FitOptions::default());
    assert_eq!(session.pump().unwrap(), 0);
    assert!(session.adapter().operations().is_empty());
}

#[test]
fn normalize_runs_once_per_real_pass() {
    let mut session = FitSession::new(fixture(), FitOptions::default());
    session.notify().unwrap();
    session.notify().unwrap();
    let normalizes = session
        .adapter()
        .operations()
        .iter()
        .filter(|op| matches!(op, FakeOp::Normalize))
        .count();
    assert_eq!(normalizes, 1);
}

#[test]
fn counters_reflect_activity() {
    let mut session = FitSession::new(fixture(), FitOptions::default());
    session.notify().unwrap();
    session.notify().unwrap();
    let snapshot = counters_snapshot();
    assert!(snapshot.passes >= 1);
    assert!(snapshot.skipped >= 1);
}
