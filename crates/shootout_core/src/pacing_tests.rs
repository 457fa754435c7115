use super::*;
use crate::error::ConfigIssue;
use std::time::Instant;

fn assert_close(actual: Duration, expected_secs: f64) {
    assert!(
        (actual.as_secs_f64() - expected_secs).abs() < 1e-6,
        "expected {expected_secs}s, got {actual:?}"
    );
}

#[test]
fn speed_must_be_positive_and_finite() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = validate_speed(bad).unwrap_err();
        assert!(matches!(err.issue(), ConfigIssue::Speed(_)));
        assert!(Pacer::new(bad).is_err());
    }
    assert!(validate_speed(0.25).is_ok());
}

#[test]
fn delay_scales_inversely_with_speed() {
    assert_close(scaled_delay(Duration::from_millis(1000), 2.0).unwrap(), 0.5);
    assert_close(scaled_delay(Duration::from_millis(600), 0.5).unwrap(), 1.2);
    assert_close(Pacer::new(4.0).unwrap().delay_for(Beat::Kick), 0.25);
    assert_close(Pacer::new(1.0).unwrap().delay_for(Beat::StepUp), 0.6);
}

#[test]
fn absurdly_slow_speed_saturates() {
    let delay = scaled_delay(Duration::from_secs(1), 1e-300).unwrap();
    assert_eq!(delay, Duration::MAX);
}

#[test]
fn free_wait_rejects_bad_speed() {
    assert!(wait(Duration::from_millis(10), 0.0).is_err());
    assert!(wait(Duration::ZERO, 1.0).is_ok());
}

#[test]
fn instant_pacer_never_sleeps() {
    let pacer = Pacer::instant();
    assert_eq!(pacer.delay_for(Beat::SuddenDeathDecided), Duration::ZERO);
    let start = Instant::now();
    pacer.wait(Beat::SuddenDeathDecided);
    assert!(start.elapsed() < Duration::from_millis(100));
}

#[test]
fn skip_handle_fast_forwards_every_clone() {
    // a speed this slow would sleep for minutes
    let pacer = Pacer::new(0.001).unwrap();
    let clone = pacer.clone();
    let handle = pacer.skip_handle();
    assert!(!handle.is_skipped());

    handle.skip();
    assert!(pacer.is_skipped());
    assert!(clone.is_skipped());

    let start = Instant::now();
    clone.wait(Beat::Kick);
    assert!(start.elapsed() < Duration::from_millis(100));
}
