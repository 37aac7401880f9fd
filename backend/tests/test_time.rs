//! Tests for ClockTime

use ball_clock_core_rs::{ClockTime, MINUTES_PER_DAY};

#[test]
fn test_clock_time_new() {
    let time = ClockTime::new();
    assert_eq!(time.elapsed_minutes(), 0);
    assert_eq!(time.elapsed_days(), 0);
    assert_eq!(time.minute_within_day(), 0);
}

#[test]
fn test_advance_minute() {
    let mut time = ClockTime::new();

    time.advance_minute();
    assert_eq!(time.elapsed_minutes(), 1);
    assert_eq!(time.elapsed_days(), 0);

    time.advance_minute();
    assert_eq!(time.elapsed_minutes(), 2);
}

#[test]
fn test_day_boundary() {
    let mut time = ClockTime::new();

    // Advance to the last minute of day 0
    for _ in 0..(MINUTES_PER_DAY - 1) {
        time.advance_minute();
    }
    assert_eq!(time.elapsed_minutes(), 1439);
    assert_eq!(time.elapsed_days(), 0);
    assert!(!time.is_day_boundary());

    // Cross into day 1
    time.advance_minute();
    assert_eq!(time.elapsed_minutes(), 1440);
    assert_eq!(time.elapsed_days(), 1);
    assert!(time.is_day_boundary());
}

#[test]
fn test_minute_within_day() {
    let mut time = ClockTime::new();

    for _ in 0..(MINUTES_PER_DAY + 50) {
        time.advance_minute();
    }
    assert_eq!(time.minute_within_day(), 50);
    assert_eq!(time.elapsed_days(), 1);
}

#[test]
fn test_multiple_days() {
    let mut time = ClockTime::new();

    // 15 days is the cycle length for a 30-ball clock
    for _ in 0..(15 * MINUTES_PER_DAY) {
        time.advance_minute();
    }
    assert_eq!(time.elapsed_days(), 15);
    assert!(time.is_day_boundary());
}
