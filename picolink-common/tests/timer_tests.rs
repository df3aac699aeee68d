// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Unit tests for the millisecond timeout helper.

mod mock;

use mock::SimClock;
use picolink_common::{is_due, Tick};

#[test]
fn test_zero_interval_always_fires() {
    let clock = SimClock::starting_at(1234);
    let mut tick = Tick::new(1234);

    assert!(is_due(&clock, &mut tick, 0));
    assert!(is_due(&clock, &mut tick, 0));
    assert_eq!(tick.ms(), 1234);

    clock.advance(7);
    assert!(is_due(&clock, &mut tick, 0));
    assert_eq!(tick.ms(), 1241);
}

#[test]
fn test_fires_once_per_interval() {
    let clock = SimClock::starting_at(0);
    let mut tick = Tick::new(0);

    clock.set(499);
    assert!(!is_due(&clock, &mut tick, 500));
    clock.set(500);
    assert!(is_due(&clock, &mut tick, 500));
    assert_eq!(tick.ms(), 500);

    clock.set(501);
    assert!(!is_due(&clock, &mut tick, 500));
    clock.set(999);
    assert!(!is_due(&clock, &mut tick, 500));
    clock.set(1000);
    assert!(is_due(&clock, &mut tick, 500));
}

#[test]
fn test_not_due_leaves_tick_unchanged() {
    let mut tick = Tick::new(100);

    assert!(!tick.fire_at(150, 100));
    assert_eq!(tick.ms(), 100);
}

#[test]
fn test_late_check_resyncs_to_now() {
    let mut tick = Tick::new(0);

    assert!(tick.fire_at(1730, 500));
    assert_eq!(tick.ms(), 1730);
    assert!(!tick.fire_at(2000, 500));
    assert!(tick.fire_at(2230, 500));
}

#[test]
fn test_wraparound_elapsed() {
    let mut tick = Tick::new(u32::MAX - 99);

    // 100 ms to reach zero, then 399 more
    assert_eq!(tick.elapsed(399), 499);
    assert!(!tick.fire_at(399, 500));
    assert!(tick.fire_at(400, 500));
    assert_eq!(tick.ms(), 400);
}

#[test]
fn test_matches_modular_arithmetic() {
    let samples = [
        0u32,
        1,
        99,
        500,
        3000,
        0x7FFF_FFFF,
        0x8000_0000,
        u32::MAX - 3000,
        u32::MAX - 1,
        u32::MAX,
    ];
    let intervals = [1u32, 100, 500, 3000, u32::MAX];

    for &start in &samples {
        for &now in &samples {
            for &interval in &intervals {
                let elapsed = ((now as u64 + (1u64 << 32) - start as u64) % (1u64 << 32)) as u32;
                let expected = elapsed >= interval;

                let mut tick = Tick::new(start);
                assert_eq!(
                    tick.fire_at(now, interval),
                    expected,
                    "tick={start} now={now} interval={interval}"
                );
                assert_eq!(tick.ms(), if expected { now } else { start });
            }
        }
    }
}
