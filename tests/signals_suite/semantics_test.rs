/*!
 * Read Semantics Tests
 * Consuming, peeking and freshness-bounded reads
 */

use messagebus_signals::signals::{CheckMode, ManualClock, SignalError, SignalManager};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn manager_with_clock() -> (SignalManager, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    (SignalManager::new().with_clock(clock.clone()), clock)
}

#[test]
fn test_consume_removes_entry() {
    let signals = SignalManager::new();
    assert!(signals.create_signal("ready").unwrap());

    assert!(signals.check_for_signal("ready", CheckMode::Consume).unwrap());
    assert!(!signals.names().iter().any(|name| name.as_str() == "ready"));
    assert!(!signals.check_for_signal("ready", CheckMode::Consume).unwrap());
}

#[test]
fn test_fresh_read_then_consume() {
    let signals = SignalManager::new();
    signals.create_signal("ready").unwrap();

    assert!(signals.check_for_signal("ready", Duration::from_secs(60)).unwrap());
    assert!(signals.check_for_signal("ready", CheckMode::Consume).unwrap());
    assert!(!signals.check_for_signal("ready", CheckMode::Consume).unwrap());
}

#[test]
fn test_lifetime_sequence() {
    // 0 consumes, negative peeks, positive bounds freshness
    let (signals, clock) = manager_with_clock();
    let check = |secs: f64| {
        signals
            .check_for_signal("test_signal", CheckMode::from_lifetime_secs(secs))
            .unwrap()
    };

    assert!(!check(0.0));
    signals.create_signal("test_signal").unwrap();
    assert!(check(-1.0));
    assert!(check(60.0));
    assert!(check(0.0));
    assert!(!check(0.0));

    signals.create_signal("test_signal").unwrap();
    assert!(check(15.0));
    clock.advance(Duration::from_secs(2));
    assert!(check(15.0));
    assert!(!check(1.0));
    assert!(!check(0.0));
}

#[test]
fn test_peek_is_idempotent() {
    let signals = SignalManager::new();
    signals.create_signal("recording").unwrap();

    for _ in 0..10 {
        assert!(signals.check_for_signal("recording", CheckMode::Peek).unwrap());
    }
    assert_eq!(signals.len(), 1);
    assert!(signals.check_for_signal("recording", CheckMode::Consume).unwrap());
    assert!(!signals.check_for_signal("recording", CheckMode::Consume).unwrap());
}

#[test]
fn test_absent_name_is_false_in_every_mode() {
    let signals = SignalManager::new();
    for mode in [
        CheckMode::Consume,
        CheckMode::Peek,
        CheckMode::Fresh(Duration::from_secs(1)),
        CheckMode::Fresh(Duration::ZERO),
    ] {
        assert!(!signals.check_for_signal("never_created", mode).unwrap());
    }
    assert!(signals.is_empty());
}

#[test]
fn test_expiry_with_real_clock() {
    let signals = SignalManager::new();
    signals.create_signal("short_lived").unwrap();

    thread::sleep(Duration::from_millis(150));

    assert!(signals.check_for_signal("short_lived", Duration::from_secs(5)).unwrap());
    assert!(!signals.check_for_signal("short_lived", Duration::from_millis(100)).unwrap());
    assert!(!signals.is_set("short_lived").unwrap());
}

#[test]
fn test_zero_window_expires_aged_signal() {
    let (signals, clock) = manager_with_clock();
    signals.create_signal("instant").unwrap();

    // Age zero is still within a zero window
    assert!(signals.check_for_signal("instant", Duration::ZERO).unwrap());

    clock.advance(Duration::from_millis(1));
    assert!(!signals.check_for_signal("instant", Duration::ZERO).unwrap());
    assert!(!signals.is_set("instant").unwrap());
}

#[test]
fn test_recreate_refreshes_expired_window() {
    let (signals, clock) = manager_with_clock();
    signals.create_signal("heartbeat").unwrap();
    clock.advance(Duration::from_secs(10));

    signals.create_signal("heartbeat").unwrap();
    assert!(signals.check_for_signal("heartbeat", Duration::from_secs(1)).unwrap());
}

#[test]
fn test_invalid_names() {
    let signals = SignalManager::new();
    for name in ["", "  ", "a/b", "line\nbreak"] {
        assert!(
            matches!(signals.create_signal(name), Err(SignalError::InvalidName { .. })),
            "{:?} should be rejected",
            name
        );
        assert!(signals.check_for_signal(name, CheckMode::Peek).is_err());
    }
    assert!(signals.is_empty());
}

#[test]
fn test_stats_track_reads() {
    let (signals, clock) = manager_with_clock();
    signals.create_signal("a").unwrap();
    signals.create_signal("b").unwrap();
    signals.create_signal("b").unwrap();

    signals.check_for_signal("a", CheckMode::Peek).unwrap();
    signals.check_for_signal("a", Duration::from_secs(5)).unwrap();
    signals.check_for_signal("a", CheckMode::Consume).unwrap();
    clock.advance(Duration::from_secs(10));
    signals.check_for_signal("b", Duration::from_secs(5)).unwrap();

    let stats = signals.stats();
    assert_eq!(stats.signals_created, 2);
    assert_eq!(stats.signals_refreshed, 1);
    assert_eq!(stats.signals_peeked, 1);
    assert_eq!(stats.fresh_hits, 1);
    assert_eq!(stats.signals_consumed, 1);
    assert_eq!(stats.signals_expired, 1);
    assert_eq!(stats.active_signals, 0);
}
