/*!
 * Blocking Wait Tests
 * Responsiveness and timeout bounds of the wait coordinator
 */

use messagebus_signals::core::sync::{StrategyType, SyncConfig};
use messagebus_signals::signals::{CheckMode, SignalConfig, SignalManager};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_wait_for_create_responds_before_timeout() {
    let signals = SignalManager::new();
    let creator = signals.clone();

    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(500));
        creator.create_signal("test_signal").unwrap();
    });

    let start = Instant::now();
    assert!(signals
        .coordinator()
        .wait_for_signal_create("test_signal", Duration::from_secs(5))
        .unwrap());
    let elapsed = start.elapsed();
    handle.join().unwrap();

    assert!(elapsed >= Duration::from_millis(450));
    assert!(elapsed < Duration::from_secs(2), "woke after {:?}", elapsed);

    // The waiter only observed; the signal is still there to consume
    assert!(signals.check_for_signal("test_signal", CheckMode::Consume).unwrap());
}

#[test]
fn test_wait_for_create_timeout_bounds() {
    let signals = SignalManager::new();
    let start = Instant::now();

    assert!(!signals
        .coordinator()
        .wait_for_signal_create("test_signal", Duration::from_millis(300))
        .unwrap());

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(300));
    assert!(elapsed < Duration::from_millis(400), "overshot: {:?}", elapsed);
}

#[test]
fn test_polling_strategy_detects_create() {
    let config = SignalConfig::default()
        .with_sync(SyncConfig::polling(Duration::from_millis(20)));
    let signals = SignalManager::with_config(config);
    assert_eq!(signals.config().sync.select_strategy(), StrategyType::Poll);
    let creator = signals.clone();

    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(100));
        creator.create_signal("polled").unwrap();
    });

    let start = Instant::now();
    assert!(signals
        .coordinator()
        .wait_for_signal_create("polled", Duration::from_secs(3))
        .unwrap());
    assert!(start.elapsed() < Duration::from_secs(1));
    handle.join().unwrap();
}

#[test]
fn test_polling_strategy_sees_create_then_consume() {
    // Poll interval far longer than the create/consume gap
    let config = SignalConfig::default()
        .with_sync(SyncConfig::polling(Duration::from_millis(200)));
    let signals = SignalManager::with_config(config);
    let other = signals.clone();

    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        other.create_signal("blink").unwrap();
        assert!(other.check_for_signal("blink", CheckMode::Consume).unwrap());
    });

    assert!(signals
        .coordinator()
        .wait_for_signal_create("blink", Duration::from_secs(2))
        .unwrap());
    handle.join().unwrap();
    assert!(!signals.is_set("blink").unwrap());
}

#[test]
fn test_wait_for_clear_sequence() {
    let signals = SignalManager::new();
    let coordinator = signals.coordinator();

    // Never set: nothing to observe
    assert!(!coordinator
        .wait_for_signal_clear("test_signal", Duration::from_millis(200))
        .unwrap());

    // Set but nobody clears it: still set at the deadline
    signals.create_signal("test_signal").unwrap();
    assert!(!coordinator
        .wait_for_signal_clear("test_signal", Duration::from_millis(200))
        .unwrap());
    assert!(signals.is_set("test_signal").unwrap());

    // Another thread consumes it
    let consumer = signals.clone();
    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(300));
        consumer
            .check_for_signal("test_signal", CheckMode::Consume)
            .unwrap()
    });

    let start = Instant::now();
    assert!(coordinator
        .wait_for_signal_clear("test_signal", Duration::from_secs(5))
        .unwrap());
    assert!(start.elapsed() < Duration::from_secs(2));
    assert!(handle.join().unwrap());
    assert!(!signals.check_for_signal("test_signal", CheckMode::Consume).unwrap());
}

#[test]
fn test_wait_for_clear_observes_lazy_expiry() {
    let signals = SignalManager::new();
    signals.create_signal("stale").unwrap();
    let checker = signals.clone();

    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(150));
        checker.check_for_signal("stale", Duration::from_millis(50)).unwrap()
    });

    assert!(signals
        .coordinator()
        .wait_for_signal_clear("stale", Duration::from_secs(3))
        .unwrap());
    assert!(!handle.join().unwrap());
}

#[test]
fn test_wait_for_clear_counts_create_then_consume() {
    let signals = SignalManager::new();
    let other = signals.clone();

    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        other.create_signal("pulse").unwrap();
        other.check_for_signal("pulse", CheckMode::Consume).unwrap()
    });

    assert!(signals
        .coordinator()
        .wait_for_signal_clear("pulse", Duration::from_secs(2))
        .unwrap());
    assert!(handle.join().unwrap());
}
