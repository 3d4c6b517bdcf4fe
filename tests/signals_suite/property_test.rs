/*!
 * Property Tests
 * Freshness monotonicity and consume/peek invariants
 */

use messagebus_signals::signals::{CheckMode, ManualClock, SignalManager};
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

proptest! {
    #[test]
    fn prop_freshness_monotonic(age_ms in 0u64..10_000, window_ms in 0u64..10_000) {
        let clock = Arc::new(ManualClock::new());
        let signals = SignalManager::new().with_clock(clock.clone());
        signals.create_signal("fresh").unwrap();
        clock.advance(Duration::from_millis(age_ms));

        let fresh = signals
            .check_for_signal("fresh", Duration::from_millis(window_ms))
            .unwrap();

        prop_assert_eq!(fresh, window_ms >= age_ms);
        // A stale read removes the entry; a fresh one leaves it
        prop_assert_eq!(signals.is_set("fresh").unwrap(), fresh);
    }

    #[test]
    fn prop_peeks_never_consume(peeks in 0usize..20) {
        let signals = SignalManager::new();
        signals.create_signal("looked_at").unwrap();

        for _ in 0..peeks {
            prop_assert!(signals.check_for_signal("looked_at", CheckMode::Peek).unwrap());
        }

        prop_assert!(signals.check_for_signal("looked_at", CheckMode::Consume).unwrap());
        prop_assert!(!signals.check_for_signal("looked_at", CheckMode::Consume).unwrap());
    }

    #[test]
    fn prop_absent_names_stay_absent(name in "[a-z_]{1,32}", lifetime in -10.0f64..10.0) {
        let signals = SignalManager::new();
        let mode = CheckMode::from_lifetime_secs(lifetime);
        prop_assert!(!signals.check_for_signal(&name, mode).unwrap());
        prop_assert!(signals.is_empty());
    }
}
