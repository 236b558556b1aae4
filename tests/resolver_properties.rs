// Property-based tests for the schedule resolver
// Random instants across and around the observance window

use chrono::{NaiveDate, TimeDelta};
use proptest::prelude::*;

use ramadan_portal::models::schedule::ScheduleTable;
use ramadan_portal::services::resolver::{resolve, Countdown, Phase};

fn window_start() -> chrono::NaiveDateTime {
    // Two weeks before the first scheduled day.
    NaiveDate::from_ymd_opt(2026, 2, 5)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

proptest! {
    /// Property: the countdown is never negative, whatever the instant.
    #[test]
    fn prop_countdown_never_negative(offset_secs in 0i64..6_000_000) {
        let table = ScheduleTable::bundled();
        let now = window_start() + TimeDelta::seconds(offset_secs);

        let state = resolve(&table, now);
        prop_assert!(state.countdown.total_seconds() >= 0);
    }

    /// Property: every instant resolves to exactly one well-formed state;
    /// terminal phases carry no target and a zero countdown, counting
    /// phases carry a target at or after the instant.
    #[test]
    fn prop_phase_partition(offset_secs in 0i64..6_000_000) {
        let table = ScheduleTable::bundled();
        let now = window_start() + TimeDelta::seconds(offset_secs);

        let state = resolve(&table, now);
        match state.phase {
            Phase::Finished | Phase::NoData => {
                prop_assert_eq!(state.target, None);
                prop_assert!(state.countdown.is_zero());
            }
            Phase::BeforeRange
            | Phase::PreSehri
            | Phase::PreIftar
            | Phase::RolloverToNextDay => {
                let target = state.target.expect("counting phase has a target");
                prop_assert!(target >= now);
                prop_assert_eq!(
                    state.countdown,
                    Countdown::from_delta(target - now)
                );
            }
        }
    }

    /// Property: while the target stays the same, advancing the clock never
    /// increases the countdown.
    #[test]
    fn prop_countdown_monotone_under_fixed_target(
        offset_secs in 0i64..6_000_000,
        step in 1i64..30,
    ) {
        let table = ScheduleTable::bundled();
        let now = window_start() + TimeDelta::seconds(offset_secs);
        let later = now + TimeDelta::seconds(step);

        let a = resolve(&table, now);
        let b = resolve(&table, later);
        if a.target.is_some() && a.target == b.target {
            prop_assert!(b.countdown.total_seconds() <= a.countdown.total_seconds());
        }
    }

    /// Property: the dua index is 1 exactly while fasting (between markers)
    /// and 0 everywhere else.
    #[test]
    fn prop_dua_index_tracks_phase(offset_secs in 0i64..6_000_000) {
        let table = ScheduleTable::bundled();
        let now = window_start() + TimeDelta::seconds(offset_secs);

        let state = resolve(&table, now);
        let expected = usize::from(state.phase == Phase::PreIftar);
        prop_assert_eq!(state.dua_index, expected);
    }
}
