// Schedule resolver
// Pure state machine mapping (schedule table, instant) -> display state.
// The UI samples the clock once per second and recomputes the whole state;
// nothing here reads the clock or keeps state between ticks.

mod countdown;

pub use countdown::Countdown;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::models::schedule::{DayTimes, ScheduleTable};
use crate::models::texts::labels;
use crate::utils::time::{
    format_12_hour, format_short, parse_time, PLACEHOLDER_LONG, PLACEHOLDER_SHORT,
};

/// Where the current instant falls relative to the schedule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Before the first day's sehri; counting down to the observance start.
    BeforeRange,
    /// Today is covered and sehri has not ended yet.
    PreSehri,
    /// Between today's sehri and iftar.
    PreIftar,
    /// Past today's iftar; counting down to tomorrow's sehri.
    RolloverToNextDay,
    /// Past iftar on the last covered day.
    Finished,
    /// Today is not covered and we are not before the range. Gaps in the
    /// table and every day after coverage land here.
    NoData,
}

/// Everything the display needs for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedState {
    pub phase: Phase,
    /// Sehri marker in `hh:mm:ss AM/PM` form, or a placeholder.
    pub display_sehri: String,
    /// Iftar marker in `hh:mm:ss AM/PM` form, or a placeholder.
    pub display_iftar: String,
    /// Short form of the sehri marker, shown as the Fajr slot.
    pub fajr: String,
    /// Short form of the iftar marker, shown as the Maghrib slot.
    pub maghrib: String,
    /// Urdu heading above the countdown digits.
    pub target_label: &'static str,
    pub countdown: Countdown,
    /// Absolute instant being counted down to, if any.
    pub target: Option<NaiveDateTime>,
    /// Which bundled dua to show (0 = sehri dua, 1 = iftar dua).
    pub dua_index: usize,
}

impl ResolvedState {
    pub fn is_before_range(&self) -> bool {
        self.phase == Phase::BeforeRange
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn counting(
        phase: Phase,
        target_label: &'static str,
        target: NaiveDateTime,
        now: NaiveDateTime,
        display: DayTimes,
        dua_index: usize,
    ) -> Self {
        Self {
            phase,
            display_sehri: format_12_hour(display.sehri),
            display_iftar: format_12_hour(display.iftar),
            fajr: format_short(display.sehri),
            maghrib: format_short(display.iftar),
            target_label,
            countdown: Countdown::from_delta(target - now),
            target: Some(target),
            dua_index,
        }
    }

    fn before_range(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        Self {
            phase: Phase::BeforeRange,
            display_sehri: PLACEHOLDER_LONG.to_string(),
            display_iftar: PLACEHOLDER_LONG.to_string(),
            fajr: PLACEHOLDER_SHORT.to_string(),
            maghrib: PLACEHOLDER_SHORT.to_string(),
            target_label: labels::UNTIL_RAMADAN_BEGINS,
            countdown: Countdown::from_delta(target - now),
            target: Some(target),
            dua_index: 0,
        }
    }

    /// Terminal state after the last covered iftar; keeps that day's own
    /// markers on screen as a historical record.
    fn finished(display: DayTimes) -> Self {
        Self {
            phase: Phase::Finished,
            display_sehri: format_12_hour(display.sehri),
            display_iftar: format_12_hour(display.iftar),
            fajr: format_short(display.sehri),
            maghrib: format_short(display.iftar),
            target_label: labels::RAMADAN_CONCLUDED,
            countdown: Countdown::ZERO,
            target: None,
            dua_index: 0,
        }
    }

    fn no_data() -> Self {
        Self {
            phase: Phase::NoData,
            display_sehri: PLACEHOLDER_LONG.to_string(),
            display_iftar: PLACEHOLDER_LONG.to_string(),
            fajr: PLACEHOLDER_SHORT.to_string(),
            maghrib: PLACEHOLDER_SHORT.to_string(),
            target_label: labels::RAMADAN_CONCLUDED,
            countdown: Countdown::ZERO,
            target: None,
            dua_index: 0,
        }
    }
}

/// Resolve the display state for `now` against the table.
pub fn resolve(table: &ScheduleTable, now: NaiveDateTime) -> ResolvedState {
    let today = now.date();

    if let Some(times) = table.get(today) {
        return resolve_covered_day(table, now, today, times);
    }

    // Today has no entry: either the observance has not started yet, or we
    // are past coverage (or inside a gap). The former counts down to the
    // very first sehri; everything else is an explicit no-data terminal.
    if let Some((first_date, first_times)) = table.first() {
        if let Ok(first_sehri) = marker_datetime(first_date, first_times.sehri) {
            if now < first_sehri {
                return ResolvedState::before_range(first_sehri, now);
            }
        }
    }

    ResolvedState::no_data()
}

fn resolve_covered_day(
    table: &ScheduleTable,
    now: NaiveDateTime,
    today: NaiveDate,
    times: DayTimes,
) -> ResolvedState {
    let (Ok(sehri_at), Ok(iftar_at)) = (
        marker_datetime(today, times.sehri),
        marker_datetime(today, times.iftar),
    ) else {
        // Static data failed to parse; validate() should have caught this.
        return ResolvedState::no_data();
    };

    if now < sehri_at {
        return ResolvedState::counting(
            Phase::PreSehri,
            labels::UNTIL_SEHRI_ENDS,
            sehri_at,
            now,
            times,
            0,
        );
    }

    if now < iftar_at {
        return ResolvedState::counting(
            Phase::PreIftar,
            labels::UNTIL_IFTAR,
            iftar_at,
            now,
            times,
            1,
        );
    }

    // Past iftar: roll over to tomorrow's sehri if the table still covers it.
    let tomorrow_entry = today
        .succ_opt()
        .and_then(|d| table.get(d).map(|t| (d, t)));

    match tomorrow_entry {
        Some((tomorrow, tomorrow_times)) => {
            match marker_datetime(tomorrow, tomorrow_times.sehri) {
                Ok(next_sehri) => ResolvedState::counting(
                    Phase::RolloverToNextDay,
                    labels::UNTIL_NEXT_SEHRI,
                    next_sehri,
                    now,
                    tomorrow_times,
                    0,
                ),
                Err(_) => ResolvedState::no_data(),
            }
        }
        None => ResolvedState::finished(times),
    }
}

fn marker_datetime(
    date: NaiveDate,
    time: &str,
) -> Result<NaiveDateTime, crate::utils::time::TimeParseError> {
    Ok(date.and_time(parse_time(time)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn table() -> ScheduleTable {
        ScheduleTable::bundled()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_pre_sehri_targets_todays_sehri() {
        let state = resolve(&table(), at(2026, 2, 19, 4, 0, 0));

        assert_eq!(state.phase, Phase::PreSehri);
        assert_eq!(state.target, Some(at(2026, 2, 19, 5, 23, 17)));
        assert_eq!(state.target_label, labels::UNTIL_SEHRI_ENDS);
        assert_eq!(state.dua_index, 0);
        assert_eq!(state.countdown.to_string(), "01:23:17");
        assert_eq!(state.display_sehri, "05:23:17 AM");
        assert_eq!(state.display_iftar, "05:57:06 PM");
    }

    #[test]
    fn test_between_markers_targets_iftar() {
        let state = resolve(&table(), at(2026, 2, 19, 12, 0, 0));

        assert_eq!(state.phase, Phase::PreIftar);
        assert_eq!(state.target, Some(at(2026, 2, 19, 17, 57, 6)));
        assert_eq!(state.target_label, labels::UNTIL_IFTAR);
        assert_eq!(state.dua_index, 1);
    }

    #[test]
    fn test_sehri_instant_is_inclusive_boundary() {
        // Exactly at sehri the target flips to iftar.
        let state = resolve(&table(), at(2026, 2, 19, 5, 23, 17));
        assert_eq!(state.phase, Phase::PreIftar);
    }

    #[test]
    fn test_rollover_uses_tomorrows_pair() {
        let state = resolve(&table(), at(2026, 2, 19, 19, 0, 0));

        assert_eq!(state.phase, Phase::RolloverToNextDay);
        assert_eq!(state.target, Some(at(2026, 2, 20, 5, 22, 17)));
        assert_eq!(state.target_label, labels::UNTIL_NEXT_SEHRI);
        assert_eq!(state.dua_index, 0);
        // Display already shows the next day's markers.
        assert_eq!(state.display_sehri, "05:22:17 AM");
        assert_eq!(state.display_iftar, "05:57:59 PM");
    }

    #[test]
    fn test_last_day_after_iftar_is_finished() {
        let state = resolve(&table(), at(2026, 3, 20, 19, 0, 0));

        assert_eq!(state.phase, Phase::Finished);
        assert!(state.is_finished());
        assert!(state.countdown.is_zero());
        assert_eq!(state.target, None);
        assert_eq!(state.target_label, labels::RAMADAN_CONCLUDED);
        // The final day's own markers stay up as a historical record.
        assert_eq!(state.display_sehri, "04:47:12 AM");
        assert_eq!(state.display_iftar, "06:20:31 PM");
    }

    #[test]
    fn test_before_range_counts_down_to_first_sehri() {
        let now = at(2026, 2, 10, 3, 0, 0);
        let state = resolve(&table(), now);

        assert_eq!(state.phase, Phase::BeforeRange);
        assert!(state.is_before_range());
        assert_eq!(state.target, Some(at(2026, 2, 19, 5, 23, 17)));
        assert_eq!(state.display_sehri, PLACEHOLDER_LONG);
        assert_eq!(state.display_iftar, PLACEHOLDER_LONG);
        assert_eq!(state.dua_index, 0);
        assert!(!state.countdown.is_zero());
    }

    #[test]
    fn test_day_after_coverage_is_no_data() {
        let state = resolve(&table(), at(2026, 4, 1, 12, 0, 0));

        assert_eq!(state.phase, Phase::NoData);
        assert!(state.countdown.is_zero());
        assert_eq!(state.display_sehri, PLACEHOLDER_LONG);
        assert_eq!(state.fajr, PLACEHOLDER_SHORT);
        assert_eq!(state.target, None);
    }

    #[test]
    fn test_morning_of_first_day_before_midnight_boundary() {
        // 2026-02-18 23:30 is before the range even though it is the eve.
        let state = resolve(&table(), at(2026, 2, 18, 23, 30, 0));
        assert_eq!(state.phase, Phase::BeforeRange);
    }

    #[test]
    fn test_countdown_never_negative() {
        // One second before iftar, at iftar, one second after.
        for s in [at(2026, 3, 1, 18, 5, 46), at(2026, 3, 1, 18, 5, 47), at(2026, 3, 1, 18, 5, 48)]
        {
            let state = resolve(&table(), s);
            assert!(state.countdown.total_seconds() >= 0);
        }
    }

    #[test]
    fn test_state_serializes() {
        let state = resolve(&table(), at(2026, 2, 19, 4, 0, 0));
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("PreSehri"));
    }
}
