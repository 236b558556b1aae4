// Schedule module
// Per-day sehri/iftar time table for Ramadan 1447 (2026)

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::utils::time::parse_time;

/// The two daily time markers for one fasting day.
///
/// Both times are `HH:MM:SS` strings in the device's local time; `sehri`
/// always precedes `iftar` within the same calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayTimes {
    pub sehri: &'static str,
    pub iftar: &'static str,
}

/// Validation errors for the bundled schedule data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid time string '{time}' for {date}")]
    InvalidTime { date: NaiveDate, time: String },
    #[error("sehri {sehri} is not before iftar {iftar} on {date}")]
    MarkersOutOfOrder {
        date: NaiveDate,
        sehri: &'static str,
        iftar: &'static str,
    },
    #[error("schedule is empty")]
    Empty,
}

/// Immutable date -> marker-pair mapping covering the whole observance.
///
/// Built once at startup from [`RAMADAN_1447`]; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ScheduleTable {
    days: BTreeMap<NaiveDate, DayTimes>,
}

impl ScheduleTable {
    /// Build the table from the compiled-in Ramadan 1447 data.
    pub fn bundled() -> Self {
        Self::from_entries(RAMADAN_1447)
    }

    fn from_entries(entries: &[(NaiveDate, DayTimes)]) -> Self {
        let days = entries.iter().copied().collect();
        Self { days }
    }

    /// Look up the marker pair for a calendar date.
    pub fn get(&self, date: NaiveDate) -> Option<DayTimes> {
        self.days.get(&date).copied()
    }

    /// First covered date and its markers.
    pub fn first(&self) -> Option<(NaiveDate, DayTimes)> {
        self.days.iter().next().map(|(d, t)| (*d, *t))
    }

    /// Last covered date and its markers.
    pub fn last(&self) -> Option<(NaiveDate, DayTimes)> {
        self.days.iter().next_back().map(|(d, t)| (*d, *t))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Check every entry: times parse and sehri precedes iftar.
    ///
    /// The data is static, so a failure here is a packaging mistake rather
    /// than a runtime condition; `main` refuses to start on it.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.days.is_empty() {
            return Err(ScheduleError::Empty);
        }

        for (date, times) in &self.days {
            let sehri = parse_time(times.sehri).map_err(|_| ScheduleError::InvalidTime {
                date: *date,
                time: times.sehri.to_string(),
            })?;
            let iftar = parse_time(times.iftar).map_err(|_| ScheduleError::InvalidTime {
                date: *date,
                time: times.iftar.to_string(),
            })?;

            if sehri >= iftar {
                return Err(ScheduleError::MarkersOutOfOrder {
                    date: *date,
                    sehri: times.sehri,
                    iftar: times.iftar,
                });
            }
        }

        Ok(())
    }
}

const fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid bundled schedule date"),
    }
}

const fn times(sehri: &'static str, iftar: &'static str) -> DayTimes {
    DayTimes { sehri, iftar }
}

/// Sehri/iftar times for Gujar Khan, Ramadan 1447 (source: Dawat-e-Islami).
pub const RAMADAN_1447: &[(NaiveDate, DayTimes)] = &[
    (d(2026, 2, 19), times("05:23:17", "17:57:06")),
    (d(2026, 2, 20), times("05:22:17", "17:57:59")),
    (d(2026, 2, 21), times("05:21:16", "17:58:51")),
    (d(2026, 2, 22), times("05:20:13", "17:59:43")),
    (d(2026, 2, 23), times("05:19:10", "18:00:34")),
    (d(2026, 2, 24), times("05:18:05", "18:01:25")),
    (d(2026, 2, 25), times("05:16:59", "18:02:16")),
    (d(2026, 2, 26), times("05:15:52", "18:03:06")),
    (d(2026, 2, 27), times("05:14:44", "18:03:56")),
    (d(2026, 2, 28), times("05:13:35", "18:04:46")),
    (d(2026, 3, 1), times("05:12:05", "18:05:47")),
    (d(2026, 3, 2), times("05:10:53", "18:06:36")),
    (d(2026, 3, 3), times("05:09:41", "18:07:25")),
    (d(2026, 3, 4), times("05:08:28", "18:08:13")),
    (d(2026, 3, 5), times("05:07:13", "18:09:01")),
    (d(2026, 3, 6), times("05:05:58", "18:09:49")),
    (d(2026, 3, 7), times("05:04:43", "18:10:36")),
    (d(2026, 3, 8), times("05:03:26", "18:11:24")),
    (d(2026, 3, 9), times("05:02:09", "18:12:10")),
    (d(2026, 3, 10), times("05:00:50", "18:12:57")),
    (d(2026, 3, 11), times("04:59:31", "18:13:43")),
    (d(2026, 3, 12), times("04:58:12", "18:14:29")),
    (d(2026, 3, 13), times("04:56:51", "18:15:15")),
    (d(2026, 3, 14), times("04:55:30", "18:16:00")),
    (d(2026, 3, 15), times("04:54:09", "18:16:46")),
    (d(2026, 3, 16), times("04:52:47", "18:17:31")),
    (d(2026, 3, 17), times("04:51:24", "18:18:16")),
    (d(2026, 3, 18), times("04:50:00", "18:19:01")),
    (d(2026, 3, 19), times("04:48:37", "18:19:46")),
    (d(2026, 3, 20), times("04:47:12", "18:20:31")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_table_has_thirty_days() {
        let table = ScheduleTable::bundled();
        assert_eq!(table.len(), 30);
    }

    #[test]
    fn test_bundled_table_validates() {
        let table = ScheduleTable::bundled();
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn test_lookup_round_trip_identity() {
        let table = ScheduleTable::bundled();
        for (date, stored) in RAMADAN_1447 {
            assert_eq!(table.get(*date), Some(*stored));
        }
    }

    #[test]
    fn test_first_and_last_entries() {
        let table = ScheduleTable::bundled();

        let (first_date, first_times) = table.first().unwrap();
        assert_eq!(first_date, NaiveDate::from_ymd_opt(2026, 2, 19).unwrap());
        assert_eq!(first_times.sehri, "05:23:17");

        let (last_date, last_times) = table.last().unwrap();
        assert_eq!(last_date, NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        assert_eq!(last_times.iftar, "18:20:31");
    }

    #[test]
    fn test_lookup_outside_range_is_none() {
        let table = ScheduleTable::bundled();
        assert_eq!(table.get(NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()), None);
        assert_eq!(table.get(NaiveDate::from_ymd_opt(2026, 3, 21).unwrap()), None);
    }

    #[test]
    fn test_out_of_order_markers_rejected() {
        let entries = [(
            NaiveDate::from_ymd_opt(2026, 2, 19).unwrap(),
            DayTimes {
                sehri: "18:00:00",
                iftar: "05:00:00",
            },
        )];
        let table = ScheduleTable::from_entries(&entries);
        assert!(matches!(
            table.validate(),
            Err(ScheduleError::MarkersOutOfOrder { .. })
        ));
    }

    #[test]
    fn test_empty_table_rejected() {
        let table = ScheduleTable::from_entries(&[]);
        assert_eq!(table.validate(), Err(ScheduleError::Empty));
    }
}
