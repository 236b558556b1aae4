use chrono::TimeDelta;
use serde::Serialize;
use std::fmt;

/// Remaining time split into hours/minutes/seconds, clamped at zero.
///
/// Hours are total hours, not hours-of-day, so a countdown spanning several
/// days renders as e.g. `214:06:43`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose a signed delta; anything negative collapses to zero.
    pub fn from_delta(delta: TimeDelta) -> Self {
        let total = delta.num_seconds().max(0);
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Two-digit cell text for the hours unit (wider if the value needs it).
    pub fn hours_text(&self) -> String {
        format!("{:02}", self.hours)
    }

    pub fn minutes_text(&self) -> String {
        format!("{:02}", self.minutes)
    }

    pub fn seconds_text(&self) -> String {
        format!("{:02}", self.seconds)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
