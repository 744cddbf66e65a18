use crate::common::constants::{TIME_FULL_TIME, TIME_HALF_TIME, TIME_LIVE, TIME_TBD};
use crate::common::types::MatchStatus;
use chrono::{DateTime, Local, TimeZone, Utc};

/// Derive the human-readable progress label for a match, rendering kickoff
/// times in the local timezone.
pub fn format_time(
    status: &MatchStatus,
    half_time: bool,
    elapsed_minutes: Option<u32>,
    scheduled: Option<DateTime<Utc>>,
) -> String {
    format_time_in(status, half_time, elapsed_minutes, scheduled, &Local)
}

/// Same as [`format_time`] with an explicit timezone for kickoff clocks.
///
/// Finished matches always report `90'`; extra time is not reflected.
pub fn format_time_in<Tz: TimeZone>(
    status: &MatchStatus,
    half_time: bool,
    elapsed_minutes: Option<u32>,
    scheduled: Option<DateTime<Utc>>,
    tz: &Tz,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if half_time {
        return TIME_HALF_TIME.to_string();
    }

    match status {
        MatchStatus::Live => match elapsed_minutes {
            Some(minutes) => format!("{minutes}'"),
            None => TIME_LIVE.to_string(),
        },
        MatchStatus::Finished => TIME_FULL_TIME.to_string(),
        MatchStatus::NotStarted => match scheduled {
            Some(instant) => instant.with_timezone(tz).format("%H:%M").to_string(),
            None => TIME_TBD.to_string(),
        },
        MatchStatus::Other(_) => TIME_TBD.to_string(),
    }
}
