//! Scheduling request and time window.
//!
//! `ScheduleRequest` is the caller-facing record
//! (`{date, startTime, endTime, slotDurationMinutes}`) with dates and times
//! as strings. `ScheduleWindow` is the parsed form the builder runs on.
//!
//! Malformed strings are rejected with [`RequestError`]. Well-formed but
//! degenerate windows (non-positive duration, start at or after end) are
//! accepted: they simply hold zero slots.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{RequestError, RequestResult};
use crate::models::{DATE_FORMAT, TIME_FORMAT};

/// Caller-supplied scheduling request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    /// Event date (`YYYY-MM-DD`).
    pub date: String,
    /// First slot start (`HH:MM`).
    pub start_time: String,
    /// Latest slot end (`HH:MM`).
    pub end_time: String,
    /// Length of every slot in minutes.
    pub slot_duration_minutes: i64,
}

impl ScheduleRequest {
    /// Creates a request.
    pub fn new(
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        slot_duration_minutes: i64,
    ) -> Self {
        Self {
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            slot_duration_minutes,
        }
    }

    /// Parses the request into a window.
    pub fn to_window(&self) -> RequestResult<ScheduleWindow> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|source| {
            RequestError::InvalidDate {
                value: self.date.clone(),
                source,
            }
        })?;
        let start = parse_time("start time", &self.start_time)?;
        let end = parse_time("end time", &self.end_time)?;
        Ok(ScheduleWindow::new(date, start, end, self.slot_duration_minutes))
    }
}

fn parse_time(field: &'static str, value: &str) -> RequestResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|source| {
        RequestError::InvalidTime {
            field,
            value: value.to_string(),
            source,
        }
    })
}

impl TryFrom<&ScheduleRequest> for ScheduleWindow {
    type Error = RequestError;

    fn try_from(request: &ScheduleRequest) -> RequestResult<Self> {
        request.to_window()
    }
}

/// A parsed date and time window divided into fixed-length slots.
///
/// Times are wall-clock on a single day; a window never wraps past
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    /// Event date.
    pub date: NaiveDate,
    /// First slot start.
    pub start: NaiveTime,
    /// No slot may end after this time.
    pub end: NaiveTime,
    /// Slot length in minutes.
    pub slot_duration_minutes: i64,
}

impl ScheduleWindow {
    /// Creates a window.
    pub fn new(
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        slot_duration_minutes: i64,
    ) -> Self {
        Self {
            date,
            start,
            end,
            slot_duration_minutes,
        }
    }

    /// Whether the window can hold no slot at all.
    pub fn is_degenerate(&self) -> bool {
        self.slot_duration_minutes <= 0 || self.start_minute() >= self.end_minute()
    }

    /// Number of whole slots that fit between start and end.
    pub fn slot_count(&self) -> usize {
        if self.is_degenerate() {
            return 0;
        }
        let span = self.end_minute() - self.start_minute();
        (span / self.slot_duration_minutes) as usize
    }

    /// Start as minutes since midnight, rounded up to a whole minute.
    pub(crate) fn start_minute(&self) -> i64 {
        let minute = minute_of_day(self.start);
        if self.start.second() > 0 || self.start.nanosecond() > 0 {
            minute + 1
        } else {
            minute
        }
    }

    /// End as minutes since midnight, rounded down.
    pub(crate) fn end_minute(&self) -> i64 {
        minute_of_day(self.end)
    }
}

pub(crate) fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Converts minutes since midnight back to a time. `None` past 23:59.
pub(crate) fn time_of_minute(minute: i64) -> Option<NaiveTime> {
    if !(0..24 * 60).contains(&minute) {
        return None;
    }
    NaiveTime::from_hms_opt((minute / 60) as u32, (minute % 60) as u32, 0)
}
