//! Capture-time resolution for incoming reports.

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use thiserror::Error;
use tracing::{debug, warn};

use crate::convert::report::ActorReport;

/// Source of wall-clock time for the fallback resolution branch.
///
/// Only read, never mutated, so shared references are safe across threads.
pub trait UtcClock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Which branch produced a resolved timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    /// Authoritative: fully specified UTC time from the path history.
    PathHistoryUtc,
    /// Degraded: local clock minute plus the report's sec_mark.
    LocalClock,
}

/// Absolute capture time of a report, plus the branch that produced it so
/// that degraded resolution stays observable downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTime {
    pub stamp: DateTime<Utc>,
    pub source: TimeSource,
}

/// Failure to derive a representable capture time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("resolved time is outside the representable range")]
    OutOfRange,
}

struct HistoryUtc {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    millisecond: u32,
}

fn usable_history_time(report: &ActorReport) -> Option<HistoryUtc> {
    let utc = report.path_history?.initial_position?.utc_time?;
    let (Some(year), Some(month), Some(day), Some(hour), Some(minute), Some(second)) =
        (utc.year, utc.month, utc.day, utc.hour, utc.minute, utc.second)
    else {
        return None;
    };

    // Cross-check that the history time and the sec_mark describe the same
    // instant, ruling out minute roll-over corruption.
    if u32::from(report.sec_mark_ms) != second {
        return None;
    }

    Some(HistoryUtc {
        year,
        month,
        day,
        hour,
        minute,
        millisecond: second,
    })
}

/// Resolve the absolute capture time of `report`.
///
/// The sec_mark alone is ambiguous across minute transitions since the
/// report carries no minute-of-year. When the path history carries a fully
/// specified UTC time whose millisecond field matches the sec_mark, that
/// time is authoritative. Otherwise the local clock supplies the current
/// minute and the sec_mark the offset into it, which assumes the sender and
/// receiver clocks agree to within +-30s; `TimeSource::LocalClock` marks the
/// result as degraded.
pub fn resolve_timestamp(
    report: &ActorReport,
    clock: &impl UtcClock,
) -> Result<ResolvedTime, TimestampError> {
    if let Some(utc) = usable_history_time(report) {
        debug!("using fully specified path history UTC time for the report timestamp");

        let date =
            NaiveDate::from_ymd_opt(utc.year, utc.month, utc.day).ok_or(TimestampError::InvalidDate {
                year: utc.year,
                month: utc.month,
                day: utc.day,
            })?;
        let stamp = date
            .and_hms_opt(utc.hour, utc.minute, 0)
            .ok_or(TimestampError::OutOfRange)?
            .checked_add_signed(Duration::milliseconds(i64::from(utc.millisecond)))
            .ok_or(TimestampError::OutOfRange)?
            .and_utc();

        return Ok(ResolvedTime {
            stamp,
            source: TimeSource::PathHistoryUtc,
        });
    }

    warn!(
        "path history UTC time unusable, deriving the report timestamp from the local clock; \
         sender and receiver clocks are assumed synchronized"
    );

    let now = clock.now_utc();
    let minute_start = now
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .ok_or(TimestampError::OutOfRange)?;
    let stamp = minute_start
        .checked_add_signed(Duration::milliseconds(i64::from(report.sec_mark_ms)))
        .ok_or(TimestampError::OutOfRange)?;

    Ok(ResolvedTime {
        stamp,
        source: TimeSource::LocalClock,
    })
}
