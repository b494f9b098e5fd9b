use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};

use crate::error::{ScheduleError, TableError};
use crate::models::{Contest, ContestStatus, ContestWindow, Countdown};
use crate::services::config_loader::ScheduleConfig;
use crate::services::table_decoder::DecodedTable;

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

pub fn contest_from_row(table: &DecodedTable, row: usize) -> Contest {
    Contest {
        id: table.value(row, "id").to_string(),
        name: or_default(table.value(row, "name"), "Unknown Contest"),
        date: or_default(table.value(row, "date"), "Unknown Date"),
        duration: or_default(table.value(row, "duration"), "00:00:00"),
        description: or_default(table.value(row, "description"), "No description available."),
        rank_sheet: table.value(row, "rank_sheet").to_string(),
        link: or_default(table.value(row, "link"), "#"),
        password: table.value(row, "password").to_string(),
        problem_setters: or_default(table.value(row, "problem_setters"), "N/A"),
        coders: table.value(row, "coders").to_string(),
    }
}

pub fn parse_contests(table: &DecodedTable) -> Result<Vec<Contest>, TableError> {
    let contests: Vec<Contest> = (0..table.row_count())
        .map(|row| contest_from_row(table, row))
        .collect();
    if contests.is_empty() {
        return Err(TableError::NoRows);
    }
    Ok(contests)
}

/// Seconds in an `HH:MM:SS` or `MM:SS` duration; anything else is zero.
pub fn parse_duration(duration: &str) -> i64 {
    try_parse_duration(duration).unwrap_or(0)
}

/// Like [`parse_duration`], but `None` when the numbers do not fit in `i64`.
pub fn try_parse_duration(duration: &str) -> Option<i64> {
    let parts: Option<Vec<i64>> = duration
        .split(':')
        .map(|part| part.trim().parse::<i64>().ok())
        .collect();

    let (hours, minutes, seconds) = match parts.as_deref() {
        Some(&[hours, minutes, seconds]) => (hours, minutes, seconds),
        Some(&[minutes, seconds]) => (0, minutes, seconds),
        _ => return Some(0),
    };
    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// Human form of a duration, e.g. `1h 30m 5s`.
pub fn format_duration_text(duration: &str) -> String {
    let total = parse_duration(duration);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 || (hours > 0 && seconds > 0) {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }
    parts.join(" ")
}

pub fn local_offset(config: &ScheduleConfig) -> FixedOffset {
    FixedOffset::east_opt(config.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
}

pub fn contest_start(
    contest: &Contest,
    config: &ScheduleConfig,
) -> Result<DateTime<FixedOffset>, ScheduleError> {
    let invalid = || ScheduleError::InvalidStartTime(contest.date.clone());
    let naive = NaiveDateTime::parse_from_str(contest.date.trim(), &config.date_format)
        .map_err(|_| invalid())?;
    local_offset(config)
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(invalid)
}

pub fn contest_window(
    contest: &Contest,
    config: &ScheduleConfig,
) -> Result<ContestWindow, ScheduleError> {
    let start = contest_start(contest, config)?;
    let end = try_parse_duration(&contest.duration)
        .and_then(TimeDelta::try_seconds)
        .and_then(|length| start.checked_add_signed(length))
        .ok_or_else(|| ScheduleError::DurationOutOfRange(contest.duration.clone()))?;
    Ok(ContestWindow { start, end })
}

pub fn contest_status(
    contest: &Contest,
    now: DateTime<FixedOffset>,
    config: &ScheduleConfig,
) -> Result<ContestStatus, ScheduleError> {
    let window = contest_window(contest, config)?;
    let status = if now > window.end {
        if contest.has_rank_sheet() {
            ContestStatus::Ranked
        } else {
            ContestStatus::Waiting
        }
    } else if now > window.start {
        ContestStatus::Running
    } else {
        ContestStatus::Upcoming
    };
    Ok(status)
}

/// Time left until `start`, or `None` once it has passed.
pub fn countdown(start: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> Option<Countdown> {
    let left = start - now;
    if left <= TimeDelta::zero() {
        return None;
    }
    Some(Countdown {
        days: left.num_days(),
        hours: left.num_hours() % 24,
        minutes: left.num_minutes() % 60,
        seconds: left.num_seconds() % 60,
    })
}

/// Contest list order: latest start first, unparsable dates last.
pub fn sort_newest_first(contests: &mut [Contest], config: &ScheduleConfig) {
    contests.sort_by_cached_key(|contest| {
        std::cmp::Reverse(contest_start(contest, config).ok())
    });
}

/// Contests that have not started yet, soonest first.
pub fn upcoming<'a>(
    contests: &'a [Contest],
    now: DateTime<FixedOffset>,
    config: &ScheduleConfig,
) -> Vec<&'a Contest> {
    let mut pending: Vec<(DateTime<FixedOffset>, &Contest)> = contests
        .iter()
        .filter_map(|contest| contest_start(contest, config).ok().map(|start| (start, contest)))
        .filter(|(start, _)| *start > now)
        .collect();
    pending.sort_by_key(|(start, _)| *start);
    pending.into_iter().map(|(_, contest)| contest).collect()
}

/// Contest with the given id, or the first listed one when no id is given.
pub fn select_contest<'a>(contests: &'a [Contest], id: Option<&str>) -> Option<&'a Contest> {
    match id {
        Some(id) => contests.iter().find(|contest| contest.id == id),
        None => contests.first(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(parse_duration("01:30:05"), 5405);
        assert_eq!(parse_duration("45:10"), 2710);
        assert_eq!(parse_duration("5"), 0);
        assert_eq!(parse_duration("aa:bb:cc"), 0);
        assert_eq!(try_parse_duration("9223372036854775807:00:00"), None);
        assert_eq!(parse_duration("9223372036854775807:00:00"), 0);
    }

    #[test]
    fn duration_text() {
        assert_eq!(format_duration_text("01:30:05"), "1h 30m 5s");
        assert_eq!(format_duration_text("02:00:00"), "2h");
        assert_eq!(format_duration_text("01:00:07"), "1h 0m 7s");
        assert_eq!(format_duration_text("00:00:00"), "0s");
    }

    #[test]
    fn countdown_breakdown() {
        let offset = FixedOffset::east_opt(6 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let start = offset.with_ymd_and_hms(2025, 1, 3, 4, 5, 6).unwrap();
        assert_eq!(
            countdown(start, now),
            Some(Countdown {
                days: 2,
                hours: 4,
                minutes: 5,
                seconds: 6
            })
        );
        assert_eq!(countdown(now, start), None);
    }
}
