//! Date parsing for fixture and date-picker values.
//!
//! Fixtures carry dates as `dd/mm/yyyy` strings, date pickers produce ISO
//! `yyyy-mm-dd` values and TickTick returns full timestamps. Everything in
//! this module converts those forms into millisecond timestamps that can be
//! compared directly.
//!
//! ## Sentinels
//!
//! - [`parse_date`] returns `0` for anything it cannot read. `0` means "unset"
//!   and must never be treated as a real 1970 date.
//! - [`sortable_timestamp`] returns [`MAX_SAFE_INTEGER`] for missing values,
//!   which places them after every real date in an ascending sort.
//!
//! None of these functions fail or panic.
//!
//! ## Examples
//!
//! ```rust
//! use pmdash::libs::date::{parse_date, parse_input_date, to_display_date};
//!
//! assert_eq!(to_display_date("2024-01-15"), "15/01/2024");
//! assert_eq!(parse_date("not a date"), 0);
//! assert_eq!(parse_input_date("", i64::MIN), i64::MIN);
//! ```

use chrono::{DateTime, Days, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Largest integer a JSON number can hold without losing precision.
///
/// Used as the "no date" position for values that should sort last.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Offset-carrying timestamp layouts accepted by [`parse_flexible_date`].
///
/// TickTick sends `2024-01-15T09:00:00.000+0000`, with no colon in the offset.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M:%S%z"];

/// Parses a `dd/mm/yyyy` string into a local-midnight timestamp in milliseconds.
///
/// Returns `0` when the value is empty, does not have exactly three
/// `/`-separated components or has a non-numeric component. Out-of-range days
/// and months roll over into the neighbouring month or year, so `31/02/2024`
/// is 2 March 2024.
///
/// # Examples
///
/// ```rust
/// use pmdash::libs::date::parse_date;
///
/// assert!(parse_date("31/01/2024") > parse_date("01/01/2024"));
/// assert_eq!(parse_date("31/02/2024"), parse_date("02/03/2024"));
/// assert_eq!(parse_date("2024-01-01"), 0);
/// assert_eq!(parse_date(""), 0);
/// ```
pub fn parse_date(value: &str) -> i64 {
    parse_display_date(value)
        .and_then(local_midnight)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Same as [`parse_date`] for an optional field.
pub fn parse_opt_date(value: Option<&str>) -> i64 {
    value.map(parse_date).unwrap_or(0)
}

/// Reads the calendar day out of a `dd/mm/yyyy` string.
///
/// Day and month are offsets from the first of the month, not checked
/// against the calendar: `00/03/2024` is 29 February and `01/13/2023` is
/// 1 January 2024.
pub fn parse_display_date(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let year: i64 = parts[2].trim().parse().ok()?;
    let month: i64 = parts[1].trim().parse().ok()?;
    let day: i64 = parts[0].trim().parse().ok()?;

    let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let first = NaiveDate::from_ymd_opt(
        i32::try_from(months.div_euclid(12)).ok()?,
        u32::try_from(months.rem_euclid(12) + 1).ok()?,
        1,
    )?;
    let offset = day.checked_sub(1)?;
    if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

/// Converts an ISO `yyyy-mm-dd` value into the `dd/mm/yyyy` display form.
///
/// Empty input, or input without three `-`-separated components, yields an
/// empty string.
pub fn to_display_date(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut parts = input.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(yyyy), Some(mm), Some(dd)) if !yyyy.is_empty() && !mm.is_empty() && !dd.is_empty() => {
            format!("{}/{}/{}", dd, mm, yyyy)
        }
        _ => String::new(),
    }
}

/// Converts an ISO date-picker value into a comparable timestamp.
///
/// An empty value returns `fallback`, which lets callers express open range
/// bounds with `i64::MIN` and `i64::MAX`. A non-empty value that cannot be
/// read returns `0`, like [`parse_date`].
pub fn parse_input_date(input: &str, fallback: i64) -> i64 {
    if input.is_empty() {
        return fallback;
    }
    parse_date(&to_display_date(input))
}

/// Parses any of the date forms seen in fixtures and TickTick payloads.
///
/// Accepted, in order:
/// 1. `dd/mm/yyyy` as local midnight
/// 2. RFC 3339 (`2024-01-15T09:00:00+01:00`)
/// 3. Offsets without a colon (`2024-01-15T09:00:00.000+0000`)
/// 4. Naive date-times (`2024-01-15T09:00:00`) in local time
/// 5. Bare ISO dates (`2024-01-15`) as UTC midnight
pub fn parse_flexible_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if value.contains('/') {
        if let Some(dt) = parse_display_date(value).and_then(local_midnight) {
            return Some(dt.fixed_offset());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        if let Some(dt) = Local.from_local_datetime(&naive).earliest() {
            return Some(dt.fixed_offset());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
}

/// Millisecond timestamp for ascending sorts where missing dates go last.
pub fn sortable_timestamp(value: Option<&str>) -> i64 {
    value
        .and_then(parse_flexible_date)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(MAX_SAFE_INTEGER)
}

/// Timestamp of local midnight at the start of the day containing `now`.
pub fn start_of_day(now: DateTime<Local>) -> i64 {
    local_midnight(now.date_naive())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| now.timestamp_millis())
}

fn local_midnight(date: NaiveDate) -> Option<DateTime<Local>> {
    let naive = date.and_hms_opt(0, 0, 0)?;
    // DST gaps at midnight resolve to the earliest valid instant.
    Local.from_local_datetime(&naive).earliest()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_rejects_wrong_component_count() {
        assert_eq!(parse_display_date("01/01"), None);
        assert_eq!(parse_display_date("01/01/2024/1"), None);
        assert_eq!(parse_display_date("01/01/abcd"), None);
    }

    #[test]
    fn test_display_date_rejects_impossible_days() {
        assert_eq!(parse_display_date("31/02/2024"), None);
        assert_eq!(parse_display_date("00/01/2024"), None);
        assert_eq!(parse_display_date("29/02/2024"), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_to_display_date_partial_input() {
        assert_eq!(to_display_date("2024-01"), "");
        assert_eq!(to_display_date("2024--05"), "");
    }
}
