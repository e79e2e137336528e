//! Number, currency and date formatting for display.
//!
//! Output follows the `es-ES` conventions the dashboard has always used:
//!
//! - Decimal comma, at most one fractional digit for hours
//! - Thousands grouped with `.` only from five integer digits up
//!   (`1234` but `12.345`)
//! - Currency in whole euros with a non-breaking space before `€`
//! - `—` for values that are not finite
//!
//! ## Examples
//!
//! ```rust
//! use pmdash::libs::formatter::{fmt_currency, fmt_number};
//!
//! assert_eq!(fmt_number(1234.56), "1234,6");
//! assert_eq!(fmt_number(12345.0), "12.345");
//! assert_eq!(fmt_currency(400.0), "400\u{a0}€");
//! assert_eq!(fmt_number(f64::NAN), "—");
//! ```

use crate::libs::date::parse_flexible_date;
use chrono::{Datelike, Local, Timelike};

/// Placeholder for missing values in tables.
pub const PLACEHOLDER: &str = "—";
pub const NO_DATE: &str = "Sin fecha";

const MONTHS_SHORT: [&str; 12] = ["ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic"];

/// Formats hours with up to one decimal digit.
pub fn fmt_number(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let tenths = (value.abs() * 10.0).round() as u64;
    let (int_part, frac) = (tenths / 10, tenths % 10);
    let sign = if value < 0.0 && tenths != 0 { "-" } else { "" };

    if frac == 0 {
        format!("{}{}", sign, group_thousands(int_part))
    } else {
        format!("{}{},{}", sign, group_thousands(int_part), frac)
    }
}

/// Formats an amount in whole euros.
pub fn fmt_currency(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let units = value.abs().round() as u64;
    let sign = if value < 0.0 && units != 0 { "-" } else { "" };
    format!("{}{}\u{a0}€", sign, group_thousands(units))
}

/// Formats a due date as `15 ene 2024, 9:00` in local time.
pub fn format_due_date(value: Option<&str>) -> String {
    let Some(parsed) = value.and_then(parse_flexible_date) else {
        return NO_DATE.to_string();
    };

    let local = parsed.with_timezone(&Local);
    format!(
        "{} {} {}, {}:{:02}",
        local.day(),
        MONTHS_SHORT[local.month0() as usize],
        local.year(),
        local.hour(),
        local.minute()
    )
}

/// `3 h · 2 registros` header of a task's hour log.
pub fn fmt_hours_summary(hours: f64, entries: usize) -> String {
    let plural = if entries == 1 { "" } else { "s" };
    format!("{} h · {} registro{}", fmt_number(hours), entries, plural)
}

/// Shortens long notes for a table cell.
pub fn truncate_note(note: &str, max_chars: usize) -> String {
    if note.is_empty() {
        return PLACEHOLDER.to_string();
    }
    if note.chars().count() > max_chars {
        let short: String = note.chars().take(max_chars).collect();
        format!("{}…", short)
    } else {
        note.to_string()
    }
}

pub fn or_placeholder(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(PLACEHOLDER)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() < 5 {
        return digits;
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
