// src/utils/date.rs

//! Spanish date display for article listings.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Parse a WordPress date (`2024-01-15T10:30:00`, RFC 3339, or a bare date).
pub fn parse_wp_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|d| d.naive_local()))
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Long Spanish form, e.g. `15 de enero de 2024`.
///
/// Unparseable input is returned unchanged.
pub fn format_date(s: &str) -> String {
    match parse_wp_date(s) {
        Some(dt) => format!(
            "{} de {} de {}",
            dt.day(),
            MONTHS[dt.month0() as usize],
            dt.year()
        ),
        None => s.to_string(),
    }
}

/// Relative form (`hace 2 horas`) for the last week, long form after that.
pub fn format_relative_time(s: &str, now: NaiveDateTime) -> String {
    let Some(dt) = parse_wp_date(s) else {
        return s.to_string();
    };

    let secs = (now - dt).num_seconds();
    if secs < MINUTE {
        "hace unos momentos".to_string()
    } else if secs < HOUR {
        ago(secs / MINUTE, "minuto")
    } else if secs < DAY {
        ago(secs / HOUR, "hora")
    } else if secs < WEEK {
        ago(secs / DAY, "día")
    } else {
        format_date(s)
    }
}

fn ago(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("hace 1 {unit}")
    } else {
        format!("hace {n} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        parse_wp_date("2024-01-20T12:00:00").unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-15T10:30:00"), "15 de enero de 2024");
        assert_eq!(format_date("2023-12-01"), "1 de diciembre de 2023");
        assert_eq!(format_date("2024-03-05T10:00:00+01:00"), "5 de marzo de 2024");
        assert_eq!(format_date("ayer"), "ayer");
    }

    #[test]
    fn test_format_relative_time() {
        assert_eq!(
            format_relative_time("2024-01-20T11:59:30", now()),
            "hace unos momentos"
        );
        assert_eq!(format_relative_time("2024-01-20T11:59:00", now()), "hace 1 minuto");
        assert_eq!(format_relative_time("2024-01-20T11:15:00", now()), "hace 45 minutos");
        assert_eq!(format_relative_time("2024-01-20T09:00:00", now()), "hace 3 horas");
        assert_eq!(format_relative_time("2024-01-18T12:00:00", now()), "hace 2 días");
        assert_eq!(
            format_relative_time("2024-01-02T12:00:00", now()),
            "2 de enero de 2024"
        );
    }

    #[test]
    fn test_future_dates_read_as_just_now() {
        assert_eq!(
            format_relative_time("2024-01-21T12:00:00", now()),
            "hace unos momentos"
        );
    }
}
