use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime};

/// Parses the date shapes the backend emits: `YYYY-MM-DD`, RFC 3339
/// timestamps (converted to local time) and naive `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// `DD-Month-YYYY`, `N/A` for blank input, `Invalid Date` otherwise.
pub fn format_display_date(value: &str) -> String {
    if value.trim().is_empty() {
        return "N/A".to_string();
    }
    match parse_date(value) {
        Some(date) => date.format("%d-%B-%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

pub fn format_date_range(start: &str, end: &str) -> String {
    format!(
        "{} to {}",
        format_display_date(start),
        format_display_date(end)
    )
}

/// Last day of a leave that starts on `start` and lasts `days` days.
/// Returns `None` unless `days` is a positive whole number.
pub fn derive_end_date(start: &str, days: &str) -> Option<NaiveDate> {
    let start = parse_date(start)?;
    let days = days.trim().parse::<u64>().ok().filter(|d| *d >= 1)?;
    start.checked_add_days(Days::new(days - 1))
}

/// Days covered by a request, counting both ends.
pub fn inclusive_duration_days(start: &str, end: &str) -> Option<i64> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    Some((end - start).num_days() + 1)
}

pub fn year_of(value: &str) -> Option<i32> {
    parse_date(value).map(|date| date.year())
}

pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates_with_full_month_name() {
        assert_eq!(format_display_date("2024-03-01"), "01-March-2024");
        assert_eq!(format_display_date("2023-12-25"), "25-December-2023");
    }

    #[test]
    fn formats_timestamps_in_local_time() {
        let formatted = format_display_date("2024-03-15T12:00:00Z");
        assert!(formatted.ends_with("-March-2024"), "{}", formatted);
        assert_eq!(
            format_display_date("2024-07-04T08:30:00"),
            "04-July-2024"
        );
    }

    #[test]
    fn formatting_is_total() {
        assert_eq!(format_display_date(""), "N/A");
        assert_eq!(format_display_date("   "), "N/A");
        assert_eq!(format_display_date("not a date"), "Invalid Date");
        assert_eq!(format_display_date("2024-02-30"), "Invalid Date");
    }

    #[test]
    fn range_joins_both_ends() {
        assert_eq!(
            format_date_range("2024-03-01", "2024-03-05"),
            "01-March-2024 to 05-March-2024"
        );
    }

    #[test]
    fn end_date_is_start_plus_days_minus_one() {
        assert_eq!(
            derive_end_date("2024-03-01", "5"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(
            derive_end_date("2024-03-01", "1"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(
            derive_end_date("2024-02-28", "3"),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn end_date_cleared_for_invalid_day_counts() {
        assert_eq!(derive_end_date("2024-03-01", "0"), None);
        assert_eq!(derive_end_date("2024-03-01", "-2"), None);
        assert_eq!(derive_end_date("2024-03-01", "2.5"), None);
        assert_eq!(derive_end_date("2024-03-01", ""), None);
        assert_eq!(derive_end_date("", "3"), None);
    }

    #[test]
    fn derived_end_round_trips_through_duration() {
        for days in 1..=40u32 {
            let end = derive_end_date("2024-12-20", &days.to_string()).unwrap();
            let end = end.format("%Y-%m-%d").to_string();
            assert_eq!(
                inclusive_duration_days("2024-12-20", &end),
                Some(days as i64)
            );
        }
    }

    #[test]
    fn duration_and_year_helpers() {
        assert_eq!(inclusive_duration_days("2024-03-01", "2024-03-05"), Some(5));
        assert_eq!(inclusive_duration_days("2024-03-01", "bad"), None);
        assert_eq!(year_of("2021-06-01"), Some(2021));
        assert_eq!(year_of("garbage"), None);
        assert!(current_year() >= 2024);
    }
}
