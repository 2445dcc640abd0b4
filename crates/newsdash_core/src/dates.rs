//! Relative date formatting for item and comment dates.
//!
//! # Invariants
//! - Formatting never fails: unparseable input is returned unchanged.
//! - Bare `YYYY-MM-DD` dates are read as midnight UTC.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;
const MONTHS_IN_YEAR: i64 = 12;

/// Parses `raw` as a calendar date or an RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Formats `raw` relative to `now`, e.g. `3 days ago` or `in about 2 hours`.
///
/// Falls back to `raw` when it cannot be parsed.
pub fn format_relative(raw: &str, now: DateTime<Utc>) -> String {
    match parse_date(raw) {
        Some(at) => {
            let (earlier, later) = if at <= now { (at, now) } else { (now, at) };
            let distance = distance_phrase(earlier, later);
            if at > now {
                format!("in {distance}")
            } else {
                format!("{distance} ago")
            }
        }
        None => raw.to_string(),
    }
}

/// Formats `raw` relative to the current wall clock.
pub fn format_relative_now(raw: &str) -> String {
    format_relative(raw, Utc::now())
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today_utc(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

/// Whole calendar months from `earlier` to `later`.
///
/// A month counts only once `later` reaches the same day and time of day.
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let years = i64::from(later.year() - earlier.year());
    let months = i64::from(later.month()) - i64::from(earlier.month());
    let mut total = years * MONTHS_IN_YEAR + months;
    if (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        total -= 1;
    }
    total
}

fn distance_phrase(earlier: DateTime<Utc>, later: DateTime<Utc>) -> String {
    let minutes = round_div((later - earlier).num_seconds(), 60);

    if minutes < 1 {
        return "less than a minute".to_string();
    }
    if minutes < 45 {
        return plural(minutes, "minute");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {}", plural(round_div(minutes, MINUTES_IN_HOUR), "hour"));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        return plural(round_div(minutes, MINUTES_IN_DAY), "day");
    }
    let nearest_month = round_div(minutes, MINUTES_IN_MONTH);
    if minutes < MINUTES_IN_TWO_MONTHS {
        return format!("about {}", plural(nearest_month, "month"));
    }
    let months = calendar_months_between(earlier, later);
    if months < MONTHS_IN_YEAR {
        return plural(nearest_month, "month");
    }

    let years = months / MONTHS_IN_YEAR;
    let remainder = months % MONTHS_IN_YEAR;
    if remainder < 3 {
        format!("about {}", plural(years, "year"))
    } else if remainder < 9 {
        format!("over {}", plural(years, "year"))
    } else {
        format!("almost {}", plural(years + 1, "year"))
    }
}

#[cfg(test)]
mod tests {
    use super::{calendar_months_between, format_relative, parse_date, today_utc};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn unparseable_dates_fall_back_to_raw_text() {
        let now = Utc
            .with_ymd_and_hms(2023, 6, 20, 12, 0, 0)
            .single()
            .expect("fixed timestamp should be valid");
        assert_eq!(format_relative("yesterday-ish", now), "yesterday-ish");
        assert_eq!(format_relative("2023-13-40", now), "2023-13-40");
    }

    #[test]
    fn calendar_dates_are_read_as_utc_midnight() {
        let parsed = parse_date("2023-06-15").expect("calendar date should parse");
        let midnight = Utc
            .with_ymd_and_hms(2023, 6, 15, 0, 0, 0)
            .single()
            .expect("midnight should be valid");
        assert_eq!(parsed, midnight);
    }

    #[test]
    fn distances_cover_each_band() {
        let now = Utc
            .with_ymd_and_hms(2023, 6, 20, 0, 0, 0)
            .single()
            .expect("fixed timestamp should be valid");
        let at = |delta: Duration| (now - delta).to_rfc3339();

        assert_eq!(format_relative(&at(Duration::seconds(10)), now), "less than a minute ago");
        assert_eq!(format_relative(&at(Duration::minutes(1)), now), "1 minute ago");
        assert_eq!(format_relative(&at(Duration::minutes(20)), now), "20 minutes ago");
        assert_eq!(format_relative(&at(Duration::minutes(60)), now), "about 1 hour ago");
        assert_eq!(format_relative(&at(Duration::hours(5)), now), "about 5 hours ago");
        assert_eq!(format_relative(&at(Duration::hours(30)), now), "1 day ago");
        assert_eq!(format_relative("2023-06-15", now), "5 days ago");
        assert_eq!(format_relative(&at(Duration::days(45)), now), "about 2 months ago");
        assert_eq!(format_relative(&at(Duration::days(150)), now), "5 months ago");
        assert_eq!(format_relative(&at(Duration::days(365)), now), "about 1 year ago");
        assert_eq!(format_relative(&at(Duration::days(365 * 2 + 150)), now), "over 2 years ago");
        assert_eq!(format_relative(&at(Duration::days(365 * 2 + 320)), now), "almost 3 years ago");
    }

    #[test]
    fn year_bands_follow_calendar_months() {
        let now = Utc
            .with_ymd_and_hms(2023, 6, 20, 0, 0, 0)
            .single()
            .expect("fixed timestamp should be valid");
        let at = |days: i64| (now - Duration::days(days)).to_rfc3339();

        assert_eq!(format_relative(&at(350), now), "12 months ago");
        assert_eq!(format_relative("2022-06-21", now), "12 months ago");
        assert_eq!(format_relative("2022-06-20", now), "about 1 year ago");
        assert_eq!(format_relative("2021-03-20", now), "over 2 years ago");
        assert_eq!(format_relative("2021-09-20", now), "almost 2 years ago");
    }

    #[test]
    fn calendar_months_count_only_completed_months() {
        let ts = |y: i32, m: u32, d: u32, h: u32| {
            Utc
                .with_ymd_and_hms(y, m, d, h, 0, 0)
                .single()
                .expect("fixed timestamp should be valid")
        };
        assert_eq!(calendar_months_between(ts(2022, 7, 5, 0), ts(2023, 6, 20, 0)), 11);
        assert_eq!(calendar_months_between(ts(2022, 6, 20, 12), ts(2023, 6, 20, 6)), 11);
        assert_eq!(calendar_months_between(ts(2022, 6, 20, 6), ts(2023, 6, 20, 6)), 12);
    }

    #[test]
    fn future_dates_use_in_prefix() {
        let now = Utc
            .with_ymd_and_hms(2023, 6, 20, 0, 0, 0)
            .single()
            .expect("fixed timestamp should be valid");
        let later = (now + Duration::hours(2)).to_rfc3339();
        assert_eq!(format_relative(&later, now), "in about 2 hours");
    }

    #[test]
    fn today_is_iso_calendar_date() {
        let now = Utc
            .with_ymd_and_hms(2024, 2, 3, 23, 59, 0)
            .single()
            .expect("fixed timestamp should be valid");
        assert_eq!(today_utc(now), "2024-02-03");
    }
}
