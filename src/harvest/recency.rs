//! Recency gate
//!
//! Thread titles carry a parenthesized "(MonthName Year)" token. The gate
//! parses that token and decides inclusion against a rolling cutoff of
//! `now - window_years * 365 days`. The 365-day year is a deliberate
//! approximation; no leap-year adjustment is made.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use regex::Regex;

/// Extracts the (year, month) token from a thread title
///
/// Only the first "(MonthName Year)" match counts. Returns None when the
/// title carries no such token; callers treat that as a structural failure.
pub fn extract_year_month(title: &str) -> Option<(String, String)> {
    let re = Regex::new(r"\((\w+)\s(\d{4})\)").ok()?;
    let caps = re.captures(title)?;
    Some((caps[2].to_string(), caps[1].to_string()))
}

/// Parses a year and English month name into the first moment of that month
pub fn first_moment(year: &str, month: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{} {} 1", year, month), "%Y %B %d").ok()
}

/// Decides whether a thread dated (year, month) falls within the window
///
/// Returns None when the year/month pair does not parse as a date; that is
/// a structural failure for the caller, same as a missing token.
pub fn is_within_window(
    year: &str,
    month: &str,
    window_years: u32,
    now: DateTime<Utc>,
) -> Option<bool> {
    let posted = first_moment(year, month)?;
    let cutoff = (now - Duration::days(365 * i64::from(window_years))).date_naive();
    Some(posted >= cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_extract_year_month() {
        let (year, month) =
            extract_year_month("Ask HN: Who is hiring? (June 2024) | Hacker News").unwrap();
        assert_eq!(year, "2024");
        assert_eq!(month, "June");
    }

    #[test]
    fn test_extract_first_match_only() {
        let (year, month) = extract_year_month("(January 2023) and later (March 2024)").unwrap();
        assert_eq!(year, "2023");
        assert_eq!(month, "January");
    }

    #[test]
    fn test_extract_no_token() {
        assert_eq!(extract_year_month("Ask HN: Who is hiring?"), None);
        assert_eq!(extract_year_month(""), None);
    }

    #[test]
    fn test_recent_thread_included() {
        assert_eq!(
            is_within_window("2023", "January", 2, reference_now()),
            Some(true)
        );
    }

    #[test]
    fn test_old_thread_excluded() {
        assert_eq!(
            is_within_window("2020", "December", 2, reference_now()),
            Some(false)
        );
    }

    #[test]
    fn test_window_boundary() {
        // cutoff = 2024-06-01 - 730 days = 2022-06-02; June 1 2022 is just out
        assert_eq!(
            is_within_window("2022", "June", 2, reference_now()),
            Some(false)
        );
        assert_eq!(
            is_within_window("2022", "July", 2, reference_now()),
            Some(true)
        );
    }

    #[test]
    fn test_unparseable_month_is_absent() {
        assert_eq!(is_within_window("2024", "Smarch", 2, reference_now()), None);
    }

    #[test]
    fn test_first_moment() {
        assert_eq!(
            first_moment("2024", "June"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(first_moment("2024", "nonsense"), None);
    }
}
