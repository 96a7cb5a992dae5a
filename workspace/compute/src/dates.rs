use chrono::NaiveDate;

/// Parses the calendar date at the start of an ISO string
/// (`2024-01-01`, `2024-01-01T00:00:00Z`, `2024-01-01 12:00`).
///
/// The date is taken as-is, without converting through any time zone.
pub fn parse_forecast_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// "Mon, Jan 1"; unparseable dates are returned unchanged.
pub fn row_label(raw: &str) -> String {
    match parse_forecast_date(raw) {
        Some(date) => date.format("%a, %b %-d").to_string(),
        None => raw.to_string(),
    }
}

/// "Jan 1"; unparseable dates are returned unchanged.
pub fn chart_label(raw: &str) -> String {
    match parse_forecast_date(raw) {
        Some(date) => date.format("%b %-d").to_string(),
        None => raw.to_string(),
    }
}
