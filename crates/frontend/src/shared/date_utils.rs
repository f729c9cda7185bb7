/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application

/// Format a backend timestamp for list display
/// Example: 2026-03-15T14:02:26Z -> "2026-03-15 14:02"
pub fn format_timestamp(dt: &chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Format an ISO datetime string to "YYYY-MM-DD HH:MM"
/// Example: "2026-03-15T14:02:26.123Z" -> "2026-03-15 14:02"
pub fn format_iso_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let hhmm: String = time_part.chars().take(5).collect();
        if hhmm.len() == 5 {
            return format!("{} {}", date_part, hhmm);
        }
    }
    datetime_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_datetime() {
        assert_eq!(
            format_iso_datetime("2026-03-15T14:02:26.123Z"),
            "2026-03-15 14:02"
        );
        assert_eq!(format_iso_datetime("2026-12-31T23:59:59Z"), "2026-12-31 23:59");
    }

    #[test]
    fn test_invalid_format_passes_through() {
        assert_eq!(format_iso_datetime("invalid"), "invalid");
        assert_eq!(format_iso_datetime("2026-03-15T"), "2026-03-15T");
    }

    #[test]
    fn test_format_timestamp() {
        let dt = chrono::DateTime::parse_from_rfc3339("2026-03-15T14:02:26Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(format_timestamp(&dt), "2026-03-15 14:02");
    }
}
