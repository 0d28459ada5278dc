//! Time related utils.

use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime with the current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a DateTime into an http date, RFC 1123 with the GMT timezone:
/// `Tue, 27 Nov 2018 10:00:00 GMT`.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_http_date() {
        let t = chrono::DateTime::parse_from_rfc3339("2018-11-27T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(format_http_date(t), "Tue, 27 Nov 2018 10:00:00 GMT");
    }
}
