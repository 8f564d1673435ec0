use chrono::{Local, NaiveDate};

/// Dagens datum enligt processens lokala klocka
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Formatera ett datum för visning och lagring (ISO 8601)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse ett ISO-datum
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_parse() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "2024-01-05");
        assert_eq!(parse_date("2024-01-05"), Some(date));
        assert_eq!(parse_date(" 2024-01-05 "), Some(date));
        assert_eq!(parse_date("05/01/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_today_roundtrips() {
        let d = today();
        assert_eq!(parse_date(&format_date(d)), Some(d));
    }
}
