/// Utilities for date and time formatting
///
/// Column formats use moment-style patterns ("YYYY-MM-DD HH:mm"); they are
/// translated to chrono format strings here.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Translate a moment-style pattern into a chrono format string.
/// Example: "YYYY-MM-DD HH:mm" -> "%Y-%m-%d %H:%M"
pub fn to_chrono_pattern(pattern: &str) -> String {
    const TOKENS: &[(&str, &str)] = &[
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("A", "%p"),
    ];

    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;
    'outer: while !rest.is_empty() {
        for (token, replacement) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(replacement);
                rest = tail;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            if c == '%' {
                out.push_str("%%");
            } else {
                out.push(c);
            }
        }
        rest = chars.as_str();
    }
    out
}

/// Format a repository timestamp with a moment-style pattern, keeping the
/// timestamp's own offset. Unparseable input is returned unchanged.
/// Example: ("2024-03-15T14:02:26.123-05:00", "YYYY-MM-DD HH:mm") -> "2024-03-15 14:02"
pub fn format_with_pattern(value: &str, pattern: &str) -> String {
    let fmt = to_chrono_pattern(pattern);
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format(&fmt).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(&fmt).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(dt) = d.and_hms_opt(0, 0, 0) {
            return dt.format(&fmt).to_string();
        }
    }
    value.to_string()
}

/// Date part only, e.g. for vocabulary release dates.
/// Example: "2023-02-01T00:00:00-08:00" -> "2023-02-01"
pub fn format_date(value: &str) -> String {
    format_with_pattern(value, "YYYY-MM-DD")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_translation() {
        assert_eq!(to_chrono_pattern("YYYY-MM-DD HH:mm"), "%Y-%m-%d %H:%M");
        assert_eq!(to_chrono_pattern("DD.MM.YY"), "%d.%m.%y");
        assert_eq!(to_chrono_pattern("100%"), "100%%");
    }

    #[test]
    fn test_format_with_pattern() {
        assert_eq!(
            format_with_pattern("2024-03-15T14:02:26.123-05:00", "YYYY-MM-DD HH:mm"),
            "2024-03-15 14:02"
        );
        assert_eq!(
            format_with_pattern("2024-03-15T14:02:26", "HH:mm:ss"),
            "14:02:26"
        );
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_with_pattern("invalid", "YYYY"), "invalid");
        assert_eq!(format_date(""), "");
    }
}
