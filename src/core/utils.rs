use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// ISO-8601 in UTC, the shape page payloads expose as `created_at`
pub fn datetime_to_string(datetime: DateTime<FixedOffset>) -> String {
    datetime
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Slugs are the public lookup key: lowercase ASCII, digits, single dashes.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_datetime_to_string_is_utc() {
        let offset = FixedOffset::east_opt(7 * 60 * 60).unwrap();
        let datetime = offset.with_ymd_and_hms(2024, 3, 1, 7, 30, 0).unwrap();
        assert_eq!(datetime_to_string(datetime), "2024-03-01T00:30:00.000Z");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("evergreen-brand-identity"));
        assert!(is_valid_slug("x"));
        assert!(is_valid_slug("poster-2024"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Evergreen"));
        assert!(!is_valid_slug("-lead"));
        assert!(!is_valid_slug("trail-"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug("with space"));
    }
}
