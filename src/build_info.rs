use chrono::{DateTime, Datelike, Utc};

const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn build_time() -> Option<DateTime<Utc>> {
    parse(BUILD_TIME)
}

fn parse(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| log::warn!("couldn't parse build time {raw:?}: {e}"))
        .ok()
}

/// Month the site was built, e.g. "March 2025".
pub fn last_updated() -> Option<String> {
    build_time().map(|t| t.format("%B %Y").to_string())
}

pub fn copyright_year() -> i32 {
    build_time().unwrap_or_else(Utc::now).year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_is_stamped() {
        assert!(build_time().is_some());
        assert!(last_updated().is_some());
        assert!(copyright_year() >= 2024);
    }

    #[test]
    fn test_parse() {
        let t = parse("2025-03-14T09:26:53+00:00").expect("valid rfc3339");
        assert_eq!(t.format("%B %Y").to_string(), "March 2025");
        assert!(parse("yesterday").is_none());
    }
}
