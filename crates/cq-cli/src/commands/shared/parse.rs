use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an RFC 3339 timestamp; `now` means the current time.
pub fn parse_timestamp(raw: &str, field: &str) -> anyhow::Result<DateTime<Utc>> {
    if raw.eq_ignore_ascii_case("now") {
        return Ok(Utc::now());
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use chrono::{TimeZone, Utc};
    use cq_core::enums::{EntityType, TieBreak};

    use super::{parse_enum, parse_timestamp};

    #[test]
    fn parses_snake_case_enum() {
        let tie_break: TieBreak = parse_enum("latest", "tie-break").expect("should parse");
        assert_eq!(tie_break, TieBreak::Latest);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<EntityType>("judgement", "type").expect_err("should fail");
        assert!(err.to_string().contains("invalid type 'judgement'"));
    }

    #[test]
    fn parses_rfc3339_in_any_offset() {
        let parsed = parse_timestamp("2026-03-01T11:00:00+02:00", "found").expect("should parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage_timestamp() {
        let err = parse_timestamp("yesterday", "found").expect_err("should fail");
        assert!(err.to_string().contains("invalid found 'yesterday'"));
    }
}
