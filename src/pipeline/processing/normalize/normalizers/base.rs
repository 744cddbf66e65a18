use crate::common::constants::{DEFAULT_AWAY_TEAM, DEFAULT_HOME_TEAM, DEFAULT_LEAGUE};
use crate::common::types::{Match, RawEvent};
use crate::pipeline::processing::status::StatusMapper;
use crate::pipeline::processing::time_format::format_time;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static LEADING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\+?(\d+)").expect("static regex"));

/// Base trait for provider-specific normalizers
pub trait MatchNormalizer {
    /// Map one raw provider event into a fully populated canonical match.
    /// Never fails: anything missing resolves to its documented default.
    fn normalize(&self, raw: &RawEvent, league_override: Option<&str>) -> Match;
}

/// Fields pulled out of a provider payload before defaults are applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub status_code: Option<String>,
    pub elapsed_minutes: Option<u32>,
    pub scheduled: Option<DateTime<Utc>>,
    pub league: Option<String>,
}

/// Shared extraction helpers
pub struct NormalizerUtils;

impl NormalizerUtils {
    /// First non-blank string found at any of the JSON pointers, in order
    pub fn text(data: &Value, pointers: &[&str]) -> Option<String> {
        pointers.iter().find_map(|p| {
            data.pointer(p)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        })
    }

    /// First non-negative count found at any of the JSON pointers
    pub fn count(data: &Value, pointers: &[&str]) -> Option<u32> {
        pointers
            .iter()
            .find_map(|p| data.pointer(p).and_then(Self::parse_count))
    }

    /// Accepts JSON numbers and numeric strings. Strings are read by their
    /// leading digits, so `"45+2"` is 45; negatives are rejected.
    pub fn parse_count(value: &Value) -> Option<u32> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && *f < u32::MAX as f64).map(|f| f as u32)),
            Value::String(s) => LEADING_DIGITS
                .captures(s)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse().ok()),
            _ => None,
        }
    }

    /// First parseable instant found at any of the JSON pointers
    pub fn instant(data: &Value, pointers: &[&str]) -> Option<DateTime<Utc>> {
        pointers.iter().find_map(|p| {
            data.pointer(p)
                .and_then(Value::as_str)
                .and_then(Self::parse_instant)
        })
    }

    /// RFC 3339, or a naive timestamp taken as UTC
    pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|naive| naive.and_utc())
    }

    /// Combine a separate date and clock time, taken as UTC
    pub fn date_and_time(date: &str, time: &str) -> Option<DateTime<Utc>> {
        let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
        let clock = NaiveTime::parse_from_str(time.trim(), "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M"))
            .ok()?;
        Some(day.and_time(clock).and_utc())
    }

    /// Apply canonical defaults, status mapping and time formatting
    pub fn assemble(
        fields: ExtractedFields,
        statuses: &StatusMapper,
        league_override: Option<&str>,
    ) -> Match {
        let code = fields.status_code.unwrap_or_default();
        let status = statuses.map(&code);
        let time = format_time(
            &status,
            statuses.is_half_time(&code),
            fields.elapsed_minutes,
            fields.scheduled,
        );

        let league = league_override
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .or(fields.league)
            .unwrap_or_else(|| DEFAULT_LEAGUE.to_string());

        Match {
            home_team: fields.home_team.unwrap_or_else(|| DEFAULT_HOME_TEAM.to_string()),
            away_team: fields.away_team.unwrap_or_else(|| DEFAULT_AWAY_TEAM.to_string()),
            home_score: fields.home_score.unwrap_or(0),
            away_score: fields.away_score.unwrap_or(0),
            status,
            league,
            time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::MatchStatus;
    use crate::pipeline::processing::status::API_FOOTBALL_STATUSES;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_parse_count() {
        assert_eq!(NormalizerUtils::parse_count(&json!(2)), Some(2));
        assert_eq!(NormalizerUtils::parse_count(&json!("3")), Some(3));
        assert_eq!(NormalizerUtils::parse_count(&json!("45+2")), Some(45));
        assert_eq!(NormalizerUtils::parse_count(&json!("75'")), Some(75));
        assert_eq!(NormalizerUtils::parse_count(&json!(-1)), None);
        assert_eq!(NormalizerUtils::parse_count(&json!("-1")), None);
        assert_eq!(NormalizerUtils::parse_count(&json!("abc")), None);
        assert_eq!(NormalizerUtils::parse_count(&json!(null)), None);
        assert_eq!(NormalizerUtils::parse_count(&json!(true)), None);
    }

    #[test]
    fn test_text_skips_blank_and_non_strings() {
        let data = json!({"a": "  ", "b": {"name": 5}, "c": " Arsenal "});
        assert_eq!(
            NormalizerUtils::text(&data, &["/a", "/b/name", "/c"]),
            Some("Arsenal".to_string())
        );
        assert_eq!(NormalizerUtils::text(&data, &["/missing"]), None);
    }

    #[test]
    fn test_parse_instant_variants() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 8, 15, 0, 0).unwrap();
        assert_eq!(NormalizerUtils::parse_instant("2025-03-08T15:00:00Z"), Some(expected));
        assert_eq!(NormalizerUtils::parse_instant("2025-03-08T16:00:00+01:00"), Some(expected));
        assert_eq!(NormalizerUtils::parse_instant("2025-03-08T15:00:00"), Some(expected));
        assert_eq!(NormalizerUtils::parse_instant("2025-03-08 15:00:00"), Some(expected));
        assert_eq!(NormalizerUtils::date_and_time("2025-03-08", "15:00:00"), Some(expected));
        assert_eq!(NormalizerUtils::parse_instant("tomorrow"), None);
    }

    #[test]
    fn test_assemble_defaults() {
        let m = NormalizerUtils::assemble(ExtractedFields::default(), &API_FOOTBALL_STATUSES, None);
        assert_eq!(m.home_team, "Team A");
        assert_eq!(m.away_team, "Team B");
        assert_eq!(m.home_score, 0);
        assert_eq!(m.away_score, 0);
        assert_eq!(m.status, MatchStatus::NotStarted);
        assert_eq!(m.league, "Football");
        assert_eq!(m.time, "TBD");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let fields = ExtractedFields {
            league: Some("Serie A".into()),
            ..Default::default()
        };
        let m = NormalizerUtils::assemble(fields, &API_FOOTBALL_STATUSES, Some("  "));
        assert_eq!(m.league, "Serie A");
    }
}
