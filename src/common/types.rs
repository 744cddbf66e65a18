use crate::common::constants::{FALLBACK_SOURCE, TIME_LIVE};
use crate::common::error::Result;
use crate::pipeline::processing::normalize::ProviderShape;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw event data as returned from a provider. Only the normalizers look inside.
pub type RawEvent = serde_json::Value;

/// One raw event plus the league the fetcher knows it belongs to, if it
/// queried a named competition explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedEvent {
    pub payload: RawEvent,
    pub league: Option<String>,
}

impl FetchedEvent {
    pub fn new(payload: RawEvent) -> Self {
        Self { payload, league: None }
    }

    pub fn with_league(payload: RawEvent, league: impl Into<String>) -> Self {
        Self {
            payload,
            league: Some(league.into()),
        }
    }
}

/// Canonical match status. Codes no provider vocabulary recognizes are
/// surfaced unchanged through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchStatus {
    Live,
    Finished,
    NotStarted,
    Other(String),
}

impl MatchStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MatchStatus::Live => TIME_LIVE,
            MatchStatus::Finished => "FT",
            MatchStatus::NotStarted => "Not Started",
            MatchStatus::Other(raw) => raw,
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for MatchStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Live" => MatchStatus::Live,
            "FT" => MatchStatus::Finished,
            "Not Started" => MatchStatus::NotStarted,
            _ => MatchStatus::Other(value),
        }
    }
}

impl From<MatchStatus> for String {
    fn from(value: MatchStatus) -> Self {
        match value {
            MatchStatus::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// The canonical match record written to the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub status: MatchStatus,
    pub league: String,
    pub time: String,
}

impl Match {
    /// Deduplication identity. League only takes part when the producing
    /// source enumerated leagues itself.
    pub fn key(&self, by_league: bool) -> MatchKey {
        MatchKey {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            league: by_league.then(|| self.league.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub home_team: String,
    pub away_team: String,
    pub league: Option<String>,
}

/// The persisted artifact of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub success: bool,
    pub matches: Vec<Match>,
    pub last_updated: DateTime<Utc>,
    pub source: String,
    pub total_matches: usize,
    pub live_matches: usize,
    pub finished_matches: usize,
    pub upcoming_matches: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    /// Build a successful report, deriving the counters from `matches`
    pub fn from_matches(matches: Vec<Match>, source: &str) -> Self {
        let count = |status: MatchStatus| matches.iter().filter(|m| m.status == status).count();
        let live_matches = count(MatchStatus::Live);
        let finished_matches = count(MatchStatus::Finished);
        let upcoming_matches = count(MatchStatus::NotStarted);

        Self {
            success: true,
            total_matches: matches.len(),
            matches,
            last_updated: Utc::now(),
            source: source.to_string(),
            live_matches,
            finished_matches,
            upcoming_matches,
            error: None,
        }
    }

    /// The report written when the sample fallback itself failed. `matches`
    /// is whatever could still be salvaged from the sample set.
    pub fn terminal(message: impl Into<String>, matches: Vec<Match>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            ..Self::from_matches(matches, FALLBACK_SOURCE)
        }
    }
}

/// Core trait that every upstream provider must implement
#[async_trait::async_trait]
pub trait MatchSource: Send + Sync {
    /// Unique identifier for this provider; also the report's `source` tag
    fn source_name(&self) -> &'static str;

    /// Which payload parser understands this provider's events
    fn shape(&self) -> ProviderShape;

    /// Whether the league takes part in the dedupe key for this provider
    fn keys_by_league(&self) -> bool {
        false
    }

    /// Run the provider's call plan and return every raw event collected
    async fn fetch(&self) -> Result<Vec<FetchedEvent>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match(status: MatchStatus) -> Match {
        Match {
            home_team: "Ajax".into(),
            away_team: "PSV".into(),
            home_score: 0,
            away_score: 2,
            status,
            league: "Eredivisie".into(),
            time: "90'".into(),
        }
    }

    #[test]
    fn status_serializes_as_plain_strings() {
        let m = sample_match(MatchStatus::NotStarted);
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["status"], "Not Started");
        assert_eq!(value["homeTeam"], "Ajax");

        let other = serde_json::to_value(MatchStatus::Other("ABD".into())).unwrap();
        assert_eq!(other, "ABD");

        let back: MatchStatus = serde_json::from_value(serde_json::json!("FT")).unwrap();
        assert_eq!(back, MatchStatus::Finished);
    }

    #[test]
    fn report_counts_only_canonical_statuses() {
        let report = Report::from_matches(
            vec![
                sample_match(MatchStatus::Live),
                sample_match(MatchStatus::Finished),
                sample_match(MatchStatus::Finished),
                sample_match(MatchStatus::NotStarted),
                sample_match(MatchStatus::Other("ABD".into())),
            ],
            "thesportsdb",
        );
        assert!(report.success);
        assert_eq!(report.total_matches, 5);
        assert_eq!(report.live_matches, 1);
        assert_eq!(report.finished_matches, 2);
        assert_eq!(report.upcoming_matches, 1);
        assert!(report.error.is_none());
    }

    #[test]
    fn terminal_report_is_flagged_and_counts_salvage() {
        let report = Report::terminal("boom", Vec::new());
        assert!(!report.success);
        assert_eq!(report.source, "fallback");
        assert_eq!(report.total_matches, 0);
        assert!(report.matches.is_empty());
        assert_eq!(report.error.as_deref(), Some("boom"));

        let salvaged = Report::terminal(
            "boom",
            vec![sample_match(MatchStatus::Live), sample_match(MatchStatus::Finished)],
        );
        assert!(!salvaged.success);
        assert_eq!(salvaged.source, "fallback");
        assert_eq!(salvaged.total_matches, 2);
        assert_eq!(salvaged.live_matches, 1);
        assert_eq!(salvaged.finished_matches, 1);
    }

    #[test]
    fn key_includes_league_only_on_request() {
        let m = sample_match(MatchStatus::Live);
        assert_eq!(m.key(false).league, None);
        assert_eq!(m.key(true).league.as_deref(), Some("Eredivisie"));
    }
}
