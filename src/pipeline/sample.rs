use crate::common::error::{Result, ScraperError};
use crate::common::types::Match;
use crate::pipeline::processing::normalize::normalizers::MatchNormalizer;
use crate::pipeline::processing::normalize::ProviderShape;
use crate::pipeline::processing::status::THESPORTSDB_STATUSES;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

const BUNDLED_SAMPLE: &str = include_str!("../../data/sample_matches.json");

/// Static matches substituted when no provider yields anything. Unlike
/// provider payloads this is read strictly: a bad record is an error.
#[derive(Debug, Clone)]
pub struct SampleData {
    raw: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SampleRecord {
    str_home_team: String,
    str_away_team: String,
    int_home_score: String,
    int_away_score: String,
    str_status: String,
    str_league: String,
    str_progress: String,
}

impl SampleData {
    /// The sample set shipped with the binary
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_SAMPLE)
    }

    pub fn from_json(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Parse the sample set into canonical matches
    pub fn matches(&self) -> Result<Vec<Match>> {
        let records: Vec<SampleRecord> = serde_json::from_str(&self.raw)
            .map_err(|e| ScraperError::Sample(format!("invalid sample JSON: {e}")))?;
        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| Self::to_match(i, record))
            .collect()
    }

    /// Lenient read for the terminal report: every record of a JSON array is
    /// run through the TheSportsDB normalizer, defaults and all. Text that
    /// is not a JSON array salvages nothing.
    pub fn salvage(&self) -> Vec<Match> {
        match serde_json::from_str::<Value>(&self.raw) {
            Ok(Value::Array(records)) => records
                .iter()
                .map(|record| ProviderShape::TheSportsDb.normalize(record, None))
                .collect(),
            Ok(_) => {
                warn!("Sample data is not a list, nothing to salvage");
                Vec::new()
            }
            Err(e) => {
                warn!("Sample data is not JSON, nothing to salvage: {}", e);
                Vec::new()
            }
        }
    }

    fn to_match(index: usize, record: SampleRecord) -> Result<Match> {
        let score = |field: &str, value: &str| {
            value.trim().parse::<u32>().map_err(|_| {
                ScraperError::Sample(format!("record {index}: {field} '{value}' is not a score"))
            })
        };
        if record.str_home_team.trim().is_empty() || record.str_away_team.trim().is_empty() {
            return Err(ScraperError::Sample(format!("record {index}: missing team name")));
        }

        Ok(Match {
            home_score: score("intHomeScore", &record.int_home_score)?,
            away_score: score("intAwayScore", &record.int_away_score)?,
            home_team: record.str_home_team,
            away_team: record.str_away_team,
            status: THESPORTSDB_STATUSES.map(&record.str_status),
            league: record.str_league,
            time: record.str_progress,
        })
    }
}
