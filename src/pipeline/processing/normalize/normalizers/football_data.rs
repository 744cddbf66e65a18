use super::base::{ExtractedFields, MatchNormalizer, NormalizerUtils};
use crate::common::types::{Match, RawEvent};
use crate::pipeline::processing::status::FOOTBALL_DATA_STATUSES;

/// Normalizer for football-data.org v4 matches.
///
/// Team and competition are objects upstream but some relays flatten them
/// to plain strings, so both forms are read. Scores prefer
/// `score.fullTime`, then a flat `score.home`/`score.away`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FootballDataNormalizer;

impl FootballDataNormalizer {
    pub fn extract(raw: &RawEvent) -> ExtractedFields {
        ExtractedFields {
            home_team: NormalizerUtils::text(
                raw,
                &["/homeTeam/name", "/homeTeam/shortName", "/homeTeam"],
            ),
            away_team: NormalizerUtils::text(
                raw,
                &["/awayTeam/name", "/awayTeam/shortName", "/awayTeam"],
            ),
            home_score: NormalizerUtils::count(raw, &["/score/fullTime/home", "/score/home"]),
            away_score: NormalizerUtils::count(raw, &["/score/fullTime/away", "/score/away"]),
            status_code: NormalizerUtils::text(raw, &["/status"]),
            elapsed_minutes: NormalizerUtils::count(raw, &["/minute"]),
            scheduled: NormalizerUtils::instant(raw, &["/utcDate"]),
            league: NormalizerUtils::text(raw, &["/competition/name", "/competition"]),
        }
    }
}

impl MatchNormalizer for FootballDataNormalizer {
    fn normalize(&self, raw: &RawEvent, league_override: Option<&str>) -> Match {
        NormalizerUtils::assemble(Self::extract(raw), &FOOTBALL_DATA_STATUSES, league_override)
    }
}
