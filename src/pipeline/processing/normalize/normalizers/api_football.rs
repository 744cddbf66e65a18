use super::base::{ExtractedFields, MatchNormalizer, NormalizerUtils};
use crate::common::types::{Match, RawEvent};
use crate::pipeline::processing::status::API_FOOTBALL_STATUSES;

/// Normalizer for API-Football v3 fixtures.
/// The full-time score object wins; live fixtures fall back to `goals`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApiFootballNormalizer;

impl ApiFootballNormalizer {
    pub fn extract(raw: &RawEvent) -> ExtractedFields {
        ExtractedFields {
            home_team: NormalizerUtils::text(raw, &["/teams/home/name"]),
            away_team: NormalizerUtils::text(raw, &["/teams/away/name"]),
            home_score: NormalizerUtils::count(raw, &["/score/fulltime/home", "/goals/home"]),
            away_score: NormalizerUtils::count(raw, &["/score/fulltime/away", "/goals/away"]),
            status_code: NormalizerUtils::text(raw, &["/fixture/status/short"]),
            elapsed_minutes: NormalizerUtils::count(raw, &["/fixture/status/elapsed"]),
            scheduled: NormalizerUtils::instant(raw, &["/fixture/date"]),
            league: NormalizerUtils::text(raw, &["/league/name"]),
        }
    }
}

impl MatchNormalizer for ApiFootballNormalizer {
    fn normalize(&self, raw: &RawEvent, league_override: Option<&str>) -> Match {
        NormalizerUtils::assemble(Self::extract(raw), &API_FOOTBALL_STATUSES, league_override)
    }
}
