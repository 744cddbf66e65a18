use super::base::{ExtractedFields, MatchNormalizer, NormalizerUtils};
use crate::common::types::{Match, RawEvent};
use crate::pipeline::processing::status::THESPORTSDB_STATUSES;

/// Normalizer for TheSportsDB events (`livescore.php`, `eventsday.php`).
/// Flat `str*`/`int*` fields; scores usually arrive as strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TheSportsDbNormalizer;

impl TheSportsDbNormalizer {
    pub fn extract(raw: &RawEvent) -> ExtractedFields {
        let scheduled = NormalizerUtils::instant(raw, &["/strTimestamp"]).or_else(|| {
            let date = NormalizerUtils::text(raw, &["/dateEvent"])?;
            let time = NormalizerUtils::text(raw, &["/strTime"])?;
            NormalizerUtils::date_and_time(&date, &time)
        });

        ExtractedFields {
            home_team: NormalizerUtils::text(raw, &["/strHomeTeam"]),
            away_team: NormalizerUtils::text(raw, &["/strAwayTeam"]),
            home_score: NormalizerUtils::count(raw, &["/intHomeScore"]),
            away_score: NormalizerUtils::count(raw, &["/intAwayScore"]),
            status_code: NormalizerUtils::text(raw, &["/strStatus"]),
            elapsed_minutes: NormalizerUtils::count(raw, &["/strProgress"]),
            scheduled,
            league: NormalizerUtils::text(raw, &["/strLeague"]),
        }
    }
}

impl MatchNormalizer for TheSportsDbNormalizer {
    fn normalize(&self, raw: &RawEvent, league_override: Option<&str>) -> Match {
        NormalizerUtils::assemble(Self::extract(raw), &THESPORTSDB_STATUSES, league_override)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::MatchStatus;
    use serde_json::json;

    #[test]
    fn test_live_event_with_league_override() {
        let raw = json!({
            "idEvent": "2052711",
            "strHomeTeam": "Liverpool",
            "strAwayTeam": "Arsenal",
            "intHomeScore": "2",
            "intAwayScore": "1",
            "strStatus": "2H",
            "strProgress": "75",
            "strLeague": "EPL"
        });
        let m = TheSportsDbNormalizer.normalize(&raw, Some("English Premier League"));
        assert_eq!(m.home_team, "Liverpool");
        assert_eq!(m.away_team, "Arsenal");
        assert_eq!(m.home_score, 2);
        assert_eq!(m.away_score, 1);
        assert_eq!(m.status, MatchStatus::Live);
        assert_eq!(m.league, "English Premier League");
        assert_eq!(m.time, "75'");
    }

    #[test]
    fn test_finished_and_half_time() {
        let ft = json!({"strStatus": "FT", "strProgress": "94", "intHomeScore": 3, "intAwayScore": null});
        let m = TheSportsDbNormalizer.normalize(&ft, None);
        assert_eq!(m.status, MatchStatus::Finished);
        assert_eq!(m.time, "90'");
        assert_eq!(m.home_score, 3);
        assert_eq!(m.away_score, 0);

        let ht = json!({"strStatus": "HT", "strProgress": "45"});
        assert_eq!(TheSportsDbNormalizer.normalize(&ht, None).time, "HT");
    }

    #[test]
    fn test_fixture_extracts_kickoff() {
        let raw = json!({
            "strHomeTeam": "Lyon",
            "strAwayTeam": "Monaco",
            "intHomeScore": null,
            "strStatus": "Not Started",
            "dateEvent": "2025-03-08",
            "strTime": "20:00:00"
        });
        let fields = TheSportsDbNormalizer::extract(&raw);
        assert_eq!(
            fields.scheduled.map(|s| s.to_rfc3339()),
            Some("2025-03-08T20:00:00+00:00".to_string())
        );
        let m = TheSportsDbNormalizer.normalize(&raw, None);
        assert_eq!(m.status, MatchStatus::NotStarted);
        assert_ne!(m.time, "TBD");
    }

    #[test]
    fn test_unknown_status_passes_through() {
        let raw = json!({"strStatus": "Abandoned"});
        let m = TheSportsDbNormalizer.normalize(&raw, None);
        assert_eq!(m.status, MatchStatus::Other("Abandoned".into()));
        assert_eq!(m.time, "TBD");
    }
}
