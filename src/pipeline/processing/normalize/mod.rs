pub mod normalizers;

use crate::common::types::{Match, RawEvent};
use normalizers::{
    ApiFootballNormalizer, FootballDataNormalizer, MatchNormalizer, TheSportsDbNormalizer,
};

/// The payload shape a source produces. Selected by the source that fetched
/// the data, so no shared code has to guess which provider an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderShape {
    TheSportsDb,
    ApiFootball,
    FootballData,
}

impl MatchNormalizer for ProviderShape {
    fn normalize(&self, raw: &RawEvent, league_override: Option<&str>) -> Match {
        match self {
            ProviderShape::TheSportsDb => TheSportsDbNormalizer.normalize(raw, league_override),
            ProviderShape::ApiFootball => ApiFootballNormalizer.normalize(raw, league_override),
            ProviderShape::FootballData => FootballDataNormalizer.normalize(raw, league_override),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::MatchStatus;
    use serde_json::json;

    #[test]
    fn test_every_shape_defaults_an_empty_payload() {
        let expected = Match {
            home_team: "Team A".into(),
            away_team: "Team B".into(),
            home_score: 0,
            away_score: 0,
            status: MatchStatus::NotStarted,
            league: "Football".into(),
            time: "TBD".into(),
        };
        for shape in [
            ProviderShape::TheSportsDb,
            ProviderShape::ApiFootball,
            ProviderShape::FootballData,
        ] {
            assert_eq!(shape.normalize(&json!({}), None), expected, "{shape:?}");
            assert_eq!(shape.normalize(&json!(null), None), expected, "{shape:?}");
            assert_eq!(shape.normalize(&json!([1, 2]), None), expected, "{shape:?}");
        }
    }
}
