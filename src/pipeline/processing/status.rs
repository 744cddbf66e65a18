use crate::common::types::MatchStatus;

/// One provider's status vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMapper {
    pub live: &'static [&'static str],
    pub finished: &'static [&'static str],
    pub not_started: &'static [&'static str],
    pub half_time: &'static [&'static str],
}

pub const THESPORTSDB_STATUSES: StatusMapper = StatusMapper {
    live: &["1H", "2H", "HT", "ET", "BT", "P", "Live", "LIVE", "In Progress"],
    finished: &["FT", "AET", "PEN", "Match Finished"],
    not_started: &["NS", "TBD", "SUSP", "PST", "CANC", "Not Started"],
    half_time: &["HT"],
};

pub const API_FOOTBALL_STATUSES: StatusMapper = StatusMapper {
    live: &["1H", "2H", "HT", "ET", "BT", "P", "LIVE"],
    finished: &["FT", "AET", "PEN"],
    not_started: &["NS", "TBD", "SUSP", "PST", "CANC"],
    half_time: &["HT"],
};

pub const FOOTBALL_DATA_STATUSES: StatusMapper = StatusMapper {
    live: &["IN_PLAY", "PAUSED", "LIVE"],
    finished: &["FINISHED"],
    not_started: &["SCHEDULED", "TIMED", "SUSPENDED", "POSTPONED", "CANCELLED"],
    half_time: &["PAUSED"],
};

impl StatusMapper {
    /// Translate a provider code into a canonical status. Total: an absent
    /// code means the match has not started, an unknown one passes through.
    pub fn map(&self, code: &str) -> MatchStatus {
        let code = code.trim();
        if code.is_empty() {
            return MatchStatus::NotStarted;
        }
        if self.live.contains(&code) {
            MatchStatus::Live
        } else if self.finished.contains(&code) {
            MatchStatus::Finished
        } else if self.not_started.contains(&code) {
            MatchStatus::NotStarted
        } else {
            MatchStatus::Other(code.to_string())
        }
    }

    pub fn is_half_time(&self, code: &str) -> bool {
        self.half_time.contains(&code.trim())
    }
}
