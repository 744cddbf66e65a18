/// Provider name constants to ensure consistency across the codebase.
/// These are the names used in `config.toml` and in the report's `source` tag.
pub const THESPORTSDB_API: &str = "thesportsdb";
pub const API_FOOTBALL_API: &str = "api_football";
pub const FOOTBALL_DATA_API: &str = "football_data";

// Report source tags for the degraded paths
pub const SAMPLE_SOURCE: &str = "sample";
pub const FALLBACK_SOURCE: &str = "fallback";

// Canonical defaults applied when a provider payload lacks a field
pub const DEFAULT_HOME_TEAM: &str = "Team A";
pub const DEFAULT_AWAY_TEAM: &str = "Team B";
pub const DEFAULT_LEAGUE: &str = "Football";
pub const TIME_TBD: &str = "TBD";
pub const TIME_LIVE: &str = "Live";
pub const TIME_HALF_TIME: &str = "HT";
pub const TIME_FULL_TIME: &str = "90'";

// Files
pub const OUTPUT_PATH: &str = "live-scores.json";
pub const CONFIG_PATH: &str = "config.toml";
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "live_scores.log";

/// Maximum number of unique matches in a report
pub const DEFAULT_CAPACITY: usize = 50;

// Credential environment variables
pub const SPORTS_API_KEY_ENV: &str = "SPORTS_API_KEY";
pub const API_FOOTBALL_KEY_ENV: &str = "API_FOOTBALL_KEY";
pub const FOOTBALL_DATA_TOKEN_ENV: &str = "FOOTBALL_DATA_TOKEN";

/// TheSportsDB's public test key, used when `SPORTS_API_KEY` is unset.
pub const THESPORTSDB_DEFAULT_KEY: &str = "123";

pub const DEFAULT_USER_AGENT: &str = concat!("live_scores/", env!("CARGO_PKG_VERSION"));

/// Get all supported provider names, in default fallback order
pub fn get_supported_apis() -> Vec<&'static str> {
    vec![API_FOOTBALL_API, FOOTBALL_DATA_API, THESPORTSDB_API]
}
