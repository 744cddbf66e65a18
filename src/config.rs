use crate::common::constants::{
    get_supported_apis, API_FOOTBALL_KEY_ENV, DEFAULT_CAPACITY, DEFAULT_USER_AGENT,
    FOOTBALL_DATA_TOKEN_ENV, SPORTS_API_KEY_ENV, THESPORTSDB_DEFAULT_KEY,
};
use crate::common::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fallback order; the first provider that yields events wins
    pub providers: Vec<String>,
    /// Maximum number of unique matches in the report. Also caps the sample
    /// fallback, so a value below the bundled sample size (20) shortens it.
    pub capacity: usize,
    pub user_agent: String,
    pub thesportsdb: TheSportsDbConfig,
    pub api_football: ApiFootballConfig,
    pub football_data: FootballDataConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TheSportsDbConfig {
    pub base_url: String,
    /// Pause between consecutive calls
    pub delay_ms: u64,
    /// Today's fixtures are fetched only when live scores yielded fewer events
    pub min_events: usize,
    pub leagues: Vec<LeagueConfig>,
    /// How many of `leagues` (from the front) get a today's-fixtures call
    pub fixture_leagues: usize,
    /// Cap on supplementary fixtures appended
    pub fixtures_limit: usize,
    /// Never read from the file; see [`Config::with_env_credentials`]
    #[serde(skip)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeagueConfig {
    pub id: String,
    pub name: String,
}

impl LeagueConfig {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiFootballConfig {
    pub base_url: String,
    pub delay_ms: u64,
    pub min_events: usize,
    #[serde(skip)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FootballDataConfig {
    pub base_url: String,
    pub delay_ms: u64,
    pub min_events: usize,
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            providers: get_supported_apis().into_iter().map(String::from).collect(),
            capacity: DEFAULT_CAPACITY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            thesportsdb: TheSportsDbConfig::default(),
            api_football: ApiFootballConfig::default(),
            football_data: FootballDataConfig::default(),
        }
    }
}

impl Default for TheSportsDbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.thesportsdb.com/api/v1/json".to_string(),
            delay_ms: 500,
            min_events: 30,
            leagues: vec![
                LeagueConfig::new("4328", "English Premier League"),
                LeagueConfig::new("4335", "Spanish La Liga"),
                LeagueConfig::new("4331", "German Bundesliga"),
                LeagueConfig::new("4332", "Italian Serie A"),
                LeagueConfig::new("4334", "French Ligue 1"),
                LeagueConfig::new("4480", "UEFA Champions League"),
                LeagueConfig::new("4481", "UEFA Europa League"),
                LeagueConfig::new("4346", "Portuguese Liga"),
                LeagueConfig::new("4344", "Dutch Eredivisie"),
                LeagueConfig::new("4351", "Brazilian Serie A"),
                LeagueConfig::new("4356", "Argentine Primera"),
                LeagueConfig::new("4370", "Mexican Liga MX"),
            ],
            fixture_leagues: 6,
            fixtures_limit: 20,
            api_key: None,
        }
    }
}

impl Default for ApiFootballConfig {
    fn default() -> Self {
        Self {
            base_url: "https://v3.football.api-sports.io".to_string(),
            delay_ms: 1000,
            min_events: 20,
            api_key: None,
        }
    }
}

impl Default for FootballDataConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.football-data.org/v4".to_string(),
            delay_ms: 1000,
            min_events: 20,
            api_key: None,
        }
    }
}

impl Config {
    /// Load `path` if it exists; a missing file means all defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let config_content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&config_content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(ScraperError::Config("capacity must be at least 1".into()));
        }
        Ok(())
    }

    /// Warning text when `capacity` would cut the sample fallback short
    pub fn capacity_warning(&self, sample_len: usize) -> Option<String> {
        (self.capacity < sample_len).then(|| {
            format!(
                "capacity {} is below the {} sample matches; the sample fallback will be truncated",
                self.capacity, sample_len
            )
        })
    }

    /// Layer provider credentials from the environment on top of the file settings
    pub fn with_env_credentials(self) -> Self {
        self.with_credentials(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::with_env_credentials`] with an explicit lookup
    pub fn with_credentials(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        self.thesportsdb.api_key =
            Some(read(SPORTS_API_KEY_ENV).unwrap_or_else(|| THESPORTSDB_DEFAULT_KEY.to_string()));
        self.api_football.api_key = read(API_FOOTBALL_KEY_ENV);
        self.football_data.api_key = read(FOOTBALL_DATA_TOKEN_ENV);
        self
    }
}
