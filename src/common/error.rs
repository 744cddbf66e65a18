use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {message}")]
    Api { message: String },

    /// A provider call plan failed; the pipeline moves on to the next source.
    #[error("fetch from {provider} failed: {source}")]
    Fetch {
        provider: String,
        #[source]
        source: Box<ScraperError>,
    },

    #[error("sample data unusable: {0}")]
    Sample(String),
}

impl ScraperError {
    pub fn fetch(provider: &str, cause: ScraperError) -> Self {
        ScraperError::Fetch {
            provider: provider.to_string(),
            source: Box::new(cause),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScraperError>;
