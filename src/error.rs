use thiserror::Error;

/// Main error type for perf-recap
#[derive(Error, Debug)]
pub enum PerfRecapError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// HTTP/API errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Linear API errors, including errors embedded in a 200 response body
    #[error("Linear API error: {0}")]
    LinearApi(String),

    /// Gemini API errors
    #[error("Gemini API error: {0}")]
    GeminiApi(String),

    /// Invalid date range
    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    /// Generation requested with no issues and no documents held
    #[error("Nothing to summarize: fetch Linear issues or add performance docs first")]
    NothingToSummarize,

    /// Missing configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Regex errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias for perf-recap operations
pub type Result<T> = std::result::Result<T, PerfRecapError>;

impl PerfRecapError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new Linear API error
    pub fn linear_api<S: Into<String>>(msg: S) -> Self {
        Self::LinearApi(msg.into())
    }

    /// Create a new Gemini API error
    pub fn gemini_api<S: Into<String>>(msg: S) -> Self {
        Self::GeminiApi(msg.into())
    }
}
