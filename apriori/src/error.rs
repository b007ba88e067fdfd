/// Configuration errors. Raised before any mining starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("min_support must be a positive integer, got {value}")]
    InvalidMinSupport { value: i64 },

    #[error("top_k must be a positive integer, got {value}")]
    InvalidTopK { value: i64 },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Report rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
