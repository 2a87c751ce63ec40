use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Upstream status classification
    #[error("The MiLB API is actively refusing the connection (403): {url}")]
    AccessDenied { url: String },

    #[error("Could not get data from the MiLB API (HTTP {status}): {url}")]
    UpstreamUnavailable { status: u16, url: String },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    // Closed vocabularies and required fields in upstream documents
    #[error("Unexpected upstream schema in {context}: {message}")]
    SchemaViolation { context: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid argument error (bad season, level, stat type...)
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an access denied error (HTTP 403)
    pub fn access_denied(url: impl Into<String>) -> Self {
        Self::AccessDenied { url: url.into() }
    }

    /// Create an upstream unavailable error (any non-200 status other than 403)
    pub fn upstream_unavailable(status: u16, url: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            status,
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a schema violation error
    pub fn schema_violation(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Check if the error should stop a whole batch instead of skipping one entity.
    ///
    /// A 403 means the API is refusing this client; every following request
    /// would be refused as well.
    pub fn is_batch_fatal(&self) -> bool {
        matches!(self, AppError::AccessDenied { .. })
    }
}
