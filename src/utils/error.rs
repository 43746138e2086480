use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    StatusError { status: u16, url: String },

    #[error("Pokémon not found: {query}")]
    NotFoundError { query: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

impl PokedexError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PokedexError::ApiError(_)
            | PokedexError::StatusError { .. }
            | PokedexError::NotFoundError { .. } => ErrorCategory::Network,
            PokedexError::SerializationError(_) => ErrorCategory::Data,
            PokedexError::ConfigError { .. }
            | PokedexError::ConfigValidationError { .. }
            | PokedexError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PokedexError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::NotFoundError { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PokedexError::ApiError(e) if e.is_timeout() => {
                "The Pokébuild API did not answer in time".to_string()
            }
            PokedexError::ApiError(_) => "Could not reach the Pokébuild API".to_string(),
            PokedexError::StatusError { status, .. } => {
                format!("The Pokébuild API answered with status {}", status)
            }
            PokedexError::NotFoundError { query } => format!("No Pokémon named '{}'", query),
            PokedexError::SerializationError(_) => {
                "The Pokébuild API returned data in an unexpected shape".to_string()
            }
            PokedexError::IoError(e) => format!("System error: {}", e),
            PokedexError::ConfigError { .. }
            | PokedexError::ConfigValidationError { .. }
            | PokedexError::InvalidConfigValueError { .. } => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the api.base_url setting",
            ErrorCategory::Data => "Check that api.base_url points at the Pokébuild v1 API",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::System => "Check file permissions and that the terminal supports raw mode",
        }
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
