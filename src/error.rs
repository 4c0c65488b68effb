use thiserror::Error;

/// Error taxonomy for the tool pipeline.
///
/// Every variant resolves to a user-facing string via [`AppError::user_message`]
/// at the tool boundary; nothing propagates past a tool invocation except
/// startup failures surfaced from `main`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The secret key is empty or whitespace-only. No request is attempted.
    #[error("Missing Korastats API key")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Config(String),

    /// A mandatory tool parameter was not supplied.
    #[error("Required parameter {name} is missing")]
    MissingParam { name: &'static str },

    /// A tool parameter failed integer parsing. Carries the raw value so the
    /// returned message can name it.
    #[error("Invalid {name} value: {value}")]
    InvalidParam { name: &'static str, value: String },

    // Transport failures
    #[error("Network timeout while contacting {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    /// Non-2xx response from the upstream, carries the numeric status code.
    #[error("API request failed with status {status}")]
    HttpStatus { status: u16 },

    /// Response body was not valid JSON.
    #[error("API returned malformed JSON: {message}")]
    MalformedBody { message: String },

    /// The envelope success flag was false or absent; carries the upstream
    /// message when one was provided.
    #[error("Korastats API returned an error: {message}")]
    Application { message: String },

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Server error: {0}")]
    Serve(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing-parameter validation error
    pub fn missing_param(name: &'static str) -> Self {
        Self::MissingParam { name }
    }

    /// Create an invalid-parameter validation error carrying the raw value
    pub fn invalid_param(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParam {
            name,
            value: value.into(),
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

    /// Create an HTTP status error for a non-2xx response
    pub fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    /// Create a malformed-body error
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Create an upstream application error from an envelope message
    pub fn application(message: impl Into<String>) -> Self {
        Self::Application {
            message: message.into(),
        }
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// True when no network call was (or would have been) issued for this error.
    pub fn is_pre_request(&self) -> bool {
        matches!(
            self,
            AppError::MissingApiKey
                | AppError::Config(_)
                | AppError::MissingParam { .. }
                | AppError::InvalidParam { .. }
        )
    }

    /// Resolve this error to the ❌-prefixed string returned by every tool.
    ///
    /// The prefix and wording are part of the observable contract: validation
    /// and transport failures read `❌ Error: ...`, while upstream rejections
    /// (HTTP status or envelope failure) read `❌ API Error: ...`.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingApiKey => {
                "❌ Error: Missing Korastats API key. Set KORASTATS_API_KEY.".to_string()
            }
            AppError::MissingParam { name } => format!("❌ Error: {name} is required."),
            AppError::InvalidParam { name, value } => {
                format!("❌ Error: Invalid {name} value: {value}")
            }
            AppError::HttpStatus { status } => format!("❌ API Error: {status}"),
            AppError::MalformedBody { .. } => {
                "❌ Error: Received invalid JSON from Korastats.".to_string()
            }
            AppError::Application { message } => format!("❌ API Error: {message}"),
            other => format!("❌ Error: {other}"),
        }
    }
}
