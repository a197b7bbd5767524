use std::fmt;

use thiserror::Error;

/// Main error type for the mandrill library
#[derive(Error, Debug)]
pub enum MandrillError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors reported by the Mandrill API
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Network/HTTP errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("You must provide a Mandrill API key. Pass one explicitly, set MANDRILL_APIKEY, or write it to ~/.mandrill.key or /etc/mandrill.key")]
    MissingCredential,
}

/// Error names the Mandrill API is known to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    InvalidKey,
    PaymentRequired,
    UnknownTemplate,
    InvalidTemplate,
    UnknownMessage,
    InvalidTagName,
    InvalidReject,
    UnknownSender,
    UnknownUrl,
    UnknownWebhook,
    UnknownInboundDomain,
    UnknownExport,
    ServiceUnavailable,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 14] = [
        ErrorKind::Validation,
        ErrorKind::InvalidKey,
        ErrorKind::PaymentRequired,
        ErrorKind::UnknownTemplate,
        ErrorKind::InvalidTemplate,
        ErrorKind::UnknownMessage,
        ErrorKind::InvalidTagName,
        ErrorKind::InvalidReject,
        ErrorKind::UnknownSender,
        ErrorKind::UnknownUrl,
        ErrorKind::UnknownWebhook,
        ErrorKind::UnknownInboundDomain,
        ErrorKind::UnknownExport,
        ErrorKind::ServiceUnavailable,
    ];

    /// Look up the kind for an error name sent by the server.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The error name as it appears in the `name` field of an error body.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::InvalidKey => "Invalid_Key",
            ErrorKind::PaymentRequired => "PaymentRequired",
            ErrorKind::UnknownTemplate => "Unknown_Template",
            ErrorKind::InvalidTemplate => "Invalid_Template",
            ErrorKind::UnknownMessage => "Unknown_Message",
            ErrorKind::InvalidTagName => "Invalid_Tag_Name",
            ErrorKind::InvalidReject => "Invalid_Reject",
            ErrorKind::UnknownSender => "Unknown_Sender",
            ErrorKind::UnknownUrl => "Unknown_Url",
            ErrorKind::UnknownWebhook => "Unknown_Webhook",
            ErrorKind::UnknownInboundDomain => "Unknown_InboundDomain",
            ErrorKind::UnknownExport => "Unknown_Export",
            ErrorKind::ServiceUnavailable => "ServiceUnavailable",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// API-specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// A recognized error name, see [`ErrorKind`]
    #[error("{kind}: {message}")]
    Known { kind: ErrorKind, message: String },

    /// An error name this library does not know about
    #[error("{name}: {message}")]
    Other { name: String, message: String },

    /// The error body was not a Mandrill error object
    #[error("We received an unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// The recognized kind, if any.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ApiError::Known { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// The server message, or the raw body for unexpected errors.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Known { message, .. } | ApiError::Other { message, .. } => message,
            ApiError::Unexpected(body) => body,
        }
    }
}

/// Type alias for Results using MandrillError
pub type Result<T> = std::result::Result<T, MandrillError>;
