//! Error types for clarity360

use thiserror::Error;

/// Reasons a draft is rejected before anything is sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Description is shorter than the required minimum
    #[error("description must be at least {min} characters (got {actual})")]
    DescriptionTooShort {
        /// Required minimum
        min: usize,
        /// Characters provided
        actual: usize,
    },

    /// More attachments than the form accepts
    #[error("at most {max} attachments allowed (got {actual})")]
    TooManyAttachments {
        /// Maximum accepted
        max: usize,
        /// Attachments selected
        actual: usize,
    },

    /// An attachment exceeds the size limit
    #[error("{name} is {size} bytes; the limit is {max} bytes")]
    AttachmentTooLarge {
        /// File name
        name: String,
        /// File size in bytes
        size: u64,
        /// Limit in bytes
        max: u64,
    },

    /// An attachment has an extension the service does not accept
    #[error("{name} is not a supported file type (accepted: {accepted})")]
    UnsupportedFileType {
        /// File name
        name: String,
        /// Human-readable list of accepted extensions
        accepted: String,
    },
}

/// Errors returned by clarity360 operations
#[derive(Error, Debug)]
pub enum Error {
    /// Draft failed client-side validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transport failure (connection refused, timeout, TLS)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned {status}: {body}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Reading an attachment from disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing or parsing JSON failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Status value not offered by the status selector
    #[error("unknown status '{0}' (expected one of: pending, In Progress, Resolved, closed)")]
    UnknownStatus(String),

    /// Catalog value (concern type or department) not recognized
    #[error("unknown {kind} '{value}'")]
    UnknownCatalogValue {
        /// Which catalog was searched
        kind: &'static str,
        /// Value that did not match
        value: String,
    },

    /// Record not present in the loaded list
    #[error("no feedback with id {0} in the current list")]
    RecordNotFound(String),
}

impl Error {
    /// Whether the error came from the network or the server, as opposed to
    /// local validation
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Server { .. })
    }
}

/// Result type alias for clarity360 operations
pub type Result<T> = std::result::Result<T, Error>;
