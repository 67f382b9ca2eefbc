use thiserror::Error;

/// Errors raised by the renderer-independent parts of the library.
///
/// Components never surface these to the user; they log them and fall back
/// to a sensible default.
#[derive(Debug, Error)]
pub enum QuantumError {
    #[error("invalid placement `{0}`")]
    InvalidPlacement(String),

    #[error("invalid calendar month {year}-{month}")]
    InvalidMonth { year: i32, month: u8 },

    #[error("invalid date format description `{format}`: {reason}")]
    InvalidFormat { format: String, reason: String },

    #[error("date formatting failed: {0}")]
    Format(#[from] time::error::Format),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("document script failed: {0}")]
    Document(String),

    #[error("unexpected payload from the document: {0}")]
    Payload(#[from] serde_json::Error),
}
