use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    /// No response was obtained: refused connection, DNS failure, timeout,
    /// or the body could not be read.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but not with a 2xx status.
    #[error("Translation service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// A 2xx response whose body lacks `contents.translated`.
    #[error("Malformed response from translation service: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TranslateError {
    /// Whether the failure happened before any HTTP response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, TranslateError::Transport(_))
    }
}
