#[derive(Debug, thiserror::Error)]
pub enum PsaError {
    #[error("PSA API token not configured")]
    UpstreamNotConfigured,

    #[error("Invalid cert number format: {0}")]
    InvalidCertFormat(String),

    #[error("PSA API returned {status}")]
    UpstreamHttp { status: u16 },

    #[error("PSA API request failed: {0}")]
    UpstreamTransport(String),

    #[error("No PSA cert data found")]
    NoCertData,

    #[error("Error parsing data: {0}")]
    Parse(String),

    #[error("Card already exists: {0}")]
    DuplicateCert(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Unexpected(String),
}

impl From<serde_json::Error> for PsaError {
    fn from(e: serde_json::Error) -> Self {
        PsaError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PsaError>;
