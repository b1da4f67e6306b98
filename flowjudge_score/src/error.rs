// Errors at the edges of the engine.
//
// Scoring itself never fails: degenerate transcripts get low scores with an
// explanation. Errors only come from loading configuration, from theme
// books, and from the remote scoring path (transport failures and payloads
// that do not match the `{score, reason}` shape).

use std::path::PathBuf;

use flowjudge_lang::ThemeError;

/// Why a transport call to a remote scorer failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Rate limiting or a server-side failure; worth retrying.
    #[error("retryable transport failure: {0}")]
    Retryable(String),
    /// A client-side or permanent failure; retrying will not help.
    #[error("transport failure: {0}")]
    Fatal(String),
}

impl TransportError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, TransportError::Retryable(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error("malformed remote verdict: {0}")]
    MalformedVerdict(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
