use thiserror::Error;

/// Broad classes of fetch failure. Both are handled the same way by the poller,
/// the split only shows up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network failure, non-2xx response, malformed JSON.
    TransportOrParse,
    /// Well-formed envelope whose status is not "success".
    Application,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered HTTP {status}{}", parenthesized(.message))]
    HttpStatus {
        url: String,
        status: u16,
        message: Option<String>,
    },

    #[error("decoding JSON from {url} failed: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{url} reported success without data")]
    MissingData { url: String },

    #[error("server reported status {status:?}: {message}")]
    Application { status: String, message: String },
}

fn parenthesized(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(" ({m})"),
        None => String::new(),
    }
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Application { .. } => FailureKind::Application,
            _ => FailureKind::TransportOrParse,
        }
    }
}
