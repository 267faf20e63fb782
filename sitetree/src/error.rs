use thiserror::Error;

/// Errors produced while requesting, decoding or displaying crawl results.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response, e.g. a network failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The tree is nested deeper than the configured bound.
    #[error("tree depth {depth} exceeds the limit of {limit}")]
    TooDeep { depth: usize, limit: usize },

    /// The viewer configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A required page element is absent.
    #[error("missing element #{0}")]
    MissingElement(String),

    /// A browser API threw.
    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, Error>;
