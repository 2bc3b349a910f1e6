use thiserror::Error;

/// Everything that can go wrong while loading data or configuration.
#[derive(Debug, Error)]
pub enum StarMapError {
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: gloo_net::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed {what} document: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StarMapError>;
