use thiserror::Error;

/// Raised when required configuration is absent at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable(s): {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("Spotify API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no cached token found, please run `songlist auth` first ({0})")]
    MissingToken(String),

    #[error("unexpected response from Spotify: {0}")]
    UnexpectedResponse(String),
}
