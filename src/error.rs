use std::path::PathBuf;

/// Everything that can go wrong while talking to the backend or preparing
/// a submission. Display code catches these at the call site and keeps
/// going; the one-shot commands report them and exit.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        source: reqwest::Error,
    },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        source: reqwest::Error,
    },

    #[error("missing required field: {0}")]
    Validation(&'static str),

    #[error("incorrect password")]
    IncorrectPassword,

    #[error("photo upload rejected: {0}")]
    Upload(String),

    #[error("cannot read photo {}: {source}", .path.display())]
    Photo {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
