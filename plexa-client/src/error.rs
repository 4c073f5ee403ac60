use thiserror::Error;

/// Errors surfaced by request compilation and response decoding.
///
/// Decode failures are passed through untouched; whether to retry is the
/// transport's call, not ours.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
