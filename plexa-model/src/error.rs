use std::fmt::{self, Display};

/// Errors produced by model constructors and conversion routines.
#[derive(Debug)]
pub enum ModelError {
    UnknownMediaType(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownMediaType(key) => {
                write!(f, "unknown media type key: {key}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
