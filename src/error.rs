// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WellnessError {
    #[error("missing credential: set the {var} environment variable")]
    MissingCredential { var: &'static str },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("request to model endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model endpoint returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("prompt was blocked by the model endpoint: {0}")]
    Blocked(String),

    #[error("model endpoint returned no text")]
    EmptyResponse,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WellnessError>;
