use thiserror::Error;

#[derive(Debug, Error)]
pub enum RotateError {
    #[error("{0}")]
    Message(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl RotateError {
    pub fn message<T: Into<String>>(message: T) -> Self {
        RotateError::Message(message.into())
    }
}
