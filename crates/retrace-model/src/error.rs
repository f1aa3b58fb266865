use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown backoff kind: {0}")]
    UnknownBackoff(String),

    #[error("policy field '{0}' must be a finite, non-negative number")]
    InvalidField(&'static str),

    #[error("capped-exponential policy requires maxMs")]
    MissingCap,
}

pub type ModelResult<T> = Result<T, ModelError>;
