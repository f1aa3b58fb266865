use thiserror::Error;

use retrace_model::{ModelError, PolicyId};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no policy with id: {0}")]
    UnknownPolicy(PolicyId),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type CoreResult<T> = Result<T, CoreError>;
