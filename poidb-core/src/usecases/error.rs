use crate::{authorization, repositories, util::validate::ValidationErrors};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("The requested object could not be found")]
    NotFound,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("Invalid or outdated revision")]
    InvalidVersion,
    #[error(transparent)]
    Repo(repositories::Error),
}

impl From<repositories::Error> for Error {
    fn from(err: repositories::Error) -> Self {
        match err {
            repositories::Error::NotFound => Self::NotFound,
            repositories::Error::InvalidVersion => Self::InvalidVersion,
            _ => Self::Repo(err),
        }
    }
}

impl From<authorization::Error> for Error {
    fn from(err: authorization::Error) -> Self {
        match err {
            authorization::Error::Unauthorized => Self::Unauthorized,
            authorization::Error::Forbidden => Self::Forbidden,
        }
    }
}
