use thiserror::Error;

use crate::models::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid photo: {0}")]
    InvalidPhoto(String),
}

impl AppError {
    pub fn invalid_photo(msg: impl Into<String>) -> Self {
        Self::InvalidPhoto(msg.into())
    }

    /// Fel som användaren kan rätta själv (till skillnad från lagringsfel)
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidPhoto(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
