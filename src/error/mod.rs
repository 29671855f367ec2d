use crate::extract::ExtractError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no image given; usage: swatchlens <image-path-or-url>")]
    MissingImageArgument,
    #[error(transparent)]
    Extract(#[from] ExtractError),
}
