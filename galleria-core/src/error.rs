use thiserror::Error;

/// Failure taxonomy for the artwork data-access layer.
///
/// `Validation` and `NotFound` are caller errors and never worth retrying as
/// sent. `StoreUnavailable` is a transport-level failure the caller may retry
/// with backoff; `Store` is any other backend rejection.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("artwork not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("store error: {0}")]
    Store(String),
}

impl From<galleria_model::ModelError> for GalleryError {
    fn from(err: galleria_model::ModelError) -> Self {
        GalleryError::Validation(err.to_string())
    }
}

impl From<sqlx::Error> for GalleryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // Transport-level failures: the service could not be reached at
            // all, as opposed to reaching it and being rejected.
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => {
                GalleryError::StoreUnavailable(err.to_string())
            }
            sqlx::Error::RowNotFound => {
                GalleryError::NotFound("row not found".to_string())
            }
            other => GalleryError::Store(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
