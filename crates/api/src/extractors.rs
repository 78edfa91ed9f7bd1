//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use hostel_common::AppError;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// Malformed JSON, a wrong content type and missing required fields all
/// surface as `400 BAD_REQUEST` in the usual error envelope.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
