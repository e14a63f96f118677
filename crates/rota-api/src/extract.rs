//! Envelope-preserving wrappers around axum's extractors.
//!
//! axum's own rejections reply with plain-text bodies; the API contract
//! wants every response, malformed requests included, in the
//! `{"success": false, "error": ...}` envelope. Each wrapper converts the
//! rejection into an [`ApiError::Validation`] carrying the rejection's own
//! description, so a missing field or an unparsable id still names what was
//! wrong.

use axum::{
  Json,
  extract::{FromRequest, FromRequestParts, Path, Query, Request},
  http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// [`Json`] with envelope-shaped rejections.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
  S: Send + Sync,
  T: DeserializeOwned,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    match Json::<T>::from_request(req, state).await {
      Ok(Json(value)) => Ok(ApiJson(value)),
      Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
    }
  }
}

/// [`Query`] with envelope-shaped rejections.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
  S: Send + Sync,
  T: DeserializeOwned,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    match Query::<T>::from_request_parts(parts, state).await {
      Ok(Query(value)) => Ok(ApiQuery(value)),
      Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
    }
  }
}

/// [`Path`] with envelope-shaped rejections (e.g. a non-integer id).
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
  S: Send + Sync,
  T: DeserializeOwned + Send,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    match Path::<T>::from_request_parts(parts, state).await {
      Ok(Path(value)) => Ok(ApiPath(value)),
      Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
    }
  }
}
