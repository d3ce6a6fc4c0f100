//! HTTP error type and its JSON rendering.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
  /// Body, path or query could not be read into the expected shape.
  #[error("{0}")]
  Validation(String),

  #[error("not authorized")]
  Forbidden,

  #[error("entry not found")]
  NotFound,

  #[error("storage error")]
  Storage(#[from] sqlx::Error),
}

impl ApiError {
  pub fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Forbidden => StatusCode::FORBIDDEN,
      ApiError::NotFound => StatusCode::NOT_FOUND,
      ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub detail: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    if let ApiError::Storage(e) = &self {
      error!("storage error: {e}");
    }
    let status = self.status_code();
    let body = Json(ErrorBody {
      detail: self.to_string(),
    });
    (status, body).into_response()
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::Validation(rejection.body_text())
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    ApiError::Validation(rejection.body_text())
  }
}

impl From<QueryRejection> for ApiError {
  fn from(rejection: QueryRejection) -> Self {
    ApiError::Validation(rejection.body_text())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_codes() {
    assert_eq!(
      ApiError::Validation("bad".into()).status_code(),
      StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
      ApiError::Storage(sqlx::Error::PoolClosed).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn storage_details_are_not_exposed() {
    let err = ApiError::Storage(sqlx::Error::Protocol("disk on fire".into()));
    assert_eq!(err.to_string(), "storage error");
  }

  #[test]
  fn response_carries_status() {
    let res = ApiError::NotFound.into_response();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
  }
}
