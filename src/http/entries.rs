//! Guestbook entry endpoints.

use super::error::{ApiError, ApiResult};
use crate::{
  app::AppState,
  db::DeleteOutcome,
  models::{
    entry::{db_entry::Entry, new_entry::NewEntry},
    response::deleted::Deleted,
  },
};
use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
  pub password: String,
}

pub async fn create_entry(
  State(state): State<AppState>,
  body: Result<Json<NewEntry>, JsonRejection>,
) -> ApiResult<Json<Entry>> {
  let Json(new_entry) = body?;
  let mut session = state.storage.session().await?;
  let entry = session.insert(new_entry).await?;
  info!(id = entry.id, "entry created");
  Ok(Json(entry))
}

pub async fn list_entries(State(state): State<AppState>) -> ApiResult<Json<Vec<Entry>>> {
  let mut session = state.storage.session().await?;
  Ok(Json(session.list().await?))
}

pub async fn delete_entry(
  State(state): State<AppState>,
  path: Result<Path<i64>, PathRejection>,
  query: Result<Query<DeleteParams>, QueryRejection>,
) -> ApiResult<Json<Deleted>> {
  let Path(entry_id) = path?;
  let Query(params) = query?;
  let authorised = state.admin.verify(&params.password);

  let mut session = state.storage.session().await?;
  match session.delete(entry_id, authorised).await? {
    DeleteOutcome::Deleted(_) => {
      info!(id = entry_id, "entry deleted");
      Ok(Json(Deleted::default()))
    }
    DeleteOutcome::Denied => {
      warn!(id = entry_id, "delete refused: admin password mismatch");
      Err(ApiError::Forbidden)
    }
    DeleteOutcome::NotFound => Err(ApiError::NotFound),
  }
}
