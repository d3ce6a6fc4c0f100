//! A persisted guestbook entry.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Entry {
  pub id: i64,
  pub name: String,
  pub message: String,
}
