//! Confirmation body returned after an admin delete.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Deleted {
  pub message: &'static str,
}

impl Default for Deleted {
  fn default() -> Self {
    Self { message: "deleted" }
  }
}
