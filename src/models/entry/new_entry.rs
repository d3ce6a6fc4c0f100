//! Request body for submitting an entry.

use serde::Deserialize;

/// Both fields must be present and be strings. Emptiness is the caller's
/// business; only null/missing values are refused.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEntry {
  pub name: String,
  pub message: String,
}
