//! Shared admin secret used to gate deletes.

use std::fmt;
use subtle::ConstantTimeEq;

/// The configured admin password, if any. An unset or empty secret matches
/// nothing, so every delete is refused.
#[derive(Clone, Default)]
pub struct AdminSecret(Option<String>);

impl AdminSecret {
  pub fn new(secret: Option<String>) -> Self {
    Self(secret.filter(|s| !s.is_empty()))
  }

  pub fn is_configured(&self) -> bool {
    self.0.is_some()
  }

  /// Exact, constant-time comparison against the configured secret.
  pub fn verify(&self, candidate: &str) -> bool {
    match &self.0 {
      Some(secret) => bool::from(secret.as_bytes().ct_eq(candidate.as_bytes())),
      None => false,
    }
  }
}

impl fmt::Debug for AdminSecret {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let shown = if self.is_configured() { "<redacted>" } else { "<unset>" };
    f.debug_tuple("AdminSecret").field(&shown).finish()
  }
}
