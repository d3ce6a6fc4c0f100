//! Application setup and runtime.

use crate::{db::Storage, http};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod admin;
pub mod config;

pub use admin::AdminSecret;
pub use config::Config;

/// Shared application state, built once and handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
  pub storage: Storage,
  pub admin: AdminSecret,
}

/// Initialize pretty CLI logging. Request spans come from tower-http.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .pretty()
    .init();
}

/// Load configuration, open the store and serve HTTP until the process ends.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  // A missing .env is normal; real environment variables still apply.
  let _ = dotenvy::dotenv();
  init_tracing();

  let config = Config::from_env()?;
  if !config.admin.is_configured() {
    warn!("ADMIN_PASSWORD is not set; every delete request will be refused");
  }

  let storage = Storage::connect(&config.database_url, config.max_connections).await?;
  info!("guestbook store:  {}", config.database_url);

  let state = AppState {
    storage,
    admin: config.admin.clone(),
  };
  let app = http::build_router(state);

  let listener = tokio::net::TcpListener::bind(config.addr).await?;
  info!("guestbook api:    http://{}/entries", listener.local_addr()?);
  axum::serve(listener, app).await?;
  Ok(())
}
