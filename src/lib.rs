//! guestbook library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router, handlers and error mapping
//! - `db`: table creation, SQLite helpers, per-request sessions
//! - `models`: typed records used across layers

pub mod app;
pub mod db;
pub mod http;
pub mod models;
