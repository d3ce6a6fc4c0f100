//! Database helpers: table creation, path handling and the storage handle.

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::path::Path;

mod session;

pub use session::{DeleteOutcome, Session};

/// Create the guestbook table if absent.
///
/// AUTOINCREMENT keeps ids strictly increasing even after the newest row is
/// deleted; a plain rowid alias would hand that id out again.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS guestbook (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            message TEXT NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure SQLite file and parent folder exist for a given sqlx URL.
pub fn ensure_sqlite_path(db_url: &str) -> String {
    let Some(rest) = db_url.strip_prefix("sqlite:") else {
        return db_url.to_string();
    };
    let path_part = rest.trim_start_matches("//");
    let path_only = path_part.split_once('?').map_or(path_part, |(p, _)| p);
    if path_only.is_empty() || path_only == ":memory:" || path_part.contains("mode=memory") {
        return db_url.to_string();
    }
    let p = Path::new(path_only);
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(p);
    db_url.to_string()
}

/// Process-wide storage handle, built once at startup and cloned into
/// request handlers through application state.
#[derive(Debug, Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Open (creating if needed) the database at `db_url` and make sure the
    /// table exists.
    pub async fn connect(db_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let db_url = ensure_sqlite_path(db_url);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&db_url)
            .await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Acquire a session bound to one pooled connection. The connection goes
    /// back to the pool when the session is dropped.
    pub async fn session(&self) -> Result<Session, sqlx::Error> {
        let conn = self.pool.acquire().await?;
        Ok(Session::new(conn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_urls_are_left_alone() {
        assert_eq!(ensure_sqlite_path("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(ensure_sqlite_path("sqlite://:memory:"), "sqlite://:memory:");
        assert_eq!(
            ensure_sqlite_path("sqlite://file.db?mode=memory"),
            "sqlite://file.db?mode=memory"
        );
    }

    #[test]
    fn non_sqlite_urls_pass_through() {
        assert_eq!(ensure_sqlite_path("postgres://x/y"), "postgres://x/y");
    }

    #[test]
    fn file_and_parent_dirs_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested/deeper/gb.db");
        let url = format!("sqlite://{}?mode=rwc", file.display());
        assert_eq!(ensure_sqlite_path(&url), url);
        assert!(file.exists());
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM guestbook")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(n, 0);
    }

    #[tokio::test]
    async fn connect_creates_file_backed_store() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("gb.db").display());
        let storage = Storage::connect(&url, 2).await.unwrap();
        let mut s = storage.session().await.unwrap();
        assert!(s.list().await.unwrap().is_empty());
    }
}
