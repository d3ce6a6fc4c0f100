//! Per-request storage session.

use crate::models::entry::{db_entry::Entry, new_entry::NewEntry};
use sqlx::{Connection, Sqlite, pool::PoolConnection};

/// Result of an admin delete attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Entry),
    Denied,
    NotFound,
}

/// One pooled connection, held for the lifetime of a request.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub(crate) fn new(conn: PoolConnection<Sqlite>) -> Self {
        Self { conn }
    }

    pub async fn insert(&mut self, entry: NewEntry) -> Result<Entry, sqlx::Error> {
        sqlx::query_as::<_, Entry>(
            "INSERT INTO guestbook (name, message) VALUES (?, ?) RETURNING id, name, message",
        )
        .bind(entry.name)
        .bind(entry.message)
        .fetch_one(&mut *self.conn)
        .await
    }

    /// All entries in insertion order.
    pub async fn list(&mut self) -> Result<Vec<Entry>, sqlx::Error> {
        sqlx::query_as::<_, Entry>("SELECT id, name, message FROM guestbook ORDER BY id ASC")
            .fetch_all(&mut *self.conn)
            .await
    }

    /// Delete entry `id` when `authorised` holds.
    ///
    /// The lookup runs first, so a missing id is `NotFound` whatever the
    /// credentials. Lookup and delete share one transaction; an early return
    /// drops it uncommitted, which rolls back.
    pub async fn delete(&mut self, id: i64, authorised: bool) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = Connection::begin(&mut *self.conn).await?;
        let found = sqlx::query_as::<_, Entry>("SELECT id, name, message FROM guestbook WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(entry) = found else {
            return Ok(DeleteOutcome::NotFound);
        };
        if !authorised {
            return Ok(DeleteOutcome::Denied);
        }
        sqlx::query("DELETE FROM guestbook WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(DeleteOutcome::Deleted(entry))
    }
}
