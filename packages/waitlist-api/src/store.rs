//! SQLite-backed waitlist store
//!
//! One table keyed by email; the uniqueness constraint is the
//! deduplication mechanism, not a lookup-then-insert sequence.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use tokio::sync::Mutex;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS waitlist_signups (
    id          INTEGER PRIMARY KEY,
    email       TEXT NOT NULL UNIQUE,
    source      TEXT,
    ip_address  TEXT,
    user_agent  TEXT,
    created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
";

/// A signup row as captured from one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignup {
    pub email: String,
    pub source: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug)]
pub enum StoreError {
    /// The email already exists; the endpoint reports this as success.
    DuplicateEmail,
    Storage(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::DuplicateEmail => write!(f, "email already on the waitlist"),
            StoreError::Storage(msg) => write!(f, "{msg}"),
        }
    }
}
impl std::error::Error for StoreError {}

pub struct WaitlistStore {
    conn: Mutex<Connection>,
}

impl WaitlistStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(storage)?;
        conn.execute_batch(
            "PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL; PRAGMA foreign_keys=ON;",
        )
        .map_err(storage)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory().map_err(storage)?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA).map_err(storage)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Insert one signup. A repeat email is reported as `DuplicateEmail`,
    /// never as a second row.
    pub async fn insert_signup(&self, signup: &NewSignup) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;
        let result = conn.execute(
            "INSERT INTO waitlist_signups (email, source, ip_address, user_agent)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                signup.email,
                signup.source,
                signup.ip_address,
                signup.user_agent
            ],
        );
        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                Err(StoreError::DuplicateEmail)
            }
            Err(e) => Err(StoreError::Storage(e.to_string())),
        }
    }

    pub async fn signup_count(&self) -> Result<u64, StoreError> {
        let conn = self.conn.lock().await;
        conn.query_row("SELECT COUNT(*) FROM waitlist_signups", [], |row| {
            row.get::<_, i64>(0)
        })
        .map(|n| n as u64)
        .map_err(storage)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<NewSignup>, StoreError> {
        let conn = self.conn.lock().await;
        conn.query_row(
            "SELECT email, source, ip_address, user_agent
             FROM waitlist_signups WHERE email = ?1",
            [email],
            |row| {
                Ok(NewSignup {
                    email: row.get(0)?,
                    source: row.get(1)?,
                    ip_address: row.get(2)?,
                    user_agent: row.get(3)?,
                })
            },
        )
        .optional()
        .map_err(storage)
    }
}

fn storage(e: rusqlite::Error) -> StoreError {
    StoreError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(email: &str) -> NewSignup {
        NewSignup {
            email: email.to_string(),
            source: Some("unit".to_string()),
            ip_address: Some("203.0.113.9".to_string()),
            user_agent: Some("store-test".to_string()),
        }
    }

    #[tokio::test]
    async fn repeat_email_maps_to_duplicate_error() {
        let store = WaitlistStore::open_in_memory().expect("open store");

        store
            .insert_signup(&signup("a@b.com"))
            .await
            .expect("first insert");
        match store.insert_signup(&signup("a@b.com")).await {
            Err(StoreError::DuplicateEmail) => {}
            other => panic!("expected DuplicateEmail, got {other:?}"),
        }

        assert_eq!(store.signup_count().await.expect("count"), 1);
    }

    #[tokio::test]
    async fn stores_every_provenance_field() {
        let store = WaitlistStore::open_in_memory().expect("open store");

        store
            .insert_signup(&signup("keep@fields.dev"))
            .await
            .expect("insert");

        let row = store
            .find_by_email("keep@fields.dev")
            .await
            .expect("query")
            .expect("row exists");
        assert_eq!(row, signup("keep@fields.dev"));

        assert_eq!(store.find_by_email("missing@x.y").await.expect("query"), None);
    }
}
