//! Explicitly constructed store handles.
//!
//! # Responsibility
//! - Own the single SQLite connection shared by credentials and the local
//!   store.
//! - Hand out borrowed repositories and stores bound to that connection.
//!
//! # Invariants
//! - The connection is migrated before any handle is returned.
//! - There is no process-global database client.

use crate::config::CoreConfig;
use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::repo::credential_repo::SqliteCredentialRepository;
use crate::service::auth_service::AuthService;
use crate::store::{LocalStore, SqliteKvStore};
use rusqlite::Connection;

pub struct CoreContext {
    conn: Connection,
}

impl CoreContext {
    /// Opens (creating when needed) the database named by `config`.
    pub fn open(config: &CoreConfig) -> DbResult<Self> {
        Ok(Self {
            conn: open_db(config.database_path())?,
        })
    }

    /// Private in-memory database, for tests and throwaway sessions.
    pub fn in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn credentials(&self) -> SqliteCredentialRepository<'_> {
        SqliteCredentialRepository::new(&self.conn)
    }

    pub fn auth(&self) -> AuthService<SqliteCredentialRepository<'_>> {
        AuthService::new(self.credentials())
    }

    pub fn local_store(&self) -> LocalStore<SqliteKvStore<'_>> {
        LocalStore::new(SqliteKvStore::new(&self.conn))
    }
}
