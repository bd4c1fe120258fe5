//! Credential repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist one credential row per account identifier.
//! - Look credentials up for the login flow.
//!
//! # Invariants
//! - `identifier` is unique after normalization (trim + lowercase).
//! - Rows are written once at signup and never updated here.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::{is_unique_violation, DbError};
use chrono::Utc;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const CREDENTIAL_SELECT_SQL: &str = "SELECT
    user_id,
    identifier,
    password_hash,
    display_name,
    created_at
FROM credentials";

pub type UserId = Uuid;
pub type RepoResult<T> = Result<T, RepoError>;

/// Stored login secret for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub user_id: UserId,
    /// Normalized login identifier (email).
    pub identifier: String,
    /// `<salt-hex>:<derived-key-hex>`, never plaintext.
    pub password_hash: String,
    pub display_name: Option<String>,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl Credential {
    /// New credential with a random user id, created now.
    pub fn new(
        identifier: &str,
        password_hash: impl Into<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            identifier: normalize_identifier(identifier),
            password_hash: password_hash.into(),
            display_name,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    DuplicateIdentifier(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateIdentifier(identifier) => {
                write!(f, "identifier already registered: {identifier}")
            }
            Self::InvalidData(message) => {
                write!(f, "invalid persisted credential data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::DuplicateIdentifier(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for credential storage.
pub trait CredentialRepository {
    fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<Credential>>;
    fn create_credential(&self, credential: &Credential) -> RepoResult<UserId>;
}

/// SQLite-backed credential repository.
pub struct SqliteCredentialRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCredentialRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CredentialRepository for SqliteCredentialRepository<'_> {
    fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<Credential>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CREDENTIAL_SELECT_SQL} WHERE identifier = ?1;"))?;

        let mut rows = stmt.query([normalize_identifier(identifier)])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_credential_row(row)?));
        }

        Ok(None)
    }

    fn create_credential(&self, credential: &Credential) -> RepoResult<UserId> {
        let identifier = normalize_identifier(&credential.identifier);
        if identifier.is_empty() {
            return Err(RepoError::InvalidData("identifier must not be empty".to_string()));
        }

        let inserted = self.conn.execute(
            "INSERT INTO credentials (
                user_id,
                identifier,
                password_hash,
                display_name,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                credential.user_id.to_string(),
                identifier.as_str(),
                credential.password_hash.as_str(),
                credential.display_name.as_deref(),
                credential.created_at,
            ],
        );

        match inserted {
            Ok(_) => Ok(credential.user_id),
            Err(err) if is_unique_violation(&err) => {
                Err(RepoError::DuplicateIdentifier(identifier))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Canonical identifier form used for storage and lookup.
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

fn parse_credential_row(row: &Row<'_>) -> RepoResult<Credential> {
    let user_id_text: String = row.get("user_id")?;
    let user_id = Uuid::parse_str(&user_id_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{user_id_text}` in credentials.user_id"
        ))
    })?;

    let password_hash: String = row.get("password_hash")?;
    if password_hash.is_empty() {
        return Err(RepoError::InvalidData(format!(
            "empty credentials.password_hash for user {user_id}"
        )));
    }

    Ok(Credential {
        user_id,
        identifier: row.get("identifier")?,
        password_hash,
        display_name: row.get("display_name")?,
        created_at: row.get("created_at")?,
    })
}
