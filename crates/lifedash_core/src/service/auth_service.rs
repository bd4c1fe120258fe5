//! Signup and credential login use-cases.
//!
//! # Responsibility
//! - Validate signup input, hash the password and store the credential.
//! - Authorize a login attempt against the stored hash.
//!
//! # Invariants
//! - Unknown identifier and wrong password are indistinguishable to callers.
//! - Passwords and hashes are never logged; identifiers only by length.
//! - Session issuance stays with the caller.

use crate::crypto::password::{hash_password, verify_password, CredentialError};
use crate::repo::credential_repo::{
    normalize_identifier, Credential, CredentialRepository, RepoError, UserId,
};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MIN_DISPLAY_NAME_CHARS: usize = 2;

/// Well-formed hash checked when the identifier is unknown, so that path
/// pays for one key derivation like a wrong password does.
const UNKNOWN_IDENTIFIER_HASH: &str = concat!(
    "6c6966656461736800000000000000ff",
    ":",
    "00000000000000000000000000000000000000000000000000000000000000ff",
    "00000000000000000000000000000000000000000000000000000000000000ff",
);

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug)]
pub enum AuthError {
    /// Signup input failed validation; the message is safe to display.
    InvalidInput(String),
    AlreadyRegistered,
    Credential(CredentialError),
    Repo(RepoError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "{message}"),
            Self::AlreadyRegistered => write!(f, "an account with this email already exists"),
            Self::Credential(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Credential(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::InvalidInput(_) | Self::AlreadyRegistered => None,
        }
    }
}

impl From<CredentialError> for AuthError {
    fn from(value: CredentialError) -> Self {
        Self::Credential(value)
    }
}

impl From<RepoError> for AuthError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateIdentifier(_) => Self::AlreadyRegistered,
            other => Self::Repo(other),
        }
    }
}

/// Signup form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub identifier: String,
    pub display_name: Option<String>,
    pub password: String,
}

/// Account data handed back after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub identifier: String,
    pub display_name: Option<String>,
}

impl From<Credential> for AuthenticatedUser {
    fn from(value: Credential) -> Self {
        Self {
            user_id: value.user_id,
            identifier: value.identifier,
            display_name: value.display_name,
        }
    }
}

/// Use-case service wrapper for credential flows.
pub struct AuthService<R: CredentialRepository> {
    repo: R,
}

impl<R: CredentialRepository> AuthService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new account.
    ///
    /// # Errors
    /// - [`AuthError::InvalidInput`] for a malformed email, a display name
    ///   shorter than 2 characters or a password shorter than 6.
    /// - [`AuthError::AlreadyRegistered`] when the email is taken.
    pub fn sign_up(&self, request: &SignUpRequest) -> Result<AuthenticatedUser, AuthError> {
        let identifier = normalize_identifier(&request.identifier);
        validate_sign_up(&identifier, request)?;

        if self.repo.find_by_identifier(&identifier)?.is_some() {
            warn!(
                "event=sign_up module=auth status=rejected reason=already_registered identifier_len={}",
                identifier.len()
            );
            return Err(AuthError::AlreadyRegistered);
        }

        let display_name = request
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let credential = Credential::new(
            &identifier,
            hash_password(&request.password)?,
            display_name,
        );
        self.repo.create_credential(&credential)?;

        info!(
            "event=sign_up module=auth status=ok identifier_len={}",
            identifier.len()
        );
        Ok(credential.into())
    }

    /// Checks a login attempt.
    ///
    /// Returns `Ok(None)` for empty input, an unknown identifier or a wrong
    /// password. Errors are reserved for storage failures.
    pub fn authorize(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<Option<AuthenticatedUser>, AuthError> {
        let identifier = normalize_identifier(identifier);
        if identifier.is_empty() || password.is_empty() {
            return Ok(None);
        }

        let Some(credential) = self.repo.find_by_identifier(&identifier)? else {
            std::hint::black_box(verify_password(password, UNKNOWN_IDENTIFIER_HASH));
            info!(
                "event=authorize module=auth status=denied identifier_len={}",
                identifier.len()
            );
            return Ok(None);
        };

        if !verify_password(password, &credential.password_hash) {
            info!(
                "event=authorize module=auth status=denied identifier_len={}",
                identifier.len()
            );
            return Ok(None);
        }

        info!(
            "event=authorize module=auth status=ok identifier_len={}",
            identifier.len()
        );
        Ok(Some(credential.into()))
    }
}

/// Returns whether `value` looks like an email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn validate_sign_up(identifier: &str, request: &SignUpRequest) -> Result<(), AuthError> {
    if !is_email(identifier) {
        return Err(AuthError::InvalidInput(
            "Please enter a valid email address".to_string(),
        ));
    }
    if let Some(name) = request.display_name.as_deref() {
        if name.trim().chars().count() < MIN_DISPLAY_NAME_CHARS {
            return Err(AuthError::InvalidInput(format!(
                "Name must be at least {MIN_DISPLAY_NAME_CHARS} characters"
            )));
        }
    }
    if request.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AuthError::InvalidInput(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{is_email, AuthError, AuthService, SignUpRequest, UNKNOWN_IDENTIFIER_HASH};
    use crate::crypto::password::verify_password;
    use crate::db::open_db_in_memory;
    use crate::repo::credential_repo::SqliteCredentialRepository;

    fn request(identifier: &str, name: Option<&str>, password: &str) -> SignUpRequest {
        SignUpRequest {
            identifier: identifier.to_string(),
            display_name: name.map(str::to_string),
            password: password.to_string(),
        }
    }

    #[test]
    fn email_shape_check() {
        assert!(is_email("a@b.co"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.de"));
        assert!(!is_email(""));
    }

    #[test]
    fn unknown_identifier_hash_is_well_formed() {
        let (salt, key) = UNKNOWN_IDENTIFIER_HASH.split_once(':').unwrap();
        assert_eq!(salt.len(), 32);
        assert_eq!(key.len(), 128);
        assert!(UNKNOWN_IDENTIFIER_HASH
            .bytes()
            .all(|byte| byte == b':' || byte.is_ascii_hexdigit()));
        assert!(!verify_password("secret1", UNKNOWN_IDENTIFIER_HASH));
    }

    #[test]
    fn sign_up_validates_input() {
        let conn = open_db_in_memory().unwrap();
        let service = AuthService::new(SqliteCredentialRepository::new(&conn));

        for bad in [
            request("not-an-email", None, "secret1"),
            request("a@b.co", Some("A"), "secret1"),
            request("a@b.co", None, "short"),
        ] {
            assert!(matches!(
                service.sign_up(&bad).unwrap_err(),
                AuthError::InvalidInput(_)
            ));
        }
    }

    #[test]
    fn sign_up_then_authorize() {
        let conn = open_db_in_memory().unwrap();
        let service = AuthService::new(SqliteCredentialRepository::new(&conn));

        let created = service
            .sign_up(&request("Sam@Example.com", Some(" Sam "), "hunter22"))
            .unwrap();
        assert_eq!(created.identifier, "sam@example.com");
        assert_eq!(created.display_name.as_deref(), Some("Sam"));

        let user = service.authorize("sam@example.com", "hunter22").unwrap();
        assert_eq!(user, Some(created));
        assert_eq!(service.authorize("sam@example.com", "hunter23").unwrap(), None);
        assert_eq!(service.authorize("", "hunter22").unwrap(), None);
        assert_eq!(service.authorize("sam@example.com", "").unwrap(), None);
        assert_eq!(service.authorize("who@example.com", "hunter22").unwrap(), None);
    }

    #[test]
    fn second_sign_up_is_rejected() {
        let conn = open_db_in_memory().unwrap();
        let service = AuthService::new(SqliteCredentialRepository::new(&conn));
        service
            .sign_up(&request("kim@example.com", None, "secret1"))
            .unwrap();

        assert!(matches!(
            service
                .sign_up(&request("KIM@example.com", None, "secret2"))
                .unwrap_err(),
            AuthError::AlreadyRegistered
        ));
    }
}
