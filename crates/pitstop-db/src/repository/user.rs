//! # User Repository
//!
//! Login credentials for the desktop application.
//!
//! ## Credential Storage
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     How Credentials Are Stored                          │
//! │                                                                         │
//! │  add("omar", "hunter2")                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Argon2id + random salt                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  users table stores the PHC string only:                               │
//! │  "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$RdescudvJ..."             │
//! │                                                                         │
//! │  verify("omar", "hunter2") re-hashes against the stored salt and       │
//! │  compares. The plaintext password never touches disk.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is deliberately no update or delete surface: accounts are
//! provisioned once and checked at login, nothing more.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use pitstop_core::validation::validate_username;
use pitstop_core::ValidationError;

/// Repository for user database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Registers a user.
    ///
    /// ## Returns
    /// * `Ok(true)` - user created
    /// * `Ok(false)` - username already taken, storage unchanged
    ///
    /// ## Errors
    /// * `DbError::Validation` - blank username or password
    pub async fn add(&self, username: &str, password: &str) -> DbResult<bool> {
        validate_username(username)?;
        if password.is_empty() {
            return Err(ValidationError::Required {
                field: "password".to_string(),
            }
            .into());
        }

        let username = username.trim();

        debug!(username = %username, "Registering user");

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DbError::Credential(e.to_string()))?
            .to_string();

        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, created_at) VALUES (?1, ?2, ?3)",
        )
        .bind(username)
        .bind(hash)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(e) => match DbError::from(e) {
                DbError::UniqueViolation { .. } => {
                    debug!(username = %username, "Username already taken");
                    Ok(false)
                }
                other => Err(other),
            },
        }
    }

    /// Checks a username/password pair.
    ///
    /// ## Returns
    /// * `Ok(true)` - credentials match
    /// * `Ok(false)` - unknown user or wrong password (indistinguishable to
    ///   the caller on purpose)
    pub async fn verify(&self, username: &str, password: &str) -> DbResult<bool> {
        let stored = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM users WHERE username = ?1",
        )
        .bind(username.trim())
        .fetch_optional(&self.pool)
        .await?;

        let Some(stored) = stored else {
            return Ok(false);
        };

        let parsed = match PasswordHash::new(&stored) {
            Ok(parsed) => parsed,
            Err(e) => {
                // A row that doesn't parse as a PHC string means the table
                // was tampered with or predates hashing; treat as no match.
                warn!(username = %username, error = %e, "Stored credential is not a valid hash");
                return Ok(false);
            }
        };

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Counts registered users (for diagnostics and first-run detection).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_add_and_verify() {
        let db = test_db().await;
        let users = db.users();

        assert!(users.add("omar", "hunter2").await.unwrap());
        assert_eq!(users.count().await.unwrap(), 1);

        assert!(users.verify("omar", "hunter2").await.unwrap());
        assert!(!users.verify("omar", "wrong").await.unwrap());
        assert!(!users.verify("nobody", "hunter2").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let db = test_db().await;
        let users = db.users();

        assert!(users.add("omar", "first").await.unwrap());
        assert!(!users.add("omar", "second").await.unwrap());
        assert_eq!(users.count().await.unwrap(), 1);

        // The original password still works; the rejected add changed nothing.
        assert!(users.verify("omar", "first").await.unwrap());
        assert!(!users.verify("omar", "second").await.unwrap());
    }

    #[tokio::test]
    async fn test_blank_credentials_are_rejected() {
        let db = test_db().await;
        let users = db.users();

        assert!(matches!(
            users.add("  ", "pw").await.unwrap_err(),
            DbError::Validation(_)
        ));
        assert!(matches!(
            users.add("omar", "").await.unwrap_err(),
            DbError::Validation(_)
        ));
        assert_eq!(users.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_password_is_not_stored_in_plaintext() {
        let db = test_db().await;
        let users = db.users();
        users.add("omar", "hunter2").await.unwrap();

        let stored: String =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE username = 'omar'")
                .fetch_one(db.pool())
                .await
                .unwrap();

        assert!(stored.starts_with("$argon2"));
        assert!(!stored.contains("hunter2"));
    }

    #[tokio::test]
    async fn test_username_is_trimmed_consistently() {
        let db = test_db().await;
        let users = db.users();

        users.add(" omar ", "pw").await.unwrap();
        assert!(users.verify("omar", "pw").await.unwrap());
        assert!(users.verify(" omar ", "pw").await.unwrap());
    }
}
