//! # Settings Repository
//!
//! Key/value application settings: language, layout direction, theme,
//! thresholds. Values are plain text; the consuming widget owns the parse.
//!
//! Writes are upserts keyed on the setting name. There is no delete path:
//! settings only ever move between their factory default and a user value.

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use pitstop_core::settings::{is_rtl_language, DEFAULT_SETTINGS};

/// Repository for settings database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = SettingsRepository::new(pool);
///
/// let lang = repo.get_or("language", "en").await?;
/// repo.set("theme_index", "2").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// Seeds every factory default that is not already present.
    ///
    /// `INSERT OR IGNORE` keeps values the user has changed intact, so this
    /// is safe to run on every startup (and it is).
    pub async fn seed_defaults(&self) -> DbResult<()> {
        debug!(count = DEFAULT_SETTINGS.len(), "Seeding default settings");

        for (key, value) in DEFAULT_SETTINGS {
            sqlx::query("INSERT OR IGNORE INTO settings (key, value) VALUES (?1, ?2)")
                .bind(key)
                .bind(value)
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }

    /// Gets a setting value.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    /// Gets a setting value, falling back to the given default when the key
    /// is absent.
    pub async fn get_or(&self, key: &str, default: &str) -> DbResult<String> {
        Ok(self.get(key).await?.unwrap_or_else(|| default.to_string()))
    }

    /// Writes a setting (insert-or-update keyed on the setting name).
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, "Saving setting");

        sqlx::query(
            r#"
            INSERT INTO settings (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets every setting as a map.
    pub async fn get_all(&self) -> DbResult<HashMap<String, String>> {
        let rows = sqlx::query_as::<_, (String, String)>("SELECT key, value FROM settings")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// True when the UI should lay out right-to-left.
    pub async fn is_rtl(&self) -> DbResult<bool> {
        Ok(self.get_or("rtl", "false").await? == "true")
    }

    /// Switches the UI language, keeping the layout direction in sync.
    ///
    /// The language picker historically wrote `language` and `rtl` as two
    /// separate saves and a missed second write left the layout mirrored in
    /// the wrong direction; deriving one from the other here closes that gap.
    pub async fn set_language(&self, lang: &str) -> DbResult<()> {
        let rtl = is_rtl_language(lang);

        debug!(lang = %lang, rtl = rtl, "Switching language");

        self.set("language", lang).await?;
        self.set("rtl", if rtl { "true" } else { "false" }).await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
