//! # pitstop-db: Database Layer for Pitstop Inventory
//!
//! This crate provides database access for the Pitstop Inventory desktop
//! application. It uses SQLite for local storage with sqlx for async
//! operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Pitstop Inventory Data Flow                          │
//! │                                                                         │
//! │  Shell action (search bar, add dialog, export button)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     pitstop-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (part.rs,    │    │  (embedded)  │  │   │
//! │  │   │               │    │   settings.rs,│    │              │  │   │
//! │  │   │ SqlitePool    │◄───│   user.rs)    │    │ 001_init.sql │  │   │
//! │  │   │ WAL + busy    │    │               │    │ ...          │  │   │
//! │  │   │ timeout       │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │          <install dir>/database/pitstop.db                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (part, settings, user)
//! - [`export`] - CSV export of the inventory
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pitstop_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations, seeds defaults)
//! let config = DbConfig::new("path/to/pitstop.db");
//! let db = Database::new(config).await?;
//!
//! // Use repositories
//! let parts = db.parts().search("brake").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::part::PartRepository;
pub use repository::settings::SettingsRepository;
pub use repository::user::UserRepository;
