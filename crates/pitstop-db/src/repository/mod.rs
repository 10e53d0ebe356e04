//! # Repository Module
//!
//! Database repository implementations for Pitstop Inventory.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Desktop shell action                                                  │
//! │       │                                                                 │
//! │       │  db.parts().search("brake")                                    │
//! │       ▼                                                                 │
//! │  PartRepository                                                        │
//! │  ├── add(&self, new_part)                                              │
//! │  ├── get(&self, id)                                                    │
//! │  ├── update(&self, id, changes)                                        │
//! │  └── delete_many(&self, ids)                                           │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                        │
//! │  • The shell never sees a connection, only typed results               │
//! │  • Easy to test against an in-memory database                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`part::PartRepository`] - Part CRUD, search and batch delete
//! - [`settings::SettingsRepository`] - Key/value application settings
//! - [`user::UserRepository`] - Login credentials

pub mod part;
pub mod settings;
pub mod user;
