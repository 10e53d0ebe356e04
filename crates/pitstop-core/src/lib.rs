//! # pitstop-core: Pure Domain Logic for Pitstop Inventory
//!
//! This crate is the foundation of Pitstop Inventory. It contains the domain
//! types and rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pitstop Inventory Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Desktop Shell (GUI)                        │   │
//! │  │    Product table ──► Add/Edit dialogs ──► Search ──► Export    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pitstop-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  coerce   │  │ validation│  │ settings  │  │   │
//! │  │   │   Part    │  │ quantity  │  │   rules   │  │ defaults  │  │   │
//! │  │   │  NewPart  │  │   price   │  │  checks   │  │ RTL langs │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  pitstop-db (Database Layer)                    │   │
//! │  │             SQLite queries, migrations, repositories            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Part, NewPart, PartChanges)
//! - [`coerce`] - Lenient numeric coercion for form input
//! - [`validation`] - Business rule validation
//! - [`settings`] - Settings defaults and RTL language table
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coerce;
pub mod error;
pub mod settings;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use types::{NewPart, Part, PartChanges};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category code written when a part is filed without one.
///
/// ## Why "3"?
/// The desktop shell's category picker maps "3" to the catch-all
/// "Uncategorized" bucket. The stored value is the picker code, not a label.
pub const DEFAULT_CATEGORY: &str = "3";

/// Placeholder written into optional text fields left blank (car_name, model).
///
/// Rows carrying this value are treated as "not applicable" and excluded from
/// per-car listings such as `distinct_cars`.
pub const FIELD_SENTINEL: &str = "-";

/// Maximum number of ids bound into a single batch-delete statement.
///
/// SQLite caps bound parameters per statement (999 on older builds), so
/// batch deletes are split into chunks of this size inside one transaction.
pub const DELETE_CHUNK_SIZE: usize = 100;

/// Upper bound on product names, mirrored by the add/edit dialogs.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Upper bound on search terms typed into the search bar.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;
