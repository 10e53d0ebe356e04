//! # Domain Types
//!
//! Core domain types used throughout Pitstop Inventory.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Part        │   │    NewPart      │   │  PartChanges    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (rowid)     │   │  category      │   │  Option per      │       │
//! │  │  category       │   │  car_name      │   │  mutable field   │       │
//! │  │  car_name       │   │  model         │   │                  │       │
//! │  │  model          │   │  product_name  │   │  id and          │       │
//! │  │  product_name   │   │  quantity      │   │  last_updated    │       │
//! │  │  quantity       │   │  price         │   │  are never       │       │
//! │  │  price          │   │                 │   │  client-set      │       │
//! │  │  last_updated   │   │                 │   │                  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The insert path always goes through [`NewPart`], which is where sentinel
//! substitution and lenient numeric coercion live. A `Part` handed out by the
//! database layer is therefore always well-formed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::error::{ValidationError, ValidationResult};
use crate::validation::validate_product_name;
use crate::{DEFAULT_CATEGORY, FIELD_SENTINEL};

// =============================================================================
// Part
// =============================================================================

/// One inventory row: a car part with classification, applicability and stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Part {
    /// Unique identifier, assigned by the database on insert. Immutable.
    pub id: i64,

    /// Free-form classification code ("3" when filed without one).
    pub category: String,

    /// Car the part fits ("-" when not applicable).
    pub car_name: String,

    /// Car model the part fits ("-" when not applicable).
    pub model: String,

    /// Display name of the part. Never empty.
    pub product_name: String,

    /// Units in stock.
    pub quantity: i64,

    /// Unit price.
    pub price: f64,

    /// When this row was last written. Bumped on insert and every update.
    pub last_updated: DateTime<Utc>,
}

// =============================================================================
// NewPart
// =============================================================================

/// Payload for inserting a part.
///
/// Construct via [`NewPart::from_form`] for raw dialog input (applies sentinel
/// defaults and lenient coercion), or build the struct directly and call
/// [`NewPart::validate`] when the caller already has typed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPart {
    pub category: String,
    pub car_name: String,
    pub model: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
}

impl NewPart {
    /// Builds an insert payload from raw form strings.
    ///
    /// ## Normalization
    /// - blank `category` becomes [`DEFAULT_CATEGORY`]
    /// - blank `car_name` / `model` become [`FIELD_SENTINEL`]
    /// - `quantity` / `price` go through [`coerce`]: malformed input is
    ///   silently normalized to zero rather than rejected
    ///
    /// ## Errors
    /// `product_name` empty after trimming is the one rejected input; nothing
    /// is normalized away there.
    ///
    /// ## Example
    /// ```rust
    /// use pitstop_core::NewPart;
    ///
    /// let part = NewPart::from_form("1", "Toyota", "Corolla", "Brake Pad", "10", "49.99").unwrap();
    /// assert_eq!(part.quantity, 10);
    ///
    /// let part = NewPart::from_form("", "", "", "Oil Filter", "n/a", "").unwrap();
    /// assert_eq!(part.category, "3");
    /// assert_eq!(part.car_name, "-");
    /// assert_eq!(part.quantity, 0);
    /// ```
    pub fn from_form(
        category: &str,
        car_name: &str,
        model: &str,
        product_name: &str,
        quantity: &str,
        price: &str,
    ) -> ValidationResult<Self> {
        validate_product_name(product_name)?;

        Ok(NewPart {
            category: coerce::or_sentinel(category, DEFAULT_CATEGORY),
            car_name: coerce::or_sentinel(car_name, FIELD_SENTINEL),
            model: coerce::or_sentinel(model, FIELD_SENTINEL),
            product_name: product_name.trim().to_string(),
            quantity: coerce::coerce_quantity(quantity),
            price: coerce::coerce_price(price),
        })
    }

    /// Checks a directly-constructed payload against the same rules
    /// `from_form` enforces.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.product_name)
    }

    /// Materializes the full row this payload becomes once the database
    /// assigns an id and stamps the write time.
    pub fn into_part(self, id: i64, last_updated: DateTime<Utc>) -> Part {
        Part {
            id,
            category: self.category,
            car_name: self.car_name,
            model: self.model,
            product_name: self.product_name,
            quantity: self.quantity,
            price: self.price,
            last_updated,
        }
    }
}

// =============================================================================
// PartChanges
// =============================================================================

/// Partial-update payload for a part.
///
/// Every mutable column gets an `Option`; `id` and `last_updated` are absent
/// on purpose (the id is immutable, the timestamp is stamped by the store).
///
/// ## Example
/// ```rust
/// use pitstop_core::PartChanges;
///
/// let changes = PartChanges::new().quantity(25).price(12.5);
/// assert!(!changes.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartChanges {
    pub category: Option<String>,
    pub car_name: Option<String>,
    pub model: Option<String>,
    pub product_name: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl PartChanges {
    /// Creates an empty change set.
    pub fn new() -> Self {
        PartChanges::default()
    }

    /// Sets the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the car name.
    pub fn car_name(mut self, car_name: impl Into<String>) -> Self {
        self.car_name = Some(car_name.into());
        self
    }

    /// Sets the model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the product name.
    pub fn product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    /// Sets the quantity.
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.car_name.is_none()
            && self.model.is_none()
            && self.product_name.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
    }

    /// Validates the change set: it must name at least one field, and a new
    /// product_name must still be non-empty.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }
        if let Some(name) = &self.product_name {
            validate_product_name(name)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_applies_defaults() {
        let part = NewPart::from_form("", "  ", "", "Spark Plug", "4", "3.20").unwrap();
        assert_eq!(part.category, DEFAULT_CATEGORY);
        assert_eq!(part.car_name, FIELD_SENTINEL);
        assert_eq!(part.model, FIELD_SENTINEL);
        assert_eq!(part.product_name, "Spark Plug");
        assert_eq!(part.quantity, 4);
        assert_eq!(part.price, 3.20);
    }

    #[test]
    fn test_from_form_trims_product_name() {
        let part = NewPart::from_form("1", "Honda", "Civic", "  Air Filter  ", "1", "9").unwrap();
        assert_eq!(part.product_name, "Air Filter");
    }

    #[test]
    fn test_from_form_rejects_blank_product_name() {
        assert!(NewPart::from_form("1", "Honda", "Civic", "", "1", "9").is_err());
        assert!(NewPart::from_form("1", "Honda", "Civic", "   ", "1", "9").is_err());
    }

    #[test]
    fn test_from_form_coerces_bad_numbers_to_zero() {
        let part = NewPart::from_form("1", "-", "-", "Wiper Blade", "lots", "cheap").unwrap();
        assert_eq!(part.quantity, 0);
        assert_eq!(part.price, 0.0);
    }

    #[test]
    fn test_changes_builder_and_is_empty() {
        assert!(PartChanges::new().is_empty());
        assert!(PartChanges::new().validate().is_err());

        let changes = PartChanges::new().quantity(3).car_name("Mazda");
        assert!(!changes.is_empty());
        assert!(changes.validate().is_ok());
        assert_eq!(changes.quantity, Some(3));
        assert_eq!(changes.car_name.as_deref(), Some("Mazda"));
    }

    #[test]
    fn test_changes_rejects_blank_product_name() {
        let changes = PartChanges::new().product_name("  ");
        assert_eq!(
            changes.validate(),
            Err(ValidationError::Required {
                field: "product_name".to_string()
            })
        );
    }

    #[test]
    fn test_into_part_carries_all_fields() {
        let now = Utc::now();
        let part = NewPart::from_form("2", "Ford", "Focus", "Clutch Kit", "2", "210.00")
            .unwrap()
            .into_part(7, now);
        assert_eq!(part.id, 7);
        assert_eq!(part.car_name, "Ford");
        assert_eq!(part.last_updated, now);
    }
}
