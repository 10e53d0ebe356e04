//! # Part Repository
//!
//! Database operations for the parts inventory.
//!
//! ## Key Operations
//! - CRUD with lenient form-input normalization (done in pitstop-core)
//! - Substring search across car, model and product name
//! - Prefix lookup for the search bar's autocomplete
//! - Chunked, transactional batch delete
//!
//! ## Batch Delete
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 delete_many([id; 250])                                  │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │   ├── DELETE FROM parts WHERE id IN (…100 ids…)                        │
//! │   ├── DELETE FROM parts WHERE id IN (…100 ids…)                        │
//! │   └── DELETE FROM parts WHERE id IN (…50 ids…)                         │
//! │  COMMIT ← all chunks or none; a failed chunk rolls the batch back      │
//! │                                                                         │
//! │  Ids that match no row are skipped, not errors: deleting a part that   │
//! │  another window already removed still lets the rest of the batch land. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use pitstop_core::validation::validate_search_query;
use pitstop_core::{NewPart, Part, PartChanges, DELETE_CHUNK_SIZE, FIELD_SENTINEL};

/// Columns selected whenever a full row is returned.
const PART_COLUMNS: &str = "id, category, car_name, model, product_name, quantity, price, last_updated";

/// Repository for part database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = PartRepository::new(pool);
///
/// let part = repo.add(NewPart::from_form("1", "Toyota", "Corolla", "Brake Pad", "10", "49.99")?).await?;
/// let found = repo.search("brake").await?;
/// ```
#[derive(Debug, Clone)]
pub struct PartRepository {
    pool: SqlitePool,
}

impl PartRepository {
    /// Creates a new PartRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PartRepository { pool }
    }

    /// Inserts a new part.
    ///
    /// The payload has already been normalized by [`NewPart`] construction;
    /// this method re-validates so a hand-built struct cannot smuggle an
    /// empty product name past the gate, then inserts inside a transaction
    /// and returns the stored row with its assigned id. Success is carried
    /// by the commit: if this returns `Ok`, the row is durable and readable.
    ///
    /// ## Errors
    /// * `DbError::Validation` - empty product name, storage untouched
    pub async fn add(&self, new: NewPart) -> DbResult<Part> {
        new.validate()?;

        let now = Utc::now();

        debug!(product_name = %new.product_name, "Inserting part");

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO parts (category, car_name, model, product_name, quantity, price, last_updated)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&new.category)
        .bind(&new.car_name)
        .bind(&new.model)
        .bind(&new.product_name)
        .bind(new.quantity)
        .bind(new.price)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();
        tx.commit().await?;

        Ok(new.into_part(id, now))
    }

    /// Gets a part by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Part))` - Part found
    /// * `Ok(None)` - No such id (never an error)
    pub async fn get(&self, id: i64) -> DbResult<Option<Part>> {
        let part = sqlx::query_as::<_, Part>(&format!(
            "SELECT {PART_COLUMNS} FROM parts WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(part)
    }

    /// Gets a part by its exact product name.
    ///
    /// Used by the add dialog to warn about near-duplicate entries.
    pub async fn get_by_name(&self, product_name: &str) -> DbResult<Option<Part>> {
        let part = sqlx::query_as::<_, Part>(&format!(
            "SELECT {PART_COLUMNS} FROM parts WHERE product_name = ?1 LIMIT 1"
        ))
        .bind(product_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(part)
    }

    /// Gets every part, most recently touched first.
    pub async fn get_all(&self) -> DbResult<Vec<Part>> {
        let parts = sqlx::query_as::<_, Part>(&format!(
            "SELECT {PART_COLUMNS} FROM parts ORDER BY last_updated DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(parts)
    }

    /// Applies a partial update to a part.
    ///
    /// Only the fields set in `changes` are written; `last_updated` is bumped
    /// unconditionally in the same statement.
    ///
    /// ## Returns
    /// * `Ok(true)` - the row was matched (including a value-identical no-op)
    /// * `Ok(false)` - no row with this id, nothing written
    ///
    /// ## Errors
    /// * `DbError::Validation` - empty change set, or blank product name
    pub async fn update(&self, id: i64, changes: PartChanges) -> DbResult<bool> {
        changes.validate()?;

        debug!(id = %id, "Updating part");

        let now = Utc::now();

        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE parts SET ");
        {
            let mut sep = qb.separated(", ");
            if let Some(category) = changes.category {
                sep.push("category = ").push_bind_unseparated(category);
            }
            if let Some(car_name) = changes.car_name {
                sep.push("car_name = ").push_bind_unseparated(car_name);
            }
            if let Some(model) = changes.model {
                sep.push("model = ").push_bind_unseparated(model);
            }
            if let Some(product_name) = changes.product_name {
                sep.push("product_name = ").push_bind_unseparated(product_name);
            }
            if let Some(quantity) = changes.quantity {
                sep.push("quantity = ").push_bind_unseparated(quantity);
            }
            if let Some(price) = changes.price {
                sep.push("price = ").push_bind_unseparated(price);
            }
            sep.push("last_updated = ").push_bind_unseparated(now);
        }
        qb.push(" WHERE id = ").push_bind(id);

        let result = qb.build().execute(&self.pool).await?;

        // SQLite counts every matched row as changed, so zero here can only
        // mean the id does not exist.
        Ok(result.rows_affected() > 0)
    }

    /// Deletes a part by id.
    ///
    /// ## Returns
    /// * `Ok(true)` - exactly one row removed
    /// * `Ok(false)` - id did not exist (ids are positive, so anything else
    ///   short-circuits without touching storage)
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        if id <= 0 {
            return Ok(false);
        }

        debug!(id = %id, "Deleting part");

        let result = sqlx::query("DELETE FROM parts WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Deletes a batch of parts in a single transaction.
    ///
    /// Ids are bound in chunks of [`DELETE_CHUNK_SIZE`] to stay under
    /// SQLite's per-statement parameter limit. Ids that match no row are
    /// skipped; a failure in any chunk rolls back the entire batch.
    ///
    /// ## Returns
    /// The number of rows actually removed.
    ///
    /// ## Errors
    /// * `DbError::Validation` - empty id set, no transaction opened
    pub async fn delete_many(&self, ids: &[i64]) -> DbResult<u64> {
        if ids.is_empty() {
            return Err(pitstop_core::ValidationError::EmptyBatch.into());
        }

        debug!(count = ids.len(), "Batch-deleting parts");

        let mut tx = self.pool.begin().await?;
        let mut deleted = 0u64;

        for chunk in ids.chunks(DELETE_CHUNK_SIZE) {
            let mut qb = QueryBuilder::<Sqlite>::new("DELETE FROM parts WHERE id IN (");
            {
                let mut sep = qb.separated(", ");
                for id in chunk {
                    sep.push_bind(*id);
                }
            }
            qb.push(")");

            let result = qb.build().execute(&mut *tx).await?;
            deleted += result.rows_affected();
        }

        tx.commit().await?;

        debug!(deleted = deleted, "Batch delete committed");
        Ok(deleted)
    }

    /// Case-insensitive substring search across car name, model and product
    /// name. An empty term matches every row.
    ///
    /// LIKE wildcards in the term are escaped, so searching for "50%" finds
    /// literal "50%" and nothing else. Results come back most recently
    /// touched first, same as [`get_all`](Self::get_all).
    pub async fn search(&self, term: &str) -> DbResult<Vec<Part>> {
        let term = validate_search_query(term)?;

        debug!(term = %term, "Searching parts");

        let pattern = format!("%{}%", escape_like(&term));

        let parts = sqlx::query_as::<_, Part>(&format!(
            r#"
            SELECT {PART_COLUMNS} FROM parts
            WHERE car_name LIKE ?1 ESCAPE '\'
               OR model LIKE ?1 ESCAPE '\'
               OR product_name LIKE ?1 ESCAPE '\'
            ORDER BY last_updated DESC
            "#
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = parts.len(), "Search returned parts");
        Ok(parts)
    }

    /// Product names starting with the given text, for autocomplete.
    ///
    /// Case-insensitive, distinct, alphabetical, capped at `limit`.
    pub async fn search_prefix(&self, term: &str, limit: u32) -> DbResult<Vec<String>> {
        let term = validate_search_query(term)?;

        let pattern = format!("{}%", escape_like(&term));

        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT product_name FROM parts
            WHERE product_name LIKE ?1 ESCAPE '\'
            ORDER BY product_name COLLATE NOCASE ASC
            LIMIT ?2
            "#,
        )
        .bind(pattern)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    /// Unique car names in the inventory, alphabetical, excluding the "-"
    /// placeholder rows.
    pub async fn distinct_cars(&self) -> DbResult<Vec<String>> {
        let cars = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT car_name FROM parts
            WHERE car_name <> ?1
            ORDER BY car_name COLLATE NOCASE ASC
            "#,
        )
        .bind(FIELD_SENTINEL)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    /// Parts at or below the given stock threshold, lowest first.
    ///
    /// The threshold comes from the `low_stock_threshold` setting.
    pub async fn low_stock(&self, threshold: i64) -> DbResult<Vec<Part>> {
        let parts = sqlx::query_as::<_, Part>(&format!(
            r#"
            SELECT {PART_COLUMNS} FROM parts
            WHERE quantity <= ?1
            ORDER BY quantity ASC, product_name COLLATE NOCASE ASC
            "#
        ))
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(parts)
    }

    /// Counts total parts (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM parts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Escapes LIKE wildcards so user input always means literal text.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::DbError;
    use pitstop_core::{DEFAULT_CATEGORY, FIELD_SENTINEL};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn brake_pad() -> NewPart {
        NewPart::from_form("1", "Toyota", "Corolla", "Brake Pad", "10", "49.99").unwrap()
    }

    #[tokio::test]
    async fn test_add_then_get_round_trip() {
        let db = test_db().await;
        let repo = db.parts();

        let added = repo.add(brake_pad()).await.unwrap();
        assert!(added.id >= 1);

        let fetched = repo.get(added.id).await.unwrap().unwrap();
        assert_eq!(fetched, added);
        assert_eq!(fetched.category, "1");
        assert_eq!(fetched.car_name, "Toyota");
        assert_eq!(fetched.quantity, 10);
        assert_eq!(fetched.price, 49.99);
    }

    #[tokio::test]
    async fn test_add_applies_defaults_and_coercion() {
        let db = test_db().await;
        let repo = db.parts();

        let added = repo
            .add(NewPart::from_form("", "", "", "Oil Filter", "junk", "junk").unwrap())
            .await
            .unwrap();

        let fetched = repo.get(added.id).await.unwrap().unwrap();
        assert_eq!(fetched.category, DEFAULT_CATEGORY);
        assert_eq!(fetched.car_name, FIELD_SENTINEL);
        assert_eq!(fetched.model, FIELD_SENTINEL);
        assert_eq!(fetched.quantity, 0);
        assert_eq!(fetched.price, 0.0);
    }

    #[tokio::test]
    async fn test_add_rejects_blank_product_name() {
        let db = test_db().await;
        let repo = db.parts();

        let invalid = NewPart {
            category: "1".into(),
            car_name: "-".into(),
            model: "-".into(),
            product_name: "   ".into(),
            quantity: 5,
            price: 10.0,
        };

        let err = repo.add(invalid).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_missing_id_is_none() {
        let db = test_db().await;
        assert!(db.parts().get(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_name() {
        let db = test_db().await;
        let repo = db.parts();
        repo.add(brake_pad()).await.unwrap();

        assert!(repo.get_by_name("Brake Pad").await.unwrap().is_some());
        assert!(repo.get_by_name("brake pad").await.unwrap().is_none()); // exact match only
        assert!(repo.get_by_name("Radiator").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_all_orders_by_last_updated_desc() {
        let db = test_db().await;
        let repo = db.parts();

        let first = repo
            .add(NewPart::from_form("1", "Toyota", "-", "Alternator", "1", "1").unwrap())
            .await
            .unwrap();
        let _second = repo
            .add(NewPart::from_form("1", "Honda", "-", "Radiator", "1", "1").unwrap())
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].product_name, "Radiator");

        // Touching the older row moves it back to the front.
        repo.update(first.id, PartChanges::new().quantity(2))
            .await
            .unwrap();
        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].product_name, "Alternator");
    }

    #[tokio::test]
    async fn test_update_changes_fields_and_bumps_timestamp() {
        let db = test_db().await;
        let repo = db.parts();

        let added = repo.add(brake_pad()).await.unwrap();
        let before = repo.get(added.id).await.unwrap().unwrap();

        let ok = repo
            .update(added.id, PartChanges::new().quantity(25).price(39.5))
            .await
            .unwrap();
        assert!(ok);

        let after = repo.get(added.id).await.unwrap().unwrap();
        assert_eq!(after.quantity, 25);
        assert_eq!(after.price, 39.5);
        // Untouched fields stay put.
        assert_eq!(after.product_name, "Brake Pad");
        assert_eq!(after.car_name, "Toyota");
        assert!(after.last_updated > before.last_updated);
    }

    #[tokio::test]
    async fn test_update_missing_id_returns_false() {
        let db = test_db().await;
        let repo = db.parts();
        repo.add(brake_pad()).await.unwrap();

        let ok = repo
            .update(9999, PartChanges::new().quantity(1))
            .await
            .unwrap();
        assert!(!ok);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_same_values_is_success() {
        let db = test_db().await;
        let repo = db.parts();
        let added = repo.add(brake_pad()).await.unwrap();

        // Writing the values already stored is "found, nothing to change",
        // which still counts as success.
        let ok = repo
            .update(added.id, PartChanges::new().quantity(added.quantity))
            .await
            .unwrap();
        assert!(ok);
    }

    #[tokio::test]
    async fn test_update_rejects_empty_changes() {
        let db = test_db().await;
        let repo = db.parts();
        let added = repo.add(brake_pad()).await.unwrap();

        let err = repo.update(added.id, PartChanges::new()).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing() {
        let db = test_db().await;
        let repo = db.parts();
        let added = repo.add(brake_pad()).await.unwrap();

        assert!(repo.delete(added.id).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.get(added.id).await.unwrap().is_none());

        assert!(!repo.delete(added.id).await.unwrap());
        assert!(!repo.delete(-1).await.unwrap());
        assert!(!repo.delete(0).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_many_skips_missing_ids() {
        let db = test_db().await;
        let repo = db.parts();

        let a = repo.add(brake_pad()).await.unwrap();
        let b = repo
            .add(NewPart::from_form("1", "Honda", "Civic", "Radiator", "2", "80").unwrap())
            .await
            .unwrap();

        let deleted = repo.delete_many(&[a.id, 9999, b.id]).await.unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_many_empty_batch_is_rejected() {
        let db = test_db().await;
        let err = db.parts().delete_many(&[]).await.unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_many_spans_chunks() {
        let db = test_db().await;
        let repo = db.parts();

        let mut ids = Vec::new();
        for i in 0..(DELETE_CHUNK_SIZE + 5) {
            let part = repo
                .add(NewPart::from_form("1", "-", "-", &format!("Bolt {i}"), "1", "0.1").unwrap())
                .await
                .unwrap();
            ids.push(part.id);
        }

        let deleted = repo.delete_many(&ids).await.unwrap();
        assert_eq!(deleted as usize, DELETE_CHUNK_SIZE + 5);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_search_matches_any_field_case_insensitively() {
        let db = test_db().await;
        let repo = db.parts();

        repo.add(brake_pad()).await.unwrap();
        repo.add(NewPart::from_form("2", "Honda", "Civic", "Radiator", "3", "80").unwrap())
            .await
            .unwrap();

        // By car name, wrong case.
        let hits = repo.search("toyota").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_name, "Brake Pad");

        // By model substring.
        let hits = repo.search("ivi").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_name, "Radiator");

        // By product name.
        assert_eq!(repo.search("pad").await.unwrap().len(), 1);

        // No hits.
        assert!(repo.search("nothing here").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_empty_term_matches_all() {
        let db = test_db().await;
        let repo = db.parts();
        repo.add(brake_pad()).await.unwrap();
        repo.add(NewPart::from_form("2", "Honda", "Civic", "Radiator", "3", "80").unwrap())
            .await
            .unwrap();

        assert_eq!(repo.search("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_as_literals() {
        let db = test_db().await;
        let repo = db.parts();

        repo.add(NewPart::from_form("1", "-", "-", "50% Coolant Mix", "1", "8").unwrap())
            .await
            .unwrap();
        repo.add(NewPart::from_form("1", "-", "-", "500ml Coolant", "1", "6").unwrap())
            .await
            .unwrap();

        let hits = repo.search("50%").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_name, "50% Coolant Mix");

        // "_" must not act as a single-character wildcard either.
        assert!(repo.search("5_0").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_prefix_distinct_sorted_limited() {
        let db = test_db().await;
        let repo = db.parts();

        for (name, car) in [
            ("Brake Pad", "Toyota"),
            ("Brake Pad", "Honda"), // duplicate name, different car
            ("Brake Disc", "-"),
            ("brake fluid", "-"),
            ("Radiator", "-"),
        ] {
            repo.add(NewPart::from_form("1", car, "-", name, "1", "1").unwrap())
                .await
                .unwrap();
        }

        let names = repo.search_prefix("bra", 10).await.unwrap();
        assert_eq!(names, vec!["Brake Disc", "brake fluid", "Brake Pad"]);

        let capped = repo.search_prefix("bra", 2).await.unwrap();
        assert_eq!(capped.len(), 2);

        assert!(repo.search_prefix("xyz", 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_distinct_cars_excludes_sentinel() {
        let db = test_db().await;
        let repo = db.parts();

        repo.add(NewPart::from_form("1", "Toyota", "-", "A", "1", "1").unwrap())
            .await
            .unwrap();
        repo.add(NewPart::from_form("1", "Honda", "-", "B", "1", "1").unwrap())
            .await
            .unwrap();
        repo.add(NewPart::from_form("1", "Toyota", "-", "C", "1", "1").unwrap())
            .await
            .unwrap();
        repo.add(NewPart::from_form("1", "", "-", "D", "1", "1").unwrap())
            .await
            .unwrap();

        assert_eq!(repo.distinct_cars().await.unwrap(), vec!["Honda", "Toyota"]);
    }

    #[tokio::test]
    async fn test_low_stock_threshold() {
        let db = test_db().await;
        let repo = db.parts();

        repo.add(NewPart::from_form("1", "-", "-", "Plenty", "50", "1").unwrap())
            .await
            .unwrap();
        repo.add(NewPart::from_form("1", "-", "-", "Scarce", "3", "1").unwrap())
            .await
            .unwrap();
        repo.add(NewPart::from_form("1", "-", "-", "Gone", "0", "1").unwrap())
            .await
            .unwrap();

        let low = repo.low_stock(10).await.unwrap();
        let names: Vec<_> = low.iter().map(|p| p.product_name.as_str()).collect();
        assert_eq!(names, vec!["Gone", "Scarce"]);
    }

    #[tokio::test]
    async fn test_concurrent_updates_last_writer_wins() {
        let db = test_db().await;
        let repo = db.parts();
        let added = repo.add(brake_pad()).await.unwrap();

        let (a, b) = tokio::join!(
            repo.update(added.id, PartChanges::new().quantity(111)),
            repo.update(added.id, PartChanges::new().quantity(222)),
        );
        assert!(a.unwrap());
        assert!(b.unwrap());

        let after = repo.get(added.id).await.unwrap().unwrap();
        assert!(after.quantity == 111 || after.quantity == 222);
        assert!(after.last_updated > added.last_updated);
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
