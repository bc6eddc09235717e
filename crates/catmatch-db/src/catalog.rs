//! The catalog-reader collaborator: full-table reads of reference products.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use catmatch_core::CatalogEntry;

use crate::DbError;

/// A row from the `catalog_products` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CatalogRow {
    pub id: i64,
    pub name: String,
    /// Price as stored: a decimal string (the catalog keeps prices as text,
    /// exactly as ingested).
    pub price: String,
    /// JSON-encoded attribute map; `NULL` for entries ingested without specs.
    pub specs: Option<String>,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CatalogRow> for CatalogEntry {
    fn from(row: CatalogRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            specs: row.specs.unwrap_or_default(),
            link: row.link,
        }
    }
}

/// Fetches every catalog entry, ordered by id for deterministic scans.
///
/// The full table is loaded into memory; reconciliation scores every entry,
/// so there is nothing to gain from streaming here.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the read fails.
pub async fn fetch_catalog(pool: &PgPool) -> Result<Vec<CatalogEntry>, DbError> {
    let rows = sqlx::query_as::<_, CatalogRow>(
        "SELECT id, name, price, specs, link, created_at, updated_at \
         FROM catalog_products \
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!(entries = rows.len(), "loaded catalog snapshot");
    Ok(rows.into_iter().map(CatalogEntry::from).collect())
}
