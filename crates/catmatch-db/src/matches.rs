//! The persistence-sink collaborator: scraped listings and accepted matches.

use sqlx::PgPool;

use catmatch_core::{MatchReport, ScrapedProduct};

use crate::DbError;

/// Inserts a scraped product, skipping listings already stored under the same
/// name. Returns `true` if a row was inserted.
///
/// The scraped spec map is stored JSON-encoded, matching the shape
/// `catalog_products.specs` uses.
///
/// # Errors
///
/// Returns [`DbError::SpecsEncode`] if the spec map fails to serialize, or
/// [`DbError::Sqlx`] if the insert fails.
pub async fn insert_scraped_product(
    pool: &PgPool,
    product: &ScrapedProduct,
) -> Result<bool, DbError> {
    let specs = serde_json::to_string(&product.specs)?;

    let rows_affected = sqlx::query(
        "INSERT INTO scraped_products (name, price, link, specs, description) \
         VALUES ($1, $2, $3, $4, $5) \
         ON CONFLICT (name) DO NOTHING",
    )
    .bind(&product.name)
    .bind(&product.price)
    .bind(&product.link)
    .bind(&specs)
    .bind(&product.description)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(rows_affected > 0)
}

/// Records an accepted match: the scraped listing, the catalog entry it
/// reconciled to, and the composite similarity score.
///
/// Returns the internal id of the inserted row.
///
/// # Errors
///
/// Returns [`DbError::SpecsEncode`] if the scraped spec map fails to
/// serialize, or [`DbError::Sqlx`] if the insert fails.
pub async fn insert_match_report(pool: &PgPool, report: &MatchReport) -> Result<i64, DbError> {
    let scraped_specs = serde_json::to_string(&report.scraped_product.specs)?;

    let id: i64 = sqlx::query_scalar::<_, i64>(
        "INSERT INTO product_matches \
             (scraped_name, scraped_price, scraped_link, scraped_specs, \
              catalog_product_id, similarity_score, matched_at) \
         VALUES ($1, $2, $3, $4, $5, $6, NOW()) \
         RETURNING id",
    )
    .bind(&report.scraped_product.name)
    .bind(&report.scraped_product.price)
    .bind(&report.scraped_product.link)
    .bind(&scraped_specs)
    .bind(report.database_match.id)
    .bind(report.similarity_score)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
