//! # Database Queries
//!
//! Read-path SQL for the `wallets` table. The mutating queries live in
//! `services::wallet_store`, because every mutation runs inside its own
//! transaction with a row lock; plain reads never take that lock and may
//! observe a state that is concurrently being superseded.
//!
//! ## Error Handling
//!
//! All queries return `Result<T, DatabaseError>`.

use deadpool_postgres::Pool;
use tokio_postgres::Row;
use uuid::Uuid;
use tracing::debug;

use super::models::WalletRecord;
use super::DatabaseError;

/// Helper to convert a database row to a WalletRecord.
pub fn row_to_wallet(row: &Row) -> WalletRecord {
    WalletRecord {
        id: row.get("id"),
        balance: row.get("balance"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Get a wallet by id.
///
/// Returns `Ok(None)` when no wallet has the given id.
pub async fn get_wallet_by_id(
    pool: &Pool,
    id: Uuid,
) -> Result<Option<WalletRecord>, DatabaseError> {
    debug!("Fetching wallet: {}", id);

    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let row = client.query_opt(
        r#"
        SELECT id, balance, created_at, updated_at
        FROM wallets
        WHERE id = $1
        "#,
        &[&id],
    ).await?;

    Ok(row.map(|r| row_to_wallet(&r)))
}

/// Get all wallets.
///
/// Ordered by creation time (id breaks ties), so two calls with no
/// intervening writes return the same order.
pub async fn list_wallets(pool: &Pool) -> Result<Vec<WalletRecord>, DatabaseError> {
    debug!("Fetching all wallets");

    let client = pool.get().await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let rows = client.query(
        r#"
        SELECT id, balance, created_at, updated_at
        FROM wallets
        ORDER BY created_at ASC, id ASC
        "#,
        &[],
    ).await?;

    Ok(rows.iter().map(row_to_wallet).collect())
}
