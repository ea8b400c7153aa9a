//! # Database Models
//!
//! This module defines the data structures that map to database tables.
//!
//! ## Table Overview
//!
//! | Table | Description |
//! |-------|-------------|
//! | `wallets` | One durable record per wallet, keyed by id |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a wallet record in the database.
///
/// ## Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | id | Uuid | Unique identifier, assigned at creation |
/// | balance | f64 | Non-negative balance, the single source of truth |
/// | created_at | DateTime | Set once at creation |
/// | updated_at | DateTime | Bumped on every successful balance mutation |
///
/// ## Note on Types
///
/// `balance` maps to PostgreSQL `DOUBLE PRECISION`. The non-negative
/// invariant is enforced by the store before every write and backstopped
/// by a `CHECK` constraint on the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletRecord {
    /// The wallet's unique identifier (v4 UUID).
    /// This is the primary key; it is never reused after deletion.
    pub id: Uuid,

    /// Current balance. Always `>= 0` for any committed state.
    pub balance: f64,

    /// When the wallet was created. Immutable.
    pub created_at: DateTime<Utc>,

    /// When the balance was last mutated.
    /// Invariant: `updated_at >= created_at`.
    pub updated_at: DateTime<Utc>,
}
