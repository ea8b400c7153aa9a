//! # API Response Models
//!
//! Structures for outgoing API response bodies.
//! All responses are wrapped in a standard format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::WalletRecord;

/// Standard API response wrapper.
///
/// All API responses follow this format:
///
/// ## Success Response
///
/// ```json
/// {
///     "success": true,
///     "data": { ... },
///     "error": null
/// }
/// ```
///
/// ## Error Response
///
/// ```json
/// {
///     "success": false,
///     "data": null,
///     "error": {
///         "code": "INSUFFICIENT_FUNDS",
///         "message": "Insufficient funds: available 90, requested 1000"
///     }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,

    /// Response data (null on error).
    pub data: Option<T>,

    /// Error information (null on success).
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

/// API error information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Error code (e.g., "INSUFFICIENT_FUNDS").
    pub code: String,

    /// Human-readable error message.
    pub message: String,
}

/// Wallet representation returned by the API.
///
/// Returned by `POST /wallets`, `GET /wallets/{id}` and `GET /wallets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletResponse {
    /// The wallet's unique identifier.
    pub wallet_id: Uuid,

    /// Current balance.
    pub balance: f64,

    /// When the wallet was created.
    pub created_at: DateTime<Utc>,

    /// When the balance was last mutated.
    pub updated_at: DateTime<Utc>,
}

impl From<WalletRecord> for WalletResponse {
    fn from(record: WalletRecord) -> Self {
        Self {
            wallet_id: record.id,
            balance: record.balance,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Result of a balance operation.
///
/// Returned by `POST /wallets/operation`.
///
/// ## Example Response
///
/// ```json
/// {
///     "success": true,
///     "data": {
///         "walletId": "550e8400-e29b-41d4-a716-446655440000",
///         "operationType": "DEPOSIT",
///         "oldBalance": 100.0,
///         "newBalance": 150.0,
///         "amount": 50.0,
///         "timestamp": "2025-12-08T12:00:00Z"
///     }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOperationResponse {
    /// The wallet the operation was applied to.
    pub wallet_id: Uuid,

    /// The operation kind that was applied.
    pub operation_type: String,

    /// Balance before the operation.
    pub old_balance: f64,

    /// Balance after the operation committed.
    pub new_balance: f64,

    /// The requested amount.
    pub amount: f64,

    /// When the response was produced.
    pub timestamp: DateTime<Utc>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy".
    pub status: String,

    /// Whether the database responded.
    pub database: bool,

    /// Backend version.
    pub version: String,

    /// When the check ran.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_shape() {
        let resp = ApiResponse::<()>::error("WALLET_NOT_FOUND", "Wallet not found");
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["error"]["code"], "WALLET_NOT_FOUND");
    }

    #[test]
    fn wallet_response_uses_camel_case() {
        let now = Utc::now();
        let record = WalletRecord {
            id: Uuid::new_v4(),
            balance: 42.0,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(WalletResponse::from(record)).unwrap();
        assert!(json.get("walletId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["balance"], 42.0);
    }
}
