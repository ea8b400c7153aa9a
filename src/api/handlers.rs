//! # API Request Handlers
//!
//! This module contains the handler functions for each API endpoint.
//! Each handler:
//! 1. Extracts request data
//! 2. Calls the wallet service
//! 3. Returns a formatted response
//!
//! ## Error Handling
//!
//! Every failure kind has a fixed status code:
//!
//! | Failure | Code | Status |
//! |---------|------|--------|
//! | Negative amount | `INVALID_AMOUNT` | 400 |
//! | Unrecognized operation | `UNKNOWN_OPERATION` | 400 |
//! | Overdraw | `INSUFFICIENT_FUNDS` | 402 |
//! | Missing wallet | `WALLET_NOT_FOUND` | 404 |
//! | Infrastructure | `INTERNAL_ERROR` | 500 |

use std::sync::Arc;
use actix_web::{web, HttpResponse};
use actix_web::http::StatusCode;
use chrono::Utc;
use tracing::{info, error};
use uuid::Uuid;

use crate::AppState;
use crate::models::{
    ApiResponse,
    CreateWalletRequest,
    WalletOperationRequest,
    WalletResponse,
    WalletOperationResponse,
    HealthResponse,
};
use crate::services::WalletError;
use serde_json::json;

/// Map a wallet error to an HTTP response.
///
/// Domain failures surface their own message; infrastructure failures are
/// logged in full but answered with a generic message so backing-store
/// error text never reaches the client.
fn wallet_error_response(err: &WalletError) -> HttpResponse {
    let (status, code) = match err {
        WalletError::InvalidAmount(_) => (StatusCode::BAD_REQUEST, "INVALID_AMOUNT"),
        WalletError::UnknownOperation(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_OPERATION"),
        WalletError::InsufficientFunds { .. } => (StatusCode::PAYMENT_REQUIRED, "INSUFFICIENT_FUNDS"),
        WalletError::WalletNotFound(_) => (StatusCode::NOT_FOUND, "WALLET_NOT_FOUND"),
        WalletError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    };

    let message = match err {
        WalletError::Database(detail) => {
            error!("Internal error: {}", detail);
            "internal server error".to_string()
        }
        other => other.to_string(),
    };

    HttpResponse::build(status).json(ApiResponse::<()>::error(code, &message))
}

/// API information endpoint (root).
///
/// Returns information about available API endpoints.
///
/// ## Endpoint
///
/// `GET /`
pub async fn api_info() -> HttpResponse {
    let info = json!({
        "name": "Wallet API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Backend API for wallet and balance management",
        "endpoints": {
            "health": {
                "method": "GET",
                "path": "/health",
                "description": "Health check endpoint"
            },
            "wallets": {
                "create": {
                    "method": "POST",
                    "path": "/wallets",
                    "description": "Create a new wallet"
                },
                "list": {
                    "method": "GET",
                    "path": "/wallets",
                    "description": "List all wallets"
                },
                "get": {
                    "method": "GET",
                    "path": "/wallets/{id}",
                    "description": "Get a wallet by id"
                },
                "delete": {
                    "method": "DELETE",
                    "path": "/wallets/{id}",
                    "description": "Delete a wallet"
                },
                "operation": {
                    "method": "POST",
                    "path": "/wallets/operation",
                    "description": "Apply a DEPOSIT, WITHDRAW or SET operation"
                }
            }
        }
    });

    HttpResponse::Ok().json(ApiResponse::success(info))
}

/// Health check endpoint.
///
/// Check if the backend is running and can reach its database.
///
/// ## Endpoint
///
/// `GET /health`
///
/// ## Example
///
/// ```bash
/// curl http://127.0.0.1:8080/health
/// ```
pub async fn health_check(
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    // Check database
    let db_healthy = state.db.pool()
        .get()
        .await
        .is_ok();

    let response = HealthResponse {
        status: if db_healthy { "healthy" } else { "unhealthy" }.to_string(),
        database: db_healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    };

    let status_code = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    HttpResponse::build(status_code)
        .json(ApiResponse::success(response))
}

/// Create a new wallet.
///
/// ## Endpoint
///
/// `POST /wallets`
///
/// ## Example
///
/// ```bash
/// curl -X POST http://127.0.0.1:8080/wallets \
///   -H "Content-Type: application/json" \
///   -d '{"initialBalance": 100.0}'
/// ```
///
/// ## Errors
///
/// - `INVALID_AMOUNT` - initial balance is negative
pub async fn create_wallet(
    state: web::Data<Arc<AppState>>,
    body: web::Json<CreateWalletRequest>,
) -> HttpResponse {
    info!("Create wallet request (balance: {})", body.initial_balance);

    match state.wallet_service.create_wallet(body.initial_balance).await {
        Ok(wallet) => {
            HttpResponse::Created().json(ApiResponse::success(WalletResponse::from(wallet)))
        }
        Err(e) => wallet_error_response(&e),
    }
}

/// List all wallets.
///
/// Order is stable across calls with no intervening writes
/// (insertion order).
///
/// ## Endpoint
///
/// `GET /wallets`
pub async fn list_wallets(
    state: web::Data<Arc<AppState>>,
) -> HttpResponse {
    info!("List wallets request");

    match state.wallet_service.list_wallets().await {
        Ok(wallets) => {
            let wallets: Vec<WalletResponse> = wallets
                .into_iter()
                .map(WalletResponse::from)
                .collect();

            HttpResponse::Ok().json(ApiResponse::success(wallets))
        }
        Err(e) => wallet_error_response(&e),
    }
}

/// Get a wallet by id.
///
/// ## Endpoint
///
/// `GET /wallets/{id}`
///
/// ## Example
///
/// ```bash
/// curl http://127.0.0.1:8080/wallets/550e8400-e29b-41d4-a716-446655440000
/// ```
///
/// ## Errors
///
/// - `WALLET_NOT_FOUND` - no wallet has the given id
pub async fn get_wallet(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();
    info!("Get wallet request: {}", id);

    match state.wallet_service.get_wallet(id).await {
        Ok(wallet) => HttpResponse::Ok().json(ApiResponse::success(WalletResponse::from(wallet))),
        Err(e) => wallet_error_response(&e),
    }
}

/// Delete a wallet.
///
/// Deletion is terminal: deleting the same id twice fails the second time.
///
/// ## Endpoint
///
/// `DELETE /wallets/{id}`
///
/// ## Errors
///
/// - `WALLET_NOT_FOUND` - no wallet has the given id
pub async fn delete_wallet(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();
    info!("Delete wallet request: {}", id);

    match state.wallet_service.delete_wallet(id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => wallet_error_response(&e),
    }
}

/// Apply a balance operation (DEPOSIT / WITHDRAW / SET).
///
/// ## Endpoint
///
/// `POST /wallets/operation`
///
/// ## Example
///
/// ```bash
/// curl -X POST http://127.0.0.1:8080/wallets/operation \
///   -H "Content-Type: application/json" \
///   -d '{
///     "walletId": "550e8400-e29b-41d4-a716-446655440000",
///     "operationType": "DEPOSIT",
///     "amount": 50.0
///   }'
/// ```
///
/// ## Errors
///
/// - `INVALID_AMOUNT` - amount is negative
/// - `UNKNOWN_OPERATION` - operation type not recognized
/// - `INSUFFICIENT_FUNDS` - withdrawal exceeds balance (402)
/// - `WALLET_NOT_FOUND` - no wallet has the given id
pub async fn change_balance(
    state: web::Data<Arc<AppState>>,
    body: web::Json<WalletOperationRequest>,
) -> HttpResponse {
    info!(
        "Balance operation request: {} {} on wallet {}",
        body.operation_type, body.amount, body.wallet_id
    );

    let request = body.into_inner();

    match state.wallet_service
        .change_balance(request.wallet_id, &request.operation_type, request.amount)
        .await
    {
        Ok(change) => {
            let response = WalletOperationResponse {
                wallet_id: change.wallet.id,
                operation_type: request.operation_type,
                old_balance: change.old_balance,
                new_balance: change.new_balance,
                amount: request.amount,
                timestamp: Utc::now(),
            };

            HttpResponse::Ok().json(ApiResponse::success(response))
        }
        Err(e) => wallet_error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    async fn status_and_body(err: WalletError) -> (StatusCode, serde_json::Value) {
        let resp = wallet_error_response(&err);
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn every_failure_kind_maps_to_fixed_status_and_code() {
        let cases = [
            (
                WalletError::InvalidAmount(-1.0),
                StatusCode::BAD_REQUEST,
                "INVALID_AMOUNT",
            ),
            (
                WalletError::UnknownOperation("BOGUS".to_string()),
                StatusCode::BAD_REQUEST,
                "UNKNOWN_OPERATION",
            ),
            (
                WalletError::InsufficientFunds { available: 90.0, requested: 1000.0 },
                StatusCode::PAYMENT_REQUIRED,
                "INSUFFICIENT_FUNDS",
            ),
            (
                WalletError::WalletNotFound(Uuid::new_v4()),
                StatusCode::NOT_FOUND,
                "WALLET_NOT_FOUND",
            ),
            (
                WalletError::Database("connection refused".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
            ),
        ];

        for (err, expected_status, expected_code) in cases {
            let (status, body) = status_and_body(err).await;
            assert_eq!(status, expected_status, "code: {expected_code}");
            assert_eq!(body["success"], false);
            assert!(body["data"].is_null());
            assert_eq!(body["error"]["code"], expected_code);
        }
    }

    #[tokio::test]
    async fn domain_failures_carry_their_own_message() {
        let (_, body) = status_and_body(
            WalletError::InsufficientFunds { available: 90.0, requested: 1000.0 },
        ).await;

        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("90"));
        assert!(message.contains("1000"));
    }

    #[tokio::test]
    async fn internal_failures_do_not_leak_store_detail() {
        let detail = "relation \"wallets\" does not exist";
        let (_, body) = status_and_body(WalletError::Database(detail.to_string())).await;

        let message = body["error"]["message"].as_str().unwrap();
        assert_eq!(message, "internal server error");
        assert!(!message.contains("relation"));
    }
}
