//! # API Request Models
//!
//! Structures for incoming API request bodies.
//! Each struct represents the expected JSON body for an endpoint.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a new wallet.
///
/// ## Example JSON
///
/// ```json
/// {
///     "initialBalance": 100.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletRequest {
    /// Starting balance for the new wallet. Must be non-negative.
    pub initial_balance: f64,
}

/// Request to apply a balance operation to a wallet.
///
/// ## Example JSON
///
/// ```json
/// {
///     "walletId": "550e8400-e29b-41d4-a716-446655440000",
///     "operationType": "DEPOSIT",
///     "amount": 50.0
/// }
/// ```
///
/// ## Operation Types
///
/// - `DEPOSIT` - credit the wallet
/// - `WITHDRAW` - debit the wallet (rejected if it would overdraw)
/// - `SET` - replace the balance outright
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletOperationRequest {
    /// Target wallet id.
    pub wallet_id: Uuid,

    /// Operation kind symbol. Anything other than the symbols above
    /// fails with `UNKNOWN_OPERATION`.
    pub operation_type: String,

    /// Amount to apply. Must be non-negative.
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_request_uses_camel_case() {
        let body = r#"{
            "walletId": "550e8400-e29b-41d4-a716-446655440000",
            "operationType": "WITHDRAW",
            "amount": 30.5
        }"#;

        let req: WalletOperationRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.operation_type, "WITHDRAW");
        assert_eq!(req.amount, 30.5);
    }

    #[test]
    fn create_request_round_trips() {
        let req = CreateWalletRequest { initial_balance: 100.0 };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("initialBalance"));

        let back: CreateWalletRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.initial_balance, 100.0);
    }
}
