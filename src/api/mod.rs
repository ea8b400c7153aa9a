//! # REST API Module
//!
//! This module defines all HTTP endpoints for the Wallet API.
//!
//! ## Endpoint Overview
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/wallets` | Create new wallet |
//! | GET | `/wallets` | List all wallets |
//! | GET | `/wallets/{id}` | Get a wallet |
//! | DELETE | `/wallets/{id}` | Delete a wallet |
//! | POST | `/wallets/operation` | Deposit / withdraw / set balance |
//! | GET | `/health` | Health check |
//!
//! ## Request/Response Format
//!
//! All requests and responses use JSON:
//!
//! ```json
//! // Success response
//! {
//!     "success": true,
//!     "data": { ... }
//! }
//!
//! // Error response
//! {
//!     "success": false,
//!     "error": {
//!         "code": "ERROR_CODE",
//!         "message": "Human readable message"
//!     }
//! }
//! ```

pub mod routes;
pub mod handlers;

pub use routes::configure_routes;
