//! # API Route Configuration
//!
//! This module sets up all the HTTP routes for the API.

use actix_web::web;

use super::handlers;

/// Configure all API routes.
///
/// This function is called from main.rs to set up
/// all the endpoint routes.
///
/// ## Route Structure
///
/// ```text
/// /
/// ├── /health              GET - Health check
/// └── /wallets
///     ├── ""               POST - Create wallet
///     ├── ""               GET - List wallets
///     ├── /operation       POST - Deposit / withdraw / set balance
///     └── /{id}            GET - Get wallet
///                          DELETE - Delete wallet
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Root endpoint - API information
        .route("/", web::get().to(handlers::api_info))

        // Health check endpoint
        .route("/health", web::get().to(handlers::health_check))

        // Wallet endpoints
        .service(
            web::scope("/wallets")
                // Create a new wallet
                .route("", web::post().to(handlers::create_wallet))

                // List all wallets
                .route("", web::get().to(handlers::list_wallets))

                // Apply a balance operation (DEPOSIT / WITHDRAW / SET)
                // Registered before /{id} so "operation" is not parsed as an id
                .route("/operation", web::post().to(handlers::change_balance))

                // Get a wallet by id
                .route("/{id}", web::get().to(handlers::get_wallet))

                // Delete a wallet
                .route("/{id}", web::delete().to(handlers::delete_wallet))
        );
}
