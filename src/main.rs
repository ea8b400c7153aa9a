//! # Wallet Backend Service
//!
//! This is the main entry point for the wallet management backend.
//! It provides:
//!
//! - REST API for wallet operations (create, deposit, withdraw, balance queries)
//! - PostgreSQL storage with per-wallet row locking for atomic balance updates
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        BACKEND SERVICE                           │
//! │                                                                  │
//! │  ┌──────────────────────────────────────────────────────────┐   │
//! │  │                     REST API (Actix)                      │   │
//! │  │   /wallets   /wallets/{id}   /wallets/operation           │   │
//! │  └──────────────────────────────────────────────────────────┘   │
//! │                              │                                   │
//! │  ┌───────────────────────────┴───────────────────────────────┐  │
//! │  │                      SERVICE LAYER                         │  │
//! │  │   ┌───────────────┐            ┌───────────────┐          │  │
//! │  │   │ WalletService │───────────▶│  WalletStore  │          │  │
//! │  │   │  (resolver)   │            │ (atomic RMW)  │          │  │
//! │  │   └───────────────┘            └───────────────┘          │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │                              │                                   │
//! │                       ┌──────┴──────┐                           │
//! │                       │  PostgreSQL │                           │
//! │                       │  Database   │                           │
//! │                       └─────────────┘                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! 1. Set up PostgreSQL and create the database
//! 2. Copy `.env.example` to `.env` and configure
//! 3. Start the server: `cargo run`
//!
//! ## Environment Variables
//!
//! See `src/config/mod.rs` for all settings.

use std::sync::Arc;
use actix_web::{web, App, HttpServer, middleware};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod api;
mod config;
mod db;
mod models;
mod services;

use config::AppConfig;
use db::Database;
use services::{WalletService, WalletStore};

/// Application state shared across all handlers.
///
/// ## Why Arc?
/// `Arc` (Atomic Reference Counting) allows us to share ownership
/// of these resources across multiple worker threads safely.
pub struct AppState {
    /// Database connection pool for PostgreSQL
    pub db: Database,

    /// Wallet operation service
    pub wallet_service: WalletService,
}

/// Main entry point for the backend service.
///
/// This function:
/// 1. Loads configuration from environment
/// 2. Initializes database connection and runs migrations
/// 3. Wires up the wallet store and service
/// 4. Launches the HTTP server
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // =========================================
    // STEP 1: Initialize Logging
    // =========================================
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Wallet Backend Service");

    // =========================================
    // STEP 2: Load Configuration
    // =========================================
    dotenvy::dotenv().ok(); // It's okay if .env doesn't exist

    let config = AppConfig::from_env()
        .expect("Failed to load configuration");

    info!("📋 Configuration loaded");
    info!("   Server: {}:{}", config.server_host, config.server_port);

    // =========================================
    // STEP 3: Initialize Database
    // =========================================
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    info!("🗄️  Database connected");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    info!("📦 Database migrations complete");

    // =========================================
    // STEP 4: Initialize Services
    // =========================================
    let store = WalletStore::new(db.clone());
    let wallet_service = WalletService::new(Arc::new(store));

    info!("🔧 Services initialized");

    // =========================================
    // STEP 5: Create Application State
    // =========================================
    let app_state = Arc::new(AppState {
        db: db.clone(),
        wallet_service,
    });

    // =========================================
    // STEP 6: Start HTTP Server
    // =========================================
    let server_host = config.server_host.clone();
    let server_port = config.server_port;

    info!("🌐 Starting HTTP server on {}:{}", server_host, server_port);

    HttpServer::new(move || {
        App::new()
            // Attach shared application state
            .app_data(web::Data::new(app_state.clone()))

            // Add logging middleware
            .wrap(middleware::Logger::default())

            // Configure API routes
            .configure(api::configure_routes)
    })
    .bind(format!("{}:{}", server_host, server_port))?
    .run()
    .await
}
