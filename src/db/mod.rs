//! # Database Module
//!
//! This module handles all database plumbing for the wallet backend.
//! We use PostgreSQL as the single durable store: one row per wallet,
//! keyed by id.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      DATABASE LAYER                              │
//! │                                                                  │
//! │  ┌──────────────────────────────────────────────────────────┐   │
//! │  │                   Connection Pool                         │   │
//! │  │                  (deadpool-postgres)                      │   │
//! │  └──────────────────────────────────────────────────────────┘   │
//! │                              │                                   │
//! │                              ▼                                   │
//! │                       ┌────────────┐                             │
//! │                       │  wallets   │                             │
//! │                       │   table    │                             │
//! │                       └────────────┘                             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod models;
pub mod queries;

use deadpool_postgres::{Config, Pool, Runtime};
use tokio_postgres::{NoTls, Config as TokioConfig};
use thiserror::Error;
use tracing::{info, warn};

/// Database-related errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to connect to the database
    #[error("Database connection failed: {0}")]
    ConnectionError(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryError(#[from] tokio_postgres::Error),

    /// Migration failed
    #[error("Migration failed: {0}")]
    MigrationError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

/// Database connection wrapper.
///
/// This struct wraps the connection pool and provides
/// methods for common database operations.
///
/// ## Usage
///
/// ```rust,ignore
/// let db = Database::connect("postgres://...").await?;
/// let wallet = queries::get_wallet_by_id(db.pool(), id).await?;
/// ```
#[derive(Clone)]
pub struct Database {
    /// The connection pool
    pool: Pool,
}

impl Database {
    /// Connect to the PostgreSQL database.
    ///
    /// Creates a connection pool with sensible defaults:
    /// - Max 10 connections
    ///
    /// ## Arguments
    ///
    /// * `database_url` - PostgreSQL connection string
    ///
    /// ## Returns
    ///
    /// * `Ok(Database)` - Connected successfully
    /// * `Err(DatabaseError)` - Connection failed
    pub async fn connect(database_url: &str) -> Result<Self, DatabaseError> {
        info!("Connecting to database...");

        // Parse the connection string using tokio_postgres::Config
        let tokio_config = database_url.parse::<TokioConfig>()
            .map_err(|e| DatabaseError::ConfigError(format!("Invalid database URL: {}", e)))?;

        // Convert to deadpool config
        let mut config = Config::new();

        if let Some(dbname) = tokio_config.get_dbname() {
            config.dbname = Some(dbname.to_string());
        }
        if let Some(user) = tokio_config.get_user() {
            config.user = Some(user.to_string());
        }
        if let Some(password) = tokio_config.get_password() {
            // Password is &[u8], convert to String
            config.password = Some(String::from_utf8_lossy(password).to_string());
        }
        if let Some(host) = tokio_config.get_hosts().first() {
            if let tokio_postgres::config::Host::Tcp(host_str) = host {
                config.host = Some(host_str.clone());
            }
        }
        if let Some(port) = tokio_config.get_ports().first() {
            config.port = Some(*port);
        }

        // Set pool size
        config.pool = Some(deadpool_postgres::PoolConfig {
            max_size: 10,
            ..Default::default()
        });

        // Create pool
        let pool = config
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

        // Test connection
        let client = pool.get().await
            .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

        // Simple query to verify connection
        client.query("SELECT 1", &[]).await
            .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

        info!("Database connection established");

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// Migrations are SQL scripts that set up and update the database schema.
    /// The schema uses `IF NOT EXISTS` guards, so re-running is harmless.
    ///
    /// ## Migration Files
    ///
    /// Located in `migrations/` directory:
    /// ```text
    /// migrations/
    /// └── 001_initial_schema.sql
    /// ```
    pub async fn run_migrations(&self) -> Result<(), DatabaseError> {
        info!("Running database migrations...");

        let client = self.pool.get().await
            .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

        // Read migration file (try multiple possible paths)
        let migration_paths = [
            "migrations/001_initial_schema.sql",
            "../migrations/001_initial_schema.sql",
        ];

        let mut migration_sql = None;
        for path in &migration_paths {
            if let Ok(content) = std::fs::read_to_string(path) {
                info!("Found migration file at: {}", path);
                migration_sql = Some(content);
                break;
            }
        }

        let migration_sql = migration_sql.ok_or_else(|| {
            DatabaseError::MigrationError(format!(
                "Could not find migration file. Tried paths: {:?}",
                migration_paths
            ))
        })?;

        // Execute the entire SQL file as one batch
        match client.batch_execute(&migration_sql).await {
            Ok(_) => {
                info!("Migrations completed successfully");
                Ok(())
            }
            Err(e) => {
                // 42P07 = duplicate_table, 42710 = duplicate_object
                let is_duplicate = e.code()
                    .map(|code| code.code() == "42P07" || code.code() == "42710")
                    .unwrap_or(false);

                if is_duplicate {
                    warn!("Some database objects already exist. This is OK if migrations were run before.");
                    Ok(())
                } else {
                    Err(DatabaseError::MigrationError(e.to_string()))
                }
            }
        }
    }

    /// Get a reference to the connection pool.
    ///
    /// Use this when you need direct access to the pool
    /// for custom queries.
    pub fn pool(&self) -> &Pool {
        &self.pool
    }
}

// Re-export commonly used items
pub use models::*;
