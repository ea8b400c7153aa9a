//! # Services Module
//!
//! This module contains the core business logic for the wallet backend.
//!
//! ## Services Overview
//!
//! | Service | Responsibility |
//! |---------|---------------|
//! | `WalletStore` | Durable, race-free CRUD and balance transitions |
//! | `WalletService` | Operation-kind dispatch, error taxonomy |
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        SERVICES LAYER                            │
//! │                                                                  │
//! │  ┌──────────────────────────────────────────────────────────┐   │
//! │  │                    WalletService                          │   │
//! │  │  • create_wallet()  • change_balance()  • get_wallet()    │   │
//! │  │  • list_wallets()   • delete_wallet()                     │   │
//! │  └──────────────────────────────────────────────────────────┘   │
//! │                              │                                   │
//! │                              ▼  (dyn BalanceStore)               │
//! │                      ┌──────────────┐                            │
//! │                      │ WalletStore  │                            │
//! │                      │              │                            │
//! │                      │ Row-locked   │                            │
//! │                      │ transitions  │                            │
//! │                      └──────────────┘                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod wallet_store;
pub mod wallet_service;

pub use wallet_store::{BalanceChange, BalanceStore, WalletError, WalletStore};
pub use wallet_service::{WalletOperation, WalletService};
