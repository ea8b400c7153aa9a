//! # Wallet Service
//!
//! The WalletService is the thin resolver between the API layer and the
//! store. It maps a symbolic operation kind plus an amount onto the right
//! store transition and surfaces the store's error taxonomy unchanged.
//! It never retries and holds no locks itself — all atomicity lives in
//! the store.
//!
//! ## Flow Example: Balance Change
//!
//! ```text
//! 1. Handler receives { walletId, operationType, amount }
//!                ↓
//! 2. WalletService.change_balance() parses the operation kind
//!                ↓
//! 3. DEPOSIT -> store.deposit / WITHDRAW -> store.withdraw / SET -> store.set_balance
//!                ↓
//! 4. (old_balance, new_balance, wallet) returned to the handler
//! ```

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::db::WalletRecord;
use super::wallet_store::{BalanceChange, BalanceStore, WalletError};

/// The closed set of balance operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletOperation {
    /// Increase the balance.
    Deposit,
    /// Decrease the balance, rejecting overdrafts.
    Withdraw,
    /// Replace the balance outright.
    Set,
}

impl WalletOperation {
    /// Parse an operation kind from its wire symbol.
    ///
    /// Any unrecognized symbol fails with `UnknownOperation` — before the
    /// store is ever touched.
    pub fn parse(symbol: &str) -> Result<Self, WalletError> {
        match symbol {
            "DEPOSIT" => Ok(Self::Deposit),
            "WITHDRAW" => Ok(Self::Withdraw),
            "SET" => Ok(Self::Set),
            other => Err(WalletError::UnknownOperation(other.to_string())),
        }
    }

    /// The wire symbol for this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdraw => "WITHDRAW",
            Self::Set => "SET",
        }
    }
}

/// Stateless service dispatching wallet operations to the store.
///
/// Safe to clone and share across concurrent request handlers: the only
/// state is the store handle.
///
/// ## Usage
///
/// ```rust,ignore
/// let service = WalletService::new(Arc::new(store));
///
/// let wallet = service.create_wallet(100.0).await?;
/// let change = service.change_balance(wallet.id, "DEPOSIT", 50.0).await?;
/// assert_eq!(change.new_balance, 150.0);
/// ```
#[derive(Clone)]
pub struct WalletService {
    /// The backing store. All reads and mutations go through here.
    store: Arc<dyn BalanceStore>,
}

impl WalletService {
    /// Create a new WalletService over the given store.
    pub fn new(store: Arc<dyn BalanceStore>) -> Self {
        Self { store }
    }

    /// Create a wallet with the given initial balance.
    pub async fn create_wallet(&self, initial_balance: f64) -> Result<WalletRecord, WalletError> {
        self.store.create(initial_balance).await
    }

    /// Fetch a wallet by id.
    pub async fn get_wallet(&self, id: Uuid) -> Result<WalletRecord, WalletError> {
        self.store.get_by_id(id).await
    }

    /// Fetch all wallets.
    pub async fn list_wallets(&self) -> Result<Vec<WalletRecord>, WalletError> {
        self.store.list().await
    }

    /// Delete a wallet.
    pub async fn delete_wallet(&self, id: Uuid) -> Result<(), WalletError> {
        self.store.delete(id).await
    }

    /// Apply a balance operation to a wallet.
    ///
    /// `DEPOSIT` credits, `WITHDRAW` debits, `SET` replaces. Any other
    /// symbol fails with `UnknownOperation` without a store call.
    pub async fn change_balance(
        &self,
        id: Uuid,
        operation: &str,
        amount: f64,
    ) -> Result<BalanceChange, WalletError> {
        let op = WalletOperation::parse(operation)?;
        debug!("Resolved operation {} for wallet {}", op.as_str(), id);

        match op {
            WalletOperation::Deposit => self.store.deposit(id, amount).await,
            WalletOperation::Withdraw => self.store.withdraw(id, amount).await,
            WalletOperation::Set => self.store.set_balance(id, amount).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::services::wallet_store::{check_amount, check_sufficient};

    /// In-memory store double with the same transition semantics as the
    /// PostgreSQL store, counting mutating calls.
    #[derive(Default)]
    struct MemoryStore {
        wallets: Mutex<HashMap<Uuid, WalletRecord>>,
        mutations: AtomicUsize,
    }

    impl MemoryStore {
        fn mutate(
            &self,
            id: Uuid,
            f: impl FnOnce(f64) -> Result<f64, WalletError>,
        ) -> Result<BalanceChange, WalletError> {
            self.mutations.fetch_add(1, Ordering::SeqCst);
            let mut wallets = self.wallets.lock().unwrap();
            let wallet = wallets.get_mut(&id).ok_or(WalletError::WalletNotFound(id))?;

            let old_balance = wallet.balance;
            let new_balance = f(old_balance)?;
            wallet.balance = new_balance;
            wallet.updated_at = Utc::now();

            Ok(BalanceChange {
                old_balance,
                new_balance,
                wallet: wallet.clone(),
            })
        }
    }

    #[async_trait]
    impl BalanceStore for MemoryStore {
        async fn create(&self, initial_balance: f64) -> Result<WalletRecord, WalletError> {
            check_amount(initial_balance)?;
            let now = Utc::now();
            let wallet = WalletRecord {
                id: Uuid::new_v4(),
                balance: initial_balance,
                created_at: now,
                updated_at: now,
            };
            self.wallets.lock().unwrap().insert(wallet.id, wallet.clone());
            Ok(wallet)
        }

        async fn get_by_id(&self, id: Uuid) -> Result<WalletRecord, WalletError> {
            self.wallets.lock().unwrap()
                .get(&id)
                .cloned()
                .ok_or(WalletError::WalletNotFound(id))
        }

        async fn list(&self) -> Result<Vec<WalletRecord>, WalletError> {
            let mut wallets: Vec<_> = self.wallets.lock().unwrap().values().cloned().collect();
            wallets.sort_by_key(|w| (w.created_at, w.id));
            Ok(wallets)
        }

        async fn delete(&self, id: Uuid) -> Result<(), WalletError> {
            self.mutations.fetch_add(1, Ordering::SeqCst);
            self.wallets.lock().unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(WalletError::WalletNotFound(id))
        }

        async fn deposit(&self, id: Uuid, amount: f64) -> Result<BalanceChange, WalletError> {
            check_amount(amount)?;
            self.mutate(id, |balance| Ok(balance + amount))
        }

        async fn withdraw(&self, id: Uuid, amount: f64) -> Result<BalanceChange, WalletError> {
            check_amount(amount)?;
            self.mutate(id, |balance| {
                check_sufficient(balance, amount)?;
                Ok(balance - amount)
            })
        }

        async fn set_balance(&self, id: Uuid, new_balance: f64) -> Result<BalanceChange, WalletError> {
            check_amount(new_balance)?;
            self.mutate(id, |_| Ok(new_balance))
        }
    }

    fn service() -> (WalletService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (WalletService::new(store.clone()), store)
    }

    #[test]
    fn parse_known_operations() {
        assert_eq!(WalletOperation::parse("DEPOSIT").unwrap(), WalletOperation::Deposit);
        assert_eq!(WalletOperation::parse("WITHDRAW").unwrap(), WalletOperation::Withdraw);
        assert_eq!(WalletOperation::parse("SET").unwrap(), WalletOperation::Set);
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        for symbol in ["BOGUS", "deposit", "", "TRANSFER"] {
            let err = WalletOperation::parse(symbol).unwrap_err();
            assert!(matches!(err, WalletError::UnknownOperation(_)), "symbol: {symbol:?}");
        }
    }

    #[tokio::test]
    async fn unknown_operation_does_not_touch_store() {
        let (service, store) = service();
        let wallet = service.create_wallet(100.0).await.unwrap();

        let err = service.change_balance(wallet.id, "BOGUS", 100.0).await.unwrap_err();
        assert!(matches!(err, WalletError::UnknownOperation(_)));
        assert_eq!(store.mutations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn deposit_credits_and_withdraw_debits() {
        // Pins the operation direction: DEPOSIT must credit the balance
        // and WITHDRAW must debit it, never the other way around.
        let (service, _) = service();
        let wallet = service.create_wallet(100.0).await.unwrap();

        let change = service.change_balance(wallet.id, "DEPOSIT", 50.0).await.unwrap();
        assert_eq!(change.old_balance, 100.0);
        assert_eq!(change.new_balance, 150.0);

        let change = service.change_balance(wallet.id, "WITHDRAW", 60.0).await.unwrap();
        assert_eq!(change.old_balance, 150.0);
        assert_eq!(change.new_balance, 90.0);
    }

    #[tokio::test]
    async fn overdraw_fails_and_preserves_balance() {
        let (service, _) = service();
        let wallet = service.create_wallet(100.0).await.unwrap();

        service.change_balance(wallet.id, "DEPOSIT", 50.0).await.unwrap();
        service.change_balance(wallet.id, "WITHDRAW", 60.0).await.unwrap();

        let err = service.change_balance(wallet.id, "WITHDRAW", 1000.0).await.unwrap_err();
        assert!(matches!(err, WalletError::InsufficientFunds { .. }));

        let wallet = service.get_wallet(wallet.id).await.unwrap();
        assert_eq!(wallet.balance, 90.0);
    }

    #[tokio::test]
    async fn set_replaces_balance() {
        let (service, _) = service();
        let wallet = service.create_wallet(75.0).await.unwrap();

        let change = service.change_balance(wallet.id, "SET", 10.0).await.unwrap();
        assert_eq!(change.old_balance, 75.0);
        assert_eq!(change.new_balance, 10.0);
    }

    #[tokio::test]
    async fn create_rejects_negative_initial_balance() {
        let (service, _) = service();

        let err = service.create_wallet(-1.0).await.unwrap_err();
        assert!(matches!(err, WalletError::InvalidAmount(_)));
        assert!(service.list_wallets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_then_get_fails() {
        let (service, _) = service();
        let wallet = service.create_wallet(5.0).await.unwrap();

        service.delete_wallet(wallet.id).await.unwrap();

        let err = service.get_wallet(wallet.id).await.unwrap_err();
        assert!(matches!(err, WalletError::WalletNotFound(_)));
    }
}
