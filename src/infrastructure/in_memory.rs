use crate::domain::account::{BalanceRecord, BalanceTable};
use crate::domain::ports::WireTransfers;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The default in-memory bank.
///
/// A single `RwLock` guards the whole balance table, so the
/// check-then-move inside `transfer_funds` runs under one write guard
/// and concurrent transfers from the same account cannot both pass the
/// sufficiency check. `Clone` shares the underlying table.
#[derive(Default, Clone)]
pub struct InMemoryBank {
    table: Arc<RwLock<BalanceTable>>,
}

impl InMemoryBank {
    /// Creates a new, empty in-memory bank.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WireTransfers for InMemoryBank {
    async fn funds(&self, account: &str) -> Result<u64> {
        Ok(self.table.read().await.funds(account))
    }

    async fn set_funds(&self, account: &str, amount: u64) -> Result<()> {
        self.table.write().await.set_funds(account, amount);
        Ok(())
    }

    async fn transfer_funds(&self, amount: u64, from: &str, to: &str) -> Result<bool> {
        Ok(self.table.write().await.transfer_funds(amount, from, to))
    }

    async fn balances(&self) -> Result<Vec<BalanceRecord>> {
        Ok(self.table.read().await.records())
    }
}
