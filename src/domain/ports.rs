use super::account::BalanceRecord;
use crate::error::Result;
use async_trait::async_trait;

/// The client-facing funds-transfer contract. Consumers depend on this
/// trait only; the concrete bank is chosen at construction time.
#[async_trait]
pub trait WireTransfers: Send + Sync {
    /// Current funds for `account`. Accounts that were never set read
    /// as 0; an unknown account is not an error.
    async fn funds(&self, account: &str) -> Result<u64>;

    /// Unconditionally overwrites the funds of `account`.
    async fn set_funds(&self, account: &str, amount: u64) -> Result<()>;

    /// Atomically moves `amount` from `from` to `to`. Returns
    /// `Ok(false)` without touching either balance when `from` does not
    /// cover `amount`.
    async fn transfer_funds(&self, amount: u64, from: &str, to: &str) -> Result<bool>;

    /// Final state of every materialized account, sorted by account id.
    async fn balances(&self) -> Result<Vec<BalanceRecord>>;
}

pub type WireTransfersBox = Box<dyn WireTransfers>;
pub type WireTransfersFactory = Box<dyn Fn() -> WireTransfersBox + Send + Sync>;
